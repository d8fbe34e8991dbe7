use clap::Parser;
use crossterm::style::{style, Stylize};
use phrase_core::config::load_or_default;
use phrase_core::ChatService;
use std::error::Error;
use std::io::{stdin, stdout, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "phrase_bot", about = "English / Filipino / Casiguran Agta phrase translator")]
struct Cli {
    /// Config file (defaults to the user config directory)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Phrase table (JSON or TOML) overriding the configured one
    #[arg(long)]
    phrases: Option<PathBuf>,
    /// Translate one phrase and exit
    #[arg(long)]
    once: Option<String>,
    /// With --once, print the chat reply as JSON
    #[arg(long, requires = "once")]
    json: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = load_or_default(cli.config.as_deref())?;
    if cli.phrases.is_some() {
        config.dataset.path = cli.phrases;
    }
    let service = ChatService::from_config(&config)?;

    if let Some(text) = cli.once {
        if cli.json {
            println!("{}", serde_json::to_string(&service.reply(&text))?);
        } else {
            print_result(&service, &text);
        }
        return Ok(());
    }

    println!("{}", "Casiguran Agta Phrase Bot. Type 'bye' to quit.".bold());
    println!("---------------------------------------------------------------");

    let mut out = stdout();
    print!("{}", "> ".cyan());
    out.flush()?;
    for line in stdin().lock().lines() {
        let input = line?;
        if ChatService::is_exit_command(&input) {
            break;
        }
        print_result(&service, &input);
        print!("\n{}", "> ".cyan());
        out.flush()?;
    }

    println!("\n{}", "Paalam!".green());
    Ok(())
}

fn print_result(service: &ChatService, input: &str) {
    let result = service.translate(input);

    if result.matched_key.is_some() {
        println!("{}", style(&result.text).green());
    } else {
        println!("{}", style(&result.text).yellow());
    }
    if !result.suggestions.is_empty() {
        println!("{} {}", "Did you mean:".dim(), result.suggestions.join(", "));
    }
    if let Some(url) = service.audio_for(&result) {
        println!("{} {}", "Audio:".dim(), url);
    }
}
