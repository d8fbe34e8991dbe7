use crate::audio::AudioLibrary;
use crate::config::AppConfig;
use crate::core::engine::PhraseMatcher;
use crate::core::types::TranslationResult;
use crate::error::Result;
use crate::loader::load_table_or_bundled;
use serde::{Deserialize, Serialize};

pub const EMPTY_MESSAGE_REPLY: &str = "Please send a message.";

/// Messages that end a conversation.
pub const EXIT_COMMANDS: &[&str] = &["bye", "exit", "ty", "thanks", "done", "quit", "stop"];

/// What a chat front end sends back for one user message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
    pub audio_url: Option<String>,
}

/// Translation plus audio lookup for a chat front end.
pub struct ChatService {
    matcher: PhraseMatcher,
    audio: AudioLibrary,
}

impl ChatService {
    pub fn new(matcher: PhraseMatcher, audio: AudioLibrary) -> Self {
        Self { matcher, audio }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let table = load_table_or_bundled(config.dataset.path.as_deref())?;
        let matcher = PhraseMatcher::new(table, config.matcher.clone())?;
        Ok(Self::new(matcher, AudioLibrary::from_config(&config.audio)))
    }

    pub fn matcher(&self) -> &PhraseMatcher {
        &self.matcher
    }

    pub fn translate(&self, message: &str) -> TranslationResult {
        self.matcher.translate(message)
    }

    pub fn reply(&self, message: &str) -> ChatReply {
        let message = message.trim();
        if message.is_empty() {
            return ChatReply {
                response: EMPTY_MESSAGE_REPLY.to_string(),
                audio_url: None,
            };
        }

        let result = self.matcher.translate(message);
        let audio_url = self.audio_for(&result);
        ChatReply {
            response: result.text,
            audio_url,
        }
    }

    /// Audio URL for a matched result.
    pub fn audio_for(&self, result: &TranslationResult) -> Option<String> {
        result
            .matched_key
            .as_deref()
            .and_then(|key| {
                let folder = self.matcher.table().audio_folder_of(key);
                self.audio.resolve(key, folder)
            })
    }

    pub fn is_exit_command(message: &str) -> bool {
        let message = message.trim().to_lowercase();
        EXIT_COMMANDS.contains(&message.as_str())
    }
}
