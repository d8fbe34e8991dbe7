use crate::core::table::{PhraseDataset, PhraseTable};
use crate::error::{PhraseError, Result};
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Loads a phrase table from a `.json` or `.toml` file. Matching behaves
/// the same as with the bundled table.
pub fn load_table(path: &Path) -> Result<PhraseTable> {
    let io_error = |source: std::io::Error| PhraseError::Io {
        path: path.to_path_buf(),
        source,
    };

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    let dataset: PhraseDataset = match extension.as_deref() {
        Some("json") => {
            let reader = BufReader::new(File::open(path).map_err(io_error)?);
            serde_json::from_reader(reader)?
        }
        Some("toml") => {
            let content = fs::read_to_string(path).map_err(io_error)?;
            toml::from_str(&content)?
        }
        _ => return Err(PhraseError::UnsupportedFormat(path.to_path_buf())),
    };

    let table = PhraseTable::from_dataset(dataset)?;
    log::info!("loaded {} phrases from {}", table.len(), path.display());
    Ok(table)
}

/// The configured table, or the bundled one.
pub fn load_table_or_bundled(path: Option<&Path>) -> Result<PhraseTable> {
    match path {
        Some(path) => load_table(path),
        None => PhraseTable::bundled(),
    }
}
