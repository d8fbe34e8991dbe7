use crate::config::AudioConfig;
use std::path::PathBuf;

/// The two filenames a clip for `key` may be stored under: the lowercased
/// key as-is, and the lowercased key without punctuation, spaces turned
/// into underscores.
pub fn candidate_filenames(key: &str) -> [String; 2] {
    let lowered = key.trim().to_lowercase();
    let underscored: String = lowered
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect::<String>()
        .replace(' ', "_");
    [format!("{lowered}.wav"), format!("{underscored}.wav")]
}

/// Finds audio clips for matched keys under a root directory of
/// category folders.
#[derive(Debug, Clone)]
pub struct AudioLibrary {
    root: PathBuf,
    folders: Vec<String>,
    url_prefix: String,
}

impl AudioLibrary {
    pub fn new(root: impl Into<PathBuf>, folders: Vec<String>, url_prefix: &str) -> Self {
        Self {
            root: root.into(),
            folders,
            url_prefix: url_prefix.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &AudioConfig) -> Self {
        Self::new(config.root.clone(), config.folders.clone(), &config.url_prefix)
    }

    /// URL of the first clip found, probing `category_folder` (the folder
    /// the key's category declares) first, then the configured folders in
    /// order, and both filename spellings within each folder.
    pub fn resolve(&self, key: &str, category_folder: Option<&str>) -> Option<String> {
        let names = candidate_filenames(key);
        let folders = category_folder.into_iter().chain(
            self.folders
                .iter()
                .map(String::as_str)
                .filter(|folder| Some(*folder) != category_folder),
        );
        for folder in folders {
            for name in &names {
                if self.root.join(folder).join(name).is_file() {
                    log::debug!("audio for {key:?}: {folder}/{name}");
                    return Some(format!("{}/{}/{}", self.url_prefix, folder, name));
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn library(root: &std::path::Path) -> AudioLibrary {
        AudioLibrary::new(
            root,
            vec!["Family_Members".to_string(), "Greetings".to_string()],
            "/audio/",
        )
    }

    #[test]
    fn test_candidate_filenames() {
        assert_eq!(
            candidate_filenames("What is your name?"),
            ["what is your name?.wav".to_string(), "what_is_your_name.wav".to_string()]
        );
        assert_eq!(
            candidate_filenames(" Mother "),
            ["mother.wav".to_string(), "mother.wav".to_string()]
        );
        assert_eq!(candidate_filenames("I'm leaving")[1], "im_leaving.wav");
    }

    #[test]
    fn test_resolve_finds_underscored_name() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("Greetings")).unwrap();
        fs::write(dir.path().join("Greetings").join("good_morning.wav"), b"RIFF").unwrap();

        let url = library(dir.path()).resolve("Good morning", None);
        assert_eq!(url.as_deref(), Some("/audio/Greetings/good_morning.wav"));
    }

    #[test]
    fn test_resolve_respects_folder_order() {
        let dir = tempfile::tempdir().unwrap();
        for folder in ["Family_Members", "Greetings"] {
            fs::create_dir_all(dir.path().join(folder)).unwrap();
            fs::write(dir.path().join(folder).join("mother.wav"), b"RIFF").unwrap();
        }
        let url = library(dir.path()).resolve("Mother", None);
        assert_eq!(url.as_deref(), Some("/audio/Family_Members/mother.wav"));
    }

    #[test]
    fn test_category_folder_checked_first() {
        let dir = tempfile::tempdir().unwrap();
        for folder in ["Family_Members", "Colors"] {
            fs::create_dir_all(dir.path().join(folder)).unwrap();
            fs::write(dir.path().join(folder).join("red.wav"), b"RIFF").unwrap();
        }
        let lib = library(dir.path());
        assert_eq!(lib.resolve("Red", Some("Colors")).as_deref(), Some("/audio/Colors/red.wav"));
        assert_eq!(lib.resolve("Red", None).as_deref(), Some("/audio/Family_Members/red.wav"));
        // A declared folder without the clip falls back to the configured ones.
        assert_eq!(
            lib.resolve("Red", Some("Animals")).as_deref(),
            Some("/audio/Family_Members/red.wav")
        );
    }

    #[test]
    fn test_resolve_missing() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(library(dir.path()).resolve("Dog", None), None);
    }
}
