// src/lib.rs

pub mod audio;
pub mod c_api;
pub mod chat;
pub mod config;
pub mod core;
pub mod error;
pub mod fuzzy;
pub mod loader;

pub use crate::chat::{ChatReply, ChatService};
pub use crate::core::engine::PhraseMatcher;
pub use crate::core::normalize::normalize;
pub use crate::core::types::{MatchStage, PhraseEntry, TranslationResult};
pub use crate::error::{PhraseError, Result};
