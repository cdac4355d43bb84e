//! Core types for word lists.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Result, ValidationError};
use crate::parser::{parse, trim_blank};

/// One word plus its optional definition.
///
/// `word` is always upper-cased and free of surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub word: String,
    pub definition: Option<String>,
}

impl WordEntry {
    pub fn new(word: impl Into<String>, definition: Option<&str>) -> Self {
        Self {
            word: word.into(),
            definition: definition.map(str::to_string),
        }
    }
}

/// A named, owned list of word entries.
///
/// Entries are only ever replaced as a whole: editing a list swaps its entire entry set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordList {
    pub id: Uuid,
    pub name: String,
    pub owner_id: Uuid,
    pub entries: Vec<WordEntry>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated input for creating or replacing a word list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListDraft {
    pub name: String,
    pub entries: Vec<WordEntry>,
}

impl ListDraft {
    /// Validate a list name and the pasted words text.
    pub fn new(name: &str, words_text: &str) -> Result<Self> {
        let name = trim_blank(name);
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if trim_blank(words_text).is_empty() {
            return Err(ValidationError::EmptyWordsText);
        }

        let entries = parse(words_text)?;
        Ok(Self {
            name: name.to_string(),
            entries,
        })
    }
}
