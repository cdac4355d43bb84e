//! Free-recall study sessions.
//!
//! A session snapshots the target words of a list when it starts, classifies every
//! submission as a success, an error, or a duplicate, and finally derives a
//! [`ResultsSummary`].

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;
use crate::parser::trim_blank;
use crate::results::ResultsSummary;
use crate::types::{WordEntry, WordList};

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Active,
    Completed,
}

/// Immediate feedback for one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Feedback {
    /// The word is in the list and was not remembered before.
    Success {
        word: String,
        definition: Option<String>,
    },
    /// The word is not in the list.
    Error { word: String },
    /// The word was already remembered earlier in this session.
    Duplicate { word: String },
}

impl Feedback {
    pub fn word(&self) -> &str {
        match self {
            Self::Success { word, .. } | Self::Error { word } | Self::Duplicate { word } => word,
        }
    }
}

/// One interactive recall pass over a fixed set of target words.
#[derive(Debug, Clone)]
pub struct StudySession {
    list_name: String,
    status: SessionStatus,
    /// Upper-cased word -> definition.
    targets: HashMap<String, Option<String>>,
    /// Distinct target words in first-appearance order.
    target_order: Vec<String>,
    remembered: Vec<WordEntry>,
    remembered_words: HashSet<String>,
    incorrect: Vec<String>,
    incorrect_words: HashSet<String>,
}

impl StudySession {
    /// Start a session over the given entries.
    ///
    /// Repeated words collapse into one target; the last definition given for a word wins.
    pub fn new(
        list_name: impl Into<String>,
        entries: &[WordEntry],
    ) -> Result<Self, ConfigurationError> {
        let mut targets = HashMap::with_capacity(entries.len());
        let mut target_order = Vec::with_capacity(entries.len());

        for entry in entries {
            let word = normalize(&entry.word);
            if word.is_empty() {
                continue;
            }
            if targets.insert(word.clone(), entry.definition.clone()).is_none() {
                target_order.push(word);
            }
        }

        if targets.is_empty() {
            return Err(ConfigurationError::EmptyTargetSet);
        }

        Ok(Self {
            list_name: list_name.into(),
            status: SessionStatus::Active,
            targets,
            target_order,
            remembered: Vec::new(),
            remembered_words: HashSet::new(),
            incorrect: Vec::new(),
            incorrect_words: HashSet::new(),
        })
    }

    /// Start a session over a loaded word list.
    pub fn from_list(list: &WordList) -> Result<Self, ConfigurationError> {
        Self::new(list.name.clone(), &list.entries)
    }

    /// Classify one raw submission and update the session.
    ///
    /// Returns `None` for blank input and once the session has completed.
    pub fn submit(&mut self, raw_input: &str) -> Option<Feedback> {
        if self.status == SessionStatus::Completed {
            return None;
        }

        let word = normalize(raw_input);
        if word.is_empty() {
            return None;
        }

        if self.remembered_words.contains(&word) {
            return Some(Feedback::Duplicate { word });
        }

        match self.targets.get(&word) {
            Some(definition) => {
                let definition = definition.clone();
                self.remembered_words.insert(word.clone());
                self.remembered.push(WordEntry {
                    word: word.clone(),
                    definition: definition.clone(),
                });
                Some(Feedback::Success { word, definition })
            }
            None => {
                if self.incorrect_words.insert(word.clone()) {
                    self.incorrect.push(word.clone());
                }
                Some(Feedback::Error { word })
            }
        }
    }

    /// Complete the session and summarize it.
    ///
    /// Calling this again recomputes the same summary.
    pub fn finish(&mut self) -> ResultsSummary {
        self.status = SessionStatus::Completed;
        self.summary()
    }

    /// Summarize the current state without completing the session.
    pub fn summary(&self) -> ResultsSummary {
        let missed = self
            .target_order
            .iter()
            .filter(|word| !self.remembered_words.contains(*word))
            .map(|word| WordEntry {
                word: word.clone(),
                definition: self.targets.get(word).cloned().flatten(),
            })
            .collect();

        ResultsSummary {
            list_name: self.list_name.clone(),
            total_words: self.total_words(),
            remembered: self.remembered.clone(),
            missed,
            incorrect: self.incorrect.clone(),
        }
    }

    pub fn list_name(&self) -> &str {
        &self.list_name
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn total_words(&self) -> usize {
        self.targets.len()
    }

    pub fn remembered_count(&self) -> usize {
        self.remembered.len()
    }

    /// Remembered entries in the order they were first recalled.
    pub fn remembered(&self) -> &[WordEntry] {
        &self.remembered
    }

    /// Distinct incorrect submissions in first-occurrence order.
    pub fn incorrect_attempts(&self) -> &[String] {
        &self.incorrect
    }

    /// Share of target words remembered so far, from 0.0 to 100.0.
    pub fn progress_percent(&self) -> f64 {
        100.0 * self.remembered.len() as f64 / self.targets.len() as f64
    }
}

fn normalize(input: &str) -> String {
    trim_blank(input).to_uppercase()
}
