//! Core word-list library used by the backend.
//!
//! Provides:
//! - Parser for pasted word lists (`WORD definition...` per line)
//! - Free-recall study sessions with duplicate and incorrect-attempt tracking
//! - Results summaries and scoring
//! - Shared types (WordEntry, WordList, ListDraft)

pub mod error;
pub mod parser;
pub mod results;
pub mod session;
pub mod types;

pub use error::{ConfigurationError, Result, ValidationError};
pub use parser::{parse, to_text};
pub use results::ResultsSummary;
pub use session::{Feedback, SessionStatus, StudySession};
pub use types::{ListDraft, WordEntry, WordList};
