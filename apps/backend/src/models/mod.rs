//! Database models and API types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

// Re-export shared types from recall-core
pub use recall_core::{Feedback, ResultsSummary, WordEntry, WordList};

// === Database Entity Types ===

/// Registered user
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    #[serde(skip_serializing)]
    pub token_hash: String,
    pub created_at: DateTime<Utc>,
    pub last_seen_at: DateTime<Utc>,
}

/// Word list row in PostgreSQL
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbWordList {
    pub id: Uuid,
    pub name: String,
    pub owner_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DbWordList {
    /// Combine with its word rows into a core WordList
    pub fn into_core(self, words: Vec<DbWord>) -> WordList {
        WordList {
            id: self.id,
            name: self.name,
            owner_id: self.owner_id,
            entries: words.into_iter().map(DbWord::into_entry).collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Word row in PostgreSQL
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbWord {
    pub id: Uuid,
    pub word_list_id: Uuid,
    pub position: i32,
    pub word: String,
    pub definition: Option<String>,
}

impl DbWord {
    pub fn into_entry(self) -> WordEntry {
        WordEntry {
            word: self.word,
            definition: self.definition,
        }
    }
}

/// Word list with owner name and word count, for the list index
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WordListInfo {
    pub id: Uuid,
    pub name: String,
    pub owner_id: Uuid,
    pub owner_name: String,
    pub word_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// === API Request/Response Types ===

#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterUserRequest {
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterUserResponse {
    pub user_id: Uuid,
    pub token: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UserStatusResponse {
    pub user_id: Uuid,
    pub name: String,
    pub last_seen_at: DateTime<Utc>,
}

/// Body for creating or replacing a list
#[derive(Debug, Serialize, Deserialize)]
pub struct WordListRequest {
    pub name: String,
    pub words_text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WordListIndexResponse {
    pub lists: Vec<WordListInfo>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WordListResponse {
    pub id: Uuid,
    pub name: String,
    pub owner_id: Uuid,
    pub owner_name: String,
    pub words: Vec<WordEntry>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl WordListResponse {
    pub fn new(list: WordList, owner_name: String) -> Self {
        Self {
            id: list.id,
            name: list.name,
            owner_id: list.owner_id,
            owner_name,
            words: list.entries,
            created_at: list.created_at,
            updated_at: list.updated_at,
        }
    }
}

/// Editable text form of a list
#[derive(Debug, Serialize, Deserialize)]
pub struct WordListTextResponse {
    pub name: String,
    pub words_text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StartSessionResponse {
    pub session_id: Uuid,
    pub list_id: Uuid,
    pub list_name: String,
    pub total_words: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitRequest {
    pub input: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub feedback: Option<Feedback>,
    pub remembered_count: usize,
    pub total_words: usize,
    pub progress_percent: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ResultsResponse {
    pub results: ResultsSummary,
    pub score: u32,
}

impl ResultsResponse {
    pub fn new(results: ResultsSummary) -> Self {
        let score = results.score();
        Self { results, score }
    }
}
