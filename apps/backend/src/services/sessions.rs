//! Registry of in-flight study sessions.
//!
//! Each session snapshots its list when it starts and belongs to the user who started it.
//! A user holds at most one live session per list; starting again replaces it. Sessions
//! idle for longer than the idle timeout are dropped the next time the registry is used.
//! Calls on one session are serialized by the registry lock.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use recall_core::{ResultsSummary, StudySession, WordList};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::{StartSessionResponse, SubmitResponse};

/// Default idle timeout for abandoned sessions.
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(60 * 60);

struct ActiveSession {
    user_id: Uuid,
    list_id: Uuid,
    last_active: Instant,
    session: StudySession,
}

/// A finished session's results and the list they belong to.
#[derive(Debug)]
pub struct FinishedSession {
    pub list_id: Uuid,
    pub results: ResultsSummary,
}

pub struct SessionRegistry {
    sessions: Mutex<HashMap<Uuid, ActiveSession>>,
    idle_timeout: Duration,
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::with_idle_timeout(DEFAULT_IDLE_TIMEOUT)
    }
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_idle_timeout(idle_timeout: Duration) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            idle_timeout,
        }
    }

    /// Start a session over a loaded list, replacing the user's previous session on it
    pub async fn start(&self, user_id: Uuid, list: &WordList) -> Result<StartSessionResponse> {
        let session = StudySession::from_list(list)?;
        let session_id = Uuid::new_v4();

        let response = StartSessionResponse {
            session_id,
            list_id: list.id,
            list_name: session.list_name().to_string(),
            total_words: session.total_words(),
        };

        let mut sessions = self.sessions.lock().await;
        self.prune_idle(&mut sessions);
        sessions.retain(|_, active| !(active.user_id == user_id && active.list_id == list.id));
        sessions.insert(
            session_id,
            ActiveSession {
                user_id,
                list_id: list.id,
                last_active: Instant::now(),
                session,
            },
        );

        Ok(response)
    }

    /// Submit one recall attempt
    pub async fn submit(&self, session_id: Uuid, user_id: Uuid, input: &str) -> Result<SubmitResponse> {
        let mut sessions = self.sessions.lock().await;
        self.prune_idle(&mut sessions);
        let active = owned_session(&mut sessions, session_id, user_id)?;

        active.last_active = Instant::now();
        let feedback = active.session.submit(input);

        Ok(SubmitResponse {
            feedback,
            remembered_count: active.session.remembered_count(),
            total_words: active.session.total_words(),
            progress_percent: active.session.progress_percent(),
        })
    }

    /// Finish a session and remove it from the registry
    pub async fn finish(&self, session_id: Uuid, user_id: Uuid) -> Result<FinishedSession> {
        let mut sessions = self.sessions.lock().await;
        self.prune_idle(&mut sessions);
        owned_session(&mut sessions, session_id, user_id)?;

        let mut active = sessions
            .remove(&session_id)
            .ok_or_else(|| session_not_found(session_id))?;

        Ok(FinishedSession {
            list_id: active.list_id,
            results: active.session.finish(),
        })
    }

    /// Drop a session without finishing it
    pub async fn abandon(&self, session_id: Uuid, user_id: Uuid) -> Result<()> {
        let mut sessions = self.sessions.lock().await;
        owned_session(&mut sessions, session_id, user_id)?;
        sessions.remove(&session_id);
        Ok(())
    }

    pub async fn len(&self) -> usize {
        self.sessions.lock().await.len()
    }

    fn prune_idle(&self, sessions: &mut HashMap<Uuid, ActiveSession>) {
        let before = sessions.len();
        sessions.retain(|_, active| active.last_active.elapsed() < self.idle_timeout);

        let pruned = before - sessions.len();
        if pruned > 0 {
            tracing::debug!(pruned, "Dropped idle study sessions");
        }
    }
}

fn owned_session(
    sessions: &mut HashMap<Uuid, ActiveSession>,
    session_id: Uuid,
    user_id: Uuid,
) -> Result<&mut ActiveSession> {
    match sessions.get_mut(&session_id) {
        Some(active) if active.user_id == user_id => Ok(active),
        _ => Err(session_not_found(session_id)),
    }
}

fn session_not_found(session_id: Uuid) -> ApiError {
    ApiError::NotFound(format!("Study session {} not found", session_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use recall_core::{Feedback, WordEntry};

    fn word_list(entries: Vec<WordEntry>) -> WordList {
        WordList {
            id: Uuid::new_v4(),
            name: "Two letter words".to_string(),
            owner_id: Uuid::new_v4(),
            entries,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn two_letter_list() -> WordList {
        word_list(vec![
            WordEntry::new("AA", Some("a lava")),
            WordEntry::new("AB", Some("a muscle")),
        ])
    }

    #[tokio::test]
    async fn test_start_rejects_empty_list() {
        let registry = SessionRegistry::new();
        let result = registry.start(Uuid::new_v4(), &word_list(vec![])).await;
        assert!(matches!(result, Err(ApiError::Configuration(_))));
        assert_eq!(registry.len().await, 0);
    }

    #[tokio::test]
    async fn test_submit_and_finish() {
        let registry = SessionRegistry::new();
        let user_id = Uuid::new_v4();
        let list = two_letter_list();

        let started = registry.start(user_id, &list).await.unwrap();
        assert_eq!(started.total_words, 2);

        let response = registry.submit(started.session_id, user_id, "aa").await.unwrap();
        assert!(matches!(response.feedback, Some(Feedback::Success { .. })));
        assert_eq!(response.remembered_count, 1);
        assert_eq!(response.progress_percent, 50.0);

        let response = registry.submit(started.session_id, user_id, "  ").await.unwrap();
        assert!(response.feedback.is_none());

        let finished = registry.finish(started.session_id, user_id).await.unwrap();
        assert_eq!(finished.list_id, list.id);
        assert_eq!(finished.results.score(), 50);
        assert_eq!(registry.len().await, 0);
    }

    #[tokio::test]
    async fn test_other_users_cannot_reach_session() {
        let registry = SessionRegistry::new();
        let owner = Uuid::new_v4();
        let started = registry.start(owner, &two_letter_list()).await.unwrap();

        let stranger = Uuid::new_v4();
        let result = registry.submit(started.session_id, stranger, "aa").await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
        let result = registry.finish(started.session_id, stranger).await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
        assert_eq!(registry.len().await, 1);
    }

    #[tokio::test]
    async fn test_abandon_removes_session() {
        let registry = SessionRegistry::new();
        let user_id = Uuid::new_v4();
        let started = registry.start(user_id, &two_letter_list()).await.unwrap();

        registry.abandon(started.session_id, user_id).await.unwrap();

        let result = registry.submit(started.session_id, user_id, "aa").await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_restarting_replaces_previous_session() {
        let registry = SessionRegistry::new();
        let user_id = Uuid::new_v4();
        let list = two_letter_list();

        let mut last = None;
        for _ in 0..1000 {
            last = Some(registry.start(user_id, &list).await.unwrap());
        }
        assert_eq!(registry.len().await, 1);

        let last = last.unwrap();
        let response = registry.submit(last.session_id, user_id, "aa").await.unwrap();
        assert!(matches!(response.feedback, Some(Feedback::Success { .. })));
    }

    #[tokio::test]
    async fn test_restart_keeps_other_users_and_lists() {
        let registry = SessionRegistry::new();
        let user_id = Uuid::new_v4();
        let list = two_letter_list();
        let other_list = two_letter_list();

        let first = registry.start(user_id, &list).await.unwrap();
        registry.start(user_id, &other_list).await.unwrap();
        registry.start(Uuid::new_v4(), &list).await.unwrap();
        assert_eq!(registry.len().await, 3);

        registry.start(user_id, &list).await.unwrap();
        assert_eq!(registry.len().await, 3);
        let result = registry.submit(first.session_id, user_id, "aa").await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_idle_sessions_are_dropped() {
        let registry = SessionRegistry::with_idle_timeout(Duration::ZERO);
        let user_id = Uuid::new_v4();

        let stale = registry.start(user_id, &two_letter_list()).await.unwrap();
        registry.start(user_id, &two_letter_list()).await.unwrap();
        assert_eq!(registry.len().await, 1);

        let result = registry.submit(stale.session_id, user_id, "aa").await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
        assert_eq!(registry.len().await, 0);
    }

    #[tokio::test]
    async fn test_session_ignores_later_list_changes() {
        let registry = SessionRegistry::new();
        let user_id = Uuid::new_v4();
        let mut list = two_letter_list();
        let started = registry.start(user_id, &list).await.unwrap();

        list.entries.push(WordEntry::new("AD", None));

        let response = registry.submit(started.session_id, user_id, "ad").await.unwrap();
        assert!(matches!(response.feedback, Some(Feedback::Error { .. })));
        assert_eq!(response.total_words, 2);
    }
}
