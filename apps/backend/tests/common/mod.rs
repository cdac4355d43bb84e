//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext for setting up test environment with database
//! - Helpers for registering users and creating lists
//!
//! # Requirements
//! Integration tests require a PostgreSQL database (set DATABASE_URL env var).

#![allow(dead_code)]

pub mod fixtures;

use std::sync::Arc;

use axum::http::{header::AUTHORIZATION, HeaderName, HeaderValue};
use axum::Router;
use uuid::Uuid;

use recall_core::ListDraft;
use word_recall_backend::db::Database;
use word_recall_backend::services::auth::{generate_token, hash_token};
use word_recall_backend::services::sessions::DEFAULT_IDLE_TIMEOUT;
use word_recall_backend::{router, AppState};

/// Test context containing database connection and router.
pub struct TestContext {
    pub db: Arc<Database>,
    app: Router,
}

impl TestContext {
    /// Create a new test context.
    ///
    /// # Panics
    /// Panics if DATABASE_URL is not set or database connection fails.
    pub async fn new() -> Self {
        Self::with_text_limit(64 * 1024).await
    }

    /// Create a test context with a custom pasted-text limit.
    pub async fn with_text_limit(max_words_text_bytes: usize) -> Self {
        dotenvy::dotenv().ok();

        let database_url =
            std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for integration tests");

        let db = Database::connect(&database_url, 5)
            .await
            .expect("Failed to connect to test database");

        db.run_migrations()
            .await
            .expect("Failed to run migrations");

        let db = Arc::new(db);
        let app = router(AppState::new(
            db.clone(),
            max_words_text_bytes,
            DEFAULT_IDLE_TIMEOUT,
        ));

        Self { db, app }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Create a test user and return its ID and token.
    pub async fn create_test_user(&self, name: &str) -> (Uuid, String) {
        let token = generate_token();
        let user = self
            .db
            .create_user(name, &hash_token(&token))
            .await
            .expect("Failed to create test user");
        (user.id, token)
    }

    /// Create a list directly in the database.
    pub async fn create_test_list(&self, owner_id: Uuid, name: &str, words_text: &str) -> Uuid {
        let draft = ListDraft::new(name, words_text).expect("Invalid test list");
        self.db
            .create_word_list(owner_id, &draft)
            .await
            .expect("Failed to create test list")
            .id
    }

    /// Authorization header for a token.
    pub fn auth_header(token: &str) -> (HeaderName, HeaderValue) {
        (
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token)).expect("Invalid token"),
        )
    }

    /// Clean up test data for a user; lists and words cascade.
    pub async fn cleanup_user(&self, user_id: Uuid) {
        let _ = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(user_id)
            .execute(self.db.pool())
            .await;
    }
}
