//! PostgreSQL database operations

use recall_core::{ListDraft, WordEntry, WordList};
use sqlx::{postgres::PgPoolOptions, PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::*;

/// Database wrapper with connection pool
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Connect to PostgreSQL and create connection pool
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Run database migrations
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| ApiError::Migration(e.to_string()))?;
        Ok(())
    }

    /// Get the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === User Repository ===

    /// Create a new user identified by a hashed token
    pub async fn create_user(&self, name: &str, token_hash: &str) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, name, token_hash)
            VALUES ($1, $2, $3)
            RETURNING id, name, token_hash, created_at, last_seen_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(token_hash)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    /// Get user by token hash
    pub async fn get_user_by_token_hash(&self, token_hash: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, token_hash, created_at, last_seen_at
            FROM users
            WHERE token_hash = $1
            "#,
        )
        .bind(token_hash)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Get user by ID
    pub async fn get_user(&self, user_id: Uuid) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, token_hash, created_at, last_seen_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Update user last_seen_at timestamp
    pub async fn update_last_seen(&self, user_id: Uuid) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE users
            SET last_seen_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    // === Word List Repository ===

    /// Create a list and all of its words in one transaction
    pub async fn create_word_list(&self, owner_id: Uuid, draft: &ListDraft) -> Result<WordList> {
        let mut tx = self.pool.begin().await?;

        let list = sqlx::query_as::<_, DbWordList>(
            r#"
            INSERT INTO word_lists (id, name, owner_id)
            VALUES ($1, $2, $3)
            RETURNING id, name, owner_id, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&draft.name)
        .bind(owner_id)
        .fetch_one(&mut *tx)
        .await?;

        let words = insert_words(&mut tx, list.id, &draft.entries).await?;
        tx.commit().await?;

        Ok(list.into_core(words))
    }

    /// Get a list with its words in input order
    pub async fn get_word_list(&self, list_id: Uuid) -> Result<Option<WordList>> {
        let list = sqlx::query_as::<_, DbWordList>(
            r#"
            SELECT id, name, owner_id, created_at, updated_at
            FROM word_lists
            WHERE id = $1
            "#,
        )
        .bind(list_id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(list) = list else {
            return Ok(None);
        };

        let words = sqlx::query_as::<_, DbWord>(
            r#"
            SELECT id, word_list_id, position, word, definition
            FROM words
            WHERE word_list_id = $1
            ORDER BY position
            "#,
        )
        .bind(list_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(list.into_core(words)))
    }

    /// Get the owner of a list
    pub async fn get_word_list_owner(&self, list_id: Uuid) -> Result<Option<Uuid>> {
        let owner = sqlx::query_scalar::<_, Uuid>("SELECT owner_id FROM word_lists WHERE id = $1")
            .bind(list_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(owner)
    }

    /// Get every list, newest first, with owner name and word count
    pub async fn get_all_word_lists(&self) -> Result<Vec<WordListInfo>> {
        let lists = sqlx::query_as::<_, WordListInfo>(
            r#"
            SELECT l.id, l.name, l.owner_id, u.name AS owner_name,
                   (SELECT COUNT(*) FROM words w WHERE w.word_list_id = l.id) AS word_count,
                   l.created_at, l.updated_at
            FROM word_lists l
            JOIN users u ON u.id = l.owner_id
            ORDER BY l.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(lists)
    }

    /// Replace a list's name and entire word set atomically
    pub async fn replace_word_list(&self, list_id: Uuid, draft: &ListDraft) -> Result<WordList> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM words WHERE word_list_id = $1")
            .bind(list_id)
            .execute(&mut *tx)
            .await?;

        let list = sqlx::query_as::<_, DbWordList>(
            r#"
            UPDATE word_lists
            SET name = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, owner_id, created_at, updated_at
            "#,
        )
        .bind(list_id)
        .bind(&draft.name)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| ApiError::NotFound("Word list not found".to_string()))?;

        let words = insert_words(&mut tx, list_id, &draft.entries).await?;
        tx.commit().await?;

        Ok(list.into_core(words))
    }

    /// Delete a list; its words go with it
    pub async fn delete_word_list(&self, list_id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM word_lists WHERE id = $1")
            .bind(list_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

/// Insert a list's words in one statement, keeping input order in `position`
async fn insert_words(
    tx: &mut Transaction<'_, Postgres>,
    list_id: Uuid,
    entries: &[WordEntry],
) -> Result<Vec<DbWord>> {
    if entries.is_empty() {
        return Ok(Vec::new());
    }

    let ids: Vec<Uuid> = entries.iter().map(|_| Uuid::new_v4()).collect();
    let positions: Vec<i32> = (0..entries.len() as i32).collect();
    let words: Vec<String> = entries.iter().map(|e| e.word.clone()).collect();
    let definitions: Vec<Option<String>> = entries.iter().map(|e| e.definition.clone()).collect();

    let mut rows = sqlx::query_as::<_, DbWord>(
        r#"
        INSERT INTO words (id, word_list_id, position, word, definition)
        SELECT t.id, $1, t.position, t.word, t.definition
        FROM UNNEST($2::uuid[], $3::int4[], $4::text[], $5::text[])
            AS t(id, position, word, definition)
        RETURNING id, word_list_id, position, word, definition
        "#,
    )
    .bind(list_id)
    .bind(&ids)
    .bind(&positions)
    .bind(&words)
    .bind(&definitions)
    .fetch_all(&mut **tx)
    .await?;

    rows.sort_by_key(|row| row.position);
    Ok(rows)
}
