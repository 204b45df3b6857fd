//! Opening the `SQLite` pool and bringing the places schema up to date.

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::migrate::Migrator;
use sqlx::sqlite::SqliteConnectOptions;

use crate::error::StorageError;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Where the places database lives.
pub struct Config {
    /// `SQLite` connection URL (e.g. `sqlite:places.db` or `sqlite::memory:`).
    pub database_url: String,
}

impl Config {
    /// Open the pool, creating the database file when it is missing, and
    /// apply pending migrations.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the URL is invalid, the connection fails
    /// or a migration cannot be applied.
    pub async fn build(self) -> Result<Database, StorageError> {
        let options = SqliteConnectOptions::from_str(&self.database_url)?.create_if_missing(true);
        let pool = SqlitePool::connect_with(options).await?;

        MIGRATOR.run(&pool).await?;
        tracing::debug!(url = %self.database_url, "places schema up to date");

        Ok(Database { pool })
    }
}

/// An open places database.
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// The pool every repository shares.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn memory_db() -> Database {
        Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap()
    }

    async fn schema_objects(db: &Database, kind: &str) -> Vec<String> {
        sqlx::query_scalar(
            "SELECT name FROM sqlite_master WHERE type = ? AND name NOT LIKE 'sqlite_%' AND name != '_sqlx_migrations' ORDER BY name",
        )
        .bind(kind)
        .fetch_all(db.pool())
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn should_create_users_and_places_tables() {
        let db = memory_db().await;

        assert_eq!(schema_objects(&db, "table").await, vec!["places", "users"]);
    }

    #[tokio::test]
    async fn should_index_places_by_creator() {
        let db = memory_db().await;

        assert_eq!(
            schema_objects(&db, "index").await,
            vec!["idx_places_creator_id"]
        );
    }

    #[tokio::test]
    async fn should_default_place_list_to_empty_array() {
        let db = memory_db().await;
        sqlx::query("INSERT INTO users (id, name) VALUES ('u1', 'Max')")
            .execute(db.pool())
            .await
            .unwrap();

        let places: String = sqlx::query_scalar("SELECT places FROM users WHERE id = 'u1'")
            .fetch_one(db.pool())
            .await
            .unwrap();

        assert_eq!(places, "[]");
    }

    #[tokio::test]
    async fn should_reapply_migrations_without_error() {
        let db = memory_db().await;

        MIGRATOR.run(db.pool()).await.unwrap();
    }
}
