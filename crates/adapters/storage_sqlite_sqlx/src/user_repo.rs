//! `SQLite` implementation of [`UserRepository`].

use std::future::Future;
use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use places_app::ports::UserRepository;
use places_domain::error::{NotFoundError, PlacesError};
use places_domain::id::{PlaceId, UserId};
use places_domain::user::User;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`User`].
struct Wrapper(User);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<User> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let places_json: String = row.try_get("places")?;

        let id = UserId::from_str(&id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let places: Vec<PlaceId> = serde_json::from_str(&places_json)
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(User { id, name, places }))
    }
}

const INSERT: &str = "INSERT INTO users (id, name, places) VALUES (?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM users WHERE id = ?";
const UPDATE: &str = "UPDATE users SET name = ?, places = ? WHERE id = ?";

/// `SQLite`-backed user repository.
#[derive(Clone)]
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl UserRepository for SqliteUserRepository {
    fn create(&self, user: User) -> impl Future<Output = Result<User, PlacesError>> + Send {
        let pool = self.pool.clone();
        async move {
            let places_json = serde_json::to_string(&user.places).map_err(StorageError::from)?;

            sqlx::query(INSERT)
                .bind(user.id.to_string())
                .bind(&user.name)
                .bind(&places_json)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(user)
        }
    }

    fn get_by_id(
        &self,
        id: UserId,
    ) -> impl Future<Output = Result<Option<User>, PlacesError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.to_string())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn update(&self, user: User) -> impl Future<Output = Result<User, PlacesError>> + Send {
        let pool = self.pool.clone();
        async move {
            let places_json = serde_json::to_string(&user.places).map_err(StorageError::from)?;

            let result = sqlx::query(UPDATE)
                .bind(&user.name)
                .bind(&places_json)
                .bind(user.id.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            if result.rows_affected() == 0 {
                return Err(NotFoundError::user(user.id).into());
            }
            Ok(user)
        }
    }
}
