//! `SQLite` implementation of [`PlaceRepository`].

use std::future::Future;
use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use places_app::ports::PlaceRepository;
use places_domain::error::{NotFoundError, PlacesError};
use places_domain::id::{PlaceId, UserId};
use places_domain::place::Place;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Place`].
struct Wrapper(Place);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Place> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let title: String = row.try_get("title")?;
        let description: String = row.try_get("description")?;
        let address: String = row.try_get("address")?;
        let image: String = row.try_get("image")?;
        let creator_id: String = row.try_get("creator_id")?;

        let id = PlaceId::from_str(&id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let creator =
            UserId::from_str(&creator_id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(Place {
            id,
            title,
            description,
            address,
            image,
            creator,
        }))
    }
}

const INSERT: &str = r"
    INSERT INTO places (id, title, description, address, image, creator_id)
    VALUES (?, ?, ?, ?, ?, ?)
";
const SELECT_BY_ID: &str = "SELECT * FROM places WHERE id = ?";
const SELECT_BY_CREATOR: &str = "SELECT * FROM places WHERE creator_id = ? ORDER BY rowid";
const UPDATE: &str = r"
    UPDATE places
    SET title = ?, description = ?, address = ?, image = ?, creator_id = ?
    WHERE id = ?
";
const DELETE_BY_ID: &str = "DELETE FROM places WHERE id = ?";

/// `SQLite`-backed place repository.
#[derive(Clone)]
pub struct SqlitePlaceRepository {
    pool: SqlitePool,
}

impl SqlitePlaceRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl PlaceRepository for SqlitePlaceRepository {
    fn create(&self, place: Place) -> impl Future<Output = Result<Place, PlacesError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(place.id.to_string())
                .bind(&place.title)
                .bind(&place.description)
                .bind(&place.address)
                .bind(&place.image)
                .bind(place.creator.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(place)
        }
    }

    fn get_by_id(
        &self,
        id: PlaceId,
    ) -> impl Future<Output = Result<Option<Place>, PlacesError>> + Send {
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

    fn find_by_creator(
        &self,
        creator: UserId,
    ) -> impl Future<Output = Result<Vec<Place>, PlacesError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_CREATOR)
                .bind(creator.to_string())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(&self, place: Place) -> impl Future<Output = Result<Place, PlacesError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(UPDATE)
                .bind(&place.title)
                .bind(&place.description)
                .bind(&place.address)
                .bind(&place.image)
                .bind(place.creator.to_string())
                .bind(place.id.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            if result.rows_affected() == 0 {
                return Err(NotFoundError::place(place.id).into());
            }
            Ok(place)
        }
    }

    fn delete(&self, id: PlaceId) -> impl Future<Output = Result<(), PlacesError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(DELETE_BY_ID)
                .bind(id.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }
}
