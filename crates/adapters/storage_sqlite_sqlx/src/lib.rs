//! # places-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `places-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Storage layout
//! Places live in their own table, indexed by creator. A user's place list
//! is stored as a JSON array on the user row so that its order survives a
//! roundtrip. The two tables are not tied by a foreign key: keeping them
//! consistent is the job of the application service.
//!
//! ## Dependency rule
//! Depends on `places-app` (for port traits) and `places-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod error;
mod place_repo;
mod pool;
mod user_repo;

pub use error::StorageError;
pub use place_repo::SqlitePlaceRepository;
pub use pool::{Config, Database};
pub use user_repo::SqliteUserRepository;
