//! # places-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `PlaceRepository`: find, query by creator, save, update, delete places
//!   - `UserRepository`: find, save, update users
//!   - `ImageStore`: persist and remove uploaded image files
//! - Define **driving/inbound ports** as use-case structs:
//!   - `PlaceService`: get, list by owner, create, update, delete places
//!     while keeping each owner's place list consistent
//!   - `UserService`: register and look up users
//! - Orchestrate domain objects without knowing *how* persistence or IO works
//!
//! ## Dependency rule
//! Depends on `places-domain` only (plus `tracing` for diagnostics).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
