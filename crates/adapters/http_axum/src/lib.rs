//! # places-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **JSON API** for places and users (`/api/places`, `/api/users`)
//! - Accept place images as multipart uploads and hand them to the
//!   `ImageStore` port before the place is created
//! - Serve stored images back under `/uploads/images`
//! - Read the acting user from the request (see [`actor`])
//! - Map application results into HTTP responses, and every failure into a
//!   uniform `{ "error": message }` body with a fixed message (see [`error`])
//!
//! ## Dependency rule
//! Depends on `places-app` (for port traits and services) and `places-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod actor;
pub mod api;
pub mod error;
pub mod router;
pub mod state;
