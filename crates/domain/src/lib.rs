//! # places-domain
//!
//! Pure domain model for the places service.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers and error conventions
//! - Define **Places** (location records with a title, description,
//!   address, uploaded image and an owning user)
//! - Define **Users** (owners holding an ordered list of their places)
//! - Contain all invariant enforcement and domain logic (field validation,
//!   ownership checks, place-list bookkeeping)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod place;
pub mod user;
