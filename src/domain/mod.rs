//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, errors)
//! - `user` - User identity, configuration, profile and directory events

pub mod foundation;
pub mod user;
