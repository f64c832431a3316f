//! User Directory - in-memory user management
//!
//! This crate manages users together with an age-derived display
//! configuration and a profile that counts user activity, and renders
//! human-readable reports and summaries about them.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
