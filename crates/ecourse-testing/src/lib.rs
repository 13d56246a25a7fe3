//! Test utilities for ECourse services.
//!
//! Import from `[dev-dependencies]` only.

pub mod auth;
