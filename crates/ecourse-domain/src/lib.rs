//! Domain types shared across ECourse crates.
//!
//! Pure types with no framework dependencies.

pub mod media;
pub mod pagination;
pub mod reaction;
