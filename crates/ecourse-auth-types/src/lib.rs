//! Auth types shared across ECourse crates.
//!
//! Provides bearer access-token validation and the `Identity` extractor.

pub mod identity;
pub mod token;
