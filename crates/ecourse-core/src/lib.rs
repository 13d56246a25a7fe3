//! Cross-cutting plumbing shared by ECourse services: tracing setup, env config,
//! health probes, request-id middleware, and query helpers for sea-orm.

pub mod config;
pub mod health;
pub mod middleware;
pub mod sea_ext;
pub mod serde;
pub mod tracing;
