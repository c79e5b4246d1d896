//! service-core: Shared infrastructure for the AsOne4Health services.
pub mod config;
pub mod error;
pub mod middleware;
pub mod observability;
