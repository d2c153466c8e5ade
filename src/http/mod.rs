//! HTTP protocol layer module
//!
//! Protocol-level building blocks shared by the asset server and the
//! contact endpoint, decoupled from business logic.

pub mod cache;
pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_304_response, build_404_response, build_413_response, build_cached_response,
    build_health_response, build_json_response,
};
