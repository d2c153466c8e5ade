//! Request handler module
//!
//! Routing dispatch for the two surfaces the server has: the contact API
//! endpoint and static asset serving with an index fallback.

pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::handle_request;
