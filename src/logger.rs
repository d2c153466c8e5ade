//! Logger module
//!
//! Logging helpers for the server: lifecycle banner, access lines,
//! warnings and errors. Info goes to stdout, errors to stderr.

use crate::config::Config;
use chrono::Local;
use std::net::SocketAddr;

fn timestamp() -> String {
    Local::now().format("%d/%b/%Y:%H:%M:%S %z").to_string()
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    println!("======================================");
    println!("Site server started successfully");
    println!("Listening on: http://{addr}");
    println!("Serving assets from: {}", config.assets.root);
    println!("Log level: {}", config.logging.level);
    if let Some(workers) = config.server.workers {
        println!("Worker threads: {workers}");
    }
    println!("Using Tokio runtime for concurrency");
    println!("======================================\n");
}

/// Report delivery-related environment variables that are not set.
/// The server keeps running; sends fail until they are provided.
pub fn log_missing_env(names: &[&str]) {
    eprintln!(
        "[WARN] Missing environment variables: {}. Email delivery will fail until these are provided.",
        names.join(", ")
    );
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    println!("[Connection] Accepted from: {peer_addr}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

/// Access log line, one per handled request.
pub fn log_access(method: &str, path: &str, status: u16, body_bytes: u64) {
    println!("[{}] \"{method} {path}\" {status} {body_bytes}", timestamp());
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}

pub fn log_shutdown() {
    println!("\n[Shutdown] Ctrl-C received, stopping server");
}
