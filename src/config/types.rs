// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub smtp: SmtpConfig,
    pub contact: ContactConfig,
    pub assets: AssetsConfig,
    pub http: HttpConfig,
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Outbound SMTP configuration
#[derive(Debug, Deserialize, Clone)]
pub struct SmtpConfig {
    pub host: String,
    /// Unset falls back to 465; presence is tracked so the startup report
    /// can name `SMTP_PORT` among missing settings.
    pub port: Option<u16>,
    /// Implicit TLS when true, STARTTLS otherwise
    pub secure: Option<bool>,
    pub user: String,
    pub pass: String,
}

impl SmtpConfig {
    /// Port used for the SMTP connection.
    pub fn effective_port(&self) -> u16 {
        self.port.unwrap_or(465)
    }

    /// Whether to use implicit TLS for the SMTP connection.
    /// Port 465 always means implicit TLS; the flag enables it elsewhere.
    pub fn effective_secure(&self) -> bool {
        self.secure == Some(true) || self.effective_port() == 465
    }
}

/// Contact-form relay configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ContactConfig {
    /// Recipient of every contact submission
    pub to: String,
    /// Fixed subject line for relayed submissions
    pub subject: String,
    /// Display name used as the From identity
    pub from_name: String,
}

/// Static asset configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AssetsConfig {
    /// Root directory the site is served from
    pub root: String,
    /// Index documents tried for directory paths and the route fallback
    pub index_files: Vec<String>,
}

/// HTTP configuration
#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    pub max_body_size: u64,
    /// Health probe endpoints (/healthz, /readyz)
    pub health_probes: bool,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
}
