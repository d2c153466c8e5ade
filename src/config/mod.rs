// Configuration module entry point
// Manages application configuration and shared request state

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{
    AssetsConfig, Config, ContactConfig, HttpConfig, LoggingConfig, ServerConfig, SmtpConfig,
};

impl Config {
    /// Load configuration from the default `config.toml` plus the environment.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from the specified file path (without extension)
    /// merged with environment variables. Flat environment names map onto
    /// nested keys via the `_` separator (`SMTP_HOST` -> `smtp.host`,
    /// `CONTACT_TO` -> `contact.to`); `PORT` and `HOST` are mapped onto the
    /// server section explicitly.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::default()
                    .separator("_")
                    .try_parsing(true),
            )
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("smtp.host", "")?
            .set_default("smtp.user", "")?
            .set_default("smtp.pass", "")?
            .set_default("contact.to", "")?
            .set_default("contact.subject", "New inquiry from the website")?
            .set_default("contact.from_name", "Website Contact Form")?
            .set_default("assets.root", "public")?
            .set_default("assets.index_files", vec!["index.html", "index.htm"])?
            .set_default("http.max_body_size", 102_400)? // 100KB, plenty for a form
            .set_default("http.health_probes", true)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?;

        if let Ok(port) = std::env::var("PORT") {
            builder = builder.set_override("server.port", port)?;
        }
        if let Ok(host) = std::env::var("HOST") {
            builder = builder.set_override("server.host", host)?;
        }

        builder.build()?.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }

    /// Names of delivery-related environment variables that resolved to
    /// empty values. Delivery fails at first send attempt until they are set.
    pub fn missing_delivery_settings(&self) -> Vec<&'static str> {
        let checks = [
            ("SMTP_HOST", self.smtp.host.is_empty()),
            ("SMTP_PORT", self.smtp.port.is_none()),
            ("SMTP_USER", self.smtp.user.is_empty()),
            ("SMTP_PASS", self.smtp.pass.is_empty()),
            ("CONTACT_TO", self.contact.to.is_empty()),
        ];
        checks
            .into_iter()
            .filter_map(|(name, missing)| missing.then_some(name))
            .collect()
    }
}
