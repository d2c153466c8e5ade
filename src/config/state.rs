// Application state module
// Shared state handed to every request handler

use std::sync::Arc;

use super::types::Config;
use crate::mailer::Mailer;

/// Application state
///
/// The mailer is injected as a trait object so tests can substitute a
/// recording or failing double without touching SMTP.
pub struct AppState {
    pub config: Config,
    pub mailer: Arc<dyn Mailer>,
}

impl AppState {
    pub fn new(config: Config, mailer: Arc<dyn Mailer>) -> Self {
        Self { config, mailer }
    }
}
