//! Contact submission type and validation.

use serde::Deserialize;

/// A contact-form submission, request-scoped and never persisted.
///
/// Absent fields deserialize to empty strings so validation treats missing
/// and empty the same way.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub message: String,
}

impl ContactSubmission {
    /// Whether any required field (name, email, message) is missing or empty.
    /// Email is only checked for presence, not format.
    pub fn missing_required(&self) -> bool {
        self.name.is_empty() || self.email.is_empty() || self.message.is_empty()
    }

    /// Phone as rendered in the outbound email.
    pub fn phone_display(&self) -> &str {
        match self.phone.as_deref() {
            Some(phone) if !phone.is_empty() => phone,
            _ => "Not provided",
        }
    }
}
