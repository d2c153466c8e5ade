//! Mailer module
//!
//! Abstracts outbound email behind a trait so the contact handler can be
//! tested without an SMTP server. The production implementation is
//! [`SmtpMailer`], a thin layer over lettre's async SMTP transport.

mod smtp;

pub use smtp::SmtpMailer;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("failed to build message: {0}")]
    Build(String),

    #[error("SMTP error: {0}")]
    Smtp(String),
}

/// A fully assembled outbound email, ready for transmission.
#[derive(Debug, Clone)]
pub struct OutgoingEmail {
    /// Display name shown as the sender
    pub from_name: String,
    /// Sender address, the authenticated SMTP account
    pub from_addr: String,
    pub to: String,
    /// Submitter's address, so replies go straight back to them
    pub reply_to: String,
    pub subject: String,
    pub text_body: String,
    pub html_body: String,
}

/// Capability to transmit an email. One call, one send attempt: no retry,
/// no queueing.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError>;
}
