//! SMTP mailer implementation over lettre's async transport.

use async_trait::async_trait;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use super::{MailError, Mailer, OutgoingEmail};
use crate::config::SmtpConfig;

/// Mailer backed by an SMTP relay.
///
/// The transport is constructed per send: there is no cross-request state,
/// and a misconfigured relay then surfaces as a send error instead of a
/// startup failure.
pub struct SmtpMailer {
    config: SmtpConfig,
}

impl SmtpMailer {
    pub fn new(config: SmtpConfig) -> Self {
        Self { config }
    }

    fn transport(&self) -> Result<AsyncSmtpTransport<Tokio1Executor>, MailError> {
        let builder = if self.config.effective_secure() {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&self.config.host)
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.host)
        }
        .map_err(|e| MailError::Smtp(e.to_string()))?;

        Ok(builder
            .port(self.config.effective_port())
            .credentials(Credentials::new(
                self.config.user.clone(),
                self.config.pass.clone(),
            ))
            .build())
    }

    fn build_message(email: &OutgoingEmail) -> Result<Message, MailError> {
        let from = Mailbox::new(
            Some(email.from_name.clone()),
            email
                .from_addr
                .parse()
                .map_err(|e| MailError::Build(format!("invalid sender address: {e}")))?,
        );
        let to: Mailbox = email
            .to
            .parse()
            .map_err(|e| MailError::Build(format!("invalid recipient address: {e}")))?;
        let reply_to: Mailbox = email
            .reply_to
            .parse()
            .map_err(|e| MailError::Build(format!("invalid reply-to address: {e}")))?;

        Message::builder()
            .from(from)
            .to(to)
            .reply_to(reply_to)
            .subject(email.subject.clone())
            .multipart(MultiPart::alternative_plain_html(
                email.text_body.clone(),
                email.html_body.clone(),
            ))
            .map_err(|e| MailError::Build(e.to_string()))
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError> {
        let message = Self::build_message(email)?;
        let transport = self.transport()?;

        transport
            .send(message)
            .await
            .map_err(|e| MailError::Smtp(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_email() -> OutgoingEmail {
        OutgoingEmail {
            from_name: "Website Contact Form".to_string(),
            from_addr: "relay@example.com".to_string(),
            to: "owner@example.com".to_string(),
            reply_to: "visitor@example.com".to_string(),
            subject: "New inquiry from the website".to_string(),
            text_body: "Name: A\n".to_string(),
            html_body: "<p>Name: A</p>".to_string(),
        }
    }

    #[test]
    fn test_build_message_valid_addresses() {
        let message = SmtpMailer::build_message(&sample_email());
        assert!(message.is_ok());
    }

    #[test]
    fn test_build_message_rejects_unparseable_reply_to() {
        let email = OutgoingEmail {
            reply_to: "not an address".to_string(),
            ..sample_email()
        };
        let err = SmtpMailer::build_message(&email).unwrap_err();
        assert!(matches!(err, MailError::Build(_)));
    }
}
