//! POST /api/contact handler.
//!
//! Parses and validates the submission, renders the notification email, and
//! relays it through the mailer. Validation failures are reported with a
//! specific message; delivery failures are logged in full server-side and
//! reported to the caller as a fixed generic message.

use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde_json::json;

use super::render;
use super::submission::ContactSubmission;
use crate::config::AppState;
use crate::http::build_json_response;
use crate::logger;
use crate::mailer::OutgoingEmail;

/// Sent for any missing or empty required field, and for unparseable bodies.
pub const VALIDATION_ERROR: &str = "Name, email, and message are required.";

/// Sent for any delivery failure; the underlying error stays in the logs.
pub const DELIVERY_ERROR: &str = "Unable to send message. Please try again later.";

/// Handle a contact submission body. The router has already matched the
/// route and collected the body within the size limit.
pub async fn handle_contact(
    body: Bytes,
    state: &AppState,
) -> Response<http_body_util::Full<Bytes>> {
    let submission: ContactSubmission = match serde_json::from_slice(&body) {
        Ok(s) => s,
        Err(_) => return validation_failure(),
    };

    if submission.missing_required() {
        return validation_failure();
    }

    let email = OutgoingEmail {
        from_name: state.config.contact.from_name.clone(),
        from_addr: state.config.smtp.user.clone(),
        to: state.config.contact.to.clone(),
        reply_to: submission.email.clone(),
        subject: state.config.contact.subject.clone(),
        text_body: render::text_body(&submission),
        html_body: render::html_body(&submission),
    };

    match state.mailer.send(&email).await {
        Ok(()) => build_json_response(StatusCode::OK, &json!({ "ok": true })),
        Err(e) => {
            logger::log_error(&format!("Email dispatch failed: {e}"));
            build_json_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                &json!({ "ok": false, "error": DELIVERY_ERROR }),
            )
        }
    }
}

fn validation_failure() -> Response<http_body_util::Full<Bytes>> {
    build_json_response(
        StatusCode::BAD_REQUEST,
        &json!({ "ok": false, "error": VALIDATION_ERROR }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        AppState, AssetsConfig, Config, ContactConfig, HttpConfig, LoggingConfig, ServerConfig,
        SmtpConfig,
    };
    use crate::mailer::{MailError, Mailer, OutgoingEmail};
    use async_trait::async_trait;
    use http_body_util::BodyExt;
    use std::sync::{Arc, Mutex};

    /// Records every send; optionally fails each one.
    struct TestMailer {
        sent: Mutex<Vec<OutgoingEmail>>,
        fail: bool,
    }

    impl TestMailer {
        fn new(fail: bool) -> Arc<Self> {
            Arc::new(Self {
                sent: Mutex::new(Vec::new()),
                fail,
            })
        }

        fn sent(&self) -> Vec<OutgoingEmail> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Mailer for TestMailer {
        async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError> {
            self.sent.lock().unwrap().push(email.clone());
            if self.fail {
                Err(MailError::Smtp("connection refused".to_string()))
            } else {
                Ok(())
            }
        }
    }

    fn test_state(mailer: Arc<TestMailer>) -> AppState {
        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
                workers: None,
            },
            smtp: SmtpConfig {
                host: "smtp.example.com".to_string(),
                port: Some(465),
                secure: None,
                user: "relay@example.com".to_string(),
                pass: "hunter2".to_string(),
            },
            contact: ContactConfig {
                to: "owner@example.com".to_string(),
                subject: "New inquiry from the website".to_string(),
                from_name: "Website Contact Form".to_string(),
            },
            assets: AssetsConfig {
                root: "public".to_string(),
                index_files: vec!["index.html".to_string()],
            },
            http: HttpConfig {
                max_body_size: 102_400,
                health_probes: true,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                access_log: false,
            },
        };
        AppState::new(config, mailer)
    }

    async fn body_json(
        resp: Response<http_body_util::Full<Bytes>>,
    ) -> serde_json::Value {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_valid_submission_sends_once() {
        let mailer = TestMailer::new(false);
        let state = test_state(Arc::clone(&mailer));

        let resp = handle_contact(
            Bytes::from(r#"{"name":"A","email":"a@b.com","message":"Hi"}"#),
            &state,
        )
        .await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await, serde_json::json!({"ok": true}));

        let sent = mailer.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].reply_to, "a@b.com");
        assert_eq!(sent[0].to, "owner@example.com");
        assert_eq!(sent[0].from_addr, "relay@example.com");
        assert_eq!(sent[0].from_name, "Website Contact Form");
        assert_eq!(sent[0].subject, "New inquiry from the website");
        assert!(sent[0].text_body.contains("Phone: Not provided"));
        assert!(sent[0].html_body.contains("Not provided"));
    }

    #[tokio::test]
    async fn test_missing_field_rejected_without_send() {
        let mailer = TestMailer::new(false);
        let state = test_state(Arc::clone(&mailer));

        for body in [
            r#"{"name":"","email":"a@b.com","message":"Hi"}"#,
            r#"{"email":"a@b.com","message":"Hi"}"#,
            r#"{"name":"A","email":"","message":"Hi"}"#,
            r#"{"name":"A","email":"a@b.com","message":""}"#,
            r#"{"name":"A","email":"a@b.com"}"#,
        ] {
            let resp = handle_contact(Bytes::from(body), &state).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "body: {body}");
            assert_eq!(
                body_json(resp).await,
                serde_json::json!({"ok": false, "error": VALIDATION_ERROR})
            );
        }

        assert!(mailer.sent().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_input_failure_is_idempotent() {
        let mailer = TestMailer::new(false);
        let state = test_state(Arc::clone(&mailer));
        let body = r#"{"name":"","email":"a@b.com","message":"Hi"}"#;

        let first = body_json(handle_contact(Bytes::from(body), &state).await).await;
        let second = body_json(handle_contact(Bytes::from(body), &state).await).await;
        assert_eq!(first, second);
        assert!(mailer.sent().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_body_rejected_without_send() {
        let mailer = TestMailer::new(false);
        let state = test_state(Arc::clone(&mailer));

        let resp = handle_contact(Bytes::from("not json"), &state).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(mailer.sent().is_empty());
    }

    #[tokio::test]
    async fn test_delivery_failure_returns_generic_error() {
        let mailer = TestMailer::new(true);
        let state = test_state(Arc::clone(&mailer));

        let resp = handle_contact(
            Bytes::from(r#"{"name":"A","email":"a@b.com","message":"Hi"}"#),
            &state,
        )
        .await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let payload = body_json(resp).await;
        assert_eq!(
            payload,
            serde_json::json!({"ok": false, "error": DELIVERY_ERROR})
        );
        // The SMTP detail must not appear anywhere in the payload.
        assert!(!payload.to_string().contains("connection refused"));
        assert_eq!(mailer.sent().len(), 1);
    }

    #[tokio::test]
    async fn test_message_newlines_preserved_in_text_body() {
        let mailer = TestMailer::new(false);
        let state = test_state(Arc::clone(&mailer));

        let resp = handle_contact(
            Bytes::from(r#"{"name":"A","email":"a@b.com","message":"one\ntwo"}"#),
            &state,
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);

        let sent = mailer.sent();
        assert!(sent[0].text_body.contains("one\ntwo"));
        assert!(sent[0].html_body.contains("one<br>two"));
    }
}
