//! Email body rendering for contact submissions.
//!
//! Produces the plaintext and HTML renderings sent as a
//! multipart/alternative pair. User-supplied fields are HTML-escaped before
//! being embedded in the HTML body; message newlines become `<br>` after
//! escaping so line structure survives in the rendered email.

use super::submission::ContactSubmission;

/// Plaintext rendering, message verbatim.
pub fn text_body(submission: &ContactSubmission) -> String {
    format!(
        "Name: {}\nEmail: {}\nPhone: {}\n\nMessage:\n{}\n",
        submission.name,
        submission.email,
        submission.phone_display(),
        submission.message,
    )
}

/// HTML rendering with all user fields escaped.
pub fn html_body(submission: &ContactSubmission) -> String {
    let message = escape_html(&submission.message).replace('\n', "<br>");
    format!(
        "<h2>New Contact Inquiry</h2>\n\
         <p><strong>Name:</strong> {}</p>\n\
         <p><strong>Email:</strong> {}</p>\n\
         <p><strong>Phone:</strong> {}</p>\n\
         <p><strong>Message:</strong></p>\n\
         <p>{}</p>\n",
        escape_html(&submission.name),
        escape_html(&submission.email),
        escape_html(submission.phone_display()),
        message,
    )
}

/// Escape HTML-significant characters in user input.
fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(name: &str, email: &str, phone: Option<&str>, message: &str) -> ContactSubmission {
        ContactSubmission {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.map(ToString::to_string),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_text_body_preserves_newlines() {
        let sub = submission("A", "a@b.com", Some("123"), "line one\nline two");
        let text = text_body(&sub);
        assert_eq!(
            text,
            "Name: A\nEmail: a@b.com\nPhone: 123\n\nMessage:\nline one\nline two\n"
        );
    }

    #[test]
    fn test_text_body_phone_fallback() {
        let sub = submission("A", "a@b.com", None, "Hi");
        assert!(text_body(&sub).contains("Phone: Not provided"));
    }

    #[test]
    fn test_html_body_converts_newlines() {
        let sub = submission("A", "a@b.com", None, "line one\nline two");
        let html = html_body(&sub);
        assert!(html.contains("line one<br>line two"));
        assert!(html.contains("<strong>Phone:</strong> Not provided"));
    }

    #[test]
    fn test_html_body_escapes_user_input() {
        let sub = submission(
            "<script>alert('x')</script>",
            "a@b.com",
            None,
            "1 < 2 & \"quoted\"",
        );
        let html = html_body(&sub);
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
        assert!(html.contains("1 &lt; 2 &amp; &quot;quoted&quot;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_escape_then_break_ordering() {
        // A literal "<br>" typed by the user must arrive escaped, while the
        // newline-produced breaks stay real tags.
        let sub = submission("A", "a@b.com", None, "<br>\nreal break");
        let html = html_body(&sub);
        assert!(html.contains("&lt;br&gt;<br>real break"));
    }
}
