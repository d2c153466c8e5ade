//! Contact submission module
//!
//! The one API surface of the server: validates a contact-form submission,
//! renders it as an email, and relays it through the configured mailer.

pub mod handler;
pub mod render;
pub mod submission;

pub use handler::handle_contact;
pub use submission::ContactSubmission;
