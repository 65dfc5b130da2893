//! Email description and SendEmail query-parameter construction.
//!
//! The v1 query API takes a flat set of form parameters rather than a JSON
//! document. [`Email`] holds the caller-facing description and
//! [`Email::query_params`] turns it into the wire parameter set.
//!
//! No local validation is performed on addresses, subject length, or body
//! size; the service is the source of truth and malformed input surfaces
//! as a remote rejection. An email with neither body populated is also
//! forwarded as-is.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Action parameter value for a single email submission.
pub const SEND_EMAIL_ACTION: &str = "SendEmail";

/// A transactional email: sender, single recipient, subject, and optional
/// plain-text and/or HTML bodies.
///
/// Each populated body is transmitted as its own parameter; an empty
/// string is treated the same as an absent body and its parameter is
/// omitted.
///
/// # Examples
///
/// ```rust
/// use integrations_aws_ses_query::Email;
///
/// let email = Email::builder()
///     .from("sender@example.com")
///     .to("recipient@example.com")
///     .subject("Hello from SES")
///     .text("This is a test email.")
///     .build()?;
/// # Ok::<(), integrations_aws_ses_query::BuilderError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email {
    /// Sender address.
    pub from: String,
    /// Recipient address (the single `ToAddresses` slot).
    pub to: String,
    /// Subject line.
    pub subject: String,
    /// Plain text body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// HTML body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
}

impl Email {
    /// Create a new email builder.
    pub fn builder() -> EmailBuilder {
        EmailBuilder::default()
    }

    /// Build the SendEmail parameter set for this email.
    ///
    /// Always present: `Action`, `Source`,
    /// `Destination.ToAddresses.member.1`, `Message.Subject.Data`, and
    /// `AWSAccessKeyId` (the protocol requires the key id as a parameter
    /// in addition to the header-based signature). The two body
    /// parameters are included only when the corresponding field is
    /// non-empty. Parameter order is not significant to the service.
    pub fn query_params(&self, access_key_id: &str) -> Vec<(String, String)> {
        let mut params = vec![
            ("Action".to_string(), SEND_EMAIL_ACTION.to_string()),
            ("Source".to_string(), self.from.clone()),
            (
                "Destination.ToAddresses.member.1".to_string(),
                self.to.clone(),
            ),
            ("Message.Subject.Data".to_string(), self.subject.clone()),
        ];

        if let Some(text) = self.text.as_deref().filter(|t| !t.is_empty()) {
            params.push(("Message.Body.Text.Data".to_string(), text.to_string()));
        }

        if let Some(html) = self.html.as_deref().filter(|h| !h.is_empty()) {
            params.push(("Message.Body.Html.Data".to_string(), html.to_string()));
        }

        params.push(("AWSAccessKeyId".to_string(), access_key_id.to_string()));

        params
    }
}

/// Error type for [`EmailBuilder::build`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuilderError {
    /// A required field is missing.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: String,
    },
}

impl BuilderError {
    /// Create a new missing field error.
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }
}

/// Fluent builder for [`Email`].
///
/// `from`, `to`, and `subject` are required; `text` and `html` are
/// optional and may be combined freely.
#[derive(Debug, Clone, Default)]
pub struct EmailBuilder {
    from: Option<String>,
    to: Option<String>,
    subject: Option<String>,
    text: Option<String>,
    html: Option<String>,
}

impl EmailBuilder {
    /// Create a new email builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sender address.
    pub fn from(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }

    /// Set the recipient address.
    pub fn to(mut self, to: impl Into<String>) -> Self {
        self.to = Some(to.into());
        self
    }

    /// Set the subject line.
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Set the plain text body.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the HTML body.
    pub fn html(mut self, html: impl Into<String>) -> Self {
        self.html = Some(html.into());
        self
    }

    /// Build the email.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::MissingField`] if `from`, `to`, or
    /// `subject` was not set.
    pub fn build(self) -> Result<Email, BuilderError> {
        Ok(Email {
            from: self.from.ok_or_else(|| BuilderError::missing_field("from"))?,
            to: self.to.ok_or_else(|| BuilderError::missing_field("to"))?,
            subject: self
                .subject
                .ok_or_else(|| BuilderError::missing_field("subject"))?,
            text: self.text,
            html: self.html,
        })
    }
}
