//! SES client implementation.
//!
//! The client composes the three pieces of one send: parameter
//! construction from the [`Email`], AWS3-HTTPS signing of the canonical
//! date string, and the HTTP exchange through the injected [`Transport`].
//!
//! Each call is a single synchronous exchange from the caller's point of
//! view: no retries, no queuing, no background work. The client holds no
//! mutable state beyond the immutable credentials and config, so one
//! instance can be shared freely across tasks.
//!
//! # Example
//!
//! ```rust,no_run
//! use integrations_aws_ses_query::{Credentials, Email, SesClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = SesClient::new(Credentials::new("AKID", "SECRET"))?;
//!
//! let email = Email::builder()
//!     .from("sender@example.com")
//!     .to("recipient@example.com")
//!     .subject("Hello")
//!     .text("Email body")
//!     .build()?;
//!
//! let response = client.send(&email).await?;
//! println!("SES answered: {}", response);
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use http::StatusCode;
use tracing::{debug, warn};

use crate::config::SesConfig;
use crate::credentials::Credentials;
use crate::error::{SesError, SesResult};
use crate::signing::{authorization_header, format_date, sign_date, Clock, SystemClock};
use crate::transport::{HttpMethod, ReqwestTransport, SignedRequest, Transport};
use crate::types::Email;

/// Client for the SES v1 query API.
///
/// # Thread safety
///
/// `SesClient` is `Send + Sync` and clones cheaply; clones share the same
/// transport. Concurrent sends through one instance are independent of
/// each other.
#[derive(Clone)]
pub struct SesClient {
    config: Arc<SesConfig>,
    credentials: Arc<Credentials>,
    transport: Arc<dyn Transport>,
    clock: Arc<dyn Clock>,
}

impl SesClient {
    /// Create a client with default configuration and transport.
    ///
    /// # Errors
    ///
    /// Returns [`SesError::Transport`] if the HTTP client cannot be
    /// initialized.
    pub fn new(credentials: Credentials) -> SesResult<Self> {
        Self::builder().credentials(credentials).build()
    }

    /// Create a new client builder.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use integrations_aws_ses_query::SesClient;
    ///
    /// # fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = SesClient::builder()
    ///     .credentials_from("AKID", "SECRET")
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn builder() -> SesClientBuilder {
        SesClientBuilder::default()
    }

    /// Get the client configuration.
    pub fn config(&self) -> &SesConfig {
        &self.config
    }

    /// Send an email via POST (the primary path).
    ///
    /// Parameters travel form-encoded in the request body. Returns the
    /// raw XML response text on a 200 status.
    ///
    /// # Errors
    ///
    /// - [`SesError::Transport`] / [`SesError::Timeout`] if the exchange
    ///   itself fails; nothing is retried.
    /// - [`SesError::RemoteRejection`] for any non-200 status, carrying
    ///   the status code and the full response body.
    pub async fn send(&self, email: &Email) -> SesResult<String> {
        self.submit(HttpMethod::Post, email).await
    }

    /// Send an email via GET.
    ///
    /// Same parameters and headers as [`send`](Self::send), transmitted
    /// as a query string instead of a body. Provided for protocol
    /// completeness; POST is the primary path.
    pub async fn send_get(&self, email: &Email) -> SesResult<String> {
        self.submit(HttpMethod::Get, email).await
    }

    async fn submit(&self, method: HttpMethod, email: &Email) -> SesResult<String> {
        let params = email.query_params(self.credentials.access_key_id());
        let request = self.sign(method, params);

        debug!(
            method = ?request.method,
            endpoint = %request.endpoint,
            "submitting SendEmail request"
        );

        let response = self.transport.execute(request).await?;

        if response.status != StatusCode::OK {
            warn!(status = %response.status, "SES rejected the request");
            return Err(SesError::RemoteRejection {
                status: response.status,
                body: response.body,
            });
        }

        Ok(response.body)
    }

    /// Sign a parameter set, producing a ready-to-send request.
    ///
    /// The date string is formatted once and flows into both the
    /// signature and the `Date` header; the two can never diverge.
    fn sign(&self, method: HttpMethod, params: Vec<(String, String)>) -> SignedRequest {
        let date = format_date(&self.clock.now());
        let signature = sign_date(&date, self.credentials.secret_access_key());
        let authorization = authorization_header(self.credentials.access_key_id(), &signature);

        SignedRequest {
            method,
            endpoint: self.config.endpoint.clone(),
            date,
            authorization,
            params,
        }
    }
}

/// Builder for [`SesClient`].
///
/// Credentials are required; everything else has a default. Transport and
/// clock are injectable so tests can substitute doubles.
#[derive(Default)]
pub struct SesClientBuilder {
    config: Option<SesConfig>,
    credentials: Option<Credentials>,
    transport: Option<Arc<dyn Transport>>,
    clock: Option<Arc<dyn Clock>>,
}

impl SesClientBuilder {
    /// Set the credentials.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set the credentials from an access key id and secret key.
    pub fn credentials_from(
        self,
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
    ) -> Self {
        self.credentials(Credentials::new(access_key_id, secret_access_key))
    }

    /// Set the configuration.
    pub fn config(mut self, config: SesConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Override the service endpoint URL.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        let config = self.config.take().unwrap_or_default();
        self.config = Some(SesConfig {
            endpoint: endpoint.into(),
            ..config
        });
        self
    }

    /// Inject a custom transport implementation.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Inject a custom time source.
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns [`SesError::Configuration`] if no credentials were set, or
    /// [`SesError::Transport`] if the default HTTP client cannot be
    /// initialized.
    pub fn build(self) -> SesResult<SesClient> {
        let credentials = self.credentials.ok_or_else(|| SesError::Configuration {
            message: "credentials are required".to_string(),
        })?;

        let config = self.config.unwrap_or_default();

        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new(config.timeout, config.connect_timeout)?),
        };

        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));

        Ok(SesClient {
            config: Arc::new(config),
            credentials: Arc::new(credentials),
            transport,
            clock,
        })
    }
}
