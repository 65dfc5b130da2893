//! Transport layer for the signed HTTP exchange.
//!
//! The transport is a pluggable seam: the client hands it a fully signed
//! request and gets back the raw status and body text. The default
//! implementation uses reqwest; tests substitute their own
//! implementations to exercise error classification without a network.
//!
//! The transport does not classify statuses: a 403 comes back as an
//! `Ok(TransportResponse)` and the client turns it into an error. Only
//! failures of the exchange itself (connect, DNS, timeout) are errors at
//! this layer.

use async_trait::async_trait;
use http::StatusCode;
use reqwest::header::{CONTENT_TYPE, DATE};
use std::time::Duration;

use crate::error::{SesError, SesResult};

/// Header carrying the AWS3-HTTPS authorization value.
pub const AMZN_AUTHORIZATION_HEADER: &str = "X-Amzn-Authorization";

/// Content type for the POST variant's form-encoded body.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// HTTP method for a signed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    /// Parameters travel in the query string.
    Get,
    /// Parameters travel form-encoded in the body (the primary path).
    Post,
}

/// A fully signed, ready-to-send request.
///
/// Transient: it exists for the duration of one call and is never reused.
/// The `date` field is the exact string the signature was computed over;
/// the transport must transmit it unmodified as the `Date` header or the
/// service will reject the signature.
#[derive(Debug, Clone)]
pub struct SignedRequest {
    /// HTTP method to use.
    pub method: HttpMethod,
    /// Service endpoint URL.
    pub endpoint: String,
    /// Canonical date string; signing input and `Date` header value.
    pub date: String,
    /// `X-Amzn-Authorization` header value.
    pub authorization: String,
    /// SendEmail parameter set, name to value.
    pub params: Vec<(String, String)>,
}

/// Raw outcome of one HTTP exchange.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// HTTP status returned by the service.
    pub status: StatusCode,
    /// Full response body text.
    pub body: String,
}

/// Trait for HTTP transport implementations.
///
/// Abstracts the actual HTTP exchange so tests can supply doubles and the
/// client holds no hidden global state.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform one HTTP exchange for a signed request.
    ///
    /// # Errors
    ///
    /// Returns an error only if the exchange itself fails (connection
    /// error, DNS failure, timeout). Non-success statuses are returned
    /// as `Ok` responses and classified by the caller.
    async fn execute(&self, request: SignedRequest) -> SesResult<TransportResponse>;
}

/// URL-encode a parameter set for a form body or query string.
pub fn encode_params(params: &[(String, String)]) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (name, value) in params {
        serializer.append_pair(name, value);
    }
    serializer.finish()
}

/// Reqwest-based transport implementation.
///
/// Each exchange opens and fully closes its own connection; no idle
/// connections are kept between calls. Request and connect timeouts bound
/// worst-case blocking on an unresponsive endpoint.
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a new reqwest transport.
    ///
    /// # Arguments
    ///
    /// * `timeout` - Timeout for the entire request
    /// * `connect_timeout` - Timeout for establishing the connection
    ///
    /// # Errors
    ///
    /// Returns [`SesError::Transport`] if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(timeout: Duration, connect_timeout: Duration) -> SesResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            // Connections are single-use; nothing is pooled across calls.
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|e| SesError::Transport {
                message: format!("Failed to create HTTP client: {}", e),
                source: Some(Box::new(e)),
            })?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: SignedRequest) -> SesResult<TransportResponse> {
        let encoded = encode_params(&request.params);

        let builder = match request.method {
            HttpMethod::Post => self
                .client
                .post(&request.endpoint)
                .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
                .body(encoded),
            HttpMethod::Get => {
                let url = format!("{}?{}", request.endpoint, encoded);
                self.client.get(url)
            }
        };

        let response = builder
            .header(DATE, &request.date)
            .header(AMZN_AUTHORIZATION_HEADER, &request.authorization)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        Ok(TransportResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(n, v)| (n.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_encode_params_escapes_values() {
        let params = owned(&[
            ("Action", "SendEmail"),
            ("Source", "Jane Doe <jane@example.com>"),
        ]);
        let encoded = encode_params(&params);
        assert_eq!(
            encoded,
            "Action=SendEmail&Source=Jane+Doe+%3Cjane%40example.com%3E"
        );
    }

    #[test]
    fn test_encode_params_empty() {
        assert_eq!(encode_params(&[]), "");
    }

    #[test]
    fn test_reqwest_transport_creation() {
        let transport =
            ReqwestTransport::new(Duration::from_secs(30), Duration::from_secs(10));
        assert!(transport.is_ok());
    }

    #[tokio::test]
    async fn test_connect_failure_is_transport_error() {
        let transport =
            ReqwestTransport::new(Duration::from_secs(5), Duration::from_secs(1)).unwrap();

        // Reserved TEST-NET-1 address; nothing listens there.
        let request = SignedRequest {
            method: HttpMethod::Post,
            endpoint: "http://192.0.2.1:81".to_string(),
            date: "Tue, 25 May 2010 21:20:27 +0000".to_string(),
            authorization: "AWS3-HTTPS AWSAccessKeyId=AKID, Algorithm=HmacSHA256, Signature=x"
                .to_string(),
            params: owned(&[("Action", "SendEmail")]),
        };

        let result = transport.execute(request).await;
        assert!(matches!(
            result,
            Err(SesError::Transport { .. }) | Err(SesError::Timeout { .. })
        ));
    }
}
