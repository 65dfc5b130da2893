//! Configuration for the SES query-API client.
//!
//! The v1 protocol speaks to a single regional endpoint. The default is
//! the us-east-1 address; the endpoint is overridable so tests can point
//! the client at a local mock server.

use std::time::Duration;

/// Default regional SES query-API endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://email.us-east-1.amazonaws.com";

/// Default timeout for the entire request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default timeout for establishing connections.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the SES client.
///
/// # Examples
///
/// ```rust
/// use integrations_aws_ses_query::SesConfig;
/// use std::time::Duration;
///
/// let config = SesConfig::builder()
///     .timeout(Duration::from_secs(15))
///     .build();
/// assert_eq!(config.endpoint, "https://email.us-east-1.amazonaws.com");
/// ```
#[derive(Debug, Clone)]
pub struct SesConfig {
    /// Service endpoint URL.
    pub endpoint: String,

    /// Timeout for the entire request.
    pub timeout: Duration,

    /// Timeout for establishing connections.
    pub connect_timeout: Duration,
}

impl Default for SesConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }
}

impl SesConfig {
    /// Create a new configuration builder.
    pub fn builder() -> SesConfigBuilder {
        SesConfigBuilder::default()
    }
}

/// Builder for [`SesConfig`].
#[derive(Debug, Clone, Default)]
pub struct SesConfigBuilder {
    endpoint: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl SesConfigBuilder {
    /// Override the service endpoint URL.
    ///
    /// Useful for tests and local SES stand-ins.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set the timeout for the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the timeout for establishing connections.
    pub fn connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = Some(connect_timeout);
        self
    }

    /// Build the configuration, applying defaults for unset fields.
    pub fn build(self) -> SesConfig {
        SesConfig {
            endpoint: self.endpoint.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            connect_timeout: self.connect_timeout.unwrap_or(DEFAULT_CONNECT_TIMEOUT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SesConfig::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert_eq!(config.connect_timeout, DEFAULT_CONNECT_TIMEOUT);
    }

    #[test]
    fn test_builder_overrides() {
        let config = SesConfig::builder()
            .endpoint("http://localhost:4566")
            .timeout(Duration::from_secs(5))
            .connect_timeout(Duration::from_secs(2))
            .build();

        assert_eq!(config.endpoint, "http://localhost:4566");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.connect_timeout, Duration::from_secs(2));
    }
}
