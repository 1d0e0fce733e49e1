use std::time::Duration;

use url::Url;

use candela_types::CandelaError;

use crate::FootprintConnector;

/// Per-request timeout applied when no custom client is supplied.
///
/// Slow responses delay the next poll tick rather than overlapping it, so the
/// timeout bounds how far a stalled backend can push the cadence.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Builder for [`FootprintConnector`].
pub struct FootprintConnectorBuilder {
    base_url: Url,
    timeout: Duration,
    client: Option<reqwest::Client>,
}

impl FootprintConnectorBuilder {
    /// Start a builder for the backend at `base_url`.
    #[must_use]
    pub const fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
            client: None,
        }
    }

    /// Override the per-request timeout.
    ///
    /// Ignored when a custom client is supplied; configure the timeout on
    /// that client instead.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Use an existing `reqwest::Client` instead of building one.
    #[must_use]
    pub fn custom_client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Build the connector.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the underlying HTTP client cannot be
    /// constructed.
    pub fn build(self) -> Result<FootprintConnector, CandelaError> {
        let http = match self.client {
            Some(client) => client,
            None => reqwest::Client::builder()
                .timeout(self.timeout)
                .build()
                .map_err(|e| CandelaError::InvalidArg(format!("failed to build http client: {e}")))?,
        };
        Ok(FootprintConnector::from_parts(http, self.base_url))
    }
}
