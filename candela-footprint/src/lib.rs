//! candela-footprint
//!
//! HTTP connector for a footprint aggregation backend. The backend exposes
//! one endpoint per timeframe, `GET {base}/api/footprint/history/{tf}`,
//! returning a JSON array of raw candle records. This crate does transport
//! and decoding only: records come back exactly as serialized and flow into
//! the sanitizer downstream, and failures are returned as typed errors for
//! the polling session to degrade.
//!
//! No retry logic lives here; the poll cadence is the retry.
#![warn(missing_docs)]

mod builder;

pub use builder::FootprintConnectorBuilder;

use async_trait::async_trait;
use url::Url;

use candela_core::HistorySource;
use candela_types::{CandelaError, RawSample, Timeframe};

/// Connector that serves candle history from a footprint backend over HTTP.
#[derive(Clone, Debug)]
pub struct FootprintConnector {
    http: reqwest::Client,
    base_url: Url,
}

impl FootprintConnector {
    pub(crate) const fn from_parts(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// Start building a connector for the backend at `base_url`.
    #[must_use]
    pub fn builder(base_url: Url) -> FootprintConnectorBuilder {
        FootprintConnectorBuilder::new(base_url)
    }

    /// Build a connector with default settings from a base-URL string.
    ///
    /// # Errors
    /// Returns `InvalidArg` if `base_url` does not parse as an absolute URL,
    /// or if the underlying HTTP client cannot be constructed.
    pub fn from_base_url(base_url: &str) -> Result<Self, CandelaError> {
        let url = Url::parse(base_url)
            .map_err(|e| CandelaError::InvalidArg(format!("invalid base url {base_url:?}: {e}")))?;
        Self::builder(url).build()
    }

    fn endpoint(&self, timeframe: Timeframe) -> Result<Url, CandelaError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                CandelaError::InvalidArg(format!(
                    "base url {} cannot carry a path",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(["api", "footprint", "history", timeframe.as_str()]);
        Ok(url)
    }
}

#[async_trait]
impl HistorySource for FootprintConnector {
    fn name(&self) -> &'static str {
        "candela-footprint"
    }

    fn vendor(&self) -> &'static str {
        "Footprint"
    }

    async fn history(&self, timeframe: Timeframe) -> Result<Vec<RawSample>, CandelaError> {
        let url = self.endpoint(timeframe)?;

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| CandelaError::transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CandelaError::status(status.as_u16()));
        }

        let samples: Vec<RawSample> = response
            .json()
            .await
            .map_err(|e| CandelaError::decode(e.to_string()))?;

        tracing::debug!(timeframe = %timeframe, rows = samples.len(), "fetched footprint history");
        Ok(samples)
    }
}
