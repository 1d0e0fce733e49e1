//! candela-mock
//!
//! Mock history sources for CI-safe examples and tests.
//!
//! [`MockSource`] serves a deterministic fixture session for every
//! timeframe. [`DynamicMockSource`] defers all behavior to an external
//! controller so tests can script per-timeframe responses, failures, and
//! stalls, and inspect the sequence of requests a session issued.

use async_trait::async_trait;

use candela_core::HistorySource;
use candela_types::{CandelaError, RawSample, Timeframe};

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicMockController, DynamicMockSource, MockBehavior};

/// Mock source for CI-safe examples. Provides deterministic data from static fixtures.
pub struct MockSource;

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSource {
    /// A fixture-backed source.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl HistorySource for MockSource {
    fn name(&self) -> &'static str {
        "candela-mock"
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    async fn history(&self, timeframe: Timeframe) -> Result<Vec<RawSample>, CandelaError> {
        Ok(fixtures::history::by_timeframe(timeframe))
    }
}
