use std::sync::Arc;

use candela_core::HistorySource;
use candela_types::{CandelaConfig, CandelaError, YearRange};

/// Session factory that couples a history source with pipeline configuration.
pub struct Candela {
    pub(crate) source: Arc<dyn HistorySource>,
    pub(crate) cfg: CandelaConfig,
}

impl std::fmt::Debug for Candela {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Candela")
            .field("source", &self.source.name())
            .field("cfg", &self.cfg)
            .finish()
    }
}

/// Builder for constructing a `Candela` session factory with custom configuration.
pub struct CandelaBuilder {
    source: Option<Arc<dyn HistorySource>>,
    cfg: CandelaConfig,
}

impl Default for CandelaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CandelaBuilder {
    /// Create a new builder with sensible defaults.
    ///
    /// Behavior and trade-offs:
    /// - Starts with no source; you must register one via [`with_source`](Self::with_source).
    /// - Defaults mirror the backend's dashboard: 1 s poll cadence, 15 visible
    ///   candles, 0.5 price-axis padding, plausible years 2000–2050, and a
    ///   100000 price ceiling.
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: None,
            cfg: CandelaConfig::default(),
        }
    }

    /// Register the history source every subscription will poll.
    ///
    /// Behavior and trade-offs:
    /// - Exactly one source is consulted; there is no fallback chain. Wrap
    ///   the source yourself if you need failover, caching, or quotas.
    #[must_use]
    pub fn with_source(mut self, source: Arc<dyn HistorySource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Replace the entire configuration in one step.
    #[must_use]
    pub const fn config(mut self, cfg: CandelaConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Set the delay between consecutive history fetches.
    ///
    /// Behavior and trade-offs:
    /// - Shorter intervals track the backend more closely at the cost of one
    ///   request per tick. A fetch slower than the interval delays the next
    ///   tick rather than overlapping it.
    #[must_use]
    pub const fn poll_interval(mut self, interval: std::time::Duration) -> Self {
        self.cfg.poll.interval = interval;
        self
    }

    /// Set the maximum number of candles shown at once.
    #[must_use]
    pub const fn max_visible(mut self, max_visible: usize) -> Self {
        self.cfg.window.max_visible = max_visible;
        self
    }

    /// Set the margin added beyond the window's price extremes.
    #[must_use]
    pub const fn padding(mut self, padding: f64) -> Self {
        self.cfg.window.padding = padding;
        self
    }

    /// Set the vertical offset subtracted from both extent bounds.
    #[must_use]
    pub const fn y_offset(mut self, y_offset: f64) -> Self {
        self.cfg.window.y_offset = y_offset;
        self
    }

    /// Set the upper sanity bound for prices.
    #[must_use]
    pub const fn price_ceiling(mut self, ceiling: f64) -> Self {
        self.cfg.sanitize.price_ceiling = ceiling;
        self
    }

    /// Set the calendar-year range a bucket timestamp must fall into.
    #[must_use]
    pub const fn plausible_years(mut self, years: YearRange) -> Self {
        self.cfg.sanitize.plausible_years = years;
        self
    }

    /// Build the `Candela` session factory.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no source has been registered via
    /// [`with_source`](Self::with_source), or if the poll interval is zero.
    pub fn build(self) -> Result<Candela, CandelaError> {
        let Some(source) = self.source else {
            return Err(CandelaError::InvalidArg(
                "no history source registered; add one via with_source(...)".to_string(),
            ));
        };

        if self.cfg.poll.interval.is_zero() {
            return Err(CandelaError::InvalidArg(
                "poll interval must be non-zero".to_string(),
            ));
        }

        Ok(Candela {
            source,
            cfg: self.cfg,
        })
    }
}

impl Candela {
    /// Start building a new `Candela` instance.
    ///
    /// Typical usage chains source registration and configuration, e.g.:
    ///
    /// ```rust,ignore
    /// let candela = candela::Candela::builder()
    ///     .with_source(source)
    ///     .poll_interval(std::time::Duration::from_millis(500))
    ///     .max_visible(30)
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> CandelaBuilder {
        CandelaBuilder::new()
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &CandelaConfig {
        &self.cfg
    }

    /// Name of the registered history source.
    #[must_use]
    pub fn source_name(&self) -> &'static str {
        self.source.name()
    }
}
