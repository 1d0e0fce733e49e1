use std::sync::Arc;

use tokio::sync::{oneshot, watch};
use tokio::time::MissedTickBehavior;

use candela_core::poll::PollHandle;
use candela_core::{ChartFrame, ChartSurface, HistorySource, project};
use candela_types::{RawSample, SanitizeConfig, Timeframe, WindowConfig};

use crate::Candela;

/// One polled history snapshot: the raw records the source returned for the
/// selected timeframe, untouched by the sanitizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Timeframe the snapshot was fetched for.
    pub timeframe: Timeframe,
    /// Raw records exactly as the source returned them. Empty both before
    /// the first completed fetch and after a failed one.
    pub samples: Vec<RawSample>,
}

impl Snapshot {
    /// The "no data yet" snapshot a subscription starts from.
    #[must_use]
    pub const fn empty(timeframe: Timeframe) -> Self {
        Self {
            timeframe,
            samples: Vec::new(),
        }
    }
}

/// A live polling subscription for one timeframe.
///
/// Owns the poll timer through its [`PollHandle`]: dropping the subscription
/// aborts the timer, [`stop`](Self::stop) shuts it down gracefully. Consumers
/// either await [`changed`](Self::changed)/[`next_frame`](Self::next_frame)
/// or read the current state at their own pace via
/// [`snapshot`](Self::snapshot)/[`frame`](Self::frame).
pub struct Subscription {
    timeframe: Timeframe,
    handle: Option<PollHandle>,
    rx: watch::Receiver<Snapshot>,
    sanitize_cfg: SanitizeConfig,
    window_cfg: WindowConfig,
}

impl Subscription {
    /// Timeframe this subscription polls.
    #[must_use]
    pub const fn timeframe(&self) -> Timeframe {
        self.timeframe
    }

    /// The latest published snapshot (last writer wins).
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.rx.borrow().clone()
    }

    /// Project the latest snapshot into a chart frame.
    #[must_use]
    pub fn frame(&self) -> ChartFrame {
        let snapshot = self.snapshot();
        project(&snapshot.samples, &self.sanitize_cfg, &self.window_cfg)
    }

    /// Wait until a new snapshot is published.
    ///
    /// Returns `false` once the poll task has gone away and no further
    /// snapshot can arrive.
    pub async fn changed(&mut self) -> bool {
        self.rx.changed().await.is_ok()
    }

    /// Wait for the next snapshot and project it.
    ///
    /// `None` once the poll task has gone away.
    pub async fn next_frame(&mut self) -> Option<ChartFrame> {
        if self.changed().await {
            Some(self.frame())
        } else {
            None
        }
    }

    /// Gracefully stop the poll timer and wait for the task to wind down.
    pub async fn stop(mut self) {
        if let Some(handle) = self.handle.take() {
            handle.stop().await;
        }
    }
}

impl Candela {
    /// Start polling `timeframe` and return the live subscription.
    ///
    /// The first fetch fires immediately (the refresh-on-selection contract);
    /// subsequent fetches follow the configured interval. Each fetch is
    /// awaited before the next tick is armed, so a slow backend stretches the
    /// cadence instead of racing it.
    #[must_use]
    pub fn subscribe(&self, timeframe: Timeframe) -> Subscription {
        let (tx, rx) = watch::channel(Snapshot::empty(timeframe));
        let source = Arc::clone(&self.source);
        let interval = self.cfg.poll.interval;
        let (stop_tx, mut stop_rx) = oneshot::channel::<()>();

        let task = tokio::spawn(async move {
            let mut ticks = tokio::time::interval(interval);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    biased;
                    _ = &mut stop_rx => break,
                    _ = ticks.tick() => {
                        let snapshot = fetch_snapshot(source.as_ref(), timeframe).await;
                        if tx.send(snapshot).is_err() {
                            // Every receiver is gone; polling has no audience.
                            break;
                        }
                    }
                }
            }
        });

        Subscription {
            timeframe,
            handle: Some(PollHandle::new(task, stop_tx)),
            rx,
            sanitize_cfg: self.cfg.sanitize,
            window_cfg: self.cfg.window,
        }
    }

    /// Move a session to another timeframe.
    ///
    /// Stops `previous`'s timer before the new subscription starts, so two
    /// pollers never run side by side.
    pub async fn switch(&self, previous: Subscription, timeframe: Timeframe) -> Subscription {
        previous.stop().await;
        self.subscribe(timeframe)
    }
}

async fn fetch_snapshot(source: &dyn HistorySource, timeframe: Timeframe) -> Snapshot {
    match source.history(timeframe).await {
        Ok(samples) => Snapshot { timeframe, samples },
        Err(e) => {
            tracing::warn!(
                source = source.name(),
                timeframe = %timeframe,
                error = %e,
                "history fetch failed; publishing empty snapshot"
            );
            Snapshot::empty(timeframe)
        }
    }
}

/// Forward every new frame from `subscription` to `surface`.
///
/// Runs until the poll task goes away (the subscription was stopped from the
/// outside, or the session is torn down). Callers wanting a bounded run wrap
/// this in a timeout or `select!`.
pub async fn drive<S: ChartSurface>(subscription: &mut Subscription, surface: &mut S) {
    while subscription.changed().await {
        match subscription.frame() {
            ChartFrame::Ready { series, viewport } => surface.render(&series, &viewport),
            ChartFrame::Loading => surface.render_loading(),
        }
    }
}
