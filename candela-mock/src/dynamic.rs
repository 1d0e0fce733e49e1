use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use candela_core::HistorySource;
use candela_types::{CandelaError, RawSample, Timeframe};

/// Instruction for how a method should behave for a given input.
#[derive(Clone)]
pub enum MockBehavior<T> {
    /// Return the provided value immediately.
    Return(T),
    /// Fail immediately with the provided error.
    Fail(CandelaError),
    /// Hang indefinitely (simulate a stalled backend).
    Hang,
}

#[derive(Default)]
struct InternalState {
    history_rules: HashMap<Timeframe, MockBehavior<Vec<RawSample>>>,
    history_requests: Vec<Timeframe>,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for `history` calls for a specific timeframe.
    pub async fn set_history_behavior(
        &self,
        timeframe: Timeframe,
        behavior: MockBehavior<Vec<RawSample>>,
    ) {
        let mut guard = self.state.lock().await;
        guard.history_rules.insert(timeframe, behavior);
    }

    /// Return the sequence of timeframes requested so far.
    pub async fn get_history_requests(&self) -> Vec<Timeframe> {
        let guard = self.state.lock().await;
        guard.history_requests.clone()
    }

    /// Clear all configured behaviors and the request log.
    pub async fn clear_all_behaviors(&self) {
        let mut guard = self.state.lock().await;
        guard.history_rules.clear();
        guard.history_requests.clear();
    }
}

/// A history source that defers all behavior to an external controller.
pub struct DynamicMockSource {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockSource {
    /// Create a new dynamic mock source and its controller.
    #[must_use]
    pub fn new_with_controller(
        name: &'static str,
    ) -> (Arc<dyn HistorySource>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self { name, state });
        (me as Arc<dyn HistorySource>, controller)
    }
}

#[async_trait]
impl HistorySource for DynamicMockSource {
    fn name(&self) -> &'static str {
        self.name
    }

    fn vendor(&self) -> &'static str {
        "DynamicMock"
    }

    async fn history(&self, timeframe: Timeframe) -> Result<Vec<RawSample>, CandelaError> {
        // Log the request and snapshot the behavior without holding the lock
        // across await points.
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.history_requests.push(timeframe);
            guard.history_rules.get(&timeframe).cloned()
        };

        match behavior {
            Some(MockBehavior::Return(samples)) => Ok(samples),
            Some(MockBehavior::Fail(e)) => Err(e),
            Some(MockBehavior::Hang) => {
                std::future::pending::<()>().await;
                unreachable!()
            }
            None => Err(CandelaError::unsupported(format!("history/{timeframe}"))),
        }
    }
}
