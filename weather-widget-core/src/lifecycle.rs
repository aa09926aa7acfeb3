//! Periodic refresh with an explicit start/stop lifecycle
//!
//! # Example
//!
//! ```ignore
//! let controller = Arc::new(WidgetController::new(locator, client, surface, config));
//!
//! // Runs immediately, then every 15 minutes
//! let lifecycle = RefreshLifecycle::start(controller, Some(Duration::from_secs(900)));
//!
//! // On teardown
//! lifecycle.stop();
//! ```

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use crate::api::ConditionsSource;
use crate::controller::WidgetController;
use crate::location::Locator;
use crate::surface::Surface;

/// Handle to a running refresh timer
///
/// Each tick spawns its own run, so a slow run never delays the next tick and
/// overlapping runs are possible. Stopping (or dropping the handle) cancels the
/// timer; runs already in flight finish on their own.
pub struct RefreshLifecycle {
    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

impl RefreshLifecycle {
    /// Run once now and, if `interval` is set, again on every tick
    pub fn start<L, C, S>(
        controller: Arc<WidgetController<L, C, S>>,
        interval: Option<Duration>,
    ) -> Self
    where
        L: Locator + 'static,
        C: ConditionsSource + 'static,
        S: Surface + 'static,
    {
        let cancel = CancellationToken::new();
        let token = cancel.clone();

        tracing::info!(interval_secs = interval.map(|d| d.as_secs()), "Widget refresh started");

        let handle = tokio::spawn(async move {
            let Some(period) = interval else {
                spawn_run(&controller);
                return;
            };

            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    // first tick completes immediately
                    _ = ticker.tick() => spawn_run(&controller),
                }
            }
        });

        Self { cancel, handle }
    }

    /// Cancel the timer
    pub fn stop(&self) {
        if !self.cancel.is_cancelled() {
            tracing::info!("Widget refresh stopped");
            self.cancel.cancel();
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.cancel.is_cancelled() || self.handle.is_finished()
    }
}

impl Drop for RefreshLifecycle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

fn spawn_run<L, C, S>(controller: &Arc<WidgetController<L, C, S>>)
where
    L: Locator + 'static,
    C: ConditionsSource + 'static,
    S: Surface + 'static,
{
    let controller = Arc::clone(controller);
    tokio::spawn(async move {
        let state = controller.run().await;
        tracing::debug!(state = state.label(), "Widget run finished");
    });
}
