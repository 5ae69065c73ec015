//! Order Status Polling
//!
//! Once an order enters the payment step, a background task re-fetches it on
//! a fixed cadence until the backend reports `paid`. Poll failures are
//! silent — the next tick simply tries again. There is deliberately no
//! max-attempt cap or backoff; the loop runs until payment or cancellation.
//!
//! Cancellation is deterministic: the task is aborted on [`StatusPoller::stop`]
//! and on drop, so rapid open/close cycles cannot leak a poll against a
//! stale order.

use crate::api::{ApiClient, OrderStatus};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::debug;

/// Fixed poll cadence used by the storefront
pub const POLL_INTERVAL: Duration = Duration::from_millis(3000);

pub struct StatusPoller {
    status_rx: watch::Receiver<OrderStatus>,
    handle: JoinHandle<()>,
}

impl StatusPoller {
    /// Starts polling `order_id` at [`POLL_INTERVAL`]. The first check fires
    /// immediately, matching the UI which checks once before arming the timer.
    pub fn spawn(api: ApiClient, order_id: u64, initial: OrderStatus) -> Self {
        Self::spawn_with_interval(api, order_id, initial, POLL_INTERVAL)
    }

    /// Same as [`spawn`](StatusPoller::spawn) with an explicit cadence.
    pub fn spawn_with_interval(
        api: ApiClient,
        order_id: u64,
        initial: OrderStatus,
        interval: Duration,
    ) -> Self {
        let (status_tx, status_rx) = watch::channel(initial);
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // One request per tick; a slow fetch delays the next tick
            // instead of stacking requests.
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                match api.order(order_id).await {
                    Ok(order) => {
                        let paid = order.status.is_paid();
                        if status_tx.send(order.status).is_err() {
                            // Receiver gone, nobody is watching anymore.
                            break;
                        }
                        if paid {
                            debug!(order_id, "order paid, polling stopped");
                            break;
                        }
                    }
                    Err(err) => {
                        debug!(order_id, error = %err, "status poll failed, retrying next tick");
                    }
                }
            }
        });
        Self { status_rx, handle }
    }

    /// Last observed status.
    pub fn status(&self) -> OrderStatus {
        *self.status_rx.borrow()
    }

    /// Receiver for awaiting status changes.
    pub fn subscribe(&self) -> watch::Receiver<OrderStatus> {
        self.status_rx.clone()
    }

    pub fn is_paid(&self) -> bool {
        self.status().is_paid()
    }

    /// Cancels the polling task. Also happens on drop.
    pub fn stop(&self) {
        self.handle.abort();
    }
}

impl Drop for StatusPoller {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
