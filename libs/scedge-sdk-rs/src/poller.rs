//! Periodic refresh of the waitlist for admin views.

use std::time::Duration;

use scedge_types::WaitlistEntry;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::debug;

use crate::client::ScedgeClient;

/// How often an admin view refreshes the list.
pub const DEFAULT_POLL_PERIOD: Duration = Duration::from_secs(5);

/// Latest outcome of polling the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollSnapshot {
    /// No poll has completed yet.
    Pending,
    Loaded(Vec<WaitlistEntry>),
    /// The last poll failed; holds the error message.
    Failed(String),
}

/// Repeating `get_emails` timer tied to the lifetime of this value.
///
/// The first poll runs immediately. Polling stops on [`WaitlistPoller::stop`]
/// or when the poller is dropped. A request in flight at that moment is
/// abandoned.
pub struct WaitlistPoller {
    receiver: watch::Receiver<PollSnapshot>,
    handle: JoinHandle<()>,
}

impl WaitlistPoller {
    /// Start polling every [`DEFAULT_POLL_PERIOD`]. Must be called within a
    /// Tokio runtime.
    pub fn start(client: ScedgeClient) -> Self {
        Self::with_period(client, DEFAULT_POLL_PERIOD)
    }

    pub fn with_period(client: ScedgeClient, period: Duration) -> Self {
        let (sender, receiver) = watch::channel(PollSnapshot::Pending);

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let snapshot = match client.get_emails().await {
                    Ok(entries) => PollSnapshot::Loaded(entries),
                    Err(err) => {
                        debug!(error = %err, "Waitlist poll failed");
                        PollSnapshot::Failed(err.to_string())
                    }
                };
                if sender.send(snapshot).is_err() {
                    break;
                }
            }
        });

        Self { receiver, handle }
    }

    /// A receiver that observes every published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<PollSnapshot> {
        self.receiver.clone()
    }

    pub fn latest(&self) -> PollSnapshot {
        self.receiver.borrow().clone()
    }

    pub fn stop(&self) {
        self.handle.abort();
    }

    pub fn is_stopped(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for WaitlistPoller {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
