//! Single-slot, auto-expiring toast channel.
//!
//! One message is live at most; a new `show` preempts the current one and
//! restarts the dismissal timer. There is no queue, so a burst of calls
//! collapses to the most recent message.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use cinebuz_models::Notification;
use tracing::debug;

use crate::subscription::{Subscribers, SubscriptionHandle};

pub const DEFAULT_DISMISS_AFTER: Duration = Duration::from_secs(3);

struct State {
    message: String,
    visible: bool,
    /// Bumped on every show/dismiss; an expiry timer carrying a stale epoch
    /// was preempted and does nothing.
    epoch: u64,
}

pub struct NotificationChannel {
    state: Arc<Mutex<State>>,
    subscribers: Arc<Subscribers<Notification>>,
    dismiss_after: Duration,
}

impl NotificationChannel {
    pub fn new() -> Self {
        Self::with_dismiss_after(DEFAULT_DISMISS_AFTER)
    }

    pub fn with_dismiss_after(dismiss_after: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new(State {
                message: String::new(),
                visible: false,
                epoch: 0,
            })),
            subscribers: Arc::new(Subscribers::new()),
            dismiss_after,
        }
    }

    pub fn current(&self) -> Notification {
        let guard = lock(&self.state);
        Notification {
            message: guard.message.clone(),
            visible: guard.visible,
        }
    }

    /// Observe notification state changes. The current state is delivered
    /// immediately.
    pub fn subscribe(
        &self,
        callback: impl Fn(&Notification) + Send + Sync + 'static,
    ) -> SubscriptionHandle {
        let callback = Arc::new(callback);
        let handle = self.subscribers.register(callback.clone());
        callback(&self.current());
        handle
    }

    /// Show `message`, replacing any current one and (re)starting the
    /// auto-dismiss timer. Must be called within a tokio runtime.
    pub fn show(&self, message: impl Into<String>) {
        let message = message.into();
        debug!(message = %message, "showing notification");
        let (notification, epoch) = {
            let mut guard = lock(&self.state);
            guard.epoch += 1;
            guard.message = message;
            guard.visible = true;
            (
                Notification {
                    message: guard.message.clone(),
                    visible: true,
                },
                guard.epoch,
            )
        };
        self.subscribers.notify(&notification);

        let state = Arc::clone(&self.state);
        let subscribers = Arc::clone(&self.subscribers);
        let dismiss_after = self.dismiss_after;
        tokio::spawn(async move {
            tokio::time::sleep(dismiss_after).await;
            let expired = {
                let mut guard = lock(&state);
                if guard.epoch != epoch || !guard.visible {
                    return;
                }
                guard.visible = false;
                guard.message.clear();
                Notification::default()
            };
            subscribers.notify(&expired);
        });
    }

    /// Clear visibility immediately and cancel the pending timer.
    pub fn dismiss(&self) {
        let cleared = {
            let mut guard = lock(&self.state);
            guard.epoch += 1;
            if !guard.visible {
                return;
            }
            guard.visible = false;
            guard.message.clear();
            Notification::default()
        };
        self.subscribers.notify(&cleared);
    }
}

impl Default for NotificationChannel {
    fn default() -> Self {
        Self::new()
    }
}

fn lock(state: &Mutex<State>) -> std::sync::MutexGuard<'_, State> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn auto_dismisses_after_the_configured_duration() {
        let channel = NotificationChannel::new();
        channel.show("You must log in to save this");
        assert_eq!(
            channel.current(),
            Notification {
                message: "You must log in to save this".to_string(),
                visible: true,
            }
        );

        tokio::time::sleep(Duration::from_millis(2_900)).await;
        assert!(channel.current().visible);

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(!channel.current().visible);
        assert!(channel.current().message.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn new_show_preempts_and_restarts_the_timer() {
        let channel = NotificationChannel::new();
        channel.show("first");
        tokio::time::sleep(Duration::from_millis(2_000)).await;

        channel.show("second");
        // The first message's timer must not dismiss the second message.
        tokio::time::sleep(Duration::from_millis(1_500)).await;
        assert_eq!(channel.current().message, "second");
        assert!(channel.current().visible);

        tokio::time::sleep(Duration::from_millis(1_600)).await;
        assert!(!channel.current().visible);
    }

    #[tokio::test(start_paused = true)]
    async fn burst_collapses_to_most_recent_message() {
        let channel = NotificationChannel::new();
        channel.show("one");
        channel.show("two");
        channel.show("three");
        assert_eq!(channel.current().message, "three");
    }

    #[tokio::test(start_paused = true)]
    async fn manual_dismiss_clears_immediately() {
        let channel = NotificationChannel::new();
        channel.show("something");
        channel.dismiss();
        assert!(!channel.current().visible);

        // The cancelled timer must not resurrect anything.
        tokio::time::sleep(Duration::from_millis(3_100)).await;
        assert!(!channel.current().visible);
    }

    #[tokio::test(start_paused = true)]
    async fn subscribers_observe_show_and_expiry() {
        let channel = NotificationChannel::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let _sub = {
            let seen = seen.clone();
            channel.subscribe(move |n| {
                seen.lock().unwrap().push(n.clone());
            })
        };
        channel.show("hello");
        tokio::time::sleep(Duration::from_millis(3_100)).await;

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 3); // initial, shown, expired
        assert!(!seen[0].visible);
        assert!(seen[1].visible);
        assert!(!seen[2].visible);
    }
}
