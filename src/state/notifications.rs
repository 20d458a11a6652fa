// Toast notifications
// Short-lived messages shown in the top-right corner of the window

use std::time::{Duration, Instant};

/// How long a toast stays on screen unless told otherwise
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(4000);

/// Visual style of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    #[allow(dead_code)] // Used in tests
    Info,
    Success,
}

/// A single notification
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    show_at: Instant,
    hide_at: Instant,
}

impl Toast {
    fn is_visible(&self, now: Instant) -> bool {
        now >= self.show_at && now < self.hide_at
    }
}

/// Queue of scheduled and visible toasts
#[derive(Debug, Clone, Default)]
pub struct Notifications {
    toasts: Vec<Toast>,
}

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a toast right away for the default duration
    #[allow(dead_code)] // Used in tests
    pub fn show(&mut self, message: impl Into<String>, kind: ToastKind, now: Instant) {
        self.schedule(message, kind, now, Duration::ZERO, DEFAULT_TOAST_DURATION);
    }

    /// Show a toast after `delay`, for `duration`
    pub fn schedule(
        &mut self,
        message: impl Into<String>,
        kind: ToastKind,
        now: Instant,
        delay: Duration,
        duration: Duration,
    ) {
        let show_at = now + delay;
        self.toasts.push(Toast {
            message: message.into(),
            kind,
            show_at,
            hide_at: show_at + duration,
        });
    }

    /// Toasts on screen at `now`, oldest first
    pub fn visible(&self, now: Instant) -> impl Iterator<Item = &Toast> {
        self.toasts.iter().filter(move |t| t.is_visible(now))
    }

    /// Drop toasts whose time is up
    pub fn prune(&mut self, now: Instant) {
        self.toasts.retain(|t| now < t.hide_at);
    }

    /// Time until the next toast appears or disappears
    pub fn next_change(&self, now: Instant) -> Option<Duration> {
        self.toasts
            .iter()
            .flat_map(|t| [t.show_at, t.hide_at])
            .filter(|&at| at > now)
            .map(|at| at - now)
            .min()
    }

    #[allow(dead_code)] // Used in tests
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_is_visible_until_duration_ends() {
        let mut notifications = Notifications::new();
        let now = Instant::now();
        notifications.show("Saved", ToastKind::Info, now);

        assert_eq!(notifications.visible(now).count(), 1);
        assert_eq!(notifications.visible(now + Duration::from_millis(3999)).count(), 1);
        assert_eq!(notifications.visible(now + DEFAULT_TOAST_DURATION).count(), 0);
    }

    #[test]
    fn test_scheduled_toast_waits_for_delay() {
        let mut notifications = Notifications::new();
        let now = Instant::now();
        notifications.schedule(
            "Welcome",
            ToastKind::Success,
            now,
            Duration::from_secs(2),
            DEFAULT_TOAST_DURATION,
        );

        assert_eq!(notifications.visible(now).count(), 0);
        assert_eq!(notifications.next_change(now), Some(Duration::from_secs(2)));

        let shown = now + Duration::from_secs(2);
        let toast = notifications.visible(shown).next().unwrap();
        assert_eq!(toast.message, "Welcome");
        assert_eq!(toast.kind, ToastKind::Success);
        assert_eq!(notifications.next_change(shown), Some(DEFAULT_TOAST_DURATION));
    }

    #[test]
    fn test_prune_removes_expired() {
        let mut notifications = Notifications::new();
        let now = Instant::now();
        notifications.show("first", ToastKind::Info, now);
        notifications.schedule(
            "second",
            ToastKind::Info,
            now,
            Duration::from_secs(10),
            DEFAULT_TOAST_DURATION,
        );

        notifications.prune(now + Duration::from_secs(5));
        assert_eq!(notifications.len(), 1);

        notifications.prune(now + Duration::from_secs(20));
        assert!(notifications.is_empty());
        assert_eq!(notifications.next_change(now), None);
    }
}
