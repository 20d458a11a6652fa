// Application state management
// Navigation, header, chat window, and landing page state

use std::time::{Duration, Instant};

use crate::state::counter::StatCounter;
use crate::state::notifications::{Notifications, ToastKind};
use crate::state::reveal::RevealAnimator;

/// Canned questions offered under the chat input
pub const QUICK_REPLIES: [&str; 3] = [
    "list crops",
    "tomato general information",
    "How often should I water my herbs?",
];

/// How long the quick-reply row stays hidden after one is used
pub const QUICK_REPLY_COOLDOWN: Duration = Duration::from_millis(2000);

/// Scroll offset (in points) the header must pass before it hides
pub const HEADER_HIDE_OFFSET: f32 = 100.0;

/// Delay before the welcome toast appears
pub const WELCOME_DELAY: Duration = Duration::from_millis(2000);

/// Hides the page header while scrolling down and shows it on the way up
#[derive(Debug, Clone)]
pub struct HeaderHider {
    last_offset: f32,
    visible: bool,
}

impl Default for HeaderHider {
    fn default() -> Self {
        Self {
            last_offset: 0.0,
            visible: true,
        }
    }
}

impl HeaderHider {
    /// Feed the current scroll offset; returns whether the header is visible
    ///
    /// An unchanged offset keeps the previous visibility, since this is
    /// called every frame rather than on scroll events.
    pub fn on_scroll(&mut self, offset: f32) -> bool {
        if offset > self.last_offset && offset > HEADER_HIDE_OFFSET {
            self.visible = false;
        } else if offset != self.last_offset {
            self.visible = true;
        }
        self.last_offset = offset;
        self.visible
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

/// Landing page sections reachable from the navigation panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Features,
    Impact,
    About,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::Features,
        Section::Impact,
        Section::About,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Features => "Features",
            Section::Impact => "Impact",
            Section::About => "About",
        }
    }
}

/// UI-specific state
#[derive(Debug, Clone)]
pub struct UiState {
    /// Whether the navigation side panel is open
    pub nav_visible: bool,
    /// Last seen window size, used to close navigation on resize
    last_window_size: Option<(f32, f32)>,
    /// Section the landing page should scroll to on the next frame
    scroll_target: Option<Section>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            nav_visible: false,
            last_window_size: None,
            scroll_target: None,
        }
    }
}

impl UiState {
    pub fn toggle_nav(&mut self) {
        self.nav_visible = !self.nav_visible;
    }

    pub fn close_nav(&mut self) {
        self.nav_visible = false;
    }

    /// Request a scroll to `section` and close the navigation panel
    pub fn navigate_to(&mut self, section: Section) {
        self.scroll_target = Some(section);
        self.close_nav();
    }

    /// Consume the pending scroll request, if any
    pub fn take_scroll_target(&mut self) -> Option<Section> {
        self.scroll_target.take()
    }

    /// Record the window size and close navigation if it changed
    /// Returns true if the window was resized
    pub fn observe_window_size(&mut self, size: (f32, f32)) -> bool {
        let resized = matches!(self.last_window_size, Some(last) if last != size);
        self.last_window_size = Some(size);
        if resized {
            self.close_nav();
        }
        resized
    }
}

/// State of the floating chat window (the conversation lives in `ChatBridge`)
#[derive(Debug, Clone, Default)]
pub struct ChatWindowState {
    /// Whether the chat window is shown
    pub open: bool,
    /// Text currently typed into the input box
    pub input: String,
    /// Quick replies are hidden until this instant
    quick_replies_hidden_until: Option<Instant>,
}

impl ChatWindowState {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Whether the send button should be enabled
    pub fn can_send(&self, pending: bool) -> bool {
        !pending && !self.input.trim().is_empty()
    }

    /// Take the typed text, clearing the input box
    pub fn take_input(&mut self) -> String {
        std::mem::take(&mut self.input)
    }

    /// Hide the quick-reply row for the cooldown period
    pub fn hide_quick_replies(&mut self, now: Instant) {
        self.quick_replies_hidden_until = Some(now + QUICK_REPLY_COOLDOWN);
    }

    pub fn quick_replies_visible(&self, now: Instant) -> bool {
        self.quick_replies_hidden_until.map_or(true, |until| now >= until)
    }
}

/// Main application state
/// Everything the page shows except the conversation itself
#[derive(Debug, Clone)]
pub struct AppState {
    /// UI state preferences
    pub ui_state: UiState,
    /// Header visibility driven by the landing page scroll offset
    pub header: HeaderHider,
    /// Chat window state
    pub chat: ChatWindowState,
    /// Statistic counters on the landing page
    pub stats: Vec<StatCounter>,
    /// Toast notifications
    pub notifications: Notifications,
    /// Which landing page cards have already faded in
    pub reveal: RevealAnimator,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            ui_state: UiState::default(),
            header: HeaderHider::default(),
            chat: ChatWindowState::default(),
            stats: vec![
                StatCounter::new("500+", "Plants monitored"),
                StatCounter::new("50%", "Less water used"),
                StatCounter::new("2.5L", "Saved per plant daily"),
                StatCounter::new("24/7", "Garden monitoring"),
            ],
            notifications: Notifications::new(),
            reveal: RevealAnimator::default(),
        }
    }
}

impl AppState {
    /// Create a new application state with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the startup greeting
    pub fn schedule_welcome(&mut self, now: Instant) {
        self.notifications.schedule(
            "🌱 Welcome to PlantCare AI! Your garden monitoring system is online.",
            ToastKind::Success,
            now,
            WELCOME_DELAY,
            crate::state::notifications::DEFAULT_TOAST_DURATION,
        );
    }

    /// Whether any counter is mid-animation at `now`
    pub fn stats_animating(&self, now: Instant) -> bool {
        self.stats.iter().any(|s| s.is_animating(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_creation() {
        let state = AppState::new();
        assert!(!state.ui_state.nav_visible);
        assert!(!state.chat.open);
        assert!(state.header.is_visible());
        assert_eq!(state.stats.len(), 4);
        assert!(state.notifications.is_empty());
    }

    #[test]
    fn test_header_hides_when_scrolling_down_past_threshold() {
        let mut header = HeaderHider::default();
        assert!(header.on_scroll(50.0)); // down, but under the threshold
        assert!(!header.on_scroll(150.0));
        assert!(!header.on_scroll(150.0)); // no movement keeps it hidden
        assert!(header.on_scroll(120.0)); // scrolling up shows it
        assert!(!header.on_scroll(300.0));
        assert!(header.on_scroll(0.0));
    }

    #[test]
    fn test_nav_toggle_and_close_on_resize() {
        let mut ui = UiState::default();
        ui.toggle_nav();
        assert!(ui.nav_visible);

        assert!(!ui.observe_window_size((1000.0, 700.0))); // first observation
        assert!(ui.nav_visible);
        assert!(!ui.observe_window_size((1000.0, 700.0)));
        assert!(ui.nav_visible);

        assert!(ui.observe_window_size((800.0, 600.0)));
        assert!(!ui.nav_visible);
    }

    #[test]
    fn test_navigate_to_requests_scroll_and_closes_nav() {
        let mut ui = UiState::default();
        assert_eq!(ui.take_scroll_target(), None);

        ui.toggle_nav();
        ui.navigate_to(Section::Impact);
        assert!(!ui.nav_visible);
        assert_eq!(ui.take_scroll_target(), Some(Section::Impact));
        // Consumed once, so the page does not keep snapping back
        assert_eq!(ui.take_scroll_target(), None);

        ui.navigate_to(Section::Features);
        ui.navigate_to(Section::About);
        assert_eq!(ui.take_scroll_target(), Some(Section::About));
    }

    #[test]
    fn test_section_labels() {
        let labels: Vec<_> = Section::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(labels, ["Home", "Features", "Impact", "About"]);
    }

    #[test]
    fn test_chat_window_toggle() {
        let mut chat = ChatWindowState::default();
        chat.toggle();
        assert!(chat.open);
        chat.toggle();
        assert!(!chat.open);
        chat.toggle();
        chat.close();
        assert!(!chat.open);
    }

    #[test]
    fn test_can_send_requires_text_and_idle() {
        let mut chat = ChatWindowState::default();
        assert!(!chat.can_send(false));

        chat.input = "   ".to_string();
        assert!(!chat.can_send(false));

        chat.input = "list crops".to_string();
        assert!(chat.can_send(false));
        assert!(!chat.can_send(true));

        assert_eq!(chat.take_input(), "list crops");
        assert!(chat.input.is_empty());
    }

    #[test]
    fn test_quick_replies_hidden_for_cooldown() {
        let mut chat = ChatWindowState::default();
        let now = Instant::now();
        assert!(chat.quick_replies_visible(now));

        chat.hide_quick_replies(now);
        assert!(!chat.quick_replies_visible(now + Duration::from_millis(1999)));
        assert!(chat.quick_replies_visible(now + QUICK_REPLY_COOLDOWN));
    }

    #[test]
    fn test_schedule_welcome() {
        let mut state = AppState::new();
        let now = Instant::now();
        state.schedule_welcome(now);

        assert_eq!(state.notifications.visible(now).count(), 0);
        assert_eq!(state.notifications.visible(now + WELCOME_DELAY).count(), 1);
    }

    #[test]
    fn test_stats_animating() {
        let mut state = AppState::new();
        let now = Instant::now();
        assert!(!state.stats_animating(now));

        state.stats[0].start(now);
        assert!(state.stats_animating(now + Duration::from_millis(500)));
        assert!(!state.stats_animating(now + Duration::from_secs(3)));
    }
}
