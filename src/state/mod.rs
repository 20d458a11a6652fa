// State management module
// Handles page state, chat window state, counters, reveal animations, and notifications

pub mod app_state;
pub mod counter;
pub mod notifications;
pub mod reveal;

pub use app_state::{AppState, Section, QUICK_REPLIES};
pub use counter::StatCounter;
pub use notifications::{Toast, ToastKind};
pub use reveal::RevealAnimator;
