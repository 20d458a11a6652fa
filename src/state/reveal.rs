// Reveal animations
// Landing page cards fade and slide in the first time they scroll into view

use std::collections::HashSet;

/// Seconds a card takes to fade in once seen
pub const REVEAL_DURATION_SECS: f32 = 0.6;

/// Distance in points a card slides up while fading in
pub const REVEAL_SLIDE: f32 = 20.0;

/// Remembers which cards have been on screen
///
/// Once a card is seen it stays revealed, even after it scrolls away again.
#[derive(Debug, Clone, Default)]
pub struct RevealAnimator {
    seen: HashSet<String>,
}

impl RevealAnimator {
    pub fn is_revealed(&self, key: &str) -> bool {
        self.seen.contains(key)
    }

    /// Record whether the card `key` is visible this frame
    /// Returns whether the card is revealed afterwards
    pub fn observe(&mut self, key: &str, visible: bool) -> bool {
        if visible && !self.seen.contains(key) {
            tracing::debug!(card = key, "Revealing card");
            self.seen.insert(key.to_string());
        }
        self.is_revealed(key)
    }

    #[allow(dead_code)] // Used in tests
    pub fn len(&self) -> usize {
        self.seen.len()
    }
}
