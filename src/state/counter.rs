// Animated statistic counters
// Counts a landing-page figure like "500+" up from zero once it scrolls into view

use std::time::{Duration, Instant};

/// Total time a counter takes to reach its final value
pub const COUNTER_DURATION: Duration = Duration::from_millis(2000);

/// Number of increments between zero and the final value
pub const COUNTER_STEPS: u32 = 50;

/// Numeric part of a statistic label plus the decorations to re-apply
#[derive(Debug, Clone, Copy, PartialEq)]
struct CounterFormat {
    target: f64,
    decimal: bool,
    plus: bool,
    liters: bool,
    percent: bool,
}

impl CounterFormat {
    /// Parse the leading number of `text`; `None` if there is none
    fn parse(text: &str) -> Option<Self> {
        let trimmed = text.trim_start();
        let numeric: String = trimmed
            .char_indices()
            .take_while(|&(i, c)| c.is_ascii_digit() || c == '.' || (i == 0 && c == '-'))
            .map(|(_, c)| c)
            .collect();
        let target: f64 = numeric.parse().ok()?;

        Some(Self {
            target,
            decimal: text.contains('.'),
            plus: text.contains('+'),
            liters: text.contains('L'),
            percent: text.contains('%'),
        })
    }

    fn render(&self, value: f64) -> String {
        let mut out = if self.decimal {
            format!("{:.1}", value)
        } else {
            format!("{}", value.floor() as i64)
        };
        if self.plus {
            out.push('+');
        }
        if self.liters {
            out.push('L');
        }
        if self.percent {
            out.push('%');
        }
        out
    }
}

/// A statistic label whose number animates from zero to its final text
#[derive(Debug, Clone)]
pub struct StatCounter {
    /// Caption shown under the number
    pub caption: String,
    final_text: String,
    format: Option<CounterFormat>,
    started_at: Option<Instant>,
}

impl StatCounter {
    pub fn new(final_text: impl Into<String>, caption: impl Into<String>) -> Self {
        let final_text = final_text.into();
        Self {
            caption: caption.into(),
            format: CounterFormat::parse(&final_text),
            final_text,
            started_at: None,
        }
    }

    /// Start the animation; later calls are ignored so it only runs once
    pub fn start(&mut self, now: Instant) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    pub fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    /// Whether the counter is still animating at `now`
    pub fn is_animating(&self, now: Instant) -> bool {
        match self.started_at {
            Some(start) if self.format.is_some() => now.duration_since(start) < COUNTER_DURATION,
            _ => false,
        }
    }

    /// Text to display at `now`
    ///
    /// Before the counter starts this is the final text, matching what the
    /// page shows for elements that never become visible.
    pub fn display(&self, now: Instant) -> String {
        match self.started_at {
            Some(start) => self.frame(now.duration_since(start)),
            None => self.final_text.clone(),
        }
    }

    /// Text shown `elapsed` after the counter started
    ///
    /// The first frame already shows one increment, so the counter never
    /// displays zero.
    pub fn frame(&self, elapsed: Duration) -> String {
        let Some(format) = self.format else {
            return self.final_text.clone();
        };

        let step_ms = COUNTER_DURATION.as_millis() / u128::from(COUNTER_STEPS);
        let steps = (elapsed.as_millis() / step_ms + 1).min(u128::from(COUNTER_STEPS)) as f64;
        let current = format.target / f64::from(COUNTER_STEPS) * steps;

        if steps >= f64::from(COUNTER_STEPS) || current >= format.target {
            self.final_text.clone()
        } else {
            format.render(current)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_counter_with_plus() {
        let counter = StatCounter::new("500+", "Plants monitored");
        assert_eq!(counter.frame(Duration::ZERO), "10+");
        assert_eq!(counter.frame(Duration::from_millis(39)), "10+");
        assert_eq!(counter.frame(Duration::from_millis(40)), "20+");
        assert_eq!(counter.frame(Duration::from_millis(1000)), "260+");
        assert_eq!(counter.frame(Duration::from_millis(1960)), "500+");
        assert_eq!(counter.frame(Duration::from_millis(2000)), "500+");
        assert_eq!(counter.frame(Duration::from_secs(10)), "500+");
    }

    #[test]
    fn test_first_frame_is_one_increment() {
        for (text, first) in [("500+", "10+"), ("50%", "1%"), ("100", "2")] {
            let counter = StatCounter::new(text, "Stat");
            assert_eq!(counter.frame(Duration::ZERO), first, "first frame of {text}");
        }
    }

    #[test]
    fn test_percent_counter() {
        let counter = StatCounter::new("50%", "Less water used");
        assert_eq!(counter.frame(Duration::from_millis(400)), "11%");
    }

    #[test]
    fn test_decimal_counter_keeps_one_digit() {
        let counter = StatCounter::new("2.5L", "Water saved daily");
        assert_eq!(counter.frame(Duration::from_millis(360)), "0.5L");
        assert_eq!(counter.frame(COUNTER_DURATION), "2.5L");
    }

    #[test]
    fn test_non_numeric_text_is_not_animated() {
        let counter = StatCounter::new("24/7", "Monitoring");
        // Leading number parses, so this one still animates
        assert_eq!(counter.frame(Duration::from_millis(400)), "5");

        let counter = StatCounter::new("Always", "Monitoring");
        assert_eq!(counter.frame(Duration::ZERO), "Always");
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut counter = StatCounter::new("100", "Gardens");
        let t0 = Instant::now();
        assert_eq!(counter.display(t0), "100");
        assert!(!counter.is_started());

        counter.start(t0);
        counter.start(t0 + Duration::from_millis(1000));

        assert!(counter.is_started());
        assert!(counter.is_animating(t0 + Duration::from_millis(1000)));
        assert_eq!(counter.display(t0 + Duration::from_millis(1000)), "52");
        assert!(!counter.is_animating(t0 + COUNTER_DURATION));
    }

    #[test]
    fn test_zero_target_shows_final_text() {
        let counter = StatCounter::new("0", "Pesticides used");
        assert_eq!(counter.frame(Duration::ZERO), "0");
    }
}
