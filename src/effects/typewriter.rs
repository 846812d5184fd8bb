//! Hero tagline typewriter
//!
//! Reveals a fixed string one character per interval once started. Runs a
//! single time; restarting is not supported within a page lifetime.

/// Typewriter state. Time comes in as `now_ms` so the reveal is a pure
/// function of when it started.
#[derive(Debug, Clone)]
pub struct Typewriter {
    text: String,
    char_count: usize,
    interval_ms: f64,
    started_at: Option<f64>,
}

impl Typewriter {
    pub fn new(text: impl Into<String>, interval_ms: f64) -> Self {
        let text = text.into();
        let char_count = text.chars().count();
        Self {
            text,
            char_count,
            interval_ms: interval_ms.max(1.0),
            started_at: None,
        }
    }

    /// Begin typing. Later calls are no-ops; the effect runs once.
    pub fn start(&mut self, now_ms: f64) {
        if self.started_at.is_none() {
            self.started_at = Some(now_ms);
        }
    }

    pub fn started(&self) -> bool {
        self.started_at.is_some()
    }

    /// The prefix visible at `now_ms`: one character immediately on start,
    /// one more per interval after. Char-boundary safe.
    pub fn visible(&self, now_ms: f64) -> &str {
        let Some(start) = self.started_at else {
            return "";
        };
        let elapsed = (now_ms - start).max(0.0);
        let shown = ((elapsed / self.interval_ms) as usize + 1).min(self.char_count);
        let end = self
            .text
            .char_indices()
            .nth(shown)
            .map_or(self.text.len(), |(i, _)| i);
        &self.text[..end]
    }

    pub fn is_done(&self, now_ms: f64) -> bool {
        self.started() && self.visible(now_ms).len() == self.text.len()
    }
}
