//! Search pipeline configuration.

use std::time::Duration;

/// Configuration parameters for the search pipeline.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Debounce window in milliseconds. Requests arriving within this
    /// window of the last issued call join its result instead of issuing
    /// a new one.
    pub debounce_ms: u64,

    /// Maximum number of recent searches retained.
    pub recent_capacity: usize,
}

impl SearchConfig {
    /// Returns the debounce window as a Duration.
    pub fn debounce_window(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 300,
            recent_capacity: 8,
        }
    }
}
