//! Handler timing instrumentation.
//!
//! Press, move and release handlers run on the host's UI thread for every
//! input event, so a slow handler shows up directly as input lag. With the
//! `profiling` feature enabled, `profile_scope!` times a block and logs a
//! warning when it exceeds its threshold.
//!
//! ```ignore
//! fn on_move(&mut self) {
//!     profile_scope!("on_move");
//!     // ... handler body ...
//! }
//! ```

use crate::constants::SLOW_HANDLER_MS;
use std::time::Instant;

/// Time a scope with the given name. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::with_threshold($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

pub use profile_scope;

/// RAII timer: measures from construction to drop.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    /// Timer using the default slow-handler threshold
    pub fn new(name: &'static str) -> Self {
        Self::with_threshold(name, SLOW_HANDLER_MS)
    }

    pub fn with_threshold(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    /// Milliseconds since the timer started
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    pub fn is_slow(&self) -> bool {
        self.elapsed_ms() > self.threshold_ms
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed = self.elapsed_ms();
        if elapsed > self.threshold_ms {
            tracing::warn!(
                scope = self.name,
                elapsed_ms = elapsed,
                threshold_ms = self.threshold_ms,
                "slow input handler"
            );
        } else {
            tracing::trace!(scope = self.name, elapsed_ms = elapsed, "handler timed");
        }
    }
}
