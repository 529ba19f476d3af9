//! Timing instrumentation for the pointer hot paths.
//!
//! Pointer-move fires once per frame while dragging, and every pointer-down
//! runs a hit test, so those are the places worth timing.
//!
//! Enable with the `profiling` feature:
//! ```toml
//! mapboard = { features = ["profiling"] }
//! ```
//!
//! ```ignore
//! fn handle_pointer_move(&mut self, event: &PointerEvent) {
//!     profile_scope!("handle_pointer_move");
//!     // ...
//! }
//! ```

use std::time::Instant;
use tracing::warn;
#[cfg(feature = "profiling")]
use tracing::trace;

/// One frame at 60 FPS
pub const TARGET_FRAME_MS: f64 = 16.67;

/// Time a scope. Compiles to nothing without the `profiling` feature.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

pub use profile_scope;

/// Logs how long a scope took when it is dropped, if it exceeded a threshold.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    /// Warn only when a scope blows a whole frame.
    pub fn with_default_threshold(name: &'static str) -> Self {
        Self::new(name, TARGET_FRAME_MS)
    }

    /// Low threshold used by `profile_scope!`.
    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, 1.0)
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();
        if elapsed_ms <= self.threshold_ms {
            return;
        }

        #[cfg(feature = "profiling")]
        trace!("[PERF] {}: {:.2}ms", self.name, elapsed_ms);

        #[cfg(not(feature = "profiling"))]
        warn!(
            operation = self.name,
            elapsed_ms = format!("{:.2}", elapsed_ms),
            threshold_ms = format!("{:.2}", self.threshold_ms),
            "Slow operation"
        );
    }
}

/// Run `f` and return its result with the elapsed milliseconds.
#[inline]
pub fn measure<T, F: FnOnce() -> T>(f: F) -> (T, f64) {
    let start = Instant::now();
    let result = f();
    (result, start.elapsed().as_secs_f64() * 1000.0)
}

/// Running statistics for hit testing: how many candidates the spatial
/// index hands back per query, and how long the query takes.
#[derive(Debug, Clone, Default)]
pub struct HitTestProfiler {
    /// Candidates returned by the last query
    pub candidates: usize,
    /// Duration of the last query
    pub last_test_ms: f64,
    avg_candidates: f64,
    test_count: u64,
}

impl HitTestProfiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, candidates: usize, elapsed_ms: f64) {
        self.candidates = candidates;
        self.last_test_ms = elapsed_ms;
        self.test_count += 1;

        // Exponential moving average
        let alpha = 0.1;
        self.avg_candidates = self.avg_candidates * (1.0 - alpha) + candidates as f64 * alpha;

        if elapsed_ms > TARGET_FRAME_MS {
            warn!(candidates, elapsed_ms, "Hit test exceeded frame budget");
        }
    }

    pub fn average_candidates(&self) -> f64 {
        self.avg_candidates
    }

    pub fn test_count(&self) -> u64 {
        self.test_count
    }
}
