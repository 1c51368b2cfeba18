//! Performance instrumentation for input handlers and export.
//!
//! Enable with the `profiling` feature:
//! ```toml
//! [dependencies]
//! moodboard = { features = ["profiling"] }
//! ```
//!
//! ```ignore
//! fn handle_pointer_move(&mut self, event: PointerEvent) {
//!     profile_scope!("handle_pointer_move");
//!     // ...
//! }
//! ```
//!
//! Timers aggregate per-operation statistics in a thread-local table that
//! can be read back with [`operation_stats`].

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;
use tracing::{trace, warn};

// ============================================================================
// Constants
// ============================================================================

/// Budget for a single pointer handler at 60 FPS
pub const HANDLER_BUDGET_MS: f64 = 16.67;

/// Number of samples to keep per operation
const STATS_SAMPLE_COUNT: usize = 100;

/// Global flag to enable/disable profiling at runtime
static PROFILING_ENABLED: AtomicBool = AtomicBool::new(cfg!(feature = "profiling"));

thread_local! {
    static STATS: RefCell<HashMap<&'static str, OperationStats>> = RefCell::new(HashMap::new());
}

// ============================================================================
// Profiling Macro (zero-cost when disabled)
// ============================================================================

/// Profile a scope with the given name. Zero-cost without the `profiling` feature.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $crate::perf::HANDLER_BUDGET_MS);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
}

pub use profile_scope;

// ============================================================================
// Runtime Profiling Control
// ============================================================================

/// Enable or disable statistics collection at runtime.
pub fn set_profiling_enabled(enabled: bool) {
    PROFILING_ENABLED.store(enabled, Ordering::Relaxed);
}

#[inline]
pub fn is_profiling_enabled() -> bool {
    PROFILING_ENABLED.load(Ordering::Relaxed)
}

// ============================================================================
// Operation Statistics
// ============================================================================

/// Rolling timing samples for one named operation.
#[derive(Debug, Clone, Default)]
pub struct OperationStats {
    samples: VecDeque<f64>,
    count: u64,
    max_ms: f64,
}

impl OperationStats {
    pub fn record(&mut self, ms: f64) {
        if self.samples.len() >= STATS_SAMPLE_COUNT {
            self.samples.pop_front();
        }
        self.samples.push_back(ms);
        self.count += 1;
        self.max_ms = self.max_ms.max(ms);
    }

    /// Total number of recorded calls, including evicted samples.
    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn max(&self) -> f64 {
        self.max_ms
    }

    pub fn average(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        self.samples.iter().sum::<f64>() / self.samples.len() as f64
    }

    pub fn p95(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let mut sorted: Vec<f64> = self.samples.iter().copied().collect();
        sorted.sort_by(|a, b| a.total_cmp(b));
        let idx = ((sorted.len() as f64 * 0.95).ceil() as usize).saturating_sub(1);
        sorted[idx.min(sorted.len() - 1)]
    }
}

/// Snapshot of the statistics recorded on this thread for `name`.
pub fn operation_stats(name: &str) -> Option<OperationStats> {
    STATS.with(|stats| stats.borrow().get(name).cloned())
}

pub fn reset_stats() {
    STATS.with(|stats| stats.borrow_mut().clear());
}

fn record_operation(name: &'static str, elapsed_ms: f64) {
    STATS.with(|stats| stats.borrow_mut().entry(name).or_default().record(elapsed_ms));
}

// ============================================================================
// Scoped Timer
// ============================================================================

/// Times a scope and records it on drop. Warns when the threshold is exceeded.
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

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();
        if !is_profiling_enabled() {
            return;
        }
        record_operation(self.name, elapsed_ms);
        if elapsed_ms > self.threshold_ms {
            warn!(
                operation = self.name,
                elapsed_ms = format!("{:.2}", elapsed_ms),
                threshold_ms = format!("{:.2}", self.threshold_ms),
                "Slow operation"
            );
        } else {
            trace!(operation = self.name, elapsed_ms, "[PERF]");
        }
    }
}
