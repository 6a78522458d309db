//! Vendor-agnostic metrics collection via a pluggable sink.
//!
//! Implement [`MetricsSink`] to forward synthesis metrics to any backend
//! (Prometheus, OpenTelemetry, CloudWatch, etc.) without tying the library to
//! one:
//!
//! ```ignore
//! use lanyard_core::metrics::{MetricsSink, SynthesisStats};
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicU64, Ordering};
//!
//! struct CountingSink(AtomicU64);
//!
//! impl MetricsSink for CountingSink {
//!     fn on_synthesis(&self, stats: &SynthesisStats) {
//!         self.0.fetch_add(1, Ordering::Relaxed);
//!         eprintln!("synth emitted {} resources in {:?}", stats.resources, stats.duration);
//!     }
//! }
//!
//! lanyard_core::metrics::set_sink(Arc::new(CountingSink(AtomicU64::new(0))));
//! ```

use std::sync::{Arc, OnceLock};
use std::time::Duration;

use serde::Serialize;
use tracing::warn;

/// Snapshot of one synthesis pass, passed to [`MetricsSink::on_synthesis`].
#[derive(Debug, Clone, Serialize)]
pub struct SynthesisStats {
    /// Resource declarations emitted into the descriptor.
    pub resources: usize,
    /// Outputs emitted into the descriptor.
    pub outputs: usize,
    /// Wall-clock time spent assembling the descriptor.
    pub duration: Duration,
}

/// Consumer of synthesis metrics. Implementations must be thread-safe and
/// should not block.
pub trait MetricsSink: Send + Sync {
    fn on_synthesis(&self, stats: &SynthesisStats);
}

static SINK: OnceLock<Arc<dyn MetricsSink>> = OnceLock::new();

/// Install the process-wide sink. The first call wins; later calls are
/// ignored with a warning.
pub fn set_sink(sink: Arc<dyn MetricsSink>) {
    if SINK.set(sink).is_err() {
        warn!("metrics sink already set; ignoring replacement");
    }
}

pub(crate) fn record_synthesis(stats: &SynthesisStats) {
    if let Some(sink) = SINK.get() {
        sink.on_synthesis(stats);
    }
}
