//! Prometheus metrics for Quantum-Chain subsystems.
//!
//! All metrics follow the naming convention: `qc_<subsystem>_<metric>_<unit>`
//!
//! ## Metric Types
//!
//! - **Counter**: Monotonically increasing value (e.g., admission_txs_total)
//! - **Histogram**: Distribution of values (e.g., admission_duration_seconds)

use lazy_static::lazy_static;
use prometheus::{
    exponential_buckets, CounterVec, Encoder, Histogram, HistogramOpts, HistogramVec, Opts,
    Registry, TextEncoder,
};
use std::sync::Arc;

use crate::TelemetryError;

lazy_static! {
    /// Global metrics registry
    pub static ref REGISTRY: Registry = Registry::new();

    // =========================================================================
    // TX ADMISSION METRICS (Subsystem 6)
    // =========================================================================

    /// Transactions run through the ante chain
    pub static ref ADMISSION_TXS: CounterVec = CounterVec::new(
        Opts::new("qc_admission_txs_total", "Transactions processed by the ante chain"),
        &["mode", "msg_type", "outcome"]  // outcome: accepted/rejected
    ).expect("metric creation failed");

    /// Rejections by error code
    pub static ref ADMISSION_REJECTIONS: CounterVec = CounterVec::new(
        Opts::new("qc_admission_rejections_total", "Ante chain rejections by error code"),
        &["mode", "code"]
    ).expect("metric creation failed");

    /// Sequence-mode replay failures
    pub static ref SEQUENCE_INVALID: CounterVec = CounterVec::new(
        Opts::new("qc_admission_sequence_invalid_total", "Signatures rejected for a sequence mismatch"),
        &["msg_type"]
    ).expect("metric creation failed");

    /// Timestamp-nonce replay failures
    pub static ref TIMESTAMP_NONCE_INVALID: CounterVec = CounterVec::new(
        Opts::new("qc_admission_timestamp_nonce_invalid_total", "Signatures rejected by timestamp nonce validation"),
        &["msg_type"]
    ).expect("metric creation failed");

    /// Gas exemptions granted
    pub static ref GAS_EXEMPT: CounterVec = CounterVec::new(
        Opts::new("qc_admission_gas_exempt_total", "Transactions run with a free gas meter"),
        &["reason"]  // reason: app_injected/clob
    ).expect("metric creation failed");

    /// Ante chain latency
    pub static ref ADMISSION_DURATION: HistogramVec = HistogramVec::new(
        HistogramOpts::new(
            "qc_admission_duration_seconds",
            "Time spent running the ante chain"
        ).buckets(exponential_buckets(0.00001, 2.0, 15).expect("valid bucket layout")),
        &["mode"]
    ).expect("metric creation failed");
}

/// Handle for the registered metrics
pub struct MetricsHandle {
    _registry: Arc<Registry>,
}

/// Register all metrics with the global registry. Safe to call more than
/// once.
pub fn register_metrics() -> Result<MetricsHandle, TelemetryError> {
    let metrics: Vec<Box<dyn prometheus::core::Collector>> = vec![
        Box::new(ADMISSION_TXS.clone()),
        Box::new(ADMISSION_REJECTIONS.clone()),
        Box::new(SEQUENCE_INVALID.clone()),
        Box::new(TIMESTAMP_NONCE_INVALID.clone()),
        Box::new(GAS_EXEMPT.clone()),
        Box::new(ADMISSION_DURATION.clone()),
    ];

    for metric in metrics {
        match REGISTRY.register(metric) {
            Ok(()) | Err(prometheus::Error::AlreadyReg) => {}
            Err(e) => return Err(TelemetryError::MetricsInit(e.to_string())),
        }
    }

    Ok(MetricsHandle {
        _registry: Arc::new(REGISTRY.clone()),
    })
}

/// Encode all metrics as Prometheus text format.
pub fn encode_metrics() -> Result<String, TelemetryError> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::MetricsInit(e.to_string()))
}

/// Timer guard for automatic histogram observation.
pub struct HistogramTimer {
    histogram: Histogram,
    start: std::time::Instant,
}

impl HistogramTimer {
    /// Start a new timer for the given histogram.
    pub fn new(histogram: &Histogram) -> Self {
        Self {
            histogram: histogram.clone(),
            start: std::time::Instant::now(),
        }
    }
}

impl Drop for HistogramTimer {
    fn drop(&mut self) {
        let duration = self.start.elapsed().as_secs_f64();
        self.histogram.observe(duration);
    }
}
