//! Metrics sinks.

use crate::domain::{ExecutionMode, GasExemption};
use crate::ports::MetricsSink;
use quantum_telemetry::{
    HistogramTimer, ADMISSION_DURATION, ADMISSION_REJECTIONS, ADMISSION_TXS, GAS_EXEMPT,
    SEQUENCE_INVALID, TIMESTAMP_NONCE_INVALID,
};

/// Reports to the process-wide Prometheus registry in `quantum_telemetry`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrometheusMetrics;

impl PrometheusMetrics {
    pub fn new() -> Self {
        Self
    }
}

impl MetricsSink for PrometheusMetrics {
    fn sequence_invalid(&self, msg_type: &str) {
        SEQUENCE_INVALID.with_label_values(&[msg_type]).inc();
    }

    fn timestamp_nonce_invalid(&self, msg_type: &str) {
        TIMESTAMP_NONCE_INVALID.with_label_values(&[msg_type]).inc();
    }

    fn tx_outcome(&self, mode: ExecutionMode, msg_type: &str, code: Option<u32>) {
        match code {
            None => ADMISSION_TXS
                .with_label_values(&[mode.as_str(), msg_type, "accepted"])
                .inc(),
            Some(code) => {
                ADMISSION_TXS
                    .with_label_values(&[mode.as_str(), msg_type, "rejected"])
                    .inc();
                ADMISSION_REJECTIONS
                    .with_label_values(&[mode.as_str(), &code.to_string()])
                    .inc();
            }
        }
    }

    fn gas_exempt(&self, reason: GasExemption) {
        GAS_EXEMPT.with_label_values(&[reason.as_str()]).inc();
    }

    fn start_timer(&self, mode: ExecutionMode) -> Box<dyn Send> {
        let histogram = ADMISSION_DURATION.with_label_values(&[mode.as_str()]);
        Box::new(HistogramTimer::new(&histogram))
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopMetrics;

impl MetricsSink for NoopMetrics {
    fn sequence_invalid(&self, _msg_type: &str) {}

    fn timestamp_nonce_invalid(&self, _msg_type: &str) {}

    fn tx_outcome(&self, _mode: ExecutionMode, _msg_type: &str, _code: Option<u32>) {}

    fn gas_exempt(&self, _reason: GasExemption) {}

    fn start_timer(&self, _mode: ExecutionMode) -> Box<dyn Send> {
        Box::new(())
    }
}
