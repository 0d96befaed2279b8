//! Prometheus text exposition.
//!
//! Renders a registry's current contents in the Prometheus text format.
//! The HTTP handler that serves `/metrics` lives with the embedding
//! process, not here — this crate only produces the payload.

use prometheus::{Registry, TextEncoder};

use crate::error::{MetricsError, MetricsResult};

/// Encode everything registered in `registry` as Prometheus text format.
pub fn encode_text(registry: &Registry) -> MetricsResult<String> {
    TextEncoder::new()
        .encode_to_string(&registry.gather())
        .map_err(MetricsError::Encode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::{RegistryOp, ScheduleFailure};
    use crate::metrics::Metrics;
    use std::time::Instant;

    #[test]
    fn encode_renders_convention_names() {
        let registry = Registry::new();
        let metrics = Metrics::register(&registry).unwrap();

        for _ in 0..3 {
            metrics.record_schedule_failure(ScheduleFailure::MachineLeft);
        }
        metrics.record_leader("m1");
        metrics.record_registry_op_duration(RegistryOp::Get, Instant::now());

        let text = encode_text(&registry).unwrap();
        assert!(
            text.contains("taskgrid_engine_schedule_failure_count_total{type=\"machine_left\"} 3"),
            "missing failure counter in:\n{text}"
        );
        assert!(
            text.contains("taskgrid_engine_leader{machine=\"m1\"} 1"),
            "missing leader gauge in:\n{text}"
        );
        assert!(
            text.contains("taskgrid_registry_duration_second_count{ops=\"get\"} 1"),
            "missing registry histogram in:\n{text}"
        );
    }

    #[test]
    fn unobserved_series_are_absent_until_first_recording() {
        let registry = Registry::new();
        let _metrics = Metrics::register(&registry).unwrap();

        let text = encode_text(&registry).unwrap();
        assert!(!text.contains("type=\"job_inactive\""));
    }
}
