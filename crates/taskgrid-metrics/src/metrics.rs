//! The metrics facade — instruments and the typed recording API.
//!
//! All instruments live in a [`Metrics`] context constructed once at
//! process startup via [`Metrics::register`] and handed to the engine,
//! agent, and registry subsystems at their construction time. There is no
//! global state: a test (or an embedder that wants instrumentation off)
//! builds its own `Registry`.

use std::sync::{Arc, Mutex};
use std::time::Instant;

use prometheus::{HistogramOpts, HistogramVec, IntCounterVec, IntGaugeVec, Opts, Registry};
use tracing::debug;

use crate::error::{MetricsError, MetricsResult};
use crate::labels::{RegistryOp, RoundKind, ScheduleFailure};

/// Namespace prefixed to every instrument name.
pub const NAMESPACE: &str = "taskgrid";

/// Subsystem segment of an instrument name.
#[derive(Debug, Clone, Copy)]
enum Subsystem {
    Engine,
    Agent,
    Registry,
}

impl Subsystem {
    fn as_str(&self) -> &'static str {
        match self {
            Subsystem::Engine => "engine",
            Subsystem::Agent => "agent",
            Subsystem::Registry => "registry",
        }
    }
}

fn opts(subsystem: Subsystem, name: &str, help: &str) -> Opts {
    Opts::new(name, help)
        .namespace(NAMESPACE)
        .subsystem(subsystem.as_str())
}

fn histogram_opts(subsystem: Subsystem, name: &str, help: &str) -> HistogramOpts {
    HistogramOpts::new(name, help)
        .namespace(NAMESPACE)
        .subsystem(subsystem.as_str())
}

/// Handle to every TaskGrid instrument.
///
/// Cheap to clone — prometheus instruments are reference-counted
/// internally, so each subsystem holds its own copy of the same
/// underlying series.
#[derive(Clone)]
pub struct Metrics {
    schedule_failures: IntCounterVec,
    engine_schedule_duration: HistogramVec,
    agent_schedule_duration: HistogramVec,
    engine_leader: IntGaugeVec,
    registry_op_duration: HistogramVec,
    /// Machine whose leader series currently reads 1.
    current_leader: Arc<Mutex<Option<String>>>,
}

impl Metrics {
    /// Construct every instrument and register it with `registry`.
    ///
    /// Called once at process startup, before any subsystem starts
    /// recording. A registration failure (duplicate instrument name,
    /// invalid label schema) is a configuration error — callers abort
    /// startup rather than run without instrumentation.
    pub fn register(registry: &Registry) -> MetricsResult<Self> {
        let schedule_failures = IntCounterVec::new(
            opts(
                Subsystem::Engine,
                "schedule_failure_count_total",
                "Counter of scheduling failures, partitioned by cause.",
            ),
            &["type"],
        )
        .map_err(MetricsError::Register)?;

        let engine_schedule_duration = HistogramVec::new(
            histogram_opts(
                Subsystem::Engine,
                "schedule_duration_second",
                "Histogram of time (in seconds) each engine schedule round takes.",
            ),
            &["type"],
        )
        .map_err(MetricsError::Register)?;

        let agent_schedule_duration = HistogramVec::new(
            histogram_opts(
                Subsystem::Agent,
                "schedule_duration_second",
                "Histogram of time (in seconds) each agent schedule round takes.",
            ),
            &["type"],
        )
        .map_err(MetricsError::Register)?;

        let engine_leader = IntGaugeVec::new(
            opts(
                Subsystem::Engine,
                "leader",
                "Current TaskGrid leader machine (1 for the leader, 0 for prior leaders).",
            ),
            &["machine"],
        )
        .map_err(MetricsError::Register)?;

        let registry_op_duration = HistogramVec::new(
            histogram_opts(
                Subsystem::Registry,
                "duration_second",
                "Histogram of time (in seconds) each registry call takes.",
            ),
            &["ops"],
        )
        .map_err(MetricsError::Register)?;

        registry
            .register(Box::new(schedule_failures.clone()))
            .map_err(MetricsError::Register)?;
        registry
            .register(Box::new(engine_schedule_duration.clone()))
            .map_err(MetricsError::Register)?;
        registry
            .register(Box::new(agent_schedule_duration.clone()))
            .map_err(MetricsError::Register)?;
        registry
            .register(Box::new(engine_leader.clone()))
            .map_err(MetricsError::Register)?;
        registry
            .register(Box::new(registry_op_duration.clone()))
            .map_err(MetricsError::Register)?;

        debug!(namespace = NAMESPACE, "instruments registered");

        Ok(Self {
            schedule_failures,
            engine_schedule_duration,
            agent_schedule_duration,
            engine_leader,
            registry_op_duration,
            current_leader: Arc::new(Mutex::new(None)),
        })
    }

    /// Count one scheduling failure for `reason`.
    pub fn record_schedule_failure(&self, reason: ScheduleFailure) {
        self.schedule_failures
            .with_label_values(&[reason.as_str()])
            .inc();
    }

    /// Observe the elapsed time of an engine scheduling round.
    ///
    /// `start` is captured by the caller immediately before the round
    /// begins; the facade computes the elapsed seconds itself so start and
    /// stop cannot be mis-ordered.
    pub fn record_engine_schedule_duration(&self, kind: RoundKind, start: Instant) {
        self.engine_schedule_duration
            .with_label_values(&[kind.as_str()])
            .observe(start.elapsed().as_secs_f64());
    }

    /// Observe the elapsed time of an agent scheduling round.
    pub fn record_agent_schedule_duration(&self, kind: RoundKind, start: Instant) {
        self.agent_schedule_duration
            .with_label_values(&[kind.as_str()])
            .observe(start.elapsed().as_secs_f64());
    }

    /// Mark `machine` as the current leader.
    ///
    /// The previous leader's series is cleared to 0 before the new one is
    /// set to 1, so at most one machine reads 1 at any time. Cleared
    /// series stay visible to scrapes. Re-recording the current leader is
    /// a no-op.
    pub fn record_leader(&self, machine: &str) {
        let mut current = self
            .current_leader
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if current.as_deref() == Some(machine) {
            return;
        }
        if let Some(prev) = current.take() {
            self.engine_leader.with_label_values(&[prev.as_str()]).set(0);
        }
        self.engine_leader.with_label_values(&[machine]).set(1);
        *current = Some(machine.to_string());
    }

    /// Observe the elapsed time of a registry call.
    pub fn record_registry_op_duration(&self, op: RegistryOp, start: Instant) {
        self.registry_op_duration
            .with_label_values(&[op.as_str()])
            .observe(start.elapsed().as_secs_f64());
    }
}
