//! taskgrid-metrics — instrumentation facade for the TaskGrid scheduler.
//!
//! Records operational signals from the engine, agent, and registry
//! subsystems into a caller-supplied Prometheus registry:
//!
//! ```text
//! Metrics (registered once at startup, cloned into each subsystem)
//!   ├── record_schedule_failure()         ← engine, per failed placement
//!   ├── record_engine_schedule_duration() ← engine, per schedule round
//!   ├── record_agent_schedule_duration()  ← agent, per schedule round
//!   ├── record_leader()                   ← engine, on leadership change
//!   └── record_registry_op_duration()     ← registry, per state-store call
//!
//! encode_text() → text exposition for the embedder's /metrics endpoint
//! ```
//!
//! Recording is fire-and-forget: each operation takes a label tag from a
//! closed enum plus operation-specific data, returns nothing, and is safe
//! to call from any thread. Instrument registration happens exactly once,
//! at process startup, and a name collision there is fatal — there is no
//! runtime failure mode after that point.

pub mod error;
pub mod exposition;
pub mod labels;
pub mod metrics;

pub use error::{MetricsError, MetricsResult};
pub use exposition::encode_text;
pub use labels::{RegistryOp, RoundKind, ScheduleFailure};
pub use metrics::Metrics;
