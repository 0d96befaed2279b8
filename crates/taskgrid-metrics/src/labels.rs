//! Label-value vocabularies for TaskGrid instruments.
//!
//! Every instrument label is keyed by a closed set of recognized values.
//! The sets are enums with an exhaustive wire mapping, so label
//! cardinality is bounded at compile time — a caller cannot pass a value
//! the scrape backend has never seen.

use std::fmt;

/// Cause of a scheduling failure, recorded under the `type` label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScheduleFailure {
    /// The target machine left the cluster before placement completed.
    MachineLeft,
    /// No machine was able to run the unit.
    UnableRunUnit,
    /// The job was deactivated before it could be placed.
    JobInactive,
}

impl ScheduleFailure {
    /// On-the-wire label value.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScheduleFailure::MachineLeft => "machine_left",
            ScheduleFailure::UnableRunUnit => "unable_run_unit",
            ScheduleFailure::JobInactive => "job_inactive",
        }
    }
}

impl fmt::Display for ScheduleFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of scheduling round, recorded under the `type` label of the
/// engine and agent duration histograms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundKind {
    /// A full reconciliation pass over desired vs. actual state.
    Reconcile,
}

impl RoundKind {
    /// On-the-wire label value.
    pub fn as_str(&self) -> &'static str {
        match self {
            RoundKind::Reconcile => "reconcile",
        }
    }
}

impl fmt::Display for RoundKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Registry (state store) call shape, recorded under the `ops` label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistryOp {
    Get,
    Set,
    Delete,
    List,
}

impl RegistryOp {
    /// On-the-wire label value.
    pub fn as_str(&self) -> &'static str {
        match self {
            RegistryOp::Get => "get",
            RegistryOp::Set => "set",
            RegistryOp::Delete => "delete",
            RegistryOp::List => "list",
        }
    }
}

impl fmt::Display for RegistryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_wire_values() {
        assert_eq!(ScheduleFailure::MachineLeft.as_str(), "machine_left");
        assert_eq!(ScheduleFailure::UnableRunUnit.as_str(), "unable_run_unit");
        assert_eq!(ScheduleFailure::JobInactive.as_str(), "job_inactive");
    }

    #[test]
    fn registry_op_wire_values_are_distinct() {
        let ops = [
            RegistryOp::Get,
            RegistryOp::Set,
            RegistryOp::Delete,
            RegistryOp::List,
        ];
        for (i, a) in ops.iter().enumerate() {
            for b in &ops[i + 1..] {
                assert_ne!(a.as_str(), b.as_str(), "{a} and {b} share a label");
            }
        }
    }

    #[test]
    fn display_matches_wire_value() {
        assert_eq!(RoundKind::Reconcile.to_string(), "reconcile");
        assert_eq!(RegistryOp::Set.to_string(), "set");
    }
}
