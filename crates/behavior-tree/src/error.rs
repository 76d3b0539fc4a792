//! Error types raised while building a behavior tree.

use thiserror::Error;

/// Allowed distance between a weighted selector's weight sum and `1.0`.
pub const WEIGHT_TOLERANCE: f64 = 1e-6;

/// Construction-time contract violations.
///
/// Normal control-flow outcomes never show up here; those travel through
/// [`Status`](crate::Status).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildError {
    #[error("probability {0} is outside [0, 1]")]
    ProbabilityOutOfRange(f64),

    #[error("weight {0} must be finite and non-negative")]
    InvalidWeight(f64),

    #[error("weights sum to {sum}, expected 1.0")]
    WeightsNotNormalized { sum: f64 },

    #[error("no child has a positive weight")]
    NoPositiveWeight,

    #[error("{kind} has no children")]
    NoChildren { kind: &'static str },

    #[error("{kind} expects {expected} children but only {actual} were added")]
    MissingChildren {
        kind: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("node `{name}`: {source}")]
    InNode {
        name: String,
        #[source]
        source: Box<BuildError>,
    },
}

impl BuildError {
    /// Attaches a node name so the error identifies where it happened.
    pub fn in_node(self, name: impl Into<String>) -> Self {
        BuildError::InNode {
            name: name.into(),
            source: Box::new(self),
        }
    }

    /// The violation itself, with any node attribution peeled off.
    pub fn root_cause(&self) -> &BuildError {
        match self {
            BuildError::InNode { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_attribution_nests_and_unwraps() {
        let err = BuildError::WeightsNotNormalized { sum: 0.8 }
            .in_node("wander")
            .in_node("root");

        assert_eq!(
            err.to_string(),
            "node `root`: node `wander`: weights sum to 0.8, expected 1.0"
        );
        assert_eq!(
            err.root_cause(),
            &BuildError::WeightsNotNormalized { sum: 0.8 }
        );
    }
}
