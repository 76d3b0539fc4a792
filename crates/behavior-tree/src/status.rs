//! Status returned by behavior nodes.

use std::fmt;

/// The result of evaluating a behavior node.
///
/// Status is the only information that crosses a node boundary: parents see
/// what their children report and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// The node has never been ticked.
    #[default]
    Ready,

    /// The behavior completed successfully.
    ///
    /// For conditions: The condition was met.
    /// For actions: The action finished without errors.
    Success,

    /// The behavior failed.
    ///
    /// For conditions: The condition was not met.
    /// For actions: The action could not be executed.
    Failure,

    /// The behavior has started but not finished.
    ///
    /// A node that reports `Running` keeps its internal progress for the
    /// next tick instead of being reset.
    Running,
}

impl Status {
    /// Returns `true` if this status is `Success`.
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    /// Returns `true` if this status is `Failure`.
    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    /// Returns `true` if this status is `Running`.
    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, Status::Running)
    }

    /// Returns `true` once the node finished, either way.
    #[inline]
    pub fn is_done(self) -> bool {
        matches!(self, Status::Success | Status::Failure)
    }

    /// Inverts the status: Success becomes Failure and vice versa.
    ///
    /// `Running` and `Ready` pass through unchanged.
    #[inline]
    pub fn invert(self) -> Self {
        match self {
            Status::Success => Status::Failure,
            Status::Failure => Status::Success,
            other => other,
        }
    }

    /// Human-readable name used by diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Ready => "Ready",
            Status::Success => "Success",
            Status::Failure => "Failure",
            Status::Running => "Running",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_ready() {
        assert_eq!(Status::default(), Status::Ready);
    }

    #[test]
    fn invert_swaps_terminal_states_only() {
        assert_eq!(Status::Success.invert(), Status::Failure);
        assert_eq!(Status::Failure.invert(), Status::Success);
        assert_eq!(Status::Running.invert(), Status::Running);
        assert_eq!(Status::Ready.invert(), Status::Ready);
    }

    #[test]
    fn display_uses_variant_names() {
        assert_eq!(Status::Running.to_string(), "Running");
        assert_eq!(format!("{}", Status::Ready), "Ready");
    }

    #[test]
    fn is_done_excludes_running_and_ready() {
        assert!(Status::Success.is_done());
        assert!(Status::Failure.is_done());
        assert!(!Status::Running.is_done());
        assert!(!Status::Ready.is_done());
    }
}
