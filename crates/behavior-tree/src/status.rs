//! Status returned by behavior nodes.

/// The result of evaluating a behavior node.
///
/// # Tick-based Semantics
///
/// A node evaluation never blocks the tick:
/// - Conditions resolve immediately to `Success` or `Failure`
/// - Actions that need more ticks report `Processing` and are re-entered on
///   the next tick
/// - `Error` marks an illegal evaluation (a branch predicate that did not
///   resolve within the call)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The behavior completed successfully.
    ///
    /// For conditions: The condition was met.
    /// For actions: The action finished its work.
    Success,

    /// The behavior failed.
    ///
    /// For conditions: The condition was not met.
    /// For actions: The action could not be performed.
    Failure,

    /// The behavior is still running and must be re-entered next tick.
    Processing,

    /// The behavior reached an illegal state. Never equivalent to `Success`.
    Error,
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

    /// Returns `true` if this status is `Processing`.
    #[inline]
    pub fn is_processing(self) -> bool {
        matches!(self, Status::Processing)
    }

    /// Returns `true` if this status is `Error`.
    #[inline]
    pub fn is_error(self) -> bool {
        matches!(self, Status::Error)
    }

    /// Returns `true` for `Success` and `Failure`, the two settled outcomes.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Status::Success | Status::Failure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_success_and_failure_are_terminal() {
        assert!(Status::Success.is_terminal());
        assert!(Status::Failure.is_terminal());
        assert!(!Status::Processing.is_terminal());
        assert!(!Status::Error.is_terminal());
    }
}
