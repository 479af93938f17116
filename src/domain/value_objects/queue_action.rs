//! Queue action value object - the operator-facing entry points.

use std::fmt;

/// One orchestrator action.
///
/// `Full` is a composition rather than an operation of its own: it runs
/// transfer, status and process in that order, and later steps run even if an
/// earlier one reported failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueAction {
    /// Locate, resolve and enqueue every candidate file
    Transfer,
    /// Ask the queue to report its state
    Status,
    /// Ask the queue to process everything it holds
    Process,
    /// Transfer, then status, then process
    Full,
}

/// A primitive step an action expands to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueStep {
    Transfer,
    Status,
    Process,
}

impl QueueAction {
    pub fn steps(self) -> &'static [QueueStep] {
        match self {
            QueueAction::Transfer => &[QueueStep::Transfer],
            QueueAction::Status => &[QueueStep::Status],
            QueueAction::Process => &[QueueStep::Process],
            QueueAction::Full => &[QueueStep::Transfer, QueueStep::Status, QueueStep::Process],
        }
    }

    /// Whether this action scans source roots
    pub fn needs_source(self) -> bool {
        self.steps().contains(&QueueStep::Transfer)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            QueueAction::Transfer => "transfer",
            QueueAction::Status => "status",
            QueueAction::Process => "process",
            QueueAction::Full => "full",
        }
    }
}

impl QueueStep {
    pub fn as_str(self) -> &'static str {
        match self {
            QueueStep::Transfer => "transfer",
            QueueStep::Status => "status",
            QueueStep::Process => "process",
        }
    }
}

impl fmt::Display for QueueAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for QueueStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_expands_in_order() {
        assert_eq!(
            QueueAction::Full.steps(),
            &[QueueStep::Transfer, QueueStep::Status, QueueStep::Process]
        );
    }

    #[test]
    fn only_transfer_actions_need_source() {
        assert!(QueueAction::Transfer.needs_source());
        assert!(QueueAction::Full.needs_source());
        assert!(!QueueAction::Status.needs_source());
        assert!(!QueueAction::Process.needs_source());
    }

    #[test]
    fn names_match_cli_words() {
        assert_eq!(QueueAction::Full.to_string(), "full");
        assert_eq!(QueueStep::Process.to_string(), "process");
    }
}
