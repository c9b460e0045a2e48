//! Per-run session state owned by the menu controller.

#![allow(missing_docs)]

use serde::Serialize;

use super::command::CustomerChoice;

/// Menu loop lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoopState {
    Running,
    Terminated,
}

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    /// Operator picked `3) Exit`.
    ExitCommand,
    /// Input stream closed.
    EndOfInput,
}

/// Mutable state of one console session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    last_choice: Option<CustomerChoice>,
    state: LoopState,
    end_reason: Option<EndReason>,
    commands_processed: u64,
    invalid_inputs: u64,
}

impl Session {
    /// Fresh session: running, no choice recorded.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last_choice: None,
            state: LoopState::Running,
            end_reason: None,
            commands_processed: 0,
            invalid_inputs: 0,
        }
    }

    #[must_use]
    pub const fn last_choice(&self) -> Option<CustomerChoice> {
        self.last_choice
    }

    #[must_use]
    pub const fn state(&self) -> LoopState {
        self.state
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    #[must_use]
    pub const fn end_reason(&self) -> Option<EndReason> {
        self.end_reason
    }

    #[must_use]
    pub const fn commands_processed(&self) -> u64 {
        self.commands_processed
    }

    #[must_use]
    pub const fn invalid_inputs(&self) -> u64 {
        self.invalid_inputs
    }

    /// Only a validated choice can be stored.
    pub fn set_choice(&mut self, choice: CustomerChoice) {
        self.last_choice = Some(choice);
    }

    /// Stop the loop. The first reason wins.
    pub fn terminate(&mut self, reason: EndReason) {
        if self.state == LoopState::Running {
            self.state = LoopState::Terminated;
            self.end_reason = Some(reason);
        }
    }

    pub(crate) fn count_command(&mut self, invalid: bool) {
        self.commands_processed += 1;
        if invalid {
            self.invalid_inputs += 1;
        }
    }

    /// Snapshot for logging and `--verbose` output.
    #[must_use]
    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            commands_processed: self.commands_processed,
            invalid_inputs: self.invalid_inputs,
            last_choice: self.last_choice,
            ended_by: self.end_reason,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable end-of-session report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub commands_processed: u64,
    pub invalid_inputs: u64,
    pub last_choice: Option<CustomerChoice>,
    pub ended_by: Option<EndReason>,
}
