//! Session-level activity recording on top of the JSONL writer.

use crate::core::config::ActivityConfig;
use crate::menu::controller::CommandOutcome;
use crate::menu::session::Session;

use super::jsonl::{EventType, JsonlConfig, JsonlWriter, LogEntry, Severity};

/// Activity sink owned by the menu controller. Disabled unless a log path is
/// configured.
#[derive(Default)]
pub struct ActivityLog {
    writer: Option<JsonlWriter>,
}

impl ActivityLog {
    /// A log that records nothing.
    #[must_use]
    pub const fn disabled() -> Self {
        Self { writer: None }
    }

    /// Open the configured log, or return a disabled sink. A `quiet` log
    /// never falls back to stderr.
    #[must_use]
    pub fn from_config(config: &ActivityConfig, quiet: bool) -> Self {
        Self {
            writer: JsonlConfig::from_activity(config, quiet).map(JsonlWriter::open),
        }
    }

    /// Degradation state of the underlying writer, if any.
    #[must_use]
    pub fn writer_state(&self) -> Option<&str> {
        self.writer.as_ref().map(JsonlWriter::state)
    }

    /// Record the permission wiring the session starts with.
    pub fn session_started(&mut self, admin: bool) {
        if let Some(writer) = self.writer.as_mut() {
            let mut entry = LogEntry::new(EventType::SessionStart, Severity::Info);
            entry.admin = Some(admin);
            writer.write_entry(&entry);
        }
    }

    /// Record one processed command.
    pub fn command_processed(&mut self, outcome: &CommandOutcome, session: &Session) {
        if let Some(writer) = self.writer.as_mut() {
            let severity = if outcome.is_rejection() {
                Severity::Warning
            } else {
                Severity::Info
            };
            let mut entry = LogEntry::new(EventType::Command, severity);
            entry.outcome = Some(outcome.label());
            entry.value = outcome.value();
            entry.error_code = outcome.error_code();
            entry.last_choice = session.last_choice().map(|c| c.get());
            writer.write_entry(&entry);
        }
    }

    /// Record the end-of-session summary and flush.
    pub fn session_ended(&mut self, session: &Session) {
        if let Some(writer) = self.writer.as_mut() {
            let mut entry = LogEntry::new(EventType::SessionEnd, Severity::Info);
            entry.summary = Some(session.summary());
            writer.write_entry(&entry);
            writer.flush();
        }
    }
}
