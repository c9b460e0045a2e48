//! The menu loop: prompt, read, dispatch, repeat until exit.
//!
//! All I/O goes through a [`TokenReader`] and a generic `Write`, so tests
//! drive the loop with in-memory buffers exactly as a terminal would.

#![allow(missing_docs)]

use std::io::{BufRead, Write};

use serde::Serialize;

use super::command::{CustomerChoice, MenuCommand};
use super::input::TokenReader;
use super::permission::AccessPolicy;
use super::record::CustomerRecord;
use super::session::{EndReason, Session, SessionSummary};
use super::theme::{PlainTheme, Theme, Tone};
use crate::core::config::DEFAULT_BANNER;
use crate::core::errors::{MenuError, Result};
use crate::logger::activity::ActivityLog;

pub const MENU_TITLE: &str = "=== Client Management Menu ===";
pub const SELECT_PROMPT: &str = "Select: ";
pub const CHOICE_TITLE: &str = "Change Customer Choice";
pub const CHOICE_PROMPT: &str = "Enter a choice (1-5): ";
pub const MSG_INVALID_INPUT: &str = "Invalid input.";
pub const MSG_UNKNOWN_OPTION: &str = "Unknown option.";
pub const MSG_INVALID_CHOICE: &str = "Invalid choice.";
pub const MSG_CHOICE_UPDATED: &str = "Customer choice updated to:";
pub const MSG_PERMISSION_DENIED: &str = "Permission denied.";
pub const MSG_EXIT: &str = "Exiting program.";

/// Why a sub-prompt answer was not stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChoiceRejection {
    /// Not an integer.
    Malformed,
    /// Integer outside `1..=5`.
    OutOfRange(i32),
}

/// Observable result of one pass through the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandOutcome {
    InvalidInput,
    UnknownOption(i32),
    ChoiceUpdated(CustomerChoice),
    ChoiceRejected(ChoiceRejection),
    InfoDisplayed,
    PermissionDenied,
    Exited,
    EndOfInput,
}

impl CommandOutcome {
    /// Stable snake_case label for logs.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::InvalidInput => "invalid_input",
            Self::UnknownOption(_) => "unknown_option",
            Self::ChoiceUpdated(_) => "choice_updated",
            Self::ChoiceRejected(_) => "choice_rejected",
            Self::InfoDisplayed => "info_displayed",
            Self::PermissionDenied => "permission_denied",
            Self::Exited => "exited",
            Self::EndOfInput => "end_of_input",
        }
    }

    /// Integer involved, if the operator typed one that parsed.
    #[must_use]
    pub fn value(&self) -> Option<i32> {
        match self {
            Self::UnknownOption(n) | Self::ChoiceRejected(ChoiceRejection::OutOfRange(n)) => {
                Some(*n)
            }
            Self::ChoiceUpdated(choice) => Some(i32::from(choice.get())),
            _ => None,
        }
    }

    /// Input was refused (bad token, bad number, or access denied).
    #[must_use]
    pub const fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput
                | Self::UnknownOption(_)
                | Self::ChoiceRejected(_)
                | Self::PermissionDenied
        )
    }

    /// Error code matching the rejection, for the activity log.
    #[must_use]
    pub const fn error_code(&self) -> Option<&'static str> {
        match self {
            Self::InvalidInput | Self::ChoiceRejected(ChoiceRejection::Malformed) => {
                Some("CMU-2001")
            }
            Self::UnknownOption(_) | Self::ChoiceRejected(ChoiceRejection::OutOfRange(_)) => {
                Some("CMU-2002")
            }
            _ => None,
        }
    }

    /// Rejections caused by unparseable or out-of-range numbers.
    const fn counts_as_invalid(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput | Self::UnknownOption(_) | Self::ChoiceRejected(_)
        )
    }
}

/// Owns the session and dispatches menu commands.
pub struct MenuController<P> {
    policy: P,
    record: CustomerRecord,
    session: Session,
    banner: String,
    theme: Box<dyn Theme>,
    activity: ActivityLog,
}

impl<P: AccessPolicy> MenuController<P> {
    /// Controller with the default banner, plain output and no activity log.
    pub fn new(policy: P) -> Self {
        Self {
            policy,
            record: CustomerRecord::masked(),
            session: Session::new(),
            banner: DEFAULT_BANNER.to_string(),
            theme: Box::new(PlainTheme),
            activity: ActivityLog::disabled(),
        }
    }

    #[must_use]
    pub fn with_banner(mut self, banner: impl Into<String>) -> Self {
        self.banner = banner.into();
        self
    }

    #[must_use]
    pub fn with_theme(mut self, theme: Box<dyn Theme>) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub fn with_activity_log(mut self, activity: ActivityLog) -> Self {
        self.activity = activity;
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Print the banner, then loop until exit or end of input.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: &mut TokenReader<R>,
        out: &mut W,
    ) -> Result<SessionSummary> {
        writeln!(out, "{}", self.theme.paint(Tone::Banner, &self.banner))?;
        self.activity.session_started(self.policy.has_access());

        while self.session.is_running() {
            self.display_menu(out)?;
            let raw = input.next_int();
            self.process_command(raw, input, out)?;
        }

        self.activity.session_ended(&self.session);
        out.flush()?;
        Ok(self.session.summary())
    }

    /// Handle the result of reading the main prompt.
    ///
    /// Bad input never ends the loop; only `3` or a closed stream do. Errors
    /// returned here are output failures.
    pub fn process_command<R: BufRead, W: Write>(
        &mut self,
        raw: Result<i32>,
        input: &mut TokenReader<R>,
        out: &mut W,
    ) -> Result<CommandOutcome> {
        let outcome = match raw {
            Ok(value) => match MenuCommand::try_from(value) {
                Ok(MenuCommand::ChangeChoice) => self.change_choice(input, out)?,
                Ok(MenuCommand::DisplayInfo) => self.display_info(out)?,
                Ok(MenuCommand::Exit) => self.exit(out, EndReason::ExitCommand)?,
                Err(_) => {
                    self.notice(out, MSG_UNKNOWN_OPTION)?;
                    CommandOutcome::UnknownOption(value)
                }
            },
            Err(err) if err.is_recoverable() => {
                self.notice(out, MSG_INVALID_INPUT)?;
                CommandOutcome::InvalidInput
            }
            Err(MenuError::EndOfInput) => self.exit(out, EndReason::EndOfInput)?,
            Err(other) => return Err(other),
        };

        if outcome != CommandOutcome::EndOfInput {
            self.session.count_command(outcome.counts_as_invalid());
        }
        self.activity.command_processed(&outcome, &self.session);
        Ok(outcome)
    }

    fn display_menu<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out)?;
        writeln!(out, "{}", self.theme.paint(Tone::Heading, MENU_TITLE))?;
        for cmd in MenuCommand::ALL {
            writeln!(out, "{}) {}", cmd.number(), cmd.label())?;
        }
        write!(out, "{SELECT_PROMPT}")?;
        out.flush()?;
        Ok(())
    }

    fn change_choice<R: BufRead, W: Write>(
        &mut self,
        input: &mut TokenReader<R>,
        out: &mut W,
    ) -> Result<CommandOutcome> {
        writeln!(out)?;
        writeln!(out, "{}", self.theme.paint(Tone::Heading, CHOICE_TITLE))?;
        write!(out, "{CHOICE_PROMPT}")?;
        out.flush()?;

        match input.next_int() {
            Ok(value) => match CustomerChoice::new(value) {
                Ok(choice) => {
                    self.session.set_choice(choice);
                    let msg = format!("{MSG_CHOICE_UPDATED} {choice}");
                    writeln!(out, "{}", self.theme.paint(Tone::Success, &msg))?;
                    Ok(CommandOutcome::ChoiceUpdated(choice))
                }
                Err(_) => {
                    self.notice(out, MSG_INVALID_CHOICE)?;
                    Ok(CommandOutcome::ChoiceRejected(ChoiceRejection::OutOfRange(
                        value,
                    )))
                }
            },
            Err(err) if err.is_recoverable() => {
                self.notice(out, MSG_INVALID_INPUT)?;
                Ok(CommandOutcome::ChoiceRejected(ChoiceRejection::Malformed))
            }
            Err(MenuError::EndOfInput) => self.exit(out, EndReason::EndOfInput),
            Err(other) => Err(other),
        }
    }

    fn display_info<W: Write>(&self, out: &mut W) -> Result<CommandOutcome> {
        if self.policy.has_access() {
            self.record.render(out)?;
            Ok(CommandOutcome::InfoDisplayed)
        } else {
            self.notice(out, MSG_PERMISSION_DENIED)?;
            Ok(CommandOutcome::PermissionDenied)
        }
    }

    fn exit<W: Write>(&mut self, out: &mut W, reason: EndReason) -> Result<CommandOutcome> {
        if reason == EndReason::EndOfInput {
            writeln!(out)?;
        }
        writeln!(out, "{MSG_EXIT}")?;
        self.session.terminate(reason);
        Ok(match reason {
            EndReason::ExitCommand => CommandOutcome::Exited,
            EndReason::EndOfInput => CommandOutcome::EndOfInput,
        })
    }

    fn notice<W: Write>(&self, out: &mut W, msg: &str) -> Result<()> {
        writeln!(out, "{}", self.theme.paint(Tone::Warning, msg))?;
        Ok(())
    }
}
