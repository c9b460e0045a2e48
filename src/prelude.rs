//! Convenience re-exports for library consumers.
//!
//! ```rust,no_run
//! use client_menu::prelude::*;
//! ```

// Core
pub use crate::core::config::{Config, ConfigOverrides};
pub use crate::core::errors::{MenuError, Result};

// Menu
pub use crate::menu::command::{CustomerChoice, MenuCommand};
pub use crate::menu::controller::{ChoiceRejection, CommandOutcome, MenuController};
pub use crate::menu::input::TokenReader;
pub use crate::menu::permission::{AccessPolicy, AdminFlag};
pub use crate::menu::record::CustomerRecord;
pub use crate::menu::session::{EndReason, LoopState, Session, SessionSummary};
pub use crate::menu::theme::{PlainTheme, Theme, Tone};

// Logger
pub use crate::logger::activity::ActivityLog;
