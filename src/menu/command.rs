//! Main-menu commands and the validated customer choice.

use std::fmt;

use serde::Serialize;

use crate::core::errors::{MenuError, Result};

/// Entries of the main menu, numbered as shown to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuCommand {
    /// `1) Change Customer Choice`
    ChangeChoice,
    /// `2) Display Info`
    DisplayInfo,
    /// `3) Exit`
    Exit,
}

impl MenuCommand {
    /// All commands in menu order.
    pub const ALL: [Self; 3] = [Self::ChangeChoice, Self::DisplayInfo, Self::Exit];

    /// Number typed to select this command.
    #[must_use]
    pub const fn number(self) -> i32 {
        match self {
            Self::ChangeChoice => 1,
            Self::DisplayInfo => 2,
            Self::Exit => 3,
        }
    }

    /// Menu label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ChangeChoice => "Change Customer Choice",
            Self::DisplayInfo => "Display Info",
            Self::Exit => "Exit",
        }
    }
}

impl TryFrom<i32> for MenuCommand {
    type Error = MenuError;

    fn try_from(value: i32) -> Result<Self> {
        match value {
            1 => Ok(Self::ChangeChoice),
            2 => Ok(Self::DisplayInfo),
            3 => Ok(Self::Exit),
            _ => Err(MenuError::OutOfRange {
                value,
                min: 1,
                max: 3,
            }),
        }
    }
}

/// A customer choice guaranteed to lie in `1..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct CustomerChoice(u8);

impl CustomerChoice {
    pub const MIN: i32 = 1;
    pub const MAX: i32 = 5;

    /// Validate a raw integer.
    pub fn new(value: i32) -> Result<Self> {
        u8::try_from(value)
            .ok()
            .filter(|v| (1..=5).contains(v))
            .map(Self)
            .ok_or(MenuError::OutOfRange {
                value,
                min: Self::MIN,
                max: Self::MAX,
            })
    }

    /// The validated value.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for CustomerChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
