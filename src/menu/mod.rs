//! Client-management menu: command parsing, access gate, masked record,
//! session state, and the interactive loop that ties them together.

pub mod command;
pub mod controller;
pub mod input;
pub mod permission;
pub mod record;
pub mod session;
pub mod theme;
