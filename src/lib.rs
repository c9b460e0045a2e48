#![forbid(unsafe_code)]

//! Client Menu — interactive client-management console.
//!
//! One menu loop with three commands:
//! 1. **Change Customer Choice** — validate and store a choice in `1..=5`
//! 2. **Display Info** — render the masked customer record, if the injected
//!    [`AccessPolicy`](menu::permission::AccessPolicy) grants it
//! 3. **Exit**
//!
//! # Library usage
//!
//! ```rust,no_run
//! use std::io::{self, BufReader};
//! use client_menu::prelude::*;
//!
//! let mut controller = MenuController::new(AdminFlag::new(false));
//! let mut input = TokenReader::new(BufReader::new(io::stdin()));
//! let _summary = controller.run(&mut input, &mut io::stdout())?;
//! # Ok::<(), MenuError>(())
//! ```

pub mod prelude;

pub mod core;
pub mod logger;
pub mod menu;
