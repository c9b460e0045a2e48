//! Access capability consulted before the customer record is shown.

use crate::core::config::AccessConfig;

/// Decides whether the current operator may view the customer record.
pub trait AccessPolicy {
    /// `true` when the record may be rendered.
    fn has_access(&self) -> bool;
}

/// Grants access exactly when the operator is an administrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AdminFlag {
    is_admin: bool,
}

impl AdminFlag {
    /// Flag fixed for the life of the process.
    #[must_use]
    pub const fn new(is_admin: bool) -> Self {
        Self { is_admin }
    }

    /// Wire the flag from `[access]`.
    #[must_use]
    pub const fn from_config(config: &AccessConfig) -> Self {
        Self::new(config.admin)
    }

    #[must_use]
    pub const fn is_admin(self) -> bool {
        self.is_admin
    }
}

impl AccessPolicy for AdminFlag {
    fn has_access(&self) -> bool {
        self.is_admin
    }
}

impl<F> AccessPolicy for F
where
    F: Fn() -> bool,
{
    fn has_access(&self) -> bool {
        self()
    }
}
