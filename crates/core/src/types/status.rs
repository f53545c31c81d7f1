//! Role and status enums for portal entities.

use serde::{Deserialize, Serialize};

/// Error returned when parsing a [`StaffRole`] from text.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid staff role: {0}. Valid roles: Sales, Support, Manager, Technician")]
pub struct ParseRoleError(pub String);

/// Error returned when parsing a [`VisitStatus`] from text.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid visit status: {0}. Valid statuses: Pending, Completed, Cancelled")]
pub struct ParseStatusError(pub String);

/// Role of an internal staff member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum StaffRole {
    /// Default role for new staff.
    #[default]
    Sales,
    Support,
    Manager,
    Technician,
}

impl StaffRole {
    /// Every role, in the order the role picker lists them.
    pub const ALL: [Self; 4] = [Self::Sales, Self::Support, Self::Manager, Self::Technician];

    /// Returns the display label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sales => "Sales",
            Self::Support => "Support",
            Self::Manager => "Manager",
            Self::Technician => "Technician",
        }
    }
}

impl std::fmt::Display for StaffRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for StaffRole {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseRoleError(s.to_owned()))
    }
}

/// Lifecycle status of a scheduled visit.
///
/// New visits start as [`VisitStatus::Pending`]. The status may move between
/// any two values on explicit user selection; `Completed` and `Cancelled`
/// are not terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum VisitStatus {
    #[default]
    Pending,
    Completed,
    Cancelled,
}

impl VisitStatus {
    /// Every status, in the order the status picker lists them.
    pub const ALL: [Self; 3] = [Self::Pending, Self::Completed, Self::Cancelled];

    /// Returns the display label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Statuses reachable from this one. Always every other status.
    #[must_use]
    pub fn allowed_transitions(self) -> Vec<Self> {
        Self::ALL.into_iter().filter(|s| *s != self).collect()
    }
}

impl std::fmt::Display for VisitStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for VisitStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseStatusError(s.to_owned()))
    }
}
