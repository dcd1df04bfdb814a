//! Error types for selection handling and sandbox hosts
//!
//! [`SelectionError`] is the only failure a selection command can produce. It
//! is raised when an identifier outside the closed framework or theme
//! enumeration reaches the controller, which the dropdowns never offer but the
//! command line can.
//!
//! [`HostError`] covers failures inside a [`SandboxHost`]. The controller logs
//! them and carries on; they are never reported as selection failures.
//!
//! [`SandboxHost`]: crate::sandbox::SandboxHost

use std::fmt;
use std::io;
use thiserror::Error;

/// Which choice control a value was meant for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Framework,
    Theme,
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Control::Framework => write!(f, "framework"),
            Control::Theme => write!(f, "theme"),
        }
    }
}

/// Errors raised by the selector controller
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The value is not a member of the control's enumeration
    #[error("invalid {control} selection '{value}' (expected one of: {expected})")]
    InvalidSelection {
        control: Control,
        value: String,
        expected: String,
    },
}

impl SelectionError {
    pub fn invalid(control: Control, value: &str, expected: &[&str]) -> Self {
        SelectionError::InvalidSelection {
            control,
            value: value.to_string(),
            expected: expected.join(", "),
        }
    }
}

/// Errors a sandbox host may report while applying a configuration
#[derive(Debug, Error)]
pub enum HostError {
    #[error("failed to write sandbox configuration: {0}")]
    Io(#[from] io::Error),

    #[error("failed to serialize sandbox configuration: {0}")]
    Serialize(#[from] serde_json::Error),
}
