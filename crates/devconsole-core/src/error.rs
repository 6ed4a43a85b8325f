//! Error types for the console core

use crate::log_entry::Severity;
use crate::registry::Tier;
use thiserror::Error;

/// Failure reported by a host capability call
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HostError {
    #[error("the host capability is not available")]
    Unavailable,
    #[error("{0}")]
    Rejected(String),
}

/// Configuration error raised while building a registry
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("command name or alias \"{name}\" is already registered in the {tier} tier")]
    NameCollision { name: String, tier: Tier },
    #[error("command names and aliases must be non-empty single tokens, got \"{0}\"")]
    InvalidName(String),
}

/// Outcome of a failed command, reported to the user as a log entry
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CommandError {
    /// The command word matched nothing
    #[error("Command \"{token}\" is not valid. Use the \"help\" command for a list of commands.")]
    Resolution { token: String },

    /// The arguments did not have the expected shape
    #[error("Improper usage. Use the \"help\" command for help.")]
    Usage,

    /// Malformed argument; nothing was applied
    #[error("{0}")]
    Validation(String),

    /// The host is not in a state where the command makes sense
    #[error("{message}")]
    Precondition { severity: Severity, message: String },

    /// Unexpected failure while talking to the host
    #[error("Command failed: {0}")]
    HandlerFault(String),
}

impl CommandError {
    /// A precondition the user can fix themselves (hold a bomb, focus a module)
    pub fn actionable(message: impl Into<String>) -> Self {
        Self::Precondition {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    /// A precondition outside the user's reach (no session, already solved)
    pub fn unmet(message: impl Into<String>) -> Self {
        Self::Precondition {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    /// Severity the error is reported with
    pub fn severity(&self) -> Severity {
        match self {
            Self::Precondition { severity, .. } => *severity,
            _ => Severity::Error,
        }
    }
}

impl From<HostError> for CommandError {
    fn from(err: HostError) -> Self {
        Self::HandlerFault(err.to_string())
    }
}

pub type CommandResult = Result<(), CommandError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precondition_severity() {
        assert_eq!(
            CommandError::actionable("Hold the bomb").severity(),
            Severity::Warning
        );
        assert_eq!(CommandError::unmet("No bombs").severity(), Severity::Error);
        assert_eq!(CommandError::Usage.severity(), Severity::Error);
    }

    #[test]
    fn test_resolution_message_names_token() {
        let err = CommandError::Resolution {
            token: "frobnicate".to_string(),
        };
        assert!(err.to_string().contains("\"frobnicate\""));
        assert!(err.to_string().contains("help"));
    }

    #[test]
    fn test_host_error_becomes_handler_fault() {
        let err: CommandError = HostError::Rejected("timer missing".to_string()).into();
        assert_eq!(err, CommandError::HandlerFault("timer missing".to_string()));
    }
}
