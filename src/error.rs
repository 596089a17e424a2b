use thiserror::Error;

use crate::tool::ToolState;

/// Errors raised by misuse of a tool's state machine.
///
/// The controller never triggers these during normal event handling; seeing
/// one means the caller drove a tool out of order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolError {
    /// `commit` was called before the gesture was released
    #[error("cannot commit {tool} while it is {state:?}")]
    NotReady { tool: &'static str, state: ToolState },

    /// A pointer event was fed to a tool whose gesture already finished
    #[error("{tool} is ready and no longer accepts {event} events")]
    AlreadyReady { tool: &'static str, event: &'static str },
}

/// Result type for tool operations
pub type ToolResult<T> = Result<T, ToolError>;

/// Errors that can occur while loading editor configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
