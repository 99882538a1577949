//! Error types for the pyrometer protocol.

use thiserror::Error;

/// Errors that can occur while dispatching instrument commands.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// No command pattern matched the query. The display text is the error
    /// line the real instrument prints.
    #[error("ERROR 19: CAN'T DO IT")]
    UnrecognizedCommand,
}

/// Result type alias for protocol operations.
pub type ProtocolResult<T> = Result<T, ProtocolError>;
