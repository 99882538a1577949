//! Error types for the fake transport.

use pyrosim_protocol::ProtocolError;
use thiserror::Error;

/// Errors surfaced by the fake serial port.
///
/// Every failure is scoped to the single operation that raised it; the
/// session itself stays usable and can be reopened and retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SerialError {
    /// The operation needs an open connection.
    #[error("cannot {operation}, serial connection is not open")]
    ConnectionClosed {
        /// The operation that was attempted.
        operation: &'static str,
    },

    /// The instrument refused the query before dispatch: a non-ASCII
    /// character, or more characters than the input buffer holds.
    #[error("invalid input query")]
    InputRejected,

    /// The instrument's own error condition, passed through with the error
    /// line it prints on the wire.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
}

/// Result type alias for transport operations.
pub type SerialResult<T> = Result<T, SerialError>;
