//! Device-side query validation and dispatch.

use log::{debug, warn};

use crate::commands::CommandTable;
use crate::device::DeviceState;
use crate::error::{ProtocolError, ProtocolResult};
use crate::latency::{LatencyModel, UniformLatency};

/// Size of the instrument's input buffer. Longer queries are refused before
/// dispatch.
pub const MAX_QUERY_LENGTH: usize = 40;

/// Generates instrument responses for accumulated queries.
///
/// Owns the device state and the command table. [`accept`] classifies a raw
/// query against the transport constraints (ASCII only, bounded length);
/// [`respond`] dispatches the accepted query through the command table and
/// formats the reply.
///
/// [`accept`]: CommandResponder::accept
/// [`respond`]: CommandResponder::respond
pub struct CommandResponder {
    state: DeviceState,
    table: CommandTable,
    /// Characters accumulated since the last dispatch.
    pending: String,
    latency: Box<dyn LatencyModel + Send>,
}

impl CommandResponder {
    /// Create a responder with production latency.
    pub fn new() -> Self {
        Self::with_latency(Box::new(UniformLatency))
    }

    /// Create a responder with a custom latency model.
    pub fn with_latency(latency: Box<dyn LatencyModel + Send>) -> Self {
        CommandResponder {
            state: DeviceState::default(),
            table: CommandTable::new(),
            pending: String::new(),
            latency,
        }
    }

    /// Current device state.
    pub fn state(&self) -> &DeviceState {
        &self.state
    }

    /// Validate a proposed query against the transport constraints.
    ///
    /// The simulated transmission delay is incurred on every call, accepted
    /// or not. Pending-query storage is cleared first and repopulated only if
    /// the query passes both checks, evaluated in order:
    ///
    /// 1. every character is ASCII (code point <= 127); scanning stops at
    ///    the first violation
    /// 2. total length is at most [`MAX_QUERY_LENGTH`]
    pub fn accept(&mut self, query: &[u8]) -> bool {
        self.latency.transmission_delay();
        self.pending.clear();

        if !query.is_ascii() {
            warn!("query rejected: non-ASCII character");
            return false;
        }
        if query.len() > MAX_QUERY_LENGTH {
            warn!(
                "query rejected: {} characters exceeds the {}-character input buffer",
                query.len(),
                MAX_QUERY_LENGTH
            );
            return false;
        }

        // All-ASCII, so the conversion is lossless.
        self.pending.push_str(&String::from_utf8_lossy(query));
        true
    }

    /// Dispatch the pending query and format the instrument's reply.
    ///
    /// Patterns are tried in table order and the first match wins. A query
    /// operation replies with the value followed by the line terminator; a
    /// set operation replies with the empty string. A query that matches no
    /// pattern is the instrument's own error condition.
    pub fn respond(&mut self) -> ProtocolResult<String> {
        match self.table.find_match(&self.pending) {
            Some((op, argument)) => {
                debug!("dispatching {:?}", op);
                let reply = match op.execute(argument, &mut self.state) {
                    Some(value) => format!("{}\n", value),
                    None => String::new(),
                };
                Ok(reply)
            }
            None => {
                warn!("no command pattern matched {:?}", self.pending);
                Err(ProtocolError::UnrecognizedCommand)
            }
        }
    }
}

impl Default for CommandResponder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::Unit;
    use crate::latency::NoLatency;

    fn test_responder() -> CommandResponder {
        CommandResponder::with_latency(Box::new(NoLatency))
    }

    #[test]
    fn test_accept_and_respond_query() {
        let mut responder = test_responder();
        assert!(responder.accept(b"CAL ?\n"));
        assert_eq!(responder.respond().unwrap(), "2.0\n");
    }

    #[test]
    fn test_set_command_responds_empty() {
        let mut responder = test_responder();
        assert!(responder.accept(b"UNIT K\n"));
        assert_eq!(responder.respond().unwrap(), "");
        assert_eq!(responder.state().unit(), Unit::Kelvin);
    }

    #[test]
    fn test_calibration_value_preserved_verbatim() {
        let mut responder = test_responder();
        assert!(responder.accept(b"CAL 3.14\n"));
        responder.respond().unwrap();
        assert!(responder.accept(b"CAL ?\n"));
        assert_eq!(responder.respond().unwrap(), "3.14\n");
    }

    #[test]
    fn test_accept_rejects_non_ascii() {
        let mut responder = test_responder();
        assert!(!responder.accept("TÉMP\n".as_bytes()));
        // pending storage is left empty, so a dispatch attempt fails
        assert_eq!(
            responder.respond(),
            Err(ProtocolError::UnrecognizedCommand)
        );
    }

    #[test]
    fn test_accept_length_boundary() {
        let mut responder = test_responder();
        assert!(responder.accept(&[b'X'; MAX_QUERY_LENGTH]));
        assert!(!responder.accept(&[b'X'; MAX_QUERY_LENGTH + 1]));
    }

    #[test]
    fn test_accept_replaces_pending_query() {
        let mut responder = test_responder();
        assert!(responder.accept(b"TEMP\n"));
        assert!(responder.accept(b"CAL ?\n"));
        // the second accept replaced the first query rather than growing it
        assert_eq!(responder.respond().unwrap(), "2.0\n");
    }

    #[test]
    fn test_unrecognized_command_error_line() {
        let mut responder = test_responder();
        assert!(responder.accept(b"CAL"));
        let err = responder.respond().unwrap_err();
        assert_eq!(err, ProtocolError::UnrecognizedCommand);
        assert_eq!(err.to_string(), "ERROR 19: CAN'T DO IT");
    }
}
