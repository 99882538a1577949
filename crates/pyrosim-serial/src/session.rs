//! Fake serial session layered over the command responder.

use std::collections::VecDeque;
use std::time::Duration;

use bytes::BytesMut;
use log::{debug, trace};
use pyrosim_protocol::{CommandResponder, LatencyModel, UniformLatency};

use crate::error::{SerialError, SerialResult};

/// Default baud rate reported by the fake port.
pub const DEFAULT_BAUD_RATE: u32 = 9600;

/// Default read timeout when no response is queued.
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_millis(200);

/// A fake serial port wired to a simulated pyrometer.
///
/// The session is constructed already open. It owns the connection state and
/// the I/O buffers and delegates all protocol semantics to the responder:
/// written characters accumulate in an input buffer that is offered whole to
/// [`CommandResponder::accept`], and responses queue as complete
/// newline-terminated records. A record queue cannot hold a partial line, so
/// a non-empty output buffer always has a complete record to return.
///
/// Not meant for concurrent use; the simulated waits block the calling
/// thread the way synchronous serial I/O does.
pub struct FakeSerialPort {
    /// Display name of the port, same as the identifier it was opened with.
    name: String,
    /// Port identifier given at construction. Kept only for display; no
    /// discovery or enumeration is simulated.
    port: String,
    baud_rate: u32,
    timeout: Duration,
    is_open: bool,
    responder: CommandResponder,
    /// Characters pending classification.
    input_buffer: BytesMut,
    /// Complete newline-terminated records pending delivery, oldest first.
    output_buffer: VecDeque<String>,
    latency: Box<dyn LatencyModel + Send>,
}

impl FakeSerialPort {
    /// Create an open session on the given port with default settings.
    pub fn new(port: impl Into<String>) -> Self {
        Self::with_latency(port, UniformLatency)
    }

    /// Create an open session with a custom latency model.
    ///
    /// The model drives both the responder's transmission delay and the
    /// read-timeout wait. Tests inject [`NoLatency`] to run deterministically.
    ///
    /// [`NoLatency`]: pyrosim_protocol::NoLatency
    pub fn with_latency<L>(port: impl Into<String>, latency: L) -> Self
    where
        L: LatencyModel + Clone + Send + 'static,
    {
        let port = port.into();
        FakeSerialPort {
            name: port.clone(),
            port,
            baud_rate: DEFAULT_BAUD_RATE,
            timeout: DEFAULT_READ_TIMEOUT,
            is_open: true,
            responder: CommandResponder::with_latency(Box::new(latency.clone())),
            input_buffer: BytesMut::new(),
            output_buffer: VecDeque::new(),
            latency: Box::new(latency),
        }
    }

    /// Set the baud rate. The fake port only reports it back.
    pub fn with_baud_rate(mut self, baud_rate: u32) -> Self {
        self.baud_rate = baud_rate;
        self
    }

    /// Set the read timeout used when no response is queued.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Display name of the port.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Port identifier given at construction.
    pub fn port(&self) -> &str {
        &self.port
    }

    /// Configured baud rate.
    pub fn baud_rate(&self) -> u32 {
        self.baud_rate
    }

    /// Configured read timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Whether the connection is open.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Number of responses waiting to be read.
    pub fn queued_responses(&self) -> usize {
        self.output_buffer.len()
    }

    /// Mark the connection open. Idempotent.
    pub fn open(&mut self) {
        self.is_open = true;
    }

    /// Mark the connection closed. Idempotent.
    ///
    /// Buffered responses are kept; reopening resumes where the session
    /// left off.
    pub fn close(&mut self) {
        self.is_open = false;
    }

    fn check_connection(&self, operation: &'static str) -> SerialResult<()> {
        if self.is_open {
            Ok(())
        } else {
            Err(SerialError::ConnectionClosed { operation })
        }
    }

    /// Send a query to the instrument and queue the response for
    /// [`readline`].
    ///
    /// The written characters join whatever is already in the input buffer
    /// and the accumulated whole is offered to the responder. The input
    /// buffer is cleared once the write resolves, on every path; callers
    /// must not assume unconsumed input persists across calls.
    ///
    /// [`readline`]: FakeSerialPort::readline
    pub fn write(&mut self, query: &str) -> SerialResult<()> {
        self.check_connection("write")?;

        self.input_buffer.extend_from_slice(query.as_bytes());
        trace!("input buffer holds {} characters", self.input_buffer.len());

        let accepted = self.responder.accept(&self.input_buffer);
        self.input_buffer.clear();
        if !accepted {
            return Err(SerialError::InputRejected);
        }

        let response = self.responder.respond()?;
        if !response.is_empty() {
            debug!("queueing {}-character response", response.len());
            self.output_buffer.push_back(response);
        }
        Ok(())
    }

    /// Read one response line.
    ///
    /// Returns the oldest queued record, terminator included, leaving later
    /// records for subsequent calls. With nothing queued, blocks for the
    /// configured timeout and then returns an empty string, like a real port
    /// read that times out with no data available.
    pub fn readline(&mut self) -> SerialResult<String> {
        self.check_connection("readline")?;

        match self.output_buffer.pop_front() {
            Some(record) => {
                trace!("draining {}-character record", record.len());
                Ok(record)
            }
            None => {
                self.latency.read_timeout(self.timeout);
                Ok(String::new())
            }
        }
    }
}
