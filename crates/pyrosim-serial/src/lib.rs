//! Fake Serial Transport
//!
//! This crate provides a fake serial port wired to the simulated KT-series
//! pyrometer, so driver code can be exercised against transport behavior that
//! matches the physical device without any hardware attached.
//!
//! # Transport Overview
//!
//! The port emulates a synchronous line-oriented serial link:
//!
//! - **Writes** accumulate into an input buffer that is offered whole to the
//!   instrument's command responder
//! - **Responses** queue as complete newline-terminated records and drain
//!   one record per read, oldest first
//! - **Reads** with nothing queued block for the configured timeout and
//!   return an empty string
//!
//! All protocol semantics live in `pyrosim-protocol`; this crate only does
//! buffering and connection-state enforcement. Port enumeration is not
//! simulated.
//!
//! # Example
//!
//! ```rust,ignore
//! use pyrosim_serial::FakeSerialPort;
//!
//! let mut port = FakeSerialPort::new("/dev/ttyUSB0");
//! port.write("CAL ?\n")?;
//! let reply = port.readline()?; // "2.0\n"
//! ```

mod error;
mod session;

pub use error::*;
pub use session::*;
