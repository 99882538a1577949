//! KT-Series Pyrometer Command Protocol
//!
//! This crate provides the device-side protocol logic for a simulated
//! KT-series infrared pyrometer. The instrument speaks a line-based ASCII
//! command language over a serial link; the transport half of the simulator
//! lives in `pyrosim-serial`, while this crate owns the device state, the
//! command table, and the validation/dispatch engine.
//!
//! # Protocol Overview
//!
//! The CLI is a simple line-based text interface, one command per line,
//! case-sensitive:
//!
//! - **Query commands**: `CAL ?`, `TEMP`, `RAD`, `UNIT ?` - return the
//!   current value followed by a newline
//! - **Set commands**: `CAL <decimal>`, `UNIT <K|C|F>` - store the value and
//!   return nothing
//!
//! Queries must be ASCII and fit the instrument's 40-character input buffer;
//! anything else is refused before dispatch. Text that passes the transport
//! checks but matches no command draws the instrument's error line.
//!
//! # Example
//!
//! ```rust,ignore
//! use pyrosim_protocol::{CommandResponder, NoLatency};
//!
//! let mut responder = CommandResponder::with_latency(Box::new(NoLatency));
//! assert!(responder.accept(b"CAL ?\n"));
//! let reply = responder.respond()?; // "2.0\n"
//! ```

mod commands;
mod device;
mod error;
mod latency;
mod responder;

pub use commands::*;
pub use device::*;
pub use error::*;
pub use latency::*;
pub use responder::*;
