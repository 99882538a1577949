//! Command table for the instrument's ASCII command language.
//!
//! Each entry pairs a compiled pattern with the operation it triggers.
//! Entries are tried in table order and the first match wins, so the order
//! is part of the protocol contract: query forms are listed before their set
//! counterparts. Patterns are anchored at the start of the query but may
//! match a prefix; trailing characters such as the line terminator are
//! ignored.

use regex::Regex;

use crate::device::{DeviceState, Unit};

/// Operations the instrument can perform, one per command pattern.
///
/// Query variants read device state, set variants mutate it through an
/// explicit setter. Keeping these as tagged operations rather than closures
/// lets the dispatch be matched exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOp {
    /// `CAL ?` - report the calibration factor.
    QueryCalibration,
    /// `CAL <decimal>` - store a new calibration factor.
    SetCalibration,
    /// `TEMP` - report the temperature reading.
    QueryTemperature,
    /// `RAD` - report the radiance reading.
    QueryRadiance,
    /// `UNIT ?` - report the active unit.
    QueryUnit,
    /// `UNIT <K|C|F>` - select the active unit.
    SetUnit,
}

impl CommandOp {
    /// Execute the operation against the device state.
    ///
    /// `argument` is the first capture group of the matched pattern, present
    /// for set operations. Returns the value to report, or `None` for a set
    /// operation (command accepted, empty response).
    pub fn execute(&self, argument: Option<&str>, state: &mut DeviceState) -> Option<String> {
        match self {
            CommandOp::QueryCalibration => Some(state.calibration_factor().to_string()),
            CommandOp::SetCalibration => {
                if let Some(value) = argument {
                    state.set_calibration_factor(value);
                }
                None
            }
            CommandOp::QueryTemperature => Some(state.temperature().to_string()),
            CommandOp::QueryRadiance => Some(state.radiance().to_string()),
            CommandOp::QueryUnit => Some(state.unit().as_str().to_string()),
            CommandOp::SetUnit => {
                if let Some(unit) = argument.and_then(Unit::from_str) {
                    state.set_unit(unit);
                }
                None
            }
        }
    }
}

/// Ordered dispatch table mapping command patterns to operations.
#[derive(Debug)]
pub struct CommandTable {
    entries: Vec<(Regex, CommandOp)>,
}

fn pattern(pattern: &str) -> Regex {
    Regex::new(pattern).expect("command patterns are static and valid")
}

impl CommandTable {
    /// Build the KT-series command table.
    pub fn new() -> Self {
        let entries = vec![
            (pattern(r"^CAL \?"), CommandOp::QueryCalibration),
            (pattern(r"^CAL (\d+[.]\d*)"), CommandOp::SetCalibration),
            (pattern(r"^TEMP"), CommandOp::QueryTemperature),
            (pattern(r"^RAD"), CommandOp::QueryRadiance),
            (pattern(r"^UNIT \?"), CommandOp::QueryUnit),
            (pattern(r"^UNIT ([KCF])"), CommandOp::SetUnit),
        ];
        CommandTable { entries }
    }

    /// Find the first entry whose pattern matches the start of `query`.
    ///
    /// Returns the matched operation together with its first capture group,
    /// if the pattern has one.
    pub fn find_match<'q>(&self, query: &'q str) -> Option<(CommandOp, Option<&'q str>)> {
        for (pattern, op) in &self.entries {
            if let Some(captures) = pattern.captures(query) {
                return Some((*op, captures.get(1).map(|m| m.as_str())));
            }
        }
        None
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Operations in table order.
    pub fn ops(&self) -> impl Iterator<Item = CommandOp> + '_ {
        self.entries.iter().map(|(_, op)| *op)
    }
}

impl Default for CommandTable {
    fn default() -> Self {
        Self::new()
    }
}
