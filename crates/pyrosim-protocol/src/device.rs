//! Simulated instrument state.

/// Measurement unit reported and accepted by the instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// Degrees Celsius (`C`)
    Celsius,
    /// Kelvin (`K`)
    Kelvin,
    /// Degrees Fahrenheit (`F`)
    Fahrenheit,
}

impl Unit {
    /// Get the single-character symbol used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Celsius => "C",
            Unit::Kelvin => "K",
            Unit::Fahrenheit => "F",
        }
    }

    /// Parse a unit from its wire symbol.
    pub fn from_str(s: &str) -> Option<Unit> {
        match s {
            "C" => Some(Unit::Celsius),
            "K" => Some(Unit::Kelvin),
            "F" => Some(Unit::Fahrenheit),
            _ => None,
        }
    }
}

/// Current readings and configuration of the simulated instrument.
///
/// Numeric fields hold the decimal text the instrument would print. Values
/// written by set commands are stored verbatim and echoed back exactly as
/// received, never reparsed or renormalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceState {
    temperature: String,
    radiance: String,
    unit: Unit,
    calibration_factor: String,
}

impl Default for DeviceState {
    fn default() -> Self {
        DeviceState {
            temperature: "25.0".to_string(),
            radiance: "0.0".to_string(),
            unit: Unit::Celsius,
            calibration_factor: "2.0".to_string(),
        }
    }
}

impl DeviceState {
    /// Target temperature reading, as decimal text.
    pub fn temperature(&self) -> &str {
        &self.temperature
    }

    /// Radiance reading, as decimal text.
    pub fn radiance(&self) -> &str {
        &self.radiance
    }

    /// Active measurement unit.
    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Emissivity calibration factor, as decimal text.
    pub fn calibration_factor(&self) -> &str {
        &self.calibration_factor
    }

    /// Store a new calibration factor, preserving the input formatting.
    pub fn set_calibration_factor(&mut self, value: &str) {
        self.calibration_factor = value.to_string();
    }

    /// Select the active measurement unit.
    pub fn set_unit(&mut self, unit: Unit) {
        self.unit = unit;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = DeviceState::default();
        assert_eq!(state.temperature(), "25.0");
        assert_eq!(state.radiance(), "0.0");
        assert_eq!(state.unit(), Unit::Celsius);
        assert_eq!(state.calibration_factor(), "2.0");
    }

    #[test]
    fn test_calibration_factor_stored_verbatim() {
        let mut state = DeviceState::default();
        state.set_calibration_factor("0003.1400");
        assert_eq!(state.calibration_factor(), "0003.1400");
    }

    #[test]
    fn test_unit_symbols() {
        assert_eq!(Unit::Celsius.as_str(), "C");
        assert_eq!(Unit::Kelvin.as_str(), "K");
        assert_eq!(Unit::Fahrenheit.as_str(), "F");

        assert_eq!(Unit::from_str("K"), Some(Unit::Kelvin));
        assert_eq!(Unit::from_str("c"), None);
        assert_eq!(Unit::from_str("|"), None);
    }
}
