//! Physical equivalence constants and their stored overrides.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ConstantsError, Result};

/// Number of bytes in a (binary) megabyte.
pub const BYTES_PER_MEGABYTE: u64 = 1_048_576;

/// Fixed byte overhead added to every message header.
pub const DEFAULT_HEADER_OVERHEAD_BYTES: u64 = 800;

/// Raw overrides as read from the configuration store, keyed by storage key.
pub type Overrides = BTreeMap<String, Value>;

/// Identifies one of the overridable equivalence constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ConstantKey {
    /// `CO2` - g CO2e per megabyte.
    #[serde(rename = "CO2")]
    Co2PerMegabyte,
    /// `CO2u` - g CO2e per megabyte and recipient.
    #[serde(rename = "CO2u")]
    Co2PerRecipientMegabyte,
    /// `OIL` - g CO2e per gram of oil.
    #[serde(rename = "OIL")]
    Co2PerGramOil,
    /// `CAR` - g CO2e per meter driven.
    #[serde(rename = "CAR")]
    Co2PerMeterCar,
    /// `TGV` - g CO2e per meter by high-speed train.
    #[serde(rename = "TGV")]
    Co2PerMeterTrain,
    /// `BULBW` - power of the reference light bulb.
    #[serde(rename = "BULBW")]
    WattsPerBulb,
    /// `BULB` - g CO2e per watt-minute of electricity.
    #[serde(rename = "BULB")]
    Co2PerWattMinute,
    /// `BREATHING` - g CO2 exhaled per minute.
    #[serde(rename = "BREATHING")]
    Co2PerMinuteBreathing,
}

impl ConstantKey {
    /// Returns the key under which the override is stored.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Co2PerMegabyte => "CO2",
            Self::Co2PerRecipientMegabyte => "CO2u",
            Self::Co2PerGramOil => "OIL",
            Self::Co2PerMeterCar => "CAR",
            Self::Co2PerMeterTrain => "TGV",
            Self::WattsPerBulb => "BULBW",
            Self::Co2PerWattMinute => "BULB",
            Self::Co2PerMinuteBreathing => "BREATHING",
        }
    }

    /// Returns the unit the constant is expressed in.
    #[must_use]
    pub const fn unit(&self) -> &'static str {
        match self {
            Self::Co2PerMegabyte => "g CO2e/MB",
            Self::Co2PerRecipientMegabyte => "g CO2e/(MB.recipient)",
            Self::Co2PerGramOil => "g CO2e/g oil",
            Self::Co2PerMeterCar | Self::Co2PerMeterTrain => "g CO2e/m",
            Self::WattsPerBulb => "W",
            Self::Co2PerWattMinute => "g CO2e/(W.min)",
            Self::Co2PerMinuteBreathing => "g CO2/min",
        }
    }

    /// Returns a short human-readable description.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Co2PerMegabyte => "Emissions per megabyte sent",
            Self::Co2PerRecipientMegabyte => "Emissions per megabyte and recipient",
            Self::Co2PerGramOil => "Emissions per gram of oil burnt",
            Self::Co2PerMeterCar => "Emissions per meter driven by car",
            Self::Co2PerMeterTrain => "Emissions per meter by high-speed train",
            Self::WattsPerBulb => "Power of the reference light bulb",
            Self::Co2PerWattMinute => "Emissions per watt-minute of electricity",
            Self::Co2PerMinuteBreathing => "CO2 exhaled per minute of breathing",
        }
    }

    /// Returns the built-in default value.
    #[must_use]
    pub fn default_value(&self) -> f64 {
        EquivalenceConstants::default().get(*self)
    }

    /// Returns all keys in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Co2PerMegabyte,
            Self::Co2PerRecipientMegabyte,
            Self::Co2PerGramOil,
            Self::Co2PerMeterCar,
            Self::Co2PerMeterTrain,
            Self::WattsPerBulb,
            Self::Co2PerWattMinute,
            Self::Co2PerMinuteBreathing,
        ]
    }
}

impl std::fmt::Display for ConstantKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ConstantKey {
    type Err = ConstantsError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|key| key.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ConstantsError::UnknownKey(s.to_string()))
    }
}

/// Conversion factors from CO2 mass to physical-world equivalences.
///
/// Every field is strictly positive and finite; [`Self::set`] and
/// [`Self::from_overrides`] refuse anything else.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquivalenceConstants {
    /// g CO2e per megabyte.
    pub co2_per_megabyte: f64,
    /// g CO2e per megabyte and recipient.
    pub co2_per_recipient_megabyte: f64,
    /// g CO2e per gram of oil.
    pub co2_per_gram_oil: f64,
    /// g CO2e per meter driven.
    pub co2_per_meter_car: f64,
    /// g CO2e per meter by high-speed train.
    pub co2_per_meter_train: f64,
    /// Power of the reference bulb in watts.
    pub watts_per_bulb: f64,
    /// g CO2e per watt-minute.
    pub co2_per_watt_minute: f64,
    /// g CO2 per minute of breathing.
    pub co2_per_minute_breathing: f64,
}

impl Default for EquivalenceConstants {
    fn default() -> Self {
        Self {
            co2_per_megabyte: 13.0,
            co2_per_recipient_megabyte: 6.0,
            co2_per_gram_oil: 3.34,
            co2_per_meter_car: 0.1901,
            co2_per_meter_train: 2.30e-3,
            watts_per_bulb: 40.0,
            // 0.052 g CO2e per Wh of electricity.
            co2_per_watt_minute: 0.0520 / 60.0,
            co2_per_minute_breathing: 1.131,
        }
    }
}

impl EquivalenceConstants {
    /// Builds constants from stored overrides.
    ///
    /// Missing, unparseable or non-positive values silently fall back to the
    /// default; unknown keys are ignored.
    #[must_use]
    pub fn from_overrides(overrides: &Overrides) -> Self {
        let mut constants = Self::default();
        for key in ConstantKey::all() {
            let Some(raw) = overrides.get(key.as_str()) else {
                continue;
            };
            match parse_override(*key, raw) {
                Ok(Some(value)) => constants.put(*key, value),
                Ok(None) => {}
                Err(e) => tracing::debug!(%e, "using default for {key}"),
            }
        }
        constants
    }

    /// Returns the value of a single constant.
    #[must_use]
    pub const fn get(&self, key: ConstantKey) -> f64 {
        match key {
            ConstantKey::Co2PerMegabyte => self.co2_per_megabyte,
            ConstantKey::Co2PerRecipientMegabyte => self.co2_per_recipient_megabyte,
            ConstantKey::Co2PerGramOil => self.co2_per_gram_oil,
            ConstantKey::Co2PerMeterCar => self.co2_per_meter_car,
            ConstantKey::Co2PerMeterTrain => self.co2_per_meter_train,
            ConstantKey::WattsPerBulb => self.watts_per_bulb,
            ConstantKey::Co2PerWattMinute => self.co2_per_watt_minute,
            ConstantKey::Co2PerMinuteBreathing => self.co2_per_minute_breathing,
        }
    }

    /// Overrides a single constant.
    ///
    /// # Errors
    ///
    /// Returns [`ConstantsError::InvalidValue`] if `value` is not a strictly
    /// positive finite number.
    pub fn set(&mut self, key: ConstantKey, value: f64) -> Result<()> {
        if !is_valid(value) {
            return Err(ConstantsError::InvalidValue {
                key: key.as_str(),
                value: value.to_string(),
            });
        }
        self.put(key, value);
        Ok(())
    }

    /// Checks every constant against the positivity invariant.
    ///
    /// # Errors
    ///
    /// Returns the first offending constant.
    pub fn validate(&self) -> Result<()> {
        for key in ConstantKey::all() {
            let value = self.get(*key);
            if !is_valid(value) {
                return Err(ConstantsError::InvalidValue {
                    key: key.as_str(),
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Returns the g CO2e emitted by the reference bulb in one minute.
    #[must_use]
    pub fn co2_per_bulb_minute(&self) -> f64 {
        self.watts_per_bulb * self.co2_per_watt_minute
    }

    /// Returns the constants as storage key / value pairs.
    #[must_use]
    pub fn to_overrides(&self) -> Overrides {
        ConstantKey::all()
            .iter()
            .map(|key| (key.as_str().to_string(), Value::from(self.get(*key))))
            .collect()
    }

    const fn put(&mut self, key: ConstantKey, value: f64) {
        match key {
            ConstantKey::Co2PerMegabyte => self.co2_per_megabyte = value,
            ConstantKey::Co2PerRecipientMegabyte => self.co2_per_recipient_megabyte = value,
            ConstantKey::Co2PerGramOil => self.co2_per_gram_oil = value,
            ConstantKey::Co2PerMeterCar => self.co2_per_meter_car = value,
            ConstantKey::Co2PerMeterTrain => self.co2_per_meter_train = value,
            ConstantKey::WattsPerBulb => self.watts_per_bulb = value,
            ConstantKey::Co2PerWattMinute => self.co2_per_watt_minute = value,
            ConstantKey::Co2PerMinuteBreathing => self.co2_per_minute_breathing = value,
        }
    }
}

/// Parses a stored override.
///
/// Returns `Ok(None)` for empty values (null, empty string), which mean
/// "not set".
///
/// # Errors
///
/// Returns [`ConstantsError::InvalidValue`] if the value is not a strictly
/// positive finite number.
pub fn parse_override(key: ConstantKey, raw: &Value) -> Result<Option<f64>> {
    let invalid = || ConstantsError::InvalidValue {
        key: key.as_str(),
        value: raw.to_string(),
    };

    let value = match raw {
        Value::Null => return Ok(None),
        Value::Number(n) => n.as_f64().ok_or_else(invalid)?,
        Value::String(s) if s.trim().is_empty() => return Ok(None),
        Value::String(s) => s.trim().parse::<f64>().map_err(|_| invalid())?,
        _ => return Err(invalid()),
    };

    if is_valid(value) {
        Ok(Some(value))
    } else {
        Err(invalid())
    }
}

fn is_valid(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let c = EquivalenceConstants::default();
        assert_eq!(c.co2_per_megabyte, 13.0);
        assert_eq!(c.co2_per_recipient_megabyte, 6.0);
        assert_eq!(c.watts_per_bulb, 40.0);
        assert_relative_eq!(c.co2_per_watt_minute, 0.000867, epsilon = 1e-6);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_key_roundtrip() {
        for key in ConstantKey::all() {
            assert_eq!(key.as_str().parse::<ConstantKey>().unwrap(), *key);
        }
        assert_eq!("co2U".parse::<ConstantKey>().unwrap(), ConstantKey::Co2PerRecipientMegabyte);
        assert!("NOPE".parse::<ConstantKey>().is_err());
    }

    #[test]
    fn test_from_overrides() {
        let mut overrides = Overrides::new();
        overrides.insert("CO2".into(), json!("20"));
        overrides.insert("CAR".into(), json!(0.2));
        overrides.insert("OIL".into(), json!("abc"));
        overrides.insert("TGV".into(), json!("0"));
        overrides.insert("BULBW".into(), json!(""));
        overrides.insert("UNKNOWN".into(), json!(1));

        let c = EquivalenceConstants::from_overrides(&overrides);
        assert_eq!(c.co2_per_megabyte, 20.0);
        assert_eq!(c.co2_per_meter_car, 0.2);
        assert_eq!(c.co2_per_gram_oil, 3.34);
        assert_eq!(c.co2_per_meter_train, 2.30e-3);
        assert_eq!(c.watts_per_bulb, 40.0);
    }

    #[test]
    fn test_set_rejects_non_positive() {
        let mut c = EquivalenceConstants::default();
        assert!(c.set(ConstantKey::Co2PerGramOil, 0.0).is_err());
        assert!(c.set(ConstantKey::Co2PerGramOil, -1.0).is_err());
        assert!(c.set(ConstantKey::Co2PerGramOil, f64::INFINITY).is_err());
        assert!(c.set(ConstantKey::Co2PerGramOil, 2.5).is_ok());
        assert_eq!(c.co2_per_gram_oil, 2.5);
    }

    #[test]
    fn test_to_overrides_roundtrip() {
        let mut c = EquivalenceConstants::default();
        c.set(ConstantKey::Co2PerMinuteBreathing, 2.0).unwrap();
        let back = EquivalenceConstants::from_overrides(&c.to_overrides());
        assert_eq!(back, c);
    }
}
