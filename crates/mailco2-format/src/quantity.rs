//! Logarithmic scale selection.

use mailco2_locale::Localizer;
use serde::{Deserialize, Serialize};

use crate::family::{MINUTES_PER_DAY, ScaleSymbol, UnitFamily};

/// Text rendered in place of a value that overflowed to infinity or NaN.
pub const OVERFLOW_PLACEHOLDER: &str = "—";

/// Below this magnitude values are shown with their first significant digit.
const SIGNIFICANT_DIGIT_THRESHOLD: f64 = 0.1;

/// From this magnitude on values are scaled.
const SCALING_THRESHOLD: f64 = 2.0;

/// A value expressed in a selected scale, ready to be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    /// Value in the selected scale.
    pub value: f64,
    /// Number of decimal places to render.
    pub decimal_places: usize,
    /// Selected scale.
    pub symbol: ScaleSymbol,
    /// Family the value belongs to.
    pub family: UnitFamily,
}

impl Quantity {
    /// Returns true if the value cannot be displayed as a number.
    #[must_use]
    pub fn is_overflow(&self) -> bool {
        !self.value.is_finite()
    }

    /// Renders the numeric part with the locale's decimal separator.
    #[must_use]
    pub fn render_number(&self, decimal_separator: char) -> String {
        if self.is_overflow() {
            return OVERFLOW_PLACEHOLDER.to_string();
        }

        // Ties round away from zero, e.g. 2.25 renders as 2.3.
        let factor = 10f64.powi(i32::try_from(self.decimal_places).unwrap_or(i32::MAX));
        let scaled = self.value * factor;
        let value = if scaled.is_finite() {
            scaled.round() / factor
        } else {
            self.value
        };
        let mut number = format!("{:.*}", self.decimal_places, value);
        if self.family.trims_trailing_zeros() && number.contains('.') {
            let trimmed = number.trim_end_matches('0').trim_end_matches('.').len();
            number.truncate(trimmed);
        }
        if number == "-0" {
            number = "0".to_string();
        }
        if decimal_separator != '.' {
            number = number.replace('.', &decimal_separator.to_string());
        }
        number
    }

    /// Renders the value followed by its localized symbol, e.g. `1,5 kg`.
    #[must_use]
    pub fn render<L: Localizer + ?Sized>(&self, localizer: &L) -> String {
        if self.is_overflow() {
            return OVERFLOW_PLACEHOLDER.to_string();
        }
        format!(
            "{} {}",
            self.render_number(localizer.decimal_separator()),
            self.symbol.render(localizer)
        )
    }
}

/// Selects the scale of `value` within `family`.
///
/// - zero is kept as is, in the base unit;
/// - magnitudes below 0.1 get as many decimals as needed to show their
///   first significant digit;
/// - magnitudes below 2 stay in the base unit;
/// - larger magnitudes are divided by the largest power of the family base
///   they reach, capped at the last scale. Minutes switch to days from 1440.
#[must_use]
pub fn format_quantity(value: f64, family: UnitFamily, decimal_places: usize) -> Quantity {
    let base_quantity = |value: f64, decimal_places: usize| Quantity {
        value,
        decimal_places,
        symbol: family.base_symbol(),
        family,
    };

    if !value.is_finite() {
        return base_quantity(value, 0);
    }

    let magnitude = value.abs();
    if magnitude == 0.0 {
        return base_quantity(0.0, 0);
    }
    if magnitude < SIGNIFICANT_DIGIT_THRESHOLD {
        let places = magnitude.log10().floor().abs() as usize;
        return base_quantity(value, places);
    }
    if magnitude < SCALING_THRESHOLD {
        return base_quantity(value, decimal_places);
    }

    if family == UnitFamily::Minutes && magnitude >= MINUTES_PER_DAY {
        return Quantity {
            value: value / MINUTES_PER_DAY,
            decimal_places,
            symbol: ScaleSymbol::Day,
            family,
        };
    }

    let scales = family.scales();
    let base = family.base();
    let mut index = 0;
    let mut divisor = 1.0;
    while index + 1 < scales.len() && magnitude >= divisor * base {
        divisor *= base;
        index += 1;
    }

    Quantity {
        value: value / divisor,
        decimal_places,
        symbol: scales[index],
        family,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero() {
        for family in UnitFamily::all() {
            let q = format_quantity(0.0, *family, family.default_decimal_places());
            assert_eq!(q.value, 0.0);
            assert_eq!(q.symbol, family.base_symbol());
        }
    }

    #[test]
    fn test_significant_digit_branch() {
        let q = format_quantity(0.01475, UnitFamily::Grams, 1);
        assert_eq!(q.decimal_places, 2);
        assert_eq!(q.symbol, ScaleSymbol::Gram);
        assert_eq!(q.render_number('.'), "0.01");

        let q = format_quantity(0.002, UnitFamily::Meters, 1);
        assert_eq!(q.decimal_places, 3);
        assert_eq!(q.render_number(','), "0,002");

        let q = format_quantity(0.0004, UnitFamily::Grams, 1);
        assert_eq!(q.decimal_places, 4);
    }

    #[test]
    fn test_base_unit_below_two() {
        let q = format_quantity(1.96, UnitFamily::Meters, 1);
        assert_eq!(q.symbol, ScaleSymbol::Meter);
        assert_eq!(q.render_number('.'), "2");

        let q = format_quantity(1.0, UnitFamily::Bytes, 2);
        assert_eq!(q.symbol, ScaleSymbol::Byte);
        assert_eq!(q.render_number('.'), "1.00");
    }

    #[test]
    fn test_scaling() {
        let q = format_quantity(2500.0, UnitFamily::Grams, 1);
        assert_eq!(q.symbol, ScaleSymbol::Kilogram);
        assert_relative_eq!(q.value, 2.5);

        let q = format_quantity(1_000_000.0, UnitFamily::Meters, 1);
        assert_eq!(q.symbol, ScaleSymbol::Megameter);
        assert_relative_eq!(q.value, 1.0);

        let q = format_quantity(1_048_576.0, UnitFamily::Bytes, 2);
        assert_eq!(q.symbol, ScaleSymbol::Megabyte);

        let q = format_quantity(814.0, UnitFamily::Bytes, 2);
        assert_eq!(q.symbol, ScaleSymbol::Bytes);
    }

    #[test]
    fn test_scaling_is_capped() {
        let q = format_quantity(5.0e15, UnitFamily::Grams, 1);
        assert_eq!(q.symbol, ScaleSymbol::Teragram);
        assert_relative_eq!(q.value, 5000.0);

        let q = format_quantity(2.0e13, UnitFamily::Bytes, 2);
        assert_eq!(q.symbol, ScaleSymbol::Gigabyte);
    }

    #[test]
    fn test_minutes() {
        assert_eq!(format_quantity(30.0, UnitFamily::Minutes, 1).symbol, ScaleSymbol::Minute);

        let q = format_quantity(90.0, UnitFamily::Minutes, 1);
        assert_eq!(q.symbol, ScaleSymbol::Hour);
        assert_relative_eq!(q.value, 1.5);

        let q = format_quantity(1439.0, UnitFamily::Minutes, 1);
        assert_eq!(q.symbol, ScaleSymbol::Hour);

        let q = format_quantity(1440.0, UnitFamily::Minutes, 1);
        assert_eq!(q.symbol, ScaleSymbol::Day);
        assert_relative_eq!(q.value, 1.0);

        let q = format_quantity(1440.0 * 400.0, UnitFamily::Minutes, 1);
        assert_eq!(q.symbol, ScaleSymbol::Day);
        assert_relative_eq!(q.value, 400.0);
    }

    #[test]
    fn test_overflow() {
        let q = format_quantity(f64::INFINITY, UnitFamily::Grams, 1);
        assert!(q.is_overflow());
        assert_eq!(q.render_number(','), OVERFLOW_PLACEHOLDER);

        assert!(format_quantity(f64::NAN, UnitFamily::Minutes, 1).is_overflow());
    }

    #[test]
    fn test_monotonic_within_bucket() {
        for family in [UnitFamily::Grams, UnitFamily::Meters] {
            let mut previous = f64::MIN;
            for i in 0..500 {
                let value = 2000.0 + f64::from(i) * 1.7;
                let q = format_quantity(value, family, 1);
                assert_eq!(q.symbol, family.scales()[1]);
                let shown: f64 = q.render_number('.').parse().unwrap();
                assert!(shown >= previous, "{shown} < {previous} for {value}");
                previous = shown;
            }
        }
    }

    #[test]
    fn test_trailing_zeros() {
        let q = format_quantity(3000.0, UnitFamily::Grams, 1);
        assert_eq!(q.render_number('.'), "3");
        let q = format_quantity(3072.0, UnitFamily::Bytes, 2);
        assert_eq!(q.render_number('.'), "3.00");
    }
}
