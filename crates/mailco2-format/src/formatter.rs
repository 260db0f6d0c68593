//! Localized rendering of quantities.

use mailco2_locale::Localizer;

use crate::family::UnitFamily;
use crate::quantity::{Quantity, format_quantity};

/// Renders quantities for the active locale.
#[derive(Debug)]
pub struct UnitFormatter<'a, L: Localizer + ?Sized> {
    localizer: &'a L,
}

impl<'a, L: Localizer + ?Sized> UnitFormatter<'a, L> {
    /// Creates a formatter for the given locale.
    #[must_use]
    pub const fn new(localizer: &'a L) -> Self {
        Self { localizer }
    }

    /// Returns the localizer used for symbols and separators.
    #[must_use]
    pub const fn localizer(&self) -> &'a L {
        self.localizer
    }

    /// Selects the scale of a value with the family's default decimals.
    #[must_use]
    pub fn quantity(&self, value: f64, family: UnitFamily) -> Quantity {
        format_quantity(value, family, family.default_decimal_places())
    }

    /// Renders a value with the family's default decimals.
    #[must_use]
    pub fn format(&self, value: f64, family: UnitFamily) -> String {
        self.quantity(value, family).render(self.localizer)
    }

    /// Renders a value with an explicit number of decimals.
    #[must_use]
    pub fn format_with(&self, value: f64, family: UnitFamily, decimal_places: usize) -> String {
        format_quantity(value, family, decimal_places).render(self.localizer)
    }

    /// Renders a byte size, e.g. `1,50 ko`.
    #[must_use]
    pub fn bytes(&self, bytes: u64) -> String {
        self.format(bytes as f64, UnitFamily::Bytes)
    }

    /// Renders a mass in grams, e.g. `2,5 kg`.
    #[must_use]
    pub fn grams(&self, grams: f64) -> String {
        self.format(grams, UnitFamily::Grams)
    }

    /// Renders a distance in meters, e.g. `12,3 km`.
    #[must_use]
    pub fn meters(&self, meters: f64) -> String {
        self.format(meters, UnitFamily::Meters)
    }

    /// Renders a duration in minutes, e.g. `1,5 h`.
    #[must_use]
    pub fn minutes(&self, minutes: f64) -> String {
        self.format(minutes, UnitFamily::Minutes)
    }

    /// Renders a bare number without superfluous decimals, e.g. `40` or `12,5`.
    #[must_use]
    pub fn plain(&self, value: f64) -> String {
        let text = value.to_string();
        let separator = self.localizer.decimal_separator();
        if separator == '.' {
            text
        } else {
            text.replace('.', &separator.to_string())
        }
    }
}
