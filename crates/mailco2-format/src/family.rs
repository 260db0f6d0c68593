//! Unit families and their scale symbols.

use derive_more::Display;
use mailco2_locale::{Localizer, keys};
use serde::{Deserialize, Serialize};

/// Minutes in a day; from there on durations are expressed in days.
pub const MINUTES_PER_DAY: f64 = 1440.0;

/// A family of units sharing a base and a ladder of scales.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitFamily {
    /// Bytes, base 1024: B, kB, MB, GB.
    #[display("bytes")]
    Bytes,
    /// Grams, base 1000: g, kg, t, Gg, Tg.
    #[display("grams")]
    Grams,
    /// Meters, base 1000: m, km, Mm, Gm, Tm.
    #[display("meters")]
    Meters,
    /// Minutes, base 60 below a day (min, h), days beyond.
    #[display("minutes")]
    Minutes,
}

impl UnitFamily {
    /// Returns the ratio between two consecutive scales.
    #[must_use]
    pub const fn base(&self) -> f64 {
        match self {
            Self::Bytes => 1024.0,
            Self::Grams | Self::Meters => 1000.0,
            Self::Minutes => 60.0,
        }
    }

    /// Returns the scales from the base unit upwards.
    #[must_use]
    pub const fn scales(&self) -> &'static [ScaleSymbol] {
        match self {
            Self::Bytes => &[
                ScaleSymbol::Bytes,
                ScaleSymbol::Kilobyte,
                ScaleSymbol::Megabyte,
                ScaleSymbol::Gigabyte,
            ],
            Self::Grams => &[
                ScaleSymbol::Gram,
                ScaleSymbol::Kilogram,
                ScaleSymbol::Tonne,
                ScaleSymbol::Gigagram,
                ScaleSymbol::Teragram,
            ],
            Self::Meters => &[
                ScaleSymbol::Meter,
                ScaleSymbol::Kilometer,
                ScaleSymbol::Megameter,
                ScaleSymbol::Gigameter,
                ScaleSymbol::Terameter,
            ],
            Self::Minutes => &[ScaleSymbol::Minute, ScaleSymbol::Hour],
        }
    }

    /// Returns the symbol used for zero and for values below the scaling
    /// threshold.
    #[must_use]
    pub const fn base_symbol(&self) -> ScaleSymbol {
        match self {
            Self::Bytes => ScaleSymbol::Byte,
            Self::Grams => ScaleSymbol::Gram,
            Self::Meters => ScaleSymbol::Meter,
            Self::Minutes => ScaleSymbol::Minute,
        }
    }

    /// Returns the default number of decimal places.
    #[must_use]
    pub const fn default_decimal_places(&self) -> usize {
        match self {
            Self::Bytes => 2,
            Self::Grams | Self::Meters | Self::Minutes => 1,
        }
    }

    /// Returns true if trailing zeros are dropped from rendered values.
    ///
    /// Byte sizes keep a fixed number of decimals.
    #[must_use]
    pub const fn trims_trailing_zeros(&self) -> bool {
        !matches!(self, Self::Bytes)
    }

    /// Returns all families.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Bytes, Self::Grams, Self::Meters, Self::Minutes]
    }
}

/// Symbol of one scale of a unit family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleSymbol {
    /// Singular byte, used for values below two.
    Byte,
    /// Plural bytes.
    Bytes,
    /// 1024 bytes.
    Kilobyte,
    /// 1024² bytes.
    Megabyte,
    /// 1024³ bytes.
    Gigabyte,
    /// Gram.
    Gram,
    /// 10³ g.
    Kilogram,
    /// 10⁶ g.
    Tonne,
    /// 10⁹ g.
    Gigagram,
    /// 10¹² g.
    Teragram,
    /// Meter.
    Meter,
    /// 10³ m.
    Kilometer,
    /// 10⁶ m.
    Megameter,
    /// 10⁹ m.
    Gigameter,
    /// 10¹² m.
    Terameter,
    /// Minute.
    Minute,
    /// 60 minutes.
    Hour,
    /// 1440 minutes.
    Day,
}

impl ScaleSymbol {
    /// Returns a stable identifier for the symbol.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Byte => "byte",
            Self::Bytes => "bytes",
            Self::Kilobyte => "kilobyte",
            Self::Megabyte => "megabyte",
            Self::Gigabyte => "gigabyte",
            Self::Gram => "gram",
            Self::Kilogram => "kilogram",
            Self::Tonne => "tonne",
            Self::Gigagram => "gigagram",
            Self::Teragram => "teragram",
            Self::Meter => "meter",
            Self::Kilometer => "kilometer",
            Self::Megameter => "megameter",
            Self::Gigameter => "gigameter",
            Self::Terameter => "terameter",
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::Day => "day",
        }
    }

    /// Renders the symbol for the active locale.
    ///
    /// Byte and day symbols are localized; metric symbols are not.
    #[must_use]
    pub fn render<L: Localizer + ?Sized>(&self, localizer: &L) -> String {
        let byte_short = || localizer.message(keys::BYTE_SHORT);
        match self {
            Self::Byte => localizer.message(keys::BYTE).to_string(),
            Self::Bytes => localizer.message(keys::BYTES).to_string(),
            Self::Kilobyte => format!("k{}", byte_short()),
            Self::Megabyte => format!("M{}", byte_short()),
            Self::Gigabyte => format!("G{}", byte_short()),
            Self::Day => localizer.message(keys::DAY_SHORT).to_string(),
            Self::Gram => "g".into(),
            Self::Kilogram => "kg".into(),
            Self::Tonne => "t".into(),
            Self::Gigagram => "Gg".into(),
            Self::Teragram => "Tg".into(),
            Self::Meter => "m".into(),
            Self::Kilometer => "km".into(),
            Self::Megameter => "Mm".into(),
            Self::Gigameter => "Gm".into(),
            Self::Terameter => "Tm".into(),
            Self::Minute => "min".into(),
            Self::Hour => "h".into(),
        }
    }
}
