//! Localized unit formatting for mailco2.
//!
//! Values are scaled within a unit family by logarithmic bucket selection
//! and rendered with the decimal separator of the active locale:
//!
//! - [`UnitFamily`] - Bytes, grams, meters or minutes
//! - [`format_quantity`] - Selects the scale of a value
//! - [`Quantity`] - Structured result: scaled value, decimal places and symbol
//! - [`UnitFormatter`] - Plain-text rendering for a [`Localizer`](mailco2_locale::Localizer)
//! - [`bytes_html`] - HTML rendering of byte sizes with a tooltip

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/mailco2/mailco2/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod family;
mod formatter;
#[cfg(feature = "html")]
mod html;
mod quantity;

pub use family::{MINUTES_PER_DAY, ScaleSymbol, UnitFamily};
pub use formatter::UnitFormatter;
#[cfg(feature = "html")]
pub use html::bytes_html;
pub use quantity::{OVERFLOW_PLACEHOLDER, Quantity, format_quantity};
