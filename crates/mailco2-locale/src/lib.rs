//! Embedded message catalogs for mailco2.
//!
//! - [`Localizer`] - Key to string lookup for the active UI locale
//! - [`Catalog`] - Messages and decimal separator of one locale
//! - [`Catalogs`] - Registry of the embedded `en` and `fr` catalogs
//! - [`keys`] - Message keys

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/mailco2/mailco2/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod catalog;
pub mod keys;

pub use catalog::{Catalog, Catalogs, DEFAULT_LOCALE, LocaleError, Localizer};
