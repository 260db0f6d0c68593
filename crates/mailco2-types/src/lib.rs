//! Core types for the mailco2 email footprint estimator.
//!
//! This crate provides the data structures shared by the other mailco2 crates:
//!
//! - [`EquivalenceConstants`] - Overridable conversion factors from bytes to CO2 and on to equivalences
//! - [`ConstantKey`] - Storage key of a single constant
//! - [`ComposeDetails`] - A message being composed, as exposed by the host
//! - [`Attachment`] - Attachment size record
//! - [`MessageSizeBreakdown`] - Byte sizes of a message split by part
//! - [`EquivalenceResult`] - Physical equivalences of an estimated CO2 mass

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/mailco2/mailco2/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod constants;
mod error;
mod message;

pub use constants::{
    BYTES_PER_MEGABYTE, ConstantKey, DEFAULT_HEADER_OVERHEAD_BYTES, EquivalenceConstants,
    Overrides, parse_override,
};
pub use error::{ConstantsError, Result};
pub use message::{Attachment, ComposeDetails, EquivalenceResult, MessageSizeBreakdown};
