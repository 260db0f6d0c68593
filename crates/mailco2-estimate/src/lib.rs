//! Message size and CO2 equivalence estimation for mailco2.
//!
//! This crate turns the details of a message being composed into byte sizes,
//! an estimated CO2 mass and its physical equivalences:
//!
//! - [`compute_breakdown`] - Header, body and attachment sizes of a message
//! - [`compute_equivalences`] - CO2 mass and its oil, car, train, bulb and breathing equivalents
//! - [`Estimator`] - Applies both to a compose session with a given set of constants
//! - [`Estimate`] - Result of one estimation pass
//! - [`EstimateWarnings`] - Heavy-attachment and many-recipient warnings

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/mailco2/mailco2/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod estimator;
mod warnings;

pub use estimator::{Estimate, Estimator, compute_breakdown, compute_equivalences};
pub use warnings::{
    EstimateWarnings, RECIPIENT_WARNING_THRESHOLD, attachment_warning, recipient_warning,
};
