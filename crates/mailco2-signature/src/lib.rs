//! Signature block injection and removal for mailco2.
//!
//! The signature block reports the estimated footprint of a message at the
//! end of its body. It is built from the localized `composeSignature`
//! template and removed again by locating the literal text that opens and
//! closes it:
//!
//! - [`build_signature_text`] / [`signature_for`] - Render the block
//! - [`strip_signature_text`] - Remove a previously inserted block
//! - [`SignatureMarkers`] - The fragments used to locate the block
//! - [`interpolate`] - Positional `{n}` template interpolation

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/mailco2/mailco2/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod signature;
mod template;

pub use signature::{
    SignatureError, SignatureMarkers, SignatureMode, append_signature, build_signature_text,
    remove_signature, signature_for, strip_signature_text,
};
pub use template::{Segment, interpolate, literal_after, literal_before, parse};
