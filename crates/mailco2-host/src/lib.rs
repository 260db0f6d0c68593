//! Host integration for the mailco2 estimator.
//!
//! This crate connects the estimator to the application hosting a compose
//! window:
//!
//! - [`ConfigStore`], [`ComposeAccessor`], [`AttachmentLister`] and
//!   [`TabOpener`] - Collaborators the host provides
//! - [`MemoryHost`] - In-memory host
//! - [`FileHost`] - Host persisting preferences and sessions as JSON files
//! - [`ComposeSession`] - Estimate, signature and page flow of one window

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/mailco2/mailco2/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod files;
mod host;
mod memory;
mod session;

pub use files::{FileHost, PreferencesFile, SessionFile};
pub use host::{
    AttachmentLister, ComposeAccessor, ConfigStore, FILE_SHARING_URL, Host, HostError, Page,
    RECOMMENDATIONS_URL, SessionId, TabOpener,
};
pub use memory::MemoryHost;
pub use session::{ComposeSession, PREFERENCES_URL, SessionError};
