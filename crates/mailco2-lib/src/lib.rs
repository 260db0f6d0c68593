//! Email carbon footprint estimation.
//!
//! This is a facade crate that re-exports functionality from the mailco2
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```
//! use mailco2_lib::prelude::*;
//!
//! let details = ComposeDetails {
//!     to: vec!["a@b.c".to_string()],
//!     subject: "Hi".to_string(),
//!     body: "Hello".to_string(),
//!     ..Default::default()
//! };
//!
//! let estimate = Estimator::global().estimate(&details, &[]);
//! assert_eq!(estimate.breakdown.total_bytes, 812);
//!
//! let catalog = Catalogs::global().resolve("fr");
//! let formatter = UnitFormatter::new(catalog);
//! assert_eq!(formatter.bytes(estimate.breakdown.total_bytes), "812,00 octets");
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/mailco2/mailco2/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use mailco2_types::*;

// Re-export the estimator
pub use mailco2_estimate::{
    Estimate, EstimateWarnings, Estimator, RECIPIENT_WARNING_THRESHOLD, attachment_warning,
    compute_breakdown, compute_equivalences, recipient_warning,
};

// Re-export unit formatting
pub use mailco2_format::{
    MINUTES_PER_DAY, OVERFLOW_PLACEHOLDER, Quantity, ScaleSymbol, UnitFamily, UnitFormatter,
    format_quantity,
};

#[cfg(feature = "html")]
pub use mailco2_format::bytes_html;

// Re-export message catalogs
pub use mailco2_locale::{Catalog, Catalogs, DEFAULT_LOCALE, LocaleError, Localizer, keys};

// Re-export the signature block
pub use mailco2_signature::{
    SignatureError, SignatureMarkers, SignatureMode, append_signature, build_signature_text,
    interpolate, remove_signature, signature_for, strip_signature_text,
};

// Re-export host integration
#[cfg(feature = "host")]
pub use mailco2_host::{
    AttachmentLister, ComposeAccessor, ComposeSession, ConfigStore, FILE_SHARING_URL, FileHost,
    Host, HostError, MemoryHost, PREFERENCES_URL, Page, PreferencesFile, RECOMMENDATIONS_URL,
    SessionError, SessionFile, SessionId, TabOpener,
};

/// Prelude module for convenient imports.
///
/// ```
/// use mailco2_lib::prelude::*;
/// ```
pub mod prelude {
    pub use mailco2_types::{
        Attachment, ComposeDetails, ConstantKey, EquivalenceConstants, EquivalenceResult,
        MessageSizeBreakdown,
    };

    pub use mailco2_estimate::{Estimate, EstimateWarnings, Estimator};

    pub use mailco2_format::{UnitFamily, UnitFormatter};

    pub use mailco2_locale::{Catalog, Catalogs, Localizer};

    pub use mailco2_signature::{SignatureMode, append_signature, remove_signature};

    #[cfg(feature = "host")]
    pub use mailco2_host::{ComposeSession, FileHost, MemoryHost, SessionId};
}
