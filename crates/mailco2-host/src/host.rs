//! Host-provided collaborators consumed by a compose session.

use std::path::PathBuf;

use async_trait::async_trait;
use mailco2_types::{Attachment, ComposeDetails, Overrides};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Address of the recommendations document on digital sobriety.
pub const RECOMMENDATIONS_URL: &str =
    "https://librairie.ademe.fr/ged/6555/guide-en-route-vers-sobriete-numerique-202209.pdf";

/// Address of the file-sharing service suggested for heavy attachments.
pub const FILE_SHARING_URL: &str = "https://alt.framasoft.org/fr/framadrop";

/// Host-assigned identifier of a compose session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Wraps a host identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a fresh random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SessionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Pages a session can open in a new tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    /// The preferences page editing the equivalence constants.
    Preferences,
    /// The external recommendations document.
    Recommendations,
}

/// Errors surfaced by host collaborators.
#[derive(Error, Debug)]
pub enum HostError {
    /// Failed to determine the application data directory.
    #[error("Failed to determine application data directory")]
    NoDataDir,

    /// The compose session does not exist.
    #[error("Compose session not found: {0}")]
    SessionNotFound(SessionId),

    /// Failed to read or write a file.
    #[error("I/O error on '{path}': {source}")]
    Io {
        /// The path involved.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse or serialize JSON.
    #[error("Invalid JSON in '{path}': {source}")]
    Json {
        /// The path involved.
        path: PathBuf,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// The host rejected the call.
    #[error("Host API unavailable: {0}")]
    Unavailable(String),
}

/// Result type for host calls.
pub type Result<T> = std::result::Result<T, HostError>;

/// Named numeric overrides of the equivalence constants.
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Reads every stored override.
    async fn read_overrides(&self) -> Result<Overrides>;

    /// Stores one override.
    async fn write_override(&self, key: &str, value: Value) -> Result<()>;

    /// Removes one override, or all of them when `key` is `None`.
    async fn clear_overrides(&self, key: Option<&str>) -> Result<()>;
}

/// Read and write access to the details of a compose session.
#[async_trait]
pub trait ComposeAccessor: Send + Sync {
    /// Reads the current details.
    async fn get_compose_details(&self, session: &SessionId) -> Result<ComposeDetails>;

    /// Replaces the details.
    async fn set_compose_details(&self, session: &SessionId, details: &ComposeDetails)
    -> Result<()>;
}

/// Lists the attachments of a compose session.
#[async_trait]
pub trait AttachmentLister: Send + Sync {
    /// Lists the attachments with their sizes.
    async fn list_attachments(&self, session: &SessionId) -> Result<Vec<Attachment>>;
}

/// Opens pages in a new tab.
#[async_trait]
pub trait TabOpener: Send + Sync {
    /// Opens `url` and focuses its window.
    async fn open(&self, page: Page, url: &str) -> Result<()>;
}

/// Every collaborator a compose session needs.
pub trait Host: ConfigStore + ComposeAccessor + AttachmentLister + TabOpener {}

impl<T: ConfigStore + ComposeAccessor + AttachmentLister + TabOpener> Host for T {}
