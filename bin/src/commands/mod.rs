//! CLI command implementations.

pub(crate) mod config;
pub(crate) mod estimate;
pub(crate) mod message;
pub(crate) mod open;
pub(crate) mod session;
pub(crate) mod sign;

use anyhow::{Context as _, Result};
use mailco2_lib::{Catalog, Catalogs, ComposeSession, FileHost, SessionId};
use std::path::PathBuf;

/// State shared by every command.
#[derive(Debug)]
pub(crate) struct Context {
    pub(crate) host: FileHost,
    pub(crate) catalog: &'static Catalog,
}

impl Context {
    pub(crate) fn new(data_dir: Option<PathBuf>, locale: &str) -> Result<Self> {
        let path = data_dir.unwrap_or_else(FileHost::default_path);
        let host = FileHost::new(path.clone())
            .with_context(|| format!("Failed to open data directory {}", path.display()))?;
        Ok(Self {
            host,
            catalog: Catalogs::global().resolve(locale),
        })
    }

    /// Opens a compose session on the stored session `id`.
    pub(crate) fn session(&self, id: &str) -> ComposeSession<'_, FileHost, Catalog> {
        let preferences = format!("file://{}", self.host.preferences_path().display());
        ComposeSession::new(&self.host, self.catalog, SessionId::from(id))
            .with_preferences_url(preferences)
    }
}
