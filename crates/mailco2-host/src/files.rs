//! File-backed host storing preferences and compose sessions as JSON.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use directories::ProjectDirs;
use mailco2_types::{Attachment, ComposeDetails, Overrides};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::fs;

use crate::host::{
    AttachmentLister, ComposeAccessor, ConfigStore, HostError, Page, Result, SessionId, TabOpener,
};

const PREFERENCES_FILE: &str = "preferences.json";
const SESSIONS_DIR: &str = "sessions";

/// Stored constant overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreferencesFile {
    /// Time of the last change.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// Overrides keyed by constant name.
    #[serde(default)]
    pub values: Overrides,
}

/// A stored compose session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionFile {
    /// Session identifier.
    pub id: SessionId,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Message being composed.
    #[serde(default)]
    pub details: ComposeDetails,
    /// Attached files.
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

/// Host keeping its state under a base directory.
///
/// Preferences live in `<base>/preferences.json` and compose sessions in
/// `<base>/sessions/<id>.json`.
#[derive(Debug, Clone)]
pub struct FileHost {
    base_path: PathBuf,
    sessions_path: PathBuf,
}

impl FileHost {
    /// Creates a host rooted at `base_path`, creating directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directories cannot be created.
    pub fn new(base_path: PathBuf) -> Result<Self> {
        let sessions_path = base_path.join(SESSIONS_DIR);
        std::fs::create_dir_all(&sessions_path).map_err(|source| HostError::Io {
            path: sessions_path.clone(),
            source,
        })?;
        Ok(Self {
            base_path,
            sessions_path,
        })
    }

    /// Returns the platform data directory for mailco2.
    ///
    /// Falls back to `~/.mailco2/` if it cannot be determined.
    #[must_use]
    pub fn default_path() -> PathBuf {
        ProjectDirs::from("", "", "mailco2")
            .map_or_else(home_fallback, |dirs| dirs.data_dir().to_path_buf())
    }

    /// Creates a host at the default path.
    ///
    /// # Errors
    ///
    /// Returns an error if the directories cannot be created.
    pub fn with_default_path() -> Result<Self> {
        Self::new(Self::default_path())
    }

    /// Returns the base directory.
    #[must_use]
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Returns the path of the preferences file.
    #[must_use]
    pub fn preferences_path(&self) -> PathBuf {
        self.base_path.join(PREFERENCES_FILE)
    }

    /// Returns the path of a session file.
    #[must_use]
    pub fn session_path(&self, session: &SessionId) -> PathBuf {
        self.sessions_path.join(format!("{session}.json"))
    }

    /// Loads the preferences, or empty ones if none were saved yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub async fn load_preferences(&self) -> Result<PreferencesFile> {
        let path = self.preferences_path();
        if !fs::try_exists(&path).await.unwrap_or(false) {
            return Ok(PreferencesFile::default());
        }
        read_json(&path).await
    }

    async fn update_preferences(&self, change: impl FnOnce(&mut Overrides) + Send) -> Result<()> {
        let mut preferences = self.load_preferences().await?;
        change(&mut preferences.values);
        preferences.updated_at = Some(Utc::now());
        write_json(&self.preferences_path(), &preferences).await
    }

    /// Stores a new compose session and returns its identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the session file cannot be written.
    pub async fn create_session(
        &self,
        details: ComposeDetails,
        attachments: Vec<Attachment>,
    ) -> Result<SessionId> {
        let session = SessionFile {
            id: SessionId::generate(),
            created_at: Utc::now(),
            details,
            attachments,
        };
        write_json(&self.session_path(&session.id), &session).await?;
        tracing::debug!(session = %session.id, "created compose session");
        Ok(session.id)
    }

    /// Loads a compose session.
    ///
    /// # Errors
    ///
    /// Returns an error if the session does not exist or cannot be parsed.
    pub async fn load_session(&self, session: &SessionId) -> Result<SessionFile> {
        let path = self.session_path(session);
        if !fs::try_exists(&path).await.unwrap_or(false) {
            return Err(HostError::SessionNotFound(session.clone()));
        }
        read_json(&path).await
    }

    /// Lists stored sessions, newest first.
    ///
    /// Unreadable files are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the sessions directory cannot be read.
    pub async fn list_sessions(&self) -> Result<Vec<SessionFile>> {
        let io_error = |source| HostError::Io {
            path: self.sessions_path.clone(),
            source,
        };
        let mut entries = fs::read_dir(&self.sessions_path).await.map_err(io_error)?;

        let mut sessions = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(io_error)? {
            let path = entry.path();
            if path.extension().is_none_or(|ext| ext != "json") {
                continue;
            }
            match read_json::<SessionFile>(&path).await {
                Ok(session) => sessions.push(session),
                Err(e) => tracing::warn!("skipping session file: {e}"),
            }
        }

        sessions.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(sessions)
    }

    /// Deletes a compose session.
    ///
    /// # Errors
    ///
    /// Returns an error if the session does not exist or cannot be removed.
    pub async fn delete_session(&self, session: &SessionId) -> Result<()> {
        let path = self.session_path(session);
        if !fs::try_exists(&path).await.unwrap_or(false) {
            return Err(HostError::SessionNotFound(session.clone()));
        }
        fs::remove_file(&path)
            .await
            .map_err(|source| HostError::Io { path, source })
    }
}

#[async_trait]
impl ConfigStore for FileHost {
    async fn read_overrides(&self) -> Result<Overrides> {
        Ok(self.load_preferences().await?.values)
    }

    async fn write_override(&self, key: &str, value: Value) -> Result<()> {
        self.update_preferences(|values| {
            values.insert(key.to_string(), value);
        })
        .await
    }

    async fn clear_overrides(&self, key: Option<&str>) -> Result<()> {
        self.update_preferences(|values| match key {
            Some(key) => {
                values.remove(key);
            }
            None => values.clear(),
        })
        .await
    }
}

#[async_trait]
impl ComposeAccessor for FileHost {
    async fn get_compose_details(&self, session: &SessionId) -> Result<ComposeDetails> {
        Ok(self.load_session(session).await?.details)
    }

    async fn set_compose_details(
        &self,
        session: &SessionId,
        details: &ComposeDetails,
    ) -> Result<()> {
        let mut stored = self.load_session(session).await?;
        stored.details = details.clone();
        write_json(&self.session_path(session), &stored).await
    }
}

#[async_trait]
impl AttachmentLister for FileHost {
    async fn list_attachments(&self, session: &SessionId) -> Result<Vec<Attachment>> {
        Ok(self.load_session(session).await?.attachments)
    }
}

/// A file host has no browser; opening a page logs its address.
#[async_trait]
impl TabOpener for FileHost {
    async fn open(&self, page: Page, url: &str) -> Result<()> {
        tracing::info!(?page, url, "open page");
        Ok(())
    }
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).await.map_err(|source| HostError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| HostError::Json {
        path: path.to_path_buf(),
        source,
    })
}

async fn write_json<T: Serialize + Sync>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(|source| HostError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).await.map_err(|source| HostError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn home_fallback() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".mailco2")
}
