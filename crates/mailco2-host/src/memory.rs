//! In-process host keeping everything in memory.

use std::collections::HashMap;

use async_trait::async_trait;
use mailco2_types::{Attachment, ComposeDetails, Overrides};
use serde_json::Value;
use tokio::sync::RwLock;

use crate::host::{
    AttachmentLister, ComposeAccessor, ConfigStore, HostError, Page, Result, SessionId, TabOpener,
};

#[derive(Debug, Default)]
struct MemoryState {
    overrides: Overrides,
    sessions: HashMap<SessionId, (ComposeDetails, Vec<Attachment>)>,
    opened: Vec<(Page, String)>,
    unavailable: Option<String>,
}

/// Host backed by in-memory maps.
///
/// Calls can be made to fail with [`MemoryHost::set_unavailable`].
#[derive(Debug, Default)]
pub struct MemoryHost {
    state: RwLock<MemoryState>,
}

impl MemoryHost {
    /// Creates an empty host.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a compose session.
    pub async fn insert_session(
        &self,
        session: SessionId,
        details: ComposeDetails,
        attachments: Vec<Attachment>,
    ) {
        self.state
            .write()
            .await
            .sessions
            .insert(session, (details, attachments));
    }

    /// Makes every subsequent call fail with `reason`, or succeed again
    /// with `None`.
    pub async fn set_unavailable(&self, reason: Option<&str>) {
        self.state.write().await.unavailable = reason.map(str::to_string);
    }

    /// Returns the pages opened so far.
    pub async fn opened(&self) -> Vec<(Page, String)> {
        self.state.read().await.opened.clone()
    }

    async fn check(&self) -> Result<()> {
        match &self.state.read().await.unavailable {
            Some(reason) => Err(HostError::Unavailable(reason.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ConfigStore for MemoryHost {
    async fn read_overrides(&self) -> Result<Overrides> {
        self.check().await?;
        Ok(self.state.read().await.overrides.clone())
    }

    async fn write_override(&self, key: &str, value: Value) -> Result<()> {
        self.check().await?;
        self.state
            .write()
            .await
            .overrides
            .insert(key.to_string(), value);
        Ok(())
    }

    async fn clear_overrides(&self, key: Option<&str>) -> Result<()> {
        self.check().await?;
        let mut state = self.state.write().await;
        match key {
            Some(key) => {
                state.overrides.remove(key);
            }
            None => state.overrides.clear(),
        }
        Ok(())
    }
}

#[async_trait]
impl ComposeAccessor for MemoryHost {
    async fn get_compose_details(&self, session: &SessionId) -> Result<ComposeDetails> {
        self.check().await?;
        self.state
            .read()
            .await
            .sessions
            .get(session)
            .map(|(details, _)| details.clone())
            .ok_or_else(|| HostError::SessionNotFound(session.clone()))
    }

    async fn set_compose_details(
        &self,
        session: &SessionId,
        details: &ComposeDetails,
    ) -> Result<()> {
        self.check().await?;
        let mut state = self.state.write().await;
        let entry = state
            .sessions
            .get_mut(session)
            .ok_or_else(|| HostError::SessionNotFound(session.clone()))?;
        entry.0 = details.clone();
        Ok(())
    }
}

#[async_trait]
impl AttachmentLister for MemoryHost {
    async fn list_attachments(&self, session: &SessionId) -> Result<Vec<Attachment>> {
        self.check().await?;
        self.state
            .read()
            .await
            .sessions
            .get(session)
            .map(|(_, attachments)| attachments.clone())
            .ok_or_else(|| HostError::SessionNotFound(session.clone()))
    }
}

#[async_trait]
impl TabOpener for MemoryHost {
    async fn open(&self, page: Page, url: &str) -> Result<()> {
        self.check().await?;
        self.state.write().await.opened.push((page, url.to_string()));
        Ok(())
    }
}
