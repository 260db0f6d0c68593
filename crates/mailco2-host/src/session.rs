//! Compose session flow: estimate, inject and strip the signature, open pages.

use mailco2_estimate::{Estimate, Estimator};
use mailco2_locale::Localizer;
use mailco2_signature::{append_signature, remove_signature};
use mailco2_types::{DEFAULT_HEADER_OVERHEAD_BYTES, EquivalenceConstants};
use thiserror::Error;

use crate::host::{Host, HostError, Page, RECOMMENDATIONS_URL, SessionId};

/// Relative address of the preferences page.
pub const PREFERENCES_URL: &str = "preferences/preferences.html";

/// Errors raised by a compose session.
#[derive(Error, Debug)]
pub enum SessionError {
    /// A host call failed.
    #[error(transparent)]
    Host(#[from] HostError),

    /// The signature was requested before any estimate was computed.
    #[error("No estimate computed yet for session {0}")]
    NoEstimate(SessionId),
}

/// Result type for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;

/// One open compose window.
///
/// Keeps the last successful [`Estimate`] so that the signature reuses
/// the figures the user was shown.
#[derive(Debug)]
pub struct ComposeSession<'a, H: Host + ?Sized, L: Localizer + ?Sized> {
    host: &'a H,
    localizer: &'a L,
    id: SessionId,
    header_overhead_bytes: u64,
    preferences_url: String,
    latest: Option<Estimate>,
}

impl<'a, H: Host + ?Sized, L: Localizer + ?Sized> ComposeSession<'a, H, L> {
    /// Opens a session on `host` for the compose window `id`.
    #[must_use]
    pub fn new(host: &'a H, localizer: &'a L, id: SessionId) -> Self {
        Self {
            host,
            localizer,
            id,
            header_overhead_bytes: DEFAULT_HEADER_OVERHEAD_BYTES,
            preferences_url: PREFERENCES_URL.to_string(),
            latest: None,
        }
    }

    /// Sets the address opened by [`ComposeSession::open_preferences`].
    #[must_use]
    pub fn with_preferences_url(mut self, url: impl Into<String>) -> Self {
        self.preferences_url = url.into();
        self
    }

    /// Sets the fixed header overhead.
    #[must_use]
    pub const fn with_header_overhead(mut self, bytes: u64) -> Self {
        self.header_overhead_bytes = bytes;
        self
    }

    /// Returns the session identifier.
    #[must_use]
    pub const fn id(&self) -> &SessionId {
        &self.id
    }

    /// Returns the last successful estimate.
    #[must_use]
    pub const fn latest(&self) -> Option<&Estimate> {
        self.latest.as_ref()
    }

    /// Reads the configuration, message and attachments, then estimates.
    ///
    /// On failure the previous estimate is kept.
    ///
    /// # Errors
    ///
    /// Returns an error if any host call fails.
    pub async fn calculate(&mut self) -> Result<&Estimate> {
        match self.run_estimate().await {
            Ok(estimate) => {
                tracing::debug!(
                    session = %self.id,
                    total_bytes = estimate.breakdown.total_bytes,
                    co2_grams = estimate.equivalences.co2_grams,
                    "estimate updated"
                );
                Ok(&*self.latest.insert(estimate))
            }
            Err(e) => {
                tracing::error!(session = %self.id, "estimate failed: {e}");
                Err(e)
            }
        }
    }

    async fn run_estimate(&self) -> Result<Estimate> {
        let overrides = self.host.read_overrides().await?;
        let constants = EquivalenceConstants::from_overrides(&overrides);
        let details = self.host.get_compose_details(&self.id).await?;
        let attachments = self.host.list_attachments(&self.id).await?;

        let estimator = Estimator::new(self.header_overhead_bytes, constants);
        Ok(estimator.estimate(&details, &attachments))
    }

    /// Appends the signature built from the last estimate to the message.
    ///
    /// # Errors
    ///
    /// Returns an error if nothing was estimated yet or a host call fails.
    pub async fn add_equivalences(&self) -> Result<()> {
        let estimate = self
            .latest
            .as_ref()
            .ok_or_else(|| SessionError::NoEstimate(self.id.clone()))?;

        let mut details = self.host.get_compose_details(&self.id).await?;
        append_signature(&mut details, estimate, self.localizer);
        self.host.set_compose_details(&self.id, &details).await?;
        tracing::info!(session = %self.id, "signature added");
        Ok(())
    }

    /// Removes the last signature block from the message.
    ///
    /// Returns true if a block was found. The message is left untouched
    /// otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if a host call fails.
    pub async fn remove_equivalences(&self) -> Result<bool> {
        let mut details = self.host.get_compose_details(&self.id).await?;
        if !remove_signature(&mut details, self.localizer) {
            return Ok(false);
        }
        self.host.set_compose_details(&self.id, &details).await?;
        tracing::info!(session = %self.id, "signature removed");
        Ok(true)
    }

    /// Opens the preferences page.
    ///
    /// # Errors
    ///
    /// Returns an error if the host cannot open the page.
    pub async fn open_preferences(&self) -> Result<()> {
        self.host
            .open(Page::Preferences, &self.preferences_url)
            .await?;
        Ok(())
    }

    /// Opens the recommendations document.
    ///
    /// # Errors
    ///
    /// Returns an error if the host cannot open the page.
    pub async fn open_recommendations(&self) -> Result<()> {
        self.host
            .open(Page::Recommendations, RECOMMENDATIONS_URL)
            .await?;
        Ok(())
    }
}
