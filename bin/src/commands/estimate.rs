//! Estimate command implementation.

use crate::commands::Context;
use crate::commands::message::MessageArgs;
use crate::display::render_estimate;
use anyhow::{Context as _, Result};
use mailco2_lib::prelude::*;
use mailco2_lib::ConfigStore;

/// Estimate a stored session, or the message described by `message`.
pub(crate) async fn estimate(
    ctx: &Context,
    session: Option<&str>,
    message: MessageArgs,
    html: bool,
) -> Result<()> {
    let estimate = match session {
        Some(id) => {
            let mut session = ctx.session(id);
            session
                .calculate()
                .await
                .with_context(|| format!("Failed to estimate session {id}"))?
                .clone()
        }
        None => {
            let (details, attachments) = message.into_message()?;
            let overrides = ctx.host.read_overrides().await?;
            let estimator = Estimator::with_constants(EquivalenceConstants::from_overrides(&overrides));
            estimator.estimate(&details, &attachments)
        }
    };

    print!("{}", render_estimate(&estimate, ctx.catalog, html));
    Ok(())
}
