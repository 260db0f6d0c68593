//! Signature commands.

use crate::commands::Context;
use anyhow::{Context as _, Result};

/// Estimate a session and append the equivalences signature to its body.
pub(crate) async fn sign(ctx: &Context, id: &str) -> Result<()> {
    let mut session = ctx.session(id);
    session
        .calculate()
        .await
        .with_context(|| format!("Failed to estimate session {id}"))?;
    session.add_equivalences().await?;
    println!("Signature added to session {id}.");
    Ok(())
}

/// Remove the equivalences signature from a session's body.
pub(crate) async fn unsign(ctx: &Context, id: &str) -> Result<()> {
    if ctx.session(id).remove_equivalences().await? {
        println!("Signature removed from session {id}.");
    } else {
        println!("No signature found in session {id}.");
    }
    Ok(())
}
