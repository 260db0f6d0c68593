//! Open command implementation.

use crate::commands::Context;
use anyhow::Result;
use mailco2_lib::{Page, RECOMMENDATIONS_URL, TabOpener};

/// Point the user at the preferences file.
pub(crate) async fn open_preferences(ctx: &Context) -> Result<()> {
    let path = ctx.host.preferences_path();
    ctx.host
        .open(Page::Preferences, &format!("file://{}", path.display()))
        .await?;
    println!("{}", path.display());
    Ok(())
}

/// Point the user at the recommendations document.
pub(crate) async fn open_recommendations(ctx: &Context) -> Result<()> {
    ctx.host
        .open(Page::Recommendations, RECOMMENDATIONS_URL)
        .await?;
    println!("{RECOMMENDATIONS_URL}");
    Ok(())
}
