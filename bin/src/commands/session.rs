//! Compose session management commands.

use crate::commands::Context;
use crate::commands::message::MessageArgs;
use anyhow::{Context as _, Result};
use mailco2_lib::SessionId;
use mailco2_lib::prelude::*;

/// Store a new session and print its ID.
pub(crate) async fn new_session(ctx: &Context, message: MessageArgs) -> Result<()> {
    let (details, attachments) = message.into_message()?;
    let id = ctx.host.create_session(details, attachments).await?;
    println!("{id}");
    Ok(())
}

/// Show the message and attachments of a session.
pub(crate) async fn show_session(ctx: &Context, id: &str) -> Result<()> {
    let session = ctx
        .host
        .load_session(&SessionId::from(id))
        .await
        .context("Session not found")?;
    let formatter = UnitFormatter::new(ctx.catalog);
    let details = &session.details;

    println!("Session:    {}", session.id);
    println!("Created:    {}", session.created_at.format("%Y-%m-%d %H:%M:%S"));
    println!("To:         {}", details.to.join(", "));
    if !details.cc.is_empty() {
        println!("Cc:         {}", details.cc.join(", "));
    }
    if !details.bcc.is_empty() {
        println!("Bcc:        {}", details.bcc.join(", "));
    }
    println!("Subject:    {}", details.subject);
    println!(
        "Format:     {}",
        if details.is_plain_text { "plain text" } else { "HTML" }
    );

    if !session.attachments.is_empty() {
        println!("\nAttachments:");
        for attachment in &session.attachments {
            println!(
                "  {:<40} {:>14}",
                attachment.name.as_deref().unwrap_or("(unnamed)"),
                formatter.bytes(attachment.size)
            );
        }
    }

    println!("\n{}", details.active_body());
    Ok(())
}

/// List stored sessions, newest first.
pub(crate) async fn list_sessions(ctx: &Context) -> Result<()> {
    let sessions = ctx.host.list_sessions().await?;
    if sessions.is_empty() {
        println!("No sessions.");
        return Ok(());
    }

    println!("{:<38} {:<20} {:>6} SUBJECT", "ID", "CREATED", "RCPT");
    println!("{}", "-".repeat(80));
    for session in sessions {
        println!(
            "{:<38} {:<20} {:>6} {}",
            session.id,
            session.created_at.format("%Y-%m-%d %H:%M:%S"),
            session.details.recipient_count(),
            session.details.subject
        );
    }
    Ok(())
}

/// Delete a session.
pub(crate) async fn delete_session(ctx: &Context, id: &str) -> Result<()> {
    ctx.host
        .delete_session(&SessionId::from(id))
        .await
        .context("Failed to delete session")?;
    println!("Session {id} deleted.");
    Ok(())
}
