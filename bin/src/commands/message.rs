//! Message arguments shared by `estimate` and `session new`.

use anyhow::{Context, Result};
use clap::Args;
use mailco2_lib::{Attachment, ComposeDetails};
use std::path::{Path, PathBuf};

/// A message described on the command line.
#[derive(Args, Debug, Default)]
pub(crate) struct MessageArgs {
    /// Primary recipients (repeat or separate with commas)
    #[arg(long, value_delimiter = ',')]
    to: Vec<String>,

    /// Copy recipients
    #[arg(long, value_delimiter = ',')]
    cc: Vec<String>,

    /// Blind copy recipients
    #[arg(long, value_delimiter = ',')]
    bcc: Vec<String>,

    /// Subject line
    #[arg(short, long)]
    subject: Option<String>,

    /// Message body
    #[arg(short, long, conflicts_with = "body_file")]
    body: Option<String>,

    /// Read the message body from a file
    #[arg(long)]
    body_file: Option<PathBuf>,

    /// Treat the body as plain text instead of HTML
    #[arg(long)]
    plain_text: bool,

    /// Attach a file (repeatable)
    #[arg(short, long)]
    attach: Vec<PathBuf>,
}

impl MessageArgs {
    /// Builds the compose details and attachments, reading files as needed.
    pub(crate) fn into_message(self) -> Result<(ComposeDetails, Vec<Attachment>)> {
        let body = match (self.body, &self.body_file) {
            (Some(body), _) => body,
            (None, Some(path)) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read body file {}", path.display()))?,
            (None, None) => String::new(),
        };

        let mut details = ComposeDetails {
            to: self.to,
            cc: self.cc,
            bcc: self.bcc,
            subject: self.subject.unwrap_or_default(),
            is_plain_text: self.plain_text,
            ..Default::default()
        };
        details.set_active_body(body);

        let attachments = self
            .attach
            .iter()
            .map(|path| attachment(path))
            .collect::<Result<Vec<_>>>()?;

        Ok((details, attachments))
    }
}

fn attachment(path: &Path) -> Result<Attachment> {
    let metadata = std::fs::metadata(path)
        .with_context(|| format!("Failed to read attachment {}", path.display()))?;
    let name = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
    Ok(Attachment::new(name, metadata.len()))
}
