//! Message fixtures shared by the mailco2 benchmarks.

use mailco2_lib::{Attachment, ComposeDetails};

/// Shape of a benchmark message.
#[derive(Debug, Clone, Copy)]
pub struct MessageShape {
    /// Number of primary recipients.
    pub recipients: usize,
    /// Body length in bytes.
    pub body_bytes: usize,
    /// Number of attachments.
    pub attachments: usize,
    /// Size of each attachment.
    pub attachment_bytes: u64,
}

/// Shapes ranging from a short note to a heavy mailing.
pub const SHAPES: &[(&str, MessageShape)] = &[
    (
        "note",
        MessageShape {
            recipients: 1,
            body_bytes: 200,
            attachments: 0,
            attachment_bytes: 0,
        },
    ),
    (
        "report",
        MessageShape {
            recipients: 5,
            body_bytes: 4_000,
            attachments: 2,
            attachment_bytes: 1_500_000,
        },
    ),
    (
        "mailing",
        MessageShape {
            recipients: 500,
            body_bytes: 60_000,
            attachments: 10,
            attachment_bytes: 5_000_000,
        },
    ),
];

/// Builds the compose details and attachments for `shape`.
#[must_use]
pub fn message(shape: MessageShape, is_plain_text: bool) -> (ComposeDetails, Vec<Attachment>) {
    let to = (0..shape.recipients)
        .map(|i| format!("recipient{i}@example.org"))
        .collect();
    let body = "é".repeat(shape.body_bytes / 2);

    let mut details = ComposeDetails {
        to,
        subject: "Quarterly figures".to_string(),
        is_plain_text,
        ..Default::default()
    };
    details.set_active_body(body);

    let attachments = (0..shape.attachments)
        .map(|i| Attachment::new(format!("file{i}.pdf"), shape.attachment_bytes))
        .collect();

    (details, attachments)
}
