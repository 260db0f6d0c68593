//! Warning predicates surfaced next to an estimate.

use mailco2_types::{BYTES_PER_MEGABYTE, MessageSizeBreakdown};
use serde::{Deserialize, Serialize};

/// Recipient count from which the recipient warning is raised.
pub const RECIPIENT_WARNING_THRESHOLD: usize = 10;

/// Returns true when the attachments, multiplied by the number of copies
/// sent, reach one megabyte.
///
/// With no recipient yet a single copy is assumed.
#[must_use]
pub fn attachment_warning(breakdown: &MessageSizeBreakdown) -> bool {
    let copies = breakdown.recipient_count.max(1) as f64;
    breakdown.attachments_bytes as f64 * copies / BYTES_PER_MEGABYTE as f64 >= 1.0
}

/// Returns true when the message goes to many recipients.
#[must_use]
pub const fn recipient_warning(breakdown: &MessageSizeBreakdown) -> bool {
    breakdown.recipient_count >= RECIPIENT_WARNING_THRESHOLD
}

/// Warnings raised for an estimate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EstimateWarnings {
    /// Attachments weigh a megabyte or more once multiplied by recipients.
    pub attachment: bool,
    /// Ten recipients or more.
    pub recipients: bool,
}

impl EstimateWarnings {
    /// Evaluates every warning predicate.
    #[must_use]
    pub fn evaluate(breakdown: &MessageSizeBreakdown) -> Self {
        Self {
            attachment: attachment_warning(breakdown),
            recipients: recipient_warning(breakdown),
        }
    }

    /// Returns true if any warning is raised.
    #[must_use]
    pub const fn any(&self) -> bool {
        self.attachment || self.recipients
    }
}
