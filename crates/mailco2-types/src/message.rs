//! Compose-session data and the quantities derived from it.

use serde::{Deserialize, Serialize};

use crate::constants::BYTES_PER_MEGABYTE;

/// Details of a message being composed, as exposed by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComposeDetails {
    /// Primary recipients.
    pub to: Vec<String>,
    /// Carbon-copy recipients.
    pub cc: Vec<String>,
    /// Blind carbon-copy recipients.
    pub bcc: Vec<String>,
    /// Message subject.
    pub subject: String,
    /// HTML body.
    pub body: String,
    /// Plain-text body.
    pub plain_text_body: String,
    /// Whether the plain-text body is the active representation.
    pub is_plain_text: bool,
}

impl ComposeDetails {
    /// Returns the body in its active representation.
    #[must_use]
    pub fn active_body(&self) -> &str {
        if self.is_plain_text {
            &self.plain_text_body
        } else {
            &self.body
        }
    }

    /// Replaces the body in its active representation.
    pub fn set_active_body(&mut self, body: String) {
        if self.is_plain_text {
            self.plain_text_body = body;
        } else {
            self.body = body;
        }
    }

    /// Returns the number of recipients across to, cc and bcc.
    #[must_use]
    pub fn recipient_count(&self) -> usize {
        self.to.len() + self.cc.len() + self.bcc.len()
    }
}

/// An attachment of a compose session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// File name, when the host knows it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Size in bytes.
    pub size: u64,
}

impl Attachment {
    /// Creates an attachment record.
    #[must_use]
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: Some(name.into()),
            size,
        }
    }
}

/// Byte sizes of a message, split by part.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageSizeBreakdown {
    /// Header overhead plus addresses and subject.
    pub header_bytes: u64,
    /// Active body.
    pub body_bytes: u64,
    /// Sum of attachment sizes.
    pub attachments_bytes: u64,
    /// Sum of the three parts above.
    pub total_bytes: u64,
    /// Number of to + cc + bcc recipients.
    pub recipient_count: usize,
}

impl MessageSizeBreakdown {
    /// Creates a breakdown, deriving the total from its parts.
    #[must_use]
    pub const fn new(
        header_bytes: u64,
        body_bytes: u64,
        attachments_bytes: u64,
        recipient_count: usize,
    ) -> Self {
        Self {
            header_bytes,
            body_bytes,
            attachments_bytes,
            total_bytes: header_bytes + body_bytes + attachments_bytes,
            recipient_count,
        }
    }

    /// Returns the total size in megabytes.
    #[must_use]
    pub fn total_megabytes(&self) -> f64 {
        self.total_bytes as f64 / BYTES_PER_MEGABYTE as f64
    }

    /// Returns the attachment size in megabytes.
    #[must_use]
    pub fn attachments_megabytes(&self) -> f64 {
        self.attachments_bytes as f64 / BYTES_PER_MEGABYTE as f64
    }

    /// Returns true while no recipient has been entered yet.
    #[must_use]
    pub const fn has_no_recipient(&self) -> bool {
        self.recipient_count == 0
    }
}

/// Physical equivalences of an estimated CO2 mass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EquivalenceResult {
    /// Grams of CO2e.
    pub co2_grams: f64,
    /// Grams of oil burnt.
    pub oil_grams: f64,
    /// Meters driven by car.
    pub car_meters: f64,
    /// Meters travelled by high-speed train.
    pub train_meters: f64,
    /// Minutes of the reference bulb.
    pub bulb_minutes: f64,
    /// Minutes of breathing.
    pub breathing_minutes: f64,
}

impl EquivalenceResult {
    /// Returns the values in display order.
    #[must_use]
    pub const fn values(&self) -> [f64; 6] {
        [
            self.co2_grams,
            self.oil_grams,
            self.car_meters,
            self.train_meters,
            self.bulb_minutes,
            self.breathing_minutes,
        ]
    }

    /// Returns true if no value overflowed to infinity or NaN.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.values().iter().all(|v| v.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakdown_total() {
        let b = MessageSizeBreakdown::new(809, 5, 0, 1);
        assert_eq!(b.total_bytes, 814);
        assert!(!b.has_no_recipient());
    }

    #[test]
    fn test_active_body() {
        let mut details = ComposeDetails {
            body: "<p>hi</p>".into(),
            plain_text_body: "hi".into(),
            ..Default::default()
        };
        assert_eq!(details.active_body(), "<p>hi</p>");
        details.is_plain_text = true;
        assert_eq!(details.active_body(), "hi");
        details.set_active_body("bye".into());
        assert_eq!(details.plain_text_body, "bye");
        assert_eq!(details.body, "<p>hi</p>");
    }

    #[test]
    fn test_compose_details_host_json() {
        let details: ComposeDetails = serde_json::from_str(
            r#"{"to":["a@x.com"],"subject":"Hi","plainTextBody":"hello","isPlainText":true}"#,
        )
        .unwrap();
        assert_eq!(details.recipient_count(), 1);
        assert_eq!(details.active_body(), "hello");
        assert!(details.cc.is_empty());
    }

    #[test]
    fn test_equivalences_finite() {
        let mut r = EquivalenceResult::default();
        assert!(r.is_finite());
        r.oil_grams = f64::INFINITY;
        assert!(!r.is_finite());
    }
}
