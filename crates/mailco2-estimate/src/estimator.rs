//! Message size and CO2 equivalence estimation.

use std::sync::OnceLock;

use mailco2_types::{
    Attachment, BYTES_PER_MEGABYTE, ComposeDetails, DEFAULT_HEADER_OVERHEAD_BYTES,
    EquivalenceConstants, EquivalenceResult, MessageSizeBreakdown,
};
use serde::{Deserialize, Serialize};

use crate::warnings::EstimateWarnings;

/// Static estimator instance.
static ESTIMATOR: OnceLock<Estimator> = OnceLock::new();

/// Computes the byte size breakdown of a message.
///
/// The header size is the fixed overhead plus the UTF-8 length of the `to`
/// and `cc` addresses (each list joined with `,`) and the subject. Bcc
/// addresses count as recipients but are not part of the header.
#[must_use]
pub fn compute_breakdown<S: AsRef<str>>(
    to: &[S],
    cc: &[S],
    bcc: &[S],
    subject: &str,
    body_text: &str,
    attachment_sizes: &[u64],
    header_overhead_bytes: u64,
) -> MessageSizeBreakdown {
    let recipient_count = to.len() + cc.len() + bcc.len();
    let addresses = joined_len(to) + joined_len(cc);
    let header_bytes = header_overhead_bytes + (addresses + subject.len()) as u64;
    let body_bytes = body_text.len() as u64;
    let attachments_bytes = attachment_sizes.iter().sum();

    MessageSizeBreakdown::new(header_bytes, body_bytes, attachments_bytes, recipient_count)
}

/// Byte length of the items joined with `,`.
fn joined_len<S: AsRef<str>>(items: &[S]) -> usize {
    let content: usize = items.iter().map(|s| s.as_ref().len()).sum();
    content + items.len().saturating_sub(1)
}

/// Converts a breakdown into CO2 and its physical equivalences.
///
/// With no recipient yet, the message is costed as if sent to exactly one.
#[must_use]
pub fn compute_equivalences(
    breakdown: &MessageSizeBreakdown,
    constants: &EquivalenceConstants,
) -> EquivalenceResult {
    let effective_recipients = breakdown.recipient_count.max(1) as f64;
    let per_megabyte = effective_recipients.mul_add(
        constants.co2_per_recipient_megabyte,
        constants.co2_per_megabyte,
    );
    let co2_grams = breakdown.total_bytes as f64 * per_megabyte / BYTES_PER_MEGABYTE as f64;

    EquivalenceResult {
        co2_grams,
        oil_grams: co2_grams / constants.co2_per_gram_oil,
        car_meters: co2_grams / constants.co2_per_meter_car,
        train_meters: co2_grams / constants.co2_per_meter_train,
        bulb_minutes: co2_grams / constants.co2_per_bulb_minute(),
        breathing_minutes: co2_grams / constants.co2_per_minute_breathing,
    }
}

/// Result of one estimation pass over a compose session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    /// Byte sizes of the message.
    pub breakdown: MessageSizeBreakdown,
    /// CO2 and equivalences.
    pub equivalences: EquivalenceResult,
    /// Warnings to surface next to the figures.
    pub warnings: EstimateWarnings,
    /// Constants the equivalences were computed with.
    pub constants: EquivalenceConstants,
}

impl Estimate {
    /// Creates an estimate from an already computed breakdown.
    #[must_use]
    pub fn from_breakdown(breakdown: MessageSizeBreakdown, constants: EquivalenceConstants) -> Self {
        Self {
            equivalences: compute_equivalences(&breakdown, &constants),
            warnings: EstimateWarnings::evaluate(&breakdown),
            breakdown,
            constants,
        }
    }

    /// Returns true while the figures assume a single placeholder recipient.
    #[must_use]
    pub const fn is_provisional(&self) -> bool {
        self.breakdown.has_no_recipient()
    }

    /// Recipient count as it should be reported (never below one).
    #[must_use]
    pub fn reported_recipients(&self) -> usize {
        self.breakdown.recipient_count.max(1)
    }
}

/// Estimator holding the header overhead and the equivalence constants.
#[derive(Debug, Clone, PartialEq)]
pub struct Estimator {
    header_overhead_bytes: u64,
    constants: EquivalenceConstants,
}

impl Estimator {
    /// Creates a new estimator.
    #[must_use]
    pub const fn new(header_overhead_bytes: u64, constants: EquivalenceConstants) -> Self {
        Self {
            header_overhead_bytes,
            constants,
        }
    }

    /// Creates an estimator with the default header overhead.
    #[must_use]
    pub const fn with_constants(constants: EquivalenceConstants) -> Self {
        Self::new(DEFAULT_HEADER_OVERHEAD_BYTES, constants)
    }

    /// Returns the global estimator instance with default settings.
    #[must_use]
    pub fn global() -> &'static Self {
        ESTIMATOR.get_or_init(Self::default)
    }

    /// Returns the header overhead in bytes.
    #[must_use]
    pub const fn header_overhead_bytes(&self) -> u64 {
        self.header_overhead_bytes
    }

    /// Returns the equivalence constants.
    #[must_use]
    pub const fn constants(&self) -> &EquivalenceConstants {
        &self.constants
    }

    /// Estimates a compose session from its details and attachments.
    #[must_use]
    pub fn estimate(&self, details: &ComposeDetails, attachments: &[Attachment]) -> Estimate {
        let sizes: Vec<u64> = attachments.iter().map(|a| a.size).collect();
        let breakdown = compute_breakdown(
            &details.to,
            &details.cc,
            &details.bcc,
            &details.subject,
            details.active_body(),
            &sizes,
            self.header_overhead_bytes,
        );
        Estimate::from_breakdown(breakdown, self.constants)
    }
}

impl Default for Estimator {
    fn default() -> Self {
        Self::with_constants(EquivalenceConstants::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use mailco2_types::ConstantKey;

    const NONE: &[&str] = &[];

    #[test]
    fn test_breakdown_single_recipient() {
        let b = compute_breakdown(&["a@x.com"], NONE, NONE, "Hi", "hello", &[], 800);

        assert_eq!(b.header_bytes, 809);
        assert_eq!(b.body_bytes, 5);
        assert_eq!(b.attachments_bytes, 0);
        assert_eq!(b.total_bytes, 814);
        assert_eq!(b.recipient_count, 1);
    }

    #[test]
    fn test_breakdown_joins_addresses_and_ignores_bcc_bytes() {
        let b = compute_breakdown(
            &["a@x.com", "b@x.com"],
            &["c@x.com"],
            &["secret@x.com"],
            "",
            "",
            &[100, 250],
            800,
        );

        // "a@x.com,b@x.com" + "c@x.com"
        assert_eq!(b.header_bytes, 800 + 15 + 7);
        assert_eq!(b.attachments_bytes, 350);
        assert_eq!(b.recipient_count, 4);
    }

    #[test]
    fn test_breakdown_counts_utf8_bytes() {
        let b = compute_breakdown(NONE, NONE, NONE, "é", "€", &[], 0);
        assert_eq!(b.header_bytes, 2);
        assert_eq!(b.body_bytes, 3);
    }

    #[test]
    fn test_equivalences_single_recipient() {
        let b = MessageSizeBreakdown::new(809, 5, 0, 1);
        let c = EquivalenceConstants::default();
        let r = compute_equivalences(&b, &c);

        assert_relative_eq!(r.co2_grams, 814.0 * 19.0 / 1_048_576.0);
        assert_relative_eq!(r.co2_grams, 0.01475, epsilon = 1e-5);
        assert_relative_eq!(r.oil_grams, r.co2_grams / 3.34);
        assert_relative_eq!(r.car_meters, r.co2_grams / 0.1901);
        assert_relative_eq!(r.train_meters, r.co2_grams / 0.0023);
        assert_relative_eq!(
            r.bulb_minutes,
            r.co2_grams / (40.0 * 0.052 / 60.0),
            max_relative = 1e-12
        );
        assert_relative_eq!(r.breathing_minutes, r.co2_grams / 1.131);
    }

    #[test]
    fn test_equivalences_no_recipient_one_megabyte() {
        let b = MessageSizeBreakdown::new(0, 0, 1_048_576, 0);
        let r = compute_equivalences(&b, &EquivalenceConstants::default());
        assert_relative_eq!(r.co2_grams, 19.0);
    }

    #[test]
    fn test_zero_and_one_recipient_agree() {
        let c = EquivalenceConstants::default();
        let zero = compute_equivalences(&MessageSizeBreakdown::new(0, 0, 4096, 0), &c);
        let one = compute_equivalences(&MessageSizeBreakdown::new(0, 0, 4096, 1), &c);
        let two = compute_equivalences(&MessageSizeBreakdown::new(0, 0, 4096, 2), &c);

        assert_relative_eq!(zero.co2_grams, one.co2_grams);
        assert_relative_eq!(two.co2_grams, 4096.0 * 25.0 / 1_048_576.0);
    }

    #[test]
    fn test_equivalences_finite_and_non_negative() {
        let c = EquivalenceConstants::default();
        for total in [0_u64, 1, 814, 1_048_576, 10_000_000_000] {
            for recipients in [0_usize, 1, 9, 10, 500] {
                let r = compute_equivalences(&MessageSizeBreakdown::new(total, 0, 0, recipients), &c);
                assert!(r.is_finite());
                assert!(r.values().iter().all(|v| *v >= 0.0));
            }
        }
    }

    #[test]
    fn test_estimator_uses_active_body() {
        let estimator = Estimator::default();
        let details = ComposeDetails {
            to: vec!["a@x.com".into()],
            subject: "Hi".into(),
            body: "<p>hello</p>".into(),
            plain_text_body: "hello".into(),
            is_plain_text: true,
            ..Default::default()
        };

        let estimate = estimator.estimate(&details, &[]);
        assert_eq!(estimate.breakdown.total_bytes, 814);
        assert!(!estimate.is_provisional());
    }

    #[test]
    fn test_estimator_custom_constants() {
        let mut constants = EquivalenceConstants::default();
        constants.set(ConstantKey::Co2PerMegabyte, 1.0).unwrap();
        constants.set(ConstantKey::Co2PerRecipientMegabyte, 1.0).unwrap();
        let estimator = Estimator::new(0, constants);

        let details = ComposeDetails::default();
        let attachments = [Attachment::new("a.pdf", 1_048_576)];
        let estimate = estimator.estimate(&details, &attachments);

        assert!(estimate.is_provisional());
        assert_eq!(estimate.reported_recipients(), 1);
        assert_relative_eq!(estimate.equivalences.co2_grams, 2.0);
        assert!(estimate.warnings.attachment);
    }

    #[test]
    fn test_global_estimator() {
        let estimator = Estimator::global();
        assert_eq!(estimator.header_overhead_bytes(), DEFAULT_HEADER_OVERHEAD_BYTES);
        assert_eq!(*estimator.constants(), EquivalenceConstants::default());
    }
}
