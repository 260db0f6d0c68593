//! Building and stripping the equivalence signature block.

use std::ops::Range;

use mailco2_estimate::Estimate;
use mailco2_format::{UnitFamily, UnitFormatter};
use mailco2_locale::{Localizer, keys};
use mailco2_types::{
    ComposeDetails, EquivalenceConstants, EquivalenceResult, MessageSizeBreakdown,
};
use thiserror::Error;

use crate::template::{interpolate, literal_after, literal_before};

/// Placeholder receiving the opening wrapper of the block.
const PREFIX_SLOT: usize = 0;

/// Placeholder receiving the closing wrapper of the block.
const SUFFIX_SLOT: usize = 14;

/// Errors raised when a signature template cannot be used for removal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignatureError {
    /// The template has no literal text right after the opening placeholder.
    #[error("signature template has no leading text after {{0}}")]
    MissingLeadingText,

    /// The template has no literal text right before the closing placeholder.
    #[error("signature template has no trailing text before {{14}}")]
    MissingTrailingText,
}

/// Representation of the message body the block is written into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignatureMode {
    /// Plain-text body; the block starts after a blank line.
    PlainText,
    /// HTML body; the block is a `<p><small>` paragraph.
    Html,
}

impl SignatureMode {
    /// Returns the mode matching the active body of a compose session.
    #[must_use]
    pub const fn of(details: &ComposeDetails) -> Self {
        if details.is_plain_text {
            Self::PlainText
        } else {
            Self::Html
        }
    }

    const fn prefix(&self) -> &'static str {
        match self {
            Self::PlainText => "\n\n",
            Self::Html => "<p><small>",
        }
    }

    const fn suffix(&self) -> &'static str {
        match self {
            Self::PlainText => "",
            Self::Html => "</small></p>",
        }
    }

    const fn subscript_two(&self) -> &'static str {
        match self {
            Self::PlainText => "₂",
            Self::Html => "<sub>2</sub>",
        }
    }

    const fn line_break(&self) -> &'static str {
        match self {
            Self::PlainText => "\n",
            Self::Html => "<br>",
        }
    }
}

/// Fixed fragments locating a previously inserted block.
///
/// Both fragments come from the localized template: the text right after
/// the opening placeholder and the text right before the closing one. A
/// rewording of the template only needs to keep those two pieces of literal
/// text in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureMarkers {
    leading: String,
    trailing: String,
}

impl SignatureMarkers {
    /// Derives the markers from a signature template.
    ///
    /// # Errors
    ///
    /// Returns an error if either fragment is missing or empty.
    pub fn from_template(template: &str) -> Result<Self, SignatureError> {
        let leading = literal_after(template, PREFIX_SLOT)
            .filter(|s| !s.is_empty())
            .ok_or(SignatureError::MissingLeadingText)?;
        let trailing = literal_before(template, SUFFIX_SLOT)
            .filter(|s| !s.is_empty())
            .ok_or(SignatureError::MissingTrailingText)?;

        Ok(Self {
            leading: leading.to_string(),
            trailing: trailing.to_string(),
        })
    }

    /// Text opening an inserted block.
    #[must_use]
    pub fn start(&self, mode: SignatureMode) -> String {
        format!("{}{}", mode.prefix(), self.leading)
    }

    /// Text closing an inserted block.
    #[must_use]
    pub fn end(&self, mode: SignatureMode) -> String {
        format!("{}{}", self.trailing, mode.suffix())
    }

    /// Locates the last inserted block in `body`.
    ///
    /// Blocks are appended, so earlier ones belong to quoted messages.
    #[must_use]
    pub fn find(&self, mode: SignatureMode, body: &str) -> Option<Range<usize>> {
        let start_marker = self.start(mode);
        let end_marker = self.end(mode);

        let start = body.rfind(&start_marker)?;
        let end = body[start + start_marker.len()..].find(&end_marker)?
            + start
            + start_marker.len()
            + end_marker.len();
        Some(start..end)
    }
}

/// Builds the signature block for the given figures.
#[must_use]
pub fn build_signature_text<L: Localizer + ?Sized>(
    mode: SignatureMode,
    breakdown: &MessageSizeBreakdown,
    equivalences: &EquivalenceResult,
    constants: &EquivalenceConstants,
    localizer: &L,
) -> String {
    let formatter = UnitFormatter::new(localizer);
    let name = localizer.message(keys::EXTENSION_NAME);
    let homepage = localizer.message(keys::EXTENSION_HOMEPAGE);

    let product = match mode {
        SignatureMode::PlainText => format!("{name} ({homepage})"),
        SignatureMode::Html => format!("<a href=\"{homepage}\">{name}</a>"),
    };

    let recipients = breakdown.recipient_count.max(1);
    let plural = if recipients > 1 {
        localizer.message(keys::PLURAL_SUFFIX)
    } else {
        ""
    };

    let values = [
        mode.prefix().to_string(),
        product,
        formatter.format(breakdown.total_bytes as f64, UnitFamily::Bytes),
        recipients.to_string(),
        plural.to_string(),
        formatter.grams(equivalences.co2_grams),
        mode.subscript_two().to_string(),
        formatter.grams(equivalences.oil_grams),
        formatter.meters(equivalences.car_meters),
        formatter.meters(equivalences.train_meters),
        formatter.plain(constants.watts_per_bulb),
        formatter.minutes(equivalences.bulb_minutes),
        formatter.minutes(equivalences.breathing_minutes),
        mode.line_break().to_string(),
        mode.suffix().to_string(),
    ];

    interpolate(localizer.message(keys::COMPOSE_SIGNATURE), &values)
}

/// Builds the signature block for an estimate.
#[must_use]
pub fn signature_for<L: Localizer + ?Sized>(
    mode: SignatureMode,
    estimate: &Estimate,
    localizer: &L,
) -> String {
    build_signature_text(
        mode,
        &estimate.breakdown,
        &estimate.equivalences,
        &estimate.constants,
        localizer,
    )
}

/// Removes the last signature block found in `body`.
///
/// Returns the body unchanged if no block is found.
#[must_use]
pub fn strip_signature_text<L: Localizer + ?Sized>(
    mode: SignatureMode,
    body: &str,
    localizer: &L,
) -> String {
    let markers = match SignatureMarkers::from_template(localizer.message(keys::COMPOSE_SIGNATURE))
    {
        Ok(markers) => markers,
        Err(e) => {
            tracing::warn!(locale = localizer.locale(), "cannot locate signature: {e}");
            return body.to_string();
        }
    };

    match markers.find(mode, body) {
        Some(range) => {
            let mut stripped = String::with_capacity(body.len() - range.len());
            stripped.push_str(&body[..range.start]);
            stripped.push_str(&body[range.end..]);
            stripped
        }
        None => {
            tracing::debug!(?mode, "no signature found in body");
            body.to_string()
        }
    }
}

/// Appends the signature block to the active body of a compose session.
pub fn append_signature<L: Localizer + ?Sized>(
    details: &mut ComposeDetails,
    estimate: &Estimate,
    localizer: &L,
) {
    let mode = SignatureMode::of(details);
    let mut body = details.active_body().to_string();
    body.push_str(&signature_for(mode, estimate, localizer));
    details.set_active_body(body);
}

/// Removes the signature block from the active body of a compose session.
///
/// Returns true if a block was removed.
pub fn remove_signature<L: Localizer + ?Sized>(details: &mut ComposeDetails, localizer: &L) -> bool {
    let mode = SignatureMode::of(details);
    let stripped = strip_signature_text(mode, details.active_body(), localizer);
    let changed = stripped != details.active_body();
    details.set_active_body(stripped);
    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use mailco2_estimate::Estimator;
    use mailco2_locale::{Catalog, Catalogs};

    fn sample_estimate(recipients: usize) -> Estimate {
        let details = ComposeDetails {
            to: (0..recipients).map(|i| format!("user{i}@example.com")).collect(),
            subject: "Hi".into(),
            body: "<p>hello</p>".into(),
            plain_text_body: "hello".into(),
            ..Default::default()
        };
        Estimator::default().estimate(&details, &[])
    }

    #[test]
    fn test_plain_text_signature() {
        let en = Catalogs::global().resolve("en");
        let text = signature_for(SignatureMode::PlainText, &sample_estimate(1), en);

        assert!(text.starts_with("\n\nEstimated with the extension Estimate your CO2 (https://"));
        assert!(text.contains("sent to 1 recipient,"));
        assert!(text.contains("CO₂e"));
        assert!(text.contains("a 40 W bulb"));
        assert!(text.ends_with("(2011)."));
    }

    #[test]
    fn test_html_signature() {
        let fr = Catalogs::global().resolve("fr");
        let text = signature_for(SignatureMode::Html, &sample_estimate(3), fr);

        assert!(text.starts_with("<p><small>Estimé avec l'extension <a href=\"https://"));
        assert!(text.contains("envoyé à 3 destinataires"));
        assert!(text.contains("CO<sub>2</sub>e"));
        assert!(text.contains("<br>"));
        assert!(text.ends_with("(2011).</small></p>"));
    }

    #[test]
    fn test_no_recipient_reported_as_one() {
        let en = Catalogs::global().resolve("en");
        let text = signature_for(SignatureMode::PlainText, &sample_estimate(0), en);
        assert!(text.contains("sent to 1 recipient,"));
    }

    #[test]
    fn test_round_trip_both_modes() {
        for locale in ["en", "fr"] {
            let catalog = Catalogs::global().resolve(locale);
            for mode in [SignatureMode::PlainText, SignatureMode::Html] {
                let body = "Hello,\n\nSee you tomorrow.\n-- \nAlice";
                let signed = format!("{body}{}", signature_for(mode, &sample_estimate(2), catalog));
                assert_ne!(signed, body);
                assert_eq!(strip_signature_text(mode, &signed, catalog), body);
            }
        }
    }

    #[test]
    fn test_strip_keeps_text_after_block() {
        let en = Catalogs::global().resolve("en");
        let signature = signature_for(SignatureMode::Html, &sample_estimate(1), en);
        let body = format!("<p>before</p>{signature}<p>after</p>");
        assert_eq!(
            strip_signature_text(SignatureMode::Html, &body, en),
            "<p>before</p><p>after</p>"
        );
    }

    #[test]
    fn test_strip_without_signature_is_noop() {
        let en = Catalogs::global().resolve("en");
        let body = "Nothing to see here (2011).";
        assert_eq!(strip_signature_text(SignatureMode::PlainText, body, en), body);
        assert_eq!(strip_signature_text(SignatureMode::Html, body, en), body);
    }

    #[test]
    fn test_strip_requires_matching_mode() {
        let en = Catalogs::global().resolve("en");
        let signed = signature_for(SignatureMode::PlainText, &sample_estimate(1), en);
        assert_eq!(strip_signature_text(SignatureMode::Html, &signed, en), signed);
    }

    #[test]
    fn test_strip_with_truncated_block_is_noop() {
        let en = Catalogs::global().resolve("en");
        let signed = signature_for(SignatureMode::PlainText, &sample_estimate(1), en);
        let truncated = &signed[..signed.len() - 10];
        assert_eq!(strip_signature_text(SignatureMode::PlainText, truncated, en), truncated);
    }

    #[test]
    fn test_strip_keeps_quoted_block() {
        let fr = Catalogs::global().resolve("fr");
        let quoted = signature_for(SignatureMode::Html, &sample_estimate(2), fr);
        let body = format!("<p>Merci</p><blockquote>{quoted}</blockquote>");
        let signed = format!(
            "{body}{}",
            signature_for(SignatureMode::Html, &sample_estimate(1), fr)
        );

        assert_eq!(strip_signature_text(SignatureMode::Html, &signed, fr), body);
        assert_eq!(
            strip_signature_text(SignatureMode::Html, &body, fr),
            "<p>Merci</p><blockquote></blockquote>"
        );
    }

    #[test]
    fn test_markers_follow_template_wording() {
        let catalog: Catalog = Catalogs::global()
            .resolve("en")
            .clone()
            .with_message(keys::COMPOSE_SIGNATURE, "{0}Footprint by {1}: {5}.{13}-- end --{14}");
        let markers = SignatureMarkers::from_template(catalog.message(keys::COMPOSE_SIGNATURE)).unwrap();
        assert_eq!(markers.start(SignatureMode::Html), "<p><small>Footprint by ");
        assert_eq!(markers.end(SignatureMode::Html), "-- end --</small></p>");

        let body = "Hi";
        let signed = format!(
            "{body}{}",
            signature_for(SignatureMode::PlainText, &sample_estimate(1), &catalog)
        );
        assert_eq!(strip_signature_text(SignatureMode::PlainText, &signed, &catalog), body);
    }

    #[test]
    fn test_markers_reject_bare_template() {
        assert_eq!(
            SignatureMarkers::from_template("{0}{1}{14}"),
            Err(SignatureError::MissingLeadingText)
        );
        assert_eq!(
            SignatureMarkers::from_template("{0}text {1}{14}"),
            Err(SignatureError::MissingTrailingText)
        );
    }

    #[test]
    fn test_append_and_remove_on_details() {
        let en = Catalogs::global().resolve("en");
        let estimate = sample_estimate(1);
        let mut details = ComposeDetails {
            plain_text_body: "hello".into(),
            body: "<p>hello</p>".into(),
            is_plain_text: true,
            ..Default::default()
        };

        append_signature(&mut details, &estimate, en);
        assert!(details.plain_text_body.len() > 5);
        assert_eq!(details.body, "<p>hello</p>");

        assert!(remove_signature(&mut details, en));
        assert_eq!(details.plain_text_body, "hello");
        assert!(!remove_signature(&mut details, en));
    }
}
