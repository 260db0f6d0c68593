//! Display utilities and output formatting for the mailco2 CLI.

use mailco2_lib::prelude::*;
use mailco2_lib::{ConstantKey, FILE_SHARING_URL, keys};
use std::fmt::Write;

/// Renders the size breakdown, equivalences and warnings of an estimate.
pub(crate) fn render_estimate(estimate: &Estimate, catalog: &Catalog, html: bool) -> String {
    let formatter = UnitFormatter::new(catalog);
    let breakdown = &estimate.breakdown;
    let equivalences = &estimate.equivalences;
    let mut out = String::new();

    let size = |bytes: u64| sized(bytes, catalog, &formatter, html);
    let sizes = [
        (keys::SIZES_HEADER, size(breakdown.header_bytes)),
        (keys::SIZES_BODY, size(breakdown.body_bytes)),
        (keys::SIZES_ATTACHMENTS, size(breakdown.attachments_bytes)),
        (keys::SIZES_TOTAL, size(breakdown.total_bytes)),
        (keys::SIZES_RECIPIENTS, breakdown.recipient_count.to_string()),
    ];
    for (key, value) in sizes {
        let _ = writeln!(out, "{:<32} {value}", with_colon(catalog, &label(catalog, key)));
    }
    out.push('\n');

    // With no recipient the figures hold for each future recipient.
    let per_recipient = if estimate.is_provisional() {
        format!(" / {}", catalog.message(keys::RECIPIENT_SHORT))
    } else {
        String::new()
    };
    let bulb = format!(
        "{} ({} W)",
        label(catalog, keys::EQUIVALENCES_BULB),
        formatter.plain(estimate.constants.watts_per_bulb)
    );
    let rows = [
        (
            label(catalog, keys::EQUIVALENCES_CO2),
            formatter.grams(equivalences.co2_grams),
        ),
        (
            label(catalog, keys::EQUIVALENCES_OIL),
            formatter.grams(equivalences.oil_grams),
        ),
        (
            label(catalog, keys::EQUIVALENCES_CAR),
            formatter.meters(equivalences.car_meters),
        ),
        (
            label(catalog, keys::EQUIVALENCES_TRAIN),
            formatter.meters(equivalences.train_meters),
        ),
        (bulb, formatter.minutes(equivalences.bulb_minutes)),
        (
            label(catalog, keys::EQUIVALENCES_BREATHING),
            formatter.minutes(equivalences.breathing_minutes),
        ),
    ];
    for (name, value) in rows {
        let _ = writeln!(
            out,
            "{:<32} {value}{per_recipient}",
            with_colon(catalog, &name)
        );
    }

    if estimate.warnings.attachment {
        let _ = writeln!(
            out,
            "\n! {} {} ({FILE_SHARING_URL})",
            catalog.message(keys::ATTACHMENT_WARNING),
            catalog.message(keys::ATTACHMENT_WARNING_LINK),
        );
    }
    if estimate.warnings.recipients {
        let _ = writeln!(out, "\n! {}", catalog.message(keys::RECIPIENTS_WARNING));
    }

    out
}

/// Renders the effective constants, marking overridden ones.
pub(crate) fn render_constants(
    constants: &EquivalenceConstants,
    overridden: impl Fn(ConstantKey) -> bool,
) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<10} {:>12} {:<16} DESCRIPTION",
        "KEY", "VALUE", "UNIT"
    );
    let _ = writeln!(out, "{}", "-".repeat(72));
    for key in ConstantKey::all() {
        let marker = if overridden(*key) { "*" } else { "" };
        let _ = writeln!(
            out,
            "{:<10} {:>12} {:<16} {}",
            format!("{key}{marker}"),
            constants.get(*key),
            key.unit(),
            key.description()
        );
    }
    out
}

fn sized(bytes: u64, catalog: &Catalog, formatter: &UnitFormatter<'_, Catalog>, html: bool) -> String {
    #[cfg(feature = "html")]
    if html {
        return mailco2_lib::bytes_html(bytes, catalog);
    }
    #[cfg(not(feature = "html"))]
    let _ = (html, catalog);
    formatter.bytes(bytes)
}

/// A catalog label without HTML markup.
fn label(catalog: &Catalog, key: &str) -> String {
    catalog.message(key).replace("<sub>2</sub>", "₂")
}

fn with_colon(catalog: &Catalog, text: &str) -> String {
    format!("{text}{}:", catalog.message(keys::PUNCTUATION_SPACE))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn estimate(to: usize, attachment: u64) -> Estimate {
        let details = ComposeDetails {
            to: (0..to).map(|i| format!("user{i}@example.org")).collect(),
            subject: "Hi".into(),
            body: "Hello".into(),
            ..Default::default()
        };
        Estimator::global().estimate(&details, &[Attachment::new("a.bin", attachment)])
    }

    #[test]
    fn test_render_sizes_and_equivalences() {
        let catalog = Catalogs::global().resolve("en");
        let text = render_estimate(&estimate(1, 0), catalog, false);
        assert!(text.contains("Total:"));
        assert!(text.contains("CO₂ emitted:"));
        assert!(text.contains("Light bulb (40 W):"));
        assert!(!text.contains("/ rcpt"));
        assert!(!text.contains('!'));
    }

    #[test]
    fn test_provisional_marker() {
        let catalog = Catalogs::global().resolve("en");
        let text = render_estimate(&estimate(0, 0), catalog, false);
        assert!(text.contains(" / rcpt"));
    }

    #[test]
    fn test_warnings() {
        let catalog = Catalogs::global().resolve("en");
        let text = render_estimate(&estimate(10, 2 * 1_048_576), catalog, false);
        assert!(text.contains(FILE_SHARING_URL));
        assert!(text.contains(catalog.message(keys::RECIPIENTS_WARNING)));
    }

    #[test]
    fn test_french_labels() {
        let catalog = Catalogs::global().resolve("fr");
        let text = render_estimate(&estimate(1, 0), catalog, false);
        let space = catalog.message(keys::PUNCTUATION_SPACE);
        assert!(text.contains(&format!("{}{space}:", catalog.message(keys::SIZES_TOTAL))));
        assert!(text.contains("octets"));
    }

    #[test]
    fn test_french_bulb_wattage() {
        let catalog = Catalogs::global().resolve("fr");
        let estimator = Estimator::with_constants(EquivalenceConstants {
            watts_per_bulb: 12.5,
            ..Default::default()
        });
        let details = ComposeDetails {
            to: vec!["a@example.org".into()],
            ..Default::default()
        };
        let text = render_estimate(&estimator.estimate(&details, &[]), catalog, false);
        assert!(text.contains("(12,5 W)"));
        assert!(!text.contains("12.5"));
    }

    #[test]
    fn test_render_constants() {
        let text = render_constants(&EquivalenceConstants::default(), |key| {
            key == ConstantKey::Co2PerMegabyte
        });
        assert!(text.contains("CO2*"));
        assert!(text.contains("BREATHING"));
    }
}
