//! HTML rendering of byte sizes with an explanatory tooltip.

use mailco2_locale::{Localizer, keys};

use crate::family::{ScaleSymbol, UnitFamily};
use crate::quantity::format_quantity;

/// Renders a byte size as HTML.
///
/// Sizes expressed in plain bytes get their short symbol wrapped in a
/// tooltip spelling out the unit; scaled sizes are rendered as text.
#[must_use]
pub fn bytes_html<L: Localizer + ?Sized>(bytes: u64, localizer: &L) -> String {
    let family = UnitFamily::Bytes;
    let quantity = format_quantity(bytes as f64, family, family.default_decimal_places());
    let number = quantity.render_number(localizer.decimal_separator());

    let tooltip_key = match quantity.symbol {
        ScaleSymbol::Byte => keys::BYTE,
        ScaleSymbol::Bytes => keys::BYTES,
        _ => {
            let symbol = quantity.symbol.render(localizer);
            return format!("<span>{} {}</span>", escape(&number), escape(&symbol));
        }
    };

    format!(
        "<span>{} <div class=\"tooltip tooltip-left\">{}<span class=\"tooltiptext tooltiptext-left\">{}</span></div></span>",
        escape(&number),
        escape(localizer.message(keys::BYTE_SHORT)),
        escape(localizer.message(tooltip_key)),
    )
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use mailco2_locale::Catalogs;

    #[test]
    fn test_plain_bytes_get_tooltip() {
        let fr = Catalogs::global().resolve("fr");
        assert_eq!(
            bytes_html(814, fr),
            "<span>814,00 <div class=\"tooltip tooltip-left\">o<span class=\"tooltiptext tooltiptext-left\">octets</span></div></span>"
        );
        assert!(bytes_html(0, fr).contains(">octet</span>"));
    }

    #[test]
    fn test_scaled_bytes_are_text() {
        let en = Catalogs::global().resolve("en");
        assert_eq!(bytes_html(1536, en), "<span>1.50 kB</span>");
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("a<b>&\"c\""), "a&lt;b&gt;&amp;&quot;c&quot;");
    }
}
