//! Positional `{n}` templates.

/// A piece of a parsed template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text copied as is.
    Literal(&'a str),
    /// A `{n}` placeholder.
    Placeholder(usize),
}

/// Splits a template into literals and placeholders.
///
/// Braces that do not enclose a decimal index are kept as literal text.
#[must_use]
pub fn parse(template: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut literal_start = 0;
    let mut cursor = 0;

    while let Some(offset) = template[cursor..].find('{') {
        let open = cursor + offset;
        let after = &template[open + 1..];
        let digits = after.bytes().take_while(u8::is_ascii_digit).count();

        let index = (digits > 0 && after.as_bytes().get(digits) == Some(&b'}'))
            .then(|| after[..digits].parse::<usize>().ok())
            .flatten();

        match index {
            Some(index) => {
                if literal_start < open {
                    segments.push(Segment::Literal(&template[literal_start..open]));
                }
                segments.push(Segment::Placeholder(index));
                cursor = open + digits + 2;
                literal_start = cursor;
            }
            None => cursor = open + 1,
        }
    }

    if literal_start < template.len() {
        segments.push(Segment::Literal(&template[literal_start..]));
    }
    segments
}

/// Replaces every `{n}` in `template` with the n-th value.
///
/// Placeholders without a matching value are left untouched. Substituted
/// values are never themselves interpolated.
#[must_use]
pub fn interpolate<S: AsRef<str>>(template: &str, values: &[S]) -> String {
    let mut out = String::with_capacity(template.len());
    for segment in parse(template) {
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Placeholder(index) => match values.get(index) {
                Some(value) => out.push_str(value.as_ref()),
                None => {
                    out.push('{');
                    out.push_str(&index.to_string());
                    out.push('}');
                }
            },
        }
    }
    out
}

/// Returns the literal text directly following placeholder `index`.
#[must_use]
pub fn literal_after(template: &str, index: usize) -> Option<&str> {
    let segments = parse(template);
    let position = segments
        .iter()
        .position(|s| *s == Segment::Placeholder(index))?;
    match segments.get(position + 1) {
        Some(Segment::Literal(text)) => Some(*text),
        _ => None,
    }
}

/// Returns the literal text directly preceding placeholder `index`.
#[must_use]
pub fn literal_before(template: &str, index: usize) -> Option<&str> {
    let segments = parse(template);
    let position = segments
        .iter()
        .position(|s| *s == Segment::Placeholder(index))?;
    match position.checked_sub(1).and_then(|p| segments.get(p)) {
        Some(Segment::Literal(text)) => Some(*text),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpolate() {
        assert_eq!(interpolate("{0} + {1} = {2}", &["1", "2", "3"]), "1 + 2 = 3");
        assert_eq!(interpolate("{1}{0}{1}", &["a", "b"]), "bab");
    }

    #[test]
    fn test_interpolate_keeps_unknown_and_malformed() {
        assert_eq!(interpolate("{0} {3} {x} {", &["a"]), "a {3} {x} {");
        assert_eq!(interpolate("{}", &["a"]), "{}");
    }

    #[test]
    fn test_values_are_not_reinterpolated() {
        assert_eq!(interpolate("{0}{1}", &["{1}", "b"]), "{1}b");
    }

    #[test]
    fn test_literal_neighbours() {
        let template = "{0}Hello {1}, bye (2011).{2}";
        assert_eq!(literal_after(template, 0), Some("Hello "));
        assert_eq!(literal_before(template, 2), Some(", bye (2011)."));
        assert_eq!(literal_before(template, 0), None);
        assert_eq!(literal_after(template, 2), None);
        assert_eq!(literal_after(template, 7), None);
    }

    #[test]
    fn test_parse_multibyte() {
        let segments = parse("é{0}€");
        assert_eq!(
            segments,
            vec![
                Segment::Literal("é"),
                Segment::Placeholder(0),
                Segment::Literal("€")
            ]
        );
    }
}
