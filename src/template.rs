//! Capture-group templates.
//!
//! A template is literal text with positional placeholders `$1` .. `$9` that
//! refer to the capture groups of the winning rule. Missing or unmatched
//! groups render as the empty string.

/// Substitute `$n` placeholders in `template` with `captures[n]`.
///
/// `captures[0]` is the whole match, so `$1` is the first capture group. A `$`
/// that is not followed by a digit `1..=9` is kept literally.
pub fn render(template: &str, captures: &[String]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '$' {
            out.push(c);
            continue;
        }
        match chars.peek().and_then(|d| d.to_digit(10)) {
            Some(group @ 1..=9) => {
                chars.next();
                if let Some(value) = captures.get(group as usize) {
                    out.push_str(value);
                }
            }
            _ => out.push(c),
        }
    }

    out
}

/// Render a browser (or engine) name: placeholders substituted, surrounding
/// whitespace trimmed.
pub fn render_name(template: &str, captures: &[String]) -> String {
    render(template, captures).trim().to_string()
}

/// Render a version: `_` separators become `.`, surrounding dots and
/// whitespace are trimmed.
pub fn render_version(template: &str, captures: &[String]) -> String {
    render(template, captures).replace('_', ".").trim_matches(|c: char| c == '.' || c.is_whitespace()).to_string()
}
