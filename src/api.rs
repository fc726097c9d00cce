use std::collections::BTreeMap;

use once_cell::sync::Lazy;

use crate::{BrowserFamily, BrowserParser, MatchResult, Options, ParseResultVerbose};

static DEFAULT_PARSER: Lazy<BrowserParser> =
    Lazy::new(|| BrowserParser::builtin().expect("built-in browser rules compile"));

/// Classify `input` with the built-in rules and tables.
///
/// Returns one result per matching catalog entry; unrecognized input gives an
/// empty list.
///
/// # Example
/// ```
/// let results = uaclient::parse("Mozilla/5.0 (X11; Linux x86_64; rv:89.0) Gecko/20100101 Firefox/89.0");
/// assert_eq!(results[0].name, "Firefox");
/// assert_eq!(results[0].engine, "Gecko");
/// ```
pub fn parse(input: &str) -> Vec<MatchResult> {
    DEFAULT_PARSER.parse(input)
}

pub fn parse_with(input: &str, options: &Options) -> Vec<MatchResult> {
    DEFAULT_PARSER.parse_with(input, options)
}

/// Like [`parse_with`], plus the winning rule, rendered fields and timings.
///
/// Useful for rule debugging and profiling.
pub fn parse_verbose_with(input: &str, options: &Options) -> ParseResultVerbose {
    DEFAULT_PARSER.parse_verbose_with(input, options)
}

/// The built-in catalog as `short code -> display name`.
pub fn get_available_browsers() -> BTreeMap<&'static str, &'static str> {
    DEFAULT_PARSER.available_browsers()
}

pub fn get_available_browser_families() -> &'static [BrowserFamily] {
    DEFAULT_PARSER.available_browser_families()
}

/// Family of a built-in short code, or `("Unknown", false)`.
pub fn get_browser_family(short_code: &str) -> (&'static str, bool) {
    DEFAULT_PARSER.browser_family(short_code)
}

/// Whether a built-in short code (or catalog display name) is mobile-only.
pub fn is_mobile_only_browser(identifier: &str) -> bool {
    DEFAULT_PARSER.is_mobile_only_browser(identifier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::VersionTruncation;

    const CHROME: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

    #[test]
    fn parse_returns_browser_results() {
        let results = parse(CHROME);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].short_code, "CH");
        assert_eq!(results[0].engine, "Blink");
    }

    #[test]
    fn parse_with_truncates_versions() {
        let options = Options { version_truncation: VersionTruncation::Minor };
        assert_eq!(parse_with(CHROME, &options)[0].version, "91.0");
    }

    #[test]
    fn parse_verbose_includes_rule_details() {
        let res = parse_verbose_with(CHROME, &Options::default());

        assert_eq!(res.text, CHROME);
        assert_eq!(res.elapsed, res.details.total);
        assert!(res.details.matching <= res.details.total);
        assert!(res.details.matched_rule.is_some());
        assert!(res.details.rule_count > 0);
        assert_eq!(res.details.rendered_name, "Chrome");
        assert_eq!(res.details.catalog_hits, ["CH"]);
    }

    #[test]
    fn parse_verbose_reports_no_match() {
        let res = parse_verbose_with("curl/8.4.0", &Options::default());
        assert!(res.results.is_empty());
        assert_eq!(res.details.matched_rule, None);
        assert!(res.details.rendered_name.is_empty());
    }

    #[test]
    fn catalog_queries() {
        assert_eq!(get_available_browsers().get("SA"), Some(&"Sailfish Browser"));
        assert!(get_available_browser_families().iter().any(|f| f.name == "Opera" && f.contains("OM")));
        assert_eq!(get_browser_family("CH"), ("Chrome", true));
        assert_eq!(get_browser_family("ZZ"), ("Unknown", false));
        assert!(is_mobile_only_browser("SA"));
        assert!(!is_mobile_only_browser("Chrome"));
    }
}
