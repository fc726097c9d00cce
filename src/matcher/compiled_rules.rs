//! Rule compilation and first-match lookup.
//!
//! Rule data arrives as plain regex sources. Compilation happens once per rule
//! list and the result is immutable, so a `CompiledRules` can be shared across
//! threads and reused for any number of inputs.
//!
//! ## Pattern wrapping
//!
//! Every pattern is compiled as
//!
//! ```text
//! (?:^|[^A-Z0-9_-]|[^A-Z0-9-]_|sprd-|MZ-)(?:<pattern>)
//! ```
//!
//! case-insensitively. The prefix makes a signature like `Chrome` match only
//! at a token boundary (so `Chrome` does not fire inside `XChrome`). It is
//! non-capturing, so `$1` in a template still means the rule's first group.
//!
//! ## Invariants
//!
//! - `RuleMatch::index` is the rule's position in the list given to
//!   [`CompiledRules::new`].
//! - `RuleMatch::captures[0]` is the whole match; unmatched groups are empty
//!   strings so templates can index them without checks.

use regex::{Regex, RegexBuilder};

use crate::RuleError;

const BOUNDARY_PREFIX: &str = r"(?:^|[^A-Z0-9_-]|[^A-Z0-9-]_|sprd-|MZ-)";

/// A rule payload that carries a regex source.
pub trait RulePattern {
    fn pattern(&self) -> &str;
}

/// The winning rule of a [`CompiledRules::first_match`] lookup.
#[derive(Debug, Clone)]
pub struct RuleMatch<'a, R> {
    /// Position of the rule in its list.
    pub index: usize,
    pub rule: &'a R,
    /// `captures[0]` is the whole match, `captures[n]` is group `n`.
    pub captures: Vec<String>,
}

#[derive(Debug)]
struct CompiledRule<R> {
    regex: Regex,
    rule: R,
}

/// An ordered, compiled rule list.
#[derive(Debug)]
pub struct CompiledRules<R> {
    rules: Vec<CompiledRule<R>>,
}

impl<R: RulePattern> CompiledRules<R> {
    /// Compile `rules`, keeping their order.
    ///
    /// Fails on the first pattern that does not compile.
    pub fn new(rules: Vec<R>) -> Result<Self, RuleError> {
        let rules = rules
            .into_iter()
            .enumerate()
            .map(|(index, rule)| {
                let regex = compile(rule.pattern()).map_err(|source| RuleError::InvalidPattern {
                    index,
                    pattern: rule.pattern().to_string(),
                    source,
                })?;
                Ok(CompiledRule { regex, rule })
            })
            .collect::<Result<Vec<_>, RuleError>>()?;

        log::debug!("[rules:compiled] count={}", rules.len());

        Ok(Self { rules })
    }
}

impl<R> CompiledRules<R> {
    /// Return the first rule (in list order) whose pattern matches `input`.
    pub fn first_match(&self, input: &str) -> Option<RuleMatch<'_, R>> {
        self.rules.iter().enumerate().find_map(|(index, compiled)| {
            let caps = compiled.regex.captures(input)?;
            let captures =
                (0..caps.len()).map(|i| caps.get(i).map(|g| g.as_str().to_string()).unwrap_or_default()).collect();
            Some(RuleMatch { index, rule: &compiled.rule, captures })
        })
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate rules in priority order.
    pub fn rules(&self) -> impl Iterator<Item = &R> {
        self.rules.iter().map(|compiled| &compiled.rule)
    }
}

fn compile(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(&format!("{BOUNDARY_PREFIX}(?:{pattern})"))
        .case_insensitive(true)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Pat(&'static str);

    impl RulePattern for Pat {
        fn pattern(&self) -> &str {
            self.0
        }
    }

    fn compiled(patterns: &[&'static str]) -> CompiledRules<Pat> {
        CompiledRules::new(patterns.iter().map(|p| Pat(*p)).collect()).unwrap()
    }

    #[test]
    fn first_rule_in_list_order_wins() {
        let rules = compiled(&[r"Chrome/(\d+)", r"Chrome/(\d+)\.(\d+)"]);
        let hit = rules.first_match("Mozilla/5.0 Chrome/37.0").unwrap();
        assert_eq!(hit.index, 0);
        assert_eq!(hit.captures[1], "37");

        let reversed = compiled(&[r"Chrome/(\d+)\.(\d+)", r"Chrome/(\d+)"]);
        let hit = reversed.first_match("Mozilla/5.0 Chrome/37.0").unwrap();
        assert_eq!(hit.index, 0);
        assert_eq!(hit.captures[2], "0");
    }

    #[test]
    fn no_match_returns_none() {
        let rules = compiled(&["Firefox", "Opera"]);
        assert!(rules.first_match("curl/8.0").is_none());
        assert!(compiled(&[]).first_match("anything").is_none());
    }

    #[test]
    fn matching_is_case_insensitive() {
        let rules = compiled(&["firefox/(\\d+)"]);
        assert_eq!(rules.first_match("Mozilla/5.0 FIREFOX/99").unwrap().captures[1], "99");
    }

    #[test]
    fn signature_must_start_at_a_token_boundary() {
        let rules = compiled(&["Chrome"]);
        assert!(rules.first_match("XChrome/1").is_none());
        assert!(rules.first_match("Chrome/1").is_some());
        assert!(rules.first_match("(Chrome/1)").is_some());
        assert!(rules.first_match("MZ-Chrome/1").is_some());
    }

    #[test]
    fn unmatched_optional_groups_are_empty() {
        let rules = compiled(&[r"Firefox(?:/(\d+))?"]);
        let hit = rules.first_match("Firefox").unwrap();
        assert_eq!(hit.captures.len(), 2);
        assert_eq!(hit.captures[1], "");
    }

    #[test]
    fn unicode_class_heavy_patterns_compile() {
        let rules = compiled(&[
            r"(\w{1,60}) Browser/(\d+[\.\d]+)",
            r"(?:[\w ]+)(?:\w{2,40}) ?Browser/(\d+)",
            r"\w{3,200}/(\d+)",
        ]);
        assert_eq!(rules.len(), 3);

        let hit = rules.first_match("Mozilla/5.0 Zeta Browser/4.1").unwrap();
        assert_eq!(hit.index, 0);
        assert_eq!(hit.captures[2], "4.1");
    }

    #[test]
    fn invalid_pattern_reports_its_index() {
        let err = CompiledRules::new(vec![Pat("ok"), Pat("(unclosed")]).unwrap_err();
        let RuleError::InvalidPattern { index, pattern, .. } = err;
        assert_eq!(index, 1);
        assert_eq!(pattern, "(unclosed");
    }
}
