//! Browser parser.
//!
//! The parser owns a compiled browser rule list and shares its catalog tables
//! and engine matchers. Parsing never fails and never mutates the parser: the
//! same input always gives the same output, from any thread.
//!
//! ## Pass structure
//!
//! ```text
//! (1) first_match      -> winning rule + captures, or empty result
//! (2) render           -> name + version (version optionally truncated)
//! (3) catalog lookup   -> 0..n entries sharing the rendered name
//! (4) engine           -> rule default / overrides / matcher fallback
//! (5) engine version   -> external matcher, best effort
//! ```
//!
//! Step (3) deliberately keeps every catalog hit: if two catalog entries share
//! a display name, one input produces two results.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;

use super::resolve::{resolve_engine, resolve_engine_version};
use super::tables::{BrowserFamily, BrowserTables};
use crate::matcher::{CompiledRules, ParseDetails, ParseResultVerbose, RunMetrics, RunResult};
use crate::{
    EngineMatcher, EngineVersionMatcher, MatchResult, Options, RegexEngineVersionMatcher, Rule, RuleEngineMatcher,
    RuleError, template,
};

const PARSER_KIND: &str = "browser";

/// Classifies user-agent strings into browsers.
///
/// Usage: build with [`BrowserParser::new`] (custom rules and tables) or
/// [`BrowserParser::builtin`], then call [`parse`](Self::parse).
pub struct BrowserParser {
    rules: CompiledRules<Rule>,
    tables: Arc<BrowserTables>,
    engines: Arc<dyn EngineMatcher>,
    engine_versions: Arc<dyn EngineVersionMatcher>,
}

impl std::fmt::Debug for BrowserParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrowserParser")
            .field("rules", &self.rules.len())
            .field("catalog", &self.tables.catalog().len())
            .field("engines", &"<matcher>")
            .field("engine_versions", &"<matcher>")
            .finish()
    }
}

impl BrowserParser {
    /// Create a parser for `rules` (in priority order) and `tables`, using the
    /// built-in engine and engine-version matchers.
    pub fn new(rules: Vec<Rule>, tables: Arc<BrowserTables>) -> Result<Self, RuleError> {
        Ok(Self {
            rules: CompiledRules::new(rules)?,
            tables,
            engines: Arc::new(RuleEngineMatcher::builtin()?),
            engine_versions: Arc::new(RegexEngineVersionMatcher::new()),
        })
    }

    /// Parser with the built-in rules, tables and matchers.
    pub fn builtin() -> Result<Self, RuleError> {
        Self::new(crate::rules::browsers::get(), BrowserTables::builtin())
    }

    /// Replace the engine-name matcher used when a rule does not settle the
    /// engine.
    pub fn with_engine_matcher(mut self, matcher: impl EngineMatcher + 'static) -> Self {
        self.engines = Arc::new(matcher);
        self
    }

    /// Replace the engine-version matcher.
    pub fn with_engine_version_matcher(mut self, matcher: impl EngineVersionMatcher + 'static) -> Self {
        self.engine_versions = Arc::new(matcher);
        self
    }

    pub fn tables(&self) -> &BrowserTables {
        &self.tables
    }

    /// Classify `input` with default [`Options`].
    pub fn parse(&self, input: &str) -> Vec<MatchResult> {
        self.parse_with(input, &Options::default())
    }

    pub fn parse_with(&self, input: &str, options: &Options) -> Vec<MatchResult> {
        self.run(input, options).results
    }

    /// Classify `input` and return rule and timing details alongside the
    /// results.
    pub fn parse_verbose_with(&self, input: &str, options: &Options) -> ParseResultVerbose {
        let run = self.run(input, options);
        ParseResultVerbose {
            text: input.to_string(),
            results: run.results,
            elapsed: run.details.total,
            details: run.details,
        }
    }

    /// Catalog snapshot: `short code -> display name`.
    pub fn available_browsers(&self) -> BTreeMap<&str, &str> {
        self.tables.available_browsers()
    }

    pub fn available_browser_families(&self) -> &[BrowserFamily] {
        self.tables.families()
    }

    /// Family of `short_code`, or `("Unknown", false)`.
    pub fn browser_family(&self, short_code: &str) -> (&str, bool) {
        self.tables.browser_family(short_code)
    }

    pub fn is_mobile_only_browser(&self, identifier: &str) -> bool {
        self.tables.is_mobile_only(identifier)
    }

    fn run(&self, input: &str, options: &Options) -> RunResult {
        let total_start = Instant::now();
        let mut details = ParseDetails { rule_count: self.rules.len(), ..ParseDetails::default() };

        let matching_start = Instant::now();
        let hit = self.rules.first_match(input);
        let matching = matching_start.elapsed();

        let Some(hit) = hit else {
            log::debug!("[browser:no_match] rules={}", self.rules.len());
            let metrics = RunMetrics { total: total_start.elapsed(), matching, ..RunMetrics::default() };
            return RunResult::new(Vec::new(), details, metrics);
        };

        let resolve_start = Instant::now();
        let name = template::render_name(&hit.rule.name, &hit.captures);
        let version = options.version_truncation.apply(&template::render_version(&hit.rule.version, &hit.captures));
        log::debug!("[browser:match] rule={} name=\"{}\" version=\"{}\"", hit.index, name, version);

        let entries = self.tables.catalog_matches(&name);
        let results = if entries.is_empty() {
            log::debug!("[browser:catalog_miss] name=\"{}\"", name);
            Vec::new()
        } else {
            if entries.len() > 1 {
                log::debug!("[browser:catalog_fanout] name=\"{}\" entries={}", name, entries.len());
            }
            let engine = resolve_engine(hit.rule.engine.as_ref(), &version, input, self.engines.as_ref());
            let engine_version = resolve_engine_version(&engine, input, self.engine_versions.as_ref());

            entries
                .iter()
                .map(|entry| MatchResult {
                    kind: PARSER_KIND,
                    name: name.clone(),
                    short_code: entry.short_code().to_string(),
                    version: version.clone(),
                    engine: engine.clone(),
                    engine_version: engine_version.clone(),
                })
                .collect()
        };

        details.matched_rule = Some(hit.index);
        details.catalog_hits = entries.iter().map(|e| e.short_code().to_string()).collect();
        details.rendered_name = name;
        details.rendered_version = version;

        let metrics = RunMetrics { total: total_start.elapsed(), matching, resolve: resolve_start.elapsed() };
        RunResult::new(results, details, metrics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CatalogEntry, EngineSpec, VersionTruncation};

    struct NoEngine;

    impl EngineMatcher for NoEngine {
        fn match_engine(&self, _input: &str) -> Option<String> {
            None
        }
    }

    fn tables(entries: &[(&str, &str)]) -> Arc<BrowserTables> {
        let catalog = entries.iter().map(|(code, name)| CatalogEntry::new(*code, *name)).collect();
        Arc::new(BrowserTables::new(catalog, Vec::new(), Vec::new()).unwrap())
    }

    #[test]
    fn unmatched_input_yields_no_results() {
        let parser = BrowserParser::new(vec![Rule::new("Firefox", "Firefox", "")], tables(&[("FF", "Firefox")]))
            .unwrap();
        assert!(parser.parse("curl/8.4.0").is_empty());
        assert!(parser.parse("").is_empty());
    }

    #[test]
    fn first_matching_rule_decides() {
        let rules = vec![
            Rule::new(r"Wide/(\d+)", "Alpha", "$1"),
            Rule::new(r"Wide/(\d+)\.(\d+)", "Beta", "$1.$2"),
        ];
        let parser = BrowserParser::new(rules, tables(&[("AL", "Alpha"), ("BE", "Beta")])).unwrap();
        let results = parser.parse("Mozilla/5.0 Wide/7.3");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].short_code, "AL");
        assert_eq!(results[0].version, "7");
    }

    #[test]
    fn duplicate_display_names_fan_out() {
        let parser = BrowserParser::new(
            vec![Rule::new(r"Twin/(\d+[\.\d]+)", "Twin", "$1")],
            tables(&[("T1", "Twin"), ("XX", "Other"), ("T2", "twin")]),
        )
        .unwrap();
        let results = parser.parse("Twin/2.5");
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].short_code, "T1");
        assert_eq!(results[1].short_code, "T2");
        assert!(results.iter().all(|r| r.version == "2.5" && r.name == "Twin"));
    }

    #[test]
    fn catalog_miss_yields_no_results() {
        let parser = BrowserParser::new(vec![Rule::new(r"Ghost/(\d+)", "Ghost", "$1")], tables(&[("FF", "Firefox")]))
            .unwrap();
        assert!(parser.parse("Ghost/1").is_empty());

        let verbose = parser.parse_verbose_with("Ghost/1", &Options::default());
        assert_eq!(verbose.details.matched_rule, Some(0));
        assert_eq!(verbose.details.rendered_name, "Ghost");
        assert!(verbose.details.catalog_hits.is_empty());
    }

    #[test]
    fn empty_rendered_name_never_matches() {
        let parser =
            BrowserParser::new(vec![Rule::new(r"Blank(?:/(\w+))?", "$1", "")], tables(&[("FF", "Firefox")])).unwrap();
        assert!(parser.parse("Blank").is_empty());
    }

    #[test]
    fn name_is_rendered_and_engine_comes_from_spec() {
        let rule = Rule::new(r"shiny/(\d+[\.\d]*)", "SHINY", "$1")
            .with_engine(EngineSpec::new("WebKit").with_version("28", "Blink"));
        let parser = BrowserParser::new(vec![rule], tables(&[("SH", "Shiny")])).unwrap();

        let old = parser.parse("Shiny/27.0");
        assert_eq!(old[0].name, "SHINY");
        assert_eq!(old[0].short_code, "SH");
        assert_eq!(old[0].kind, "browser");
        assert_eq!(old[0].engine, "WebKit");

        let new = parser.parse("Shiny/31.0 Chrome/31.0.1650.57");
        assert_eq!(new[0].engine, "Blink");
        assert_eq!(new[0].engine_version, "31.0.1650.57");
    }

    #[test]
    fn engine_matcher_fills_missing_engine() {
        let rule = Rule::new(r"Plain/(\d+)", "Plain", "$1");
        let parser = BrowserParser::new(vec![rule], tables(&[("PL", "Plain")])).unwrap();
        let ua = "Mozilla/5.0 (X11; rv:52.0) Gecko/20100101 Plain/3";

        let results = parser.parse(ua);
        assert_eq!(results[0].engine, "Gecko");
        assert_eq!(results[0].engine_version, "52.0");

        let parser = parser.with_engine_matcher(NoEngine);
        let results = parser.parse(ua);
        assert_eq!(results[0].engine, "");
        assert_eq!(results[0].engine_version, "");
    }

    #[test]
    fn version_truncation_applies_before_engine_selection() {
        let rule = Rule::new(r"Step/(\d+[\.\d]*)", "Step", "$1")
            .with_engine(EngineSpec::new("Old").with_version("2.5", "New"));
        let parser = BrowserParser::new(vec![rule], tables(&[("ST", "Step")])).unwrap();
        let options = Options { version_truncation: VersionTruncation::Major };

        let results = parser.parse_with("Step/2.7.1", &options);
        assert_eq!(results[0].version, "2");
        assert_eq!(results[0].engine, "Old");

        let results = parser.parse("Step/2.7.1");
        assert_eq!(results[0].version, "2.7.1");
        assert_eq!(results[0].engine, "New");
    }

    #[test]
    fn parse_is_idempotent() {
        let parser = BrowserParser::builtin().unwrap();
        let ua = "Mozilla/5.0 (Linux; Android 10) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/83.0.4103.106 Mobile Safari/537.36";
        assert_eq!(parser.parse(ua), parser.parse(ua));
    }

    #[test]
    fn parser_is_shareable_across_threads() {
        let parser = BrowserParser::builtin().unwrap();
        let ua = "Mozilla/5.0 (X11; Linux x86_64; rv:89.0) Gecko/20100101 Firefox/89.0";
        let expected = parser.parse(ua);

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4).map(|_| scope.spawn(|| parser.parse(ua))).collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }
}
