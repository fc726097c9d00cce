//! Parse run metrics.
//!
//! A normal [`BrowserParser::parse`](crate::BrowserParser::parse) discards
//! these. The verbose entry points surface them for rule debugging: which rule
//! won, what the templates rendered to and how long each phase took.
//!
//! Metrics are cheap to collect (a few `Instant::now()` calls per parse), so
//! the same run function backs both the plain and the verbose paths.

use std::time::Duration;

use crate::MatchResult;

#[derive(Debug, Default, Clone)]
pub(crate) struct RunMetrics {
    /// Total elapsed time for the run.
    pub total: Duration,
    /// Time spent finding the winning rule.
    pub matching: Duration,
    /// Time spent on catalog lookup and engine resolution.
    pub resolve: Duration,
}

/// Parser output bundled with trace data.
#[derive(Debug, Clone)]
pub(crate) struct RunResult {
    pub results: Vec<MatchResult>,
    pub details: ParseDetails,
}

/// Extra details returned by verbose parses.
#[derive(Debug, Clone, Default)]
pub struct ParseDetails {
    /// Total elapsed time.
    pub total: Duration,
    /// Time spent in rule matching.
    pub matching: Duration,
    /// Time spent in catalog lookup and engine resolution.
    pub resolve: Duration,
    /// Number of rules the input was checked against.
    pub rule_count: usize,
    /// Index of the winning rule, if any.
    pub matched_rule: Option<usize>,
    /// Browser name as rendered from the winning rule's template.
    pub rendered_name: String,
    /// Browser version as rendered (and truncated) from the winning rule.
    pub rendered_version: String,
    /// Short codes of the catalog entries the rendered name matched.
    pub catalog_hits: Vec<String>,
}

impl RunResult {
    pub(crate) fn new(results: Vec<MatchResult>, mut details: ParseDetails, metrics: RunMetrics) -> Self {
        details.total = metrics.total;
        details.matching = metrics.matching;
        details.resolve = metrics.resolve;
        RunResult { results, details }
    }
}

/// Result from verbose parses.
#[derive(Debug, Clone)]
pub struct ParseResultVerbose {
    pub text: String,
    pub results: Vec<MatchResult>,
    pub elapsed: Duration,
    pub details: ParseDetails,
}
