//! Rule-driven browser classification for user-agent strings.
//!
//! A raw user-agent string goes through a short pipeline:
//!
//! ```text
//! input ── CompiledRules::first_match ──▶ (rule, captures)
//!                                            │
//!                       template::render_* ◀─┘  name + version
//!                                            │
//!                   BrowserTables::catalog_matches (fan-out)
//!                                            │
//!              resolve_engine ──▶ resolve_engine_version
//!                                            │
//!                                            ▼
//!                                    Vec<MatchResult>
//! ```
//!
//! Unmatched input is not an error: it simply yields an empty result list.

#[macro_use]
mod macros;
mod api;
mod browser;
mod error;
mod matcher;
mod rendering;
mod rules;

pub mod template;
pub mod version;

pub use api::{
    get_available_browser_families, get_available_browsers, get_browser_family, is_mobile_only_browser, parse,
    parse_verbose_with, parse_with,
};
pub use browser::{BrowserFamily, BrowserParser, BrowserTables, CatalogEntry, resolve_engine, resolve_engine_version};
pub use error::{RuleError, TableError, VersionError};
pub use matcher::{CompiledRules, ParseDetails, ParseResultVerbose, RuleMatch, RulePattern};
pub use rendering::{EngineMatcher, EngineRule, EngineVersionMatcher, RegexEngineVersionMatcher, RuleEngineMatcher};
pub use version::VersionTruncation;

/// Options that affect how a match is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// How many dotted parts of the browser version to keep.
    pub version_truncation: VersionTruncation,
}

/// Rendering-engine selection attached to a browser [`Rule`].
///
/// `versions` maps a browser version threshold to the engine used from that
/// version onwards. Entries are evaluated in ascending version order no matter
/// how they were supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineSpec {
    pub default: Option<String>,
    pub versions: Vec<(String, String)>,
}

impl EngineSpec {
    /// An engine spec with `default` as the fallback engine. An empty string
    /// means "no default".
    pub fn new(default: impl Into<String>) -> Self {
        let default = default.into();
        Self { default: (!default.is_empty()).then_some(default), versions: Vec::new() }
    }

    /// Use `engine` for browser versions `>= threshold`.
    pub fn with_version(mut self, threshold: impl Into<String>, engine: impl Into<String>) -> Self {
        self.versions.push((threshold.into(), engine.into()));
        self
    }
}

/// A browser detection rule: a regex plus templates for the name and version.
///
/// Templates refer to capture groups positionally (`$1`, `$2`, ...). Rules are
/// evaluated in list order and the first match wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub pattern: String,
    pub name: String,
    pub version: String,
    pub engine: Option<EngineSpec>,
}

impl Rule {
    pub fn new(pattern: impl Into<String>, name: impl Into<String>, version: impl Into<String>) -> Self {
        Self { pattern: pattern.into(), name: name.into(), version: version.into(), engine: None }
    }

    pub fn with_engine(mut self, engine: EngineSpec) -> Self {
        self.engine = Some(engine);
        self
    }
}

impl RulePattern for Rule {
    fn pattern(&self) -> &str {
        &self.pattern
    }
}

/// A classified browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    /// Always `"browser"` for this parser.
    pub kind: &'static str,
    /// Name rendered from the winning rule. It matches a catalog display name
    /// ignoring case.
    pub name: String,
    /// Two-character catalog code.
    pub short_code: String,
    pub version: String,
    /// Rendering engine, empty when unknown.
    pub engine: String,
    /// Rendering engine version, empty when unknown.
    pub engine_version: String,
}
