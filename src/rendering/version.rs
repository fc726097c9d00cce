use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

/// Extracts the version of a named rendering engine from a raw user-agent.
pub trait EngineVersionMatcher: Send + Sync {
    /// The engine version, or `None` when it cannot be found.
    fn match_version(&self, input: &str, engine: &str) -> Option<String>;
}

/// Engines whose version token differs from their name.
const ENGINE_TOKENS: &[(&str, &str)] = &[("Blink", "Chrome|Cronet"), ("LibWeb", r"LibWeb\+LibJs")];

/// Engines with a precompiled version regex.
const KNOWN_ENGINES: &[&str] = &[
    "Blink", "Edge", "Elektra", "Gecko", "Goanna", "KHTML", "LibWeb", "NetFront", "NetSurf", "Presto", "Servo", "Text",
    "Trident", "WebKit",
];

static VERSION_REGEXES: Lazy<HashMap<&'static str, Regex>> = Lazy::new(|| {
    KNOWN_ENGINES.iter().filter_map(|engine| version_regex(engine).ok().map(|re| (*engine, re))).collect()
});

/// [`EngineVersionMatcher`] that reads `<token>/<version>` style fragments.
///
/// ```text
/// engine  token           example fragment      version
/// WebKit  WebKit          AppleWebKit/537.36    537.36
/// Blink   Chrome|Cronet   Chrome/91.0.4472.124  91.0.4472.124
/// Gecko   rv: ... Gecko/  rv:89.0) Gecko/2010.. 89.0
/// ```
///
/// A bare number (no dot) longer than seven digits is a build stamp, not a
/// version, and is ignored.
#[derive(Debug, Default, Clone, Copy)]
pub struct RegexEngineVersionMatcher;

impl RegexEngineVersionMatcher {
    pub fn new() -> Self {
        Self
    }
}

impl EngineVersionMatcher for RegexEngineVersionMatcher {
    fn match_version(&self, input: &str, engine: &str) -> Option<String> {
        if engine.is_empty() {
            return None;
        }

        if engine == "Gecko" || engine == "Clecko" {
            let gecko = regex!(r"(?i) (?:rv[: ]([0-9.]+)).*(?:g|cl)ecko/[0-9]{8,10}");
            if let Some(version) = gecko.captures(input).and_then(|caps| caps.get(1)) {
                return Some(version.as_str().to_string());
            }
        }

        let version = match VERSION_REGEXES.get(engine) {
            Some(re) => capture_version(re, input),
            None => match version_regex(engine) {
                Ok(re) => capture_version(&re, input),
                Err(err) => {
                    log::debug!("[engine_version:regex_error] engine=\"{}\" error={}", engine, err);
                    None
                }
            },
        };

        version.filter(|v| !v.is_empty())
    }
}

fn capture_version(re: &Regex, input: &str) -> Option<String> {
    re.captures(input).and_then(|caps| caps.get(1)).map(|m| m.as_str().to_string())
}

fn version_regex(engine: &str) -> Result<Regex, regex::Error> {
    let token = ENGINE_TOKENS
        .iter()
        .find(|(name, _)| *name == engine)
        .map(|(_, token)| token.to_string())
        .unwrap_or_else(|| regex::escape(engine));
    Regex::new(&format!(r"(?i)(?:{token})\s*[/_]?\s*(\d+(?:\.\d+)+|\d{{1,7}})(?:\D|$)"))
}
