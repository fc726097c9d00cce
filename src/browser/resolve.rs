//! Rendering-engine resolution for a detected browser.
//!
//! ```text
//! EngineSpec.default ──▶ version overrides (ascending) ──▶ EngineMatcher fallback
//! ```
//!
//! Each stage only runs when the previous one left something to decide. An
//! empty engine is a valid outcome.

use crate::version::Version;
use crate::{EngineMatcher, EngineSpec, EngineVersionMatcher};

/// Resolve the engine name for a browser detected at `browser_version`.
///
/// Overrides are sorted by threshold, and the highest threshold the browser
/// version reaches wins. Without a usable version (empty or not
/// dotted-numeric) the overrides are skipped. When the `EngineSpec` yields no engine,
/// `matcher` is asked to detect one from `input`.
pub fn resolve_engine(
    spec: Option<&EngineSpec>,
    browser_version: &str,
    input: &str,
    matcher: &dyn EngineMatcher,
) -> String {
    let engine = engine_from_spec(spec, browser_version);
    if !engine.is_empty() {
        return engine;
    }

    match matcher.match_engine(input) {
        Some(name) => {
            log::debug!("[engine:fallback] engine=\"{}\"", name);
            name
        }
        None => String::new(),
    }
}

/// Resolve the engine version, empty when it cannot be determined.
pub fn resolve_engine_version(engine: &str, input: &str, matcher: &dyn EngineVersionMatcher) -> String {
    matcher.match_version(input, engine).unwrap_or_default()
}

fn engine_from_spec(spec: Option<&EngineSpec>, browser_version: &str) -> String {
    let Some(spec) = spec else {
        return String::new();
    };
    let mut engine = spec.default.clone().unwrap_or_default();

    if spec.versions.is_empty() || browser_version.is_empty() {
        return engine;
    }

    let version = match Version::parse(browser_version) {
        Ok(version) => version,
        Err(err) => {
            log::debug!("[engine:version_skipped] {}", err);
            return engine;
        }
    };

    let mut gates: Vec<(Version, &str)> = spec
        .versions
        .iter()
        .filter_map(|(threshold, name)| match Version::parse(threshold) {
            Ok(threshold) => Some((threshold, name.as_str())),
            Err(err) => {
                log::debug!("[engine:threshold_skipped] {}", err);
                None
            }
        })
        .collect();
    gates.sort_by(|a, b| a.0.cmp(&b.0));

    for (threshold, name) in gates {
        if version >= threshold {
            log::trace!("[engine:override] version={} threshold={} engine=\"{}\"", version, threshold, name);
            engine = name.to_string();
        }
    }

    engine
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedEngine(Option<&'static str>);

    impl EngineMatcher for FixedEngine {
        fn match_engine(&self, _input: &str) -> Option<String> {
            self.0.map(str::to_string)
        }
    }

    struct EchoVersion;

    impl EngineVersionMatcher for EchoVersion {
        fn match_version(&self, _input: &str, engine: &str) -> Option<String> {
            (engine == "Blink").then(|| "91.0".to_string())
        }
    }

    fn spec() -> EngineSpec {
        EngineSpec::new("EngineDefault").with_version("12", "EngineA").with_version("15", "EngineB")
    }

    fn resolve(spec: &EngineSpec, version: &str) -> String {
        resolve_engine(Some(spec), version, "", &FixedEngine(Some("Fallback")))
    }

    #[test]
    fn highest_reached_threshold_wins() {
        let spec = spec();
        assert_eq!(resolve(&spec, "14.0"), "EngineA");
        assert_eq!(resolve(&spec, "16.0"), "EngineB");
        assert_eq!(resolve(&spec, "15"), "EngineB");
        assert_eq!(resolve(&spec, "11.9"), "EngineDefault");
    }

    #[test]
    fn empty_version_skips_overrides() {
        assert_eq!(resolve(&spec(), ""), "EngineDefault");
    }

    #[test]
    fn overrides_are_evaluated_in_ascending_order() {
        let spec = EngineSpec::new("EngineDefault")
            .with_version("15", "EngineB")
            .with_version("3.5", "EngineOld")
            .with_version("12", "EngineA");
        assert_eq!(resolve(&spec, "14.2"), "EngineA");
        assert_eq!(resolve(&spec, "4"), "EngineOld");
        assert_eq!(resolve(&spec, "20.1.1"), "EngineB");
    }

    #[test]
    fn thresholds_compare_numerically() {
        let spec = EngineSpec::new("").with_version("9", "Old").with_version("10", "New");
        assert_eq!(resolve(&spec, "10.0"), "New");
        assert_eq!(resolve(&spec, "9.9"), "Old");
    }

    #[test]
    fn malformed_versions_are_treated_as_missing() {
        let spec = spec();
        assert_eq!(resolve(&spec, "16.0b3"), "EngineDefault");

        let bad_threshold = EngineSpec::new("EngineDefault").with_version("x", "Broken").with_version("12", "EngineA");
        assert_eq!(resolve(&bad_threshold, "13"), "EngineA");
    }

    #[test]
    fn falls_back_to_matcher_when_unresolved() {
        let no_default = EngineSpec::new("").with_version("28", "Blink");
        assert_eq!(resolve(&no_default, "27.0"), "Fallback");
        assert_eq!(resolve(&no_default, "28.0"), "Blink");
        assert_eq!(resolve_engine(None, "1.0", "", &FixedEngine(Some("Gecko"))), "Gecko");
        assert_eq!(resolve_engine(None, "1.0", "", &FixedEngine(None)), "");
    }

    #[test]
    fn engine_version_is_best_effort() {
        assert_eq!(resolve_engine_version("Blink", "", &EchoVersion), "91.0");
        assert_eq!(resolve_engine_version("Gecko", "", &EchoVersion), "");
        assert_eq!(resolve_engine_version("", "", &EchoVersion), "");
    }
}
