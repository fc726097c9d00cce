use crate::matcher::{CompiledRules, RulePattern};
use crate::{RuleError, template};

/// Detects a rendering engine name from a raw user-agent string.
pub trait EngineMatcher: Send + Sync {
    /// The detected engine name, or `None` when nothing matched.
    fn match_engine(&self, input: &str) -> Option<String>;
}

/// An engine detection rule: a regex and a name template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineRule {
    pub pattern: String,
    pub name: String,
}

impl EngineRule {
    pub fn new(pattern: impl Into<String>, name: impl Into<String>) -> Self {
        Self { pattern: pattern.into(), name: name.into() }
    }
}

impl RulePattern for EngineRule {
    fn pattern(&self) -> &str {
        &self.pattern
    }
}

/// [`EngineMatcher`] backed by an ordered engine rule list (first match wins).
#[derive(Debug)]
pub struct RuleEngineMatcher {
    rules: CompiledRules<EngineRule>,
}

impl RuleEngineMatcher {
    pub fn new(rules: Vec<EngineRule>) -> Result<Self, RuleError> {
        Ok(Self { rules: CompiledRules::new(rules)? })
    }

    /// Matcher over the built-in engine rules.
    pub fn builtin() -> Result<Self, RuleError> {
        Self::new(crate::rules::engines::get())
    }
}

impl EngineMatcher for RuleEngineMatcher {
    fn match_engine(&self, input: &str) -> Option<String> {
        let hit = self.rules.first_match(input)?;
        let name = template::render_name(&hit.rule.name, &hit.captures);
        log::trace!("[engine:match] rule={} name=\"{}\"", hit.index, name);
        (!name.is_empty()).then_some(name)
    }
}
