//! Rendering-engine detection collaborators.
//!
//! The browser parser resolves engines from its own rule data first and only
//! asks these matchers when that yields nothing (engine name) or always, once
//! the engine is known (engine version). Both are traits so callers can plug in
//! their own engine rule sets; the crate ships rule-based defaults.

#[path = "rendering/name.rs"]
mod name;
#[path = "rendering/version.rs"]
mod version;

pub use name::{EngineMatcher, EngineRule, RuleEngineMatcher};
pub use version::{EngineVersionMatcher, RegexEngineVersionMatcher};
