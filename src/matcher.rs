//! Ordered rule matching.
//!
//! This module is the shared matching capability used by every classifier in
//! the crate (browsers, rendering engines). A classifier supplies its own rule
//! payload type; the matcher only needs the payload's regex source.
//!
//! ## How the parts work together
//!
//! ```text
//! Vec<R: RulePattern> ── CompiledRules::new ──▶ CompiledRules<R>   (compiled_rules.rs)
//!                                                   │
//! input ─────────────── first_match ────────────────┘
//!                                                   │
//!                                                   ▼
//!                                   Option<RuleMatch { index, rule, captures }>
//! ```
//!
//! Rules are tried strictly in list order and the first hit wins. The matcher
//! never scores or reorders rules: priority is the rule author's list order.
//!
//! ## Responsibilities by module
//!
//! - `compiled_rules.rs`: compiles patterns (case-insensitive, with the client
//!   token-boundary prefix) and performs first-match lookups.
//! - `metrics.rs`: timing and trace data returned by verbose parses.

#[path = "matcher/compiled_rules.rs"]
mod compiled_rules;
#[path = "matcher/metrics.rs"]
mod metrics;

pub use compiled_rules::{CompiledRules, RuleMatch, RulePattern};
pub use metrics::{ParseDetails, ParseResultVerbose};
pub(crate) use metrics::{RunMetrics, RunResult};
