//! Browser classification.
//!
//! ## How the parts work together
//!
//! ```text
//! BrowserParser::parse(input)                          (parser.rs)
//!   │  CompiledRules<Rule>::first_match                 (matcher)
//!   │  template::render_name / render_version           (template)
//!   │  BrowserTables::catalog_matches   ── 0..n hits    (tables.rs)
//!   │  resolve_engine(spec, version)                    (resolve.rs)
//!   │      └─ EngineMatcher fallback                    (rendering)
//!   │  resolve_engine_version(engine)                   (resolve.rs)
//!   │      └─ EngineVersionMatcher                      (rendering)
//!   ▼
//! Vec<MatchResult>  (one per catalog hit)
//! ```
//!
//! `BrowserTables` is the read-only catalog configuration. It is built once
//! and shared by `Arc`, so any number of parsers (and threads) can use it.

#[path = "browser/parser.rs"]
mod parser;
#[path = "browser/resolve.rs"]
mod resolve;
#[path = "browser/tables.rs"]
mod tables;

pub use parser::BrowserParser;
pub use resolve::{resolve_engine, resolve_engine_version};
pub use tables::{BrowserFamily, BrowserTables, CatalogEntry};
