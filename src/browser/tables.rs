use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::TableError;
use crate::rules::tables::{AVAILABLE_BROWSERS, BROWSER_FAMILIES, MOBILE_ONLY_BROWSERS};

static BUILTIN: Lazy<Arc<BrowserTables>> = Lazy::new(|| {
    let catalog = AVAILABLE_BROWSERS.iter().map(|(code, name)| CatalogEntry::new(*code, *name)).collect();
    let families = BROWSER_FAMILIES
        .iter()
        .map(|(name, codes)| BrowserFamily::new(*name, codes.iter().map(|c| c.to_string())))
        .collect();
    Arc::new(BrowserTables::from_parts(catalog, families, MOBILE_ONLY_BROWSERS.iter().map(|c| c.to_string())))
});

const UNKNOWN_FAMILY: &str = "Unknown";

/// A catalog row: a unique two-character code and its display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    short_code: String,
    name: String,
    folded_name: String,
}

impl CatalogEntry {
    pub fn new(short_code: impl Into<String>, name: impl Into<String>) -> Self {
        let name = name.into();
        Self { short_code: short_code.into(), folded_name: name.to_lowercase(), name }
    }

    pub fn short_code(&self) -> &str {
        &self.short_code
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A named group of related browsers (for example every Chromium derivative).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserFamily {
    pub name: String,
    pub short_codes: Vec<String>,
}

impl BrowserFamily {
    pub fn new(name: impl Into<String>, short_codes: impl IntoIterator<Item = String>) -> Self {
        Self { name: name.into(), short_codes: short_codes.into_iter().collect() }
    }

    pub fn contains(&self, short_code: &str) -> bool {
        self.short_codes.iter().any(|c| c == short_code)
    }
}

/// Read-only browser catalog configuration.
///
/// Holds the canonical catalog (short code ↔ display name), the family table
/// and the mobile-only set. Catalog and family order are kept as supplied.
#[derive(Debug, Clone)]
pub struct BrowserTables {
    catalog: Vec<CatalogEntry>,
    families: Vec<BrowserFamily>,
    mobile_only: HashSet<String>,
}

impl BrowserTables {
    /// Build tables from custom data.
    ///
    /// Short codes must be exactly two characters and unique. Display names
    /// may repeat: a repeated name makes one detection fan out into several
    /// results.
    pub fn new(
        catalog: Vec<CatalogEntry>,
        families: Vec<BrowserFamily>,
        mobile_only: impl IntoIterator<Item = String>,
    ) -> Result<Self, TableError> {
        let mut seen = HashSet::new();
        for entry in &catalog {
            if entry.short_code.chars().count() != 2 {
                return Err(TableError::MalformedShortCode(entry.short_code.clone()));
            }
            if !seen.insert(entry.short_code.as_str()) {
                return Err(TableError::DuplicateShortCode(entry.short_code.clone()));
            }
        }
        Ok(Self::from_parts(catalog, families, mobile_only))
    }

    fn from_parts(
        catalog: Vec<CatalogEntry>,
        families: Vec<BrowserFamily>,
        mobile_only: impl IntoIterator<Item = String>,
    ) -> Self {
        Self { catalog, families, mobile_only: mobile_only.into_iter().collect() }
    }

    /// The built-in tables, shared process-wide.
    pub fn builtin() -> Arc<Self> {
        Arc::clone(&BUILTIN)
    }

    pub fn catalog(&self) -> &[CatalogEntry] {
        &self.catalog
    }

    /// Snapshot of the catalog as `short code -> display name`.
    pub fn available_browsers(&self) -> BTreeMap<&str, &str> {
        self.catalog.iter().map(|e| (e.short_code(), e.name())).collect()
    }

    pub fn families(&self) -> &[BrowserFamily] {
        &self.families
    }

    pub fn display_name(&self, short_code: &str) -> Option<&str> {
        self.catalog.iter().find(|e| e.short_code == short_code).map(CatalogEntry::name)
    }

    /// Every catalog entry whose display name equals `name`, ignoring case.
    ///
    /// All hits are returned, in catalog order.
    pub fn catalog_matches(&self, name: &str) -> Vec<&CatalogEntry> {
        if name.is_empty() {
            return Vec::new();
        }
        let folded = name.to_lowercase();
        self.catalog.iter().filter(|e| e.folded_name == folded).collect()
    }

    /// Family containing `short_code`, or `("Unknown", false)`.
    pub fn browser_family(&self, short_code: &str) -> (&str, bool) {
        self.families
            .iter()
            .find(|family| family.contains(short_code))
            .map(|family| (family.name.as_str(), true))
            .unwrap_or((UNKNOWN_FAMILY, false))
    }

    /// Whether `identifier` (a short code, or a legacy display-name lookup
    /// through the catalog) denotes a mobile-only browser.
    pub fn is_mobile_only(&self, identifier: &str) -> bool {
        self.mobile_only.contains(identifier)
            || self.display_name(identifier).is_some_and(|name| self.mobile_only.contains(name))
    }
}
