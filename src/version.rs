//! Dotted version normalization and comparison.
//!
//! Versions are compared numerically segment by segment, so `12.10 > 12.2`.
//! Missing trailing segments count as zero (`12 == 12.0 == 12.0.0`).

use std::cmp::Ordering;
use std::fmt;

use crate::VersionError;

/// Canonical dotted form used before comparing: drops one trailing `.` and
/// appends `.0` when there is no dot at all.
///
/// ```text
/// "12"   -> "12.0"
/// "12."  -> "12.0"
/// "12.1" -> "12.1"
/// ```
pub fn normalize(version: &str) -> String {
    let version = version.strip_suffix('.').unwrap_or(version);
    if version.contains('.') { version.to_string() } else { format!("{version}.0") }
}

/// Compare two version strings after normalizing both.
pub fn compare(a: &str, b: &str) -> Result<Ordering, VersionError> {
    Ok(Version::parse(a)?.cmp(&Version::parse(b)?))
}

/// A parsed, normalized dotted-numeric version.
#[derive(Debug, Clone)]
pub struct Version {
    parts: Vec<u64>,
}

impl Version {
    pub fn parse(version: &str) -> Result<Self, VersionError> {
        let normalized = normalize(version);
        let parts = normalized
            .split('.')
            .map(|segment| {
                if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
                    return None;
                }
                segment.parse::<u64>().ok()
            })
            .collect::<Option<Vec<u64>>>()
            .ok_or_else(|| VersionError::InvalidFormat { version: version.to_string() })?;
        Ok(Self { parts })
    }

    pub fn parts(&self) -> &[u64] {
        &self.parts
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.parts.len().max(other.parts.len());
        (0..len)
            .map(|i| {
                let left = self.parts.get(i).copied().unwrap_or(0);
                let right = other.parts.get(i).copied().unwrap_or(0);
                left.cmp(&right)
            })
            .find(|ord| *ord != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.parts.iter().map(u64::to_string).collect();
        f.write_str(&parts.join("."))
    }
}

/// How many dotted parts of a detected browser version to keep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VersionTruncation {
    /// Keep the version as rendered.
    #[default]
    None,
    Major,
    Minor,
    Patch,
    Build,
}

impl VersionTruncation {
    fn max_parts(self) -> Option<usize> {
        match self {
            VersionTruncation::None => None,
            VersionTruncation::Major => Some(1),
            VersionTruncation::Minor => Some(2),
            VersionTruncation::Patch => Some(3),
            VersionTruncation::Build => Some(4),
        }
    }

    /// Drop dotted parts beyond the configured limit.
    pub fn apply(self, version: &str) -> String {
        match self.max_parts() {
            Some(max) if version.split('.').count() > max => {
                version.split('.').take(max).collect::<Vec<_>>().join(".")
            }
            _ => version.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_appends_minor_part() {
        assert_eq!(normalize("12"), "12.0");
        assert_eq!(normalize("12."), "12.0");
        assert_eq!(normalize("12.1"), "12.1");
        assert_eq!(normalize("12.1.3"), "12.1.3");
    }

    #[test]
    fn compare_is_numeric_per_segment() {
        assert_eq!(compare("12.10", "12.2"), Ok(Ordering::Greater));
        assert_eq!(compare("9", "10"), Ok(Ordering::Less));
        assert_eq!(compare("28", "28.0.1500"), Ok(Ordering::Less));
    }

    #[test]
    fn compare_pads_missing_segments_with_zero() {
        assert_eq!(compare("12", "12.0.0"), Ok(Ordering::Equal));
        assert_eq!(compare("12.", "12.0"), Ok(Ordering::Equal));
        assert_eq!(Version::parse("4.0.0").unwrap(), Version::parse("4").unwrap());
    }

    #[test]
    fn compare_rejects_non_numeric_versions() {
        let err = compare("5.0b2", "5").unwrap_err();
        assert_eq!(err, VersionError::InvalidFormat { version: "5.0b2".to_string() });
        assert!(compare("", "1").is_err());
        assert!(compare("1..2", "1").is_err());
        assert!(compare("+1.0", "1").is_err());
        assert!(compare("99999999999999999999999.0", "1").is_err());
    }

    #[test]
    fn display_joins_parts() {
        assert_eq!(Version::parse("37.0.2062").unwrap().to_string(), "37.0.2062");
        assert_eq!(Version::parse("15").unwrap().to_string(), "15.0");
    }

    #[test]
    fn truncation_keeps_leading_parts() {
        assert_eq!(VersionTruncation::None.apply("37.0.2062.120"), "37.0.2062.120");
        assert_eq!(VersionTruncation::Major.apply("37.0.2062.120"), "37");
        assert_eq!(VersionTruncation::Minor.apply("37.0.2062.120"), "37.0");
        assert_eq!(VersionTruncation::Patch.apply("37.0.2062.120"), "37.0.2062");
        assert_eq!(VersionTruncation::Build.apply("37.0.2062.120"), "37.0.2062.120");
        assert_eq!(VersionTruncation::Minor.apply("11"), "11");
        assert_eq!(VersionTruncation::Minor.apply(""), "");
    }
}
