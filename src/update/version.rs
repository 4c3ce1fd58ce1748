//! update::version
//!
//! Dotted version comparison for update notices.
//!
//! Pre-release and build suffixes are ignored: `1.2.0-rc.1` compares as
//! `1.2.0`. Missing components count as zero.

use std::cmp::Ordering;

/// Parse `v1.2.3-beta` into `[1, 2, 3]`.
pub fn parse(version: &str) -> Option<Vec<u64>> {
    let trimmed = version.trim().trim_start_matches('v');
    let core = trimmed.split(['-', '+']).next()?;
    if core.is_empty() {
        return None;
    }
    core.split('.').map(|part| part.parse().ok()).collect()
}

/// Compare two versions; `None` if either cannot be parsed.
pub fn compare(a: &str, b: &str) -> Option<Ordering> {
    let (a, b) = (parse(a)?, parse(b)?);
    let len = a.len().max(b.len());
    let at = |v: &[u64], i: usize| v.get(i).copied().unwrap_or(0);
    Some(
        (0..len)
            .map(|i| at(&a, i).cmp(&at(&b, i)))
            .find(|o| o.is_ne())
            .unwrap_or(Ordering::Equal),
    )
}

/// Whether `candidate` is strictly newer than `current`.
pub fn is_newer(candidate: &str, current: &str) -> bool {
    compare(candidate, current) == Some(Ordering::Greater)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parse_forms() {
        assert_eq!(parse("1.2.3"), Some(vec![1, 2, 3]));
        assert_eq!(parse("v0.10"), Some(vec![0, 10]));
        assert_eq!(parse("2.0.0-rc.1+build5"), Some(vec![2, 0, 0]));
        assert_eq!(parse(""), None);
        assert_eq!(parse("one.two"), None);
    }

    #[test]
    fn numeric_not_lexicographic() {
        assert!(is_newer("0.10.0", "0.9.9"));
        assert!(!is_newer("0.9.9", "0.10.0"));
    }

    #[test]
    fn missing_components_are_zero() {
        assert_eq!(compare("1.2", "1.2.0"), Some(Ordering::Equal));
        assert!(is_newer("1.2.1", "1.2"));
    }

    #[test]
    fn garbage_is_never_newer() {
        assert!(!is_newer("latest", "0.1.0"));
        assert!(!is_newer("0.2.0", "???"));
    }

    proptest! {
        #[test]
        fn newer_is_asymmetric(a in proptest::collection::vec(0u64..50, 1..4),
                               b in proptest::collection::vec(0u64..50, 1..4)) {
            let render = |v: &[u64]| v.iter().map(|n| n.to_string()).collect::<Vec<_>>().join(".");
            let (a, b) = (render(&a), render(&b));
            prop_assert!(!(is_newer(&a, &b) && is_newer(&b, &a)));
            prop_assert!(!is_newer(&a, &a));
        }
    }
}
