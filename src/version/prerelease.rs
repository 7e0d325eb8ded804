//! Prerelease identifiers and their precedence rules
//!
//! A prerelease is the text after the first `-` of a version string, split on
//! `.`. Identifiers made only of ASCII digits are numeric and compare by value;
//! everything else compares by ordinal string order. At a given position a
//! numeric identifier always sorts before a non-numeric one.

use std::cmp::Ordering;

/// Ordered prerelease identifiers, possibly empty
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Prerelease {
    identifiers: Vec<String>,
}

impl Prerelease {
    /// Split raw prerelease text on `.`.
    ///
    /// Empty text yields an empty prerelease, not a single empty identifier.
    pub fn parse(text: &str) -> Self {
        if text.is_empty() {
            return Self::default();
        }
        Self {
            identifiers: text.split('.').map(str::to_string).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }

    pub fn identifiers(&self) -> &[String] {
        &self.identifiers
    }
}

impl Ord for Prerelease {
    /// A release (no identifiers) ranks above any prerelease of the same core.
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_empty(), other.is_empty()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => self
                .identifiers
                .iter()
                .zip(&other.identifiers)
                .map(|(lhs, rhs)| compare_identifiers(lhs, rhs))
                .find(|ordering| ordering.is_ne())
                .unwrap_or_else(|| self.identifiers.len().cmp(&other.identifiers.len())),
        }
    }
}

impl PartialOrd for Prerelease {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn is_numeric(identifier: &str) -> bool {
    !identifier.is_empty() && identifier.bytes().all(|b| b.is_ascii_digit())
}

fn compare_identifiers(lhs: &str, rhs: &str) -> Ordering {
    match (is_numeric(lhs), is_numeric(rhs)) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        // "01" and "1" are the same number but different identifiers, so the
        // text breaks the tie to keep ordering consistent with equality.
        (true, true) => compare_numeric(lhs, rhs).then_with(|| lhs.cmp(rhs)),
        (false, false) => lhs.cmp(rhs),
    }
}

/// Compare two ASCII digit strings by value without parsing, so identifiers
/// longer than any integer type still order correctly.
fn compare_numeric(lhs: &str, rhs: &str) -> Ordering {
    let lhs = lhs.trim_start_matches('0');
    let rhs = rhs.trim_start_matches('0');
    lhs.len().cmp(&rhs.len()).then_with(|| lhs.cmp(rhs))
}
