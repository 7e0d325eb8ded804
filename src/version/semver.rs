//! Version value type
//!
//! Parses `major.minor.patch[suffix][-prerelease]` where `suffix` is an
//! alphanumeric tag glued onto the patch number (e.g. the `b` in `1.0.1b`).
//! The suffix is accepted while parsing and plays no part in equality or
//! ordering.

use std::cmp::Ordering;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::version::error::ParseError;
use crate::version::prerelease::Prerelease;

// Anchored at the start only: text after the optional suffix is not checked.
static PATCH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+)([a-zA-Z][\w\-.]*)?").expect("patch pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    prerelease: Prerelease,
}

impl Version {
    /// Parse a version string.
    ///
    /// The input is split on the first `-` only; everything after it is the
    /// prerelease text, dashes included.
    ///
    /// Examples:
    /// - "1.2.3" -> (1, 2, 3, [])
    /// - "1.0.1b" -> (1, 0, 1, [])
    /// - "1.0.0-rc.1-hotfix" -> (1, 0, 0, ["rc", "1-hotfix"])
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let (core, prerelease) = input.split_once('-').unwrap_or((input, ""));

        let segments: Vec<&str> = core.split('.').collect();
        let [major, minor, patch] = segments.as_slice() else {
            return Err(ParseError::MalformedCore(input.to_string()));
        };

        Ok(Self {
            major: parse_major_minor(major)?,
            minor: parse_major_minor(minor)?,
            patch: parse_patch(patch)?,
            prerelease: Prerelease::parse(prerelease),
        })
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    /// Numeric patch; any suffix is not retained
    pub fn patch(&self) -> u64 {
        self.patch
    }

    pub fn prerelease(&self) -> &[String] {
        self.prerelease.identifiers()
    }

    pub fn is_prerelease(&self) -> bool {
        !self.prerelease.is_empty()
    }
}

/// Plain base-10 digits only: no sign, whitespace or separators.
fn parse_major_minor(segment: &str) -> Result<u64, ParseError> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidMajorMinor(segment.to_string()));
    }
    segment
        .parse()
        .map_err(|_| ParseError::InvalidMajorMinor(segment.to_string()))
}

fn parse_patch(segment: &str) -> Result<u64, ParseError> {
    let digits = PATCH_RE
        .captures(segment)
        .and_then(|caps| caps.get(1))
        .ok_or_else(|| ParseError::InvalidPatch(segment.to_string()))?;
    digits
        .as_str()
        .parse()
        .map_err(|_| ParseError::InvalidPatch(segment.to_string()))
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Version {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.patch)
            .cmp(&(other.major, other.minor, other.patch))
            .then_with(|| self.prerelease.cmp(&other.prerelease))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
