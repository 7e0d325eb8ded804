//! Release-gating helpers over lists of version strings
//!
//! Entries that fail to parse are skipped with a warning, so a single bad tag
//! in a list never hides the rest.

use tracing::warn;

use crate::version::semver::Version;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareResult {
    Latest,
    Outdated,
    Newer,
    Invalid,
}

/// Parse every entry, keeping the original text next to the parsed value.
pub fn parse_versions<S: AsRef<str>>(versions: &[S]) -> Vec<(String, Version)> {
    versions
        .iter()
        .map(AsRef::as_ref)
        .filter_map(|text| match Version::parse(text) {
            Ok(version) => Some((text.to_string(), version)),
            Err(e) => {
                warn!("Skipping invalid version '{}': {}", text, e);
                None
            }
        })
        .collect()
}

/// Sort ascending. Equal versions keep their input order.
pub fn sort_versions<S: AsRef<str>>(versions: &[S]) -> Vec<String> {
    let mut parsed = parse_versions(versions);
    parsed.sort_by(|(_, a), (_, b)| a.cmp(b));
    parsed.into_iter().map(|(text, _)| text).collect()
}

/// Sort ascending and keep only the first spelling of each equal version.
///
/// "1.0.1" and "1.0.1b" are the same version, so only the one listed first
/// survives.
pub fn dedup_versions<S: AsRef<str>>(versions: &[S]) -> Vec<String> {
    let mut parsed = parse_versions(versions);
    parsed.sort_by(|(_, a), (_, b)| a.cmp(b));
    parsed.dedup_by(|(_, later), (_, earlier)| later == earlier);
    parsed.into_iter().map(|(text, _)| text).collect()
}

/// Greatest version in the list, optionally ignoring prereleases.
pub fn latest_version<S: AsRef<str>>(versions: &[S], include_prerelease: bool) -> Option<String> {
    parse_versions(versions)
        .into_iter()
        .filter(|(_, v)| include_prerelease || !v.is_prerelease())
        .max_by(|(_, a), (_, b)| a.cmp(b))
        .map(|(text, _)| text)
}

/// Compare the current version to the latest known one
pub fn compare_to_latest(current_version: &str, latest_version: &str) -> CompareResult {
    let Ok(current) = Version::parse(current_version).inspect_err(|e| {
        warn!("Failed to parse current version '{}': {}", current_version, e);
    }) else {
        return CompareResult::Invalid;
    };

    let Ok(latest) = Version::parse(latest_version).inspect_err(|e| {
        warn!("Failed to parse latest version '{}': {}", latest_version, e);
    }) else {
        return CompareResult::Invalid;
    };

    match current.cmp(&latest) {
        std::cmp::Ordering::Less => CompareResult::Outdated,
        std::cmp::Ordering::Equal => CompareResult::Latest,
        std::cmp::Ordering::Greater => CompareResult::Newer,
    }
}

/// Greatest available version accepted by `filter`, if it is newer than
/// `current`.
fn calculate_latest_where<S, F>(
    current_version: &str,
    available_versions: &[S],
    filter: F,
) -> Option<String>
where
    S: AsRef<str>,
    F: Fn(&Version, &Version) -> bool,
{
    let current = Version::parse(current_version).ok()?;

    let (text, latest) = parse_versions(available_versions)
        .into_iter()
        .filter(|(_, v)| filter(&current, v))
        .max_by(|(_, a), (_, b)| a.cmp(b))?;

    (latest > current).then_some(text)
}

/// Calculate the latest patch version within the same major.minor
///
/// Returns the latest patch version if a newer patch exists,
/// or None if the current version is already the latest patch.
pub fn calculate_latest_patch<S: AsRef<str>>(
    current_version: &str,
    available_versions: &[S],
) -> Option<String> {
    calculate_latest_where(current_version, available_versions, |current, v| {
        v.major() == current.major() && v.minor() == current.minor()
    })
}

/// Calculate the latest minor version within the same major
///
/// Returns the latest minor.patch version if a newer minor exists,
/// or None if the current version is already the latest minor.
pub fn calculate_latest_minor<S: AsRef<str>>(
    current_version: &str,
    available_versions: &[S],
) -> Option<String> {
    calculate_latest_where(current_version, available_versions, |current, v| {
        v.major() == current.major()
    })
}

/// Calculate the latest major version
///
/// Returns the latest version if a newer major version exists,
/// or None if the current version is already the latest.
pub fn calculate_latest_major<S: AsRef<str>>(
    current_version: &str,
    available_versions: &[S],
) -> Option<String> {
    calculate_latest_where(current_version, available_versions, |_, _| true)
}
