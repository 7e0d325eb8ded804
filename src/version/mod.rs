//! Version parsing and ordering
//!
//! Versions follow `major.minor.patch[suffix][-prerelease]`, a semver dialect
//! that tolerates an alphanumeric suffix glued onto the patch number
//! (`1.0.1b`). The suffix is accepted but ignored when comparing.
//!
//! # Modules
//!
//! - [`semver`]: The `Version` value type, its parser and total order
//! - [`prerelease`]: Prerelease identifiers and their precedence rules
//! - [`select`]: Sorting and latest-version helpers over string lists
//! - [`error`]: Parse error taxonomy

pub mod error;
pub mod prerelease;
pub mod select;
pub mod semver;

pub use error::ParseError;
pub use semver::Version;
