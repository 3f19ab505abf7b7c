//! # Shared Utility Functions
//!
//! Helpers used by both the web crate and the preview host.
//!
//! ## Destinations
//!
//! - [`destination_kind`] - Classify a link destination
//!
//! ## Copyright
//!
//! - [`copyright_line`] - Format the footer copyright text
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{destination_kind, DestinationKind};
//!
//! assert_eq!(destination_kind("/services#cloud"), DestinationKind::Anchor);
//! assert_eq!(destination_kind("https://github.com/intelik"), DestinationKind::External);
//! ```

use serde::Serialize;

/// How a link destination is resolved.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DestinationKind {
    /// Site-relative path, e.g. `/about`
    Path,
    /// Site-relative path with a fragment, e.g. `/services#cloud`
    Anchor,
    /// Absolute `http(s)://` URL
    External,
    /// Anything else; left to the router
    Unknown,
}

/// Classify a destination string.
///
/// # Examples
///
/// ```rust
/// use shared::utils::{destination_kind, DestinationKind};
///
/// assert_eq!(destination_kind("/about"), DestinationKind::Path);
/// assert_eq!(destination_kind("/services#ai-automation"), DestinationKind::Anchor);
/// assert_eq!(destination_kind("mailto:hi@intelik.com"), DestinationKind::Unknown);
/// ```
pub fn destination_kind(href: &str) -> DestinationKind {
    if href.starts_with("https://") || href.starts_with("http://") {
        DestinationKind::External
    } else if href.starts_with('/') {
        match href.split_once('#') {
            Some((_, fragment)) if !fragment.is_empty() => DestinationKind::Anchor,
            _ => DestinationKind::Path,
        }
    } else {
        DestinationKind::Unknown
    }
}

/// Format the copyright line shown in the footer's bottom bar.
///
/// ```rust
/// use shared::utils::copyright_line;
///
/// assert_eq!(copyright_line("Intelik", 2030), "© 2030 Intelik. All rights reserved.");
/// ```
pub fn copyright_line(holder: &str, year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, holder)
}
