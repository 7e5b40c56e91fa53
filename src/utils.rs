//! Utility functions for label formatting, markup escaping, and file system operations.
//!
//! This module provides helper functions used throughout the crate:
//! - Section-key to human-readable label conversion
//! - HTML escaping of untrusted text
//! - Parent directory preparation for output artifacts

use std::path::Path;
use tracing::debug;

/// Title-case a string word by word.
///
/// A word starts at every alphabetic character that follows a
/// non-alphabetic one. The first letter of each word is uppercased and the
/// rest lowercased, so digits and punctuation act as word boundaries.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(title_case("hello world"), "Hello World");
/// assert_eq!(title_case("DNS records"), "Dns Records");
/// assert_eq!(title_case("ipv4addr"), "Ipv4Addr");
/// ```
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

/// Convert a section key into the label shown in navigation and headings.
///
/// Underscores become spaces and the result is title-cased. The returned
/// string is not escaped.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(readable_label("open_ports"), "Open Ports");
/// ```
pub fn readable_label(key: &str) -> String {
    title_case(&key.replace('_', " "))
}

/// Escape text for insertion into HTML content or a quoted attribute.
///
/// `&`, `<`, `>`, `"` and `'` are replaced by entities.
pub fn escape(text: &str) -> String {
    html_escape::encode_quoted_attribute(text).into_owned()
}

/// Create every missing parent directory of `path`.
///
/// A bare file name has no parent to create and succeeds immediately.
///
/// # Errors
///
/// Returns the underlying I/O error if a directory cannot be created.
pub fn prepare_parent_dir(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            debug!(dir = %parent.display(), "Ensuring output directory exists");
            std::fs::create_dir_all(parent)
        }
        _ => Ok(()),
    }
}
