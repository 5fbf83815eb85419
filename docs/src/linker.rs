//! Rewrites local source links emitted by the documentation tool.
//!
//! `godoc -html` links declarations to `/src/target/<file>#L<n>`, which only
//! resolves on a running godoc server. The rewrite points them at the public
//! source browser instead. Pages are treated as bytes so text in other
//! encodings survives the rewrite untouched.

use std::path::Path;

use anyhow::{Context, Result};

/// Replaces every occurrence of `placeholder` in `html` with `replacement`.
///
/// Returns the rewritten bytes and the number of replacements made.
pub fn rewrite_source_links(
    html: &[u8],
    placeholder: &str,
    replacement: &str,
) -> (Vec<u8>, usize) {
    let needle = placeholder.as_bytes();
    if needle.is_empty() {
        return (html.to_vec(), 0);
    }

    let mut out = Vec::with_capacity(html.len());
    let mut count = 0;
    let mut rest = html;
    while let Some(at) = find(rest, needle) {
        out.extend_from_slice(&rest[..at]);
        out.extend_from_slice(replacement.as_bytes());
        rest = &rest[at + needle.len()..];
        count += 1;
    }
    out.extend_from_slice(rest);
    (out, count)
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Rewrites source links in the file at `path` in place.
///
/// The file is left untouched when it contains no placeholder.
///
/// # Errors
///
/// Returns an error if the file cannot be read or written back.
pub fn fix_file(path: &Path, placeholder: &str, replacement: &str) -> Result<usize> {
    let html =
        std::fs::read(path).with_context(|| format!("Failed to read HTML: {}", path.display()))?;
    let (rewritten, count) = rewrite_source_links(&html, placeholder, replacement);
    if count > 0 {
        std::fs::write(path, rewritten)
            .with_context(|| format!("Failed to write HTML: {}", path.display()))?;
    }
    Ok(count)
}
