//! Writes generated HTML files, either replacing them or extending them.
//!
//! Content is handled as bytes: tool output and license text are written
//! exactly as they were read, whatever their encoding.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

/// Writes an HTML page to the given path, creating parent directories as needed.
///
/// An existing file is overwritten.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file cannot be written.
pub fn write_html(path: &Path, content: impl AsRef<[u8]>) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, content)
        .with_context(|| format!("Failed to write HTML: {}", path.display()))?;
    Ok(())
}

/// Appends to an HTML file, creating it if it does not exist yet.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or written.
pub fn append_html(path: &Path, content: impl AsRef<[u8]>) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open HTML for appending: {}", path.display()))?;
    file.write_all(content.as_ref())
        .with_context(|| format!("Failed to append HTML: {}", path.display()))?;
    Ok(())
}

/// Overwrites `path` with `line` followed by a newline.
///
/// # Errors
///
/// See [`write_html`].
pub fn write_line(path: &Path, line: impl AsRef<[u8]>) -> Result<()> {
    write_html(path, terminated(line.as_ref()))
}

/// Appends `line` followed by a newline to `path`.
///
/// # Errors
///
/// See [`append_html`].
pub fn append_line(path: &Path, line: impl AsRef<[u8]>) -> Result<()> {
    append_html(path, terminated(line.as_ref()))
}

fn terminated(line: &[u8]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(line.len() + 1);
    bytes.extend_from_slice(line);
    bytes.push(b'\n');
    bytes
}
