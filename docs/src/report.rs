//! Record of what a documentation run produced.

use std::path::PathBuf;

use anyhow::Result;
use serde::Serialize;

/// Outcome for one package page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageReport {
    /// Package identifier.
    pub id: String,
    /// Module path the tool documented.
    pub module: String,
    /// Generated page.
    pub path: PathBuf,
    /// Source links rewritten to the public browser.
    pub links_rewritten: usize,
    /// Tool exit code, `None` if it was killed or never started.
    pub exit_code: Option<i32>,
    /// Whether the tool run succeeded.
    pub succeeded: bool,
    /// Trimmed tool standard error.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub stderr: String,
}

/// Outcome of a whole run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    /// Generated index page.
    pub index: PathBuf,
    /// Per-package outcomes, in index order.
    pub packages: Vec<PackageReport>,
}

impl GenerationReport {
    /// Number of packages whose tool run failed.
    pub fn failures(&self) -> usize {
        self.packages.iter().filter(|p| !p.succeeded).count()
    }

    /// Returns true if every tool run succeeded.
    pub fn all_succeeded(&self) -> bool {
        self.failures() == 0
    }

    /// Serializes the report as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
