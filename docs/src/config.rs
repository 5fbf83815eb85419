//! Generator settings: where things go, which tool runs, which packages are documented.
//!
//! Every field has a default matching the Gofem repository layout, so an empty
//! TOML file (or no file at all) reproduces the stock documentation run.
//!
//! ```toml
//! out_dir = "public/doc"
//! keep_going = true
//!
//! [tool]
//! program = "godoc"
//! args = ["-html"]
//!
//! [[packages]]
//! id = "fem"
//! description = "finite element method"
//! ```

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::packages::{self, Package};

/// The external documentation tool and its leading arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolConfig {
    /// Program to execute (looked up on `PATH`).
    pub program: String,
    /// Arguments placed before the module path.
    pub args: Vec<String>,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            program: String::from("godoc"),
            args: vec![String::from("-html")],
        }
    }
}

/// Complete configuration for one documentation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory receiving `index.html` and the per-package pages.
    pub out_dir: PathBuf,
    /// License file embedded verbatim in every page footer.
    pub license: PathBuf,
    /// Project name used in titles and headings.
    pub project: String,
    /// Import-path prefix; the tool is run on `<module_prefix>/<id>`.
    pub module_prefix: String,
    /// Local source-link prefix emitted by the tool.
    pub source_placeholder: String,
    /// Public source-browser prefix; links become `<source_browse_url>/<id>`.
    pub source_browse_url: String,
    /// External documentation tool.
    pub tool: ToolConfig,
    /// Continue past tool failures instead of stopping at the first one.
    pub keep_going: bool,
    /// Packages to document, in index order.
    pub packages: Vec<Package>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("doc"),
            license: PathBuf::from("LICENSE"),
            project: String::from("Gofem"),
            module_prefix: String::from("github.com/cpmech/gofem"),
            source_placeholder: String::from("/src/target"),
            source_browse_url: String::from("https://github.com/cpmech/gofem/blob/master"),
            tool: ToolConfig::default(),
            keep_going: false,
            packages: packages::gofem(),
        }
    }
}

impl Config {
    /// Loads a configuration from a TOML file; missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file cannot be read,
    /// [`ConfigError::Parse`] if it is not a valid configuration and
    /// [`ConfigError::InvalidPackageId`] if a package id is unusable as a file name.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every package id names a page inside `out_dir`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPackageId`] for the first id that is
    /// empty or contains a path separator.
    pub fn validate(&self) -> Result<()> {
        match self.packages.iter().find(|p| !p.has_valid_id()) {
            Some(pkg) => Err(ConfigError::InvalidPackageId(pkg.id.clone()).into()),
            None => Ok(()),
        }
    }

    /// Path of the generated index page.
    pub fn index_path(&self) -> PathBuf {
        self.out_dir.join("index.html")
    }

    /// Restricts the package list to `ids`, preserving the configured order.
    ///
    /// An empty `ids` slice leaves the list untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownPackage`] for the first id not in the list.
    pub fn select(&mut self, ids: &[String]) -> Result<()> {
        if ids.is_empty() {
            return Ok(());
        }
        if let Some(unknown) = ids
            .iter()
            .find(|id| !self.packages.iter().any(|p| &p.id == *id))
        {
            return Err(ConfigError::UnknownPackage(unknown.clone()).into());
        }
        self.packages.retain(|p| ids.contains(&p.id));
        Ok(())
    }
}
