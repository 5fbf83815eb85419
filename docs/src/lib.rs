//! Gofem documentation generator.
//!
//! Runs `godoc -html` on every Gofem package, wraps each result in a page
//! shell carrying the project license, repoints local source links at the
//! public repository browser, and writes an index page linking them all.
//!
//! # Entry Point
//!
//! ```no_run
//! use gofem_docs::config::Config;
//! use gofem_docs::runner::{ExternalTool, RunOptions};
//! use gofem_docs::generate;
//!
//! let config = Config::default();
//! let tool = ExternalTool::new(&config.tool, RunOptions::default());
//! generate(&config, &tool).expect("Documentation generation failed");
//! ```
//!
//! # Structure
//!
//! ```text
//! doc/
//!   index.html      ← Links to every package page, in configured order
//!   xxana.html      ← One page per package: header, godoc output, footer
//!   xxshp.html
//!   ... (9 total)
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod config;
pub mod error;
pub mod linker;
pub mod packages;
pub mod renderer;
pub mod report;
pub mod runner;
pub mod writer;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use config::Config;
use error::ToolError;
use packages::Package;
use report::{GenerationReport, PackageReport};
use runner::{CommandOutput, DocTool};

/// Generates the index page and one page per configured package.
///
/// Existing output files are overwritten, so repeated runs over unchanged
/// inputs produce identical files.
///
/// # Errors
///
/// Returns an error if a package id cannot name a file inside the output
/// directory, the license file cannot be read, any output file cannot
/// be written, or (unless `config.keep_going` is set) the documentation tool
/// fails for a package. Tool failures carry a [`ToolError`].
pub fn generate(config: &Config, tool: &dyn DocTool) -> Result<GenerationReport> {
    config.validate()?;
    let license = std::fs::read(&config.license)
        .with_context(|| format!("Failed to read license: {}", config.license.display()))?;
    let footer = renderer::footer(&license);

    let index_path = config.index_path();
    writer::write_line(
        &index_path,
        &renderer::header(&renderer::index_title(&config.project)),
    )?;
    writer::append_line(&index_path, &renderer::index_heading(&config.project))?;
    writer::append_line(&index_path, renderer::index_list_open())?;
    debug!(path = %index_path.display(), "opened index");

    let mut report = GenerationReport {
        index: index_path.clone(),
        packages: Vec::with_capacity(config.packages.len()),
    };

    for pkg in &config.packages {
        let mut entry = generate_package(config, tool, pkg, &footer)?;
        writer::append_line(&index_path, &renderer::package_entry(pkg))?;

        entry.links_rewritten = linker::fix_file(
            &entry.path,
            &config.source_placeholder,
            &pkg.source_url(&config.source_browse_url),
        )?;
        info!(
            package = %pkg.id,
            path = %entry.path.display(),
            links = entry.links_rewritten,
            "generated page"
        );
        report.packages.push(entry);
    }

    writer::append_line(&index_path, renderer::index_list_close())?;
    writer::append_line(&index_path, &footer)?;
    debug!(path = %index_path.display(), entries = report.packages.len(), "closed index");

    Ok(report)
}

/// Documents one package and writes its page (without rewriting links).
fn generate_package(
    config: &Config,
    tool: &dyn DocTool,
    pkg: &Package,
    footer: &[u8],
) -> Result<PackageReport> {
    let module = pkg.module_path(&config.module_prefix);
    let output = document(config, tool, &module)?;

    let path = config.out_dir.join(pkg.file_name());
    writer::write_line(&path, &renderer::package_header(&config.project, pkg))?;
    writer::append_html(&path, &output.stdout)?;
    writer::append_line(&path, footer)?;

    Ok(PackageReport {
        id: pkg.id.clone(),
        module,
        path,
        links_rewritten: 0,
        exit_code: output.code,
        succeeded: output.success,
        stderr: output.stderr,
    })
}

/// Runs the tool for `module`, applying the configured failure policy.
fn document(config: &Config, tool: &dyn DocTool, module: &str) -> Result<CommandOutput> {
    let output = match tool.render(module) {
        Ok(output) => output,
        Err(err) if config.keep_going => {
            warn!(module, error = %err, "documentation tool did not run; page will be empty");
            return Ok(CommandOutput {
                stderr: err.to_string(),
                code: None,
                success: false,
                ..CommandOutput::default()
            });
        }
        Err(err) => return Err(err.into()),
    };

    if !output.success {
        if !config.keep_going {
            return Err(ToolError::Failed {
                program: tool.program().to_string(),
                module: module.to_string(),
                code: output.code,
                stderr: output.stderr,
            }
            .into());
        }
        warn!(module, code = ?output.code, stderr = %output.stderr, "documentation tool failed");
    }
    Ok(output)
}
