//! Package descriptors: the documentable units of the Gofem source tree.

use serde::{Deserialize, Serialize};

/// One documentable package: a short identifier plus a human-readable description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Package {
    /// Short identifier, also the last segment of the package's import path (e.g. `fem`).
    pub id: String,
    /// One-line description shown in the page heading and the index.
    pub description: String,
}

impl Package {
    /// Creates a descriptor from an identifier and a description.
    pub fn new(id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
        }
    }

    /// Name of the generated page, relative to the output directory: `xx<id>.html`.
    pub fn file_name(&self) -> String {
        format!("xx{}.html", self.id)
    }

    /// Fully-qualified module path handed to the documentation tool.
    pub fn module_path(&self, module_prefix: &str) -> String {
        format!("{}/{}", module_prefix.trim_end_matches('/'), self.id)
    }

    /// Whether the id can name a page directly inside the output directory:
    /// non-empty and free of path separators.
    pub fn has_valid_id(&self) -> bool {
        !self.id.is_empty() && !self.id.contains(['/', '\\'])
    }

    /// Public source-browser URL that replaces local source links in this package's page.
    pub fn source_url(&self, browse_url: &str) -> String {
        format!("{}/{}", browse_url.trim_end_matches('/'), self.id)
    }
}

/// The Gofem packages, in index order.
pub fn gofem() -> Vec<Package> {
    [
        ("ana", "analytical solutions for comparisons"),
        ("shp", "shape structures and quadrature points"),
        ("inp", "input data structures. simulation, materials, meshes"),
        ("msolid", "models for solids"),
        ("mconduct", "models for liquid/gas conductivity in porous media"),
        ("mreten", "models for liquid retention in porous media"),
        ("mporous", "models for porous media"),
        ("fem", "finite element method"),
        ("out", "results analyses and plotting"),
    ]
    .into_iter()
    .map(|(id, description)| Package::new(id, description))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gofem_list_is_fixed_and_ordered() {
        let ids: Vec<String> = gofem().into_iter().map(|p| p.id).collect();
        assert_eq!(
            ids,
            ["ana", "shp", "inp", "msolid", "mconduct", "mreten", "mporous", "fem", "out"]
        );
    }

    #[test]
    fn ids_must_stay_inside_the_output_directory() {
        assert!(Package::new("mporous", "").has_valid_id());
        assert!(Package::new("..", "").has_valid_id());
        assert!(!Package::new("", "").has_valid_id());
        assert!(!Package::new("../x", "").has_valid_id());
        assert!(!Package::new("a\\b", "").has_valid_id());
        assert!(gofem().iter().all(Package::has_valid_id));
    }

    #[test]
    fn derived_paths() {
        let pkg = Package::new("ana", "analytical solutions for comparisons");
        assert_eq!(pkg.file_name(), "xxana.html");
        assert_eq!(
            pkg.module_path("github.com/cpmech/gofem"),
            "github.com/cpmech/gofem/ana"
        );
        assert_eq!(
            pkg.source_url("https://github.com/cpmech/gofem/blob/master/"),
            "https://github.com/cpmech/gofem/blob/master/ana"
        );
    }
}
