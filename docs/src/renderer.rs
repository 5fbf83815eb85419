//! HTML fragments that wrap the tool output into standalone pages.
//!
//! All functions are pure: the license text is passed in explicitly rather
//! than read from shared state. Fragments carry no trailing newline; the
//! orchestrator terminates each one when it writes it.

use crate::packages::Package;

/// Opens a page: `<html>`, the `<head>` with stylesheet and script references,
/// and the `<div id="page">` content container.
///
/// `title` is inserted as-is so callers can use entities such as `&ndash;`.
pub fn header(title: &str) -> String {
    format!(
        r#"<html>
<head>
<meta http-equiv="Content-Type" content="text/html; charset=utf-8">
<title>{title}</title>
<link type="text/css" rel="stylesheet" href="static/style.css">
<script type="text/javascript" src="static/godocs.js"></script>
<style type="text/css"></style>
</head>
<body>
<div id="page">"#
    )
}

/// Closes the content container and appends the footer with the license text verbatim.
///
/// The license is taken as bytes and copied unchanged, whatever its encoding.
pub fn footer(license: &[u8]) -> Vec<u8> {
    const OPEN: &str = "</div><!-- page -->\n<div id=\"footer\">\n<br /><br />\n<hr>\n<pre class=\"copyright\">\n";
    const CLOSE: &str = "</pre><!-- copyright -->\n</div><!-- footer -->\n</body>\n</html>";

    let mut html = Vec::with_capacity(OPEN.len() + license.len() + CLOSE.len());
    html.extend_from_slice(OPEN.as_bytes());
    html.extend_from_slice(license);
    html.extend_from_slice(CLOSE.as_bytes());
    html
}

/// Page header for one package followed by its `<h1>` heading.
///
/// `project`, the identifier and the description are all HTML-escaped.
pub fn package_header(project: &str, pkg: &Package) -> String {
    let project = escape_html(project);
    let id = escape_html(&pkg.id);
    format!(
        "{}<h1>{project} &ndash; <b>{id}</b> &ndash; {description}</h1>",
        header(&format!("{project} &ndash; package {id}")),
        description = escape_html(&pkg.description),
    )
}

/// Index entry linking to a package page.
pub fn package_entry(pkg: &Package) -> String {
    let id = escape_html(&pkg.id);
    format!(
        r#"<dd><a href="{file}"><b>{id}</b>: {description}</a></dd>"#,
        file = escape_html(&pkg.file_name()),
        description = escape_html(&pkg.description),
    )
}

/// Page title of the documentation index, with `project` HTML-escaped.
pub fn index_title(project: &str) -> String {
    format!("{} &ndash; Documentation", escape_html(project))
}

/// Index heading line.
pub fn index_heading(project: &str) -> String {
    format!("<h1>{}</h1>", index_title(project))
}

/// Opens the "Index" section and its definition list.
pub fn index_list_open() -> &'static str {
    "<h2 id=\"pkg-index\">Index</h2>\n<div id=\"manual-nav\">\n<dl>"
}

/// Closes the definition list and the navigation block.
pub fn index_list_close() -> &'static str {
    "</dl>\n</div><!-- manual-nav -->"
}

/// Escapes HTML special characters in a string.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
