//! Highlighting of the navigation link for the current page

use crate::dom::Dom;

/// Class added to the link matching the current page
pub const ACTIVE_CLASS: &str = "is-active";

/// Lower-case a path and fold a trailing `/index.html` or `/index.htm` into
/// its directory.
pub fn normalize_path(path: &str) -> String {
    let lower = path.to_lowercase();
    for index in ["/index.html", "/index.htm"] {
        if let Some(dir) = lower.strip_suffix(index) {
            return format!("{dir}/");
        }
    }
    lower
}

/// Whether a link target points at the current page
pub fn is_active_target(current_path: &str, href: &str) -> bool {
    let target = normalize_path(href);
    !target.is_empty() && normalize_path(current_path).ends_with(&target)
}

/// Flag every link carrying `nav_attribute` whose `href` matches the current
/// path. Runs once at load; several links may match. Returns the ids flagged.
pub fn mark_active_links<D: Dom>(
    dom: &mut D,
    current_path: &str,
    nav_attribute: &str,
) -> Vec<String> {
    let mut flagged = Vec::new();
    for link in dom.elements_with_attribute(nav_attribute) {
        let href = dom.attribute(&link, "href").unwrap_or_default();
        if is_active_target(current_path, &href) {
            dom.set_class(&link, ACTIVE_CLASS, true);
            flagged.push(link);
        }
    }
    flagged
}
