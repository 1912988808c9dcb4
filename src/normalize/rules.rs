//! Rewrite rules applied to a parsed documentation page.
//!
//! Every rule targets markup that differs between two builds of the same
//! sources made with different generator releases, and rewrites it to a
//! single canonical form:
//!
//! - the `<!-- Generated with Sphinx ... -->` signature loses its version
//! - heading/image permalink anchors get the older "Permalink to this ..."
//!   title and a plain `#` body
//! - `?v=<hex>` / `?digest=<hex>` cache busters are dropped from stylesheet
//!   `href`s and script `src`s
//! - `data-content_root` on `<html>`, and `data-url_root` / `id` on
//!   `<script>`, are removed
//!
//! All rules are idempotent: a page that has already been normalized comes
//! out unchanged.

use std::ops::AddAssign;

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::node::{Element, Text};
use scraper::{Html, Node};

/// Comments starting with this text carry the generator signature.
pub const GENERATOR_COMMENT_PREFIX: &str = " Generated with Sphinx";

/// Replacement text for any generator-signature comment.
pub const CANONICAL_GENERATOR_COMMENT: &str = " Generated with Sphinx ";

/// Body text of a rewritten permalink anchor.
pub const PERMALINK_PLACEHOLDER: &str = "#";

/// Anchor `title` values that are rewritten, paired with their canonical form.
pub const PERMALINK_TITLES: [(&str, &str); 2] = [
    ("Link to this heading", "Permalink to this heading"),
    ("Link to this image", "Permalink to this image"),
];

/// Attributes dropped from `<html>`.
pub const HTML_DROPPED_ATTRS: &[&str] = &["data-content_root"];

/// Attributes dropped from `<script>`.
pub const SCRIPT_DROPPED_ATTRS: &[&str] = &["data-url_root", "id"];

static VERSIONED_QUERY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.*)\?(v|digest)=[0-9a-f]+$").expect("versioned query regex"));

/// Counts of the rewrites made to one or more documents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteStats {
    /// Generator comments canonicalized
    pub comments: usize,
    /// Permalink anchors retitled
    pub permalinks: usize,
    /// Cache-busting query strings stripped
    pub queries_stripped: usize,
    /// Attributes removed outright
    pub attributes_removed: usize,
}

impl RewriteStats {
    /// Total number of individual rewrites
    pub fn total(&self) -> usize {
        self.comments + self.permalinks + self.queries_stripped + self.attributes_removed
    }
}

impl AddAssign for RewriteStats {
    fn add_assign(&mut self, rhs: Self) {
        self.comments += rhs.comments;
        self.permalinks += rhs.permalinks;
        self.queries_stripped += rhs.queries_stripped;
        self.attributes_removed += rhs.attributes_removed;
    }
}

/// Return the base URL if `value` ends in a `?v=<hex>` or `?digest=<hex>`
/// cache buster, `None` otherwise.
///
/// Only lowercase hex digests are recognized.
///
/// ```
/// use devaids::normalize::strip_version_query;
///
/// assert_eq!(strip_version_query("_static/basic.css?v=686e5160"), Some("_static/basic.css"));
/// assert_eq!(strip_version_query("_static/basic.css"), None);
/// ```
pub fn strip_version_query(value: &str) -> Option<&str> {
    VERSIONED_QUERY
        .captures(value)
        .and_then(|caps| caps.get(1))
        .map(|base| base.as_str())
}

/// Apply every rewrite rule to `html` in place.
pub fn normalize_html(html: &mut Html) -> RewriteStats {
    let mut stats = RewriteStats::default();

    // Node ids are stable across mutation, so collect them up front and
    // revisit each through `get_mut`.
    let ids: Vec<_> = html.tree.nodes().map(|node| node.id()).collect();

    for id in ids {
        let Some(mut node) = html.tree.get_mut(id) else {
            continue;
        };

        let relabel = match node.value() {
            Node::Comment(comment) => {
                if comment.starts_with(GENERATOR_COMMENT_PREFIX)
                    && &**comment != CANONICAL_GENERATOR_COMMENT
                {
                    comment.comment = CANONICAL_GENERATOR_COMMENT.into();
                    stats.comments += 1;
                }
                false
            }
            Node::Element(element) => rewrite_element(element, &mut stats),
            _ => false,
        };

        if relabel {
            while let Some(mut child) = node.first_child() {
                child.detach();
            }
            node.append(Node::Text(Text {
                text: PERMALINK_PLACEHOLDER.into(),
            }));
        }
    }

    stats
}

/// Rewrite one element's attributes. Returns `true` when the element's
/// children must be replaced with the permalink placeholder.
fn rewrite_element(element: &mut Element, stats: &mut RewriteStats) -> bool {
    match element.name() {
        "a" => retitle_permalink(element, stats),
        "link" => {
            strip_attr_query(element, "href", stats);
            false
        }
        "html" => {
            remove_attrs(element, HTML_DROPPED_ATTRS, stats);
            false
        }
        "script" => {
            remove_attrs(element, SCRIPT_DROPPED_ATTRS, stats);
            strip_attr_query(element, "src", stats);
            false
        }
        _ => false,
    }
}

fn retitle_permalink(element: &mut Element, stats: &mut RewriteStats) -> bool {
    let Some(title) = element.attr("title") else {
        return false;
    };
    let Some(&(_, canonical)) = PERMALINK_TITLES.iter().find(|(from, _)| *from == title) else {
        return false;
    };

    for (key, value) in element.attrs.iter_mut() {
        if &*key.local == "title" {
            *value = canonical.into();
        }
    }
    stats.permalinks += 1;
    true
}

fn strip_attr_query(element: &mut Element, name: &str, stats: &mut RewriteStats) {
    for (key, value) in element.attrs.iter_mut() {
        if &*key.local != name {
            continue;
        }
        if let Some(base) = strip_version_query(&**value) {
            let base = base.to_owned();
            *value = base.as_str().into();
            stats.queries_stripped += 1;
        }
    }
}

fn remove_attrs(element: &mut Element, names: &[&str], stats: &mut RewriteStats) {
    let before = element.attrs.len();
    element.attrs.retain(|key, _| !names.contains(&&*key.local));
    stats.attributes_removed += before - element.attrs.len();
}
