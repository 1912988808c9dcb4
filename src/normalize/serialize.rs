//! Whole-document serialization.
//!
//! `ElementRef::html` only covers one element, so the doctype and any
//! comments sitting beside `<html>` are written here directly.

use scraper::{ElementRef, Html, Node};

/// Elements whose first newline is swallowed by the parser.
const LEADING_NEWLINE_ELEMENTS: &[&str] = &["pre", "textarea", "listing"];

/// Serialize the complete document: doctype, top-level comments and the
/// `<html>` element, in tree order.
///
/// Parsing then serializing the output again yields the same text.
pub fn serialize_document(html: &mut Html) -> String {
    restore_leading_newlines(html);

    let mut out = String::new();
    for child in html.tree.root().children() {
        match child.value() {
            Node::Doctype(doctype) => {
                out.push_str("<!DOCTYPE ");
                out.push_str(doctype.name());
                out.push('>');
            }
            Node::Comment(comment) => {
                out.push_str("<!--");
                out.push_str(comment);
                out.push_str("-->");
            }
            Node::Text(text) => push_escaped(&mut out, text),
            Node::Element(_) => {
                if let Some(element) = ElementRef::wrap(child) {
                    out.push_str(&element.html());
                }
            }
            _ => {}
        }
    }
    out
}

// The parser drops one LF right after `<pre>`; when the content itself starts
// with a blank line, write that LF back so it survives the next parse.
fn restore_leading_newlines(html: &mut Html) {
    let targets: Vec<_> = html
        .tree
        .nodes()
        .filter(|node| {
            matches!(node.value(), Node::Element(e) if LEADING_NEWLINE_ELEMENTS.contains(&e.name()))
        })
        .filter_map(|node| node.first_child())
        .filter(|first| matches!(first.value(), Node::Text(t) if t.starts_with('\n')))
        .map(|first| first.id())
        .collect();

    for id in targets {
        if let Some(mut node) = html.tree.get_mut(id) {
            if let Node::Text(text) = node.value() {
                let restored = format!("\n{}", &**text);
                text.text = restored.as_str().into();
            }
        }
    }
}

fn push_escaped(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            _ => out.push(ch),
        }
    }
}
