//! Documentation-build comparator.
//!
//! Mirrors every `.html` file under an input root into an output root,
//! passing each page through [`rules::normalize_html`]. Normalizing two
//! builds of the same sources and diffing the results shows only the
//! changes that matter:
//!
//! ```text
//! compare-doc-html html-0 html-0a
//! compare-doc-html html-1 html-1a
//! diff -Naur html-0a html-1a
//! ```

pub mod rules;
pub mod serialize;

pub use rules::{normalize_html, strip_version_query, RewriteStats};
pub use serialize::serialize_document;

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use scraper::Html;
use walkdir::WalkDir;

use crate::{Error, Result};

/// Outcome of mirroring a whole tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeSummary {
    /// Number of `.html` files written under the output root
    pub files_written: usize,
    /// Rewrites made across all files
    pub rewrites: RewriteStats,
}

/// Normalize one page of markup and serialize it back to HTML.
///
/// Malformed markup is parsed permissively; parse errors are only logged.
pub fn normalize_document(source: &str) -> (String, RewriteStats) {
    let mut html = Html::parse_document(source);
    if !html.errors.is_empty() {
        debug!("Tolerated {} parse errors", html.errors.len());
    }
    let stats = normalize_html(&mut html);
    (serialize_document(&mut html), stats)
}

/// Normalize `input` and write the result to `output`, creating the parent
/// directories of `output` as needed.
pub fn normalize_file(input: &Path, output: &Path) -> Result<RewriteStats> {
    let source = fs::read_to_string(input).map_err(|e| Error::io(input, e))?;
    let (normalized, stats) = normalize_document(&source);

    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    fs::write(output, normalized).map_err(|e| Error::io(output, e))?;

    debug!("{} -> {} ({} rewrites)", input.display(), output.display(), stats.total());
    Ok(stats)
}

/// List every regular `.html` file under `root`, in sorted order.
///
/// Entries the walker cannot read are logged and skipped.
pub fn html_files(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(Error::InputNotFound(root.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                warn!("Skipping unreadable entry: {}", err);
                continue;
            }
        };

        if entry.file_type().is_file() && entry.path().extension() == Some(OsStr::new("html")) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

/// Mirror every `.html` file under `input_root` into `output_root`,
/// normalized. Relative paths are preserved.
///
/// # Example
///
/// ```no_run
/// let summary = devaids::normalize::normalize_tree("build/html-0", "build/html-0a")?;
/// assert!(summary.files_written > 0);
/// # Ok::<(), devaids::Error>(())
/// ```
pub fn normalize_tree(
    input_root: impl AsRef<Path>,
    output_root: impl AsRef<Path>,
) -> Result<NormalizeSummary> {
    let input_root = input_root.as_ref();
    let output_root = output_root.as_ref();
    let mut summary = NormalizeSummary::default();

    for path in html_files(input_root)? {
        let Ok(relative) = path.strip_prefix(input_root) else {
            warn!("{} is outside {}", path.display(), input_root.display());
            continue;
        };
        summary.rewrites += normalize_file(&path, &output_root.join(relative))?;
        summary.files_written += 1;
    }

    info!(
        "Normalized {} files from {} into {} ({} rewrites)",
        summary.files_written,
        input_root.display(),
        output_root.display(),
        summary.rewrites.total()
    );
    Ok(summary)
}
