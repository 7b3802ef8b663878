//! Directory walker for discovering and tidying javadoc pages

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use log::{debug, info};

use crate::error::CleanupError;
use crate::page_editor::{self, CleanupOptions};

/// Totals for one run over a documentation tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanupSummary {
    /// Number of `.html` pages visited
    pub scanned: usize,
    /// Number of pages rewritten
    pub modified: usize,
}

/// A page found under the documentation root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageEntry {
    /// Path on disk
    pub path: PathBuf,
    /// Path relative to the root, in `./sub/dir/file.html` form
    pub relative_path: String,
}

/// Find every `.html` file under `root`, ordered by file name
pub fn discover_pages(root: &Path) -> Result<Vec<PageEntry>, CleanupError> {
    let mut pages = Vec::new();

    for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();

        // Suffix match is case-sensitive, so `.HTML` and `.htm` are skipped
        if !path.is_file() || !entry.file_name().to_string_lossy().ends_with(".html") {
            continue;
        }

        pages.push(PageEntry {
            path: path.to_path_buf(),
            relative_path: relative_page_path(path, root),
        });
    }

    Ok(pages)
}

/// Tidy every page under `root`, stopping at the first failure
pub fn walk(root: &Path, options: &CleanupOptions) -> Result<CleanupSummary, CleanupError> {
    let pages = discover_pages(root)?;
    debug!("Found {} pages under {}", pages.len(), root.display());

    let mut summary = CleanupSummary::default();
    for page in &pages {
        summary.scanned += 1;
        if page_editor::edit(&page.path, &page.relative_path, options)? {
            summary.modified += 1;
        }
    }

    info!(
        "Modified {} of {} pages under {}",
        summary.modified,
        summary.scanned,
        root.display()
    );
    Ok(summary)
}

/// Express `path` relative to `root` as `./a/b.html`
fn relative_page_path(path: &Path, root: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let segments = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>();
    format!("./{}", segments.join("/"))
}
