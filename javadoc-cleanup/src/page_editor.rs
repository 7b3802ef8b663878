//! In-place editing of the head block of a single javadoc page
//!
//! A page is only touched when it carries the javadoc generator comment.
//! Two edits are applied, at most one per pass:
//!
//! 1. A timestamped generator comment is rewritten to its canonical form.
//! 2. A cleanup block (viewport meta tag, optional canonical link, optional
//!    caller-supplied HTML) is inserted right after `<head>`.
//!
//! The cleanup block is delimited by fixed start/end comments so that a page
//! which already has one is recognized and left alone.

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use log::{debug, info};
use thiserror::Error;

use crate::error::CleanupError;
use crate::url_resolver;

const HEAD_TAG: &str = "<head>";
const GENERATOR_PREFIX: &str = "<!-- Generated by javadoc";
const GENERATOR_COMMENT: &str = "<!-- Generated by javadoc -->";
const CLEANUP_START: &str = "<!-- GitHub action javadoc-cleanup -->";
const CLEANUP_END: &str = "<!-- End javadoc-cleanup block -->";
const VIEWPORT_META: &str =
    r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#;

/// Normalized inputs shared by every page of a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanupOptions {
    /// Root URL of the documentation site, used for canonical links
    pub base_url: Option<String>,

    /// Extra HTML inserted into the cleanup block of every page
    pub extra_block: Option<String>,
}

impl CleanupOptions {
    /// Build options from raw command-line inputs.
    ///
    /// The base URL is trimmed and kept only if it starts with `http`.
    /// An empty extra block means no extra block.
    pub fn from_inputs(base_url: &str, extra_block: &str) -> Self {
        let base_url = base_url.trim();
        Self {
            base_url: base_url.starts_with("http").then(|| base_url.to_string()),
            extra_block: (!extra_block.is_empty()).then(|| extra_block.to_string()),
        }
    }
}

/// What a single tidy pass did to a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TidyOutcome {
    /// Not a javadoc page, or already cleaned up
    Untouched,
    /// The generator comment carried a timestamp and was canonicalized
    TimestampRemoved,
    /// The cleanup block was inserted after `<head>`
    BlockInserted,
}

impl TidyOutcome {
    /// Whether the page contents changed
    pub fn is_modified(self) -> bool {
        !matches!(self, Self::Untouched)
    }
}

/// The page has a generator comment but no `<head>` line to anchor the block
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("no <head> line found")]
pub struct HeadNotFound;

/// One HTML file's contents as lines, each keeping its own terminator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    lines: Vec<String>,
}

impl Page {
    /// Split file contents into lines without dropping line endings
    pub fn parse(contents: &str) -> Self {
        Self {
            lines: contents.split_inclusive('\n').map(String::from).collect(),
        }
    }

    /// The page lines, terminators included
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Reassemble the page into file contents
    pub fn to_contents(&self) -> String {
        self.lines.concat()
    }

    /// Apply one tidy pass to the page.
    ///
    /// A non-canonical generator comment is rewritten and the pass stops
    /// there, so such a page needs a second pass to receive the cleanup block.
    pub fn tidy(
        &mut self,
        canonical_url: Option<&str>,
        extra_block: Option<&str>,
    ) -> Result<TidyOutcome, HeadNotFound> {
        let mut head_index = None;
        let mut generated_by_javadoc = false;

        for (i, line) in self.lines.iter_mut().enumerate() {
            let trimmed = line.trim();
            if trimmed == HEAD_TAG {
                head_index = Some(i);
            } else if trimmed.starts_with(GENERATOR_PREFIX) {
                if trimmed != GENERATOR_COMMENT {
                    *line = format!("{}\n", GENERATOR_COMMENT);
                    return Ok(TidyOutcome::TimestampRemoved);
                }
                generated_by_javadoc = true;
            }
        }

        if !generated_by_javadoc {
            return Ok(TidyOutcome::Untouched);
        }

        let head_index = head_index.ok_or(HeadNotFound)?;
        let already_cleaned = self
            .lines
            .get(head_index + 1)
            .is_some_and(|next| next.trim() == CLEANUP_START);
        if already_cleaned {
            return Ok(TidyOutcome::Untouched);
        }

        let at = head_index + 1;
        self.lines.splice(at..at, cleanup_block(canonical_url, extra_block));
        Ok(TidyOutcome::BlockInserted)
    }
}

/// Lines of the cleanup block, in insertion order
fn cleanup_block(canonical_url: Option<&str>, extra_block: Option<&str>) -> Vec<String> {
    let mut block = vec![format!("{}\n", CLEANUP_START)];

    if let Some(url) = canonical_url {
        block.push(format!("<link rel=\"canonical\" href=\"{}\">\n", url));
    }

    block.push(format!("{}\n", VIEWPORT_META));

    if let Some(extra) = extra_block {
        let mut extra = extra.to_string();
        if !extra.ends_with('\n') {
            extra.push('\n');
        }
        block.push(extra);
    }

    block.push(format!("{}\n", CLEANUP_END));
    block
}

/// Tidy one page on disk, rewriting it only if something changed.
///
/// # Parameters
/// * `path` - Location of the page on disk
/// * `relative_path` - Page path relative to the documentation root, in
///   `./sub/dir/file.html` form, used to build the canonical URL
/// * `options` - Base URL and extra block for this run
///
/// # Returns
/// * `Ok(true)` - The page was modified and written back
/// * `Ok(false)` - The page was left untouched
/// * `Err(CleanupError)` - The page could not be read or written, or has a
///   generator comment without a `<head>` line
pub fn edit(
    path: &Path,
    relative_path: &str,
    options: &CleanupOptions,
) -> Result<bool, CleanupError> {
    let mut file = OpenOptions::new()
        .read(true)
        .write(true)
        .open(path)
        .map_err(|e| CleanupError::io(path, e))?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| CleanupError::io(path, e))?;

    let canonical_url = options
        .base_url
        .as_deref()
        .map(|base| url_resolver::resolve(relative_path, base));

    let mut page = Page::parse(&contents);
    let outcome = page
        .tidy(canonical_url.as_deref(), options.extra_block.as_deref())
        .map_err(|HeadNotFound| CleanupError::MissingHead {
            path: path.to_path_buf(),
        })?;

    if !outcome.is_modified() {
        debug!("Unchanged: {}", path.display());
        return Ok(false);
    }

    rewrite(&mut file, &page.to_contents()).map_err(|e| CleanupError::io(path, e))?;

    info!("{:?}: {}", outcome, path.display());
    Ok(true)
}

/// Replace the whole contents of an open file
fn rewrite(file: &mut File, contents: &str) -> std::io::Result<()> {
    file.seek(SeekFrom::Start(0))?;
    file.set_len(0)?;
    file.write_all(contents.as_bytes())?;
    file.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    const JAVADOC_PAGE: &str = "<!DOCTYPE HTML>\n\
        <html lang=\"en\">\n\
        <head>\n\
        <!-- Generated by javadoc -->\n\
        <title>Overview</title>\n\
        </head>\n\
        <body></body>\n\
        </html>\n";

    fn tidy(
        contents: &str,
        canonical: Option<&str>,
        extra: Option<&str>,
    ) -> (TidyOutcome, String) {
        let mut page = Page::parse(contents);
        let outcome = page.tidy(canonical, extra).unwrap();
        (outcome, page.to_contents())
    }

    #[test]
    fn test_parse_keeps_line_endings() {
        let page = Page::parse("a\r\nb\nc");
        assert_eq!(page.lines(), &["a\r\n", "b\n", "c"]);
        assert_eq!(page.to_contents(), "a\r\nb\nc");
    }

    #[test]
    fn test_page_without_generator_comment_is_untouched() {
        let contents = "<html>\n<head>\n<title>Plain</title>\n</head>\n</html>\n";
        let (outcome, after) = tidy(contents, Some("https://x.io/"), Some("<x>"));
        assert_eq!(outcome, TidyOutcome::Untouched);
        assert_eq!(after, contents);
    }

    #[test]
    fn test_inserts_full_block_in_order() {
        let (outcome, after) = tidy(
            JAVADOC_PAGE,
            Some("https://x.io/"),
            Some("<link rel=\"icon\" href=\"/favicon.ico\">"),
        );
        assert_eq!(outcome, TidyOutcome::BlockInserted);

        let page = Page::parse(&after);
        assert_eq!(
            &page.lines()[2..9],
            &[
                "<head>\n",
                "<!-- GitHub action javadoc-cleanup -->\n",
                "<link rel=\"canonical\" href=\"https://x.io/\">\n",
                "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
                "<link rel=\"icon\" href=\"/favicon.ico\">\n",
                "<!-- End javadoc-cleanup block -->\n",
                "<!-- Generated by javadoc -->\n",
            ]
        );
    }

    #[test]
    fn test_optional_lines_omitted() {
        let (_, after) = tidy(JAVADOC_PAGE, None, None);
        let page = Page::parse(&after);
        assert_eq!(
            &page.lines()[3..6],
            &[
                "<!-- GitHub action javadoc-cleanup -->\n",
                "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
                "<!-- End javadoc-cleanup block -->\n",
            ]
        );
    }

    #[test]
    fn test_extra_block_keeps_existing_newline() {
        let (_, after) = tidy(JAVADOC_PAGE, None, Some("<a>\n<b>\n"));
        assert!(after.contains("<a>\n<b>\n<!-- End javadoc-cleanup block -->\n"));
    }

    #[test]
    fn test_empty_extra_block_becomes_blank_line() {
        let (_, after) = tidy(JAVADOC_PAGE, None, Some(""));
        assert!(after.contains("initial-scale=1\">\n\n<!-- End javadoc-cleanup block -->\n"));
    }

    #[test]
    fn test_second_pass_is_untouched() {
        let (_, once) = tidy(JAVADOC_PAGE, Some("https://x.io/"), None);
        let (outcome, twice) = tidy(&once, Some("https://x.io/"), None);
        assert_eq!(outcome, TidyOutcome::Untouched);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_timestamp_removed_without_inserting_block() {
        let contents = JAVADOC_PAGE.replace(
            "<!-- Generated by javadoc -->",
            "  <!-- Generated by javadoc (17) on Mon Jan 02 10:00:00 UTC 2023 -->",
        );
        let (outcome, after) = tidy(&contents, None, None);
        assert_eq!(outcome, TidyOutcome::TimestampRemoved);
        assert_eq!(after, JAVADOC_PAGE);

        let (outcome, _) = tidy(&after, None, None);
        assert_eq!(outcome, TidyOutcome::BlockInserted);
    }

    #[test]
    fn test_last_head_line_is_the_anchor() {
        let contents = "<head>\n<x>\n<head>\n<!-- Generated by javadoc -->\n</head>\n";
        let (_, after) = tidy(contents, None, None);
        let page = Page::parse(&after);
        assert_eq!(page.lines()[2], "<head>\n");
        assert_eq!(page.lines()[3], "<!-- GitHub action javadoc-cleanup -->\n");
    }

    #[test]
    fn test_indented_head_and_marker_are_recognized() {
        let contents = "  <head>\n  <!-- GitHub action javadoc-cleanup -->\n<!-- Generated by javadoc -->\n";
        let (outcome, after) = tidy(contents, None, None);
        assert_eq!(outcome, TidyOutcome::Untouched);
        assert_eq!(after, contents);
    }

    #[test]
    fn test_head_as_last_line_gets_block() {
        let contents = "<!-- Generated by javadoc -->\n<head>\n";
        let (outcome, after) = tidy(contents, None, None);
        assert_eq!(outcome, TidyOutcome::BlockInserted);
        assert!(after.ends_with("<head>\n<!-- GitHub action javadoc-cleanup -->\n\
            <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
            <!-- End javadoc-cleanup block -->\n"));
    }

    #[test]
    fn test_missing_head_is_an_error() {
        let mut page = Page::parse("<html>\n<!-- Generated by javadoc -->\n</html>\n");
        assert_eq!(page.tidy(None, None), Err(HeadNotFound));
    }

    #[test]
    fn test_options_from_inputs() {
        let options = CleanupOptions::from_inputs("  https://x.io/ \n", "");
        assert_eq!(options.base_url.as_deref(), Some("https://x.io/"));
        assert_eq!(options.extra_block, None);

        let options = CleanupOptions::from_inputs("ftp://x.io/", "<x>");
        assert_eq!(options.base_url, None);
        assert_eq!(options.extra_block.as_deref(), Some("<x>"));

        assert_eq!(CleanupOptions::from_inputs("", ""), CleanupOptions::default());
    }
}
