//! javadoc-cleanup - tidies generated javadoc pages in place
//!
//! Walks a directory of javadoc HTML output and, for every page produced by
//! javadoc, strips the timestamp from the generator comment and inserts a
//! cleanup block into the page head: a mobile viewport meta tag, an optional
//! canonical link, and optional caller-supplied HTML.

#![deny(unsafe_code)]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(clippy::all))]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(clippy::pedantic))]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(missing_docs))]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

pub mod error;
pub mod page_editor;
pub mod url_resolver;
pub mod walker;

pub use error::CleanupError;
pub use page_editor::{edit, CleanupOptions, Page, TidyOutcome};
pub use url_resolver::resolve;
pub use walker::{walk, CleanupSummary};
