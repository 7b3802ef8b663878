//! Command-line interface definitions for javadoc-cleanup

use clap::Parser;
use javadoc_cleanup::CleanupOptions;
use std::path::PathBuf;

/// CLI structure for the javadoc-cleanup application
#[derive(Parser)]
#[command(name = "javadoc-cleanup")]
#[command(version)]
#[command(about = "Tidy the head block of generated javadoc pages", long_about = None)]
pub struct Cli {
    /// Root directory of the generated documentation
    #[arg(value_name = "ROOT")]
    pub root: PathBuf,

    /// Base URL of the documentation site (ignored unless it starts with http)
    #[arg(value_name = "BASE_URL", allow_hyphen_values = true)]
    pub base_url: String,

    /// Extra HTML to insert into every page head (empty for none)
    #[arg(value_name = "EXTRA_BLOCK", allow_hyphen_values = true)]
    pub extra_block: String,
}

impl Cli {
    /// Normalized options for the page editor
    pub fn options(&self) -> CleanupOptions {
        CleanupOptions::from_inputs(&self.base_url, &self.extra_block)
    }
}
