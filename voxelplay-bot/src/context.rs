//! Explicit process context handed to every component.

use std::fmt::Display;
use std::sync::Arc;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use voxelplay_client::VoxelApi;
use voxelplay_types::models::BotConfig;

const PROGRESS_TEMPLATE: &str = "{msg} [{bar:30.cyan/blue}] {pos}/{len} accounts ({elapsed})";

/// Console sink: banner, summary tables and the per-account progress bar.
#[derive(Debug, Clone, Copy)]
pub struct Console {
    quiet: bool,
}

impl Console {
    pub fn stdout() -> Self {
        Self { quiet: false }
    }

    /// Console that prints nothing and draws hidden progress bars.
    #[cfg(test)]
    pub fn hidden() -> Self {
        Self { quiet: true }
    }

    pub fn print(&self, content: impl Display) {
        if !self.quiet {
            println!("{}", content);
        }
    }

    pub fn banner(&self) {
        let line = "═".repeat(46);
        self.print(format!("╔{}╗", line).cyan());
        self.print(format!("  {}", "VoxelPlay Bot - Automated Tasks".bold()));
        self.print("  Automates daily VoxelPlay account tasks");
        self.print(format!("  v{}", env!("CARGO_PKG_VERSION")).dimmed());
        self.print(format!("╚{}╝", line).cyan());
    }

    pub fn progress_bar(&self, len: u64) -> ProgressBar {
        if self.quiet {
            return ProgressBar::hidden();
        }
        let style = ProgressStyle::with_template(PROGRESS_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> ");
        ProgressBar::new(len).with_style(style).with_message("Processing")
    }
}

/// Everything a batch needs, built once in `main`.
#[derive(Clone)]
pub struct BotContext {
    pub config: Arc<BotConfig>,
    pub api: Arc<dyn VoxelApi>,
    pub console: Console,
}

impl BotContext {
    pub fn new(config: BotConfig, api: Arc<dyn VoxelApi>, console: Console) -> Self {
        Self { config: Arc::new(config), api, console }
    }
}
