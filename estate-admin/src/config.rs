//! Application configuration.

use std::path::PathBuf;

use clap::Parser;
use simplelog::LevelFilter;
use tabula::DEFAULT_PAGE_SIZE_OPTIONS;
use thiserror::Error;

use crate::paths;
use crate::screen::ScreenKind;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("page size must be at least 1")]
    ZeroPageSize,
    #[error("page size options must not be empty")]
    NoPageSizeOptions,
    #[error("no data directory available; use --memory-prefs")]
    NoDataDir,
}

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "estate-admin", about = "Property management list screens")]
pub struct Cli {
    /// Screen to open first (contacts, properties, leases, ...)
    pub screen: Option<ScreenKind>,

    /// JSON dataset to load instead of the built-in demo data
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// Keep list preferences in memory only
    #[arg(long)]
    pub memory_prefs: bool,

    /// Rows per page for screens without stored preferences
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Debug logging
    #[arg(long)]
    pub debug: bool,
}

/// Runtime configuration for the dashboard.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// Page size for routes without stored preferences.
    pub default_page_size: usize,

    /// Choices offered by the page-size selector.
    pub page_size_options: Vec<usize>,

    /// Log level for the file logger.
    pub log_level: LevelFilter,

    /// Preferences database. `None` keeps preferences in memory.
    pub prefs_db: Option<PathBuf>,

    /// Dataset file. `None` uses demo data.
    pub data_file: Option<PathBuf>,

    /// Screen shown at startup.
    pub start_screen: ScreenKind,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE_OPTIONS[0],
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
            log_level: LevelFilter::Info,
            prefs_db: None,
            data_file: None,
            start_screen: ScreenKind::Contacts,
        }
    }
}

impl AdminConfig {
    /// Build a configuration from parsed arguments.
    ///
    /// Without `--memory-prefs` the preferences database lives in the
    /// platform data directory.
    pub fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(size) = cli.page_size {
            config = config.page_size(size);
        }
        if let Some(screen) = cli.screen {
            config = config.start_screen(screen);
        }
        if let Some(path) = cli.data {
            config = config.data_file(path);
        }
        if cli.debug {
            config = config.log_level(LevelFilter::Debug);
        }
        if !cli.memory_prefs {
            config = config.prefs_db(paths::prefs_db().ok_or(ConfigError::NoDataDir)?);
        }
        config.validate()?;
        Ok(config)
    }

    /// Set the default page size.
    pub fn page_size(mut self, size: usize) -> Self {
        self.default_page_size = size;
        self
    }

    /// Set the page-size choices.
    pub fn page_size_options(mut self, options: impl Into<Vec<usize>>) -> Self {
        self.page_size_options = options.into();
        self
    }

    /// Set the log level.
    pub fn log_level(mut self, level: LevelFilter) -> Self {
        self.log_level = level;
        self
    }

    /// Persist preferences to a database file.
    pub fn prefs_db(mut self, path: impl Into<PathBuf>) -> Self {
        self.prefs_db = Some(path.into());
        self
    }

    /// Load records from a JSON file.
    pub fn data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_file = Some(path.into());
        self
    }

    /// Set the startup screen.
    pub fn start_screen(mut self, screen: ScreenKind) -> Self {
        self.start_screen = screen;
        self
    }

    /// Check the values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_page_size == 0 || self.page_size_options.contains(&0) {
            return Err(ConfigError::ZeroPageSize);
        }
        if self.page_size_options.is_empty() {
            return Err(ConfigError::NoPageSizeOptions);
        }
        Ok(())
    }
}
