//! Property-management admin dashboard: list screens over the `tabula`
//! table engine, with per-route stored preferences.

pub mod app;
pub mod config;
pub mod console;
pub mod dataset;
pub mod demo;
pub mod error;
pub mod filter;
pub mod paths;
pub mod prefs;
pub mod records;
pub mod render;
pub mod screen;

pub use app::{AdminApp, Reply};
pub use config::{AdminConfig, Cli};
pub use error::{AdminError, Result};
