//! Top-level error type.

use thiserror::Error;

use crate::config::ConfigError;
use crate::dataset::DatasetError;
use crate::prefs::PrefsError;

#[derive(Debug, Error)]
pub enum AdminError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    #[error("preferences: {0}")]
    Prefs(#[from] PrefsError),
    #[error("logger: {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AdminError>;
