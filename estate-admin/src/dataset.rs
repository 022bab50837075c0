//! Loading records from a JSON file.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::records::{
    Bank, Contact, FileEntry, KeyTag, Lease, MaintenanceRequest, Property, Reservation, Task,
};

/// Dataset loading errors.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("could not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid dataset {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// All records of the dashboard, one array per list route.
///
/// Missing arrays load as empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DataFile {
    pub contacts: Vec<Contact>,
    pub properties: Vec<Property>,
    pub leases: Vec<Lease>,
    pub reservations: Vec<Reservation>,
    pub maintenance: Vec<MaintenanceRequest>,
    pub tasks: Vec<Task>,
    pub banks: Vec<Bank>,
    pub keys: Vec<KeyTag>,
    pub files: Vec<FileEntry>,
}

impl DataFile {
    /// Read and parse a dataset file.
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let text = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let data = Self::from_json(&text).map_err(|source| DatasetError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        log::info!("Loaded {} records from {}", data.len(), path.display());
        Ok(data)
    }

    /// Parse a dataset from JSON text.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Total records across all routes.
    pub fn len(&self) -> usize {
        self.contacts.len()
            + self.properties.len()
            + self.leases.len()
            + self.reservations.len()
            + self.maintenance.len()
            + self.tasks.len()
            + self.banks.len()
            + self.keys.len()
            + self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
