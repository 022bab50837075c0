//! Contacts: tenants, owners, suppliers.

use serde::{Deserialize, Serialize};
use tabula::{CellValue, TableRow};

/// A person or company in the address book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub company: Option<String>,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
}

impl Contact {
    /// "Last, First" display name.
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.last_name, self.first_name)
    }
}

impl TableRow for Contact {
    fn field(&self, key: &str) -> Option<CellValue> {
        Some(match key {
            "id" => self.id.as_str().into(),
            "name" => self.display_name().into(),
            "first_name" => self.first_name.as_str().into(),
            "last_name" => self.last_name.as_str().into(),
            "company" => self.company.clone().into(),
            "email" => self.email.as_str().into(),
            "phone" => self.phone.clone().into(),
            _ => return None,
        })
    }
}
