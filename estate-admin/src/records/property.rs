//! Properties and their physical keys.

use serde::{Deserialize, Serialize};
use tabula::{CellValue, TableRow};

/// A rentable property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: i64,
    pub name: String,
    pub street: String,
    pub city: String,
    pub units: u32,
    /// Combined monthly rent of all units.
    pub monthly_rent: f64,
}

impl TableRow for Property {
    fn field(&self, key: &str) -> Option<CellValue> {
        Some(match key {
            "id" => self.id.into(),
            "name" => self.name.as_str().into(),
            "street" => self.street.as_str().into(),
            "city" => self.city.as_str().into(),
            "units" => self.units.into(),
            "monthly_rent" => self.monthly_rent.into(),
            _ => return None,
        })
    }
}

/// A tagged physical key for a property.
///
/// The key register identifies tags by an upper-case `ID` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyTag {
    #[serde(rename = "ID")]
    pub id: String,
    pub label: String,
    pub property: String,
    #[serde(default)]
    pub holder: Option<String>,
}

impl KeyTag {
    /// Whether someone has the key checked out.
    pub fn is_out(&self) -> bool {
        self.holder.is_some()
    }
}

impl TableRow for KeyTag {
    fn field(&self, key: &str) -> Option<CellValue> {
        Some(match key {
            "ID" => self.id.as_str().into(),
            "label" => self.label.as_str().into(),
            "property" => self.property.as_str().into(),
            "holder" => self.holder.clone().into(),
            "out" => self.is_out().into(),
            _ => return None,
        })
    }
}
