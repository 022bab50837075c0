//! Bank accounts.

use serde::{Deserialize, Serialize};
use tabula::{CellValue, TableRow};

/// A bank account used for rent collection or payouts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bank {
    pub id: i64,
    pub name: String,
    pub iban: String,
    pub bic: String,
    pub balance: f64,
}

impl Bank {
    /// IBAN with all but the last four characters masked.
    pub fn masked_iban(&self) -> String {
        let visible = self.iban.len().saturating_sub(4);
        let tail = self.iban.get(visible..).unwrap_or_default();
        format!("{}{}", "•".repeat(visible.min(8)), tail)
    }
}

impl TableRow for Bank {
    fn field(&self, key: &str) -> Option<CellValue> {
        Some(match key {
            "id" => self.id.into(),
            "name" => self.name.as_str().into(),
            "iban" => self.masked_iban().into(),
            "bic" => self.bic.as_str().into(),
            "balance" => self.balance.into(),
            _ => return None,
        })
    }
}
