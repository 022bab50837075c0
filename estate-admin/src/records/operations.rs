//! Maintenance tickets and back-office tasks.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tabula::{CellValue, TableRow};

/// Urgency of a maintenance ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Normal,
    High,
    Urgent,
}

/// State of a maintenance ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    Open,
    InProgress,
    Resolved,
}

impl TicketStatus {
    pub fn label(self) -> &'static str {
        match self {
            TicketStatus::Open => "open",
            TicketStatus::InProgress => "in progress",
            TicketStatus::Resolved => "resolved",
        }
    }
}

/// A maintenance request for a property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceRequest {
    pub id: i64,
    pub property: String,
    pub title: String,
    pub priority: Priority,
    pub status: TicketStatus,
    pub opened: NaiveDate,
}

impl TableRow for MaintenanceRequest {
    fn field(&self, key: &str) -> Option<CellValue> {
        Some(match key {
            "id" => self.id.into(),
            "property" => self.property.as_str().into(),
            "title" => self.title.as_str().into(),
            // Sorts by urgency rather than alphabetically.
            "priority" => CellValue::Int(self.priority as i64),
            "status" => self.status.label().into(),
            "opened" => self.opened.into(),
            _ => return None,
        })
    }
}

/// A to-do item for the office.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub assignee: Option<String>,
    #[serde(default)]
    pub due: Option<NaiveDate>,
    #[serde(default)]
    pub done: bool,
}

impl TableRow for Task {
    fn field(&self, key: &str) -> Option<CellValue> {
        Some(match key {
            "id" => self.id.into(),
            "title" => self.title.as_str().into(),
            "assignee" => self.assignee.clone().into(),
            "due" => self.due.into(),
            "done" => self.done.into(),
            _ => return None,
        })
    }
}
