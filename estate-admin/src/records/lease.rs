//! Leases and short-stay reservations.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tabula::{CellValue, TableRow};

/// Lifecycle of a lease.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaseStatus {
    Draft,
    Active,
    Ended,
}

impl LeaseStatus {
    pub fn label(self) -> &'static str {
        match self {
            LeaseStatus::Draft => "draft",
            LeaseStatus::Active => "active",
            LeaseStatus::Ended => "ended",
        }
    }
}

/// A long-term rental contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lease {
    pub id: String,
    pub property: String,
    pub tenant: String,
    pub start: NaiveDate,
    #[serde(default)]
    pub end: Option<NaiveDate>,
    pub rent: f64,
    pub status: LeaseStatus,
}

impl TableRow for Lease {
    fn field(&self, key: &str) -> Option<CellValue> {
        Some(match key {
            "id" => self.id.as_str().into(),
            "property" => self.property.as_str().into(),
            "tenant" => self.tenant.as_str().into(),
            "start" => self.start.into(),
            "end" => self.end.into(),
            "rent" => self.rent.into(),
            "status" => self.status.label().into(),
            _ => return None,
        })
    }
}

/// State of a reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl ReservationStatus {
    pub fn label(self) -> &'static str {
        match self {
            ReservationStatus::Pending => "pending",
            ReservationStatus::Confirmed => "confirmed",
            ReservationStatus::Cancelled => "cancelled",
        }
    }
}

/// A short-stay booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: i64,
    pub property: String,
    pub guest: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub status: ReservationStatus,
}

impl Reservation {
    /// Number of nights booked.
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days().max(0)
    }
}

impl TableRow for Reservation {
    fn field(&self, key: &str) -> Option<CellValue> {
        Some(match key {
            "id" => self.id.into(),
            "property" => self.property.as_str().into(),
            "guest" => self.guest.as_str().into(),
            "check_in" => self.check_in.into(),
            "check_out" => self.check_out.into(),
            "nights" => self.nights().into(),
            "status" => self.status.label().into(),
            _ => return None,
        })
    }
}
