//! Typed records shown by the list screens.
//!
//! Each record arrives already fetched (as JSON) and is read by the table
//! only through [`TableRow::field`](tabula::TableRow::field).

mod contact;
mod files;
mod finance;
mod lease;
mod operations;
mod property;

pub use contact::Contact;
pub use files::FileEntry;
pub use finance::Bank;
pub use lease::{Lease, LeaseStatus, Reservation, ReservationStatus};
pub use operations::{MaintenanceRequest, Priority, Task, TicketStatus};
pub use property::{KeyTag, Property};
