//! Built-in demo records.
//!
//! Generated deterministically from the record index so every run shows
//! the same data and stored page/selection positions stay meaningful.

use chrono::{Days, NaiveDate};

use crate::dataset::DataFile;
use crate::records::{
    Bank, Contact, FileEntry, KeyTag, Lease, LeaseStatus, MaintenanceRequest, Priority, Property,
    Reservation, ReservationStatus, Task, TicketStatus,
};

const FIRST_NAMES: &[&str] = &[
    "Anna", "Bram", "Chloé", "Dirk", "Elif", "Femke", "Gert", "Hana", "Ilse", "Jonas", "Kaat",
    "Lotte", "Maarten", "Noor", "Otto", "Pieter", "Roos", "Sven", "Tess", "Wout",
];

const LAST_NAMES: &[&str] = &[
    "Peeters", "Janssens", "Maes", "Jacobs", "Willems", "Claes", "Goossens", "Wouters", "De Smet",
    "Dubois", "Lambert", "Dupont", "Martens", "Verstraete", "Van Damme",
];

const COMPANIES: &[&str] = &["Bouwwerk NV", "Klimaat BV", "Sleutel & Co", "Dakwerken Maes"];

const STREETS: &[&str] = &[
    "Kerkstraat", "Stationsstraat", "Molenstraat", "Schoolstraat", "Dorpsstraat", "Nieuwstraat",
    "Kapelstraat", "Veldstraat",
];

const CITIES: &[&str] = &["Gent", "Antwerpen", "Leuven", "Brugge", "Mechelen", "Hasselt"];

const BUILDINGS: &[&str] = &[
    "Elm Court", "Harbour View", "De Linde", "Parkzicht", "Oude Markt", "Riverside", "Zonnehof",
    "Belfort Lofts", "Het Anker", "Tuinwijk",
];

const ISSUES: &[&str] = &[
    "Leaking tap",
    "Broken intercom",
    "Heating not working",
    "Mould in bathroom",
    "Stuck garage door",
    "Cracked window",
    "Blocked drain",
    "Smoke detector beeping",
];

const CHORES: &[&str] = &[
    "Send rent reminder",
    "Schedule boiler service",
    "Renew insurance",
    "Inspect move-out",
    "Collect key deposit",
    "Update owner report",
];

const BANKS: &[(&str, &str)] = &[
    ("KBC", "KREDBEBB"),
    ("Belfius", "GKCCBEBB"),
    ("ING", "BBRUBEBB"),
    ("BNP Paribas Fortis", "GEBABEBB"),
    ("Argenta", "ARSPBE22"),
];

const FILE_KINDS: &[(&str, &str)] = &[
    ("pdf", "application/pdf"),
    ("jpg", "image/jpeg"),
    ("png", "image/png"),
    ("docx", "application/msword"),
];

fn pick<'a>(items: &[&'a str], i: usize) -> &'a str {
    items[i % items.len()]
}

/// `offset` days after 1 January 2024.
fn day(offset: usize) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .and_then(|d| d.checked_add_days(Days::new(offset as u64)))
        .unwrap_or_default()
}

fn building(i: usize) -> String {
    pick(BUILDINGS, i).to_string()
}

fn person(i: usize) -> String {
    format!("{} {}", pick(FIRST_NAMES, i), pick(LAST_NAMES, i * 7 + 3))
}

pub fn contacts(n: usize) -> Vec<Contact> {
    (0..n)
        .map(|i| {
            let first = pick(FIRST_NAMES, i);
            let last = pick(LAST_NAMES, i * 7 + 3);
            Contact {
                id: format!("c-{:04}", i + 1),
                first_name: first.to_string(),
                last_name: last.to_string(),
                company: (i % 5 == 0).then(|| pick(COMPANIES, i / 5).to_string()),
                email: format!(
                    "{}.{}{}@example.org",
                    first.to_lowercase(),
                    last.to_lowercase().replace(' ', ""),
                    i
                ),
                phone: (i % 3 != 0).then(|| {
                    format!("+32 4{:02} {:02} {:02} {:02}", i % 100, i % 89, i % 71, i % 53)
                }),
            }
        })
        .collect()
}

pub fn properties(n: usize) -> Vec<Property> {
    (0..n)
        .map(|i| Property {
            id: i as i64 + 1,
            name: format!("{} {}", building(i), i / BUILDINGS.len() + 1),
            street: format!("{} {}", pick(STREETS, i * 3), i % 120 + 1),
            city: pick(CITIES, i).to_string(),
            units: (i % 12 + 1) as u32,
            monthly_rent: 650.0 + ((i * 137) % 900) as f64,
        })
        .collect()
}

pub fn leases(n: usize) -> Vec<Lease> {
    (0..n)
        .map(|i| {
            let start = day(i * 5 % 700);
            let status = match i % 6 {
                0 => LeaseStatus::Draft,
                1 => LeaseStatus::Ended,
                _ => LeaseStatus::Active,
            };
            Lease {
                id: format!("L-{:05}", 10_000 + i),
                property: building(i),
                tenant: person(i),
                start,
                end: (status == LeaseStatus::Ended).then(|| day(i * 5 % 700 + 365)),
                rent: 700.0 + ((i * 53) % 600) as f64,
                status,
            }
        })
        .collect()
}

pub fn reservations(n: usize) -> Vec<Reservation> {
    (0..n)
        .map(|i| {
            let check_in = day(i * 3 % 365);
            Reservation {
                id: i as i64 + 1,
                property: building(i * 2),
                guest: person(i + 4),
                check_in,
                check_out: day(i * 3 % 365 + i % 9 + 1),
                status: match i % 7 {
                    0 => ReservationStatus::Cancelled,
                    1 | 2 => ReservationStatus::Pending,
                    _ => ReservationStatus::Confirmed,
                },
            }
        })
        .collect()
}

pub fn maintenance(n: usize) -> Vec<MaintenanceRequest> {
    (0..n)
        .map(|i| MaintenanceRequest {
            id: i as i64 + 1,
            property: building(i * 3),
            title: pick(ISSUES, i).to_string(),
            priority: match i % 8 {
                0 => Priority::Urgent,
                1 | 2 => Priority::High,
                3..=5 => Priority::Normal,
                _ => Priority::Low,
            },
            status: match i % 4 {
                0 => TicketStatus::Resolved,
                1 => TicketStatus::InProgress,
                _ => TicketStatus::Open,
            },
            opened: day(i * 2 % 500),
        })
        .collect()
}

pub fn tasks(n: usize) -> Vec<Task> {
    (0..n)
        .map(|i| Task {
            id: i as i64 + 1,
            title: format!("{}: {}", pick(CHORES, i), building(i)),
            assignee: (i % 4 != 0).then(|| pick(FIRST_NAMES, i * 11).to_string()),
            due: (i % 3 != 0).then(|| day(400 + i % 90)),
            done: i % 5 == 0,
        })
        .collect()
}

pub fn banks(n: usize) -> Vec<Bank> {
    (0..n)
        .map(|i| {
            let (name, bic) = BANKS[i % BANKS.len()];
            Bank {
                id: i as i64 + 1,
                name: format!("{} {}", name, i / BANKS.len() + 1),
                iban: format!("BE{:02}{:012}", 10 + i % 89, 731_000_000_000u64 + i as u64 * 7919),
                bic: bic.to_string(),
                balance: ((i * 7_717) % 250_000) as f64 / 10.0,
            }
        })
        .collect()
}

pub fn keys(n: usize) -> Vec<KeyTag> {
    (0..n)
        .map(|i| KeyTag {
            id: format!("K-{:03}", i + 1),
            label: match i % 4 {
                0 => "Front door",
                1 => "Mailbox",
                2 => "Cellar",
                _ => "Garage",
            }
            .to_string(),
            property: building(i / 4),
            holder: (i % 6 == 0).then(|| person(i)),
        })
        .collect()
}

pub fn files(n: usize) -> Vec<FileEntry> {
    (0..n)
        .map(|i| {
            let (ext, mime) = FILE_KINDS[i % FILE_KINDS.len()];
            FileEntry {
                id: format!("f{:08x}", 0x5eed_0000 + i * 97),
                name: format!("{}-{:03}.{}", building(i).to_lowercase().replace(' ', "-"), i, ext),
                mime: mime.to_string(),
                size_bytes: ((i as u64 * 104_729) % 8_000_000) + 512,
                uploaded: day(i * 4 % 600),
            }
        })
        .collect()
}

/// The full demo dataset.
pub fn dataset() -> DataFile {
    DataFile {
        contacts: contacts(137),
        properties: properties(42),
        leases: leases(88),
        reservations: reservations(64),
        maintenance: maintenance(53),
        tasks: tasks(31),
        banks: banks(6),
        keys: keys(120),
        files: files(75),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use tabula::TableRow;

    use super::*;

    #[test]
    fn test_demo_is_deterministic() {
        assert_eq!(contacts(20), contacts(20));
        assert_eq!(files(10), files(10));
    }

    #[test]
    fn test_demo_keys_are_unique() {
        let data = dataset();
        let ids: HashSet<_> = data.contacts.iter().filter_map(|c| c.key()).collect();
        assert_eq!(ids.len(), data.contacts.len());
        let ids: HashSet<_> = data.files.iter().filter_map(|f| f.key()).collect();
        assert_eq!(ids.len(), data.files.len());
        let ids: HashSet<_> = data.keys.iter().filter_map(|k| k.key()).collect();
        assert_eq!(ids.len(), data.keys.len());
    }

    #[test]
    fn test_demo_reservations_have_nights() {
        assert!(reservations(30).iter().all(|r| r.nights() >= 1));
    }
}
