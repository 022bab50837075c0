//! The dashboard's list routes.

use serde::{Deserialize, Serialize};
use tabula::{Alignment, Column};

/// A list screen of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenKind {
    Contacts,
    Properties,
    Leases,
    Reservations,
    Maintenance,
    Tasks,
    Banks,
    Keys,
    Files,
}

impl ScreenKind {
    pub const ALL: [ScreenKind; 9] = [
        ScreenKind::Contacts,
        ScreenKind::Properties,
        ScreenKind::Leases,
        ScreenKind::Reservations,
        ScreenKind::Maintenance,
        ScreenKind::Tasks,
        ScreenKind::Banks,
        ScreenKind::Keys,
        ScreenKind::Files,
    ];

    /// Route key, also used to scope stored preferences.
    pub fn route(self) -> &'static str {
        match self {
            ScreenKind::Contacts => "contacts",
            ScreenKind::Properties => "properties",
            ScreenKind::Leases => "leases",
            ScreenKind::Reservations => "reservations",
            ScreenKind::Maintenance => "maintenance",
            ScreenKind::Tasks => "tasks",
            ScreenKind::Banks => "banks",
            ScreenKind::Keys => "keys",
            ScreenKind::Files => "files",
        }
    }

    /// Screen title.
    pub fn title(self) -> &'static str {
        match self {
            ScreenKind::Contacts => "Contacts",
            ScreenKind::Properties => "Properties",
            ScreenKind::Leases => "Leases",
            ScreenKind::Reservations => "Reservations",
            ScreenKind::Maintenance => "Maintenance requests",
            ScreenKind::Tasks => "Tasks",
            ScreenKind::Banks => "Bank accounts",
            ScreenKind::Keys => "Key register",
            ScreenKind::Files => "Files",
        }
    }

    /// Column definitions for this screen.
    pub fn columns(self) -> Vec<Column> {
        match self {
            ScreenKind::Contacts => vec![
                Column::new("name", "Name").width(24).sortable(),
                Column::new("company", "Company").width(18).sortable(),
                Column::new("email", "Email").width(28),
                Column::new("phone", "Phone").width(14),
            ],
            ScreenKind::Properties => vec![
                Column::new("name", "Name").width(22).sortable(),
                Column::new("street", "Street").width(24),
                Column::new("city", "City").width(12).sortable(),
                Column::new("units", "Units").width(5).align(Alignment::Right).sortable(),
                Column::new("monthly_rent", "Rent/mo")
                    .width(10)
                    .align(Alignment::Right)
                    .sortable(),
            ],
            ScreenKind::Leases => vec![
                Column::new("id", "Lease").width(8),
                Column::new("property", "Property").width(20).sortable(),
                Column::new("tenant", "Tenant").width(20).sortable(),
                Column::new("start", "Start").width(10).sortable(),
                Column::new("end", "End").width(10).sortable(),
                Column::new("rent", "Rent").width(9).align(Alignment::Right).sortable(),
                Column::new("status", "Status").width(7).sortable(),
            ],
            ScreenKind::Reservations => vec![
                Column::new("property", "Property").width(20).sortable(),
                Column::new("guest", "Guest").width(20).sortable(),
                Column::new("check_in", "Check-in").width(10).sortable(),
                Column::new("check_out", "Check-out").width(10),
                Column::new("nights", "Nights").width(6).align(Alignment::Right).sortable(),
                Column::new("status", "Status").width(10).sortable(),
            ],
            ScreenKind::Maintenance => vec![
                Column::new("title", "Title").width(28).sortable(),
                Column::new("property", "Property").width(20).sortable(),
                Column::new("priority", "Prio").width(4).align(Alignment::Center).sortable(),
                Column::new("status", "Status").width(12).sortable(),
                Column::new("opened", "Opened").width(10).sortable(),
            ],
            ScreenKind::Tasks => vec![
                Column::new("title", "Title").width(30).sortable(),
                Column::new("assignee", "Assignee").width(14).sortable(),
                Column::new("due", "Due").width(10).sortable(),
                Column::new("done", "Done").width(4).align(Alignment::Center).sortable(),
            ],
            ScreenKind::Banks => vec![
                Column::new("name", "Bank").width(20).sortable(),
                Column::new("iban", "IBAN").width(14),
                Column::new("bic", "BIC").width(11),
                Column::new("balance", "Balance")
                    .width(12)
                    .align(Alignment::Right)
                    .sortable(),
            ],
            ScreenKind::Keys => vec![
                Column::new("label", "Label").width(16).sortable(),
                Column::new("property", "Property").width(20).sortable(),
                Column::new("holder", "Holder").width(18).sortable(),
            ],
            ScreenKind::Files => vec![
                Column::new("name", "Name").width(28).sortable(),
                Column::new("mime", "Type").width(18).sortable(),
                Column::new("size", "Size").width(9).align(Alignment::Right),
                Column::new("uploaded", "Uploaded").width(10).sortable(),
            ],
        }
    }
}

impl std::fmt::Display for ScreenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.route())
    }
}

impl std::str::FromStr for ScreenKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        ScreenKind::ALL
            .into_iter()
            .find(|k| k.route() == s)
            .ok_or_else(|| format!("unknown screen '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_round_trip() {
        for kind in ScreenKind::ALL {
            assert_eq!(kind.route().parse::<ScreenKind>(), Ok(kind));
        }
        assert!("nope".parse::<ScreenKind>().is_err());
    }

    #[test]
    fn test_every_screen_has_a_sortable_column() {
        for kind in ScreenKind::ALL {
            assert!(kind.columns().iter().any(|c| c.sortable), "{}", kind);
        }
    }
}
