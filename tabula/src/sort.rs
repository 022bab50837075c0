//! Single-column sort state.

use std::cmp::{Ordering, Reverse};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::column::{CellValue, folded};
use crate::identity::TableRow;

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Header marker for this direction.
    pub fn marker(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// The column a table is sorted by, and in which direction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortState {
    /// Key of the sorted column.
    pub column: String,
    pub direction: SortDirection,
}

impl SortState {
    /// Sort ascending by `column`.
    pub fn ascending(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: SortDirection::Ascending,
        }
    }

    /// Sort descending by `column`.
    pub fn descending(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: SortDirection::Descending,
        }
    }

    /// Next state when the header of `column` is activated.
    ///
    /// The same column flips direction; a different column starts ascending.
    pub fn toggled(current: Option<&SortState>, column: &str) -> SortState {
        match current {
            Some(state) if state.column == column => SortState {
                column: state.column.clone(),
                direction: state.direction.reversed(),
            },
            _ => SortState::ascending(column),
        }
    }
}

/// Stable-sort `rows` in place by the sorted column's values.
///
/// Rows missing the field sort as nulls. Ties keep their input order in
/// both directions. Each row's field is read, and its text lowercased,
/// once per sort.
pub fn sort_rows<T: TableRow>(rows: &mut [Arc<T>], sort: &SortState) {
    let key = |row: &Arc<T>| SortKey::new(row.field(&sort.column).unwrap_or_default());
    match sort.direction {
        SortDirection::Ascending => rows.sort_by_cached_key(key),
        SortDirection::Descending => rows.sort_by_cached_key(|row| Reverse(key(row))),
    }
}

/// A cell value with its case-folded text precomputed.
struct SortKey {
    value: CellValue,
    folded: Option<String>,
}

impl SortKey {
    fn new(value: CellValue) -> Self {
        let lowered = match &value {
            CellValue::Text(s) => Some(folded(s).collect()),
            _ => None,
        };
        Self {
            value,
            folded: lowered,
        }
    }
}

impl PartialEq for SortKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for SortKey {}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SortKey {
    /// Same order as [`CellValue::sort_cmp`].
    fn cmp(&self, other: &Self) -> Ordering {
        match (&self.folded, &other.folded, &self.value, &other.value) {
            (Some(a), Some(b), CellValue::Text(x), CellValue::Text(y)) => {
                a.cmp(b).then_with(|| x.cmp(y))
            }
            _ => self.value.sort_cmp(&other.value),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;

    fn rows() -> Vec<Arc<Value>> {
        vec![
            Arc::new(json!({"id": 1, "city": "Ghent", "rent": 900})),
            Arc::new(json!({"id": 2, "city": "antwerp", "rent": 1200})),
            Arc::new(json!({"id": 3, "city": "Ghent", "rent": 700})),
            Arc::new(json!({"id": 4, "rent": 800})),
        ]
    }

    fn ids(rows: &[Arc<Value>]) -> Vec<i64> {
        rows.iter().map(|r| r["id"].as_i64().unwrap()).collect()
    }

    #[test]
    fn test_toggle_same_column_flips() {
        let state = SortState::toggled(None, "city");
        assert_eq!(state, SortState::ascending("city"));
        let state = SortState::toggled(Some(&state), "city");
        assert_eq!(state, SortState::descending("city"));
        let state = SortState::toggled(Some(&state), "rent");
        assert_eq!(state, SortState::ascending("rent"));
    }

    #[test]
    fn test_sort_ascending_nulls_first() {
        let mut rows = rows();
        sort_rows(&mut rows, &SortState::ascending("city"));
        assert_eq!(ids(&rows), vec![4, 2, 1, 3]);
    }

    #[test]
    fn test_sort_descending_is_stable() {
        let mut rows = rows();
        sort_rows(&mut rows, &SortState::descending("city"));
        assert_eq!(ids(&rows), vec![1, 3, 2, 4]);
    }

    #[test]
    fn test_sort_mixed_case_text() {
        let mut rows: Vec<Arc<Value>> = ["banana", "Apple", "apple", "Banana", "cherry"]
            .iter()
            .enumerate()
            .map(|(i, name)| Arc::new(json!({"id": i, "name": name})))
            .collect();
        sort_rows(&mut rows, &SortState::ascending("name"));
        assert_eq!(ids(&rows), vec![1, 2, 3, 0, 4]);

        sort_rows(&mut rows, &SortState::descending("name"));
        assert_eq!(ids(&rows), vec![4, 0, 3, 2, 1]);
    }

    #[test]
    fn test_sort_ints_against_wide_float() {
        let two_53 = 1i64 << 53;
        let mut rows = vec![
            Arc::new(json!({"id": 1, "n": two_53 + 1})),
            Arc::new(json!({"id": 2, "n": two_53 as f64 + 2.0})),
            Arc::new(json!({"id": 3, "n": two_53})),
            Arc::new(json!({"id": 4, "n": two_53 as f64})),
        ];
        sort_rows(&mut rows, &SortState::ascending("n"));
        assert_eq!(ids(&rows), vec![3, 4, 1, 2]);
    }

    #[test]
    fn test_sort_numbers() {
        let mut rows = rows();
        sort_rows(&mut rows, &SortState::descending("rent"));
        assert_eq!(ids(&rows), vec![2, 1, 4, 3]);
    }
}
