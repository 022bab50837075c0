//! Column descriptors and cell values.

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Horizontal alignment for column content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Column configuration.
///
/// Purely descriptive: the table reads cells by `key` and checks `sortable`
/// before accepting a sort request. Everything else is for the renderer.
///
/// # Examples
///
/// ```
/// use tabula::{Alignment, Column};
///
/// let columns = vec![
///     Column::new("name", "Name").sortable(),
///     Column::new("rent", "Rent").width(10).align(Alignment::Right),
/// ];
/// assert!(columns[0].sortable);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Field key used to read the cell from a row.
    pub key: String,
    /// Header text.
    pub label: String,
    /// Whether this column accepts sort requests.
    #[serde(default)]
    pub sortable: bool,
    /// Preferred width in characters.
    #[serde(default)]
    pub width: Option<u16>,
    /// Horizontal alignment.
    #[serde(default)]
    pub align: Alignment,
}

impl Column {
    /// Create a new column reading field `key`, headed by `label`.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            sortable: false,
            width: None,
            align: Alignment::Left,
        }
    }

    /// Make the column sortable.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Set a preferred width.
    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the column alignment.
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }
}

/// A single field value read from a row.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Date(NaiveDate),
    Text(String),
}

impl CellValue {
    /// Check if the value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Total order used for sorting.
    ///
    /// Nulls sort first. Ints and floats compare exactly by value with each
    /// other, `-0.0` equal to `0.0`. Text compares case-insensitively, then
    /// by case. Other mixed kinds fall back to a fixed kind order.
    pub fn sort_cmp(&self, other: &Self) -> Ordering {
        use CellValue::*;
        match (self, other) {
            (Null, Null) => Ordering::Equal,
            (Bool(a), Bool(b)) => a.cmp(b),
            (Int(a), Int(b)) => a.cmp(b),
            (Float(a), Float(b)) => cmp_floats(*a, *b),
            (Int(a), Float(b)) => cmp_int_float(*a, *b),
            (Float(a), Int(b)) => cmp_int_float(*b, *a).reverse(),
            (Date(a), Date(b)) => a.cmp(b),
            (Text(a), Text(b)) => folded(a).cmp(folded(b)).then_with(|| a.cmp(b)),
            _ => self.rank().cmp(&other.rank()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            CellValue::Null => 0,
            CellValue::Bool(_) => 1,
            CellValue::Int(_) | CellValue::Float(_) => 2,
            CellValue::Date(_) => 3,
            CellValue::Text(_) => 4,
        }
    }
}

/// Lowercased characters of `s`, for case-insensitive ordering.
pub(crate) fn folded(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase)
}

/// Numeric order, with NaN placed where `total_cmp` puts it.
fn cmp_floats(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or_else(|| a.total_cmp(&b))
}

/// Exact comparison of an integer with a float.
fn cmp_int_float(i: i64, f: f64) -> Ordering {
    // 2^63, the first float past i64::MAX.
    const I64_END: f64 = 9_223_372_036_854_775_808.0;
    if f.is_nan() {
        return if f.is_sign_negative() {
            Ordering::Greater
        } else {
            Ordering::Less
        };
    }
    if f >= I64_END {
        return Ordering::Less;
    }
    if f < -I64_END {
        return Ordering::Greater;
    }
    let whole = f.trunc();
    i.cmp(&(whole as i64))
        .then_with(|| 0.0_f64.partial_cmp(&(f - whole)).unwrap_or(Ordering::Equal))
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellValue::Null => Ok(()),
            CellValue::Bool(true) => f.write_str("yes"),
            CellValue::Bool(false) => f.write_str("no"),
            CellValue::Int(n) => write!(f, "{}", n),
            CellValue::Float(n) => write!(f, "{:.2}", n),
            CellValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            CellValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Int(value)
    }
}

impl From<u32> for CellValue {
    fn from(value: u32) -> Self {
        CellValue::Int(i64::from(value))
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Float(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(value: NaiveDate) -> Self {
        CellValue::Date(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}
