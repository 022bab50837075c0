//! Row identity.
//!
//! Selection is tracked by identity rather than by position, so that a
//! selected row stays selected across page changes, sorting and dataset
//! refreshes.

use std::any::Any;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::column::CellValue;

/// Field names checked for a primary key, in order of preference.
pub const ID_FIELDS: [&str; 3] = ["id", "ID", "_id"];

/// A primary key value read from a row.
///
/// Integral numbers that fit in `i64` are always [`Int`](Self::Int), even
/// when they arrive as floats, so `2` and `2.0` name the same row. Every
/// other finite number is kept exactly as a [`Number`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RowKey {
    Int(i64),
    /// Fractional, or an integer above `i64::MAX`.
    Num(Number),
    Str(String),
}

impl RowKey {
    /// Convert a cell value into a key.
    ///
    /// Strings and finite numbers are keys; every other kind yields `None`.
    pub fn from_cell(value: &CellValue) -> Option<Self> {
        match value {
            CellValue::Int(n) => Some(RowKey::Int(*n)),
            CellValue::Float(f) => Self::from_float(*f),
            CellValue::Text(s) => Some(RowKey::Str(s.clone())),
            _ => None,
        }
    }

    /// Key for a JSON number, without going through `f64` for integers.
    pub fn from_number(n: &Number) -> Option<Self> {
        if let Some(i) = n.as_i64() {
            return Some(RowKey::Int(i));
        }
        if n.is_u64() {
            return Some(RowKey::Num(n.clone()));
        }
        Self::from_float(n.as_f64()?)
    }

    /// Key for a float. `None` for NaN and infinities.
    pub fn from_float(f: f64) -> Option<Self> {
        // 2^63 is the first float past i64::MAX.
        const I64_END: f64 = 9_223_372_036_854_775_808.0;
        if f.fract() == 0.0 && (-I64_END..I64_END).contains(&f) {
            return Some(RowKey::Int(f as i64));
        }
        Number::from_f64(f).map(RowKey::Num)
    }

    fn rank(&self) -> u8 {
        match self {
            RowKey::Int(_) => 0,
            RowKey::Num(_) => 1,
            RowKey::Str(_) => 2,
        }
    }
}

impl Ord for RowKey {
    /// Ints, then other numbers by value, then strings.
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (RowKey::Int(a), RowKey::Int(b)) => a.cmp(b),
            (RowKey::Num(a), RowKey::Num(b)) => {
                let fa = a.as_f64().unwrap_or(f64::NAN);
                let fb = b.as_f64().unwrap_or(f64::NAN);
                // Large u64s can share an f64; floats sort before them.
                fa.total_cmp(&fb).then_with(|| a.as_u64().cmp(&b.as_u64()))
            }
            (RowKey::Str(a), RowKey::Str(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for RowKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for RowKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RowKey::Int(n) => write!(f, "{}", n),
            RowKey::Num(n) => write!(f, "{}", n),
            RowKey::Str(s) => f.write_str(s),
        }
    }
}

impl From<&str> for RowKey {
    fn from(value: &str) -> Self {
        RowKey::Str(value.to_string())
    }
}

impl From<String> for RowKey {
    fn from(value: String) -> Self {
        RowKey::Str(value)
    }
}

impl From<i64> for RowKey {
    fn from(value: i64) -> Self {
        RowKey::Int(value)
    }
}

impl From<u32> for RowKey {
    fn from(value: u32) -> Self {
        RowKey::Int(i64::from(value))
    }
}

impl From<u64> for RowKey {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(n) => RowKey::Int(n),
            Err(_) => RowKey::Num(value.into()),
        }
    }
}

/// Identity of a row object itself, compared by address.
///
/// Holds a strong reference, so the address cannot be reused by another row
/// while the identity is alive.
#[derive(Clone)]
pub struct RefIdentity(Arc<dyn Any + Send + Sync>);

impl RefIdentity {
    fn addr(&self) -> usize {
        Arc::as_ptr(&self.0) as *const () as usize
    }
}

impl PartialEq for RefIdentity {
    fn eq(&self, other: &Self) -> bool {
        self.addr() == other.addr()
    }
}

impl Eq for RefIdentity {}

impl Hash for RefIdentity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.addr().hash(state);
    }
}

impl std::fmt::Debug for RefIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RefIdentity({:#x})", self.addr())
    }
}

/// Stable identity used as the selection set key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RowIdentity {
    /// Identified by a primary key field.
    Key(RowKey),
    /// Identified by the row object itself.
    Ref(RefIdentity),
}

impl RowIdentity {
    /// Get the key, if this identity came from a key field.
    pub fn key(&self) -> Option<&RowKey> {
        match self {
            RowIdentity::Key(key) => Some(key),
            RowIdentity::Ref(_) => None,
        }
    }
}

impl Ord for RowIdentity {
    /// Keys first in key order, then references by address.
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (RowIdentity::Key(a), RowIdentity::Key(b)) => a.cmp(b),
            (RowIdentity::Key(_), RowIdentity::Ref(_)) => Ordering::Less,
            (RowIdentity::Ref(_), RowIdentity::Key(_)) => Ordering::Greater,
            (RowIdentity::Ref(a), RowIdentity::Ref(b)) => a.addr().cmp(&b.addr()),
        }
    }
}

impl PartialOrd for RowIdentity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for RowIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RowIdentity::Key(key) => write!(f, "{}", key),
            RowIdentity::Ref(r) => write!(f, "@{:x}", r.addr()),
        }
    }
}

impl From<RowKey> for RowIdentity {
    fn from(key: RowKey) -> Self {
        RowIdentity::Key(key)
    }
}

impl From<&str> for RowIdentity {
    fn from(key: &str) -> Self {
        RowIdentity::Key(key.into())
    }
}

impl From<String> for RowIdentity {
    fn from(key: String) -> Self {
        RowIdentity::Key(key.into())
    }
}

impl From<i64> for RowIdentity {
    fn from(key: i64) -> Self {
        RowIdentity::Key(key.into())
    }
}

impl From<u32> for RowIdentity {
    fn from(key: u32) -> Self {
        RowIdentity::Key(key.into())
    }
}

/// Trait for records that can be displayed as rows in a table.
///
/// The table never looks inside a row except through [`field`](Self::field),
/// which serves both column cells and identity lookup.
///
/// # Examples
///
/// ```
/// use tabula::{CellValue, TableRow};
///
/// struct Tenant {
///     id: u32,
///     name: String,
/// }
///
/// impl TableRow for Tenant {
///     fn field(&self, key: &str) -> Option<CellValue> {
///         match key {
///             "id" => Some(self.id.into()),
///             "name" => Some(self.name.as_str().into()),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait TableRow: Send + Sync + 'static {
    /// Read a field by key. Returns `None` for unknown keys.
    fn field(&self, key: &str) -> Option<CellValue>;

    /// Primary key of this row.
    ///
    /// The default checks [`ID_FIELDS`] in order and returns the first
    /// string or number found.
    fn key(&self) -> Option<RowKey> {
        ID_FIELDS
            .iter()
            .find_map(|name| self.field(name).as_ref().and_then(RowKey::from_cell))
    }
}

/// Resolve the identity of a row.
///
/// Uses the row's key when it has one, otherwise the row object itself, so
/// two structurally equal rows without keys are never conflated.
pub fn resolve_id<T: TableRow>(row: &Arc<T>) -> RowIdentity {
    match row.key() {
        Some(key) => RowIdentity::Key(key),
        None => {
            let any: Arc<dyn Any + Send + Sync> = row.clone();
            RowIdentity::Ref(RefIdentity(any))
        }
    }
}

impl TableRow for serde_json::Value {
    fn field(&self, key: &str) -> Option<CellValue> {
        use serde_json::Value;

        let value = self.as_object()?.get(key)?;
        Some(match value {
            Value::Null => CellValue::Null,
            Value::Bool(b) => CellValue::Bool(*b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => CellValue::Int(i),
                None => CellValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => CellValue::Text(s.clone()),
            other => CellValue::Text(other.to_string()),
        })
    }

    /// Reads the raw number, so u64 ids above `i64::MAX` stay exact.
    fn key(&self) -> Option<RowKey> {
        use serde_json::Value;

        let object = self.as_object()?;
        ID_FIELDS.iter().find_map(|name| match object.get(*name)? {
            Value::Number(n) => RowKey::from_number(n),
            Value::String(s) => Some(RowKey::Str(s.clone())),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_equal_ids_on_distinct_objects_match() {
        let a = Arc::new(json!({"id": "a", "name": "first"}));
        let b = Arc::new(json!({"id": "a", "name": "second"}));
        assert_eq!(resolve_id(&a), resolve_id(&b));
    }

    #[test]
    fn test_rows_without_id_fall_back_to_reference() {
        let a = Arc::new(json!({"name": "same"}));
        let b = Arc::new(json!({"name": "same"}));
        assert_ne!(resolve_id(&a), resolve_id(&b));
        assert_eq!(resolve_id(&a), resolve_id(&a.clone()));
    }

    #[test]
    fn test_id_field_preference_order() {
        let row = Arc::new(json!({"_id": "under", "ID": 7, "id": "lower"}));
        assert_eq!(resolve_id(&row), RowIdentity::from("lower"));

        let row = Arc::new(json!({"_id": "under", "ID": 7}));
        assert_eq!(resolve_id(&row), RowIdentity::from(7i64));

        let row = Arc::new(json!({"_id": "under"}));
        assert_eq!(resolve_id(&row), RowIdentity::from("under"));
    }

    #[test]
    fn test_null_and_bool_ids_are_skipped() {
        let row = Arc::new(json!({"id": null, "ID": true, "_id": 3}));
        assert_eq!(resolve_id(&row), RowIdentity::from(3i64));
    }

    #[test]
    fn test_float_ids_on_distinct_objects_match() {
        let a = Arc::new(json!({"id": 1.5, "name": "first"}));
        let b = Arc::new(json!({"id": 1.5, "name": "second"}));
        assert_eq!(resolve_id(&a), resolve_id(&b));
        assert!(matches!(resolve_id(&a), RowIdentity::Key(RowKey::Num(_))));

        let c = Arc::new(json!({"id": 2.5}));
        assert_ne!(resolve_id(&a), resolve_id(&c));
    }

    #[test]
    fn test_large_u64_ids_stay_exact() {
        let a = Arc::new(json!({"id": u64::MAX}));
        let b = Arc::new(json!({"id": u64::MAX}));
        let c = Arc::new(json!({"id": u64::MAX - 1}));
        assert_eq!(resolve_id(&a), resolve_id(&b));
        assert_ne!(resolve_id(&a), resolve_id(&c));
        assert_eq!(resolve_id(&a), RowIdentity::Key(RowKey::from(u64::MAX)));
        assert!(resolve_id(&c) < resolve_id(&a));
    }

    #[test]
    fn test_integral_floats_key_as_ints() {
        let row = Arc::new(json!({"id": 2.0}));
        assert_eq!(resolve_id(&row), RowIdentity::from(2i64));
        assert_eq!(RowKey::from_cell(&CellValue::Float(-0.0)), Some(RowKey::Int(0)));
        assert_eq!(RowKey::from_cell(&CellValue::Float(f64::NAN)), None);
    }

    #[test]
    fn test_string_and_number_keys_differ() {
        assert_ne!(RowIdentity::from("1"), RowIdentity::from(1i64));
        let float = Arc::new(json!({"id": 1.5}));
        let text = Arc::new(json!({"id": "1.5"}));
        assert_ne!(resolve_id(&float), resolve_id(&text));
    }

    #[test]
    fn test_typed_float_field_matches_json() {
        struct Reading(f64);
        impl TableRow for Reading {
            fn field(&self, key: &str) -> Option<CellValue> {
                (key == "id").then(|| self.0.into())
            }
        }
        let typed = Arc::new(Reading(1.5));
        let json = Arc::new(json!({"id": 1.5}));
        assert_eq!(resolve_id(&typed), resolve_id(&json));
    }
}
