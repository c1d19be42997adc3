use std::borrow::Cow;
use std::cmp::Ordering;

/// A cell value resolved from a row by a column accessor.
///
/// Values carry just enough type information to drive default comparison and
/// filtering. Anything richer (dates, currency amounts) is resolved by the
/// accessor into one of these shapes; the column's
/// [`kind`](crate::column::ColumnKind) is a rendering hint, not a value type.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellValue {
    /// Missing or unresolvable value. Sorts before every defined value in
    /// ascending order.
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl CellValue {
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Numeric view of the value, if it has one.
    pub fn as_number(&self) -> Option<f64> {
        match *self {
            CellValue::Int(n) => Some(n as f64),
            CellValue::Float(n) => Some(n),
            _ => None,
        }
    }

    /// String form used for default filtering and non-numeric comparison.
    pub fn text(&self) -> Cow<'_, str> {
        match self {
            CellValue::Null => Cow::Borrowed(""),
            CellValue::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
            CellValue::Int(n) => Cow::Owned(n.to_string()),
            CellValue::Float(n) => Cow::Owned(n.to_string()),
            CellValue::Text(s) => Cow::Borrowed(s),
        }
    }

    /// Total order over cell values.
    ///
    /// Nulls first, numbers numerically (`Int` and `Float` cross-compare),
    /// everything else by string form. Reversing this order for a descending
    /// sort pushes nulls last.
    pub fn compare(&self, other: &CellValue) -> Ordering {
        match (self.is_null(), other.is_null()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            (false, false) => {}
        }
        if let (Some(a), Some(b)) = (self.as_number(), other.as_number()) {
            return a.partial_cmp(&b).unwrap_or(Ordering::Equal);
        }
        self.text().cmp(&other.text())
    }

    /// Default filter predicate: case-insensitive substring match on the
    /// string form. `query` must already be lowercased.
    pub fn matches_lower(&self, query: &str) -> bool {
        self.text().to_lowercase().contains(query)
    }
}

impl From<bool> for CellValue {
    fn from(v: bool) -> Self {
        CellValue::Bool(v)
    }
}

impl From<i64> for CellValue {
    fn from(v: i64) -> Self {
        CellValue::Int(v)
    }
}

impl From<i32> for CellValue {
    fn from(v: i32) -> Self {
        CellValue::Int(v as i64)
    }
}

impl From<u32> for CellValue {
    fn from(v: u32) -> Self {
        CellValue::Int(v as i64)
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        CellValue::Float(v)
    }
}

impl From<&str> for CellValue {
    fn from(v: &str) -> Self {
        CellValue::Text(v.to_string())
    }
}

impl From<String> for CellValue {
    fn from(v: String) -> Self {
        CellValue::Text(v)
    }
}

impl<V: Into<CellValue>> From<Option<V>> for CellValue {
    fn from(v: Option<V>) -> Self {
        v.map(Into::into).unwrap_or(CellValue::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_sorts_before_defined_values() {
        assert_eq!(
            CellValue::Null.compare(&CellValue::Int(-100)),
            Ordering::Less
        );
        assert_eq!(
            CellValue::Text("".into()).compare(&CellValue::Null),
            Ordering::Greater
        );
        assert_eq!(CellValue::Null.compare(&CellValue::Null), Ordering::Equal);
    }

    #[test]
    fn numbers_cross_compare_numerically() {
        assert_eq!(
            CellValue::Int(2).compare(&CellValue::Float(10.5)),
            Ordering::Less
        );
        // String comparison would say "2" > "10".
        assert_eq!(
            CellValue::Int(2).compare(&CellValue::Int(10)),
            Ordering::Less
        );
    }

    #[test]
    fn other_types_compare_as_strings() {
        assert_eq!(
            CellValue::Text("apple".into()).compare(&CellValue::Text("banana".into())),
            Ordering::Less
        );
        assert_eq!(
            CellValue::Bool(false).compare(&CellValue::Bool(true)),
            Ordering::Less
        );
    }

    #[test]
    fn default_filter_is_case_insensitive_substring() {
        let v = CellValue::Text("Active Account".into());
        assert!(v.matches_lower("active"));
        assert!(v.matches_lower("count"));
        assert!(!v.matches_lower("inactive"));
        assert!(CellValue::Int(42).matches_lower("4"));
    }

    #[test]
    fn option_converts_to_null() {
        assert_eq!(CellValue::from(None::<i64>), CellValue::Null);
        assert_eq!(CellValue::from(Some(3i64)), CellValue::Int(3));
    }
}
