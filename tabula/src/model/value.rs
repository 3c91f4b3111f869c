//! Value enum for dynamic cell values

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::NaiveTime;
use chrono::Utc;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// A dynamic value held by one field of a row.
///
/// Rows coming from list pages have no fixed schema, so every field read by
/// the grid is surfaced as a `Value` and formatted from there.
///
/// | Source | Variant |
/// |--------|---------|
/// | null / missing | `Null` |
/// | boolean | `Bool` |
/// | integer | `Int` |
/// | floating point | `Float` |
/// | exact decimal (fees, marks) | `Decimal` |
/// | text | `String` |
/// | calendar date | `Date` |
/// | timestamp | `DateTime` |
/// | anything else from JSON | `Json` |
///
/// # Example
///
/// ```
/// use tabula::model::Value;
///
/// let name = Value::from("Ada");
/// let age = Value::from(12i64);
/// let empty = Value::Null;
/// assert!(empty.is_null());
/// assert_eq!(age.to_string(), "12");
/// # let _ = name;
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Decimal(Decimal),
    String(String),
    Date(NaiveDate),
    DateTime(DateTime<Utc>),
    Json(serde_json::Value),
}

impl Value {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Decimal(_) => "decimal",
            Value::String(_) => "string",
            Value::Date(_) => "date",
            Value::DateTime(_) => "datetime",
            Value::Json(_) => "json",
        }
    }

    /// Numeric view of the value.
    ///
    /// Integers, finite floats, decimals and strings holding a number
    /// convert; everything else (including booleans and blank strings) is
    /// `None`. Floats outside the decimal range are `None` here but still
    /// numeric for [`as_numeric`](Self::as_numeric).
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self.as_numeric()? {
            Numeric::Exact(d) => Some(d),
            Numeric::Approx(_) => None,
        }
    }

    /// Numeric view that also covers finite floats too large for a decimal.
    pub fn as_numeric(&self) -> Option<Numeric> {
        match self {
            Value::Int(n) => Some(Numeric::Exact(Decimal::from(*n))),
            Value::Float(f) => Numeric::from_f64(*f),
            Value::Decimal(d) => Some(Numeric::Exact(*d)),
            Value::String(s) => parse_numeric(s),
            Value::Json(serde_json::Value::Number(n)) => parse_numeric(&n.to_string()),
            _ => None,
        }
    }

    /// Loose truthiness, used by boolean columns.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Int(n) => *n != 0,
            Value::Float(f) => *f != 0.0 && !f.is_nan(),
            Value::Decimal(d) => !d.is_zero(),
            Value::String(s) => !s.is_empty(),
            Value::Date(_) | Value::DateTime(_) => true,
            Value::Json(j) => !matches!(j, serde_json::Value::Null),
        }
    }

    /// Ordering used for client-side sorting. Nulls sort last.
    ///
    /// Values are ranked by class first (numbers, including numeric strings,
    /// then booleans, dates and text), and only compared within a class, so
    /// mixed columns still sort consistently.
    pub fn compare(&self, other: &Value) -> Ordering {
        let (a, b) = (self.sort_class(), other.sort_class());
        match (a, b) {
            (SortClass::Number(x), SortClass::Number(y)) => x.compare(&y),
            (SortClass::Bool(x), SortClass::Bool(y)) => x.cmp(&y),
            (SortClass::Instant(x), SortClass::Instant(y)) => x.cmp(&y),
            (SortClass::Text(x), SortClass::Text(y)) => x
                .to_lowercase()
                .cmp(&y.to_lowercase())
                .then_with(|| x.cmp(&y)),
            (a, b) => a.rank().cmp(&b.rank()),
        }
    }

    fn sort_class(&self) -> SortClass {
        if let Some(n) = self.as_numeric() {
            return SortClass::Number(n);
        }
        match self {
            Value::Null => SortClass::Null,
            Value::Bool(b) => SortClass::Bool(*b),
            Value::Date(d) => SortClass::Instant(d.and_time(NaiveTime::MIN).and_utc()),
            Value::DateTime(dt) => SortClass::Instant(*dt),
            other => SortClass::Text(other.to_string()),
        }
    }
}

/// A numeric reading of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Numeric {
    /// Exact decimal.
    Exact(Decimal),
    /// Finite float outside the decimal range.
    Approx(f64),
}

impl Numeric {
    fn from_f64(f: f64) -> Option<Self> {
        if !f.is_finite() {
            return None;
        }
        Some(match Decimal::try_from(f) {
            Ok(d) => Numeric::Exact(d),
            Err(_) => Numeric::Approx(f),
        })
    }

    pub fn to_f64(self) -> f64 {
        match self {
            Numeric::Exact(d) => d.to_f64().unwrap_or(0.0),
            Numeric::Approx(f) => f,
        }
    }

    /// Total order: exact pairs compare exactly, anything else as floats.
    pub fn compare(&self, other: &Numeric) -> Ordering {
        match (self, other) {
            (Numeric::Exact(a), Numeric::Exact(b)) => a.cmp(b),
            (a, b) => a.to_f64().total_cmp(&b.to_f64()),
        }
    }
}

impl From<Decimal> for Numeric {
    fn from(d: Decimal) -> Self {
        Numeric::Exact(d)
    }
}

enum SortClass {
    Number(Numeric),
    Bool(bool),
    Instant(DateTime<Utc>),
    Text(String),
    Null,
}

impl SortClass {
    fn rank(&self) -> u8 {
        match self {
            SortClass::Number(_) => 0,
            SortClass::Bool(_) => 1,
            SortClass::Instant(_) => 2,
            SortClass::Text(_) => 3,
            SortClass::Null => 4,
        }
    }
}

fn parse_numeric(s: &str) -> Option<Numeric> {
    match parse_decimal(s) {
        Some(d) => Some(Numeric::Exact(d)),
        None => s.trim().parse::<f64>().ok().and_then(Numeric::from_f64),
    }
}

fn parse_decimal(s: &str) -> Option<Decimal> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .ok()
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Decimal(d) => write!(f, "{d}"),
            Value::String(s) => f.write_str(s),
            Value::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Value::DateTime(dt) => f.write_str(&dt.to_rfc3339()),
            Value::Json(serde_json::Value::String(s)) => f.write_str(s),
            Value::Json(j) => write!(f, "{j}"),
        }
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<Decimal> for Value {
    fn from(v: Decimal) -> Self {
        Value::Decimal(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Value::Date(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::DateTime(v)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if let Some(f) = n.as_f64() {
                    Value::Float(f)
                } else {
                    Value::Json(serde_json::Value::Number(n))
                }
            }
            other => Value::Json(other),
        }
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}
