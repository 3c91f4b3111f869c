//! Cell value formatting.
//!
//! [`ValueFormatter::format`] turns a raw value plus an optional format spec
//! and column type into display text. Rules apply in order:
//!
//! 1. null: the locale placeholder (`-`)
//! 2. date type or date-pattern spec: the formatted date, or the raw text
//!    when the value does not parse
//! 3. `currency-2dp`: currency with two decimals, placeholder if not numeric
//! 4. `number-2dp`: number with two decimals, placeholder if not numeric
//! 5. boolean type: `Yes` / `No`
//! 6. anything else: the value's own text

pub mod date;
pub mod number;

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::config::{GridConfig, Locale};
use crate::error::FormatSpecError;
use crate::model::Value;

/// Semantic type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    #[default]
    Plain,
    Date,
    Boolean,
    Number,
}

/// A parsed format spec string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatSpec {
    /// `currency-2dp`
    Currency2dp,
    /// `number-2dp`
    Number2dp,
    /// A date pattern such as `dd/MM/yyyy`.
    Date(String),
    /// Unrecognised spec; formatting falls through to the remaining rules.
    Plain(String),
}

impl FormatSpec {
    /// Lenient parse used by column definitions. Never fails.
    pub fn parse(spec: &str) -> Self {
        let trimmed = spec.trim();
        match trimmed {
            "currency-2dp" => FormatSpec::Currency2dp,
            "number-2dp" => FormatSpec::Number2dp,
            s if date::looks_like_pattern(s) => FormatSpec::Date(s.to_string()),
            s => FormatSpec::Plain(s.to_string()),
        }
    }

    /// The date pattern, if this is a date spec.
    pub fn date_pattern(&self) -> Option<&str> {
        match self {
            FormatSpec::Date(p) => Some(p),
            _ => None,
        }
    }
}

impl FromStr for FormatSpec {
    type Err = FormatSpecError;

    /// Strict parse: unknown specs are an error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(FormatSpecError::Empty);
        }
        match FormatSpec::parse(s) {
            FormatSpec::Plain(other) => Err(FormatSpecError::Unknown(other)),
            spec => Ok(spec),
        }
    }
}

impl fmt::Display for FormatSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatSpec::Currency2dp => f.write_str("currency-2dp"),
            FormatSpec::Number2dp => f.write_str("number-2dp"),
            FormatSpec::Date(p) | FormatSpec::Plain(p) => f.write_str(p),
        }
    }
}

impl From<&str> for FormatSpec {
    fn from(s: &str) -> Self {
        FormatSpec::parse(s)
    }
}

/// Turns cell values into display strings.
///
/// # Example
///
/// ```
/// use tabula::format::{ColumnType, FormatSpec, ValueFormatter};
/// use tabula::model::Value;
///
/// let f = ValueFormatter::default();
/// let spec = FormatSpec::parse("currency-2dp");
/// assert_eq!(f.format(&Value::from(1234.5), Some(&spec), ColumnType::Plain), "$1,234.50");
/// assert_eq!(f.format(&Value::Null, Some(&spec), ColumnType::Plain), "-");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueFormatter {
    locale: Locale,
    date_pattern: String,
}

impl Default for ValueFormatter {
    fn default() -> Self {
        Self::new(Locale::default(), "yyyy-MM-dd")
    }
}

impl ValueFormatter {
    pub fn new(locale: Locale, date_pattern: impl Into<String>) -> Self {
        Self {
            locale,
            date_pattern: date_pattern.into(),
        }
    }

    pub fn from_config(config: &GridConfig) -> Self {
        Self::new(config.locale.clone(), config.date_pattern.clone())
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn format(&self, value: &Value, spec: Option<&FormatSpec>, kind: ColumnType) -> String {
        if value.is_null() {
            return self.locale.placeholder.clone();
        }

        let pattern = spec.and_then(FormatSpec::date_pattern);
        if kind == ColumnType::Date || pattern.is_some() {
            let pattern = pattern.unwrap_or(&self.date_pattern);
            return date::format(value, pattern).unwrap_or_else(|| value.to_string());
        }

        match spec {
            Some(FormatSpec::Currency2dp) => {
                return value
                    .as_numeric()
                    .map(|d| number::currency_2dp(d, &self.locale))
                    .unwrap_or_else(|| self.locale.placeholder.clone());
            }
            Some(FormatSpec::Number2dp) => {
                return value
                    .as_numeric()
                    .map(|d| number::fixed_2dp(d, &self.locale))
                    .unwrap_or_else(|| self.locale.placeholder.clone());
            }
            _ => {}
        }

        if kind == ColumnType::Boolean {
            return if value.is_truthy() {
                self.locale.yes.clone()
            } else {
                self.locale.no.clone()
            };
        }

        value.to_string()
    }
}
