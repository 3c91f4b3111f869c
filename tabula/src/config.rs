//! Grid configuration.

use serde::Deserialize;

use crate::error::GridError;

/// Number and label conventions used when formatting cells.
///
/// Default: en-US (`$1,234.50`, `Yes`/`No`, `-` for missing values).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Locale {
    pub currency_symbol: String,
    pub thousands_separator: char,
    pub decimal_separator: char,
    pub yes: String,
    pub no: String,
    /// Shown for null values and non-numeric input to numeric formats.
    pub placeholder: String,
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            currency_symbol: "$".into(),
            thousands_separator: ',',
            decimal_separator: '.',
            yes: "Yes".into(),
            no: "No".into(),
            placeholder: "-".into(),
        }
    }
}

impl Locale {
    /// en-US conventions.
    pub fn en_us() -> Self {
        Self::default()
    }

    /// Sets the currency symbol.
    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    /// Sets the grouping and decimal separators.
    pub fn with_separators(mut self, thousands: char, decimal: char) -> Self {
        self.thousands_separator = thousands;
        self.decimal_separator = decimal;
        self
    }
}

/// Per-instance grid configuration.
///
/// Fixed for the lifetime of a [`Grid`](crate::grid::Grid). Everything that
/// changes between renders goes through [`GridProps`](crate::grid::GridProps)
/// instead.
///
/// # Example
///
/// ```
/// use tabula::config::GridConfig;
///
/// let config = GridConfig::new("students")
///     .with_key_field("admission_no")
///     .with_skeleton_row_count(8);
/// assert_eq!(config.key_field, "admission_no");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Prefix for every element id in the rendered tree.
    ///
    /// Default: `"grid"`
    pub id: String,

    /// Field that identifies a row.
    ///
    /// Default: `"id"`
    pub key_field: String,

    /// Placeholder rows shown while loading.
    ///
    /// Default: 5
    pub skeleton_row_count: usize,

    /// Message shown when there is no data and no custom empty element.
    ///
    /// Default: `"No data available"`
    pub empty_message: String,

    /// Pattern for date columns that do not name one.
    ///
    /// Default: `"yyyy-MM-dd"`
    pub date_pattern: String,

    pub locale: Locale,

    /// Seed for placeholder widths; random per instance when unset.
    pub skeleton_seed: Option<u64>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            id: "grid".into(),
            key_field: "id".into(),
            skeleton_row_count: 5,
            empty_message: "No data available".into(),
            date_pattern: "yyyy-MM-dd".into(),
            locale: Locale::default(),
            skeleton_seed: None,
        }
    }
}

impl GridConfig {
    /// Creates a config with the given element-id prefix.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Loads a config from JSON; missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, GridError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sets the key field.
    pub fn with_key_field(mut self, field: impl Into<String>) -> Self {
        self.key_field = field.into();
        self
    }

    /// Sets the number of skeleton rows.
    pub fn with_skeleton_row_count(mut self, count: usize) -> Self {
        self.skeleton_row_count = count;
        self
    }

    /// Sets the default empty message.
    pub fn with_empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    /// Sets the default date pattern.
    pub fn with_date_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.date_pattern = pattern.into();
        self
    }

    /// Sets the formatting locale.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Makes skeleton widths deterministic.
    pub fn with_skeleton_seed(mut self, seed: u64) -> Self {
        self.skeleton_seed = Some(seed);
        self
    }
}
