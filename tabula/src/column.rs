//! Column definitions.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use griddom::{Element, Size, TextAlign};
use log::warn;

use crate::error::ColumnError;
use crate::format::{ColumnType, FormatSpec, ValueFormatter};
use crate::model::{GridRow, Value};

/// Custom cell renderer: `(row, row_index) -> element`.
///
/// When set on a column it replaces value formatting for that column
/// entirely. Panics inside a template propagate to the caller.
pub type Template<R> = Arc<dyn Fn(&R, usize) -> Element + Send + Sync>;

/// One column of a grid.
///
/// # Examples
///
/// ```
/// use tabula::column::Column;
/// use tabula::format::ColumnType;
/// use tabula::model::Record;
///
/// let columns: Vec<Column<Record>> = vec![
///     Column::new("name", "Name").width(24),
///     Column::new("fee", "Fee").format("currency-2dp").align_right(),
///     Column::new("joined", "Joined").kind(ColumnType::Date).format("dd MMM yyyy"),
///     Column::new("notes", "Notes").sortable(false),
/// ];
/// # let _ = columns;
/// ```
pub struct Column<R> {
    /// Field read from each row.
    pub field: String,
    pub header: String,
    pub width: Option<u16>,
    pub min_width: Option<u16>,
    pub max_width: Option<u16>,
    pub align: TextAlign,
    pub kind: ColumnType,
    pub format: Option<FormatSpec>,
    pub allow_sorting: bool,
    pub visible: bool,
    pub template: Option<Template<R>>,
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        Self {
            field: self.field.clone(),
            header: self.header.clone(),
            width: self.width,
            min_width: self.min_width,
            max_width: self.max_width,
            align: self.align,
            kind: self.kind,
            format: self.format.clone(),
            allow_sorting: self.allow_sorting,
            visible: self.visible,
            template: self.template.clone(),
        }
    }
}

impl<R> fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("field", &self.field)
            .field("header", &self.header)
            .field("width", &self.width)
            .field("align", &self.align)
            .field("kind", &self.kind)
            .field("format", &self.format)
            .field("allow_sorting", &self.allow_sorting)
            .field("visible", &self.visible)
            .field("template", &self.template.as_ref().map(|_| "..."))
            .finish()
    }
}

impl<R> Column<R> {
    /// Create a sortable, visible, left-aligned column.
    pub fn new(field: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            header: header.into(),
            width: None,
            min_width: None,
            max_width: None,
            align: TextAlign::Left,
            kind: ColumnType::Plain,
            format: None,
            allow_sorting: true,
            visible: true,
            template: None,
        }
    }

    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    pub fn min_width(mut self, width: u16) -> Self {
        self.min_width = Some(width);
        self
    }

    pub fn max_width(mut self, width: u16) -> Self {
        self.max_width = Some(width);
        self
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub fn align_right(self) -> Self {
        self.align(TextAlign::Right)
    }

    pub fn align_center(self) -> Self {
        self.align(TextAlign::Center)
    }

    pub fn kind(mut self, kind: ColumnType) -> Self {
        self.kind = kind;
        self
    }

    /// Set the format spec (`currency-2dp`, `number-2dp`, or a date pattern).
    pub fn format(mut self, spec: impl Into<FormatSpec>) -> Self {
        self.format = Some(spec.into());
        self
    }

    pub fn sortable(mut self, sortable: bool) -> Self {
        self.allow_sorting = sortable;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Render cells of this column with `template` instead of formatting.
    pub fn template(mut self, template: impl Fn(&R, usize) -> Element + Send + Sync + 'static) -> Self {
        self.template = Some(Arc::new(template));
        self
    }

    /// Layout width of the column's cells.
    pub fn size(&self) -> Size {
        match self.width {
            Some(w) => Size::Fixed(self.clamp_width(w)),
            None => Size::Flex(1),
        }
    }

    /// Fixed width for text layout: the configured width, else `measured`,
    /// clamped to the min/max bounds.
    pub fn display_width(&self, measured: u16) -> u16 {
        self.clamp_width(self.width.unwrap_or(measured))
    }

    fn clamp_width(&self, w: u16) -> u16 {
        let w = self.min_width.map_or(w, |min| w.max(min));
        self.max_width.map_or(w, |max| w.min(max))
    }
}

impl<R: GridRow> Column<R> {
    /// Raw value of this column's field in `row`.
    pub fn value(&self, row: &R) -> Value {
        row.value(&self.field)
    }

    /// Display text for this column's field in `row`.
    pub fn format_value(&self, row: &R, formatter: &ValueFormatter) -> String {
        formatter.format(&self.value(row), self.format.as_ref(), self.kind)
    }

    /// Cell content for `row`. The template, if any, wins.
    pub fn render_cell(&self, row: &R, index: usize, formatter: &ValueFormatter) -> Element {
        match &self.template {
            Some(template) => template(row, index),
            None => Element::text(self.format_value(row, formatter)),
        }
    }
}

/// A validated column list.
///
/// Visible columns must name distinct, non-empty fields.
pub struct Columns<R> {
    columns: Vec<Column<R>>,
}

impl<R> Clone for Columns<R> {
    fn clone(&self) -> Self {
        Self {
            columns: self.columns.clone(),
        }
    }
}

impl<R> fmt::Debug for Columns<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.columns).finish()
    }
}

impl<R> Columns<R> {
    pub fn new(columns: Vec<Column<R>>) -> Result<Self, ColumnError> {
        let mut seen = HashSet::new();
        for (index, col) in columns.iter().enumerate() {
            if col.field.trim().is_empty() {
                warn!("column {index} has an empty field");
                return Err(ColumnError::EmptyField { index });
            }
            if col.visible && !seen.insert(col.field.as_str()) {
                warn!("duplicate visible column field '{}'", col.field);
                return Err(ColumnError::DuplicateField {
                    field: col.field.clone(),
                });
            }
        }
        Ok(Self { columns })
    }

    /// All columns, hidden ones included.
    pub fn all(&self) -> &[Column<R>] {
        &self.columns
    }

    pub fn visible(&self) -> impl Iterator<Item = &Column<R>> {
        self.columns.iter().filter(|c| c.visible)
    }

    pub fn visible_count(&self) -> usize {
        self.visible().count()
    }

    pub fn visible_fields(&self) -> Vec<String> {
        self.visible().map(|c| c.field.clone()).collect()
    }

    /// The visible column for `field`.
    pub fn find(&self, field: &str) -> Option<&Column<R>> {
        self.visible().find(|c| c.field == field)
    }
}

impl<R> TryFrom<Vec<Column<R>>> for Columns<R> {
    type Error = ColumnError;

    fn try_from(columns: Vec<Column<R>>) -> Result<Self, Self::Error> {
        Self::new(columns)
    }
}
