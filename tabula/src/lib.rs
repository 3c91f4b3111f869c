//! Tabular data grid engine.
//!
//! Columns, sorting, selection, pagination, row and bulk actions, loading
//! and empty states, and cell formatting for record lists. The grid never
//! fetches or mutates data: it renders a [`griddom::Element`] tree from the
//! inputs it is given and reports user intent back through callbacks.

pub mod actions;
pub mod column;
pub mod config;
pub mod error;
pub mod format;
pub mod grid;
pub mod model;
pub mod pagination;
pub mod selection;
pub mod skeleton;
pub mod sort;
pub mod target;

pub use error::GridError;
pub use grid::Grid;

pub mod prelude {
    pub use crate::actions::{
        Action, ActionConfig, ActionMode, ActionVariant, BulkAction, BulkActionConfig,
    };
    pub use crate::column::{Column, Columns, Template};
    pub use crate::config::{GridConfig, Locale};
    pub use crate::error::{ColumnError, FormatSpecError, GridError, TargetError};
    pub use crate::format::{ColumnType, FormatSpec, ValueFormatter};
    pub use crate::grid::{EventResult, Grid, GridEvent, GridPhase, GridProps};
    pub use crate::model::{GridRow, Numeric, Record, RowKey, Value};
    pub use crate::pagination::{PageIntent, Pagination, PaginationController, PaginationIntents};
    pub use crate::selection::{SelectAllState, Selection};
    pub use crate::skeleton::SkeletonGenerator;
    pub use crate::sort::{SortBinding, SortController, SortDirection, SortOutcome, SortState};
    pub use crate::target::GridTarget;
}
