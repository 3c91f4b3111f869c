//! Per-render inputs.

use std::fmt;
use std::sync::Arc;

use griddom::Element;

use crate::actions::{ActionConfig, BulkActionConfig};
use crate::column::Columns;
use crate::pagination::{Pagination, PaginationIntents};
use crate::sort::SortState;

pub type RowClickHandler<R> = Arc<dyn Fn(&R) + Send + Sync>;

/// Everything the caller passes for one render.
///
/// Treated as an immutable snapshot: the grid reads it and emits intents
/// through its callbacks, it never writes back.
pub struct GridProps<'a, R> {
    pub columns: &'a Columns<R>,
    pub data: &'a [R],
    pub loading: bool,
    pub pagination: Option<Pagination>,
    pub page_intents: PaginationIntents,
    pub action_config: Option<&'a ActionConfig<R>>,
    pub bulk_action_config: Option<&'a BulkActionConfig<R>>,
    /// Current sort state when the grid's sort is controlled.
    pub sort_config: Option<&'a SortState>,
    pub on_row_click: Option<RowClickHandler<R>>,
    pub empty_message: Option<String>,
    pub empty_component: Option<Element>,
    /// Overrides the configured key field for this render.
    pub key_field: Option<String>,
    /// Overrides the configured skeleton row count for this render.
    pub skeleton_row_count: Option<usize>,
}

impl<'a, R> GridProps<'a, R> {
    pub fn new(columns: &'a Columns<R>, data: &'a [R]) -> Self {
        Self {
            columns,
            data,
            loading: false,
            pagination: None,
            page_intents: PaginationIntents::default(),
            action_config: None,
            bulk_action_config: None,
            sort_config: None,
            on_row_click: None,
            empty_message: None,
            empty_component: None,
            key_field: None,
            skeleton_row_count: None,
        }
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn pagination(mut self, pagination: Pagination, intents: PaginationIntents) -> Self {
        self.pagination = Some(pagination);
        self.page_intents = intents;
        self
    }

    pub fn actions(mut self, config: &'a ActionConfig<R>) -> Self {
        self.action_config = Some(config);
        self
    }

    pub fn bulk_actions(mut self, config: &'a BulkActionConfig<R>) -> Self {
        self.bulk_action_config = Some(config);
        self
    }

    pub fn sort_config(mut self, state: &'a SortState) -> Self {
        self.sort_config = Some(state);
        self
    }

    pub fn on_row_click(mut self, f: impl Fn(&R) + Send + Sync + 'static) -> Self {
        self.on_row_click = Some(Arc::new(f));
        self
    }

    pub fn empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = Some(message.into());
        self
    }

    pub fn empty_component(mut self, element: Element) -> Self {
        self.empty_component = Some(element);
        self
    }

    pub fn key_field(mut self, field: impl Into<String>) -> Self {
        self.key_field = Some(field.into());
        self
    }

    pub fn skeleton_row_count(mut self, count: usize) -> Self {
        self.skeleton_row_count = Some(count);
        self
    }

    /// Bulk actions are configured and enabled.
    pub fn bulk_enabled(&self) -> bool {
        self.bulk_action_config.is_some_and(|b| b.enabled)
    }
}

impl<R> fmt::Debug for GridProps<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridProps")
            .field("columns", self.columns)
            .field("rows", &self.data.len())
            .field("loading", &self.loading)
            .field("pagination", &self.pagination)
            .field("action_config", &self.action_config)
            .field("bulk_action_config", &self.bulk_action_config)
            .field("sort_config", &self.sort_config)
            .field("on_row_click", &self.on_row_click.is_some())
            .field("key_field", &self.key_field)
            .field("skeleton_row_count", &self.skeleton_row_count)
            .finish()
    }
}
