//! The grid: one mounted table instance.
//!
//! A [`Grid`] owns the state that belongs to the instance (selection, hover,
//! the open row menu, uncontrolled sort and the skeleton memo). Everything
//! else comes in through [`GridProps`] on each call and is never written to.
//!
//! ```
//! use tabula::prelude::*;
//!
//! let columns = Columns::new(vec![
//!     Column::new("name", "Name"),
//!     Column::new("fee", "Fee").format("currency-2dp"),
//! ])
//! .unwrap();
//! let data = vec![Record::new().set("id", 1).set("name", "Ada").set("fee", 1234.5)];
//!
//! let mut grid = Grid::new(GridConfig::new("students"));
//! let root = grid.render(&GridProps::new(&columns, &data));
//! assert!(griddom::collect_text(&root).contains("$1,234.50"));
//! ```

mod events;
mod props;
mod render;

use std::marker::PhantomData;

pub use events::{EventResult, GridEvent};
pub use props::{GridProps, RowClickHandler};

use griddom::{Element, path_to};
use log::{debug, trace};

use crate::config::GridConfig;
use crate::error::GridError;
use crate::format::ValueFormatter;
use crate::model::{GridRow, RowKey};
use crate::pagination::PaginationController;
use crate::selection::Selection;
use crate::skeleton::SkeletonGenerator;
use crate::sort::{SortBinding, SortController, SortOutcome, SortState};
use crate::target::GridTarget;

/// Which of the three mutually exclusive views a render shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridPhase {
    Loading,
    Empty,
    Populated,
}

impl GridPhase {
    pub fn resolve(loading: bool, rows: usize) -> Self {
        if loading {
            GridPhase::Loading
        } else if rows == 0 {
            GridPhase::Empty
        } else {
            GridPhase::Populated
        }
    }

    pub fn of<R>(props: &GridProps<'_, R>) -> Self {
        Self::resolve(props.loading, props.data.len())
    }
}

/// A mounted grid over rows of type `R`.
#[derive(Debug)]
pub struct Grid<R> {
    config: GridConfig,
    formatter: ValueFormatter,
    selection: Selection,
    hovered: Option<RowKey>,
    open_menu: Option<RowKey>,
    sort: SortController,
    skeleton: SkeletonGenerator,
    _rows: PhantomData<fn(&R)>,
}

impl<R: GridRow> Grid<R> {
    /// A grid with uncontrolled sort starting unsorted.
    pub fn new(config: GridConfig) -> Self {
        Self::with_sort(config, SortBinding::uncontrolled())
    }

    /// A grid whose sort mode is fixed by `binding` for its whole life.
    pub fn with_sort(config: GridConfig, binding: SortBinding) -> Self {
        Self {
            formatter: ValueFormatter::from_config(&config),
            skeleton: SkeletonGenerator::new(config.skeleton_seed),
            selection: Selection::new(),
            hovered: None,
            open_menu: None,
            sort: SortController::new(binding),
            config,
            _rows: PhantomData,
        }
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn formatter(&self) -> &ValueFormatter {
        &self.formatter
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn hovered(&self) -> Option<&RowKey> {
        self.hovered.as_ref()
    }

    pub fn open_menu(&self) -> Option<&RowKey> {
        self.open_menu.as_ref()
    }

    /// Sort state shown for `props`.
    pub fn sort_state(&self, props: &GridProps<'_, R>) -> SortState {
        self.sort.current(props.sort_config)
    }

    /// Selected rows that are still present in `props.data`.
    pub fn selected_rows<'a>(&self, props: &GridProps<'a, R>) -> Vec<&'a R> {
        self.selection.selected_rows(props.data, self.key_field(props))
    }

    /// Key field in effect for `props`.
    pub fn key_field<'p>(&'p self, props: &'p GridProps<'_, R>) -> &'p str {
        props.key_field.as_deref().unwrap_or(&self.config.key_field)
    }

    fn key_at(&self, props: &GridProps<'_, R>, index: usize) -> Option<RowKey> {
        props
            .data
            .get(index)
            .map(|row| RowKey::of(row, self.key_field(props), index))
    }

    /// Handle one interaction.
    pub fn dispatch(&mut self, event: GridEvent, props: &GridProps<'_, R>) -> EventResult {
        let phase = GridPhase::of(props);
        let populated = phase == GridPhase::Populated;

        let result = match event {
            GridEvent::Hover { index } => match self.key_at(props, index) {
                Some(key) if populated => {
                    self.hovered = Some(key);
                    EventResult::Consumed
                }
                _ => EventResult::Ignored,
            },
            GridEvent::Leave => {
                let was = self.hovered.take();
                was.is_some().into()
            }
            GridEvent::Click(target) => self.dispatch_click(target, props, populated),
        };

        if result == EventResult::Ignored {
            trace!("grid '{}': event ignored in {:?}", self.config.id, phase);
        }
        result
    }

    fn dispatch_click(
        &mut self,
        target: GridTarget,
        props: &GridProps<'_, R>,
        populated: bool,
    ) -> EventResult {
        match target {
            GridTarget::Isolate => EventResult::Consumed,
            GridTarget::Header { field } => {
                let Some(column) = props.columns.find(&field) else {
                    return EventResult::Ignored;
                };
                match self.sort.click(column, props.sort_config) {
                    SortOutcome::Ignored => EventResult::Ignored,
                    SortOutcome::Updated(_) | SortOutcome::Emitted(_) => EventResult::Consumed,
                }
            }
            GridTarget::SelectAll if populated && props.bulk_enabled() => {
                let keys = RowKey::all(props.data, self.key_field(props));
                self.selection.toggle_all(&keys);
                EventResult::Consumed
            }
            GridTarget::SelectRow { index } if populated && props.bulk_enabled() => {
                match self.key_at(props, index) {
                    Some(key) => {
                        self.selection.toggle_row(key);
                        EventResult::Consumed
                    }
                    None => EventResult::Ignored,
                }
            }
            GridTarget::Row { index } if populated => {
                match (props.data.get(index), &props.on_row_click) {
                    (Some(row), Some(on_row_click)) => {
                        debug!("row {index} clicked");
                        on_row_click(row);
                        EventResult::Consumed
                    }
                    _ => EventResult::Ignored,
                }
            }
            GridTarget::MenuToggle { index } if populated => match self.key_at(props, index) {
                Some(key) => {
                    if self.open_menu.as_ref() == Some(&key) {
                        self.open_menu = None;
                    } else {
                        self.open_menu = Some(key);
                    }
                    EventResult::Consumed
                }
                None => EventResult::Ignored,
            },
            GridTarget::Action { index, action } if populated => {
                let found = props.action_config.and_then(|config| {
                    let row = props.data.get(index)?;
                    let action = config.actions.get(action)?;
                    (!action.is_hidden(row)).then_some((row, action))
                });
                match found {
                    Some((row, action)) => {
                        self.open_menu = None;
                        action.invoke(row);
                        EventResult::Consumed
                    }
                    None => EventResult::Ignored,
                }
            }
            GridTarget::Bulk { action } if populated => {
                let Some(bulk) = props
                    .bulk_action_config
                    .filter(|b| b.enabled)
                    .and_then(|b| b.actions.get(action))
                else {
                    return EventResult::Ignored;
                };
                let rows = self.selected_rows(props);
                if rows.is_empty() {
                    return EventResult::Ignored;
                }
                bulk.invoke(&rows);
                EventResult::Consumed
            }
            GridTarget::Page { page } => match &props.pagination {
                Some(state) => {
                    let intents = PaginationController::new(state, &props.page_intents).go_to(page);
                    (!intents.is_empty()).into()
                }
                None => EventResult::Ignored,
            },
            GridTarget::PageSize { size } => match &props.pagination {
                Some(state) => {
                    let intents =
                        PaginationController::new(state, &props.page_intents).set_page_size(size);
                    (!intents.is_empty()).into()
                }
                None => EventResult::Ignored,
            },
            _ => EventResult::Ignored,
        }
    }

    /// Handle a click on the element `id` of a tree produced by
    /// [`render`](Self::render).
    ///
    /// The innermost target on the path from the root wins. Disabled
    /// elements swallow the click.
    pub fn click(
        &mut self,
        root: &Element,
        id: &str,
        props: &GridProps<'_, R>,
    ) -> Result<EventResult, GridError> {
        for element in path_to(root, id).into_iter().rev() {
            if element.disabled {
                trace!("click on disabled '{}'", element.id);
                return Ok(EventResult::Ignored);
            }
            if let Some(target) = GridTarget::of(element)? {
                return Ok(self.dispatch(GridEvent::Click(target), props));
            }
        }
        trace!("click on '{id}' hit no target");
        Ok(EventResult::Ignored)
    }

    /// Pointer moved onto the element `id`. Hover follows the enclosing row,
    /// and is cleared outside of any row.
    pub fn hover(
        &mut self,
        root: &Element,
        id: &str,
        props: &GridProps<'_, R>,
    ) -> Result<EventResult, GridError> {
        for element in path_to(root, id).into_iter().rev() {
            if let Some(GridTarget::Row { index }) = GridTarget::of(element)? {
                return Ok(self.dispatch(GridEvent::Hover { index }, props));
            }
        }
        Ok(self.leave())
    }

    /// Pointer left the table.
    pub fn leave(&mut self) -> EventResult {
        self.hovered.take().is_some().into()
    }
}
