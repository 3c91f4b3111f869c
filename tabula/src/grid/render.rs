use griddom::text::{display_width, render_plain};
use griddom::{Color, Element, Size, Style, TextAlign};
use log::trace;

use super::{Grid, GridPhase, GridProps};
use crate::actions::{RowActionState, render_bulk_toolbar, render_row_actions};
use crate::model::{GridRow, RowKey};
use crate::pagination::render_footer;
use crate::selection::SelectAllState;
use crate::skeleton::SkeletonShape;
use crate::sort::{SortDirection, SortState};
use crate::target::GridTarget;

/// Data key holding the row key on each rendered row.
pub const ROW_KEY_DATA: &str = "row-key";

const CELL_GAP: u16 = 1;

impl<R: GridRow> Grid<R> {
    /// Build the element tree for `props`.
    ///
    /// Only the skeleton memo is updated; all other instance state is read.
    pub fn render(&mut self, props: &GridProps<'_, R>) -> Element {
        let phase = GridPhase::of(props);
        trace!(
            "grid '{}' render: {:?}, {} rows",
            self.config.id,
            phase,
            props.data.len()
        );

        let id = self.config.id.clone();
        let sort = self.sort.current(props.sort_config);
        let bulk = props.bulk_enabled();
        let has_actions = props.action_config.is_some();

        // Display order and formatted cells, populated only.
        let order: Vec<usize> = match phase {
            GridPhase::Populated if !self.sort.is_controlled() => {
                crate::sort::sorted_indices(props.data, &sort)
            }
            GridPhase::Populated => (0..props.data.len()).collect(),
            _ => Vec::new(),
        };
        let cells: Vec<Vec<Element>> = order
            .iter()
            .map(|&i| {
                props
                    .columns
                    .visible()
                    .map(|col| col.render_cell(&props.data[i], i, &self.formatter))
                    .collect()
            })
            .collect();

        let widths = self.column_widths(props, &sort, &cells);
        let keys = RowKey::all(props.data, self.key_field(props));

        let mut table = Element::col()
            .id(format!("{id}-table"))
            .child(self.render_header(props, &sort, &widths, &keys, phase));

        let body = match phase {
            GridPhase::Loading => {
                let fields = props.columns.visible_fields();
                let rows = self.skeleton.render(
                    SkeletonShape {
                        row_count: props
                            .skeleton_row_count
                            .unwrap_or(self.config.skeleton_row_count),
                        fields: &fields,
                        widths: &widths,
                        checkbox: bulk,
                        actions: has_actions,
                    },
                    &id,
                );
                Element::col().id(format!("{id}-body")).children(rows)
            }
            GridPhase::Empty => Element::col()
                .id(format!("{id}-body"))
                .child(self.render_empty(props, &widths, bulk, has_actions)),
            GridPhase::Populated => {
                let rows = order
                    .iter()
                    .zip(cells)
                    .map(|(&index, row_cells)| {
                        self.render_row(props, index, &keys[index], row_cells, &widths)
                    });
                Element::col().id(format!("{id}-body")).children(rows)
            }
        };
        table = table.child(body);

        let mut root = Element::col().id(id.clone()).gap(0);
        if phase == GridPhase::Populated {
            if let Some(config) = props.bulk_action_config.filter(|b| b.enabled) {
                let live = self.selected_rows(props).len();
                if live > 0 {
                    root = root.child(render_bulk_toolbar(config, live, &id));
                }
            }
        }
        root = root.child(table);
        if let Some(pagination) = &props.pagination {
            root = root.child(render_footer(pagination, &id));
        }
        root
    }

    /// Text width per visible column: configured width, else the widest of
    /// header and cells, within the column's bounds.
    fn column_widths(
        &self,
        props: &GridProps<'_, R>,
        sort: &SortState,
        cells: &[Vec<Element>],
    ) -> Vec<u16> {
        props
            .columns
            .visible()
            .enumerate()
            .map(|(c, col)| {
                let header = display_width(&header_label(&col.header, sort.direction_for(&col.field)));
                let widest = cells
                    .iter()
                    .filter_map(|row| row.get(c))
                    .map(|cell| {
                        render_plain(cell)
                            .lines()
                            .map(display_width)
                            .max()
                            .unwrap_or(0)
                    })
                    .fold(header, usize::max);
                col.display_width(u16::try_from(widest).unwrap_or(u16::MAX))
            })
            .collect()
    }

    fn render_header(
        &self,
        props: &GridProps<'_, R>,
        sort: &SortState,
        widths: &[u16],
        keys: &[RowKey],
        phase: GridPhase,
    ) -> Element {
        let id = &self.config.id;
        let mut header = Element::row()
            .id(format!("{id}-header"))
            .gap(CELL_GAP)
            .style(Style::new().bold());

        if props.bulk_enabled() {
            let live = phase == GridPhase::Populated;
            let state = if live {
                self.selection.select_all_state(keys)
            } else {
                SelectAllState::Unchecked
            };
            let checkbox = Element::checkbox(state == SelectAllState::Checked)
                .id(format!("{id}-select-all"))
                .indeterminate(state == SelectAllState::Indeterminate)
                .disabled(!live);
            let checkbox = GridTarget::SelectAll.attach(checkbox);
            header = header.child(
                GridTarget::Isolate.attach(
                    Element::row()
                        .id(format!("{id}-select-all-cell"))
                        .child(checkbox),
                ),
            );
        }

        for (col, &width) in props.columns.visible().zip(widths) {
            let direction = sort.direction_for(&col.field);
            let mut cell = Element::text(header_label(&col.header, direction))
                .id(format!("{id}-header-{}", col.field))
                .width(Size::Fixed(width))
                .text_align(col.align)
                .data("field", col.field.clone());
            if let Some(min) = col.min_width {
                cell = cell.min_width(min);
            }
            if let Some(max) = col.max_width {
                cell = cell.max_width(max);
            }
            if !col.allow_sorting {
                cell = cell.style(Style::new().foreground(Color::var("muted")));
            }
            let target = GridTarget::Header {
                field: col.field.clone(),
            };
            header = header.child(target.attach(cell).focusable(col.allow_sorting));
        }

        if props.action_config.is_some() {
            header = header.child(Element::text("").id(format!("{id}-header-action-cell")));
        }
        header
    }

    fn render_row(
        &self,
        props: &GridProps<'_, R>,
        index: usize,
        key: &RowKey,
        cells: Vec<Element>,
        widths: &[u16],
    ) -> Element {
        let id = &self.config.id;
        let row_data = &props.data[index];
        let hovered = self.hovered.as_ref() == Some(key);
        let selected = self.selection.is_selected(key);

        let mut row = Element::row()
            .id(format!("{id}-row-{index}"))
            .gap(CELL_GAP)
            .focusable(props.on_row_click.is_some())
            .data(ROW_KEY_DATA, key.to_string());
        if selected {
            row = row.style(Style::new().background(Color::var("row-selected")));
        } else if hovered {
            row = row.style(Style::new().background(Color::var("row-hover")));
        }

        if props.bulk_enabled() {
            let checkbox = GridTarget::SelectRow { index }
                .attach(Element::checkbox(selected).id(format!("{id}-row-{index}-select")));
            row = row.child(
                GridTarget::Isolate.attach(
                    Element::row()
                        .id(format!("{id}-row-{index}-select-cell"))
                        .child(checkbox),
                ),
            );
        }

        for ((col, cell), &width) in props.columns.visible().zip(cells).zip(widths) {
            row = row.child(
                Element::row()
                    .id(format!("{id}-row-{index}-cell-{}", col.field))
                    .width(Size::Fixed(width))
                    .text_align(col.align)
                    .child(cell.width(Size::Fixed(width)).text_align(col.align)),
            );
        }

        if let Some(config) = props.action_config {
            let state = RowActionState {
                hovered,
                menu_open: self.open_menu.as_ref() == Some(key),
            };
            let mut cell = Element::row().id(format!("{id}-row-{index}-action-cell"));
            if let Some(actions) = render_row_actions(config, row_data, index, state, id) {
                cell = cell.child(actions);
            }
            row = row.child(GridTarget::Isolate.attach(cell));
        }

        GridTarget::Row { index }.attach(row)
    }

    fn render_empty(
        &self,
        props: &GridProps<'_, R>,
        widths: &[u16],
        bulk: bool,
        has_actions: bool,
    ) -> Element {
        let id = &self.config.id;
        let span = widths.len() + usize::from(bulk) + usize::from(has_actions);
        let text_width: usize = widths.iter().map(|&w| usize::from(w)).sum::<usize>()
            + usize::from(bulk) * 3
            + span.saturating_sub(1) * usize::from(CELL_GAP);
        let width = u16::try_from(text_width).unwrap_or(u16::MAX);

        let content = match &props.empty_component {
            Some(component) => component.clone(),
            None => Element::text(
                props
                    .empty_message
                    .clone()
                    .unwrap_or_else(|| self.config.empty_message.clone()),
            )
            .style(Style::new().foreground(Color::var("muted"))),
        };

        Element::row()
            .id(format!("{id}-empty"))
            .span(u16::try_from(span).unwrap_or(u16::MAX))
            .width(Size::Fixed(width))
            .text_align(TextAlign::Center)
            .child(content)
    }
}

fn header_label(header: &str, direction: SortDirection) -> String {
    match direction {
        SortDirection::Asc => format!("{header} ▲"),
        SortDirection::Desc => format!("{header} ▼"),
        SortDirection::None => header.to_string(),
    }
}
