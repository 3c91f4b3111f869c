use std::sync::{Arc, Mutex};

use griddom::text::render_plain;
use griddom::{collect_text, find_all, find_element, Content, Element};
use tabula::prelude::*;
use tabula::target::TARGET_KEY;

fn columns() -> Columns<Record> {
    Columns::new(vec![
        Column::new("name", "Name"),
        Column::new("age", "Age")
            .kind(ColumnType::Number)
            .format("number-2dp")
            .align_right(),
    ])
    .unwrap()
}

fn data() -> Vec<Record> {
    vec![
        Record::new().set("id", 1).set("name", "A").set("age", 5),
        Record::new().set("id", 2).set("name", "B").set("age", Value::Null),
    ]
}

fn grid() -> Grid<Record> {
    Grid::new(GridConfig::default().with_skeleton_seed(42))
}

fn text(root: &Element, id: &str) -> String {
    collect_text(find_element(root, id).unwrap_or_else(|| panic!("no element '{id}'")))
}

fn body_row_ids(root: &Element) -> Vec<String> {
    find_element(root, "grid-body")
        .unwrap()
        .child_elements()
        .iter()
        .map(|e| e.id.clone())
        .collect()
}

fn placeholders(root: &Element) -> Vec<u8> {
    find_all(root, |e| matches!(e.content, Content::Placeholder { .. }))
        .into_iter()
        .filter_map(|e| match e.content {
            Content::Placeholder { percent } => Some(percent),
            _ => None,
        })
        .collect()
}

fn recorder<T: Send + 'static>() -> (Arc<Mutex<Vec<T>>>, Arc<Mutex<Vec<T>>>) {
    let log = Arc::new(Mutex::new(Vec::new()));
    (Arc::clone(&log), log)
}

#[test]
fn test_null_cell_renders_placeholder() {
    let (cols, data) = (columns(), data());
    let mut grid = grid();
    let root = grid.render(&GridProps::new(&cols, &data));

    assert_eq!(text(&root, "grid-row-0-cell-age"), "5.00");
    assert_eq!(text(&root, "grid-row-1-cell-age"), "-");
    assert_eq!(text(&root, "grid-row-1-cell-name"), "B");
}

#[test]
fn test_phase_resolution() {
    assert_eq!(GridPhase::resolve(true, 10), GridPhase::Loading);
    assert_eq!(GridPhase::resolve(true, 0), GridPhase::Loading);
    assert_eq!(GridPhase::resolve(false, 0), GridPhase::Empty);
    assert_eq!(GridPhase::resolve(false, 3), GridPhase::Populated);
}

#[test]
fn test_loading_renders_exact_skeleton_rows() {
    let cols = columns();
    let mut grid = Grid::new(GridConfig::default().with_skeleton_row_count(3).with_skeleton_seed(1));

    for rows in [0, 2, 25] {
        let data: Vec<Record> = (0..rows).map(|i| Record::new().set("id", i).set("name", "X")).collect();
        let root = grid.render(&GridProps::new(&cols, &data).loading(true));
        let ids = body_row_ids(&root);
        assert_eq!(ids, vec!["grid-skeleton-0", "grid-skeleton-1", "grid-skeleton-2"]);
        assert!(!collect_text(&root).contains('X'));
        assert_eq!(placeholders(&root).len(), 3 * 2);
    }
}

#[test]
fn test_skeleton_widths_are_stable() {
    let (cols, data) = (columns(), data());
    let mut grid = grid();

    let first = placeholders(&grid.render(&GridProps::new(&cols, &data).loading(true)));
    let again = placeholders(&grid.render(&GridProps::new(&cols, &data).loading(true)));
    assert_eq!(first, again);
    assert!(first.iter().all(|w| (50..90).contains(w)));

    // Loaded, then loading again on the same instance.
    grid.render(&GridProps::new(&cols, &data));
    let later = placeholders(&grid.render(&GridProps::new(&cols, &data).loading(true)));
    assert_eq!(first, later);
}

#[test]
fn test_skeleton_follows_table_shape() {
    let (cols, data) = (columns(), data());
    let actions = ActionConfig::icons().action(Action::new("Edit", |_: &Record| {}));
    let bulk = BulkActionConfig::new().action(BulkAction::new("Export", |_: &[&Record]| {}));
    let mut grid = grid();

    let props = GridProps::new(&cols, &data)
        .loading(true)
        .actions(&actions)
        .bulk_actions(&bulk);
    let root = grid.render(&props);
    let row = find_element(&root, "grid-skeleton-0").unwrap();
    let kids = row.child_elements();
    assert_eq!(kids.len(), 4);
    assert!(matches!(kids[0].content, Content::Checkbox { checked: false, .. }));
    assert!(matches!(kids[3].content, Content::Placeholder { percent: 100 }));

    // Header checkbox exists but is inert while loading.
    assert!(find_element(&root, "grid-select-all").unwrap().disabled);
    assert!(find_element(&root, "grid-toolbar").is_none());
}

#[test]
fn test_empty_state() {
    let cols = columns();
    let data: Vec<Record> = Vec::new();
    let mut grid = grid();

    let root = grid.render(&GridProps::new(&cols, &data));
    let empty = find_element(&root, "grid-empty").unwrap();
    assert_eq!(collect_text(empty), "No data available");
    assert_eq!(empty.span, 2);

    let root = grid.render(&GridProps::new(&cols, &data).empty_message("No students yet"));
    assert_eq!(text(&root, "grid-empty"), "No students yet");

    let custom = Element::col()
        .id("custom-empty")
        .child(Element::text("Nothing here"))
        .child(Element::button("Add student"));
    let actions = ActionConfig::dropdown().action(Action::new("Edit", |_: &Record| {}));
    let bulk = BulkActionConfig::new();
    let props = GridProps::new(&cols, &data)
        .empty_component(custom)
        .actions(&actions)
        .bulk_actions(&bulk);
    let root = grid.render(&props);
    assert!(find_element(&root, "custom-empty").is_some());
    assert_eq!(find_element(&root, "grid-empty").unwrap().span, 4);
}

#[test]
fn test_row_click_isolated_from_action_and_checkbox_cells() {
    let (cols, data) = (columns(), data());
    let (clicks, sink) = recorder();
    let (edits, edit_sink) = recorder();
    let actions = ActionConfig::icons().action(Action::new("Edit", move |row: &Record| {
        edit_sink.lock().unwrap().push(row.value("id"));
    }));
    let bulk = BulkActionConfig::new();
    let props = GridProps::new(&cols, &data)
        .actions(&actions)
        .bulk_actions(&bulk)
        .on_row_click(move |row: &Record| sink.lock().unwrap().push(row.value("name")));

    let mut grid = grid();
    let root = grid.render(&props);

    for id in [
        "grid-row-0-select",
        "grid-row-0-select-cell",
        "grid-row-0-action-0",
        "grid-row-0-action-cell",
        "grid-row-0-actions",
    ] {
        assert_eq!(grid.click(&root, id, &props).unwrap(), EventResult::Consumed, "{id}");
    }
    assert!(clicks.lock().unwrap().is_empty());
    assert_eq!(*edits.lock().unwrap(), vec![Value::Int(1)]);
    assert_eq!(grid.selection().len(), 1);

    assert_eq!(
        grid.click(&root, "grid-row-1-cell-age", &props).unwrap(),
        EventResult::Consumed
    );
    assert_eq!(*clicks.lock().unwrap(), vec![Value::from("B")]);
}

#[test]
fn test_row_click_without_handler_is_ignored() {
    let (cols, data) = (columns(), data());
    let props = GridProps::new(&cols, &data);
    let mut grid = grid();
    let root = grid.render(&props);
    assert_eq!(
        grid.click(&root, "grid-row-0-cell-name", &props).unwrap(),
        EventResult::Ignored
    );
    assert_eq!(grid.click(&root, "nope", &props).unwrap(), EventResult::Ignored);
}

#[test]
fn test_hidden_only_action_renders_nothing() {
    let cols = columns();
    let data = vec![
        Record::new().set("id", 1).set("name", "A").set("status", "archived"),
        Record::new().set("id", 2).set("name", "B").set("status", "active"),
    ];
    let actions = ActionConfig::dropdown().action(
        Action::new("Archive", |_: &Record| {})
            .hidden(|row: &Record| row.value("status") == Value::from("archived")),
    );
    let props = GridProps::new(&cols, &data).actions(&actions);
    let mut grid = grid();
    let root = grid.render(&props);

    assert!(find_element(&root, "grid-row-0-action-cell")
        .unwrap()
        .child_elements()
        .is_empty());
    assert!(find_element(&root, "grid-row-0-menu").is_none());
    assert!(find_element(&root, "grid-row-1-menu").is_some());

    // A forged click on the hidden action does nothing.
    let forged = GridTarget::Action { index: 0, action: 0 };
    assert_eq!(grid.dispatch(forged.into(), &props), EventResult::Ignored);
}

#[test]
fn test_show_on_hover_follows_hovered_row() {
    let (cols, data) = (columns(), data());
    let actions = ActionConfig::icons()
        .show_on_hover(true)
        .action(Action::new("Edit", |_: &Record| {}).icon("✎"))
        .action(Action::new("Delete", |_: &Record| {}).icon("🗑").destructive());
    let props = GridProps::new(&cols, &data).actions(&actions);
    let mut grid = grid();

    let transparent = |root: &Element, row: usize| -> Vec<bool> {
        (0..2)
            .map(|i| {
                find_element(root, &format!("grid-row-{row}-action-{i}"))
                    .unwrap()
                    .style
                    .is_transparent()
            })
            .collect()
    };

    let root = grid.render(&props);
    assert_eq!(transparent(&root, 0), vec![true, true]);
    assert_eq!(transparent(&root, 1), vec![true, true]);

    assert_eq!(
        grid.hover(&root, "grid-row-0-cell-name", &props).unwrap(),
        EventResult::Consumed
    );
    assert_eq!(grid.hovered(), Some(&RowKey::from("1")));
    let root = grid.render(&props);
    assert_eq!(transparent(&root, 0), vec![false, false]);
    assert_eq!(transparent(&root, 1), vec![true, true]);

    // Hovering a button inside row 1 moves hover there.
    grid.hover(&root, "grid-row-1-action-1", &props).unwrap();
    assert_eq!(grid.hovered(), Some(&RowKey::from("2")));

    assert_eq!(grid.leave(), EventResult::Consumed);
    assert_eq!(grid.leave(), EventResult::Ignored);
    let root = grid.render(&props);
    assert_eq!(transparent(&root, 1), vec![true, true]);
}

#[test]
fn test_bulk_toolbar_and_selection() {
    let (cols, data) = (columns(), data());
    let (promoted, sink) = recorder();
    let bulk = BulkActionConfig::new().action(BulkAction::new("Promote", move |rows: &[&Record]| {
        sink.lock()
            .unwrap()
            .push(rows.iter().map(|r| r.value("id")).collect::<Vec<_>>());
    }));
    let props = GridProps::new(&cols, &data).bulk_actions(&bulk);
    let mut grid = grid();

    let root = grid.render(&props);
    assert!(find_element(&root, "grid-toolbar").is_none());
    assert_eq!(render_plain(find_element(&root, "grid-select-all").unwrap()), "[ ]");

    grid.click(&root, "grid-row-1-select", &props).unwrap();
    let root = grid.render(&props);
    assert_eq!(text(&root, "grid-toolbar"), "1 selected Promote");
    assert_eq!(render_plain(find_element(&root, "grid-select-all").unwrap()), "[-]");
    assert_eq!(render_plain(find_element(&root, "grid-row-1-select").unwrap()), "[x]");

    grid.click(&root, "grid-bulk-0", &props).unwrap();
    assert_eq!(*promoted.lock().unwrap(), vec![vec![Value::Int(2)]]);

    grid.click(&root, "grid-select-all", &props).unwrap();
    let root = grid.render(&props);
    assert_eq!(text(&root, "grid-toolbar"), "2 selected Promote");
    assert_eq!(render_plain(find_element(&root, "grid-select-all").unwrap()), "[x]");

    grid.click(&root, "grid-select-all", &props).unwrap();
    let root = grid.render(&props);
    assert!(grid.selection().is_empty());
    assert!(find_element(&root, "grid-toolbar").is_none());
}

#[test]
fn test_disabled_bulk_config_hides_checkboxes() {
    let (cols, data) = (columns(), data());
    let bulk = BulkActionConfig::new()
        .enabled(false)
        .action(BulkAction::new("Promote", |_: &[&Record]| {}));
    let props = GridProps::new(&cols, &data).bulk_actions(&bulk);
    let mut grid = grid();
    let root = grid.render(&props);
    assert!(find_element(&root, "grid-select-all").is_none());
    assert!(find_element(&root, "grid-row-0-select").is_none());
    assert_eq!(
        grid.dispatch(GridTarget::SelectAll.into(), &props),
        EventResult::Ignored
    );
}

#[test]
fn test_toolbar_ignores_stale_selection() {
    let cols = columns();
    let page_one = data();
    let page_two = vec![Record::new().set("id", 3).set("name", "C").set("age", 9)];
    let bulk = BulkActionConfig::new().action(BulkAction::new("Promote", |_: &[&Record]| {}));
    let mut grid = grid();

    let props = GridProps::new(&cols, &page_one).bulk_actions(&bulk);
    let root = grid.render(&props);
    grid.click(&root, "grid-row-0-select", &props).unwrap();

    let props = GridProps::new(&cols, &page_two).bulk_actions(&bulk);
    let root = grid.render(&props);
    assert!(find_element(&root, "grid-toolbar").is_none());
    assert_eq!(grid.selection().len(), 1);
    assert_eq!(grid.dispatch(GridTarget::Bulk { action: 0 }.into(), &props), EventResult::Ignored);
}

#[test]
fn test_uncontrolled_header_sort_reorders_display_only() {
    let cols = columns();
    let data = vec![
        Record::new().set("id", 1).set("name", "B").set("age", 5),
        Record::new().set("id", 2).set("name", "A").set("age", 7),
        Record::new().set("id", 3).set("name", "C").set("age", 6),
    ];
    let props = GridProps::new(&cols, &data);
    let mut grid = grid();

    let root = grid.render(&props);
    assert_eq!(body_row_ids(&root), vec!["grid-row-0", "grid-row-1", "grid-row-2"]);

    grid.click(&root, "grid-header-name", &props).unwrap();
    let root = grid.render(&props);
    assert_eq!(body_row_ids(&root), vec!["grid-row-1", "grid-row-0", "grid-row-2"]);
    assert_eq!(text(&root, "grid-header-name"), "Name ▲");

    grid.click(&root, "grid-header-name", &props).unwrap();
    let root = grid.render(&props);
    assert_eq!(body_row_ids(&root), vec!["grid-row-2", "grid-row-0", "grid-row-1"]);
    assert_eq!(text(&root, "grid-header-name"), "Name ▼");

    grid.click(&root, "grid-header-name", &props).unwrap();
    let root = grid.render(&props);
    assert_eq!(body_row_ids(&root), vec!["grid-row-0", "grid-row-1", "grid-row-2"]);
    assert_eq!(text(&root, "grid-header-name"), "Name");

    assert_eq!(data[0].value("name"), Value::from("B"));
}

#[test]
fn test_unsortable_header_click_is_ignored() {
    let cols = Columns::new(vec![
        Column::new("name", "Name"),
        Column::new("notes", "Notes").sortable(false),
    ])
    .unwrap();
    let data = data();
    let props = GridProps::new(&cols, &data);
    let mut grid = grid();
    let root = grid.render(&props);

    assert_eq!(
        grid.click(&root, "grid-header-notes", &props).unwrap(),
        EventResult::Ignored
    );
    assert_eq!(grid.sort_state(&props), SortState::none());
}

#[test]
fn test_controlled_sort_emits_token_and_keeps_order() {
    let cols = columns();
    let data = vec![
        Record::new().set("id", 1).set("name", "B"),
        Record::new().set("id", 2).set("name", "A"),
    ];
    let (tokens, sink) = recorder();
    let mut grid: Grid<Record> = Grid::with_sort(
        GridConfig::default(),
        SortBinding::controlled(move |t| sink.lock().unwrap().push(t)),
    );

    let current = SortState::asc("name");
    let props = GridProps::new(&cols, &data).sort_config(&current);
    let root = grid.render(&props);
    assert_eq!(text(&root, "grid-header-name"), "Name ▲");
    assert_eq!(body_row_ids(&root), vec!["grid-row-0", "grid-row-1"]);

    grid.click(&root, "grid-header-name", &props).unwrap();
    grid.click(&root, "grid-header-age", &props).unwrap();
    assert_eq!(
        *tokens.lock().unwrap(),
        vec![Some("-name".to_string()), Some("age".to_string())]
    );
    // The grid did not adopt the state itself.
    assert_eq!(grid.sort_state(&props), current);
}

#[test]
fn test_pagination_footer() {
    let (cols, data) = (columns(), data());
    let (intents_log, sink) = recorder();
    let page_sink = Arc::clone(&sink);
    let intents = PaginationIntents::new()
        .on_page_change(move |p| page_sink.lock().unwrap().push(PageIntent::Page(p)))
        .on_page_size_change(move |s| sink.lock().unwrap().push(PageIntent::PageSize(s)));
    let props = GridProps::new(&cols, &data).pagination(Pagination::new(1, 10, 45), intents);
    let mut grid = grid();
    let root = grid.render(&props);

    assert_eq!(text(&root, "grid-summary"), "Showing 1 to 10 of 45");
    assert_eq!(text(&root, "grid-page-label"), "Page 1 of 5");
    assert!(find_element(&root, "grid-page-prev").unwrap().disabled);
    assert!(find_element(&root, "grid-page-first").unwrap().disabled);
    assert!(!find_element(&root, "grid-page-next").unwrap().disabled);

    assert_eq!(grid.click(&root, "grid-page-prev", &props).unwrap(), EventResult::Ignored);
    assert_eq!(grid.click(&root, "grid-page-next", &props).unwrap(), EventResult::Consumed);
    assert_eq!(grid.click(&root, "grid-page-last", &props).unwrap(), EventResult::Consumed);
    assert_eq!(grid.click(&root, "grid-size-10", &props).unwrap(), EventResult::Ignored);
    assert_eq!(grid.click(&root, "grid-size-50", &props).unwrap(), EventResult::Consumed);

    assert_eq!(
        *intents_log.lock().unwrap(),
        vec![
            PageIntent::Page(2),
            PageIntent::Page(5),
            PageIntent::PageSize(50),
            PageIntent::Page(1),
        ]
    );
}

#[test]
fn test_pagination_footer_with_no_results() {
    let cols = columns();
    let data: Vec<Record> = Vec::new();
    let props = GridProps::new(&cols, &data).pagination(Pagination::new(1, 10, 0), PaginationIntents::new());
    let mut grid = grid();
    let root = grid.render(&props);
    assert_eq!(text(&root, "grid-summary"), "No results");
    assert_eq!(text(&root, "grid-page-label"), "Page 1 of 1");
    assert!(find_element(&root, "grid-page-next").unwrap().disabled);
}

#[test]
fn test_dropdown_menu_opens_and_closes() {
    let (cols, data) = (columns(), data());
    let (deleted, sink) = recorder();
    let actions = ActionConfig::dropdown()
        .action(Action::new("Edit", |_: &Record| {}))
        .action(
            Action::new("Delete", move |row: &Record| sink.lock().unwrap().push(row.value("id")))
                .destructive(),
        );
    let (clicks, click_sink) = recorder();
    let props = GridProps::new(&cols, &data)
        .actions(&actions)
        .on_row_click(move |row: &Record| click_sink.lock().unwrap().push(row.value("id")));
    let mut grid = grid();

    let root = grid.render(&props);
    assert!(find_element(&root, "grid-row-1-action-1").is_none());

    grid.click(&root, "grid-row-1-menu", &props).unwrap();
    assert_eq!(grid.open_menu(), Some(&RowKey::from("2")));
    let root = grid.render(&props);
    assert!(find_element(&root, "grid-row-0-action-1").is_none());
    assert_eq!(text(&root, "grid-row-1-menu-items"), "Edit Delete");

    grid.click(&root, "grid-row-1-action-1", &props).unwrap();
    assert_eq!(*deleted.lock().unwrap(), vec![Value::Int(2)]);
    assert_eq!(grid.open_menu(), None);
    assert!(clicks.lock().unwrap().is_empty());

    // Toggling twice closes it again.
    grid.click(&root, "grid-row-0-menu", &props).unwrap();
    grid.click(&root, "grid-row-0-menu", &props).unwrap();
    assert_eq!(grid.open_menu(), None);
}

#[test]
fn test_loading_ignores_row_events() {
    let (cols, data) = (columns(), data());
    let (clicks, sink) = recorder();
    let props = GridProps::new(&cols, &data)
        .loading(true)
        .on_row_click(move |row: &Record| sink.lock().unwrap().push(row.value("id")));
    let mut grid = grid();

    assert_eq!(
        grid.dispatch(GridTarget::Row { index: 0 }.into(), &props),
        EventResult::Ignored
    );
    assert_eq!(grid.dispatch(GridEvent::Hover { index: 0 }, &props), EventResult::Ignored);
    assert!(clicks.lock().unwrap().is_empty());
}

#[test]
fn test_malformed_target_is_an_error() {
    let (cols, data) = (columns(), data());
    let props = GridProps::new(&cols, &data);
    let mut grid = grid();
    let root = Element::col()
        .id("root")
        .child(Element::button("?").id("broken").data(TARGET_KEY, "not json"));

    let err = grid.click(&root, "broken", &props).unwrap_err();
    assert!(matches!(err, GridError::Target(TargetError::Malformed(_))));
}

#[test]
fn test_templates_and_custom_key_field() {
    let cols = Columns::new(vec![
        Column::new("name", "Name"),
        Column::new("fee", "Fee").template(|row: &Record, index| {
            Element::text(format!("{}:{}", index, row.value("fee"))).id(format!("fee-{index}"))
        }),
    ])
    .unwrap();
    let data = vec![Record::new().set("admission_no", "S-9").set("name", "Ada").set("fee", 10)];
    let bulk = BulkActionConfig::new();
    let props = GridProps::new(&cols, &data).bulk_actions(&bulk);
    let mut grid = Grid::new(GridConfig::new("students").with_key_field("admission_no"));

    let root = grid.render(&props);
    assert_eq!(text(&root, "fee-0"), "0:10");
    assert_eq!(
        find_element(&root, "students-row-0")
            .unwrap()
            .get_data("row-key")
            .map(String::as_str),
        Some("S-9")
    );

    grid.click(&root, "students-row-0-select", &props).unwrap();
    assert!(grid.selection().is_selected(&RowKey::from("S-9")));
}

#[test]
fn test_per_render_key_field_and_skeleton_count() {
    let cols = columns();
    let data = vec![
        Record::new().set("id", 1).set("roll", "R-1").set("name", "A"),
        Record::new().set("id", 2).set("roll", "R-2").set("name", "B"),
    ];
    let bulk = BulkActionConfig::new();
    let mut grid = grid();

    let loading = GridProps::new(&cols, &data).loading(true).skeleton_row_count(2);
    let root = grid.render(&loading);
    assert_eq!(body_row_ids(&root), vec!["grid-skeleton-0", "grid-skeleton-1"]);

    let props = GridProps::new(&cols, &data).bulk_actions(&bulk).key_field("roll");
    assert_eq!(grid.key_field(&props), "roll");
    let root = grid.render(&props);
    assert_eq!(
        find_element(&root, "grid-row-1").unwrap().get_data("row-key").map(String::as_str),
        Some("R-2")
    );
    grid.click(&root, "grid-row-1-select", &props).unwrap();
    assert!(grid.selection().is_selected(&RowKey::from("R-2")));
    assert_eq!(grid.selected_rows(&props).len(), 1);

    let by_id = GridProps::new(&cols, &data).bulk_actions(&bulk);
    assert_eq!(grid.key_field(&by_id), "id");
    assert!(grid.selected_rows(&by_id).is_empty());
}

#[test]
fn test_plain_rendering() {
    let (cols, data) = (columns(), data());
    let mut grid = grid();
    let root = grid.render(&GridProps::new(&cols, &data));
    let out = render_plain(&root);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines, vec!["Name  Age", "A    5.00", "B       -"]);
}

#[test]
fn test_config_from_json() {
    let config = GridConfig::from_json(
        r#"{"id": "staff", "key_field": "staff_id", "locale": {"currency_symbol": "₹"}}"#,
    )
    .unwrap();
    assert_eq!(config.id, "staff");
    assert_eq!(config.key_field, "staff_id");
    assert_eq!(config.skeleton_row_count, 5);
    assert_eq!(config.locale.currency_symbol, "₹");
    assert_eq!(config.locale.thousands_separator, ',');

    assert!(matches!(
        GridConfig::from_json("{\"skeleton_row_count\": \"many\"}"),
        Err(GridError::Config(_))
    ));
}
