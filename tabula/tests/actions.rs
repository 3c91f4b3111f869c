use std::sync::{Arc, Mutex};

use griddom::{collect_text, find_all, find_element, Color};
use tabula::actions::{render_row_actions, resolve, RowActionState};
use tabula::prelude::*;
use tabula::target::TOOLTIP_KEY;

fn student(status: &str) -> Record {
    Record::new().set("id", 1).set("name", "Ada").set("status", status)
}

fn config(mode: ActionMode) -> ActionConfig<Record> {
    ActionConfig::new(mode)
        .action(Action::new("Edit", |_: &Record| {}).icon("✎"))
        .action(
            Action::new("Archive", |_: &Record| {})
                .icon("🗄")
                .hidden(|row: &Record| row.value("status") == Value::from("archived")),
        )
        .action(Action::new("Delete", |_: &Record| {}).icon("🗑").destructive())
}

#[test]
fn test_resolve_filters_hidden() {
    let config = config(ActionMode::Icons);
    let labels = |row: &Record| -> Vec<(usize, String)> {
        resolve(&config, row)
            .into_iter()
            .map(|(i, a)| (i, a.label.clone()))
            .collect()
    };
    assert_eq!(labels(&student("active")).len(), 3);
    assert_eq!(
        labels(&student("archived")),
        vec![(0, "Edit".to_string()), (2, "Delete".to_string())]
    );
}

#[test]
fn test_nothing_rendered_when_all_hidden() {
    let config = ActionConfig::icons().action(
        Action::new("Restore", |_: &Record| {})
            .hidden(|row: &Record| row.value("status") == Value::from("archived")),
    );
    let rendered = render_row_actions(&config, &student("archived"), 0, RowActionState::default(), "g");
    assert!(rendered.is_none());
    assert!(
        render_row_actions(&config, &student("active"), 0, RowActionState::default(), "g").is_some()
    );
}

#[test]
fn test_icons_carry_tooltips() {
    let el = render_row_actions(&config(ActionMode::Icons), &student("active"), 2, RowActionState::default(), "g")
        .unwrap();
    let edit = find_element(&el, "g-row-2-action-0").unwrap();
    assert_eq!(edit.text_content(), Some("✎"));
    assert_eq!(edit.get_data(TOOLTIP_KEY).map(String::as_str), Some("Edit"));
    assert!(!edit.style.is_transparent());
}

#[test]
fn test_show_on_hover_suppresses_without_removing() {
    let config = config(ActionMode::Icons).show_on_hover(true);
    let row = student("active");

    let idle = render_row_actions(&config, &row, 0, RowActionState::default(), "g").unwrap();
    let buttons = find_all(&idle, |e| e.id.starts_with("g-row-0-action-"));
    assert_eq!(buttons.len(), 3);
    assert!(buttons.iter().all(|b| b.style.is_transparent()));

    let hovered = RowActionState {
        hovered: true,
        menu_open: false,
    };
    let shown = render_row_actions(&config, &row, 0, hovered, "g").unwrap();
    let buttons = find_all(&shown, |e| e.id.starts_with("g-row-0-action-"));
    assert!(buttons.iter().all(|b| !b.style.is_transparent()));
}

#[test]
fn test_dropdown_lists_items_only_when_open() {
    let config = config(ActionMode::Dropdown);
    let row = student("archived");

    let closed = render_row_actions(&config, &row, 0, RowActionState::default(), "g").unwrap();
    assert!(find_element(&closed, "g-row-0-menu").is_some());
    assert!(find_element(&closed, "g-row-0-action-0").is_none());

    let open = RowActionState {
        hovered: false,
        menu_open: true,
    };
    let menu = render_row_actions(&config, &row, 0, open, "g").unwrap();
    assert_eq!(collect_text(&menu), "⋯ ✎ Edit 🗑 Delete");

    let delete = find_element(&menu, "g-row-0-action-2").unwrap();
    assert_eq!(delete.style.foreground, Some(Color::var("destructive")));
    let edit = find_element(&menu, "g-row-0-action-0").unwrap();
    assert_eq!(edit.style.foreground, None);
}

#[test]
fn test_bulk_action_receives_rows() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let bulk = BulkAction::new("Promote", move |rows: &[&Record]| {
        sink.lock()
            .unwrap()
            .extend(rows.iter().map(|r| r.value("id")));
    });
    let a = Record::new().set("id", 1);
    let b = Record::new().set("id", 2);
    bulk.invoke(&[&a, &b]);
    assert_eq!(*seen.lock().unwrap(), vec![Value::Int(1), Value::Int(2)]);
}
