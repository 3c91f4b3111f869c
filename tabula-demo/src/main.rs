mod roster;

use std::fs::File;
use std::sync::{Arc, Mutex};

use griddom::text::render_plain;
use griddom::Element;
use log::info;
use simplelog::{
    ColorChoice, CombinedLogger, Config, LevelFilter, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};
use tabula::prelude::*;

/// Caller-side page state, updated from the grid's intents.
#[derive(Default)]
struct PageState {
    page: usize,
    page_size: usize,
}

fn init_logging() {
    let log_file = File::create("tabula-demo.log").expect("Failed to create log file");
    let mut loggers: Vec<Box<dyn SharedLogger>> =
        vec![WriteLogger::new(LevelFilter::Debug, Config::default(), log_file)];
    if std::env::var_os("TABULA_LOG_STDERR").is_some() {
        loggers.push(TermLogger::new(
            LevelFilter::Warn,
            Config::default(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ));
    }
    CombinedLogger::init(loggers).expect("Failed to initialize logger");
}

fn load_config() -> Result<GridConfig, GridError> {
    match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path).unwrap_or_else(|e| {
                eprintln!("Cannot read {path}: {e}; using defaults");
                "{}".to_string()
            });
            GridConfig::from_json(&json)
        }
        None => Ok(GridConfig::new("students").with_skeleton_row_count(4)),
    }
}

fn frame(title: &str, root: &Element) {
    println!("── {title} ──");
    println!("{}\n", render_plain(root));
}

fn run() -> Result<(), GridError> {
    let config = load_config()?;
    let id = config.id.clone();
    let columns = roster::columns()?;
    let students = roster::students();

    let state = Arc::new(Mutex::new(PageState {
        page: 1,
        page_size: 10,
    }));
    let on_page = Arc::clone(&state);
    let on_size = Arc::clone(&state);
    let intents = PaginationIntents::new()
        .on_page_change(move |page| {
            if let Ok(mut s) = on_page.lock() {
                s.page = page;
            }
        })
        .on_page_size_change(move |size| {
            if let Ok(mut s) = on_size.lock() {
                s.page_size = size;
            }
        });

    let actions = ActionConfig::icons()
        .show_on_hover(true)
        .action(
            Action::new("Edit", |row: &Record| {
                println!("> edit {}", row.value("name"));
            })
            .icon("✎"),
        )
        .action(
            Action::new("Archive", |row: &Record| {
                println!("> archive {}", row.value("name"));
            })
            .icon("⌫")
            .destructive()
            .hidden(|row: &Record| row.value("status") == Value::from("archived")),
        );
    let bulk = BulkActionConfig::new().action(BulkAction::new(
        "Send reminder",
        |rows: &[&Record]| {
            let names: Vec<String> = rows.iter().map(|r| r.value("name").to_string()).collect();
            println!("> fee reminder to {}", names.join(", "));
        },
    ));

    let mut grid: Grid<Record> = Grid::new(config);

    // The caller slices its own data; the grid only shows what it is given.
    let page_of = |state: &PageState| -> (Pagination, Vec<Record>) {
        let start = state.page.saturating_sub(1) * state.page_size;
        let rows = students.iter().skip(start).take(state.page_size).cloned().collect();
        (Pagination::new(state.page, state.page_size, students.len()), rows)
    };
    let snapshot = |state: &Arc<Mutex<PageState>>| -> PageState {
        state
            .lock()
            .map(|s| PageState {
                page: s.page,
                page_size: s.page_size,
            })
            .unwrap_or_default()
    };

    let (pagination, rows) = page_of(&snapshot(&state));
    let props = GridProps::new(&columns, &rows)
        .loading(true)
        .pagination(pagination.clone(), intents.clone())
        .actions(&actions)
        .bulk_actions(&bulk);
    frame("loading", &grid.render(&props));

    let props = GridProps::new(&columns, &rows)
        .pagination(pagination.clone(), intents.clone())
        .actions(&actions)
        .bulk_actions(&bulk)
        .on_row_click(|row: &Record| println!("> open profile of {}", row.value("name")));
    let root = grid.render(&props);
    frame("page 1", &root);

    grid.click(&root, &format!("{id}-header-name"), &props)?;
    grid.hover(&root, &format!("{id}-row-2-cell-name"), &props)?;
    grid.click(&root, &format!("{id}-row-2-select"), &props)?;
    grid.click(&root, &format!("{id}-row-5-select"), &props)?;
    let root = grid.render(&props);
    frame("sorted by name, two selected, row 3 hovered", &root);

    grid.click(&root, &format!("{id}-row-5-cell-section"), &props)?;
    grid.click(&root, &format!("{id}-row-2-action-0"), &props)?;
    grid.click(&root, &format!("{id}-bulk-0"), &props)?;
    grid.click(&root, &format!("{id}-page-next"), &props)?;

    let (pagination, rows) = page_of(&snapshot(&state));
    let props = GridProps::new(&columns, &rows)
        .pagination(pagination, intents.clone())
        .actions(&actions)
        .bulk_actions(&bulk);
    grid.leave();
    let root = grid.render(&props);
    frame("page 2", &root);

    grid.click(&root, &format!("{id}-size-50"), &props)?;
    let (pagination, rows) = page_of(&snapshot(&state));
    let props = GridProps::new(&columns, &rows).pagination(pagination, intents);
    frame("page size 50", &grid.render(&props));

    let nothing: Vec<Record> = Vec::new();
    let props = GridProps::new(&columns, &nothing).empty_message("No students match this filter");
    frame("empty", &grid.render(&props));

    info!("demo finished");
    Ok(())
}

fn main() {
    init_logging();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
    }
}
