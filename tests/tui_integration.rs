//! Rendering integration tests using ratatui's TestBackend.
//!
//! Drives the real demo wiring (employee source, table view, paging bar)
//! through the engine and asserts on the drawn buffer.

use gridpager::config::PagerConfig;
use gridpager::source::demo::employee_source;
use gridpager::state::PagingOrchestrator;
use gridpager::view::{demo_columns, render_pager, DemoPager, PagingBar, TableView};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

/// Convert a ratatui buffer to a string, one line per row.
fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();
    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

fn draw(pager: &DemoPager) -> String {
    let backend = TestBackend::new(80, 20);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| render_pager(frame, pager, None))
        .unwrap();
    buffer_to_string(terminal.backend().buffer())
}

fn demo_pager(rows: usize, page_size: u32, config: PagerConfig) -> DemoPager {
    PagingOrchestrator::new(
        PagingBar::new(),
        TableView::new(demo_columns()),
        employee_source(rows, page_size),
        config,
    )
}

#[test]
fn first_page_renders_headers_rows_and_paging_bar() {
    let mut pager = demo_pager(43, 10, PagerConfig::default());
    pager.initialize().unwrap();

    let screen = draw(&pager);

    assert!(screen.contains("Id"), "header row missing:\n{screen}");
    assert!(screen.contains("Name"));
    assert!(screen.contains("Ada Lovelace"), "first record missing:\n{screen}");
    assert!(screen.contains("Page 1/5"), "paging bar missing:\n{screen}");
    assert!(screen.contains("43 records"));
}

#[test]
fn empty_state_renders_the_message_instead_of_rows() {
    let config = PagerConfig {
        empty_message: "Nothing to show".to_string(),
        ..PagerConfig::default()
    };
    let mut pager = demo_pager(0, 10, config);
    pager.initialize().unwrap();

    let screen = draw(&pager);

    assert!(screen.contains("Nothing to show"), "message missing:\n{screen}");
    assert!(!screen.contains("Ada Lovelace"));
    assert!(screen.contains("Page 0/0"));
}

#[test]
fn sorted_column_header_shows_the_direction_indicator() {
    let mut pager = demo_pager(43, 10, PagerConfig::default());
    pager.initialize().unwrap();

    pager.handle_sort_event(1, "natural").unwrap();
    let direction = pager.active_sort().unwrap().direction();
    pager.view_mut().mark_sorted(1, direction);

    let screen = draw(&pager);
    assert!(screen.contains("Name ▲"), "sort indicator missing:\n{screen}");
}

#[test]
fn paging_forward_updates_the_bar() {
    let mut pager = demo_pager(43, 10, PagerConfig::default());
    pager.initialize().unwrap();

    pager.handle_paging_event(3).unwrap();

    let screen = draw(&pager);
    assert!(screen.contains("Page 4/5"), "bar not updated:\n{screen}");
}
