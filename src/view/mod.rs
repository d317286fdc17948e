//! TUI rendering and terminal management (impure shell).
//!
//! The demo binding: a ratatui table as the render target, a one-line
//! paging bar as the paging control, and a crossterm event loop that
//! translates key presses into the engine's paging and sort events.

pub mod paging_bar;
pub mod table;

pub use paging_bar::PagingBar;
pub use table::{Column, TableRow, TableView, TableWidget};

use crate::model::PagerError;
use crate::source::demo::Employee;
use crate::source::VecSource;
use crate::state::{EventFlow, PagingControl, PagingOrchestrator};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    widgets::Paragraph,
    Frame, Terminal,
};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during TUI operations.
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations.
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// The paging engine failed.
    #[error("Paging error: {0}")]
    Pager(#[from] PagerError),
}

/// The engine as wired by the demo binary.
pub type DemoPager =
    PagingOrchestrator<Employee, PagingBar, TableView<Employee>, VecSource<Employee>>;

/// Columns of the demo employee table.
///
/// The id, name, age and joined columns are sort-enabled; the department
/// column deliberately is not, to show suppressed sort interactions.
pub fn demo_columns() -> Vec<Column> {
    vec![
        Column::sorted_by("Id", "id"),
        Column::sorted_by("Name", "name"),
        Column::unsorted("Department"),
        Column::sorted_by("Age", "age"),
        Column::sorted_by("Joined", "joined"),
    ]
}

/// Demo TUI application.
///
/// Generic over backend to support testing with `TestBackend`.
pub struct TuiApp<B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    pager: DemoPager,
    status: Option<String>,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application.
    ///
    /// Sets up the terminal in raw mode with the alternate screen, then
    /// runs the engine's one-time initialization (which performs the eager
    /// first fetch unless configured lazy).
    pub fn new(mut pager: DemoPager) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        pager.initialize()?;

        Ok(Self {
            terminal,
            pager,
            status: None,
        })
    }

    /// Run the main event loop; returns when the user quits.
    pub fn run(&mut self) -> Result<(), TuiError> {
        const POLL_INTERVAL: Duration = Duration::from_millis(250);

        self.draw()?;
        loop {
            if !event::poll(POLL_INTERVAL)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) => {
                    if self.handle_key(key)? {
                        return Ok(());
                    }
                    self.draw()?;
                }
                Event::Resize(_, _) => self.draw()?,
                _ => {}
            }
        }
    }
}

impl<B: Backend> TuiApp<B> {
    /// Handle one key press. Returns `true` when the user quits.
    fn handle_key(&mut self, key: KeyEvent) -> Result<bool, TuiError> {
        if key.kind == KeyEventKind::Release {
            return Ok(false);
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(true);
        }

        self.status = None;
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
            KeyCode::Left => {
                let index = self.pager.paging().active_index();
                if index > 0 {
                    self.pager.handle_paging_event(index - 1)?;
                }
            }
            KeyCode::Right => {
                let index = self.pager.paging().active_index();
                let pages = self.pager.paging().total_pages();
                if (index as u64 + 1) < pages {
                    self.pager.handle_paging_event(index + 1)?;
                }
            }
            KeyCode::Home => self.pager.handle_paging_event(0)?,
            KeyCode::End => {
                let pages = self.pager.paging().total_pages();
                if pages > 0 {
                    self.pager.handle_paging_event(pages as usize - 1)?;
                }
            }
            KeyCode::Char('d') => {
                // Shrink the data set underneath the view, then re-fetch the
                // page we are on; trailing pages may now be empty and the
                // engine retreats on its own.
                self.pager.source_mut().delete_last(5);
                let index = self.pager.paging().active_index();
                self.pager.handle_paging_event(index)?;
                self.status = Some("Deleted 5 records".to_string());
            }
            KeyCode::Char('r') => {
                let index = self.pager.paging().active_index();
                self.pager.handle_paging_event(index)?;
            }
            KeyCode::Char(c @ '1'..='9') => {
                let column = (c as usize) - ('1' as usize);
                self.fire_sort(column)?;
            }
            _ => {}
        }
        Ok(false)
    }

    /// Fire a header-sort interaction for `column`.
    fn fire_sort(&mut self, column: usize) -> Result<(), TuiError> {
        let token = self.pager.view().direction_token(column);
        debug!(column, token, "Header interaction");
        match self.pager.handle_sort_event(column, token)? {
            EventFlow::Handled => {
                if let Some(direction) = self.pager.active_sort().map(|sort| sort.direction()) {
                    self.pager.view_mut().mark_sorted(column, direction);
                }
            }
            EventFlow::Suppressed => {
                self.status = Some("Column is not sortable".to_string());
            }
        }
        Ok(())
    }

    fn draw(&mut self) -> Result<(), TuiError> {
        let pager = &self.pager;
        let status = self.status.clone();
        self.terminal.draw(|frame| {
            render_pager(frame, pager, status.as_deref());
        })?;
        Ok(())
    }
}

/// Render the table, the paging bar and the key help into `frame`.
pub fn render_pager(frame: &mut Frame<'_>, pager: &DemoPager, status: Option<&str>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    match pager.view().widget() {
        TableWidget::Rows(table) => frame.render_widget(table, chunks[0]),
        TableWidget::Empty(paragraph) => frame.render_widget(paragraph, chunks[0]),
    }

    frame.render_widget(Paragraph::new(pager.paging().render()), chunks[1]);

    let help = status
        .map(str::to_string)
        .unwrap_or_else(|| "←/→ page · Home/End jump · 1-5 sort column · d delete · q quit".to_string());
    frame.render_widget(Paragraph::new(help), chunks[2]);
}

/// Restore terminal to normal state.
///
/// Disables raw mode and leaves the alternate screen.
pub fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tui_error_from_io_error() {
        let io_err = io::Error::other("test error");
        let err: TuiError = io_err.into();
        assert!(err.to_string().contains("Terminal IO error"));
    }

    #[test]
    fn tui_error_from_pager_error() {
        let err: TuiError = PagerError::AlreadyInitialized.into();
        assert!(err.to_string().contains("Paging error"));
    }

    #[test]
    fn demo_columns_bind_sortable_fields() {
        let columns = demo_columns();
        assert_eq!(columns.len(), 5);
        assert_eq!(columns[2].caption(), "Department");
    }
}
