//! Ratatui table binding for the paging engine.
//!
//! [`TableView`] is the concrete render target of the demo: it keeps the
//! installed row model (or the no-results message), knows which columns are
//! sort-enabled, and builds the ratatui `Table` widget on each draw.

use crate::model::SortDirection;
use crate::state::RenderTarget;
use ratatui::{
    layout::Constraint,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};
use unicode_width::UnicodeWidthStr;

/// A row that can display itself as table cells, one per column.
pub trait TableRow {
    /// Cell text in column order.
    fn cells(&self) -> Vec<String>;
}

/// One table column: a header caption and, if sort-enabled, the domain
/// field its header interactions sort by.
#[derive(Debug, Clone)]
pub struct Column {
    caption: String,
    sort_field: Option<String>,
}

impl Column {
    /// A column that cannot be sorted.
    pub fn unsorted(caption: impl Into<String>) -> Self {
        Self {
            caption: caption.into(),
            sort_field: None,
        }
    }

    /// A column whose header sorts by `field`.
    pub fn sorted_by(caption: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            caption: caption.into(),
            sort_field: Some(field.into()),
        }
    }

    /// The header caption.
    pub fn caption(&self) -> &str {
        &self.caption
    }
}

/// Table-shaped render target holding the installed page of rows.
#[derive(Debug)]
pub struct TableView<R> {
    columns: Vec<Column>,
    rows: Vec<R>,
    empty_message: Option<String>,
    sorted: Option<(usize, SortDirection)>,
}

impl<R: TableRow> TableView<R> {
    /// An empty table with the given columns.
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            empty_message: None,
            sorted: None,
        }
    }

    /// The rows currently installed.
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    /// The no-results message, when the empty state is shown.
    pub fn empty_message(&self) -> Option<&str> {
        self.empty_message.as_deref()
    }

    /// The direction token the given column header currently shows.
    ///
    /// This is the token a header interaction carries into the engine:
    /// `natural` for an unsorted column, otherwise the direction the
    /// column is sorted in.
    pub fn direction_token(&self, column: usize) -> &'static str {
        match self.sorted {
            Some((sorted_column, SortDirection::Asc)) if sorted_column == column => "ascending",
            Some((sorted_column, SortDirection::Desc)) if sorted_column == column => "descending",
            _ => "natural",
        }
    }

    /// Record that `column` is now sorted in `direction`.
    ///
    /// Any other column's header falls back to natural. Call after the
    /// engine reports a handled sort event.
    pub fn mark_sorted(&mut self, column: usize, direction: SortDirection) {
        self.sorted = Some((column, direction));
    }

    fn header_caption(&self, index: usize, column: &Column) -> String {
        match self.sorted {
            Some((sorted_column, SortDirection::Asc)) if sorted_column == index => {
                format!("{} ▲", column.caption)
            }
            Some((sorted_column, SortDirection::Desc)) if sorted_column == index => {
                format!("{} ▼", column.caption)
            }
            _ => column.caption.clone(),
        }
    }

    /// Column width constraints sized to the widest cell of each column.
    fn column_widths(&self) -> Vec<Constraint> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, column)| {
                let header_width = self.header_caption(i, column).width();
                let cell_width = self
                    .rows
                    .iter()
                    .map(|row| row.cells().get(i).map_or(0, |c| c.width()))
                    .max()
                    .unwrap_or(0);
                Constraint::Length(header_width.max(cell_width) as u16 + 2)
            })
            .collect()
    }

    /// Build the ratatui widget for the current model.
    ///
    /// Rows render as a bordered `Table`; the empty state renders the
    /// no-results message instead.
    pub fn widget(&self) -> TableWidget<'_> {
        if let Some(message) = &self.empty_message {
            let paragraph = Paragraph::new(Line::from(message.as_str()))
                .style(Style::default().fg(Color::DarkGray))
                .block(Block::default().borders(Borders::ALL).title("Results"));
            return TableWidget::Empty(paragraph);
        }

        let header = Row::new(
            self.columns
                .iter()
                .enumerate()
                .map(|(i, column)| Cell::from(self.header_caption(i, column)))
                .collect::<Vec<_>>(),
        )
        .style(Style::default().add_modifier(Modifier::BOLD));

        let body = self
            .rows
            .iter()
            .map(|row| Row::new(row.cells().into_iter().map(Cell::from).collect::<Vec<_>>()))
            .collect::<Vec<_>>();

        let table = Table::new(body, self.column_widths())
            .header(header)
            .block(Block::default().borders(Borders::ALL).title("Results"));
        TableWidget::Rows(table)
    }
}

impl<R: TableRow> RenderTarget<R> for TableView<R> {
    fn clear_rows(&mut self) {
        self.rows.clear();
    }

    fn set_rows(&mut self, rows: Vec<R>) {
        self.rows = rows;
        self.empty_message = None;
    }

    fn show_empty(&mut self, message: &str) {
        self.empty_message = Some(message.to_string());
    }

    fn sort_field(&self, column: usize) -> Option<String> {
        self.columns.get(column)?.sort_field.clone()
    }
}

/// The widget a [`TableView`] draws: rows, or the no-results message.
#[derive(Debug)]
pub enum TableWidget<'a> {
    /// A populated results table.
    Rows(Table<'a>),
    /// The no-results message.
    Empty(Paragraph<'a>),
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pair(&'static str, u32);

    impl TableRow for Pair {
        fn cells(&self) -> Vec<String> {
            vec![self.0.to_string(), self.1.to_string()]
        }
    }

    fn view() -> TableView<Pair> {
        TableView::new(vec![
            Column::sorted_by("Name", "name"),
            Column::unsorted("Count"),
        ])
    }

    #[test]
    fn sort_field_follows_column_bindings() {
        let view = view();
        assert_eq!(view.sort_field(0), Some("name".to_string()));
        assert_eq!(view.sort_field(1), None);
        assert_eq!(view.sort_field(9), None);
    }

    #[test]
    fn direction_token_starts_natural_everywhere() {
        let view = view();
        assert_eq!(view.direction_token(0), "natural");
        assert_eq!(view.direction_token(1), "natural");
    }

    #[test]
    fn mark_sorted_moves_the_token_with_the_column() {
        let mut view = view();
        view.mark_sorted(0, SortDirection::Asc);
        assert_eq!(view.direction_token(0), "ascending");

        view.mark_sorted(0, SortDirection::Desc);
        assert_eq!(view.direction_token(0), "descending");

        view.mark_sorted(1, SortDirection::Asc);
        assert_eq!(view.direction_token(0), "natural");
        assert_eq!(view.direction_token(1), "ascending");
    }

    #[test]
    fn set_rows_clears_the_empty_message() {
        let mut view = view();
        view.show_empty("nothing");
        assert_eq!(view.empty_message(), Some("nothing"));

        view.set_rows(vec![Pair("a", 1)]);
        assert_eq!(view.empty_message(), None);
        assert_eq!(view.rows().len(), 1);
    }

    #[test]
    fn sorted_header_carries_an_indicator() {
        let mut view = view();
        view.set_rows(vec![Pair("a", 1)]);
        view.mark_sorted(0, SortDirection::Desc);
        assert_eq!(view.header_caption(0, &view.columns[0]), "Name ▼");
        assert_eq!(view.header_caption(1, &view.columns[1]), "Count");
    }
}
