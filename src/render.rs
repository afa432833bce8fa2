//! Drawing calendars
//!
//! A [`CalendarGrid`] knows nothing about how it is displayed. It is written to a [`Surface`], that can be a terminal, a web page, etc.

use crate::calendar::{CalendarCell, CalendarGrid};

/// Something a calendar can be drawn to
pub trait Surface {
    /// Set the month/year label
    fn set_header(&mut self, header: &str);
    /// Remove every cell drawn so far
    fn clear(&mut self);
    /// Append a cell that does not belong to the month
    fn append_blank(&mut self);
    /// Append a day of the month, and its todos
    fn append_day(&mut self, cell: &CalendarCell);
}

/// Draw a whole grid. Previous content of the surface is discarded
pub fn draw<S: Surface>(grid: &CalendarGrid, surface: &mut S) {
    surface.clear();
    surface.set_header(grid.header());
    for cell in grid.cells() {
        match cell {
            CalendarCell::Blank => surface.append_blank(),
            day => surface.append_day(day),
        }
    }
}


const WEEKDAYS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];
const CELL_WIDTH: usize = 4;

/// A plain-text surface, suited for terminals.
///
/// Days are laid out seven per row, starting on Sunday. Todos are listed under the grid, grouped by day, with the ID that can be used to delete them.
#[derive(Default, Debug)]
pub struct TextSurface {
    header: String,
    cells: Vec<String>,
    agenda: Vec<String>,
}

impl TextSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// The text drawn so far
    pub fn to_text(&self) -> String {
        let width = CELL_WIDTH * WEEKDAYS.len();
        let mut lines = Vec::new();

        lines.push(format!("{:^width$}", self.header, width = width).trim_end().to_string());
        lines.push(WEEKDAYS.iter()
            .map(|day| format!("{:>width$} ", day, width = CELL_WIDTH - 1))
            .collect::<String>()
            .trim_end()
            .to_string());

        for week in self.cells.chunks(WEEKDAYS.len()) {
            lines.push(week.concat().trim_end().to_string());
        }

        if self.agenda.is_empty() == false {
            lines.push(String::new());
            lines.extend(self.agenda.iter().cloned());
        }

        let mut text = lines.join("\n");
        text.push('\n');
        text
    }
}

impl Surface for TextSurface {
    fn set_header(&mut self, header: &str) {
        self.header = header.to_string();
    }

    fn clear(&mut self) {
        self.header.clear();
        self.cells.clear();
        self.agenda.clear();
    }

    fn append_blank(&mut self) {
        self.cells.push(" ".repeat(CELL_WIDTH));
    }

    fn append_day(&mut self, cell: &CalendarCell) {
        let day = match cell.day() {
            Some(day) => day,
            None => return self.append_blank(),
        };

        // Days with todos are marked with a star
        let marker = if cell.tasks().is_empty() { " " } else { "*" };
        self.cells.push(format!("{:>width$}{}", day, marker, width = CELL_WIDTH - 1));

        for task in cell.tasks() {
            self.agenda.push(format!("{:>2}  [{}] {}", day, task.id(), task.text()));
        }
    }
}
