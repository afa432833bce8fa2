//! Month calendars, and the placement of todos on their due day

pub mod state;
pub use state::CalendarState;

use std::convert::TryFrom;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{Datelike, Local, NaiveDate};

use crate::todo::TaskRecord;

/// The format of the dates embedded in todo contents
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";


/// The month (and year) a calendar displays.
///
/// Day-of-month and time-of-day are irrelevant: a cursor always points to the 1st of its month.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MonthCursor {
    first: NaiveDate,
}

impl MonthCursor {
    /// The month that contains `date`
    pub fn containing(date: NaiveDate) -> Self {
        let first = NaiveDate::from_ymd_opt(date.year(), date.month(), 1)
            .unwrap_or(date /* the 1st of an existing month always exists */);
        Self { first }
    }

    /// Returns `None` in case `month` is not in `1..=12`
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first| Self { first })
    }

    /// The current month, in local time
    pub fn current() -> Self {
        Self::containing(Local::now().date_naive())
    }

    pub fn year(&self) -> i32          { self.first.year()  }
    pub fn month(&self) -> u32         { self.first.month() }
    pub fn first_day(&self) -> NaiveDate { self.first        }

    /// Weekday of the 1st of the month (0 is Sunday)
    pub fn first_day_index(&self) -> u32 {
        self.first.weekday().num_days_from_sunday()
    }

    pub fn days_in_month(&self) -> u32 {
        let (year, month) = match self.month() {
            12 => (self.year() + 1, 1),
            month => (self.year(), month + 1),
        };
        match NaiveDate::from_ymd_opt(year, month, 1) {
            Some(next) => next.signed_duration_since(self.first).num_days() as u32,
            // Only December of the last representable year has no successor
            None => 31,
        }
    }

    /// Move by `months` months (possibly negative), carrying over year boundaries.
    ///
    /// Moving outside of the range of representable dates leaves the cursor where it is.
    pub fn advance(&self, months: i32) -> Self {
        let total = self.year() as i64 * 12 + (self.month() as i64 - 1) + months as i64;
        let year = total.div_euclid(12);
        let month = total.rem_euclid(12) as u32 + 1;

        match i32::try_from(year).ok().and_then(|year| Self::new(year, month)) {
            Some(cursor) => cursor,
            None => {
                log::warn!("Cannot move {} months away from {}", months, self);
                *self
            }
        }
    }

    /// The long month name and the year, e.g. `March 2024`
    pub fn label(&self) -> String {
        self.first.format("%B %Y").to_string()
    }

    /// The ISO representation of a day of this month, e.g. `2024-03-05`
    pub fn iso_date(&self, day: u32) -> String {
        format!("{:04}-{:02}-{:02}", self.year(), self.month(), day)
    }
}

impl Default for MonthCursor {
    fn default() -> Self {
        Self::current()
    }
}

impl Display for MonthCursor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl FromStr for MonthCursor {
    type Err = chrono::ParseError;

    /// Parse a `YYYY-MM` string
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let first = NaiveDate::parse_from_str(&format!("{}-01", s.trim()), ISO_DATE_FORMAT)?;
        Ok(Self { first })
    }
}



/// A cell of a month grid
#[derive(Clone, Debug, PartialEq)]
pub enum CalendarCell {
    /// Used to align the 1st of the month to its weekday column
    Blank,
    /// A day of the month, and the todos that are due on that day
    Day {
        day: u32,
        date: String,
        tasks: Vec<TaskRecord>,
    },
}

impl CalendarCell {
    pub fn is_blank(&self) -> bool {
        match self {
            CalendarCell::Blank => true,
            _ => false,
        }
    }

    pub fn day(&self) -> Option<u32> {
        match self {
            CalendarCell::Blank => None,
            CalendarCell::Day { day, .. } => Some(*day),
        }
    }

    /// The todos due on this day. This is empty for blank cells
    pub fn tasks(&self) -> &[TaskRecord] {
        match self {
            CalendarCell::Blank => &[],
            CalendarCell::Day { tasks, .. } => tasks,
        }
    }

    /// Style classes, as used by web front-ends
    pub fn classes(&self) -> &'static [&'static str] {
        match self {
            CalendarCell::Blank => &["calendar-day", "blank"],
            CalendarCell::Day { .. } => &["calendar-day"],
        }
    }
}


/// A rendered month: a header, and its cells, one week per row of seven cells
#[derive(Clone, Debug, PartialEq)]
pub struct CalendarGrid {
    cursor: MonthCursor,
    header: String,
    cells: Vec<CalendarCell>,
}

impl CalendarGrid {
    pub fn cursor(&self) -> MonthCursor     { self.cursor   }
    pub fn header(&self) -> &str            { &self.header  }
    pub fn cells(&self) -> &[CalendarCell]  { &self.cells   }

    pub fn blank_count(&self) -> usize {
        self.cells.iter().take_while(|cell| cell.is_blank()).count()
    }

    /// Returns the cell of a given day of the month
    pub fn day(&self, day: u32) -> Option<&CalendarCell> {
        if day == 0 {
            return None;
        }
        self.cells.get(self.blank_count() + day as usize - 1)
    }

    /// Every todo that has been placed on this grid
    pub fn placed_tasks(&self) -> impl Iterator<Item = &TaskRecord> {
        self.cells.iter().flat_map(|cell| cell.tasks())
    }
}


/// Lay out a month, and place every todo on the day it is due.
///
/// Todos without a (matching) due date do not appear on the grid. For each day, todos keep the order they have in `tasks`.
pub fn render(cursor: MonthCursor, tasks: &[TaskRecord]) -> CalendarGrid {
    let decoded: Vec<(Option<String>, &TaskRecord)> = tasks.iter()
        .map(|task| (task.decoded().date, task))
        .collect();

    let first_day_index = cursor.first_day_index();
    let days_in_month = cursor.days_in_month();

    let mut cells = Vec::with_capacity((first_day_index + days_in_month) as usize);
    for _ in 0..first_day_index {
        cells.push(CalendarCell::Blank);
    }

    for day in 1..=days_in_month {
        let date = cursor.iso_date(day);
        let tasks = decoded.iter()
            .filter(|(due, _)| due.as_deref() == Some(date.as_str()))
            .map(|(_, task)| (*task).clone())
            .collect();
        cells.push(CalendarCell::Day { day, date, tasks });
    }

    CalendarGrid {
        cursor,
        header: cursor.label(),
        cells,
    }
}
