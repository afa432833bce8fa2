//! Utilities to be notified whenever the calendar has to be redrawn

use std::fmt::{Display, Error, Formatter};

use crate::calendar::CalendarGrid;

/// An event sent by a [`Planner`](crate::controller::Planner)
#[derive(Clone, Debug)]
pub enum CalendarEvent {
    /// Nothing has been rendered yet
    NotStarted,
    /// The calendar has been rendered again (after a fetch or a navigation)
    Redraw(CalendarGrid),
}

impl Display for CalendarEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self {
            CalendarEvent::NotStarted => write!(f, "Not started"),
            CalendarEvent::Redraw(grid) => write!(f, "Redraw {} ({} todos)", grid.header(), grid.placed_tasks().count()),
        }
    }
}

impl Default for CalendarEvent {
    fn default() -> Self {
        Self::NotStarted
    }
}



/// See [`feedback_channel`]
pub type FeedbackSender = tokio::sync::watch::Sender<CalendarEvent>;
/// See [`feedback_channel`]
pub type FeedbackReceiver = tokio::sync::watch::Receiver<CalendarEvent>;

/// Create a feedback channel, that can be used to be notified of every new rendering of the calendar
pub fn feedback_channel() -> (FeedbackSender, FeedbackReceiver) {
    tokio::sync::watch::channel(CalendarEvent::default())
}
