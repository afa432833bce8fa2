//! The local view of the todo list: what is displayed, and which fetch it comes from

use crate::calendar::{render, CalendarGrid, MonthCursor};
use crate::todo::TaskRecord;

/// A sequence number, given to every fetch request.
///
/// They are strictly increasing, so that a response can be recognized as outdated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestSeq(u64);

impl RequestSeq {
    pub fn value(&self) -> u64 {
        self.0
    }
}


/// The todo store, and the month that is currently displayed
#[derive(Clone, Debug)]
pub struct CalendarState {
    tasks: Vec<TaskRecord>,
    reference: MonthCursor,

    last_issued: u64,
    last_applied: Option<RequestSeq>,
}

impl CalendarState {
    /// Create an empty state, that displays the given month
    pub fn new(reference: MonthCursor) -> Self {
        Self {
            tasks: Vec::new(),
            reference,
            last_issued: 0,
            last_applied: None,
        }
    }

    pub fn tasks(&self) -> &[TaskRecord]   { &self.tasks     }
    pub fn reference(&self) -> MonthCursor { self.reference  }
    /// The sequence number of the fetch the current tasks come from (or `None` if no fetch has ever been applied)
    pub fn last_applied(&self) -> Option<RequestSeq> { self.last_applied }

    /// Reserve a sequence number for a new fetch
    pub fn issue_request(&mut self) -> RequestSeq {
        self.last_issued += 1;
        RequestSeq(self.last_issued)
    }

    /// Returns whether `seq` is the most recent request that has been issued
    pub fn is_latest(&self, seq: RequestSeq) -> bool {
        seq.0 == self.last_issued
    }

    /// Returns whether the result of `seq` would be more recent than the current tasks
    pub fn is_newer_than_applied(&self, seq: RequestSeq) -> bool {
        match self.last_applied {
            None => true,
            Some(applied) => seq > applied,
        }
    }

    /// Replace the whole store with the result of a fetch.
    ///
    /// This is a no-op (and returns `false`) in case the result of a more recent fetch has already been applied.
    /// Requests issued after `seq` that have not replied (or that failed) do not prevent `seq` from being applied.
    pub fn apply_fetch(&mut self, seq: RequestSeq, tasks: Vec<TaskRecord>) -> bool {
        if self.is_newer_than_applied(seq) == false {
            log::warn!("Discarding the result of fetch #{}, since fetch #{} has already been applied", seq.0, self.last_applied.map(|s| s.0).unwrap_or_default());
            return false;
        }

        log::info!("Applying fetch #{} ({} todos)", seq.0, tasks.len());
        self.tasks = tasks;
        self.last_applied = Some(seq);
        true
    }

    /// Move the displayed month. Todos are not re-fetched
    pub fn advance_month(&mut self, months: i32) {
        self.reference = self.reference.advance(months);
    }

    pub fn set_reference(&mut self, reference: MonthCursor) {
        self.reference = reference;
    }

    /// Lay out the displayed month
    pub fn render(&self) -> CalendarGrid {
        render(self.reference, &self.tasks)
    }
}
