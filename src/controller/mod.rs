//! This module drives a calendar: it keeps the local todo store in line with a [`TodoSource`], and moves across months
//!
//! The local store is never patched: every change on the source is followed by a full re-fetch.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::calendar::{CalendarGrid, CalendarState, MonthCursor};
use crate::error::TodoError;
use crate::todo::{TaskRecord, TodoId};
use crate::traits::TodoSource;

pub mod feedback;
use feedback::{CalendarEvent, FeedbackSender};


/// What happened to a fetch
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The local store now holds the result of this fetch
    Applied,
    /// The fetch succeeded, but a more recent result had already been applied
    Outdated,
    /// The source could not be reached, or replied with an error
    Failed,
}

impl FetchOutcome {
    pub fn is_success(&self) -> bool {
        match self {
            FetchOutcome::Failed => false,
            _ => true,
        }
    }
}


/// A calendar view over a [`TodoSource`].
///
/// All methods take `&self`, so that several user actions can be in flight at the same time. \
/// Fetch results never go back in time: a fetch that completes after the result of a more recent one has been applied is discarded.
pub struct Planner<S>
where
    S: TodoSource,
{
    source: S,
    state: Mutex<CalendarState>,
    feedback_channel: Option<FeedbackSender>,
}

impl<S> Planner<S>
where
    S: TodoSource,
{
    /// Create a planner that displays `reference`. This does not fetch anything yet
    pub fn new(source: S, reference: MonthCursor) -> Self {
        Self {
            source,
            state: Mutex::new(CalendarState::new(reference)),
            feedback_channel: None,
        }
    }

    /// Create a planner that sends every new rendering of the calendar to `feedback_sender`
    pub fn new_with_feedback(source: S, reference: MonthCursor, feedback_sender: FeedbackSender) -> Self {
        let mut planner = Self::new(source, reference);
        planner.feedback_channel = Some(feedback_sender);
        planner
    }

    pub fn source(&self) -> &S { &self.source }

    fn state(&self) -> MutexGuard<'_, CalendarState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// A copy of the current local store
    pub fn tasks(&self) -> Vec<TaskRecord> {
        self.state().tasks().to_vec()
    }

    /// The month that is currently displayed
    pub fn reference(&self) -> MonthCursor {
        self.state().reference()
    }

    /// Lay out the current month with the current local store
    pub fn render(&self) -> CalendarGrid {
        self.state().render()
    }

    /// Render, and send the result to the feedback channel (if any)
    fn redraw(&self) -> CalendarGrid {
        let grid = self.render();
        if let Some(sender) = &self.feedback_channel {
            // No one listening is not an error
            let _ = sender.send(CalendarEvent::Redraw(grid.clone()));
        }
        grid
    }

    /// Fetch every todo from the source, and replace the local store with them.
    ///
    /// It returns whether the fetch was successful (details about errors are logged using the `log::*` macros).
    /// In case of error, the local store is left untouched. See [`Self::fetch`] to know whether the result has been applied.
    pub async fn refresh(&self) -> bool {
        self.fetch().await.is_success()
    }

    /// Fetch every todo from the source, and apply the result unless a more recent one has been applied in the meantime
    pub async fn fetch(&self) -> FetchOutcome {
        let seq = self.state().issue_request();
        log::debug!("Starting fetch #{}", seq.value());

        match self.source.list_all().await {
            Err(err) => {
                log::error!("Error fetching todos: {}", err);
                FetchOutcome::Failed
            },
            Ok(tasks) => {
                let applied = self.state().apply_fetch(seq, tasks);
                if applied {
                    self.redraw();
                    FetchOutcome::Applied
                } else {
                    FetchOutcome::Outdated
                }
            },
        }
    }

    /// Create a todo, due on `date` (if any). The local store is refreshed in case of success.
    ///
    /// It returns whether the todo has been accepted by the source. Empty texts are not sent.
    pub async fn add_item(&self, text: &str, date: Option<&str>) -> bool {
        if text.trim().is_empty() {
            log::warn!("Not adding todo: {}", TodoError::EmptyInput);
            return false;
        }

        let content = crate::content::build_from(text, date);
        match self.source.create(&content).await {
            Err(err) => {
                log::error!("Error creating todo: {}", err);
                false
            },
            Ok(()) => {
                self.refresh().await;
                true
            },
        }
    }

    /// Delete a todo. The local store is refreshed in case of success.
    ///
    /// `id` does not have to be in the local store: the source decides whether it exists.
    pub async fn delete_item(&self, id: &TodoId) -> bool {
        match self.source.delete(id).await {
            Err(err) => {
                log::error!("Failed to delete todo with id {}: {}", id, err);
                false
            },
            Ok(()) => {
                self.refresh().await;
                true
            },
        }
    }

    /// Move the displayed month by `months`, and render it. Nothing is fetched.
    pub fn advance_month(&self, months: i32) -> CalendarGrid {
        self.state().advance_month(months);
        self.redraw()
    }

    pub fn next_month(&self) -> CalendarGrid {
        self.advance_month(1)
    }

    pub fn previous_month(&self) -> CalendarGrid {
        self.advance_month(-1)
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::memory::MemorySource;
    use crate::mock_behaviour::MockBehaviour;
    use crate::controller::feedback::feedback_channel;
    use std::time::Duration;

    fn march_2024() -> MonthCursor {
        MonthCursor::new(2024, 3).unwrap()
    }

    #[tokio::test]
    async fn test_refresh_replaces_store() {
        let source = MemorySource::new();
        source.insert("Buy milk||2024-03-05");
        let planner = Planner::new(source, march_2024());

        assert!(planner.tasks().is_empty());
        assert!(planner.refresh().await);
        assert_eq!(planner.tasks().len(), 1);
        assert_eq!(planner.render().day(5).unwrap().tasks().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_store() {
        let source = MemorySource::new();
        source.insert("Buy milk||2024-03-05");
        let planner = Planner::new(source, march_2024());
        assert!(planner.refresh().await);

        planner.source().insert("Call mom||2024-03-05");
        planner.source().set_behaviour(MockBehaviour::fail_now(1));
        assert!(planner.refresh().await == false);
        assert_eq!(planner.tasks().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_newer_fetch_does_not_hide_older_result() {
        let source = MemorySource::with_behaviour(MockBehaviour{
            list_all_behaviour: (1, 1),
            ..MockBehaviour::default()
        });
        source.insert("Buy milk||2024-03-05");
        // The first fetch succeeds but replies last, the second one fails
        source.delay_next_list(Duration::from_millis(200));
        let planner = Planner::new(source, march_2024());

        let (first, second) = tokio::join!(
            planner.fetch(),
            async {
                tokio::time::sleep(Duration::from_millis(10)).await;
                planner.fetch().await
            },
        );
        assert_eq!(first, FetchOutcome::Applied);
        assert_eq!(second, FetchOutcome::Failed);
        assert_eq!(planner.tasks().len(), 1);
        assert_eq!(planner.source().list_all_calls(), 2);
    }

    #[tokio::test]
    async fn test_outdated_fetch_outcome() {
        let source = MemorySource::new();
        source.delay_next_list(Duration::from_millis(100));
        let planner = Planner::new(source, march_2024());

        let (first, second) = tokio::join!(planner.fetch(), planner.fetch());
        assert_eq!(second, FetchOutcome::Applied);
        assert_eq!(first, FetchOutcome::Outdated);
        assert!(first.is_success());
        assert!(FetchOutcome::Failed.is_success() == false);
    }

    #[tokio::test]
    async fn test_add_item() {
        let planner = Planner::new(MemorySource::new(), march_2024());

        assert!(planner.add_item("Buy milk", Some("2024-03-05")).await);
        assert!(planner.add_item("No date task", None).await);
        assert_eq!(planner.source().todos()[0].content(), "Buy milk||2024-03-05");
        assert_eq!(planner.source().todos()[1].content(), "No date task");

        // Every addition triggers a refresh
        assert_eq!(planner.source().list_all_calls(), 2);
        assert_eq!(planner.tasks().len(), 2);
    }

    #[tokio::test]
    async fn test_empty_item_is_skipped() {
        let planner = Planner::new(MemorySource::new(), march_2024());
        assert!(planner.add_item("   ", Some("2024-03-05")).await == false);
        assert_eq!(planner.source().create_calls(), 0);
        assert_eq!(planner.source().list_all_calls(), 0);
    }

    #[tokio::test]
    async fn test_failed_add_does_not_refresh() {
        let planner = Planner::new(MemorySource::with_behaviour(MockBehaviour::fail_now(1)), march_2024());
        assert!(planner.add_item("Buy milk", None).await == false);
        assert_eq!(planner.source().list_all_calls(), 0);
        assert!(planner.source().todos().is_empty());
    }

    #[tokio::test]
    async fn test_delete_item() {
        let source = MemorySource::new();
        let id = source.insert("Buy milk||2024-03-05");
        let planner = Planner::new(source, march_2024());
        planner.refresh().await;

        assert!(planner.delete_item(&id).await);
        assert!(planner.tasks().is_empty());
        assert_eq!(planner.source().list_all_calls(), 2);

        // The source does not know this ID anymore
        assert!(planner.delete_item(&id).await == false);
        assert_eq!(planner.source().list_all_calls(), 2);
    }

    #[tokio::test]
    async fn test_navigation_does_not_fetch() {
        let planner = Planner::new(MemorySource::new(), march_2024());
        let grid = planner.next_month();
        assert_eq!(grid.header(), "April 2024");
        let grid = planner.previous_month();
        assert_eq!(grid.header(), "March 2024");
        assert_eq!(planner.source().list_all_calls(), 0);
    }

    #[tokio::test]
    async fn test_feedback() {
        let (sender, receiver) = feedback_channel();
        let source = MemorySource::new();
        source.insert("Buy milk||2024-04-02");
        let planner = Planner::new_with_feedback(source, march_2024(), sender);

        planner.refresh().await;
        match &*receiver.borrow() {
            CalendarEvent::Redraw(grid) => assert_eq!(grid.header(), "March 2024"),
            other => panic!("Unexpected event {}", other),
        }

        planner.next_month();
        match &*receiver.borrow() {
            CalendarEvent::Redraw(grid) => {
                assert_eq!(grid.header(), "April 2024");
                assert_eq!(grid.day(2).unwrap().tasks().len(), 1);
            },
            other => panic!("Unexpected event {}", other),
        };
    }
}
