//! An in-memory todo backend
//!
//! It behaves like the reference REST backend (IDs are assigned from a counter, deleting an unknown ID is a 404), without any network involved. \
//! This is useful for tests, and to try the calendar offline.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use async_trait::async_trait;

use crate::error::TodoError;
use crate::mock_behaviour::MockBehaviour;
use crate::todo::{TaskRecord, TodoId};
use crate::traits::TodoSource;


#[derive(Debug)]
struct MemoryData {
    todos: Vec<TaskRecord>,
    next_id: u64,

    behaviour: MockBehaviour,
    list_delays: VecDeque<Duration>,

    n_list_all: u32,
    n_create: u32,
    n_delete: u32,
}

/// A [`TodoSource`] that keeps its todos in memory
#[derive(Debug)]
pub struct MemorySource {
    data: Mutex<MemoryData>,
}

impl Default for MemorySource {
    fn default() -> Self {
        Self::new()
    }
}

impl MemorySource {
    pub fn new() -> Self {
        Self::with_behaviour(MockBehaviour::default())
    }

    /// Create a source that will fail (or succeed) according to `behaviour`
    pub fn with_behaviour(behaviour: MockBehaviour) -> Self {
        Self {
            data: Mutex::new(MemoryData {
                todos: Vec::new(),
                next_id: 1,
                behaviour,
                list_delays: VecDeque::new(),
                n_list_all: 0,
                n_create: 0,
                n_delete: 0,
            }),
        }
    }

    fn data(&self) -> MutexGuard<'_, MemoryData> {
        self.data.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Directly insert a todo, bypassing the mock behaviour and call counters. Returns its new ID
    pub fn insert<S: ToString>(&self, content: S) -> TodoId {
        let mut data = self.data();
        let id = TodoId::from(data.next_id);
        data.next_id += 1;
        data.todos.push(TaskRecord::new(id.clone(), content));
        id
    }

    /// The todos currently stored
    pub fn todos(&self) -> Vec<TaskRecord> {
        self.data().todos.clone()
    }

    pub fn set_behaviour(&self, behaviour: MockBehaviour) {
        self.data().behaviour = behaviour;
    }

    /// Delay the reply of the next `list_all` call.
    ///
    /// The list is still captured when the call is made, so that a delayed reply is also an outdated one.
    pub fn delay_next_list(&self, delay: Duration) {
        self.data().list_delays.push_back(delay);
    }

    pub fn list_all_calls(&self) -> u32 { self.data().n_list_all }
    pub fn create_calls(&self) -> u32   { self.data().n_create   }
    pub fn delete_calls(&self) -> u32   { self.data().n_delete   }
}

#[async_trait]
impl TodoSource for MemorySource {
    async fn list_all(&self) -> Result<Vec<TaskRecord>, TodoError> {
        let (result, delay) = {
            let mut data = self.data();
            data.n_list_all += 1;
            let delay = data.list_delays.pop_front();
            let result = data.behaviour.can_list_all().map(|_| data.todos.clone());
            (result, delay)
        };

        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        result
    }

    async fn create(&self, content: &str) -> Result<(), TodoError> {
        let mut data = self.data();
        data.n_create += 1;
        data.behaviour.can_create()?;

        let id = TodoId::from(data.next_id);
        data.next_id += 1;
        data.todos.push(TaskRecord::new(id, content));
        Ok(())
    }

    async fn delete(&self, id: &TodoId) -> Result<(), TodoError> {
        let mut data = self.data();
        data.n_delete += 1;
        data.behaviour.can_delete()?;

        match data.todos.iter().position(|todo| todo.id() == id) {
            None => Err(TodoError::Server{ status: 404 }),
            Some(index) => {
                data.todos.remove(index);
                Ok(())
            }
        }
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[tokio::test]
    async fn test_crud() {
        let source = MemorySource::new();
        source.create("Buy milk||2024-03-05").await.unwrap();
        source.create("No date task").await.unwrap();

        let todos = source.list_all().await.unwrap();
        assert_eq!(todos, vec![
            TaskRecord::new(1u64, "Buy milk||2024-03-05"),
            TaskRecord::new(2u64, "No date task"),
        ]);

        source.delete(&TodoId::from(1u64)).await.unwrap();
        assert_eq!(source.todos(), vec![TaskRecord::new(2u64, "No date task")]);

        // IDs are never re-used
        source.create("Call mom").await.unwrap();
        assert_eq!(source.todos()[1].id(), &TodoId::from(3u64));
    }

    #[tokio::test]
    async fn test_delete_unknown_id() {
        let source = MemorySource::new();
        match source.delete(&TodoId::from(42u64)).await {
            Err(TodoError::Server{ status: 404 }) => (),
            other => panic!("Unexpected result {:?}", other),
        }
        assert_eq!(source.delete_calls(), 1);
    }

    #[tokio::test]
    async fn test_mocked_failures() {
        let source = MemorySource::with_behaviour(MockBehaviour::fail_now(1));
        source.insert("Existing");

        assert!(source.list_all().await.is_err());
        assert!(source.create("New").await.is_err());
        assert_eq!(source.todos().len(), 1);

        assert_eq!(source.list_all().await.unwrap().len(), 1);
        assert!(source.create("New").await.is_ok());
        assert_eq!(source.list_all_calls(), 2);
        assert_eq!(source.create_calls(), 2);
    }
}
