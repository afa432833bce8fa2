use async_trait::async_trait;

use crate::error::TodoError;
use crate::todo::{TaskRecord, TodoId};

/// A remote collection of todos
#[async_trait]
pub trait TodoSource: Send + Sync {
    /// Returns every todo this source contains, in the order the source provides them
    async fn list_all(&self) -> Result<Vec<TaskRecord>, TodoError>;

    /// Create a new todo. The source assigns its ID
    async fn create(&self, content: &str) -> Result<(), TodoError>;

    /// Delete a todo
    async fn delete(&self, id: &TodoId) -> Result<(), TodoError>;
}
