//! This module provides a client to connect to a todo REST backend

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use url::Url;

use crate::error::TodoError;
use crate::todo::{TaskRecord, TodoId};
use crate::traits::TodoSource;

/// The collection every todo belongs to, relative to the base URL
static TODOS_PATH: &str = "todos";

/// The body of a creation request
#[derive(Serialize)]
struct NewTodo<'a> {
    content: &'a str,
}


/// A [`TodoSource`] that fetches its data from a REST backend
#[derive(Clone, Debug)]
pub struct Client {
    url: Url,
    http: reqwest::Client,
}

impl Client {
    /// Create a client. This does not start a connection
    pub fn new<S: AsRef<str>>(url: S) -> Result<Self, TodoError> {
        let url = Url::parse(url.as_ref())?;
        if url.cannot_be_a_base() {
            return Err(TodoError::CannotBeABase(url));
        }

        Ok(Self{
            url,
            http: reqwest::Client::new(),
        })
    }

    /// Create a client for the URL set in [`crate::config`]
    pub fn from_config() -> Result<Self, TodoError> {
        Self::new(crate::config::api_url())
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Append path segments to the base URL, keeping any path prefix it may already have
    fn endpoint(&self, segments: &[&str]) -> Result<Url, TodoError> {
        let mut url = self.url.clone();
        url.path_segments_mut()
            .map_err(|_| TodoError::CannotBeABase(self.url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

/// Turns non-2xx replies into errors
fn check_status(response: &reqwest::Response) -> Result<(), TodoError> {
    let status = response.status();
    if status.is_success() == false {
        return Err(TodoError::Server{ status: status.as_u16() });
    }
    Ok(())
}

#[async_trait]
impl TodoSource for Client {
    async fn list_all(&self) -> Result<Vec<TaskRecord>, TodoError> {
        let url = self.endpoint(&[TODOS_PATH])?;
        log::debug!("GET {}", url);

        let response = self.http
            .get(url)
            .send()
            .await?;
        check_status(&response)?;

        // A malformed record should not hide the other ones
        let values: Vec<serde_json::Value> = response.json().await?;
        let n_values = values.len();
        let todos: Vec<TaskRecord> = values.into_iter()
            .filter_map(|value| match TaskRecord::from_json(value) {
                Ok(todo) => Some(todo),
                Err(err) => {
                    log::warn!("Skipping a todo: {}", err);
                    None
                },
            })
            .collect();
        log::debug!("Got {} todos ({} skipped)", todos.len(), n_values - todos.len());
        Ok(todos)
    }

    async fn create(&self, content: &str) -> Result<(), TodoError> {
        let url = self.endpoint(&[TODOS_PATH])?;
        log::debug!("POST {} ({:?})", url, content);

        let body = serde_json::to_string(&NewTodo{ content })
            .map_err(|err| TodoError::Payload(err.to_string()))?;

        let response = self.http
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;
        check_status(&response)
    }

    async fn delete(&self, id: &TodoId) -> Result<(), TodoError> {
        let id = id.to_string();
        let url = self.endpoint(&[TODOS_PATH, id.as_str()])?;
        log::debug!("DELETE {}", url);

        let response = self.http
            .delete(url)
            .send()
            .await?;
        check_status(&response)
    }
}
