//! This crate provides a month-calendar view over a REST todo list.
//!
//! Todos are fetched from a backend by a [`Client`](client::Client), which is a [`TodoSource`](traits::TodoSource). \
//! A todo only has a free-text content. A due date can be embedded in it, using the convention described in the [`content`] module.
//!
//! A [`Planner`](controller::Planner) keeps a local copy of the todo list, and lays out the todos of a given month on a [`CalendarGrid`](calendar::CalendarGrid). \
//! Grids can then be drawn on any [`Surface`](render::Surface).

pub mod traits;
pub mod error;
pub use error::TodoError;

pub mod todo;
pub use todo::{TaskRecord, TodoId};
pub mod content;
pub mod calendar;
pub use calendar::{CalendarCell, CalendarGrid, MonthCursor};
pub mod controller;
pub use controller::{FetchOutcome, Planner};
pub mod render;

pub mod client;
pub mod memory;
pub mod mock_behaviour;

pub mod config;
pub mod utils;
