//! todolist - a named, ordered list of todos
//!
//! A `TodoList` keeps its todos in insertion order and offers indexed
//! access, bulk status changes, filtering and a fixed plain-text rendering.
//!
//! # Example
//!
//! ```
//! use todolist::{Todo, TodoList};
//!
//! let milk = Todo::new("Buy milk");
//! let mut list = TodoList::new("Today's Todos");
//! list.add(milk.clone());
//! list.add(Todo::new("Clean room"));
//!
//! milk.mark_done();
//! assert_eq!(list.to_string(), "---- Today's Todos ----\n[X] Buy milk\n[ ] Clean room");
//! ```

pub mod cli;
pub mod error;
pub mod output;
pub mod todo;

pub use error::{Result, TodoError};
pub use output::{format_output, OutputFormat, Report, StatusReport};
pub use todo::{Todo, TodoList};
