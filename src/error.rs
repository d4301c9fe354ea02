//! Error types for todolist

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TodoError {
    /// A value that does not describe a todo was supplied where one was required.
    #[error("Not a todo: expected an object with a string title, got {0}")]
    NotATodo(String),

    /// The index does not correspond to any element.
    #[error("Index out of range: no todo at index {index} (list has {len} item(s))")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, TodoError>;
