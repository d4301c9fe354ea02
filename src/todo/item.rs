//! A single todo record
//!
//! `Todo` is a cheap handle: cloning it shares the underlying record, so a
//! todo held by the caller and the same todo held by a `TodoList` always
//! agree on their done state.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use serde::ser::{Serialize, SerializeStruct, Serializer};

#[derive(Debug)]
struct Record {
    title: String,
    done: Cell<bool>,
}

/// A task with an immutable title and a completion flag
#[derive(Debug, Clone)]
pub struct Todo {
    record: Rc<Record>,
}

impl Todo {
    /// Create a new todo that is not done
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            record: Rc::new(Record {
                title: title.into(),
                done: Cell::new(false),
            }),
        }
    }

    pub fn title(&self) -> &str {
        &self.record.title
    }

    pub fn mark_done(&self) {
        self.record.done.set(true);
    }

    pub fn mark_undone(&self) {
        self.record.done.set(false);
    }

    pub fn is_done(&self) -> bool {
        self.record.done.get()
    }

    /// Whether both handles point at the same record
    pub fn ptr_eq(&self, other: &Todo) -> bool {
        Rc::ptr_eq(&self.record, &other.record)
    }

    /// Copy this todo into a new record that no other handle shares
    pub fn detached(&self) -> Todo {
        let todo = Todo::new(self.title());
        todo.record.done.set(self.is_done());
        todo
    }
}

impl PartialEq for Todo {
    fn eq(&self, other: &Self) -> bool {
        self.title() == other.title() && self.is_done() == other.is_done()
    }
}

impl Eq for Todo {}

impl fmt::Display for Todo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.is_done() { 'X' } else { ' ' };
        write!(f, "[{}] {}", marker, self.title())
    }
}

impl Serialize for Todo {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Todo", 2)?;
        state.serialize_field("title", self.title())?;
        state.serialize_field("done", &self.is_done())?;
        state.end()
    }
}
