//! TodoList - a named, ordered collection of todos
//!
//! The list owns the order and membership of its todos; the records
//! themselves are shared with whoever else holds a handle to them.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use super::item::Todo;
use crate::error::{Result, TodoError};

/// A named list of todos in insertion order
#[derive(Debug, Clone, Serialize)]
pub struct TodoList {
    name: String,
    todos: Vec<Todo>,
}

impl TodoList {
    /// Create an empty list
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            todos: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a todo to the end of the list
    pub fn add(&mut self, todo: Todo) {
        self.todos.push(todo);
    }

    /// Append a todo described by a JSON object `{"title": "...", "done": bool}`.
    ///
    /// `done` is optional and defaults to false. Any other shape is rejected
    /// with [`TodoError::NotATodo`] and the list is left untouched. Returns a
    /// handle to the appended todo.
    pub fn add_value(&mut self, value: &Value) -> Result<Todo> {
        let todo = todo_from_value(value)?;
        self.todos.push(todo.clone());
        Ok(todo)
    }

    /// Number of todos in the list
    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Copy of the list contents in order. The handles share their records
    /// with the list, but changes to the returned vec do not affect it.
    pub fn to_vec(&self) -> Vec<Todo> {
        self.todos.clone()
    }

    pub fn first(&self) -> Option<&Todo> {
        self.todos.first()
    }

    pub fn last(&self) -> Option<&Todo> {
        self.todos.last()
    }

    /// Remove and return the first todo
    pub fn shift(&mut self) -> Option<Todo> {
        if self.todos.is_empty() {
            None
        } else {
            Some(self.todos.remove(0))
        }
    }

    /// Remove and return the last todo
    pub fn pop(&mut self) -> Option<Todo> {
        self.todos.pop()
    }

    pub fn item_at(&self, index: usize) -> Result<&Todo> {
        self.todos.get(index).ok_or(TodoError::IndexOutOfRange {
            index,
            len: self.todos.len(),
        })
    }

    /// Remove and return the todo at `index`, shifting later todos left
    pub fn remove_at(&mut self, index: usize) -> Result<Todo> {
        self.item_at(index)?;
        Ok(self.todos.remove(index))
    }

    pub fn mark_done_at(&self, index: usize) -> Result<()> {
        self.item_at(index)?.mark_done();
        Ok(())
    }

    pub fn mark_undone_at(&self, index: usize) -> Result<()> {
        self.item_at(index)?.mark_undone();
        Ok(())
    }

    pub fn mark_all_done(&self) {
        self.for_each(Todo::mark_done);
    }

    pub fn mark_all_undone(&self) {
        self.for_each(Todo::mark_undone);
    }

    /// Mark the first todo titled exactly `title` as done.
    ///
    /// Returns false and changes nothing when no todo has that title.
    pub fn mark_done(&self, title: &str) -> bool {
        match self.todos.iter().find(|todo| todo.title() == title) {
            Some(todo) => {
                todo.mark_done();
                true
            }
            None => false,
        }
    }

    /// True when every todo is done; an empty list is done.
    pub fn is_done(&self) -> bool {
        self.todos.iter().all(Todo::is_done)
    }

    pub fn done_count(&self) -> usize {
        self.todos.iter().filter(|todo| todo.is_done()).count()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Todo> {
        self.todos.iter()
    }

    pub fn for_each<F>(&self, f: F)
    where
        F: FnMut(&Todo),
    {
        self.todos.iter().for_each(f);
    }

    /// Visit todos in order, stopping at the first error returned by `f`
    pub fn try_for_each<F, E>(&self, mut f: F) -> std::result::Result<(), E>
    where
        F: FnMut(&Todo) -> std::result::Result<(), E>,
    {
        for todo in &self.todos {
            f(todo)?;
        }
        Ok(())
    }

    /// New list with the same name holding the todos for which `predicate`
    /// returns true, in their original order.
    pub fn filter<P>(&self, mut predicate: P) -> TodoList
    where
        P: FnMut(&Todo) -> bool,
    {
        TodoList {
            name: self.name.clone(),
            todos: self.todos.iter().filter(|todo| predicate(todo)).cloned().collect(),
        }
    }

    pub fn try_filter<P, E>(&self, mut predicate: P) -> std::result::Result<TodoList, E>
    where
        P: FnMut(&Todo) -> std::result::Result<bool, E>,
    {
        let mut filtered = TodoList::new(self.name.clone());
        for todo in &self.todos {
            if predicate(todo)? {
                filtered.todos.push(todo.clone());
            }
        }
        Ok(filtered)
    }
}

impl fmt::Display for TodoList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "---- {} ----", self.name)?;
        for todo in &self.todos {
            write!(f, "\n{}", todo)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a TodoList {
    type Item = &'a Todo;
    type IntoIter = std::slice::Iter<'a, Todo>;

    fn into_iter(self) -> Self::IntoIter {
        self.todos.iter()
    }
}

fn todo_from_value(value: &Value) -> Result<Todo> {
    let object = match value {
        Value::Object(object) => object,
        other => return Err(TodoError::NotATodo(value_kind(other).to_string())),
    };

    let title = object
        .get("title")
        .and_then(Value::as_str)
        .ok_or_else(|| TodoError::NotATodo("an object without a string title".to_string()))?;

    let done = match object.get("done") {
        None | Some(Value::Null) => false,
        Some(Value::Bool(done)) => *done,
        Some(other) => {
            return Err(TodoError::NotATodo(format!(
                "an object whose done field is {}",
                value_kind(other)
            )))
        }
    };

    let todo = Todo::new(title);
    if done {
        todo.mark_done();
    }
    Ok(todo)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
