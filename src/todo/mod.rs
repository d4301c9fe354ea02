//! Todo items and the list that orders them
//!
//! - `Todo`: a title and a done flag, shared between every handle to it
//! - `TodoList`: a named, ordered collection with indexed access,
//!   bulk status changes, filtering and a plain-text rendering

mod item;
mod list;

pub use item::Todo;
pub use list::TodoList;
