//! Output formatting

use serde::Serialize;

use crate::output::human::format_human;
use crate::output::json::format_json;
use crate::todo::TodoList;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Something the CLI prints
#[derive(Debug, Clone)]
pub enum Report {
    List(TodoList),
    Status(StatusReport),
}

/// Summary of a list's completion state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    pub name: String,
    pub total: usize,
    pub done: usize,
    pub complete: bool,
}

impl StatusReport {
    pub fn from_list(list: &TodoList) -> Self {
        Self {
            name: list.name().to_string(),
            total: list.len(),
            done: list.done_count(),
            complete: list.is_done(),
        }
    }
}

pub fn format_output(report: &Report, format: &OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_human(report),
        OutputFormat::Json => format_json(report),
    }
}
