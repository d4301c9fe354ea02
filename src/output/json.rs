//! JSON output formatting

use serde_json::{json, Value};

use crate::output::formatter::Report;

pub fn format_json(report: &Report) -> String {
    let data: Value = match report {
        Report::List(list) => serde_json::to_value(list).unwrap_or(json!(null)),
        Report::Status(status) => serde_json::to_value(status).unwrap_or(json!(null)),
    };

    serde_json::to_string_pretty(&data).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::formatter::StatusReport;
    use crate::todo::{Todo, TodoList};

    #[test]
    fn test_json_list() {
        let mut list = TodoList::new("Chores");
        list.add(Todo::new("Dishes"));

        let value: Value = serde_json::from_str(&format_json(&Report::List(list))).unwrap();
        assert_eq!(
            value,
            json!({ "name": "Chores", "todos": [{ "title": "Dishes", "done": false }] })
        );
    }

    #[test]
    fn test_json_status_of_empty_list() {
        let list = TodoList::new("Nothing");
        let report = Report::Status(StatusReport::from_list(&list));

        let value: Value = serde_json::from_str(&format_json(&report)).unwrap();
        assert_eq!(value["total"], 0);
        assert_eq!(value["complete"], true);
    }
}
