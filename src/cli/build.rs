//! Turning parsed arguments into a list and a printable report

use anyhow::{bail, Context, Result};
use regex::Regex;
use serde_json::Value;
use tracing::{debug, info};

use crate::cli::args::{Args, ListArgs, SubCommand};
use crate::output::{format_output, OutputFormat, Report, StatusReport};
use crate::todo::{Todo, TodoList};

/// Run a parsed command and return the text to print
pub fn run(args: Args) -> Result<String> {
    let format = if args.json { OutputFormat::Json } else { OutputFormat::Human };

    let report = match args.command {
        SubCommand::Show { list } => Report::List(build_list(&list)?),
        SubCommand::Filter { list, done, pending, matching } => {
            let list = build_list(&list)?;
            let status = if done {
                Some(true)
            } else if pending {
                Some(false)
            } else {
                None
            };
            Report::List(filter_list(&list, status, matching.as_deref())?)
        }
        SubCommand::Status { list } => {
            Report::Status(StatusReport::from_list(&build_list(&list)?))
        }
    };

    Ok(format_output(&report, &format))
}

/// Build a list from its arguments and apply the requested edits
pub fn build_list(args: &ListArgs) -> Result<TodoList> {
    let mut list = TodoList::new(args.name.as_str());

    for title in &args.items {
        debug!(title = %title, "adding todo");
        list.add(Todo::new(title.as_str()));
    }

    if let Some(raw) = &args.items_json {
        let value: Value = serde_json::from_str(raw).context("--items-json is not valid JSON")?;
        let Value::Array(values) = value else {
            bail!("--items-json must be a JSON array of todo objects");
        };
        for (position, value) in values.iter().enumerate() {
            let todo = list
                .add_value(value)
                .with_context(|| format!("--items-json element {}", position))?;
            debug!(title = %todo.title(), done = todo.is_done(), "adding todo from JSON");
        }
    }

    for &index in &args.remove_at {
        let removed = list.remove_at(index)?;
        debug!(index, title = %removed.title(), "removed todo");
    }

    for title in &args.mark_done {
        if list.mark_done(title) {
            debug!(title = %title, "marked done");
        } else {
            debug!(title = %title, "no todo with this title");
        }
    }

    for &index in &args.mark_done_at {
        list.mark_done_at(index)?;
        debug!(index, "marked done");
    }

    for &index in &args.mark_undone_at {
        list.mark_undone_at(index)?;
        debug!(index, "marked undone");
    }

    if args.all_done {
        list.mark_all_done();
        debug!("marked all done");
    }

    info!(name = %list.name(), size = list.len(), done = list.done_count(), "list built");
    Ok(list)
}

/// Keep todos with the given done state (if any) whose title matches `pattern` (if any)
pub fn filter_list(list: &TodoList, done: Option<bool>, pattern: Option<&str>) -> Result<TodoList> {
    let regex = pattern
        .map(Regex::new)
        .transpose()
        .context("--matching is not a valid regular expression")?;

    let filtered = list.filter(|todo| {
        done.map_or(true, |done| todo.is_done() == done)
            && regex.as_ref().map_or(true, |regex| regex.is_match(todo.title()))
    });
    debug!(kept = filtered.len(), of = list.len(), "filtered list");
    Ok(filtered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TodoError;

    fn list_args(items: &[&str]) -> ListArgs {
        ListArgs {
            name: "Today's Todos".to_string(),
            items: items.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_build_list_applies_edits() {
        let mut args = list_args(&["Buy milk", "Clean room", "Go to the gym", "Nap"]);
        args.remove_at = vec![3];
        args.mark_done = vec!["Buy milk".to_string(), "Walk the dog".to_string()];
        args.mark_done_at = vec![2];
        args.mark_undone_at = vec![2];

        let list = build_list(&args).unwrap();
        assert_eq!(
            list.to_string(),
            "---- Today's Todos ----\n[X] Buy milk\n[ ] Clean room\n[ ] Go to the gym"
        );
    }

    #[test]
    fn test_build_list_all_done() {
        let mut args = list_args(&["Buy milk", "Clean room"]);
        args.all_done = true;
        assert!(build_list(&args).unwrap().is_done());
    }

    #[test]
    fn test_build_list_index_error() {
        let mut args = list_args(&["Buy milk"]);
        args.mark_done_at = vec![6];

        let err = build_list(&args).unwrap_err();
        assert_eq!(
            err.downcast_ref::<TodoError>(),
            Some(&TodoError::IndexOutOfRange { index: 6, len: 1 })
        );
    }

    #[test]
    fn test_build_list_from_json() {
        let mut args = list_args(&["Buy milk"]);
        args.items_json = Some(r#"[{"title": "Eat lunch", "done": true}, {"title": "Nap"}]"#.to_string());

        let list = build_list(&args).unwrap();
        assert_eq!(list.len(), 3);
        assert!(list.item_at(1).unwrap().is_done());
        assert_eq!(list.item_at(2).unwrap().title(), "Nap");
    }

    #[test]
    fn test_build_list_json_rejects_non_todo() {
        let mut args = list_args(&[]);
        args.items_json = Some(r#"[{"title": "Eat lunch"}, 3]"#.to_string());

        let err = build_list(&args).unwrap_err();
        assert!(matches!(err.downcast_ref::<TodoError>(), Some(TodoError::NotATodo(_))));
    }

    #[test]
    fn test_build_list_json_must_be_array() {
        let mut args = list_args(&[]);
        args.items_json = Some(r#"{"title": "Eat lunch"}"#.to_string());
        assert!(build_list(&args).is_err());
    }

    #[test]
    fn test_filter_list() {
        let mut args = list_args(&["Buy milk", "Buy bread", "Clean room"]);
        args.mark_done = vec!["Buy bread".to_string()];
        let list = build_list(&args).unwrap();

        let pending = filter_list(&list, Some(false), None).unwrap();
        assert_eq!(pending.len(), 2);

        let buying = filter_list(&list, None, Some("^Buy")).unwrap();
        assert_eq!(buying.name(), "Today's Todos");
        assert_eq!(buying.len(), 2);

        let pending_buying = filter_list(&list, Some(false), Some("^Buy")).unwrap();
        assert_eq!(pending_buying.to_string(), "---- Today's Todos ----\n[ ] Buy milk");
    }

    #[test]
    fn test_filter_list_invalid_regex() {
        let list = TodoList::new("Empty");
        assert!(filter_list(&list, None, Some("(")).is_err());
    }
}
