//! Human-readable output formatting

use crate::output::formatter::Report;

pub fn format_human(report: &Report) -> String {
    match report {
        Report::List(list) => list.to_string(),
        Report::Status(status) => {
            format!(
                "Status of {}\n\
                 Items:    {}\n\
                 Done:     {}\n\
                 Complete: {}",
                status.name,
                status.total,
                status.done,
                if status.complete { "yes" } else { "no" }
            )
        }
    }
}
