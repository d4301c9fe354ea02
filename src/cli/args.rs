//! CLI argument parsing

use clap::{Args as ClapArgs, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "todolist")]
#[command(author, version, about = "Build a todo list from the command line and print it", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: SubCommand,

    /// Output format as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose logging (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Log level used when RUST_LOG is not set
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum SubCommand {
    /// Print the list
    Show {
        #[command(flatten)]
        list: ListArgs,
    },

    /// Print only the todos matching the given conditions
    Filter {
        #[command(flatten)]
        list: ListArgs,

        /// Keep only done todos
        #[arg(long, conflicts_with = "pending")]
        done: bool,

        /// Keep only todos that are not done
        #[arg(long)]
        pending: bool,

        /// Keep only todos whose title matches this regular expression
        #[arg(long, value_name = "REGEX")]
        matching: Option<String>,
    },

    /// Print how many todos are done
    Status {
        #[command(flatten)]
        list: ListArgs,
    },
}

/// Contents of the list and the edits applied to it, in the order below
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct ListArgs {
    /// Name of the list
    #[arg(long, default_value = "Todos")]
    pub name: String,

    /// Add a todo with this title
    #[arg(long = "item", value_name = "TITLE")]
    pub items: Vec<String>,

    /// JSON array of todo objects, e.g. '[{"title": "Buy milk", "done": true}]'
    #[arg(long, value_name = "JSON")]
    pub items_json: Option<String>,

    /// Remove the todo at this index
    #[arg(long = "remove-at", value_name = "INDEX")]
    pub remove_at: Vec<usize>,

    /// Mark the first todo with this title as done
    #[arg(long = "mark-done", value_name = "TITLE")]
    pub mark_done: Vec<String>,

    /// Mark the todo at this index as done
    #[arg(long = "mark-done-at", value_name = "INDEX")]
    pub mark_done_at: Vec<usize>,

    /// Mark the todo at this index as not done
    #[arg(long = "mark-undone-at", value_name = "INDEX")]
    pub mark_undone_at: Vec<usize>,

    /// Mark every todo as done
    #[arg(long)]
    pub all_done: bool,
}
