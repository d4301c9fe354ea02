//! Command-line front end

pub mod args;
pub mod build;

pub use args::{Args, ListArgs, SubCommand};
pub use build::{build_list, filter_list, run};
