//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Render a JSON forest as an indented, sortable table")]
pub struct Args {
    /// JSON file holding an array of root nodes
    pub forest: PathBuf,

    /// Column to show, as NAME or NAME:HEADING (the first one is indented)
    #[arg(short, long = "column", value_name = "NAME[:HEADING]")]
    pub columns: Vec<String>,

    /// Click the header of the named column (repeatable)
    #[arg(short, long, value_name = "NAME")]
    pub sort: Vec<String>,

    /// Click the body row at this index, after sorting (repeatable)
    #[arg(short, long, value_name = "ROW")]
    pub toggle: Vec<usize>,

    /// Start with every node that has children collapsed
    #[arg(long)]
    pub collapsed: bool,

    /// Spaces per depth level in the indented column
    #[arg(long, default_value = "2")]
    pub indent_size: u32,

    /// Fit the columns to --width
    #[arg(long)]
    pub scrollable: bool,

    /// Table width used with --scrollable
    #[arg(short, long, default_value = "80")]
    pub width: u32,

    /// Log file (defaults to the user cache directory)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log level
    #[arg(long, default_value = "info")]
    pub log_level: LevelFilter,
}

impl Args {
    /// Splits each `--column` into its field name and optional heading.
    pub fn column_specs(&self) -> Vec<(&str, Option<&str>)> {
        self.columns
            .iter()
            .map(|spec| match spec.split_once(':') {
                Some((name, heading)) => (name, Some(heading)),
                None => (spec.as_str(), None),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_specs() {
        let args = Args::parse_from([
            "tabletree",
            "forest.json",
            "--column",
            "name:Name",
            "-c",
            "size",
        ]);
        assert_eq!(args.column_specs(), [("name", Some("Name")), ("size", None)]);
        assert_eq!(args.indent_size, 2);
        assert_eq!(args.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_repeated_clicks_keep_order() {
        let args = Args::parse_from([
            "tabletree", "f.json", "--sort", "size", "--sort", "name", "-t", "3", "-t", "0",
        ]);
        assert_eq!(args.sort, ["size", "name"]);
        assert_eq!(args.toggle, [3, 0]);
        assert!(!args.collapsed);
    }
}
