mod args;
mod error;
mod paths;
mod text;

use std::fs::{self, File};
use std::process::ExitCode;

use clap::Parser;
use log::{info, warn};
use simplelog::{Config, WriteLogger};
use tabletree::model::forest_from_json;
use tabletree::table::{Column, TableDef, TableTree};

use crate::args::Args;
use crate::error::CliError;

/// Column shown when none is requested.
const DEFAULT_COLUMN: &str = "name";

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<String, CliError> {
    init_logger(args)?;

    let json = fs::read_to_string(&args.forest).map_err(|source| CliError::ReadForest {
        path: args.forest.clone(),
        source,
    })?;
    let forest = forest_from_json(&json)?;
    info!("Loaded {} root nodes from {}", forest.len(), args.forest.display());

    let mut specs = args.column_specs();
    if specs.is_empty() {
        specs.push((DEFAULT_COLUMN, None));
    }
    let names: Vec<&str> = specs.iter().map(|(name, _)| *name).collect();

    let mut table = TableTree::new(build_definition(args, &specs), forest);
    let mut view = table.render();

    for name in &args.sort {
        let index = names
            .iter()
            .position(|n| n == name)
            .ok_or_else(|| CliError::UnknownColumn(name.clone()))?;
        match table.click_header(index)? {
            Some(sorted) => view = sorted,
            None => warn!("Column {} is unsortable, ignoring --sort", name),
        }
    }

    for &row in &args.toggle {
        match table.click_row(row)? {
            Some(toggled) => view = toggled,
            None => warn!("Row {} cannot collapse, ignoring --toggle", row),
        }
    }

    let width = args.scrollable.then_some(args.width);
    Ok(text::render_text(&view, width))
}

fn build_definition(args: &Args, specs: &[(&str, Option<&str>)]) -> TableDef {
    let columns = specs
        .iter()
        .enumerate()
        .map(|(index, &(name, heading))| {
            let column = Column::new(name).heading(heading.unwrap_or(name));
            if index == 0 { column.indent() } else { column }
        })
        .collect();

    let def = TableDef::new()
        .collapsed(args.collapsed)
        .indent_size(args.indent_size)
        .columns(columns);
    if args.scrollable { def.scrollable() } else { def }
}

fn init_logger(args: &Args) -> Result<(), CliError> {
    let path = args.log_file.clone().unwrap_or_else(paths::log_file);
    let file = File::create(&path).map_err(|source| CliError::LogFile {
        path: path.clone(),
        source,
    })?;
    WriteLogger::init(args.log_level, Config::default(), file)?;
    Ok(())
}
