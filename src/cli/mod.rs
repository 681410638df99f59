//! The fieldpath command-line interface.
//!
//! This module is the entry point for all CLI commands and drives the
//! library's [`PathAccessor`] over documents loaded from disk or stdin.

use crate::cli::args::{Command, FieldpathArgs};
use crate::cli::output::{emit, parse_value, read_document, Format};
use crate::error::Result;
use crate::PathAccessor;
use clap::Parser;
use std::process;
use tracing_subscriber::EnvFilter;

pub mod args;
pub mod output;

/// The main entry point for the CLI.
pub fn run() {
    let args = FieldpathArgs::parse();
    init_tracing(args.verbose);

    if let Err(e) = dispatch(&args) {
        eprintln!("{:?}", miette::Report::new(e));
        process::exit(1);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "fieldpath={}",
            if verbosity > 0 { "debug" } else { "warn" }
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbosity > 0)
        .init();
}

/// Dispatches to the appropriate subcommand handler.
pub fn dispatch(args: &FieldpathArgs) -> Result<()> {
    let file = args.command.file();
    let format = args.format.unwrap_or_else(|| Format::infer(file));
    let mut doc = read_document(file, format)?;
    let accessor = PathAccessor::new();

    match &args.command {
        Command::Keys { prefix, skip, .. } => {
            let skip: Vec<&str> = skip.iter().map(String::as_str).collect();
            for key in accessor.get_keys(&doc, prefix, &skip) {
                println!("{key}");
            }
            Ok(())
        }
        Command::Get { path, single, .. } => {
            match accessor.get_value(&doc, path, !single)? {
                Some(value) => emit(&value, format),
                None => Ok(()),
            }
        }
        Command::Set {
            path,
            value,
            single,
            ..
        } => {
            let updated = accessor.set_value(&mut doc, path, false, Some(parse_value(value)), !single)?;
            emit(updated, format)
        }
        Command::Del { path, single, .. } => {
            let updated = accessor.set_value(&mut doc, path, true, None, !single)?;
            emit(updated, format)
        }
    }
}
