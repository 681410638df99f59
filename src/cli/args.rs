//! Arguments for the `fieldpath` binary: one subcommand per accessor
//! operation, plus the document format and log verbosity shared by all of them.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use crate::cli::output::Format;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "fieldpath",
    version,
    about = "Read, write, and list the fields of JSON or YAML documents by dot-delimited path."
)]
pub struct FieldpathArgs {
    /// Document format. Inferred from the file extension when omitted.
    #[arg(long, global = true, value_enum)]
    pub format: Option<Format>,

    /// Log broadcast steps to stderr (repeatable).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the path of every leaf field.
    Keys {
        /// The document to read, or `-` for stdin.
        file: PathBuf,
        /// Prefix prepended to every listed path.
        #[arg(long, default_value = "")]
        prefix: String,
        /// Key name to leave out at any depth.
        #[arg(long = "skip")]
        skip: Vec<String>,
    },
    /// Print the value at a path.
    Get {
        /// The document to read, or `-` for stdin.
        file: PathBuf,
        /// Dot-delimited field path.
        path: String,
        /// Treat a numeric segment after an array as an index instead of reading every element.
        #[arg(long)]
        single: bool,
    },
    /// Set the value at a path and print the updated document.
    Set {
        /// The document to read, or `-` for stdin.
        file: PathBuf,
        /// Dot-delimited field path.
        path: String,
        /// New value as JSON. Text that is not valid JSON is stored as a string.
        value: String,
        /// Write one indexed array element instead of every element.
        #[arg(long)]
        single: bool,
    },
    /// Remove the field at a path and print the updated document.
    Del {
        /// The document to read, or `-` for stdin.
        file: PathBuf,
        /// Dot-delimited field path.
        path: String,
        /// Remove from one indexed array element instead of every element.
        #[arg(long)]
        single: bool,
    },
}

impl Command {
    pub fn file(&self) -> &PathBuf {
        match self {
            Command::Keys { file, .. }
            | Command::Get { file, .. }
            | Command::Set { file, .. }
            | Command::Del { file, .. } => file,
        }
    }
}
