//! Document input and output for the CLI.
//!
//! Loading and rendering live here so every subcommand reads and prints
//! documents the same way.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use clap::ValueEnum;
use serde_json::Value;

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    /// Picks YAML for `.yaml`/`.yml` files and JSON for everything else,
    /// including stdin.
    pub fn infer(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Format::Yaml,
            _ => Format::Json,
        }
    }
}

/// Reads a document from `path`, or from stdin when `path` is `-`.
pub fn read_document(path: &Path, format: Format) -> Result<Value> {
    let source = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(path)?
    };
    parse_document(&source, format)
}

pub fn parse_document(source: &str, format: Format) -> Result<Value> {
    Ok(match format {
        Format::Json => serde_json::from_str(source)?,
        Format::Yaml => serde_yaml::from_str(source)?,
    })
}

/// Parses a value given on the command line. Anything that is not valid JSON
/// is taken as a plain string, so `fieldpath set doc.json a.b hello` works
/// without extra quoting.
pub fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

pub fn render(value: &Value, format: Format) -> Result<String> {
    Ok(match format {
        Format::Json => serde_json::to_string_pretty(value)?,
        Format::Yaml => serde_yaml::to_string(value)?.trim_end().to_string(),
    })
}

/// Prints a rendered value to stdout.
pub fn emit(value: &Value, format: Format) -> Result<()> {
    println!("{}", render(value, format)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn format_is_inferred_from_extension() {
        assert_eq!(Format::infer(Path::new("doc.yml")), Format::Yaml);
        assert_eq!(Format::infer(Path::new("doc.yaml")), Format::Yaml);
        assert_eq!(Format::infer(Path::new("doc.json")), Format::Json);
        assert_eq!(Format::infer(Path::new("-")), Format::Json);
    }

    #[test]
    fn bare_words_become_strings() {
        assert_eq!(parse_value("hello"), json!("hello"));
        assert_eq!(parse_value("42"), json!(42));
        assert_eq!(parse_value(r#"{"a":[1]}"#), json!({"a": [1]}));
    }

    #[test]
    fn yaml_documents_parse_into_json_values() {
        let doc = parse_document("a:\n  b: [1, 2]\n", Format::Yaml).unwrap();
        assert_eq!(doc, json!({"a": {"b": [1, 2]}}));
        assert_eq!(render(&json!({"a": 1}), Format::Yaml).unwrap(), "a: 1");
    }
}
