//! Aggregated results of one validation run

use colored::Colorize;
use serde::Serialize;
use std::io::{self, Write};

use super::error::MissingKeysError;

pub const FAILURE_HEADER: &str = "Errors were found in the following JSON files:";
pub const SUCCESS_MESSAGE: &str = "All JSON files are valid.";

/// Ordered missing-key errors plus scan counters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<MissingKeysError>,
    folders: usize,
    files: usize,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    valid: bool,
    folders: usize,
    files: usize,
    errors: Vec<JsonError<'a>>,
}

#[derive(Serialize)]
struct JsonError<'a> {
    #[serde(flatten)]
    error: &'a MissingKeysError,
    message: String,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_folder(&mut self) {
        self.folders += 1;
    }

    pub fn record_file(&mut self, error: Option<MissingKeysError>) {
        self.files += 1;
        if let Some(error) = error {
            self.errors.push(error);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[MissingKeysError] {
        &self.errors
    }

    pub fn folders(&self) -> usize {
        self.folders
    }

    pub fn files(&self) -> usize {
        self.files
    }

    /// Write the header and one line per error
    ///
    /// `colorize` should reflect whether `out` is a terminal; `colored` only
    /// looks at stdout.
    pub fn write_errors(&self, out: &mut impl Write, colorize: bool) -> io::Result<()> {
        if colorize {
            writeln!(out, "{}", FAILURE_HEADER.red().bold())?;
        } else {
            writeln!(out, "{FAILURE_HEADER}")?;
        }
        for error in &self.errors {
            writeln!(out, "{error}")?;
        }
        Ok(())
    }

    pub fn write_success(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "✅ {}", SUCCESS_MESSAGE.green())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        let report = JsonReport {
            valid: self.is_empty(),
            folders: self.folders,
            files: self.files,
            errors: self
                .errors
                .iter()
                .map(|error| JsonError {
                    error,
                    message: error.to_string(),
                })
                .collect(),
        };
        serde_json::to_string_pretty(&report)
    }
}
