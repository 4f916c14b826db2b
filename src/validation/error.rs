use miette::{Diagnostic, NamedSource, SourceSpan};
use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A profile file that parsed but lacks required keys
///
/// This is the soft failure: it is collected into the report and the
/// traversal moves on.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error(
    "The file {} in folder {} is missing keys: {}",
    .file.display(),
    .folder,
    .missing_keys.join(", ")
)]
pub struct MissingKeysError {
    pub file: PathBuf,
    pub folder: String,
    pub missing_keys: Vec<String>,
}

/// A failure that aborts the whole run
#[derive(Error, Debug, Diagnostic)]
pub enum CheckError {
    #[error("Failed to read directory {}", .path.display())]
    #[diagnostic(code(student_data_check::read_dir))]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read file {}", .path.display())]
    #[diagnostic(code(student_data_check::read_file))]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot read keys of null in {}", .path.display())]
    #[diagnostic(
        code(student_data_check::null_record),
        help("a profile file must contain a JSON object")
    )]
    NullRecord { path: PathBuf },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),
}

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid JSON in {}: {}", .path.display(), .reason)]
#[diagnostic(code(student_data_check::invalid_json))]
pub struct ParseError {
    pub path: PathBuf,
    pub reason: String,

    #[source_code]
    pub src: NamedSource<String>,

    #[label("here")]
    pub span: SourceSpan,
}

impl ParseError {
    pub fn new(path: &Path, content: String, error: &serde_json::Error) -> Self {
        let span = crate::error_utils::json_error_span(&content, error.line(), error.column());
        Self {
            path: path.to_path_buf(),
            reason: error.to_string(),
            src: crate::error_utils::create_named_source(path, content),
            span,
        }
    }
}
