use std::path::Path;
use tracing::{debug, info};

use super::error::{CheckError, MissingKeysError, ParseError};
use super::report::ValidationReport;
use crate::loader::FileScanner;
use crate::schema::{REQUIRED_KEYS, RequiredKeySet};

pub struct Validator {
    required_keys: RequiredKeySet,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator {
    pub fn new() -> Self {
        Self {
            required_keys: REQUIRED_KEYS,
        }
    }

    /// Check one profile file for the required top-level keys
    ///
    /// Returns `Ok(None)` when every key is present. Read and parse failures
    /// are hard errors and are never reported as missing keys, and so is a
    /// top-level `null`, which has no key set to inspect. Invalid UTF-8 is
    /// replaced with U+FFFD before parsing.
    pub fn validate_file(
        &self,
        file_path: &Path,
        folder_name: &str,
    ) -> Result<Option<MissingKeysError>, CheckError> {
        let bytes = std::fs::read(file_path).map_err(|source| CheckError::ReadFile {
            path: file_path.to_path_buf(),
            source,
        })?;
        let content = String::from_utf8_lossy(&bytes).into_owned();

        let data: serde_json::Value = match serde_json::from_str(&content) {
            Ok(data) => data,
            Err(e) => return Err(ParseError::new(file_path, content, &e).into()),
        };

        if data.is_null() {
            return Err(CheckError::NullRecord {
                path: file_path.to_path_buf(),
            });
        }

        let missing_keys = self.required_keys.missing_from(&data);
        if missing_keys.is_empty() {
            return Ok(None);
        }

        Ok(Some(MissingKeysError {
            file: file_path.to_path_buf(),
            folder: folder_name.to_string(),
            missing_keys,
        }))
    }

    /// Validate every `.json` file one level below each student folder of `root`
    ///
    /// The first hard error stops the traversal and discards whatever was
    /// collected so far.
    pub fn run(&self, root: &Path) -> Result<ValidationReport, CheckError> {
        let mut report = ValidationReport::new();

        debug!("Scanning student folders in {}", root.display());
        for folder in FileScanner::scan_student_folders(root)? {
            report.record_folder();

            let json_files = FileScanner::scan_json_files(&folder.path)?;
            debug!("  {} ({} JSON files)", folder.name, json_files.len());

            for json_file in json_files {
                debug!("    Validating {}...", json_file.display());
                let error = self.validate_file(&json_file, &folder.name)?;
                report.record_file(error);
            }
        }

        info!(
            "✓ Checked {} JSON files in {} folders ({} with missing keys)",
            report.files(),
            report.folders(),
            report.errors().len()
        );

        Ok(report)
    }
}
