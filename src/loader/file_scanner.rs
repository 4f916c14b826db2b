//! File scanning utilities for discovering student profile files

use std::fs;
use std::path::{Path, PathBuf};

use crate::validation::CheckError;

/// A direct subdirectory of the data root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentFolder {
    pub path: PathBuf,
    pub name: String,
}

pub struct FileScanner;

impl FileScanner {
    /// Check if a file name carries the `.json` suffix
    ///
    /// This is a literal suffix match on the name, so `.json` itself counts.
    pub fn is_json_file(path: &Path) -> bool {
        path.file_name()
            .map(|name| name.to_string_lossy().ends_with(".json"))
            .unwrap_or(false)
    }

    /// List the student folders directly under `root` (non-recursive)
    ///
    /// Entries that are not directories are skipped. Symlinks are not followed.
    pub fn scan_student_folders(root: &Path) -> Result<Vec<StudentFolder>, CheckError> {
        let mut folders = Vec::new();

        for entry in read_sorted(root)? {
            let file_type = entry.file_type().map_err(|source| CheckError::ReadDir {
                path: root.to_path_buf(),
                source,
            })?;

            if file_type.is_dir() {
                folders.push(StudentFolder {
                    path: entry.path(),
                    name: entry.file_name().to_string_lossy().into_owned(),
                });
            }
        }

        Ok(folders)
    }

    /// List the `.json` entries of a student folder (non-recursive)
    pub fn scan_json_files(folder: &Path) -> Result<Vec<PathBuf>, CheckError> {
        Ok(read_sorted(folder)?
            .into_iter()
            .map(|entry| entry.path())
            .filter(|path| Self::is_json_file(path))
            .collect())
    }
}

fn read_sorted(dir: &Path) -> Result<Vec<fs::DirEntry>, CheckError> {
    let read_dir_error = |source| CheckError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = fs::read_dir(dir)
        .map_err(read_dir_error)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(read_dir_error)?;
    entries.sort_by_key(|entry| entry.file_name());

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_is_json_file() {
        assert!(FileScanner::is_json_file(Path::new("profile.json")));
        assert!(FileScanner::is_json_file(Path::new("a/b/.json")));
        assert!(!FileScanner::is_json_file(Path::new("profile.JSON")));
        assert!(!FileScanner::is_json_file(Path::new("profile.json.bak")));
        assert!(!FileScanner::is_json_file(Path::new("notes.txt")));
    }

    #[test]
    fn test_scan_student_folders_skips_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("zoe")).unwrap();
        fs::create_dir(temp_dir.path().join("ana")).unwrap();
        fs::write(temp_dir.path().join("README.md"), "hi").unwrap();
        fs::write(temp_dir.path().join("loose.json"), "{}").unwrap();

        let folders = FileScanner::scan_student_folders(temp_dir.path()).unwrap();
        let names: Vec<_> = folders.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["ana", "zoe"]);
        assert_eq!(folders[0].path, temp_dir.path().join("ana"));
    }

    #[test]
    fn test_scan_json_files_filters_by_suffix() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("b.json"), "{}").unwrap();
        fs::write(temp_dir.path().join("a.json"), "{}").unwrap();
        fs::write(temp_dir.path().join("notes.txt"), "").unwrap();
        fs::create_dir(temp_dir.path().join("nested")).unwrap();
        fs::write(temp_dir.path().join("nested/c.json"), "{}").unwrap();

        let files = FileScanner::scan_json_files(temp_dir.path()).unwrap();
        assert_eq!(
            files,
            vec![temp_dir.path().join("a.json"), temp_dir.path().join("b.json")]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_student_folders_skips_symlinked_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let outside = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("ana")).unwrap();
        fs::write(outside.path().join("profile.json"), "{}").unwrap();
        std::os::unix::fs::symlink(outside.path(), temp_dir.path().join("linked")).unwrap();

        let folders = FileScanner::scan_student_folders(temp_dir.path()).unwrap();
        let names: Vec<_> = folders.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["ana"]);
    }

    #[test]
    fn test_scan_json_files_keeps_json_named_directories() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("old.json")).unwrap();

        let files = FileScanner::scan_json_files(temp_dir.path()).unwrap();
        assert_eq!(files, vec![temp_dir.path().join("old.json")]);
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("does-not-exist");

        let result = FileScanner::scan_student_folders(&missing);
        assert!(matches!(result, Err(CheckError::ReadDir { path, .. }) if path == missing));
    }
}
