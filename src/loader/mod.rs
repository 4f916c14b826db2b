//! Discovery of student folders and their profile files

mod file_scanner;

pub use file_scanner::{FileScanner, StudentFolder};
