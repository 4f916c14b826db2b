pub mod error_utils;
pub mod loader;
pub mod schema;
pub mod validation;
