mod error;
mod report;
mod validator;


pub use error::{CheckError, MissingKeysError, ParseError};
pub use report::{FAILURE_HEADER, SUCCESS_MESSAGE, ValidationReport};
pub use validator::Validator;
