pub mod error;
pub mod string_ext;

pub use error::{ApiError, ApiResult, ErrorResponse};
pub use string_ext::sanitize_filename;
