pub mod app_error;
pub mod error_kind;

pub use app_error::{AppError, AppResult};
pub use error_kind::ErrorKind;
