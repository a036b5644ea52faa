pub mod extractor;
pub mod parameter_error_handler;

pub use extractor::SafeCourseId;
pub use parameter_error_handler::query_error_handler;
