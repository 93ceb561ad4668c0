pub mod model;
pub mod schema;
pub mod verdict;

pub use model::{Homework, HomeworkStatus, UnknownStatus};
pub use schema::{check_response, ResponseError};
pub use verdict::{extract_homework, parse_status, StatusError};
