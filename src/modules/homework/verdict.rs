use serde_json::Value;

use super::model::{Homework, HomeworkStatus, UnknownStatus};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StatusError {
    #[error("Домашняя работа не является словарем.")]
    NotAnObject,
    #[error("В ответе API нет ключа {0}.")]
    MissingKey(&'static str),
    #[error("Поле {0} должно быть строкой.")]
    NotAString(&'static str),
    #[error(transparent)]
    UnknownStatus(#[from] UnknownStatus),
}

/// Extract name and status from a homework record and render the chat message.
pub fn parse_status(homework: &Value) -> Result<String, StatusError> {
    Ok(extract_homework(homework)?.status_message())
}

pub fn extract_homework(homework: &Value) -> Result<Homework, StatusError> {
    let record = homework.as_object().ok_or(StatusError::NotAnObject)?;

    let name = record
        .get("homework_name")
        .ok_or(StatusError::MissingKey("homework_name"))?;
    let status = record
        .get("status")
        .ok_or(StatusError::MissingKey("status"))?;

    let homework_name = name
        .as_str()
        .ok_or(StatusError::NotAString("homework_name"))?
        .to_string();
    let status: HomeworkStatus = status
        .as_str()
        .ok_or(StatusError::NotAString("status"))?
        .parse()?;

    Ok(Homework {
        homework_name,
        status,
    })
}
