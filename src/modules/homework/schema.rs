use serde_json::Value;

pub const HOMEWORKS_KEY: &str = "homeworks";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResponseError {
    #[error("Ответ на запрос не является словарем.")]
    NotAnObject,
    #[error("В ответе API нет ключа homeworks.")]
    MissingHomeworks,
    #[error("Homeworks не является списком.")]
    HomeworksNotAList,
    #[error("Список домашних работ пуст.")]
    EmptyHomeworks,
}

/// Validate the API answer and return the most recent homework.
pub fn check_response(response: &Value) -> Result<&Value, ResponseError> {
    let object = response.as_object().ok_or(ResponseError::NotAnObject)?;

    let homeworks = object
        .get(HOMEWORKS_KEY)
        .ok_or(ResponseError::MissingHomeworks)?
        .as_array()
        .ok_or(ResponseError::HomeworksNotAList)?;

    homeworks.first().ok_or(ResponseError::EmptyHomeworks)
}
