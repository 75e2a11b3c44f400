use thiserror::Error;

#[derive(Debug, Error)]
/// Ошибки проверки контрактов `blog-contracts`.
pub enum ContractError {
    /// Payload не совпал с формой: нет обязательного поля, неверный тип
    /// значения или некорректный JSON.
    #[error("shape mismatch: {0}")]
    Decode(#[from] serde_json::Error),

    /// Нарушен инвариант формы, который не выражается типами.
    #[error("validation failed for '{field}': {message}")]
    Validation {
        /// Путь до поля, например `data[2].comments[0].user`.
        field: String,
        /// Описание нарушенного правила.
        message: &'static str,
    },

    /// Запрос (регистрация/вход) не прошёл правила `validator`.
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] validator::ValidationErrors),
}

/// Результат проверок `blog-contracts`.
pub type ContractResult<T> = Result<T, ContractError>;

impl ContractError {
    pub(crate) fn validation(field: impl Into<String>, message: &'static str) -> Self {
        Self::Validation {
            field: field.into(),
            message,
        }
    }

    /// Добавляет префикс к пути поля, если ошибка пришла из вложенной записи.
    pub(crate) fn within(self, prefix: &str) -> Self {
        match self {
            Self::Validation { field, message } => Self::Validation {
                field: format!("{prefix}.{field}"),
                message,
            },
            other => other,
        }
    }

    /// Путь до поля для ошибок валидации.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ContractError;

    #[test]
    fn within_prefixes_validation_path() {
        let err = ContractError::validation("user", "must be present").within("comments[0]");
        assert_eq!(err.field(), Some("comments[0].user"));
        assert_eq!(
            err.to_string(),
            "validation failed for 'comments[0].user': must be present"
        );
    }

    #[test]
    fn within_keeps_decode_errors_untouched() {
        let source = serde_json::from_str::<i64>("\"x\"").expect_err("must fail");
        let err = ContractError::from(source).within("data[0]");
        assert!(matches!(err, ContractError::Decode(_)));
        assert!(err.field().is_none());
    }
}
