use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::contract::Contract;
use crate::error::ContractResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
/// Запрос регистрации аккаунта.
pub struct RegistrationRequest {
    /// Email, он же логин.
    #[validate(email)]
    pub email: String,
    /// Отображаемое имя.
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    /// Пароль.
    #[validate(length(min = 8, max = 128))]
    pub password: String,
    /// Повтор пароля, должен совпадать с `password`.
    #[validate(must_match(other = "password"))]
    pub password_confirmation: String,
}

impl RegistrationRequest {
    /// Нормализует поля (trim, email в нижнем регистре) и применяет правила
    /// регистрации, включая совпадение `password_confirmation` с `password`.
    ///
    /// Вызывается потребителем перед отправкой формы. Пароли не изменяются.
    pub fn normalize(self) -> ContractResult<Self> {
        let request = Self {
            email: normalize_email(&self.email),
            name: self.name.trim().to_string(),
            password: self.password,
            password_confirmation: self.password_confirmation,
        };
        request.validate()?;
        Ok(request)
    }
}

// Правила формы запроса применяет потребитель через `normalize`.
impl Contract for RegistrationRequest {
    fn check(&self) -> ContractResult<()> {
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
/// Запрос входа.
pub struct LoginRequest {
    /// Email пользователя.
    #[validate(email)]
    pub email: String,
    /// Пароль.
    #[validate(length(min = 1))]
    pub password: String,
}

impl LoginRequest {
    /// Нормализует email и применяет правила входа.
    pub fn normalize(self) -> ContractResult<Self> {
        let request = Self {
            email: normalize_email(&self.email),
            password: self.password,
        };
        request.validate()?;
        Ok(request)
    }
}

impl Contract for LoginRequest {
    fn check(&self) -> ContractResult<()> {
        Ok(())
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
