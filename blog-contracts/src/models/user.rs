use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::contract::{Contract, validate_positive_id, validate_timestamp};
use crate::error::ContractResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
/// Публичная модель пользователя.
///
/// Для клиента запись неизменяема, жизненным циклом владеет backend.
/// Метки времени хранятся в том виде, в каком пришли, см. [`crate::parse_timestamp`].
pub struct User {
    /// Идентификатор пользователя, назначается сервером.
    pub id: i64,
    /// Отображаемое имя.
    pub name: String,
    /// Email.
    pub email: String,
    /// Момент подтверждения email. Отсутствующее поле и `null` означают одно и то же.
    pub email_verified_at: Option<String>,
    /// Дата и время создания пользователя.
    pub created_at: String,
    /// Дата и время последнего обновления пользователя.
    pub updated_at: String,
}

impl User {
    /// Подтверждён ли email пользователя.
    pub fn is_verified(&self) -> bool {
        self.email_verified_at.is_some()
    }
}

impl Contract for User {
    fn check(&self) -> ContractResult<()> {
        validate_positive_id("id", self.id)?;
        validate_timestamp("created_at", &self.created_at)?;
        validate_timestamp("updated_at", &self.updated_at)?;
        if let Some(verified_at) = &self.email_verified_at {
            validate_timestamp("email_verified_at", verified_at)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::User;
    use crate::contract::{Contract, decode_value};

    fn user() -> User {
        User {
            id: 7,
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            email_verified_at: None,
            created_at: "2024-01-01T00:00:00Z".to_string(),
            updated_at: "2024-01-01T00:00:05Z".to_string(),
        }
    }

    #[test]
    fn valid_user_passes_check() {
        assert!(user().check().is_ok());
    }

    #[test]
    fn user_rejects_non_positive_id() {
        let mut user = user();
        user.id = 0;
        let err = user.check().expect_err("id must be > 0");
        assert_eq!(err.field(), Some("id"));
    }

    #[test]
    fn embedded_user_snapshot_is_not_second_guessed() {
        let mut user = user();
        user.email = "alice".to_string();
        user.created_at = "2024-02-01T00:00:00Z".to_string();
        assert!(user.check().is_ok());
    }

    #[test]
    fn malformed_timestamp_is_rejected() {
        let mut user = user();
        user.updated_at = "soon".to_string();
        let err = user.check().expect_err("timestamp must parse");
        assert_eq!(err.field(), Some("updated_at"));
    }

    #[test]
    fn email_verified_at_null_and_absent_are_equal() {
        let with_null = json!({
            "id": 1,
            "name": "Alice",
            "email": "alice@example.com",
            "email_verified_at": null,
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z"
        });
        let mut without = with_null.clone();
        without
            .as_object_mut()
            .expect("object")
            .remove("email_verified_at");

        let a: User = serde_json::from_value(with_null).expect("null must decode");
        let b: User = serde_json::from_value(without).expect("absent must decode");
        assert_eq!(a, b);
        assert!(!a.is_verified());

        let encoded = serde_json::to_value(&b).expect("must encode");
        assert!(encoded["email_verified_at"].is_null());
    }

    #[test]
    fn timestamps_round_trip_unchanged() {
        let raw = json!({
            "id": 1,
            "name": "Alice",
            "email": "alice@example.com",
            "email_verified_at": "2024-01-02 10:00:00",
            "created_at": "2024-01-01T03:00:00+03:00",
            "updated_at": "2024-01-01T00:00:00.000000Z"
        });

        let user: User = decode_value(raw.clone()).expect("must be accepted");
        assert!(user.is_verified());
        assert_eq!(serde_json::to_value(&user).expect("must encode"), raw);
    }
}
