use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::post::PostSummary;
use super::user::User;
use crate::contract::{Contract, check_each, validate_positive_id, validate_timestamp};
use crate::error::{ContractError, ContractResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
/// Комментарий к посту.
///
/// Сохранённый комментарий всегда содержит `created_at` и `user`. Черновик
/// (ещё не отправленный на сервер) может не содержать ни того, ни другого.
/// Необязательные поля со значением `None` не сериализуются.
pub struct Comment {
    /// Идентификатор комментария, у черновика равен 0.
    pub id: i64,
    /// Текст комментария.
    pub content: String,
    /// Дата и время создания, отсутствует у черновика.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Человекочитаемая дата создания, например "2 hours ago".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at_readable: Option<String>,
    /// Автор. Снимок на момент запроса, комментарий им не владеет.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    /// Ответы на комментарий в порядке выдачи сервером.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(no_recursion)]
    pub children: Option<Vec<Comment>>,
    /// Идентификатор родительского комментария для ответов.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
    /// Краткое описание поста, к которому относится комментарий.
    pub post: PostSummary,
}

impl Comment {
    /// Создаёт черновик комментария без полей, которые назначает сервер.
    pub fn draft(content: impl Into<String>, post: PostSummary, parent_id: Option<i64>) -> Self {
        Self {
            id: 0,
            content: content.into(),
            created_at: None,
            created_at_readable: None,
            user: None,
            children: None,
            parent_id,
            post,
        }
    }

    /// Черновик: комментарий ещё не сохранён на сервере.
    pub fn is_draft(&self) -> bool {
        self.created_at.is_none()
    }

    /// Ответ на другой комментарий.
    pub fn is_reply(&self) -> bool {
        self.parent_id.is_some()
    }
}

impl Contract for Comment {
    fn check(&self) -> ContractResult<()> {
        if let Some(created_at) = &self.created_at {
            validate_timestamp("created_at", created_at)?;
            validate_positive_id("id", self.id)?;
            if self.user.is_none() {
                return Err(ContractError::validation(
                    "user",
                    "must be present on a persisted comment",
                ));
            }
        }

        if let Some(user) = &self.user {
            user.check().map_err(|err| err.within("user"))?;
        }

        if let Some(children) = &self.children {
            for (index, child) in children.iter().enumerate() {
                if child.parent_id.is_some_and(|parent_id| parent_id != self.id) {
                    return Err(ContractError::validation(
                        format!("children[{index}].parent_id"),
                        "must reference the enclosing comment",
                    ));
                }
            }
            check_each("children", children)?;
        }

        self.post.check().map_err(|err| err.within("post"))
    }
}
