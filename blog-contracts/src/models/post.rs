use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::comment::Comment;
use super::user::User;
use crate::contract::{
    Contract, check_each, validate_positive_id, validate_slug, validate_timestamp,
};
use crate::error::{ContractError, ContractResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
/// Краткое описание поста, встроенное в комментарий.
pub struct PostSummary {
    /// Идентификатор поста.
    pub id: i64,
    /// Уникальный человекочитаемый идентификатор.
    pub slug: String,
    /// Заголовок поста.
    pub title: String,
    /// Содержимое поста.
    pub content: String,
    /// Количество комментариев.
    pub comments_count: u64,
    /// Дата и время создания поста.
    pub created_at: String,
    /// Человекочитаемая дата создания.
    pub created_at_readable: String,
    /// Дата и время последнего обновления поста.
    pub updated_at: String,
    /// Человекочитаемая дата обновления.
    pub updated_at_readable: String,
    /// URL или путь к изображению.
    pub image: String,
    /// URL или путь к миниатюре.
    pub image_thumb: String,
    /// Автор поста.
    pub user: User,
}

impl Contract for PostSummary {
    fn check(&self) -> ContractResult<()> {
        check_post_header(
            self.id,
            &self.slug,
            &self.created_at,
            &self.updated_at,
            &self.user,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
/// Отметка "нравится".
pub struct Like {
    /// Идентификатор отметки.
    pub id: i64,
    /// Имя пользователя, поставившего отметку.
    pub name: String,
}

impl Contract for Like {
    fn check(&self) -> ContractResult<()> {
        validate_positive_id("id", self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
/// Пост в списке постов или на отдельной странице.
///
/// `likes` может быть усечённым превью, поэтому `likes_count` не меньше
/// числа элементов в `likes`.
pub struct Post {
    /// Идентификатор поста.
    pub id: i64,
    /// Уникальный человекочитаемый идентификатор.
    pub slug: String,
    /// Заголовок поста.
    pub title: String,
    /// Содержимое поста.
    pub content: String,
    /// Количество комментариев.
    pub comments_count: u64,
    /// Дата и время создания поста.
    pub created_at: String,
    /// Человекочитаемая дата создания.
    pub created_at_readable: String,
    /// Дата и время последнего обновления поста.
    pub updated_at: String,
    /// Человекочитаемая дата обновления.
    pub updated_at_readable: String,
    /// URL или путь к изображению.
    pub image: String,
    /// URL или путь к миниатюре.
    pub image_thumb: String,
    /// Автор поста.
    pub user: User,
    /// Комментарии в порядке выдачи сервером.
    pub comments: Vec<Comment>,
    /// Последний комментарий.
    ///
    /// `None` — поле отсутствует, `Some(None)` — явный `null`,
    /// `Some(Some(_))` — комментарий.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    #[schema(value_type = Option<Comment>)]
    pub last_comment: Option<Option<Comment>>,
    /// Общее количество отметок.
    pub likes_count: u64,
    /// Поставил ли отметку текущий пользователь.
    pub liked_by_user: bool,
    /// Отметки (возможно, превью).
    pub likes: Vec<Like>,
}

/// Имя формы в исходном API.
pub type PostList = Post;

impl Post {
    /// Краткое описание поста в том виде, в каком оно встраивается в комментарий.
    pub fn summary(&self) -> PostSummary {
        PostSummary {
            id: self.id,
            slug: self.slug.clone(),
            title: self.title.clone(),
            content: self.content.clone(),
            comments_count: self.comments_count,
            created_at: self.created_at.clone(),
            created_at_readable: self.created_at_readable.clone(),
            updated_at: self.updated_at.clone(),
            updated_at_readable: self.updated_at_readable.clone(),
            image: self.image.clone(),
            image_thumb: self.image_thumb.clone(),
            user: self.user.clone(),
        }
    }

    /// Последний комментарий, если он есть (отсутствие поля и `null` не различаются).
    pub fn last_comment(&self) -> Option<&Comment> {
        self.last_comment.as_ref().and_then(Option::as_ref)
    }
}

impl Contract for Post {
    fn check(&self) -> ContractResult<()> {
        check_post_header(
            self.id,
            &self.slug,
            &self.created_at,
            &self.updated_at,
            &self.user,
        )?;

        if self.likes.len() as u64 > self.likes_count {
            return Err(ContractError::validation(
                "likes_count",
                "must be >= number of likes",
            ));
        }
        check_each("likes", &self.likes)?;
        check_each("comments", &self.comments)?;

        if let Some(comment) = self.last_comment() {
            comment.check().map_err(|err| err.within("last_comment"))?;
        }
        Ok(())
    }
}

fn check_post_header(
    id: i64,
    slug: &str,
    created_at: &str,
    updated_at: &str,
    user: &User,
) -> ContractResult<()> {
    validate_positive_id("id", id)?;
    validate_slug(slug)?;
    validate_timestamp("created_at", created_at)?;
    validate_timestamp("updated_at", updated_at)?;
    user.check().map_err(|err| err.within("user"))
}
