use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::pagination::{Meta, Pagination};
use super::post::Post;
use crate::contract::{Contract, check_each};
use crate::error::{ContractError, ContractResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
/// Навигационные ссылки страницы списка.
pub struct PostListLinks {
    /// Первая страница.
    pub first: String,
    /// Последняя страница.
    pub last: String,
    /// Предыдущая страница, `null` на первой.
    pub prev: Option<String>,
    /// Следующая страница, `null` на последней.
    pub next: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
/// Ответ списка постов: одна страница с метаданными пагинации.
pub struct PostListResponse {
    /// Посты на текущей странице.
    pub data: Vec<Post>,
    /// Навигационные ссылки.
    pub links: PostListLinks,
    /// Серверные метаданные пагинации.
    pub meta: Meta,
}

impl Contract for PostListResponse {
    fn check(&self) -> ContractResult<()> {
        self.meta.check().map_err(|err| err.within("meta"))?;
        if self.data.len() as u64 > u64::from(self.meta.per_page) {
            return Err(ContractError::validation(
                "data",
                "must not hold more than meta.per_page posts",
            ));
        }
        check_each("data", &self.data)
    }
}

impl From<&PostListResponse> for Pagination {
    /// Переводит серверные `links`/`meta` в клиентскую пагинацию.
    ///
    /// В `pages` попадают только ссылки с номером страницы: "Previous" и
    /// "Next" уже представлены полями `prev`/`next`.
    fn from(response: &PostListResponse) -> Self {
        Self {
            prev: response.links.prev.clone(),
            next: response.links.next.clone(),
            pages: response
                .meta
                .links
                .iter()
                .filter(|page| page.page_number().is_some())
                .cloned()
                .collect(),
            current_page: response.meta.current_page,
            last_page: response.meta.last_page,
            total: response.meta.total,
        }
    }
}
