use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::contract::Contract;
use crate::error::{ContractError, ContractResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
/// Ссылка на страницу в наборе ссылок пагинации.
pub struct PaginationPage {
    /// URL страницы.
    pub url: String,
    /// Подпись: номер страницы или "Previous"/"Next".
    pub label: String,
    /// Текущая ли это страница.
    pub active: bool,
}

impl PaginationPage {
    /// Номер страницы, если подпись является числом.
    pub fn page_number(&self) -> Option<u32> {
        self.label.trim().parse().ok()
    }
}

impl Contract for PaginationPage {
    fn check(&self) -> ContractResult<()> {
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
/// Клиентское состояние пагинации.
///
/// На проводе использует camelCase (`currentPage`, `lastPage`) и не
/// взаимозаменяемо с [`Meta`] без явного преобразования.
pub struct Pagination {
    /// URL предыдущей страницы.
    pub prev: Option<String>,
    /// URL следующей страницы.
    pub next: Option<String>,
    /// Ссылки на страницы.
    pub pages: Vec<PaginationPage>,
    /// Текущая страница, начиная с 1.
    pub current_page: u32,
    /// Последняя страница.
    pub last_page: u32,
    /// Общее количество элементов.
    pub total: u64,
}

/// Нулевое значение пагинации: до первой загрузки или после ошибки.
pub const fn default_pagination() -> Pagination {
    Pagination {
        prev: None,
        next: None,
        pages: Vec::new(),
        current_page: 1,
        last_page: 1,
        total: 0,
    }
}

impl Default for Pagination {
    fn default() -> Self {
        default_pagination()
    }
}

impl Pagination {
    /// Активная страница в наборе ссылок.
    pub fn active_page(&self) -> Option<&PaginationPage> {
        self.pages.iter().find(|page| page.active)
    }

    /// Есть ли предыдущая страница.
    pub fn has_prev(&self) -> bool {
        self.prev.is_some()
    }

    /// Есть ли следующая страница.
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

impl Contract for Pagination {
    fn check(&self) -> ContractResult<()> {
        check_page_bounds("currentPage", "lastPage", self.current_page, self.last_page)?;
        check_active_page("pages", &self.pages, self.current_page)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
/// Серверные метаданные пагинации (snake_case).
pub struct Meta {
    /// Текущая страница, начиная с 1.
    pub current_page: u32,
    /// Последняя страница.
    pub last_page: u32,
    /// Размер страницы.
    pub per_page: u32,
    /// Общее количество элементов.
    pub total: u64,
    /// Ссылки на страницы, включая "Previous"/"Next".
    pub links: Vec<PaginationPage>,
}

impl Contract for Meta {
    fn check(&self) -> ContractResult<()> {
        check_page_bounds("current_page", "last_page", self.current_page, self.last_page)?;
        if self.per_page == 0 {
            return Err(ContractError::validation("per_page", "must be >= 1"));
        }
        check_active_page("links", &self.links, self.current_page)
    }
}

fn check_page_bounds(
    current_field: &'static str,
    last_field: &'static str,
    current_page: u32,
    last_page: u32,
) -> ContractResult<()> {
    if current_page == 0 {
        return Err(ContractError::validation(current_field, "must be >= 1"));
    }
    if last_page < current_page {
        return Err(ContractError::validation(
            last_field,
            "must be >= current page",
        ));
    }
    Ok(())
}

// Пустой набор ссылок допустим: так выглядит нулевое значение.
fn check_active_page(
    field: &'static str,
    pages: &[PaginationPage],
    current_page: u32,
) -> ContractResult<()> {
    if pages.is_empty() {
        return Ok(());
    }

    let mut active = pages.iter().filter(|page| page.active);
    match (active.next(), active.next()) {
        (Some(page), None) if page.page_number() == Some(current_page) => Ok(()),
        (Some(_), None) => Err(ContractError::validation(
            field,
            "active page label must match current page",
        )),
        _ => Err(ContractError::validation(
            field,
            "exactly one page must be active",
        )),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{Meta, Pagination, PaginationPage, default_pagination};
    use crate::contract::Contract;

    fn page(number: u32, current: u32) -> PaginationPage {
        PaginationPage {
            url: format!("https://blog.test/api/posts?page={number}"),
            label: number.to_string(),
            active: number == current,
        }
    }

    fn pagination(current: u32, last: u32) -> Pagination {
        Pagination {
            prev: Some("https://blog.test/api/posts?page=2".to_string()),
            next: Some("https://blog.test/api/posts?page=4".to_string()),
            pages: (1..=last).map(|n| page(n, current)).collect(),
            current_page: current,
            last_page: last,
            total: 50,
        }
    }

    #[test]
    fn default_pagination_is_zero_value() {
        let value = default_pagination();
        assert_eq!(value.current_page, 1);
        assert_eq!(value.last_page, 1);
        assert_eq!(value.total, 0);
        assert!(value.pages.is_empty());
        assert!(value.prev.is_none());
        assert!(value.next.is_none());
        assert_eq!(Pagination::default(), value);
        assert!(value.check().is_ok());
    }

    #[test]
    fn default_pagination_uses_camel_case_on_the_wire() {
        let encoded = serde_json::to_value(default_pagination()).expect("must encode");
        assert_eq!(
            encoded,
            json!({
                "prev": null,
                "next": null,
                "pages": [],
                "currentPage": 1,
                "lastPage": 1,
                "total": 0
            })
        );
    }

    #[test]
    fn exactly_one_active_page_matches_current() {
        let value = pagination(3, 5);
        assert!(value.check().is_ok());

        let active: Vec<_> = value.pages.iter().filter(|p| p.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(value.active_page().map(|p| p.label.as_str()), Some("3"));
    }

    #[test]
    fn two_active_pages_are_rejected() {
        let mut value = pagination(3, 5);
        value.pages[0].active = true;
        let err = value.check().expect_err("must fail");
        assert_eq!(err.field(), Some("pages"));
    }

    #[test]
    fn active_label_must_match_current_page() {
        let mut value = pagination(3, 5);
        value.current_page = 2;
        let err = value.check().expect_err("must fail");
        assert_eq!(err.field(), Some("pages"));
    }

    #[test]
    fn last_page_below_current_is_rejected() {
        let mut value = default_pagination();
        value.current_page = 4;
        value.last_page = 2;
        let err = value.check().expect_err("must fail");
        assert_eq!(err.field(), Some("lastPage"));
    }

    #[test]
    fn pagination_and_meta_are_not_interchangeable() {
        let meta = json!({
            "current_page": 1,
            "last_page": 1,
            "per_page": 10,
            "total": 0,
            "links": []
        });
        assert!(serde_json::from_value::<Pagination>(meta.clone()).is_err());
        assert!(serde_json::from_value::<Meta>(meta).is_ok());
    }

    #[test]
    fn meta_skips_navigation_labels_when_checking_active_page() {
        let meta = Meta {
            current_page: 2,
            last_page: 3,
            per_page: 15,
            total: 40,
            links: vec![
                PaginationPage {
                    url: "https://blog.test/api/posts?page=1".to_string(),
                    label: "&laquo; Previous".to_string(),
                    active: false,
                },
                page(1, 2),
                page(2, 2),
                page(3, 2),
                PaginationPage {
                    url: "https://blog.test/api/posts?page=3".to_string(),
                    label: "Next &raquo;".to_string(),
                    active: false,
                },
            ],
        };
        assert!(meta.check().is_ok());
    }

    #[test]
    fn null_page_url_is_a_shape_mismatch() {
        let raw = json!({"url": null, "label": "&laquo; Previous", "active": false});
        assert!(serde_json::from_value::<PaginationPage>(raw).is_err());
    }

    #[test]
    fn meta_rejects_zero_per_page() {
        let meta = Meta {
            current_page: 1,
            last_page: 1,
            per_page: 0,
            total: 0,
            links: Vec::new(),
        };
        let err = meta.check().expect_err("must fail");
        assert_eq!(err.field(), Some("per_page"));
    }
}
