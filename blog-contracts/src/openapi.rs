//! OpenAPI-описание форм контракта.

use utoipa::OpenApi;

use crate::error::ContractResult;
use crate::models::{
    Comment, Like, LoginRequest, Meta, Pagination, PaginationPage, Post, PostListLinks,
    PostListResponse, PostSummary, RegistrationRequest, User,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "blog-contracts", description = "Payload shapes of the blog API"),
    components(
        schemas(
            RegistrationRequest,
            LoginRequest,
            User,
            Comment,
            PostSummary,
            Like,
            Post,
            PaginationPage,
            Pagination,
            Meta,
            PostListLinks,
            PostListResponse
        )
    )
)]
/// OpenAPI-описание всех форм контракта.
pub struct ContractsDoc;

/// Возвращает OpenAPI-документ с формами контракта в виде JSON.
pub fn openapi_json() -> ContractResult<String> {
    Ok(ContractsDoc::openapi().to_pretty_json()?)
}
