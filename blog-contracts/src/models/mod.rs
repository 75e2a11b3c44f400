mod auth;
mod comment;
mod pagination;
mod post;
mod response;
mod user;

pub use auth::{LoginRequest, RegistrationRequest};
pub use comment::Comment;
pub use pagination::{Meta, Pagination, PaginationPage, default_pagination};
pub use post::{Like, Post, PostList, PostSummary};
pub use response::{PostListLinks, PostListResponse};
pub use user::User;
