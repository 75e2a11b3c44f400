//! Контракты данных между клиентом блога и его API.
//!
//! Содержит формы payload'ов (пользователи, посты, комментарии, отметки,
//! пагинация), их runtime-проверки и нулевое значение пагинации:
//! - формы — `serde`-структуры, наличие и тип полей проверяет компилятор и
//!   десериализация;
//! - связи между полями проверяет [`Contract::check`], [`decode`] делает
//!   разбор и проверку за один шаг;
//! - [`openapi::ContractsDoc`] описывает формы в OpenAPI.
#![warn(missing_docs)]

mod contract;
mod error;
mod models;
pub mod openapi;

pub use contract::{Contract, decode, decode_value, parse_timestamp};
pub use error::{ContractError, ContractResult};
pub use models::{
    Comment, Like, LoginRequest, Meta, Pagination, PaginationPage, Post, PostList, PostListLinks,
    PostListResponse, PostSummary, RegistrationRequest, User, default_pagination,
};
