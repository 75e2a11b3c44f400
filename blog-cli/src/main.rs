mod logging;

use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use blog_contracts::{
    Comment, Like, LoginRequest, Meta, Pagination, PaginationPage, Post, PostListResponse,
    RegistrationRequest, User, decode, default_pagination, openapi,
};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(
    name = "blog-cli",
    version,
    about = "Проверка JSON payload'ов блога по контрактам"
)]
struct Cli {
    /// Уровень логов (по умолчанию LOG_LEVEL, затем RUST_LOG, затем warn).
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Проверка payload'а по форме.
    Check {
        /// Форма, которой должен соответствовать payload.
        #[arg(long, value_enum)]
        kind: ShapeKind,
        /// Файл с JSON (по умолчанию stdin).
        #[arg(long)]
        file: Option<String>,
    },
    /// Преобразование ответа списка постов в клиентскую пагинацию.
    Pagination {
        /// Файл с JSON ответа списка (по умолчанию stdin).
        #[arg(long)]
        file: Option<String>,
    },
    /// Нулевое значение пагинации.
    DefaultPagination,
    /// OpenAPI-описание всех форм.
    Schema,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ShapeKind {
    Register,
    Login,
    User,
    Comment,
    Like,
    Post,
    PaginationPage,
    Pagination,
    Meta,
    PostListResponse,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Ошибка: {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let level = logging::resolve_log_level(
        cli.log_level,
        std::env::var("LOG_LEVEL").ok(),
        std::env::var("RUST_LOG").ok(),
    );
    logging::init_logging(&level)?;

    match cli.command {
        Command::Check { kind, file } => {
            tracing::info!(?kind, "checking payload");
            let raw = read_input(file.as_deref())?;
            let summary = check_payload(kind, &raw)
                .with_context(|| format!("payload не соответствует форме {kind:?}"))?;
            println!("{summary}");
        }
        Command::Pagination { file } => {
            let raw = read_input(file.as_deref())?;
            let pagination = map_pagination(&raw)?;
            tracing::info!(
                current_page = pagination.current_page,
                pages = pagination.pages.len(),
                "pagination mapped"
            );
            println!("{}", serde_json::to_string_pretty(&pagination)?);
        }
        Command::DefaultPagination => {
            println!("{}", serde_json::to_string_pretty(&default_pagination())?);
        }
        Command::Schema => {
            println!("{}", openapi::openapi_json()?);
        }
    }

    Ok(())
}

fn read_input(file: Option<&str>) -> Result<String> {
    let raw = match file {
        Some(path) => {
            tracing::info!(path, "reading payload from file");
            fs::read_to_string(Path::new(path))
                .with_context(|| format!("не удалось прочитать {path}"))?
        }
        None => {
            tracing::info!("reading payload from stdin");
            let mut raw = String::new();
            io::stdin()
                .read_to_string(&mut raw)
                .context("не удалось прочитать stdin")?;
            raw
        }
    };
    tracing::debug!(bytes = raw.len(), "payload read");
    Ok(raw)
}

fn check_payload(kind: ShapeKind, raw: &str) -> Result<String> {
    let summary = match kind {
        ShapeKind::Register => {
            let request: RegistrationRequest = decode(raw)?;
            format!("Регистрация: email={}", request.email)
        }
        ShapeKind::Login => {
            let request: LoginRequest = decode(raw)?;
            format!("Вход: email={}", request.email)
        }
        ShapeKind::User => {
            let user: User = decode(raw)?;
            format!("Пользователь: id={}, email={}", user.id, user.email)
        }
        ShapeKind::Comment => {
            let comment: Comment = decode(raw)?;
            let state = if comment.is_draft() {
                "черновик"
            } else {
                "сохранён"
            };
            format!(
                "Комментарий: id={} ({state}), ответов: {}",
                comment.id,
                comment.children.as_ref().map_or(0, Vec::len)
            )
        }
        ShapeKind::Like => {
            let like: Like = decode(raw)?;
            format!("Отметка: id={}, name={}", like.id, like.name)
        }
        ShapeKind::Post => {
            let post: Post = decode(raw)?;
            format!(
                "Пост: [{}] {} (комментариев={}, отметок={})",
                post.id, post.slug, post.comments_count, post.likes_count
            )
        }
        ShapeKind::PaginationPage => {
            let page: PaginationPage = decode(raw)?;
            format!("Страница: {} (active={})", page.label, page.active)
        }
        ShapeKind::Pagination => {
            let pagination: Pagination = decode(raw)?;
            format!(
                "Пагинация: страница {}/{}, всего {}",
                pagination.current_page, pagination.last_page, pagination.total
            )
        }
        ShapeKind::Meta => {
            let meta: Meta = decode(raw)?;
            format!(
                "Meta: страница {}/{}, per_page={}, всего {}",
                meta.current_page, meta.last_page, meta.per_page, meta.total
            )
        }
        ShapeKind::PostListResponse => {
            let response: PostListResponse = decode(raw)?;
            format!(
                "Постов: {} (страница {}/{}, per_page={}, всего {})",
                response.data.len(),
                response.meta.current_page,
                response.meta.last_page,
                response.meta.per_page,
                response.meta.total
            )
        }
    };
    Ok(summary)
}

fn map_pagination(raw: &str) -> Result<Pagination> {
    let response: PostListResponse =
        decode(raw).context("payload не соответствует форме PostListResponse")?;
    Ok(Pagination::from(&response))
}
