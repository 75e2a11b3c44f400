use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde::de::DeserializeOwned;

use crate::error::{ContractError, ContractResult};

/// Инварианты формы, которые не выражаются типами Rust.
///
/// Типы гарантируют наличие полей и вид значений, `check` проверяет
/// связи между полями (например, `likes_count >= likes.len()`).
pub trait Contract {
    /// Проверяет инварианты записи и всех вложенных записей.
    fn check(&self) -> ContractResult<()>;
}

/// Разбирает JSON в форму `T` и сразу проверяет её инварианты.
pub fn decode<T>(raw: &str) -> ContractResult<T>
where
    T: DeserializeOwned + Contract,
{
    let value = serde_json::from_str::<T>(raw).inspect_err(|err| {
        tracing::warn!(shape = std::any::type_name::<T>(), error = %err, "payload rejected");
    })?;
    accept(value)
}

/// То же, что [`decode`], но для уже разобранного `serde_json::Value`.
pub fn decode_value<T>(value: serde_json::Value) -> ContractResult<T>
where
    T: DeserializeOwned + Contract,
{
    let value = serde_json::from_value::<T>(value).inspect_err(|err| {
        tracing::warn!(shape = std::any::type_name::<T>(), error = %err, "payload rejected");
    })?;
    accept(value)
}

fn accept<T: Contract>(value: T) -> ContractResult<T> {
    let shape = std::any::type_name::<T>();
    match value.check() {
        Ok(()) => {
            tracing::debug!(shape, "payload accepted");
            Ok(value)
        }
        Err(err) => {
            tracing::warn!(shape, error = %err, "payload rejected");
            Err(err)
        }
    }
}

/// Проверяет каждый элемент последовательности, добавляя `field[i]` к пути.
pub(crate) fn check_each<T: Contract>(field: &str, items: &[T]) -> ContractResult<()> {
    for (index, item) in items.iter().enumerate() {
        item.check()
            .map_err(|err| err.within(&format!("{field}[{index}]")))?;
    }
    Ok(())
}

pub(crate) fn validate_positive_id(field: &'static str, value: i64) -> ContractResult<()> {
    if value <= 0 {
        return Err(ContractError::validation(field, "must be > 0"));
    }
    Ok(())
}

/// Разбирает строковую метку времени из payload'а.
///
/// Принимает RFC 3339 с любым смещением, а также `YYYY-MM-DD HH:MM:SS[.f]`
/// без смещения, которое трактуется как UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    if let Ok(value) = DateTime::parse_from_rfc3339(raw) {
        return Some(value);
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc().fixed_offset())
}

pub(crate) fn validate_timestamp(field: &'static str, raw: &str) -> ContractResult<()> {
    if parse_timestamp(raw).is_none() {
        return Err(ContractError::validation(field, "must be a timestamp"));
    }
    Ok(())
}

pub(crate) fn validate_slug(slug: &str) -> ContractResult<()> {
    if slug.is_empty() || slug.chars().any(char::is_whitespace) {
        return Err(ContractError::validation(
            "slug",
            "must be non-empty and contain no whitespace",
        ));
    }
    Ok(())
}
