use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt};

const FALLBACK_LEVEL: &str = "warn";

/// Выбирает уровень логов: флаг `--log-level`, затем `LOG_LEVEL`, затем `RUST_LOG`.
pub(crate) fn resolve_log_level(
    flag: Option<String>,
    log_level_env: Option<String>,
    rust_log_env: Option<String>,
) -> String {
    [flag, log_level_env, rust_log_env]
        .into_iter()
        .flatten()
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
        .unwrap_or_else(|| FALLBACK_LEVEL.to_string())
}

// stdout занят JSON-выводом команд, поэтому логи пишутся в stderr.
pub(crate) fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(FALLBACK_LEVEL));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|e| anyhow!("failed to init logging: {e}"))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::resolve_log_level;

    #[test]
    fn flag_wins_over_environment() {
        let level = resolve_log_level(
            Some("debug".to_string()),
            Some("info".to_string()),
            Some("trace".to_string()),
        );
        assert_eq!(level, "debug");
    }

    #[test]
    fn log_level_env_wins_over_rust_log() {
        let level = resolve_log_level(None, Some("info".to_string()), Some("trace".to_string()));
        assert_eq!(level, "info");
    }

    #[test]
    fn blank_values_fall_through_to_default() {
        let level = resolve_log_level(Some("  ".to_string()), None, None);
        assert_eq!(level, "warn");
    }
}
