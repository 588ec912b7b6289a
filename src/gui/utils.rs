// GUI utility functions

use anyhow::{Context, Result};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::gui::config_manager::LogConfig;

/// Guard keeping the non-blocking log writer alive for the process
/// lifetime. Dropping it loses buffered log lines.
pub struct LogGuard {
    _file_guard: Option<tracing_appender::non_blocking::WorkerGuard>,
}

/// Initialize logging from the configured level, with optional
/// daily-rotated file output next to stderr.
pub fn init_logging(config: &LogConfig) -> Result<LogGuard> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact();

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer);

    let file_guard = if config.enable_file_logging {
        let log_dir = match &config.log_dir {
            Some(dir) => dir.clone(),
            None => default_log_dir()?,
        };
        std::fs::create_dir_all(&log_dir)
            .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

        let appender = tracing_appender::rolling::daily(&log_dir, "insight-chat.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);

        registry
            .with(tracing_subscriber::fmt::layer().with_writer(writer).with_ansi(false))
            .try_init()?;

        debug!("📁 File logging enabled: {}", log_dir.display());
        Some(guard)
    } else {
        registry.try_init()?;
        None
    };

    Ok(LogGuard {
        _file_guard: file_guard,
    })
}

fn default_log_dir() -> Result<std::path::PathBuf> {
    let project_dirs = directories::ProjectDirs::from("dev", "insight", "insight-chat")
        .context("Failed to get project directories")?;
    Ok(project_dirs.data_dir().join("logs"))
}

/// True when the trimmed input is worth submitting.
pub fn is_submittable_query(input: &str) -> bool {
    !input.trim().is_empty()
}

/// Single gating decision for submissions: blank input never submits,
/// and nothing submits while a request is already in flight.
pub fn can_submit_query(is_loading: bool, input: &str) -> bool {
    !is_loading && is_submittable_query(input)
}

/// Truncate long query text for log lines.
pub fn query_preview(input: &str) -> String {
    input.chars().take(50).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_submittable_query() {
        assert!(is_submittable_query("how many users signed up?"));
        assert!(is_submittable_query("  x  "));
        assert!(!is_submittable_query(""));
        assert!(!is_submittable_query("   "));
        assert!(!is_submittable_query("\n\t"));
    }

    #[test]
    fn test_can_submit_query_blocks_while_loading() {
        assert!(can_submit_query(false, "show signups per day"));
        // A pending request blocks even a perfectly good question.
        assert!(!can_submit_query(true, "show signups per day"));
        assert!(!can_submit_query(false, "   "));
        assert!(!can_submit_query(true, ""));
    }

    #[test]
    fn test_query_preview_truncates() {
        let long = "a".repeat(200);
        assert_eq!(query_preview(&long).len(), 50);
        assert_eq!(query_preview("short"), "short");
    }
}
