//! File-based logging initialization

use super::config::{LogConfig, LogFormat, DEFAULT_LOG_LEVEL, LOG_FILE_PREFIX};
use std::fs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging system
///
/// Installs a registry with:
/// - an `EnvFilter` built from the configured directives
/// - a non-blocking, daily-rolling file layer (text or JSON)
/// - an optional stderr layer
///
/// Returns the file writer's guard; keep it alive until exit so buffered
/// events are flushed. Returns `None` when the log directory cannot be
/// created or a subscriber is already installed.
pub fn init(config: &LogConfig) -> Option<WorkerGuard> {
    if let Err(e) = fs::create_dir_all(&config.log_dir) {
        eprintln!("Warning: Failed to create log directory {}: {}", config.log_dir.display(), e);
        return None;
    }

    let file_appender = tracing_appender::rolling::daily(&config.log_dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|e| {
        eprintln!("Warning: Invalid log filter {:?}: {}", config.log_level, e);
        EnvFilter::new(DEFAULT_LOG_LEVEL)
    });

    let text_layer = (config.format == LogFormat::Text).then(|| {
        fmt::layer()
            .with_writer(writer.clone())
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
    });

    let json_layer = (config.format == LogFormat::Json).then(|| {
        fmt::layer()
            .json()
            .with_writer(writer.clone())
            .with_target(true)
            .with_current_span(true)
    });

    let stderr_layer = config
        .stderr
        .then(|| fmt::layer().with_writer(std::io::stderr).with_target(false));

    let installed = tracing_subscriber::registry()
        .with(env_filter)
        .with(text_layer)
        .with(json_layer)
        .with(stderr_layer)
        .try_init();

    if let Err(e) = installed {
        eprintln!("Warning: Logging already initialized: {}", e);
        return None;
    }

    setup_panic_hook();

    tracing::info!(
        log_dir = %config.log_dir.display(),
        log_level = %config.log_level,
        format = ?config.format,
        stderr = config.stderr,
        "Logging initialized"
    );

    Some(guard)
}

/// Log panics before the default hook prints them.
fn setup_panic_hook() {
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown location".to_string());

        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic payload".to_string()
        };

        tracing::error!(location = %location, message = %message, "PANIC");
        default_panic(panic_info);
    }));
}
