use crate::dir::SignupDirectory;
use std::{fs::File, str::FromStr, sync::Arc};
use tracing_subscriber::{
    filter::{self, LevelFilter},
    fmt::writer::BoxMakeWriter,
    prelude::*,
};

/// Env variable overriding the configured log level.
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    #[error("failed to create log file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid log level: {0}")]
    Level(#[from] filter::LevelParseError),
    #[error("failed to install logger: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

// Targets from the windowing, rendering and HTTP stacks that would drown our own events.
const MUTED_TARGETS: &[&str] = &[
    "iced_wgpu",
    "iced_winit",
    "iced_graphics",
    "iced_runtime",
    "iced_core",
    "iced_tiny_skia",
    "wgpu_core",
    "wgpu_hal",
    "naga",
    "winit",
    "sctk",
    "mio",
    "cosmic_text",
    "polling",
    "calloop",
    "async_io",
    "rustls",
    "hyper",
    "hyper_util",
    "reqwest",
    "tokio",
];

fn is_muted(target: &str) -> bool {
    MUTED_TARGETS.iter().any(|prefix| target.starts_with(prefix))
}

pub fn setup_logger(log_level: LevelFilter, datadir: &SignupDirectory) -> Result<(), LoggerError> {
    let file = File::create(datadir.log_path())?;
    let writer = BoxMakeWriter::new(Arc::new(file));

    let file_log = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_file(false);

    let stdout_log = tracing_subscriber::fmt::layer().pretty().with_file(false);

    tracing_subscriber::registry()
        .with(
            stdout_log
                .and_then(file_log)
                .with_filter(log_level)
                .with_filter(filter::filter_fn(|metadata| !is_muted(metadata.target()))),
        )
        .try_init()?;

    Ok(())
}

/// Parse LOG_LEVEL environment variable.
pub fn parse_log_level() -> Result<Option<LevelFilter>, LoggerError> {
    if let Ok(l) = std::env::var(LOG_LEVEL_ENV) {
        Ok(Some(LevelFilter::from_str(&l)?))
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mutes_dependency_targets() {
        assert!(is_muted("wgpu_core::device"));
        assert!(is_muted("reqwest::connect"));
        assert!(is_muted("hyper_util::client::legacy"));
        assert!(!is_muted("signup_gui::app"));
    }
}
