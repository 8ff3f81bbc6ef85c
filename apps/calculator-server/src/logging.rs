//! Logging bootstrap.
//!
//! `RUST_LOG` wins over the configured level. Output goes to stderr so that
//! `eval` and `check` keep stdout machine-readable.

use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

use crate::config::{LogFormat, LoggingConfig};

pub fn init_logging(cfg: &LoggingConfig) {
    let filter = build_filter(cfg, env_directives().as_deref());

    let result = Registry::default()
        .with(filter)
        .with(fmt_layer(cfg.format, std::io::stderr))
        .try_init();

    if let Err(e) = result {
        eprintln!("logging already initialized: {e}");
    }
}

/// Non-empty `RUST_LOG` value, if any.
fn env_directives() -> Option<String> {
    std::env::var(EnvFilter::DEFAULT_ENV)
        .ok()
        .filter(|v| !v.trim().is_empty())
}

/// `env` directives first, then `cfg.level`, then `info`.
fn build_filter(cfg: &LoggingConfig, env: Option<&str>) -> EnvFilter {
    if let Some(directives) = env {
        match EnvFilter::try_new(directives) {
            Ok(filter) => return filter,
            Err(e) => eprintln!("invalid {} '{directives}': {e}", EnvFilter::DEFAULT_ENV),
        }
    }

    EnvFilter::try_new(&cfg.level).unwrap_or_else(|e| {
        eprintln!("invalid log level '{}': {e}; falling back to 'info'", cfg.level);
        EnvFilter::new("info")
    })
}

fn fmt_layer<S, W>(format: LogFormat, writer: W) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    match format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_current_span(true)
            .with_writer(writer)
            .boxed(),
        LogFormat::Text => fmt::layer()
            .with_target(true)
            .with_ansi(false)
            .with_writer(writer)
            .boxed(),
    }
}
