use crate::config::{Config, Environment};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::{
    filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

/// Install the global subscriber. Keep the returned guards alive until exit so
/// buffered file output is flushed.
pub fn init_logging(config: &Config) -> anyhow::Result<Vec<WorkerGuard>> {
    std::fs::create_dir_all(&config.log_dir)?;

    let (app_writer, app_guard) =
        tracing_appender::non_blocking(rolling::daily(&config.log_dir, "app.log"));

    match config.environment {
        Environment::Development => {
            tracing_subscriber::registry()
                .with(env_filter(&config.log_level))
                .with(fmt::layer().compact())
                .with(fmt::layer().with_ansi(false).with_writer(app_writer))
                .try_init()?;

            Ok(vec![app_guard])
        }
        Environment::Production => {
            let (error_writer, error_guard) =
                tracing_appender::non_blocking(rolling::daily(&config.log_dir, "error.log"));

            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(false)
                        .compact()
                        .with_filter(LevelFilter::WARN),
                )
                .with(
                    fmt::layer()
                        .json()
                        .with_writer(app_writer)
                        .with_filter(env_filter(&config.log_level)),
                )
                .with(
                    fmt::layer()
                        .json()
                        .with_writer(error_writer)
                        .with_filter(LevelFilter::ERROR),
                )
                .try_init()?;

            Ok(vec![app_guard, error_guard])
        }
    }
}

fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(level)))
}

fn default_directives(level: &str) -> String {
    format!("compound_interest_api={level},tower_http={level}")
}
