use anyhow::Result;
use clap::Parser;
use codefence::{config::ServiceConfig, rest, AppContext};
use std::sync::Arc;

#[derive(Parser)]
#[command(
    name = "codefence",
    about = "Webhook service that wraps code-looking chat messages in fenced blocks",
    version
)]
struct Args {
    /// HTTP listen port
    #[arg(long, env = "CODEFENCE_PORT")]
    port: Option<u16>,

    /// Bind address (default: 127.0.0.1; use 0.0.0.0 to accept platform webhooks)
    #[arg(long, env = "CODEFENCE_BIND")]
    bind_address: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "CODEFENCE_LOG")]
    log: Option<String>,

    /// Log output format: "pretty" or "json"
    #[arg(long, env = "CODEFENCE_LOG_FORMAT")]
    log_format: Option<String>,

    /// Write logs to this file path (rotated daily). Optional.
    #[arg(long, env = "CODEFENCE_LOG_FILE")]
    log_file: Option<std::path::PathBuf>,

    /// Path of the integration descriptor served at /integration.json
    #[arg(long, env = "CODEFENCE_INTEGRATION")]
    integration: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = ServiceConfig::resolve(
        args.port,
        args.bind_address,
        args.log,
        args.log_format,
        args.log_file,
        args.integration,
    );

    let _guard = setup_logging(&config.log_level, config.log_file.as_deref(), &config.log_format);

    let ctx = Arc::new(AppContext::new(config));
    rest::start_rest_server(ctx).await
}

/// Initialize tracing. Returns a `WorkerGuard` that must stay alive for
/// the process lifetime when a log file is configured.
///
/// `log_format` may be `"pretty"` (default, human-readable compact
/// format) or `"json"` (structured JSON for log aggregators).
///
/// If the log directory cannot be created, falls back to stdout-only
/// logging with a warning — never panics.
fn setup_logging(
    log_level: &str,
    log_file: Option<&std::path::Path>,
    log_format: &str,
) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let use_json = log_format == "json";

    if let Some(path) = log_file {
        let dir = path.parent().unwrap_or_else(|| std::path::Path::new("."));
        let filename = path
            .file_name()
            .unwrap_or_else(|| std::ffi::OsStr::new("codefence.log"));

        // Ensure the directory exists before tracing-appender tries to open it.
        if let Err(e) = std::fs::create_dir_all(dir) {
            eprintln!(
                "warn: could not create log directory '{}': {e} — falling back to stdout",
                dir.display()
            );
            if use_json {
                tracing_subscriber::fmt().json().with_env_filter(log_level).init();
            } else {
                tracing_subscriber::fmt().with_env_filter(log_level).compact().init();
            }
            return None;
        }

        let appender = tracing_appender::rolling::daily(dir, filename);
        let (non_blocking, guard) = tracing_appender::non_blocking(appender);

        if use_json {
            tracing_subscriber::registry()
                .with(EnvFilter::new(log_level))
                .with(fmt::layer().json())
                .with(fmt::layer().json().with_writer(non_blocking))
                .init();
        } else {
            tracing_subscriber::registry()
                .with(EnvFilter::new(log_level))
                .with(fmt::layer().compact())
                .with(fmt::layer().with_writer(non_blocking))
                .init();
        }

        Some(guard)
    } else if use_json {
        tracing_subscriber::fmt().json().with_env_filter(log_level).init();
        None
    } else {
        tracing_subscriber::fmt().with_env_filter(log_level).compact().init();
        None
    }
}
