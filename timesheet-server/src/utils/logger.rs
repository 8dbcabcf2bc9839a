//! Logging Infrastructure
//!
//! `RUST_LOG` wins over the configured level. With a log directory the
//! output goes to a daily rolling file instead of stdout.

use tracing_subscriber::EnvFilter;

/// Initialize the global subscriber
pub fn init_logger(log_level: &str, json: bool, log_dir: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(log_level)));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_target(false);

    let file_dir = log_dir.filter(|dir| match std::fs::create_dir_all(dir) {
        Ok(()) => true,
        Err(e) => {
            eprintln!("log directory {dir} unavailable ({e}), logging to stdout");
            false
        }
    });

    match (file_dir, json) {
        (Some(dir), true) => subscriber
            .json()
            .with_writer(tracing_appender::rolling::daily(dir, "timesheet-server"))
            .init(),
        (Some(dir), false) => subscriber
            .with_ansi(false)
            .with_writer(tracing_appender::rolling::daily(dir, "timesheet-server"))
            .init(),
        (None, true) => subscriber.json().init(),
        (None, false) => subscriber.init(),
    }
}

fn default_directives(log_level: &str) -> String {
    format!("{log_level},tower_http=info,sqlx=warn")
}
