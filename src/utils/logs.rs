use std::str::FromStr;
use crate::core::domain::{Configuration, LogFormat};

// setup_tracing installs the global subscriber. Logs go to stderr so they never
// interleave with the menu written to stdout.
pub fn setup_tracing(config: &Configuration) {
    let level = tracing::Level::from_str(config.log_level.as_str()).unwrap_or(tracing::Level::WARN);
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        // disable printing the name of the module in every log line.
        .with_target(false);

    let res = match config.log_format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };
    if let Err(err) = res {
        eprintln!("tracing already initialized: {}", err);
    }
}
