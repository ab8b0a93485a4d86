use clap::ValueEnum;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, ValueEnum, Debug, PartialEq)]
pub enum LogMode {
    Quiet,
    Plain,
    Verbose,
}

impl LogMode {
    fn default_filter(&self) -> &'static str {
        match self {
            LogMode::Quiet => "metatags=error",
            LogMode::Plain => "metatags=info",
            LogMode::Verbose => "metatags=debug",
        }
    }
}

/// Install the global subscriber. `RUST_LOG` wins over `mode` when set.
/// Logs go to stderr so stdout stays clean for the rendered tags.
pub fn init(mode: LogMode) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(mode.default_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
