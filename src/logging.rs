use tracing::level_filters::LevelFilter;

pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::WARN;

/// Logs go to stderr; stdout carries only the JSON body.
pub fn init(level: LevelFilter) {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .try_init();
}
