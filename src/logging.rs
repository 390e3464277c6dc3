// src/logging.rs
use log::LevelFilter;

/// Send `log` records to stderr.
///
/// `level` comes from `-v`/`-q`; a `RUST_LOG` setting overrides it.
pub fn init(level: LevelFilter) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .format_timestamp(None)
        .format_target(false)
        .parse_default_env();
    // a logger may already be installed (tests)
    let _ = builder.try_init();
}
