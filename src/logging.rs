//! Logger setup: `log` facade, `env_logger` backend

use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize the global logger once.
///
/// Filter precedence: explicit `filter` (from config), then `RUST_LOG`,
/// then `info`. Later calls are ignored.
pub fn init_logging(filter: Option<&str>) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = filter {
            builder.parse_filters(filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Info);
        }

        builder.format_timestamp_millis();

        if builder.try_init().is_err() {
            // Someone else installed a logger first (test harness); keep theirs
            return;
        }

        log::debug!("logging initialized");
    });
}
