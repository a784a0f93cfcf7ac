// src/logging.rs

use std::sync::Once;

static INIT: Once = Once::new();

/// Install the env_logger backend. Safe to call more than once; `RUST_LOG`
/// still overrides the filters below.
pub fn init_logger() {
    INIT.call_once(|| {
        let result = env_logger::Builder::new()
            .filter_level(log::LevelFilter::Info)
            .filter_module("animewall", log::LevelFilter::Debug)
            .filter_module("reqwest", log::LevelFilter::Warn)
            .filter_module("hyper", log::LevelFilter::Warn)
            .filter_module("rusqlite", log::LevelFilter::Warn)
            .parse_default_env()
            .format_timestamp_secs()
            .format_module_path(false)
            .try_init();

        match result {
            Ok(()) => log::info!("Logging system initialized"),
            // Host application already installed a logger
            Err(e) => log::debug!("Logger not installed: {}", e),
        }
    });
}
