//! Logger setup shared by the CLI and the browser build.
//!
//! Library code only talks to the `log` facade; this is the one place a
//! backend gets installed. Native builds log to stderr through `env_logger`,
//! wasm builds log to the browser console through `console_log`.

use log::LevelFilter;

/// Level used when nothing else is requested.
fn default_level(debug_enabled: bool) -> LevelFilter {
    if debug_enabled { LevelFilter::Debug } else { LevelFilter::Info }
}

/// Install the logger for the current target.
///
/// `debug_enabled` selects `Debug` over `Info`. On native builds a `RUST_LOG`
/// variable takes precedence. Only the first call installs anything.
pub fn init_logger(debug_enabled: bool) {
    let level = default_level(debug_enabled);

    #[cfg(target_arch = "wasm32")]
    init_console(level);

    #[cfg(not(target_arch = "wasm32"))]
    init_stderr(level);
}

#[cfg(target_arch = "wasm32")]
fn init_console(level: LevelFilter) {
    let Some(level) = level.to_level() else {
        return;
    };
    if let Err(e) = console_log::init_with_level(level) {
        let msg = format!("console_log unavailable ({e}); crossgrid will not log");
        web_sys::console::error_1(&msg.into());
        return;
    }
    log::info!("browser logger ready at {level}");
}

#[cfg(not(target_arch = "wasm32"))]
fn init_stderr(level: LevelFilter) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }

    // a logger may already be installed, e.g. by a test harness
    if builder.try_init().is_ok() {
        log::debug!("stderr logger ready at {level}");
    }
}
