//! Browser console logging through the `log` facade.

use log::Level;

/// Debug output in debug builds, info and above otherwise.
pub fn default_level() -> Level {
    if cfg!(debug_assertions) {
        Level::Debug
    } else {
        Level::Info
    }
}

/// Install the console logger. Calling it again is harmless.
pub fn init(level: Level) {
    if console_log::init_with_level(level).is_err() {
        log::debug!("Console logger already installed");
    }
}
