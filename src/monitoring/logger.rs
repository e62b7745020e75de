//! Console logging with a structured line format.

use std::sync::Once;

use wasm_bindgen::JsValue;

static INIT: Once = Once::new();

pub struct Logger;

impl Logger {
    /// Initialize logging (call once at app startup).
    pub fn init() {
        INIT.call_once(|| {
            Self::info("Frontend logging initialized");
        });
    }

    pub fn info(msg: &str) {
        Self::log_with_level("INFO", msg);
    }

    pub fn warn(msg: &str) {
        Self::log_with_level("WARN", msg);
    }

    pub fn error(msg: &str) {
        Self::log_with_level("ERROR", msg);
    }

    /// Log with level and timestamp.
    fn log_with_level(level: &str, msg: &str) {
        let log_line = format!("[{}] {} - {}", Self::timestamp(), level, msg);
        let log_line = JsValue::from_str(&log_line);

        match level {
            "ERROR" => web_sys::console::error_1(&log_line),
            "WARN" => web_sys::console::warn_1(&log_line),
            _ => web_sys::console::log_1(&log_line),
        }
    }

    fn timestamp() -> String {
        chrono::Local::now().format("%H:%M:%S%.3f").to_string()
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;

    #[test]
    fn test_logger_levels() {
        Logger::init();
        Logger::info("Test message");
        Logger::warn("Test warning");
        Logger::error("Test error");
    }
}
