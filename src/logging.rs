//! Browser Logging
//!
//! Installs the rolling logger with a sink that writes to the devtools
//! console at the matching level.

use log::Level;
use rolling_logger::LogSink;
use wasm_bindgen::JsValue;

use deck_core::BoardConfig;

struct ConsoleSink;

impl LogSink for ConsoleSink {
    fn write(&self, level: Level, line: &str) {
        let line = JsValue::from_str(line);
        match level {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }
}

pub fn init(config: &BoardConfig) {
    let sink = Box::new(ConsoleSink);
    if let Err(e) = rolling_logger::init_logger(&config.app_name, config.log_capacity, sink) {
        web_sys::console::warn_1(&format!("[LOG] {}", e).into());
    }
}
