// src/lib.rs

// WASM と JavaScript を繋ぐための基本！
use wasm_bindgen::prelude::*;

// 自分で作ったモジュールたち！ これでコードを整理してるんだ。
pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod logic;
pub mod system;
pub mod systems;
pub mod world;

pub use app::{GameApp, GameSession, InputState};
pub use config::GameConfig;
pub use error::GameError;
pub use world::{FrameTime, World};

use log::{LevelFilter, Log, Metadata, Record};

/// `log` のマクロの出力先。wasm ではブラウザのコンソール、ネイティブ (テスト) では標準エラーへ。
struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!("[{}] {}: {}", record.level(), record.target(), record.args());

        #[cfg(target_arch = "wasm32")]
        {
            let value = JsValue::from_str(&line);
            match record.level() {
                log::Level::Error => web_sys::console::error_1(&value),
                log::Level::Warn => web_sys::console::warn_1(&value),
                log::Level::Info => web_sys::console::info_1(&value),
                log::Level::Debug | log::Level::Trace => web_sys::console::log_1(&value),
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        eprintln!("{}", line);
    }

    fn flush(&self) {}
}

/// ロガーを入れて、設定のレベルに合わせる。何回呼んでも大丈夫！
pub fn init_logger(config: &GameConfig) {
    // 2 回目以降は Err になるだけなので無視していい
    let _ = log::set_logger(&LOGGER);
    let level = config.level_filter().unwrap_or(LevelFilter::Info);
    log::set_max_level(level);
}

// main 関数の代わりに、Wasm がロードされた時に最初に実行される関数だよ。
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    init_logger(&GameConfig::default());
    log::info!("Panic hook set!");
}
