// src/app/mod.rs
//! GameApp の内部ロジックを役割ごとに分割して置くモジュールだよ！
//!
//! ブラウザに依存するのは game_app / browser_event_manager / init_handler / renderer だけ。
//! 残りは全部ネイティブでテストできるよ。

pub mod browser_event_manager;
pub mod drag_apply_handler;
pub mod drag_handler;
pub mod event_handler;
pub mod game_app;
pub mod game_session;
pub mod init_handler;
pub mod input_state;
pub mod renderer;
pub mod state_getter;
pub mod stock_handler;

pub use game_app::GameApp;
pub use game_session::GameSession;
pub use input_state::{GameKey, InputState, MouseButton};
