// src/app/init_handler.rs
//! GameApp の初期化に関するロジック。
//! 設定の読み込み、Canvas の準備、セッションの作成を担当するよ。

use log::{info, warn};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::app::game_session::GameSession;
use crate::config::game_config::GameConfig;
use crate::error::GameError;

/// JS から渡された設定 JSON を読む。何も渡されなければデフォルト設定。
pub fn load_config(config_json: Option<&str>) -> Result<GameConfig, GameError> {
    match config_json {
        Some(json) if !json.trim().is_empty() => GameConfig::from_json(json),
        _ => {
            info!("App::Init: 設定が渡されなかったのでデフォルトを使います");
            Ok(GameConfig::default())
        }
    }
}

/// id で Canvas を探して、大きさを設定に合わせて、2D コンテキストを取り出すよ🖼️
pub fn initialize_canvas(
    canvas_id: &str,
    config: &GameConfig,
) -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), GameError> {
    let window = web_sys::window().ok_or_else(|| GameError::Dom("window が取得できません".to_string()))?;
    let document = window
        .document()
        .ok_or_else(|| GameError::Dom("document が取得できません".to_string()))?;
    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| GameError::Dom(format!("id '{}' の要素が見つかりません", canvas_id)))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| GameError::Dom(format!("id '{}' は canvas じゃありません", canvas_id)))?;

    canvas.set_width(config.view_width as u32);
    canvas.set_height(config.view_height as u32);

    let context = canvas
        .get_context("2d")
        .map_err(|e| GameError::Dom(format!("get_context に失敗: {:?}", e)))?
        .ok_or_else(|| GameError::Dom("2d コンテキストがありません".to_string()))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| GameError::Dom("CanvasRenderingContext2d に変換できません".to_string()))?;

    info!(
        "App::Init: Canvas '{}' を {}x{} で準備しました",
        canvas_id, config.view_width, config.view_height
    );
    Ok((canvas, context))
}

/// セッションを作る。GameApp が直接持つので共有はしない
pub fn initialize_session(config: GameConfig) -> Result<GameSession, GameError> {
    if config.seed.is_none() {
        warn!("App::Init: seed なし。毎回違う配り方になります");
    }
    GameSession::new(config)
}
