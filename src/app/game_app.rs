// src/app/game_app.rs

use std::sync::{Arc, Mutex, MutexGuard};

use log::{error, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::app::browser_event_manager::{self, ListenerStore};
use crate::app::game_session::GameSession;
use crate::app::input_state::InputState;
use crate::app::{init_handler, renderer, state_getter};
use crate::world::FrameTime;

// --- ゲーム全体のアプリケーション状態を管理する構造体 ---
//
// JS 側はこんな感じで使う想定だよ:
//   const app = new GameApp("canvas", JSON.stringify({ seed: 1 }));
//   function loop(now) { app.tick(now - last); if (!app.quit_requested()) requestAnimationFrame(loop); }
#[wasm_bindgen]
pub struct GameApp {
    // 触るのは tick と公開メソッドだけ。リスナーからは見えない
    session: GameSession,
    // リスナーと共有するのはこっちだけ。リスナーが書き込んで、tick が読む
    input: Arc<Mutex<InputState>>,
    event_closures: ListenerStore,
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

fn lock_or_recover<'a, T>(mutex: &'a Mutex<T>, name: &str) -> MutexGuard<'a, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => {
            warn!("GameApp: {} mutex was poisoned! Attempting recovery.", name);
            poisoned.into_inner()
        }
    }
}

// GameApp 構造体のメソッドを実装していくよ！
#[wasm_bindgen]
impl GameApp {
    /// `canvas_id` の Canvas に描画するゲームを作る。`config_json` は省略可。
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: String, config_json: Option<String>) -> Result<GameApp, JsValue> {
        info!("GameApp: 初期化中...");
        let config = init_handler::load_config(config_json.as_deref())?;
        crate::init_logger(&config);

        let (canvas, context) = init_handler::initialize_canvas(&canvas_id, &config)?;
        let session = init_handler::initialize_session(config)?;
        let input = Arc::new(Mutex::new(InputState::new()));
        let event_closures: ListenerStore = Arc::new(Mutex::new(Vec::new()));

        browser_event_manager::attach_input_listeners(&canvas, Arc::clone(&input), &event_closures)?;

        info!("GameApp: 初期化完了。");
        Ok(Self {
            session,
            input,
            event_closures,
            canvas,
            context,
        })
    }

    /// 1 フレーム分進めて描く。`delta_ms` は前のフレームからの経過ミリ秒。
    #[wasm_bindgen]
    pub fn tick(&mut self, delta_ms: f64) -> Result<(), JsValue> {
        let time = FrameTime::from_millis(delta_ms);

        // 入力はコピーしてすぐロックを外す。リスナーを待たせないため
        let snapshot = {
            let mut input = lock_or_recover(&self.input, "InputState");
            let snapshot = input.clone();
            input.end_frame();
            snapshot
        };

        self.session.update(time, &snapshot);

        let width = self.canvas.width() as f64;
        let height = self.canvas.height() as f64;
        renderer::render_game(&self.session, &self.context, width, height).map_err(|e| {
            error!("GameApp: Render error: {:?}", e);
            e
        })
    }

    /// 配り直して最初から
    #[wasm_bindgen]
    pub fn new_game(&mut self) {
        self.session.new_game();
    }

    /// 山札だけシャッフル (R キーと同じ)
    #[wasm_bindgen]
    pub fn reshuffle(&mut self) {
        self.session.reshuffle();
    }

    /// 現在のゲームの状態を JSON 文字列で返すよ。デバッグ表示用！
    #[wasm_bindgen]
    pub fn get_game_state_json(&self) -> Result<String, JsValue> {
        Ok(state_getter::get_game_state_json(&self.session)?)
    }

    /// Escape が押されたら true。JS 側はこれを見てループを止めてね
    #[wasm_bindgen]
    pub fn quit_requested(&self) -> bool {
        self.session.quit_requested()
    }

    #[wasm_bindgen]
    pub fn moves(&self) -> u32 {
        self.session.moves()
    }

    #[wasm_bindgen]
    pub fn is_victory(&self) -> bool {
        self.session.is_victory()
    }

    /// リスナーを外す。ページから Canvas を消す前に呼んでね
    #[wasm_bindgen]
    pub fn destroy(&self) -> Result<(), JsValue> {
        info!("GameApp: リスナーを外します");
        browser_event_manager::detach_input_listeners(&self.event_closures)
    }
}

// GameApp が不要になった時にリスナーを外す処理 (Drop トレイト)
impl Drop for GameApp {
    fn drop(&mut self) {
        if let Err(e) = browser_event_manager::detach_input_listeners(&self.event_closures) {
            error!("GameApp: 破棄中にリスナーを外せませんでした: {:?}", e);
        }
    }
}
