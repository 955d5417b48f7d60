// src/error.rs
//! ゲーム全体で使うエラー型だよ！⚠️
//! ルール違反は「元に戻す」で片付くからここには来ない。
//! ここに来るのは設定の読み込みや画面の準備みたいな、セットアップ時の失敗だけ！

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum GameError {
    /// 設定 JSON が読めなかった
    #[error("設定 JSON の解析に失敗しました: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// 設定の値がおかしい (負の遅延とか)
    #[error("設定が不正です: {0}")]
    InvalidConfig(String),

    /// 画面が狭すぎてカードが置けない
    #[error("画面が狭すぎます (幅 {width}px)")]
    ViewTooSmall { width: f32 },

    /// Canvas や window が見つからない
    #[error("DOM の準備に失敗しました: {0}")]
    Dom(String),

    /// JS に渡すスナップショットが JSON にできなかった
    #[error("ゲーム状態の JSON 化に失敗しました: {0}")]
    StateSerialize(#[source] serde_json::Error),
}

// wasm の境界では JS の Error として返す！
impl From<GameError> for JsValue {
    fn from(err: GameError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
