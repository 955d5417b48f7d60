// src/app/input_state.rs
//! 1 フレーム分の入力をまとめたスナップショットだよ🖱️⌨️
//! ブラウザのイベントリスナーが書き込んで、`GameSession::update` が読む。
//! フレームの最後に `end_frame()` で「押した / 離した」の瞬間フラグを消すよ。

use crate::components::position::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// 左クリック
    Primary,
    /// 右クリック
    Secondary,
}

impl MouseButton {
    /// `MouseEvent.button` の値から変換する。0 が左、2 が右。
    pub fn from_dom_button(button: i16) -> Option<Self> {
        match button {
            0 => Some(MouseButton::Primary),
            2 => Some(MouseButton::Secondary),
            _ => None,
        }
    }
}

/// ボタン 1 つ分の状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonState {
    /// このフレームで押された
    pub pressed: bool,
    /// このフレームで離された
    pub released: bool,
    /// 押されっぱなし
    pub held: bool,
}

/// ゲームで使うキー
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKey {
    /// R: 山札をシャッフル
    Reshuffle,
    /// Escape: 終了のお願い
    Quit,
}

impl GameKey {
    /// `KeyboardEvent.key` の文字列から変換するよ。
    pub fn from_key_name(key: &str) -> Option<Self> {
        match key {
            "r" | "R" => Some(GameKey::Reshuffle),
            "Escape" | "Esc" => Some(GameKey::Quit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct InputState {
    pub pointer: Position,
    pub primary: ButtonState,
    pub secondary: ButtonState,
    pub keys_pressed: Vec<GameKey>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    fn button_mut(&mut self, button: MouseButton) -> &mut ButtonState {
        match button {
            MouseButton::Primary => &mut self.primary,
            MouseButton::Secondary => &mut self.secondary,
        }
    }

    pub fn move_pointer(&mut self, pointer: Position) {
        self.pointer = pointer;
    }

    pub fn press(&mut self, button: MouseButton, pointer: Position) {
        self.pointer = pointer;
        let state = self.button_mut(button);
        state.pressed = true;
        state.held = true;
    }

    pub fn release(&mut self, button: MouseButton, pointer: Position) {
        self.pointer = pointer;
        let state = self.button_mut(button);
        state.released = true;
        state.held = false;
    }

    pub fn key_down(&mut self, key: GameKey) {
        if !self.keys_pressed.contains(&key) {
            self.keys_pressed.push(key);
        }
    }

    pub fn key_pressed(&self, key: GameKey) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// フレームの終わり。瞬間フラグだけ消して、押しっぱなしとポインタは残す。
    pub fn end_frame(&mut self) {
        for state in [&mut self.primary, &mut self.secondary] {
            state.pressed = false;
            state.released = false;
        }
        self.keys_pressed.clear();
    }
}
