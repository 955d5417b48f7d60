// src/components/game_state.rs

use serde::{Deserialize, Serialize};

/// ゲーム全体の現在の状態を表す列挙型だよ！🏆🏁
///
/// 勝利は毎フレーム組札の枚数から計算し直すから、
/// カードが組札から戻されたら Playing に戻ることもあるよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GameStatus {
    /// ゲームが進行中の状態
    #[default]
    Playing,
    /// 勝利！🏆
    Won,
}

/// 手数とプレイ時間と勝敗をまとめたもの。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GameState {
    pub status: GameStatus,
    /// 手数。減ることはない
    pub moves: u32,
    /// 経過時間 (秒)。減ることはない
    pub elapsed: f64,
}

impl GameState {
    pub fn record_move(&mut self) {
        self.moves += 1;
    }

    pub fn advance_time(&mut self, seconds: f64) {
        if seconds > 0.0 {
            self.elapsed += seconds;
        }
    }

    pub fn is_won(&self) -> bool {
        self.status == GameStatus::Won
    }

    /// ヘッダー用の "mm:ss"
    pub fn time_label(&self) -> String {
        let total = self.elapsed as u64;
        format!("{:02}:{:02}", total / 60, total % 60)
    }
}
