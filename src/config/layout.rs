// src/config/layout.rs
//! ゲーム画面のレイアウトとアニメーションに関する定数を定義するよ！
//! カードの大きさ、ゾーンの座標、場札の重なり具合など。

use crate::components::position::Bounds;
use crate::error::GameError;

pub const DEFAULT_VIEW_WIDTH: f32 = 1200.0;
pub const DEFAULT_VIEW_HEIGHT: f32 = 900.0;

pub const HEADER_HEIGHT: f32 = 50.0; // 上部の「Moves / Time」表示の高さ
pub const BORDER: f32 = 25.0; // ゾーン同士のすき間
pub const COLUMNS: usize = 7; // 場札の列数
pub const FOUNDATION_COUNT: usize = 4;
pub const CARD_ASPECT: f32 = 3.5 / 2.5; // 高さ / 幅

// --- アニメーション ---
pub const EASE: f32 = 0.25; // position が target に近づく割合 (1フレームあたり)
pub const FLIP_SPEED: i32 = 10; // 裏返しアニメーションの 1 フレームの進み (px)

// --- ゾーンごとの重なり ---
pub const TABLEAU_MIN_OFFSET: f32 = 10.0; // 場札の Y 方向の詰めた間隔
pub const TABLEAU_MAX_OFFSET: f32 = 35.0; // ホバー中に広がった間隔
pub const HAND_FAN_OFFSET: f32 = 40.0; // 手札の X 方向のずらし幅

// --- 山札 ---
pub const MAX_DRAW: usize = 3; // 1 クリックでめくる最大枚数
pub const DEAL_STEP_DELAY: f32 = 0.1; // めくる 1 枚ごとの遅延 (秒)

pub const PARTICLE_COUNT: usize = 20; // 組札に置いたときのキラキラの数 ✨

/// 画面サイズから計算したテーブルの配置だよ。
///
/// カードの幅は「横幅から 8 本分のすき間を引いて 7 等分」、高さは 2.5 : 3.5 の比率。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableLayout {
    pub view_width: f32,
    pub view_height: f32,
    pub card_width: f32,
    pub card_height: f32,
}

impl TableLayout {
    pub fn new(view_width: f32, view_height: f32) -> Result<Self, GameError> {
        let card_width = ((view_width - (COLUMNS as f32 + 1.0) * BORDER) / COLUMNS as f32).floor();
        if card_width <= 0.0 || !card_width.is_finite() {
            return Err(GameError::ViewTooSmall { width: view_width });
        }
        let card_height = card_width * CARD_ASPECT;

        Ok(Self {
            view_width,
            view_height,
            card_width,
            card_height,
        })
    }

    fn card_box(&self, x: f32, y: f32) -> Bounds {
        Bounds::new(x, y, self.card_width, self.card_height)
    }

    fn top_row_y(&self) -> f32 {
        HEADER_HEIGHT + BORDER
    }

    /// i 番目の列の左端 X。組札と場札は同じ列に並ぶよ。
    fn column_x(&self, index: usize) -> f32 {
        index as f32 * self.card_width + (index as f32 + 1.0) * BORDER
    }

    pub fn foundation_bounds(&self, index: usize) -> Bounds {
        self.card_box(self.column_x(index), self.top_row_y())
    }

    pub fn hand_bounds(&self) -> Bounds {
        self.card_box(4.1 * self.card_width + 6.0 * BORDER, self.top_row_y())
    }

    pub fn deck_bounds(&self) -> Bounds {
        self.card_box(6.0 * self.card_width + 7.0 * BORDER, self.top_row_y())
    }

    pub fn tableau_bounds(&self, index: usize) -> Bounds {
        self.card_box(
            self.column_x(index),
            HEADER_HEIGHT + BORDER * 2.0 + self.card_height,
        )
    }

    pub fn header_bounds(&self) -> Bounds {
        Bounds::new(0.0, 0.0, self.view_width, HEADER_HEIGHT)
    }
}

impl Default for TableLayout {
    fn default() -> Self {
        // 1200 幅なら card_width = 142 で必ず成功する
        let card_width = ((DEFAULT_VIEW_WIDTH - (COLUMNS as f32 + 1.0) * BORDER) / COLUMNS as f32).floor();
        Self {
            view_width: DEFAULT_VIEW_WIDTH,
            view_height: DEFAULT_VIEW_HEIGHT,
            card_width,
            card_height: card_width * CARD_ASPECT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_card_size() {
        let layout = TableLayout::new(DEFAULT_VIEW_WIDTH, DEFAULT_VIEW_HEIGHT).expect("1200x900 は有効");
        assert_eq!(layout.card_width, 142.0);
        assert!((layout.card_height - 198.8).abs() < 0.001);
        assert_eq!(layout, TableLayout::default());
    }

    #[test]
    fn zones_do_not_overlap_in_top_row() {
        let layout = TableLayout::default();
        let foundation_right = layout.foundation_bounds(3).x + layout.card_width;
        assert!(foundation_right < layout.hand_bounds().x);
        let hand_fan_right = layout.hand_bounds().x + layout.card_width + HAND_FAN_OFFSET * 2.0;
        assert!(hand_fan_right < layout.deck_bounds().x);
        assert!(layout.tableau_bounds(0).y > layout.foundation_bounds(0).y + layout.card_height);
    }

    #[test]
    fn tiny_view_is_rejected() {
        match TableLayout::new(150.0, 400.0) {
            Err(GameError::ViewTooSmall { width }) => assert_eq!(width, 150.0),
            other => panic!("ViewTooSmall になるはず: {:?}", other),
        }
    }
}
