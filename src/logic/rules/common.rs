//! ルール判定で共通して使うヘルパー関数や型を置くよ。

use crate::components::card::{Card, Suit, ALL_SUITS};

pub use crate::components::card::CardColor;

/// 組札 (Foundation) のインデックス (0-3) から対応するスートを取得する。
/// 約束事: 0: Spade ♠️, 1: Diamond ♦️, 2: Club ♣️, 3: Heart ❤️
pub fn get_foundation_suit(foundation_index: u8) -> Option<Suit> {
    ALL_SUITS.get(foundation_index as usize).copied()
}

/// 2枚のカードの色が違うかチェック！場札は赤黒交互にしか積めないからね。
pub(crate) fn colors_differ(a: &Card, b: &Card) -> bool {
    a.color() != b.color()
}
