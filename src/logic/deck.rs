// src/logic/deck.rs

use itertools::iproduct;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::components::card::{Card, ALL_RANKS, ALL_SUITS};

/// 標準的な52枚のカードデッキ（ソリティア用）を生成する関数だよ！🃏
///
/// スート × ランクの全組み合わせを作るよ。生成された時点では全部裏向き！
/// カードのサイズはレイアウトから受け取る (当たり判定に使うからね)。
pub fn create_standard_deck(card_width: f32, card_height: f32) -> Vec<Card> {
    iproduct!(ALL_SUITS.iter(), ALL_RANKS.iter())
        .map(|(&suit, &rank)| Card::new(suit, rank, card_width, card_height))
        .collect()
}

/// カードデッキをシャッフルする関数だよ。
///
/// 乱数生成器は呼び出し側から渡してね。シード付きの `StdRng` を渡せば毎回同じ並びになる！
pub fn shuffle_deck<R: Rng + ?Sized>(deck: &mut [Card], rng: &mut R) {
    deck.shuffle(rng);
}
