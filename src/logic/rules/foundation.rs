//! 組札 (Foundation) へのカード移動ルールを定義するよ。

use log::debug;

use crate::components::card::{Card, Rank, Suit};

/// 指定されたカードが、`foundation_suit` の組札の一番上 (`top`) に置けるかチェックする。
///
/// 空っぽならそのスートの A だけ、カードがあれば同じスートで次のランクだけ OK！
pub fn can_move_to_foundation(foundation_suit: Suit, top: Option<&Card>, card_to_move: &Card) -> bool {
    if card_to_move.suit != foundation_suit {
        debug!(
            "[Foundation Rule] {:?} {:?} -> Foundation({:?}): suit mismatch",
            card_to_move.rank, card_to_move.suit, foundation_suit
        );
        return false;
    }

    let result = match top {
        None => card_to_move.rank == Rank::Ace,
        Some(top_card) => card_to_move.rank.is_one_above(top_card.rank),
    };

    debug!(
        "[Foundation Rule] {:?} {:?} onto {:?}: {}",
        card_to_move.rank,
        card_to_move.suit,
        top.map(|c| c.rank),
        result
    );
    result
}
