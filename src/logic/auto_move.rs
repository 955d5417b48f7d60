// src/logic/auto_move.rs
//! カードの自動移動先を探すロジックだよ！🪄✨
//! 右クリックで「置ける場所に勝手に置く」ときに使うんだ。

use log::debug;

use crate::components::card::Card;
use crate::components::card_space::CardSpace;
use crate::components::stack::StackType;

/// `card` を置ける最初の組札を探すよ。スキャン順は組札の並び順 (♠ ♦ ♣ ♥)。
pub fn find_automatic_foundation_move(foundations: &[CardSpace], card: &Card) -> Option<StackType> {
    let found = foundations
        .iter()
        .find(|space| space.accepts(card))
        .map(|space| space.stack_type);

    debug!("[AutoMove] {:?} {:?} -> foundation {:?}", card.rank, card.suit, found);
    found
}

/// `card` を置ける最初の場札の列を探すよ。
///
/// `exclude` を渡すと、その列はスキップする (取ってきた元の列に戻さないため)。
pub fn find_automatic_tableau_move(
    tableaus: &[CardSpace],
    card: &Card,
    exclude: Option<StackType>,
) -> Option<StackType> {
    let found = tableaus
        .iter()
        .filter(|space| Some(space.stack_type) != exclude)
        .find(|space| space.accepts(card))
        .map(|space| space.stack_type);

    debug!("[AutoMove] {:?} {:?} -> tableau {:?} (exclude {:?})", card.rank, card.suit, found, exclude);
    found
}
