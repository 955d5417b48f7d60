//! 場札 (Tableau) へのカード移動ルールを定義するよ。

use log::debug;

use super::common::colors_differ;
use crate::components::card::{Card, Rank};

/// 指定されたカードが、場札の一番上 (`top`) に置けるかチェックする。
///
/// 空の列には K だけ。カードがあるなら「色が違う」かつ「ランクがちょうど1つ下」！
/// 一番上が裏向きのときは何も置けない (持ち上げた直後の元の列がそうなる)。
pub fn can_move_to_tableau(top: Option<&Card>, card_to_move: &Card) -> bool {
    match top {
        Some(target_top_card) if !target_top_card.is_face_up => {
            debug!("[Tableau Rule] {:?} onto a face-down card: rejected.", card_to_move.rank);
            false
        }
        Some(target_top_card) => {
            let different_colors = colors_differ(card_to_move, target_top_card);
            let rank_is_one_less = target_top_card.rank.is_one_above(card_to_move.rank);

            debug!(
                "[Tableau Rule] {:?}({:?}) onto {:?}({:?}). Colors different: {}. Rank is one less: {}.",
                card_to_move.rank,
                card_to_move.color(),
                target_top_card.rank,
                target_top_card.color(),
                different_colors,
                rank_is_one_less
            );

            different_colors && rank_is_one_less
        }
        None => {
            let is_king = card_to_move.rank == Rank::King;
            debug!("[Tableau Rule] {:?} onto empty Tableau. Is King: {}.", card_to_move.rank, is_king);
            is_king
        }
    }
}
