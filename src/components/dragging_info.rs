// src/components/dragging_info.rs

use serde::{Deserialize, Serialize};

use crate::components::card::Card;
use crate::components::stack::StackType;

/// 持ち上げ中のカードの情報だよ！🖱️➡️🃏
///
/// `cards` は下から上の順番で、ポインタについてくる。
/// `origin` は取ってきた場所。置けなかったらここに全部戻す！
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DraggingInfo {
    pub cards: Vec<Card>,
    pub origin: StackType,
}

/// 入力の状態マシン。ハンドラ関数はこれを受け取って、次の状態を返すよ。
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub enum InteractionState {
    /// 何も持ってない
    #[default]
    Idle,
    /// カードを持ち上げてる最中
    Holding(DraggingInfo),
}

impl InteractionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, InteractionState::Idle)
    }

    /// 持ってるカード (なければ空スライス)
    pub fn held_cards(&self) -> &[Card] {
        match self {
            InteractionState::Idle => &[],
            InteractionState::Holding(info) => &info.cards,
        }
    }

    pub fn held_cards_mut(&mut self) -> &mut [Card] {
        match self {
            InteractionState::Idle => &mut [],
            InteractionState::Holding(info) => &mut info.cards,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Rank, Suit};

    #[test]
    fn held_cards_views() {
        let mut state = InteractionState::default();
        assert!(state.is_idle());
        assert!(state.held_cards().is_empty());

        state = InteractionState::Holding(DraggingInfo {
            cards: vec![Card::new(Suit::Club, Rank::Four, 10.0, 14.0)],
            origin: StackType::Tableau(3),
        });
        assert!(!state.is_idle());
        assert_eq!(state.held_cards().len(), 1);
        state.held_cards_mut()[0].picked_up = true;
        assert!(state.held_cards()[0].picked_up);
    }
}
