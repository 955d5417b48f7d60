// src/app/stock_handler.rs
//! 山札 (Deck) をクリックしたときの処理だよ。めくるか、手札を戻すか。
//! 実際にカードを動かすのは `DealerSystem`、ここは手数の数え方の担当！

use log::info;

use crate::systems::dealer_system::DealerSystem;
use crate::world::World;

/// 山札クリックの結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckClick {
    /// めくり途中なので無視した
    Ignored,
    /// n 枚を時間差でめくる予定を立てた
    Drawing(usize),
    /// 1 枚すぐにめくった
    Drew,
    /// 手札 n 枚を山札に戻した
    Recycled(usize),
    /// 山札も手札も空で何も起きなかった
    Nothing,
}

impl DeckClick {
    /// カードが動いたかどうか
    pub fn counts_as_move(self) -> bool {
        matches!(self, DeckClick::Drawing(_) | DeckClick::Drew | DeckClick::Recycled(_))
    }
}

/// 左クリック。最大 3 枚を時間差でめくって 1 手。山札が空なら手札を戻して 1 手。
pub fn handle_deck_primary(world: &mut World, dealer: &mut DealerSystem) -> DeckClick {
    if dealer.is_busy() {
        return DeckClick::Ignored;
    }

    let result = if !world.deck.is_empty() {
        DeckClick::Drawing(dealer.start_draw(world))
    } else {
        match dealer.recycle(world) {
            0 => DeckClick::Nothing,
            n => DeckClick::Recycled(n),
        }
    };

    if result.counts_as_move() {
        world.game_state.record_move();
    }
    info!("山札を左クリック: {:?} ({} 手)", result, world.game_state.moves);
    result
}

/// 右クリック。1 枚だけすぐめくって 1 手。山札が空なら手札を戻す (手数は増えない)。
pub fn handle_deck_secondary(world: &mut World, dealer: &mut DealerSystem) -> DeckClick {
    if dealer.is_busy() {
        return DeckClick::Ignored;
    }

    let result = if dealer.draw_one_now(world) {
        world.game_state.record_move();
        DeckClick::Drew
    } else {
        match dealer.recycle(world) {
            0 => DeckClick::Nothing,
            n => DeckClick::Recycled(n),
        }
    };
    info!("山札を右クリック: {:?} ({} 手)", result, world.game_state.moves);
    result
}
