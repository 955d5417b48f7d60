// src/app/drag_apply_handler.rs
//! 持ち上げたカードを離したときに、どこに置くかを決めて実際に動かすよ。

use log::{error, info};

use crate::components::card::Card;
use crate::components::dragging_info::DraggingInfo;
use crate::components::position::Position;
use crate::components::stack::StackType;
use crate::world::World;

/// ドロップの結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// 組札に置いた (1 枚だけのとき)
    Foundation(StackType),
    /// 場札に置いた
    Tableau(StackType),
    /// どこにも置けなかったので元の場所に戻した
    Returned(StackType),
}

/// ドロップを適用する関数だよ。
///
/// 1. 1 枚だけ持っていて、離した組札がそれを受け付けるなら組札へ (キラキラ付き✨)
/// 2. それ以外で、離した場所の場札が先頭のカードを受け付けるなら、まとめてその列へ
/// 3. どっちもダメなら元の場所に全部戻す
///
/// 1 と 2 は 1 手。元が場札なら、残った一番上のカードを表にする。
pub fn apply_drop(world: &mut World, info: DraggingInfo, point: Position) -> DropOutcome {
    let DraggingInfo { cards, origin } = info;
    let Some(first) = cards.first() else {
        return DropOutcome::Returned(origin);
    };

    let foundation = if cards.len() == 1 {
        world
            .foundations
            .iter()
            .find(|space| space.bounds.contains(point) && space.accepts(first))
            .map(|space| space.stack_type)
    } else {
        None
    };
    let tableau = || {
        world
            .tableaus
            .iter()
            .find(|space| space.in_all(point) && space.accepts(first))
            .map(|space| space.stack_type)
    };

    let outcome = match foundation {
        Some(stack) => DropOutcome::Foundation(stack),
        None => match tableau() {
            Some(stack) => DropOutcome::Tableau(stack),
            None => DropOutcome::Returned(origin),
        },
    };

    match outcome {
        DropOutcome::Foundation(target) | DropOutcome::Tableau(target) => {
            info!("ドロップ: {:?} から {} 枚を {:?} へ", origin, cards.len(), target);
            place_cards(world, target, cards);
            if origin.is_tableau() {
                if let Some(space) = world.space_mut(origin) {
                    space.flip_top_card();
                }
            }
            world.game_state.record_move();
            if target.is_foundation() {
                world.spawn_particles_at(target);
            }
        }
        DropOutcome::Returned(origin) => {
            info!("ドロップ: 置けないので {} 枚を {:?} に戻します", cards.len(), origin);
            place_cards(world, origin, cards);
        }
    }
    outcome
}

fn place_cards(world: &mut World, stack: StackType, cards: Vec<Card>) {
    match world.space_mut(stack) {
        Some(space) => space.place_all(cards),
        None => {
            // ありえないはずだけど、カードを失くさないように手札に逃がす
            error!("{:?} というゾーンはありません。手札に戻します", stack);
            world.hand.place_all(cards);
        }
    }
}
