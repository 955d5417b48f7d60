// src/systems/win_condition_system.rs

use log::info;

use crate::components::game_state::GameStatus;
use crate::logic::rules::check_win_condition;
use crate::system::System;
use crate::world::World;

/// ゲームの勝利条件をチェックするシステムだよ！🏆🎉
///
/// 組札 4 つが全部 13 枚なら勝ち。毎フレーム計算し直すだけで、入力は止めないよ。
#[derive(Default)]
pub struct WinConditionSystem;

impl WinConditionSystem {
    pub fn new() -> Self {
        Self
    }
}

impl System for WinConditionSystem {
    fn run(&mut self, world: &mut World) {
        let won = check_win_condition(&world.foundation_counts());
        let status = if won { GameStatus::Won } else { GameStatus::Playing };

        if status != world.game_state.status {
            if won {
                info!("WinConditionSystem: 勝利条件達成！🏆 ({} 手)", world.game_state.moves);
            } else {
                info!("WinConditionSystem: 組札からカードが戻されました");
            }
            world.game_state.status = status;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Card, ALL_RANKS};
    use crate::components::card_space::SpaceKind;
    use crate::config::layout::TableLayout;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn full_foundations_world() -> World {
        let mut world = World::new(TableLayout::default(), StdRng::seed_from_u64(0), 20);
        for foundation in world.foundations.iter_mut() {
            let suit = match foundation.kind {
                SpaceKind::Foundation { suit } => suit,
                _ => unreachable!("組札のはず"),
            };
            for rank in ALL_RANKS {
                let mut card = Card::new(suit, rank, 100.0, 140.0);
                card.reveal_immediately();
                foundation.put(card);
            }
        }
        world
    }

    #[test]
    fn victory_when_all_foundations_hold_thirteen() {
        let mut world = full_foundations_world();
        assert!(!world.game_state.is_won());
        WinConditionSystem::new().run(&mut world);
        assert!(world.game_state.is_won());
        println!("勝利判定テスト、成功！🏆");
    }

    #[test]
    fn victory_is_recomputed_every_frame() {
        let mut world = full_foundations_world();
        let mut system = WinConditionSystem::new();
        system.run(&mut world);
        assert!(world.game_state.is_won());

        let king = world.foundations[2].take_top(true).expect("K があるはず");
        system.run(&mut world);
        assert_eq!(world.game_state.status, GameStatus::Playing);

        world.foundations[2].place(king);
        system.run(&mut world);
        assert!(world.game_state.is_won());
    }

    #[test]
    fn empty_table_is_not_a_win() {
        let mut world = World::new(TableLayout::default(), StdRng::seed_from_u64(0), 20);
        WinConditionSystem::new().run(&mut world);
        assert!(!world.game_state.is_won());
    }
}
