// src/systems/deal_system.rs

use log::info;

use crate::logic::deck::{create_standard_deck, shuffle_deck};
use crate::system::System;
use crate::world::World;

// === 初期カード配置システム！ ===
// ゲーム開始時に、山札と7つの場札にカードを配る役割を担うシステムだよ。
#[derive(Default)]
pub struct DealInitialCardsSystem;

impl DealInitialCardsSystem {
    /// ゲームの初期カード配置を実行する関数だよ！ 🎉
    ///
    /// # 処理の流れ
    /// 1. 前のゲームのカードを全部片付ける🧹
    /// 2. 52 枚のデッキを作って、World の乱数でシャッフル
    /// 3. 場札の i 列目に i+1 枚ずつ配って、一番上だけ表にする
    /// 4. 残りの 24 枚は全部裏向きで山札へ
    pub fn execute(&self, world: &mut World) {
        world.clear_cards();

        let mut deck_cards = create_standard_deck(world.layout.card_width, world.layout.card_height);
        shuffle_deck(&mut deck_cards, &mut world.rng);
        info!("🃏 デッキ作成完了！ ({}枚)", deck_cards.len());

        let mut card_iterator = deck_cards.into_iter();

        for (tableau_index, tableau) in world.tableaus.iter_mut().enumerate() {
            // 列番号 + 1 枚。take なので足りなければそこで止まる
            tableau.put_all(card_iterator.by_ref().take(tableau_index + 1));
            // 配った直後はアニメーションなしで表にする
            if let Some(top) = tableau.cards.last_mut() {
                top.reveal_immediately();
            }
        }

        world.deck.put_all(card_iterator);
        info!(
            "✅ 配り終わり！ 場札 {} 枚 / 山札 {} 枚",
            world.tableaus.iter().map(|t| t.len()).sum::<usize>(),
            world.deck.len()
        );
    }
}

impl System for DealInitialCardsSystem {
    fn run(&mut self, world: &mut World) {
        self.execute(world);
    }
}
