// src/systems/dealer_system.rs
//! 山札から手札へカードをめくる係だよ🃏➡️✋
//!
//! 3 枚めくるときは 1 枚ずつ少し遅らせて動かしたい。スレッドは使わずに、
//! 「何秒後に 1 枚めくる」という予定をキューに積んで、毎フレーム期限が来たものだけ実行するよ。
//! 1 回の予定で動くのはカード 1 枚だけ (山札から取る → 表にする → 手札に置く)。

use std::collections::VecDeque;

use log::{debug, info, warn};

use crate::config::layout::{DEAL_STEP_DELAY, MAX_DRAW};
use crate::logic::rules::stock_waste;
use crate::system::System;
use crate::world::World;

/// キューに積まれた「1 枚めくる」予定
#[derive(Debug, Clone, Copy, PartialEq)]
struct ScheduledDraw {
    due: f64,
}

#[derive(Debug, Clone)]
pub struct DealerSystem {
    queue: VecDeque<ScheduledDraw>,
    /// このシステムが進めてきた時間 (秒)
    clock: f64,
    step_delay: f64,
}

impl Default for DealerSystem {
    fn default() -> Self {
        Self::new(DEAL_STEP_DELAY)
    }
}

impl DealerSystem {
    pub fn new(step_delay: f32) -> Self {
        Self {
            queue: VecDeque::new(),
            clock: 0.0,
            step_delay: step_delay.max(0.0) as f64,
        }
    }

    /// まだめくり途中のカードがあるか。忙しい間は山札のクリックを無視するよ。
    pub fn is_busy(&self) -> bool {
        !self.queue.is_empty()
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// 予定を全部捨てる (新しいゲーム用)
    pub fn reset(&mut self) {
        self.queue.clear();
    }

    /// 最大 3 枚を時間差でめくる予定を立てるよ。1 枚目はすぐ。
    ///
    /// 予定を立てたら枚数を返す。山札が空か、めくり途中なら 0。
    pub fn start_draw(&mut self, world: &World) -> usize {
        if self.is_busy() {
            debug!("Dealer: めくり途中なので無視します");
            return 0;
        }
        if !stock_waste::can_deal_from_stock(world.deck.is_empty()) {
            return 0;
        }

        let limit = world.deck.len().min(MAX_DRAW);
        for i in 0..limit {
            self.queue.push_back(ScheduledDraw {
                due: self.clock + i as f64 * self.step_delay,
            });
        }
        info!("Dealer: {} 枚めくる予定を立てました", limit);
        limit
    }

    /// 右クリック用。時間差なしで 1 枚だけめくる。
    /// 山札が空なら false (呼び出し側が手札を戻す)。
    pub fn draw_one_now(&mut self, world: &mut World) -> bool {
        if self.is_busy() || world.deck.is_empty() {
            return false;
        }
        Self::draw_step(world)
    }

    /// 手札を全部山札に戻すよ🔄 手札の上から順に裏にして積むから、並びは逆になる。
    ///
    /// 戻した枚数を返す。山札が残ってるときやめくり途中は何もしない。
    pub fn recycle(&mut self, world: &mut World) -> usize {
        if self.is_busy() {
            return 0;
        }
        if !stock_waste::can_reset_stock_from_waste(world.deck.is_empty(), world.hand.is_empty()) {
            debug!("Dealer: 戻すカードがありません");
            return 0;
        }

        let mut moved = 0;
        while let Some(mut card) = world.hand.take_top(false) {
            card.flip_down();
            world.deck.place(card);
            moved += 1;
        }
        info!("Dealer: 手札 {} 枚を山札に戻しました", moved);
        moved
    }

    /// 予定 1 回分。山札の一番上を表にして手札へ。
    fn draw_step(world: &mut World) -> bool {
        match world.deck.take_top(false) {
            Some(mut card) => {
                card.flip_up();
                debug!("Dealer: {:?} {:?} をめくりました", card.rank, card.suit);
                world.hand.place(card);
                true
            }
            None => {
                warn!("Dealer: 予定があるのに山札が空です");
                false
            }
        }
    }
}

impl System for DealerSystem {
    /// 時計を進めて、期限が来た予定だけ順番に実行するよ。
    fn run(&mut self, world: &mut World) {
        self.clock += world.time.seconds;

        while let Some(step) = self.queue.front().copied() {
            if step.due > self.clock {
                break;
            }
            self.queue.pop_front();
            Self::draw_step(world);
        }
    }
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Card, Rank, Suit, ALL_RANKS};
    use crate::config::layout::TableLayout;
    use crate::world::FrameTime;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn world_with_deck(count: usize) -> World {
        let mut world = World::new(TableLayout::default(), StdRng::seed_from_u64(0), 20);
        let cards = ALL_RANKS
            .iter()
            .cycle()
            .take(count)
            .map(|&rank| Card::new(Suit::Club, rank, 100.0, 140.0));
        world.deck.put_all(cards);
        world
    }

    fn tick(dealer: &mut DealerSystem, world: &mut World) {
        world.time = FrameTime::frame();
        dealer.run(world);
    }

    #[test]
    fn staggered_draw_moves_three_cards_over_time() {
        let mut world = world_with_deck(24);
        let mut dealer = DealerSystem::default();

        assert_eq!(dealer.start_draw(&world), 3);
        assert!(dealer.is_busy());

        // 1 フレーム目で 1 枚目
        tick(&mut dealer, &mut world);
        assert_eq!((world.deck.len(), world.hand.len()), (23, 1));

        // 0.1 秒ごとに残りが来る。どの瞬間も合計は 24
        let mut frames = 0;
        while dealer.is_busy() {
            tick(&mut dealer, &mut world);
            assert_eq!(world.deck.len() + world.hand.len(), 24);
            frames += 1;
            assert!(frames < 60, "終わらない！");
        }
        assert!(frames >= 11, "0.2 秒はかかるはず (frames = {})", frames);

        assert_eq!(world.deck.len(), 21);
        assert_eq!(world.hand.len(), 3);
        assert!(world.hand.cards.iter().all(|c| c.is_face_up));
    }

    #[test]
    fn draw_takes_only_what_is_left() {
        let mut world = world_with_deck(2);
        let mut dealer = DealerSystem::new(0.0);
        assert_eq!(dealer.start_draw(&world), 2);
        tick(&mut dealer, &mut world);
        assert!(world.deck.is_empty());
        assert_eq!(world.hand.len(), 2);
        assert_eq!(dealer.start_draw(&world), 0, "空の山札からはめくれない");
    }

    #[test]
    fn busy_dealer_ignores_new_requests() {
        let mut world = world_with_deck(10);
        let mut dealer = DealerSystem::default();
        dealer.start_draw(&world);
        assert_eq!(dealer.start_draw(&world), 0);
        assert!(!dealer.draw_one_now(&mut world));
        assert_eq!(dealer.recycle(&mut world), 0);
        assert_eq!(dealer.pending(), 3);
    }

    #[test]
    fn draw_one_now_is_immediate() {
        let mut world = world_with_deck(5);
        let mut dealer = DealerSystem::default();
        assert!(dealer.draw_one_now(&mut world));
        assert_eq!(world.hand.len(), 1);
        assert!(world.hand.cards[0].is_face_up);
        assert!(!dealer.is_busy());
    }

    #[test]
    fn draw_one_now_on_empty_deck_leaves_hand_alone() {
        let mut world = world_with_deck(0);
        world.hand.place(Card::new(Suit::Spade, Rank::Six, 100.0, 140.0));
        let mut dealer = DealerSystem::default();

        assert!(!dealer.draw_one_now(&mut world));
        assert_eq!(world.hand.len(), 1);
        assert!(world.deck.is_empty());
    }

    #[test]
    fn recycle_reverses_hand_face_down() {
        let mut world = World::new(TableLayout::default(), StdRng::seed_from_u64(0), 20);
        let ranks = [Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five];
        for rank in ranks {
            let mut card = Card::new(Suit::Heart, rank, 100.0, 140.0);
            card.reveal_immediately();
            world.hand.place(card);
        }
        let mut dealer = DealerSystem::default();

        assert_eq!(dealer.recycle(&mut world), 5);
        assert!(world.hand.is_empty());
        let deck_ranks: Vec<Rank> = world.deck.cards.iter().map(|c| c.rank).collect();
        assert_eq!(deck_ranks, vec![Rank::Five, Rank::Four, Rank::Three, Rank::Two, Rank::Ace]);
        assert!(world.deck.cards.iter().all(|c| !c.is_face_up));
    }

    #[test]
    fn recycle_with_empty_hand_or_full_deck_does_nothing() {
        let mut world = World::new(TableLayout::default(), StdRng::seed_from_u64(0), 20);
        let mut dealer = DealerSystem::default();
        assert_eq!(dealer.recycle(&mut world), 0);

        let mut world = world_with_deck(3);
        world.hand.place(Card::new(Suit::Spade, Rank::King, 100.0, 140.0));
        assert_eq!(dealer.recycle(&mut world), 0, "山札が残ってたら戻さない");
        assert_eq!(world.hand.len(), 1);
    }
}
