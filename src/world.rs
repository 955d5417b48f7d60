// src/world.rs

use log::warn;
use rand::rngs::StdRng;

use crate::components::card::{Suit, ALL_SUITS};
use crate::components::card_space::{CardSpace, SpaceKind};
use crate::components::game_state::GameState;
use crate::components::particle::Particle;
use crate::components::position::Position;
use crate::components::stack::StackType;
use crate::config::layout::{TableLayout, COLUMNS, FOUNDATION_COUNT};

/// 1 フレーム分の時間だよ⏱️
///
/// - `delta`: 60fps を 1.0 とした正規化済みの値。アニメーションに使う
/// - `seconds`: 実際の経過秒。タイマーと山札の遅延に使う
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameTime {
    pub delta: f32,
    pub seconds: f64,
}

impl FrameTime {
    pub const FRAME_MILLIS: f64 = 1000.0 / 60.0;

    /// `requestAnimationFrame` から渡ってくるミリ秒から作るよ。マイナスは 0 扱い。
    pub fn from_millis(millis: f64) -> Self {
        let millis = if millis.is_finite() { millis.max(0.0) } else { 0.0 };
        Self {
            delta: (millis / Self::FRAME_MILLIS) as f32,
            seconds: millis / 1000.0,
        }
    }

    /// ちょうど 1 フレーム (60fps)
    pub fn frame() -> Self {
        Self::from_millis(Self::FRAME_MILLIS)
    }
}

/// World（ワールド）は、テーブルの上のもの全部を持ってる司令塔だよ！🫡
///
/// 組札 4 つ、手札、山札、場札 7 列、パーティクル、手数とタイマー。
/// 持ち上げ中のカードだけは `GameSession` の `InteractionState` 側にあるよ。
pub struct World {
    pub layout: TableLayout,
    /// 0: ♠, 1: ♦, 2: ♣, 3: ♥
    pub foundations: [CardSpace; FOUNDATION_COUNT],
    pub hand: CardSpace,
    pub deck: CardSpace,
    pub tableaus: [CardSpace; COLUMNS],
    pub particles: Vec<Particle>,
    pub game_state: GameState,
    /// 今フレームのポインタ位置
    pub pointer: Position,
    pub time: FrameTime,
    pub rng: StdRng,
    pub particle_count: usize,
}

impl World {
    /// カードが 1 枚もない空のテーブルを作るよ。配るのは `DealInitialCardsSystem` のお仕事！
    pub fn new(layout: TableLayout, rng: StdRng, particle_count: usize) -> Self {
        let foundations = std::array::from_fn(|i| {
            CardSpace::foundation(i as u8, ALL_SUITS[i], layout.foundation_bounds(i))
        });
        let tableaus = std::array::from_fn(|i| CardSpace::tableau(i as u8, layout.tableau_bounds(i)));

        Self {
            layout,
            foundations,
            hand: CardSpace::hand(layout.hand_bounds()),
            deck: CardSpace::deck(layout.deck_bounds()),
            tableaus,
            particles: Vec::new(),
            game_state: GameState::default(),
            pointer: Position::default(),
            time: FrameTime::default(),
            rng,
            particle_count,
        }
    }

    pub fn space(&self, stack_type: StackType) -> Option<&CardSpace> {
        match stack_type {
            StackType::Foundation(i) => self.foundations.get(i as usize),
            StackType::Hand => Some(&self.hand),
            StackType::Deck => Some(&self.deck),
            StackType::Tableau(i) => self.tableaus.get(i as usize),
        }
    }

    pub fn space_mut(&mut self, stack_type: StackType) -> Option<&mut CardSpace> {
        match stack_type {
            StackType::Foundation(i) => self.foundations.get_mut(i as usize),
            StackType::Hand => Some(&mut self.hand),
            StackType::Deck => Some(&mut self.deck),
            StackType::Tableau(i) => self.tableaus.get_mut(i as usize),
        }
    }

    /// 全ゾーンをクリック判定の優先順 (組札 → 手札 → 山札 → 場札) で並べる。
    pub fn spaces(&self) -> impl Iterator<Item = &CardSpace> {
        self.foundations
            .iter()
            .chain([&self.hand, &self.deck])
            .chain(self.tableaus.iter())
    }

    pub fn spaces_mut(&mut self) -> impl Iterator<Item = &mut CardSpace> {
        self.foundations
            .iter_mut()
            .chain([&mut self.hand, &mut self.deck])
            .chain(self.tableaus.iter_mut())
    }

    /// テーブルに置いてあるカードの枚数 (持ち上げ中のカードは含まない)
    pub fn card_count(&self) -> usize {
        self.spaces().map(CardSpace::len).sum()
    }

    pub fn foundation_counts(&self) -> [usize; FOUNDATION_COUNT] {
        std::array::from_fn(|i| self.foundations[i].len())
    }

    /// 全ゾーンのカードを捨てる🧹 (新しいゲーム用)
    pub fn clear_cards(&mut self) {
        for space in self.spaces_mut() {
            space.cards.clear();
            space.highlight = false;
            space.hover = false;
        }
        self.particles.clear();
    }

    /// 組札の真ん中からキラキラを飛ばすよ✨
    pub fn spawn_particles(&mut self, center: Position, suit: Suit) {
        for _ in 0..self.particle_count {
            let particle = Particle::spawn(center, suit, &mut self.rng);
            self.particles.push(particle);
        }
    }

    /// 組札の StackType からキラキラを飛ばす。組札以外が来たら警告だけ出すよ。
    pub fn spawn_particles_at(&mut self, stack_type: StackType) {
        let Some(space) = self.space(stack_type) else {
            warn!("spawn_particles_at: {:?} というゾーンはありません", stack_type);
            return;
        };
        match space.kind {
            SpaceKind::Foundation { suit } => {
                let center = space.bounds.center();
                self.spawn_particles(center, suit);
            }
            _ => warn!("spawn_particles_at: {:?} は組札じゃありません", stack_type),
        }
    }
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Card, Rank, Suit};
    use rand::SeedableRng;

    fn world() -> World {
        World::new(TableLayout::default(), StdRng::seed_from_u64(0), 20)
    }

    #[test]
    fn new_world_has_thirteen_empty_zones() {
        let world = world();
        assert_eq!(world.spaces().count(), 13);
        assert_eq!(world.card_count(), 0);
        let order: Vec<StackType> = world.spaces().map(|s| s.stack_type).collect();
        let expected: Vec<StackType> = StackType::all().collect();
        assert_eq!(order, expected, "優先順が StackType::all と一致するはず");
    }

    #[test]
    fn foundation_suits_follow_index() {
        let world = world();
        let suits: Vec<SpaceKind> = world.foundations.iter().map(|f| f.kind).collect();
        assert_eq!(
            suits,
            vec![
                SpaceKind::Foundation { suit: Suit::Spade },
                SpaceKind::Foundation { suit: Suit::Diamond },
                SpaceKind::Foundation { suit: Suit::Club },
                SpaceKind::Foundation { suit: Suit::Heart },
            ]
        );
    }

    #[test]
    fn space_lookup_and_out_of_range() {
        let mut world = world();
        assert_eq!(world.space(StackType::Tableau(6)).map(|s| s.stack_type), Some(StackType::Tableau(6)));
        assert!(world.space(StackType::Tableau(7)).is_none());
        assert!(world.space_mut(StackType::Foundation(4)).is_none());
    }

    #[test]
    fn spawn_particles_only_on_foundations() {
        let mut world = world();
        world.spawn_particles_at(StackType::Foundation(1));
        assert_eq!(world.particles.len(), 20);
        assert!(world.particles.iter().all(|p| p.suit == Suit::Diamond));

        world.spawn_particles_at(StackType::Tableau(0));
        assert_eq!(world.particles.len(), 20, "場札からは出ない");
    }

    #[test]
    fn clear_cards_empties_everything() {
        let mut world = world();
        world.deck.put(Card::new(Suit::Club, Rank::Ace, 10.0, 14.0));
        world.tableaus[3].put(Card::new(Suit::Club, Rank::Two, 10.0, 14.0));
        world.spawn_particles_at(StackType::Foundation(0));
        world.clear_cards();
        assert_eq!(world.card_count(), 0);
        assert!(world.particles.is_empty());
    }

    #[test]
    fn frame_time_from_millis() {
        let t = FrameTime::from_millis(1000.0 / 30.0);
        assert!((t.delta - 2.0).abs() < 1e-4, "30fps なら delta は 2");
        assert!((t.seconds - 1.0 / 30.0).abs() < 1e-9);
        assert_eq!(FrameTime::from_millis(-5.0), FrameTime::default());
        assert_eq!(FrameTime::from_millis(f64::NAN), FrameTime::default());
    }
}
