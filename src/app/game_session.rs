// src/app/game_session.rs
//! 1 ゲーム分の状態と、毎フレームの更新の順番をまとめたものだよ🎮
//!
//! ブラウザには依存しないから、ネイティブのテストからそのまま動かせる！
//! `GameApp` はこれをそのまま持って、`tick` のたびに `update` を呼ぶだけ。

use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::app::drag_handler;
use crate::app::event_handler;
use crate::app::input_state::{GameKey, InputState};
use crate::components::card::Card;
use crate::components::dragging_info::InteractionState;
use crate::config::game_config::GameConfig;
use crate::config::layout::TableLayout;
use crate::error::GameError;
use crate::system::System;
use crate::systems::{AnimationSystem, DealInitialCardsSystem, DealerSystem, WinConditionSystem};
use crate::world::{FrameTime, World};

pub struct GameSession {
    world: World,
    interaction: InteractionState,
    dealer: DealerSystem,
    animation: AnimationSystem,
    win: WinConditionSystem,
    deal: DealInitialCardsSystem,
    quit_requested: bool,
    config: GameConfig,
}

impl GameSession {
    /// 設定をチェックして、テーブルを作って、最初の 1 ゲームを配るよ。
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let layout = TableLayout::new(config.view_width, config.view_height)?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut session = Self {
            world: World::new(layout, rng, config.particle_count),
            interaction: InteractionState::Idle,
            dealer: DealerSystem::new(config.deal_step_delay),
            animation: AnimationSystem,
            win: WinConditionSystem::new(),
            deal: DealInitialCardsSystem,
            quit_requested: false,
            config,
        };
        session.deal.execute(&mut session.world);
        info!("GameSession: 準備完了 (seed = {:?})", session.config.seed);
        Ok(session)
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    /// 今ポインタについてきてるカード (持ってなければ空)
    pub fn held_cards(&self) -> &[Card] {
        self.interaction.held_cards()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn dealer_busy(&self) -> bool {
        self.dealer.is_busy()
    }

    pub fn moves(&self) -> u32 {
        self.world.game_state.moves
    }

    pub fn is_victory(&self) -> bool {
        self.world.game_state.is_won()
    }

    /// テーブルの上と持ち上げ中を合わせたカードの枚数。いつでも 52 のはず。
    pub fn total_card_count(&self) -> usize {
        self.world.card_count() + self.interaction.held_cards().len()
    }

    /// 1 フレーム進めるよ⏩
    ///
    /// 1. 時間とポインタを World に渡す
    /// 2. ゾーンとカードとパーティクルのアニメーション
    /// 3. 持ち上げ中のカードのアニメーション
    /// 4. タイマー
    /// 5. キー入力 → 左クリック → 右クリック
    /// 6. 山札の予定を実行
    /// 7. 勝利判定
    pub fn update(&mut self, time: FrameTime, input: &InputState) {
        self.world.time = time;
        self.world.pointer = input.pointer;

        self.animation.run(&mut self.world);
        for card in self.interaction.held_cards_mut() {
            card.update(time.delta, false);
        }
        self.world.game_state.advance_time(time.seconds);

        if input.key_pressed(GameKey::Quit) {
            info!("GameSession: 終了がリクエストされました");
            self.quit_requested = true;
            return;
        }
        if input.key_pressed(GameKey::Reshuffle) {
            self.reshuffle();
        }

        self.handle_primary(input);
        if input.secondary.pressed && self.interaction.is_idle() {
            event_handler::handle_secondary_click(&mut self.world, &mut self.dealer, input.pointer);
        }

        self.dealer.run(&mut self.world);
        self.win.run(&mut self.world);
    }

    fn handle_primary(&mut self, input: &InputState) {
        let point = input.pointer;

        if input.primary.pressed {
            let state = std::mem::take(&mut self.interaction);
            self.interaction = drag_handler::handle_drag_start(&mut self.world, &mut self.dealer, point, state);
        }

        if input.primary.released {
            let state = std::mem::take(&mut self.interaction);
            let (next, _) = drag_handler::handle_drag_end(&mut self.world, point, state);
            self.interaction = next;
        }

        drag_handler::update_dragged_position(&mut self.interaction, point);
    }

    /// 山札に残ってるカードだけシャッフルするよ🎲
    pub fn reshuffle(&mut self) {
        if self.dealer.is_busy() {
            warn!("GameSession: めくり途中なのでシャッフルしません");
            return;
        }
        let world = &mut self.world;
        world.deck.shuffle(&mut world.rng);
        info!("GameSession: 山札 {} 枚をシャッフルしました", world.deck.len());
    }

    /// 全部片付けて配り直し。手数とタイマーも 0 に戻るよ。
    pub fn new_game(&mut self) {
        self.dealer.reset();
        self.interaction = InteractionState::Idle;
        self.world.game_state = Default::default();
        self.deal.execute(&mut self.world);
        self.quit_requested = false;
        info!("GameSession: 新しいゲームを始めました");
    }
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::input_state::MouseButton;
    use crate::components::card::{Rank, Suit};
    use crate::components::position::Position;

    fn session() -> GameSession {
        let config = GameConfig {
            seed: Some(42),
            ..GameConfig::default()
        };
        GameSession::new(config).expect("デフォルト設定なら作れる")
    }

    fn frame(session: &mut GameSession, input: &mut InputState) {
        session.update(FrameTime::frame(), input);
        input.end_frame();
    }

    #[test]
    fn new_session_is_dealt() {
        let session = session();
        assert_eq!(session.total_card_count(), 52);
        assert_eq!(session.world().deck.len(), 24);
        assert_eq!(session.moves(), 0);
        assert!(!session.is_victory());
        assert!(session.interaction().is_idle());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = GameConfig {
            view_width: 100.0,
            ..GameConfig::default()
        };
        assert!(matches!(GameSession::new(config), Err(GameError::ViewTooSmall { .. })));
    }

    #[test]
    fn same_seed_same_deal() {
        let a = session();
        let b = session();
        assert_eq!(a.world().tableaus, b.world().tableaus);
        assert_eq!(a.world().deck, b.world().deck);
    }

    #[test]
    fn deck_click_draws_three_over_frames() {
        let mut session = session();
        let mut input = InputState::new();
        let deck = session.world().deck.bounds.center();

        input.press(MouseButton::Primary, deck);
        frame(&mut session, &mut input);
        input.release(MouseButton::Primary, deck);
        frame(&mut session, &mut input);

        for _ in 0..30 {
            frame(&mut session, &mut input);
            assert_eq!(session.total_card_count(), 52);
        }
        assert!(!session.dealer_busy());
        assert_eq!(session.world().deck.len(), 21);
        assert_eq!(session.world().hand.len(), 3);
        assert_eq!(session.moves(), 1);
    }

    #[test]
    fn drag_from_hand_follows_pointer_and_returns() {
        let mut session = session();
        let mut input = InputState::new();
        let deck = session.world().deck.bounds.center();

        input.press(MouseButton::Primary, deck);
        frame(&mut session, &mut input);
        for _ in 0..30 {
            frame(&mut session, &mut input);
        }
        let hand_top = session.world().hand.cards[2].bounds().center();

        input.release(MouseButton::Primary, deck);
        frame(&mut session, &mut input);
        input.press(MouseButton::Primary, hand_top);
        frame(&mut session, &mut input);
        assert_eq!(session.held_cards().len(), 1);
        assert_eq!(session.total_card_count(), 52, "持ち上げ中もカードは消えない");

        // 何もない場所で離すと手札に戻る
        let empty = Position::new(1190.0, 890.0);
        input.move_pointer(empty);
        frame(&mut session, &mut input);
        assert!(session.held_cards()[0].target.x > 1000.0, "ポインタについてくる");

        input.release(MouseButton::Primary, empty);
        frame(&mut session, &mut input);
        assert!(session.interaction().is_idle());
        assert_eq!(session.world().hand.len(), 3);
        assert_eq!(session.moves(), 1, "戻しただけなら手数は増えない");
    }

    #[test]
    fn quit_key_sets_flag_and_new_game_clears_it() {
        let mut session = session();
        let mut input = InputState::new();
        input.key_down(GameKey::Quit);
        frame(&mut session, &mut input);
        assert!(session.quit_requested());

        session.new_game();
        assert!(!session.quit_requested());
        assert_eq!(session.total_card_count(), 52);
    }

    #[test]
    fn reshuffle_keeps_deck_cards() {
        let mut session = session();
        let mut before: Vec<(Suit, Rank)> =
            session.world().deck.cards.iter().map(|c| (c.suit, c.rank)).collect();
        let mut input = InputState::new();
        input.key_down(GameKey::Reshuffle);
        frame(&mut session, &mut input);

        let mut after: Vec<(Suit, Rank)> =
            session.world().deck.cards.iter().map(|c| (c.suit, c.rank)).collect();
        before.sort_by_key(|&(s, r)| (s as u8, r.index()));
        after.sort_by_key(|&(s, r)| (s as u8, r.index()));
        assert_eq!(before, after);
        assert!(session.world().deck.cards.iter().all(|c| !c.is_face_up));
    }

    #[test]
    fn new_game_resets_counters() {
        let mut session = session();
        let mut input = InputState::new();
        let deck = session.world().deck.bounds.center();
        input.press(MouseButton::Primary, deck);
        frame(&mut session, &mut input);
        assert_eq!(session.moves(), 1);

        session.new_game();
        assert_eq!(session.moves(), 0);
        assert_eq!(session.world().game_state.elapsed, 0.0);
        assert!(!session.dealer_busy());
        assert_eq!(session.world().deck.len(), 24);
    }

    #[test]
    fn timer_advances_with_frames() {
        let mut session = session();
        let mut input = InputState::new();
        for _ in 0..60 {
            frame(&mut session, &mut input);
        }
        assert!((session.world().game_state.elapsed - 1.0).abs() < 1e-6);
    }
}
