// tests/invariants.rs
//! ランダムな操作を大量に流しても崩れないはずの性質を proptest で確かめるよ🎲

use std::collections::HashSet;

use proptest::prelude::*;

use solitaire_wasm::app::input_state::{GameKey, MouseButton};
use solitaire_wasm::components::card::{Card, Rank, Suit};
use solitaire_wasm::components::card_space::{CardSpace, SpaceKind};
use solitaire_wasm::components::position::Position;
use solitaire_wasm::components::stack::StackType;
use solitaire_wasm::logic::rules;
use solitaire_wasm::{FrameTime, GameConfig, GameSession, InputState};

/// 1 回分の操作。ゾーンは StackType::all() の番号 (0..13) で指定して、dy で縦にずらす
#[derive(Debug, Clone)]
enum Gesture {
    Press(usize, f32),
    Release(usize, f32),
    Secondary(usize, f32),
    Move(usize, f32),
    Wait(usize),
    Reshuffle,
}

fn gesture() -> impl Strategy<Value = Gesture> {
    prop_oneof![
        3 => (0..13usize, 0.0..400.0f32).prop_map(|(z, dy)| Gesture::Press(z, dy)),
        3 => (0..13usize, 0.0..400.0f32).prop_map(|(z, dy)| Gesture::Release(z, dy)),
        2 => (0..13usize, 0.0..400.0f32).prop_map(|(z, dy)| Gesture::Secondary(z, dy)),
        1 => (0..13usize, 0.0..400.0f32).prop_map(|(z, dy)| Gesture::Move(z, dy)),
        1 => (1..20usize).prop_map(Gesture::Wait),
        1 => Just(Gesture::Reshuffle),
    ]
}

fn zone_point(session: &GameSession, zone: usize, dy: f32) -> Position {
    let stack = StackType::all().nth(zone).unwrap_or(StackType::Deck);
    let bounds = session
        .world()
        .space(stack)
        .map(|space| space.bounds)
        .unwrap_or_default();
    // 場札以外は箱の中に収める
    let dy = if stack.is_tableau() { dy } else { dy.min(bounds.height) };
    Position::new(bounds.x + bounds.width / 2.0, bounds.y + dy)
}

fn apply(session: &mut GameSession, input: &mut InputState, gesture: &Gesture) {
    match *gesture {
        Gesture::Press(zone, dy) => {
            let point = zone_point(session, zone, dy);
            input.press(MouseButton::Primary, point);
        }
        Gesture::Release(zone, dy) => {
            let point = zone_point(session, zone, dy);
            input.release(MouseButton::Primary, point);
        }
        Gesture::Secondary(zone, dy) => {
            let point = zone_point(session, zone, dy);
            input.press(MouseButton::Secondary, point);
        }
        Gesture::Move(zone, dy) => {
            let point = zone_point(session, zone, dy);
            input.move_pointer(point);
        }
        Gesture::Wait(count) => {
            for _ in 1..count {
                session.update(FrameTime::frame(), input);
                input.end_frame();
            }
        }
        Gesture::Reshuffle => input.key_down(GameKey::Reshuffle),
    }
    session.update(FrameTime::frame(), input);
    input.end_frame();
}

fn all_cards(session: &GameSession) -> Vec<&Card> {
    session
        .world()
        .spaces()
        .flat_map(|space| space.cards.iter())
        .chain(session.held_cards().iter())
        .collect()
}

fn check_partition(session: &GameSession) -> Result<(), TestCaseError> {
    let cards = all_cards(session);
    prop_assert_eq!(cards.len(), 52);
    let unique: HashSet<(Suit, Rank)> = cards.iter().map(|c| (c.suit, c.rank)).collect();
    prop_assert_eq!(unique.len(), 52, "同じカードが 2 か所にある");
    Ok(())
}

fn check_foundations(session: &GameSession) -> Result<(), TestCaseError> {
    for foundation in session.world().foundations.iter() {
        let SpaceKind::Foundation { suit } = foundation.kind else {
            return Err(TestCaseError::fail("組札の kind が Foundation じゃない"));
        };
        for (i, card) in foundation.cards.iter().enumerate() {
            prop_assert_eq!(card.suit, suit);
            prop_assert_eq!(card.rank.index() as usize, i, "組札は A から順番");
        }
    }
    Ok(())
}

fn check_tableau_runs(session: &GameSession) -> Result<(), TestCaseError> {
    for tableau in session.world().tableaus.iter() {
        for pair in tableau.cards.windows(2) {
            let (below, above) = (&pair[0], &pair[1]);
            if below.is_face_up && above.is_face_up {
                prop_assert_ne!(below.color(), above.color(), "表のカードは色が交互");
                prop_assert!(below.rank.is_one_above(above.rank), "表のカードはランクが 1 ずつ下がる");
            }
            prop_assert!(
                !(below.is_face_up && !above.is_face_up),
                "表のカードの上に裏のカードは来ない"
            );
        }
    }
    Ok(())
}

/// ゾーンの種類ごとのルールを直接呼んだ答え
fn expected_accepts(space: &CardSpace, card: &Card) -> bool {
    match space.kind {
        SpaceKind::Foundation { suit } => rules::can_move_to_foundation(suit, space.top_card(), card),
        SpaceKind::Tableau => rules::can_move_to_tableau(space.top_card(), card),
        SpaceKind::Hand => rules::can_move_to_hand(card),
        SpaceKind::Deck => rules::can_move_to_deck(card),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn random_gestures_keep_the_table_consistent(
        seed in any::<u64>(),
        gestures in prop::collection::vec(gesture(), 1..120),
    ) {
        let config = GameConfig { seed: Some(seed), ..GameConfig::default() };
        let mut session = GameSession::new(config).expect("session");
        let mut input = InputState::new();

        let mut last_moves = session.moves();
        for gesture in gestures.iter() {
            apply(&mut session, &mut input, gesture);

            check_partition(&session)?;
            check_foundations(&session)?;
            check_tableau_runs(&session)?;
            prop_assert!(session.moves() >= last_moves, "手数は減らない");
            last_moves = session.moves();
        }
    }

    #[test]
    fn accepts_is_pure_on_played_tables(
        seed in any::<u64>(),
        gestures in prop::collection::vec(gesture(), 0..60),
    ) {
        let config = GameConfig { seed: Some(seed), ..GameConfig::default() };
        let mut session = GameSession::new(config).expect("session");
        let mut input = InputState::new();
        for gesture in gestures.iter() {
            apply(&mut session, &mut input, gesture);
        }

        let before: Vec<CardSpace> = session.world().spaces().cloned().collect();
        let held: Vec<Card> = session.held_cards().to_vec();
        let cards: Vec<Card> = all_cards(&session).into_iter().cloned().collect();

        for space in session.world().spaces() {
            for card in cards.iter() {
                let first = space.accepts(card);
                prop_assert_eq!(first, space.accepts(card), "同じ質問には同じ答え");
                prop_assert_eq!(first, expected_accepts(space, card));
            }
        }

        let after: Vec<CardSpace> = session.world().spaces().cloned().collect();
        prop_assert_eq!(after, before, "accepts でゾーンは変わらない");
        prop_assert_eq!(session.held_cards(), held.as_slice());
    }
}
