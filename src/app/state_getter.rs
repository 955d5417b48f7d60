//! Gets the current game state from the session and converts it to JSON.
//!
//! JS 側のデバッグ表示やテスト用。ゲームを動かすのには使わないよ。

use log::{debug, error};
use serde::Serialize;

use crate::app::game_session::GameSession;
use crate::components::card::{Card, Rank, Suit};
use crate::components::card_space::CardSpace;
use crate::components::position::Position;
use crate::components::stack::StackType;
use crate::error::GameError;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardSnapshot {
    pub suit: Suit,
    pub rank: Rank,
    pub face_up: bool,
    pub position: Position,
}

impl From<&Card> for CardSnapshot {
    fn from(card: &Card) -> Self {
        Self {
            suit: card.suit,
            rank: card.rank,
            face_up: card.is_face_up,
            position: card.position,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneSnapshot {
    pub stack: StackType,
    /// 下から上の順
    pub cards: Vec<CardSnapshot>,
}

impl From<&CardSpace> for ZoneSnapshot {
    fn from(space: &CardSpace) -> Self {
        Self {
            stack: space.stack_type,
            cards: space.cards.iter().map(CardSnapshot::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameSnapshot {
    pub moves: u32,
    pub elapsed: f64,
    pub victory: bool,
    pub zones: Vec<ZoneSnapshot>,
    pub held: usize,
    pub dealer_busy: bool,
}

impl GameSnapshot {
    pub fn capture(session: &GameSession) -> Self {
        let world = session.world();
        Self {
            moves: world.game_state.moves,
            elapsed: world.game_state.elapsed,
            victory: world.game_state.is_won(),
            zones: world.spaces().map(ZoneSnapshot::from).collect(),
            held: session.held_cards().len(),
            dealer_busy: session.dealer_busy(),
        }
    }
}

/// セッションの状態を取得し、JSON 文字列として返します。
pub fn get_game_state_json(session: &GameSession) -> Result<String, GameError> {
    let snapshot = GameSnapshot::capture(session);
    debug!("Collected {} zones for snapshot.", snapshot.zones.len());

    serde_json::to_string(&snapshot).map_err(|e| {
        error!("Failed to serialize game state: {}", e);
        GameError::StateSerialize(e)
    })
}
