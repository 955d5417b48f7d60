// src/components/mod.rs

pub mod card;
pub mod card_space;
pub mod dragging_info;
pub mod game_state;
pub mod particle;
pub mod position;
pub mod stack;

pub use card::{Card, CardColor, Rank, Suit};
pub use card_space::{CardSpace, SpaceKind};
pub use dragging_info::{DraggingInfo, InteractionState};
pub use game_state::{GameState, GameStatus};
pub use particle::Particle;
pub use position::{Bounds, Position};
pub use stack::StackType;
