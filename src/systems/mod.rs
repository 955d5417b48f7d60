// src/systems/mod.rs

pub mod animation_system;
pub mod deal_system;
pub mod dealer_system;
pub mod win_condition_system;

pub use animation_system::AnimationSystem;
pub use deal_system::DealInitialCardsSystem;
pub use dealer_system::DealerSystem;
pub use win_condition_system::WinConditionSystem;
