// src/config/mod.rs

pub mod game_config;
pub mod layout;

pub use game_config::GameConfig;
pub use layout::TableLayout;
