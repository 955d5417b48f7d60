// src/config/game_config.rs
//! JS 側から渡される実行時の設定だよ⚙️
//! 全部のフィールドにデフォルトがあるから、`{}` でも `None` でも動く！

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::config::layout::{
    DEAL_STEP_DELAY, DEFAULT_VIEW_HEIGHT, DEFAULT_VIEW_WIDTH, PARTICLE_COUNT,
};
use crate::error::GameError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub view_width: f32,
    pub view_height: f32,
    /// シャッフルとパーティクルのシード。None なら毎回ランダム🎲
    pub seed: Option<u64>,
    /// 山札からめくるときの 1 枚ごとの遅延 (秒)
    pub deal_step_delay: f32,
    /// 組札に置いたときに出るキラキラの数
    pub particle_count: usize,
    /// "error" / "warn" / "info" / "debug" / "trace" / "off"
    pub log_level: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            view_width: DEFAULT_VIEW_WIDTH,
            view_height: DEFAULT_VIEW_HEIGHT,
            seed: None,
            deal_step_delay: DEAL_STEP_DELAY,
            particle_count: PARTICLE_COUNT,
            log_level: "info".to_string(),
        }
    }
}

impl GameConfig {
    /// JSON 文字列から読み込んで、そのままチェックまでやるよ。
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if !(self.view_width.is_finite() && self.view_width > 0.0) {
            return Err(GameError::InvalidConfig(format!(
                "view_width は正の数にしてね: {}",
                self.view_width
            )));
        }
        if !(self.view_height.is_finite() && self.view_height > 0.0) {
            return Err(GameError::InvalidConfig(format!(
                "view_height は正の数にしてね: {}",
                self.view_height
            )));
        }
        if !self.deal_step_delay.is_finite() || self.deal_step_delay < 0.0 {
            return Err(GameError::InvalidConfig(format!(
                "deal_step_delay は 0 以上にしてね: {}",
                self.deal_step_delay
            )));
        }
        if self.particle_count > 1000 {
            return Err(GameError::InvalidConfig(format!(
                "particle_count が多すぎます: {}",
                self.particle_count
            )));
        }
        self.level_filter()?;
        Ok(())
    }

    pub fn level_filter(&self) -> Result<LevelFilter, GameError> {
        self.log_level
            .parse::<LevelFilter>()
            .map_err(|_| GameError::InvalidConfig(format!("log_level が不明です: {}", self.log_level)))
    }
}
