// src/components/particle.rs

use std::f32::consts::PI;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::components::card::Suit;
use crate::components::position::Position;

pub const PARTICLE_MAX_SPEED: f32 = 5.0;
const DRAG: f32 = 0.975;
const FADE: f32 = 0.015;
const SPIN: f32 = 0.125;

/// 組札にカードを置いたときに飛び散るスートのマーク ✨
/// 見た目だけのもので、ルールには一切関わらないよ。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub suit: Suit,
    pub position: Position,
    pub velocity: Position,
    pub rotation: f32,
    pub alpha: f32,
}

impl Particle {
    /// ランダムな向きと速さ (0..5) で作るよ🎲
    pub fn spawn<R: Rng + ?Sized>(center: Position, suit: Suit, rng: &mut R) -> Self {
        let angle = rng.gen_range(0.0..PI * 2.0);
        let speed = rng.gen_range(0.0..PARTICLE_MAX_SPEED);
        Self {
            suit,
            position: center,
            velocity: Position::new(angle.cos(), angle.sin()) * speed,
            rotation: rng.gen_range(0.0..PI * 2.0),
            alpha: 1.0,
        }
    }

    pub fn update(&mut self, delta: f32) {
        self.position = self.position + self.velocity * delta;
        self.velocity = self.velocity * DRAG.powf(delta);
        self.rotation += self.velocity.length() * SPIN;
        self.alpha -= FADE * delta;
    }

    pub fn is_dead(&self) -> bool {
        self.alpha <= 0.0
    }
}
