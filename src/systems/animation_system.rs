// src/systems/animation_system.rs

use crate::system::System;
use crate::world::World;

/// 毎フレームの見た目の更新係だよ🎬
///
/// 全ゾーンの並べ直しとホバー判定 (カードのイージングと裏返しもここから進む)、
/// それからパーティクルを動かして、消えたものを片付ける。
#[derive(Default)]
pub struct AnimationSystem;

impl System for AnimationSystem {
    fn run(&mut self, world: &mut World) {
        let delta = world.time.delta;
        let pointer = world.pointer;

        for space in world.spaces_mut() {
            space.update(delta, pointer);
        }

        for particle in world.particles.iter_mut() {
            particle.update(delta);
        }
        world.particles.retain(|p| !p.is_dead());
    }
}
