// src/system.rs

use crate::world::World;

/// System（システム）トレイトだよ！
///
/// システムは、ゲームのロジックを 1 つの関心事ごとにまとめたもの。
/// `GameSession` が毎フレーム決まった順番で `run` を呼び出して、
/// World の中身を読んだり書き換えたりするんだ。✏️
pub trait System {
    fn run(&mut self, world: &mut World);
}
