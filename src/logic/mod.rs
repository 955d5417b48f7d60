// src/logic/mod.rs
//! ゲームのルールや判定みたいな「純粋なロジック」をまとめるモジュールだよ🧠

pub mod auto_move;
pub mod deck;
pub mod rules;
