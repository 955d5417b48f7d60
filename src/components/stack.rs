// src/components/stack.rs

use serde::{Deserialize, Serialize};

use crate::config::layout::{COLUMNS, FOUNDATION_COUNT};

/// カードが置かれる場所 (ゾーン) の種類を示す Enum だよ。
/// これを使って、カードが山札にあるのか、場札の何列目にあるのか、などを区別するよ。
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StackType {
    /// 組札 (Foundation) だよ。スートごとに4つある。
    /// 0: Spade, 1: Diamond, 2: Club, 3: Heart (`ALL_SUITS` と同じ順番！)
    Foundation(u8),
    /// 山札からめくったカードを扇状に見せる場所 (Hand)。
    Hand,
    /// 裏向きの山札 (Deck)。
    Deck,
    /// 場札 (Tableau) だよ。7つの列があるので、列番号 (0-6) を持つ。
    Tableau(u8),
}

impl StackType {
    /// 組札 → 手札 → 山札 → 場札、のクリック判定の優先順で全ゾーンを並べるよ。
    pub fn all() -> impl Iterator<Item = StackType> {
        (0..FOUNDATION_COUNT as u8)
            .map(StackType::Foundation)
            .chain([StackType::Hand, StackType::Deck])
            .chain((0..COLUMNS as u8).map(StackType::Tableau))
    }

    pub fn is_tableau(self) -> bool {
        matches!(self, StackType::Tableau(_))
    }

    pub fn is_foundation(self) -> bool {
        matches!(self, StackType::Foundation(_))
    }
}
