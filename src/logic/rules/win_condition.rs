//! ゲームの勝利条件判定ロジックを定義するよ。

use crate::components::card::ALL_RANKS;
use crate::config::layout::FOUNDATION_COUNT;

/// 4つの組札が全部 13 枚 (A〜K) になってたらクリア！🏆
pub fn check_win_condition(foundation_card_counts: &[usize]) -> bool {
    foundation_card_counts.len() == FOUNDATION_COUNT
        && foundation_card_counts.iter().all(|&count| count == ALL_RANKS.len())
}
