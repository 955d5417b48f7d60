//! 山札 (Deck) と手札 (Hand) に関するルールを定義するよ。

use crate::components::card::Card;

/// 山札から手札にカードをめくれるかチェックする。
pub fn can_deal_from_stock(stock_is_empty: bool) -> bool {
    !stock_is_empty
}

/// 山札が空のときに、手札を山札に戻せるかチェックする。
pub fn can_reset_stock_from_waste(stock_is_empty: bool, waste_is_empty: bool) -> bool {
    stock_is_empty && !waste_is_empty
}

/// 手札には外から置けない！手札はめくったカード専用だからね。
pub fn can_move_to_hand(_card: &Card) -> bool {
    false
}

/// 山札にも外から置けない。戻すのはリサイクルだけ。
pub fn can_move_to_deck(_card: &Card) -> bool {
    false
}
