// src/app/drag_handler.rs
//! 左クリックのドラッグ＆ドロップ (押す → 持ったまま動かす → 離す) の処理。
//!
//! どの関数も今の `InteractionState` を受け取って、次の状態を返すよ。

use log::{debug, info};

use super::drag_apply_handler::{self, DropOutcome};
use crate::app::event_handler::{find_clicked_element, is_held_by_dealer};
use crate::app::stock_handler;
use crate::components::dragging_info::{DraggingInfo, InteractionState};
use crate::components::position::Position;
use crate::components::stack::StackType;
use crate::config::layout::TABLEAU_MAX_OFFSET;
use crate::systems::dealer_system::DealerSystem;
use crate::world::World;

/// 左ボタンを押したときの処理 (何も持ってないときだけ)
///
/// - 組札: 一番上を持ち上げる。空なら何もしないでおしまい
/// - 手札: 一番上を持ち上げる
/// - 山札: めくる or 戻す。持ち上げはしない
/// - 場札: 触ったカードから上をまとめて持ち上げる
///
/// めくり途中は山札と手札を押しても何もしない。
pub fn handle_drag_start(
    world: &mut World,
    dealer: &mut DealerSystem,
    point: Position,
    state: InteractionState,
) -> InteractionState {
    if !state.is_idle() {
        return state;
    }
    let Some(target) = find_clicked_element(world, point) else {
        return InteractionState::Idle;
    };

    let origin = target.stack_type();
    if is_held_by_dealer(dealer, origin) {
        debug!("handle_drag_start: めくり途中なので {:?} は触れません", origin);
        return InteractionState::Idle;
    }
    let cards = match origin {
        StackType::Deck => {
            stock_handler::handle_deck_primary(world, dealer);
            Vec::new()
        }
        StackType::Foundation(_) | StackType::Hand => world
            .space_mut(origin)
            .and_then(|space| space.take_top(true))
            .into_iter()
            .collect(),
        StackType::Tableau(_) => world
            .space_mut(origin)
            .map(|space| space.take_at(point))
            .unwrap_or_default(),
    };

    if cards.is_empty() {
        debug!("handle_drag_start: {:?} からは何も持ち上げませんでした", origin);
        return InteractionState::Idle;
    }

    info!("handle_drag_start: {:?} から {} 枚持ち上げました", origin, cards.len());
    InteractionState::Holding(DraggingInfo { cards, origin })
}

/// ボタンを押したまま動かしてる間、持ってるカードをポインタについてこさせる🖱️
///
/// i 枚目は「ポインタがカードの真ん中に来る位置」から下に i * 35 ずらす。
pub fn update_dragged_position(state: &mut InteractionState, pointer: Position) {
    let cards = state.held_cards_mut();
    let Some(first) = cards.first() else {
        return;
    };
    let grab = Position::new(first.width / 2.0, first.height / 2.0);

    for (i, card) in cards.iter_mut().enumerate() {
        card.target = pointer - grab + Position::new(0.0, i as f32 * TABLEAU_MAX_OFFSET);
    }
}

/// 左ボタンを離したときの処理。持っていたカードを置くか戻すかして、必ず Idle に戻るよ。
pub fn handle_drag_end(
    world: &mut World,
    point: Position,
    state: InteractionState,
) -> (InteractionState, Option<DropOutcome>) {
    match state {
        InteractionState::Idle => (InteractionState::Idle, None),
        InteractionState::Holding(info) => {
            let outcome = drag_apply_handler::apply_drop(world, info, point);
            (InteractionState::Idle, Some(outcome))
        }
    }
}
