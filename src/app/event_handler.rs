// src/app/event_handler.rs
//! クリック判定と、右クリックの「おまかせ移動」のロジック。

use log::{debug, info};

use crate::app::stock_handler;
use crate::components::position::Position;
use crate::components::stack::StackType;
use crate::logic::auto_move::{find_automatic_foundation_move, find_automatic_tableau_move};
use crate::systems::dealer_system::DealerSystem;
use crate::world::World;

// --- クリック判定ロジック ---

/// クリックされた要素の種類を表す Enum だよ！
/// カードがクリックされたのか、それともゾーンの空きスペースがクリックされたのかを示すんだ。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// カードがクリックされた場合。どのゾーンの何枚目か (下から数えて) を持つよ。
    Card { stack: StackType, index: usize },
    /// ゾーンの空きエリアがクリックされた場合。
    Stack(StackType),
}

impl ClickTarget {
    pub fn stack_type(self) -> StackType {
        match self {
            ClickTarget::Card { stack, .. } => stack,
            ClickTarget::Stack(stack) => stack,
        }
    }

    fn resolve(world: &World, stack: StackType, point: Position) -> Self {
        match world.space(stack).and_then(|space| space.card_at(point)) {
            Some(index) => ClickTarget::Card { stack, index },
            None => ClickTarget::Stack(stack),
        }
    }
}

/// クリックされた座標がどのゾーンに当たったかを、優先順で判定する関数だよ！🎯
///
/// 1. 組札: ゾーンの箱の中 (空でもヒット扱い。そこで処理は打ち切り)
/// 2. 手札: 空じゃなくて、箱か扇状に広がったカードの上
/// 3. 山札: ゾーンの箱の中
/// 4. 場札: 箱か、下に伸びたカードの上
///
/// どれにも当たらなければ `None` (背景をクリックした)。
pub fn find_clicked_element(world: &World, point: Position) -> Option<ClickTarget> {
    let stack = world
        .foundations
        .iter()
        .find(|space| space.bounds.contains(point))
        .map(|space| space.stack_type)
        .or_else(|| (!world.hand.is_empty() && world.hand.in_all(point)).then_some(StackType::Hand))
        .or_else(|| world.deck.bounds.contains(point).then_some(StackType::Deck))
        .or_else(|| {
            world
                .tableaus
                .iter()
                .find(|space| space.in_all(point))
                .map(|space| space.stack_type)
        })?;

    let target = ClickTarget::resolve(world, stack, point);
    debug!("find_clicked_element({:?}) -> {:?}", point, target);
    Some(target)
}

/// めくり途中は山札と手札が Dealer のもの。左右どちらのクリックも受け付けない
pub fn is_held_by_dealer(dealer: &DealerSystem, stack: StackType) -> bool {
    dealer.is_busy() && matches!(stack, StackType::Hand | StackType::Deck)
}

// --- 右クリック ---

/// 右クリックの処理だよ🪄
///
/// 持ち上げはしないで、押した瞬間に置ける場所を探して動かすところまで全部やる。
/// カードが動いたら (山札からめくったときも) true を返す。
pub fn handle_secondary_click(world: &mut World, dealer: &mut DealerSystem, point: Position) -> bool {
    let Some(target) = find_clicked_element(world, point) else {
        return false;
    };

    if is_held_by_dealer(dealer, target.stack_type()) {
        debug!("handle_secondary_click: めくり途中なので {:?} は触れません", target.stack_type());
        return false;
    }

    match target.stack_type() {
        stack @ StackType::Foundation(_) => foundation_to_tableau(world, stack),
        StackType::Hand => hand_to_best_place(world),
        StackType::Deck => stock_handler::handle_deck_secondary(world, dealer).counts_as_move(),
        stack @ StackType::Tableau(_) => tableau_to_best_place(world, stack, point),
    }
}

/// 組札の一番上を、置ける最初の場札へ。
fn foundation_to_tableau(world: &mut World, stack: StackType) -> bool {
    let Some(card) = world.space(stack).and_then(|space| space.top_card()) else {
        return false;
    };
    let Some(target) = find_automatic_tableau_move(&world.tableaus, card, None) else {
        debug!("{:?} の一番上を置ける場札はありません", stack);
        return false;
    };

    move_top_card(world, stack, target)
}

/// 手札の一番上を、組札 → 場札の順で置ける場所へ。組札ならキラキラも出す✨
fn hand_to_best_place(world: &mut World) -> bool {
    let Some(card) = world.hand.top_card() else {
        return false;
    };

    if let Some(target) = find_automatic_foundation_move(&world.foundations, card) {
        let moved = move_top_card(world, StackType::Hand, target);
        if moved {
            world.spawn_particles_at(target);
        }
        return moved;
    }
    match find_automatic_tableau_move(&world.tableaus, card, None) {
        Some(target) => move_top_card(world, StackType::Hand, target),
        None => false,
    }
}

/// 場札で触ったカードから上をまとめて取って、置ける場所へ。
///
/// 1 枚だけなら組札を先に探す。ダメなら自分以外の場札。どこにも置けなければそのまま戻す。
fn tableau_to_best_place(world: &mut World, stack: StackType, point: Position) -> bool {
    let Some(origin) = world.space_mut(stack) else {
        return false;
    };
    let cards = origin.take_at(point);
    let Some(first) = cards.first() else {
        return false;
    };

    let foundation_target = if cards.len() == 1 {
        find_automatic_foundation_move(&world.foundations, first)
    } else {
        None
    };
    let target = foundation_target
        .or_else(|| find_automatic_tableau_move(&world.tableaus, first, Some(stack)));

    let Some(target) = target else {
        // どこにも置けない。取ったカードを元の列に戻す
        if let Some(origin) = world.space_mut(stack) {
            origin.place_all(cards);
        }
        return false;
    };

    info!("右クリック: {:?} から {} 枚を {:?} へ", stack, cards.len(), target);
    if let Some(space) = world.space_mut(target) {
        space.place_all(cards);
    }
    if let Some(origin) = world.space_mut(stack) {
        origin.flip_top_card();
    }
    if target.is_foundation() {
        world.spawn_particles_at(target);
    }
    world.game_state.record_move();
    true
}

/// `from` の一番上を `to` に動かして 1 手数える。
fn move_top_card(world: &mut World, from: StackType, to: StackType) -> bool {
    let Some(card) = world.space_mut(from).and_then(|space| space.take_top(true)) else {
        return false;
    };
    info!("右クリック: {:?} {:?} を {:?} から {:?} へ", card.rank, card.suit, from, to);
    match world.space_mut(to) {
        Some(space) => space.place(card),
        None => {
            // 行き先がないなら元に戻す
            if let Some(space) = world.space_mut(from) {
                space.place(card);
            }
            return false;
        }
    }
    world.game_state.record_move();
    true
}
