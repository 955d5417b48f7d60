// src/components/card_space.rs

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::components::card::{Card, Suit};
use crate::components::position::{Bounds, Position};
use crate::components::stack::StackType;
use crate::config::layout::{HAND_FAN_OFFSET, TABLEAU_MAX_OFFSET, TABLEAU_MIN_OFFSET};
use crate::logic::rules;

/// ゾーンの種類ごとのふるまい (置けるかどうかの判定と並べ方) を切り替えるタグだよ🏷️
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpaceKind {
    /// 組札。自分のスートを A から順番に積む
    Foundation { suit: Suit },
    /// 山札からめくったカード。最大 3 枚を扇状に見せる
    Hand,
    /// 裏向きの山札
    Deck,
    /// 場札の列
    Tableau,
}

/// カードを置く場所 (ゾーン) だよ！🗂️
///
/// `cards` は下から上の順番。最後の要素が一番上 (top) のカード！
/// 組札・手札・山札・場札、どれもこの構造体 1 つで表して、違いは `kind` で切り替えるよ。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardSpace {
    pub stack_type: StackType,
    pub kind: SpaceKind,
    /// ゾーンの箱 (アンカー位置 + カード 1 枚分のサイズ)
    pub bounds: Bounds,
    pub cards: Vec<Card>,
    /// ポインタがゾーンの箱の上にあるかどうか
    pub highlight: bool,
    /// 場札のみ: ポインタが列 (箱かどれかのカード) の上にあるか
    pub hover: bool,
}

impl CardSpace {
    fn new(stack_type: StackType, kind: SpaceKind, bounds: Bounds) -> Self {
        Self {
            stack_type,
            kind,
            bounds,
            cards: Vec::new(),
            highlight: false,
            hover: false,
        }
    }

    pub fn foundation(index: u8, suit: Suit, bounds: Bounds) -> Self {
        Self::new(StackType::Foundation(index), SpaceKind::Foundation { suit }, bounds)
    }

    pub fn hand(bounds: Bounds) -> Self {
        Self::new(StackType::Hand, SpaceKind::Hand, bounds)
    }

    pub fn deck(bounds: Bounds) -> Self {
        Self::new(StackType::Deck, SpaceKind::Deck, bounds)
    }

    pub fn tableau(index: u8, bounds: Bounds) -> Self {
        Self::new(StackType::Tableau(index), SpaceKind::Tableau, bounds)
    }

    /// ゾーンの左上。カードはここを基準に並ぶよ📍
    pub fn anchor(&self) -> Position {
        self.bounds.origin()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn top_card(&self) -> Option<&Card> {
        self.cards.last()
    }

    // --- 置く ---

    /// セットアップ用。アニメーションなしでアンカーにぴったり置くよ。
    pub fn put(&mut self, mut card: Card) {
        let anchor = self.anchor();
        card.position = anchor;
        card.target = anchor;
        self.cards.push(card);
    }

    pub fn put_all(&mut self, cards: impl IntoIterator<Item = Card>) {
        for card in cards {
            self.put(card);
        }
    }

    /// ゲーム中に置くとき用。カードは今の位置からアンカーに向かってスーッと動く🏃
    ///
    /// 置けるかどうか (`accepts`) は呼ぶ側でチェックしてね。
    /// 手札と山札の間の移動だけはチェックなしで呼ぶよ。
    pub fn place(&mut self, mut card: Card) {
        card.target = self.anchor();
        card.picked_up = false;
        self.cards.push(card);
    }

    /// 順番を保ったまま全部置く。
    pub fn place_all(&mut self, cards: impl IntoIterator<Item = Card>) {
        for card in cards {
            self.place(card);
        }
    }

    // --- 取る ---

    /// 一番上のカードを取るよ。空なら None。
    /// `pick_up` が true なら「持ち上げ中」の印をつける。
    pub fn take_top(&mut self, pick_up: bool) -> Option<Card> {
        let mut card = self.cards.pop()?;
        if pick_up {
            card.picked_up = true;
        }
        Some(card)
    }

    /// 一番上から見ていって、最初に `point` に当たったカードのインデックスを返すよ🎯
    pub fn card_at(&self, point: Position) -> Option<usize> {
        self.cards.iter().rposition(|card| card.contains(point))
    }

    /// `point` で触ったカードから上を全部まとめて取るよ！
    ///
    /// 当たったのが裏向きのカードなら何も取らない (裏のカードは掴めない)。
    /// 返り値は下から上の順番のまま。
    pub fn take_at(&mut self, point: Position) -> Vec<Card> {
        let Some(index) = self.card_at(point) else {
            return Vec::new();
        };
        if !self.cards[index].is_face_up {
            debug!("{:?}: 裏向きのカードは取れません (index {})", self.stack_type, index);
            return Vec::new();
        }

        let mut taken = self.cards.split_off(index);
        for card in taken.iter_mut() {
            card.picked_up = true;
        }
        debug!("{:?}: {} 枚取りました", self.stack_type, taken.len());
        taken
    }

    /// `point` がゾーンの箱か、どれかのカードの上にあるか。
    pub fn in_all(&self, point: Position) -> bool {
        self.card_at(point).is_some() || self.bounds.contains(point)
    }

    // --- ルール ---

    /// このゾーンの一番上に `card` を置けるかどうか。状態は変えないよ！
    pub fn accepts(&self, card: &Card) -> bool {
        match self.kind {
            SpaceKind::Foundation { suit } => {
                rules::can_move_to_foundation(suit, self.top_card(), card)
            }
            SpaceKind::Tableau => rules::can_move_to_tableau(self.top_card(), card),
            SpaceKind::Hand => rules::can_move_to_hand(card),
            SpaceKind::Deck => rules::can_move_to_deck(card),
        }
    }

    /// 一番上のカードを表にする。裏返した場合は true。
    pub fn flip_top_card(&mut self) -> bool {
        match self.cards.last_mut() {
            Some(card) if !card.is_face_up => {
                card.flip_up();
                true
            }
            _ => false,
        }
    }

    /// 並びをシャッフルするよ (R キー用)🎲
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    // --- 毎フレームの更新 ---

    /// レイアウト (target の計算) とホバー判定をして、全カードを 1 フレーム進めるよ。
    pub fn update(&mut self, delta: f32, pointer: Position) {
        self.highlight = self.bounds.contains(pointer);

        let hovered = self.hover_flags(pointer);
        self.layout_targets();

        for (card, hover) in self.cards.iter_mut().zip(hovered) {
            card.update(delta, hover);
        }
    }

    /// カードごとのハイライトを決める。
    /// 場札は触ったカードから上をまとめて光らせる✨
    fn hover_flags(&mut self, pointer: Position) -> Vec<bool> {
        match self.kind {
            SpaceKind::Tableau => {
                self.hover = self.in_all(pointer);
                let hit = if self.hover { self.card_at(pointer) } else { None };
                (0..self.cards.len())
                    .map(|j| hit.map_or(false, |i| j >= i))
                    .collect()
            }
            _ => self.cards.iter().map(|card| card.contains(pointer)).collect(),
        }
    }

    fn layout_targets(&mut self) {
        let anchor = self.anchor();
        match self.kind {
            SpaceKind::Tableau => {
                let mut offset = 0.0;
                for card in self.cards.iter_mut() {
                    card.target = Position::new(anchor.x, anchor.y + offset);
                    offset += if card.is_face_up && self.hover {
                        TABLEAU_MAX_OFFSET
                    } else {
                        TABLEAU_MIN_OFFSET
                    };
                }
            }
            SpaceKind::Hand => {
                for card in self.cards.iter_mut() {
                    card.target = anchor;
                }
                let n = self.cards.len();
                if n == 2 {
                    self.cards[1].target = Position::new(anchor.x + HAND_FAN_OFFSET, anchor.y);
                } else if n >= 3 {
                    self.cards[n - 1].target =
                        Position::new(anchor.x + HAND_FAN_OFFSET * 2.0, anchor.y);
                    self.cards[n - 2].target = Position::new(anchor.x + HAND_FAN_OFFSET, anchor.y);
                }
            }
            // 組札と山札は重ねるだけ
            SpaceKind::Foundation { .. } | SpaceKind::Deck => {}
        }
    }
}
