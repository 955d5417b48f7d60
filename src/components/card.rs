// src/components/card.rs

// serde を使う宣言！カード情報を JSON スナップショットにして JS 側に渡すときに使うよ！
use serde::{Deserialize, Serialize};

use crate::components::position::{Bounds, Position};
use crate::config::layout::{EASE, FLIP_SPEED};

/// カードのスート（マーク）を表す列挙型だよ！♠️♦️♣️❤️
///
/// 並び順は Foundation の並び順と同じにしてあるよ。0: Spade, 1: Diamond, 2: Club, 3: Heart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spade,
    Diamond,
    Club,
    Heart,
}

impl Suit {
    /// 描画用のグリフ。
    pub fn symbol(self) -> &'static str {
        match self {
            Suit::Spade => "♠",
            Suit::Diamond => "♦",
            Suit::Club => "♣",
            Suit::Heart => "♥",
        }
    }

    pub fn color(self) -> CardColor {
        CardColor::from_suit(self)
    }
}

/// カードの色（赤か黒か）だよ。場札のルールで使う！
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum CardColor {
    Red,
    Black,
}

impl CardColor {
    /// スートからカードの色を取得する関数。
    pub fn from_suit(suit: Suit) -> Self {
        match suit {
            Suit::Heart | Suit::Diamond => CardColor::Red,
            Suit::Club | Suit::Spade => CardColor::Black,
        }
    }
}

/// カードのランク（数字）を表す列挙型だよ！ A, 2, 3, ..., K
///
/// PartialOrd, Ord も付けて、ランクの大小比較 (`<`, `>`) ができるようにしてるよ👍
/// 数値は Ace = 0 から King = 12 まで。`index()` で取り出せる！
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace = 0,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    pub fn index(self) -> u8 {
        self as u8
    }

    /// 隣のランクを数値で比べるためのヘルパー。`next.is_one_above(prev)` みたいに使う。
    pub fn is_one_above(self, other: Rank) -> bool {
        self.index() == other.index() + 1
    }

    pub fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

/// 全スートの配列。デッキ生成で使うよ！
pub const ALL_SUITS: [Suit; 4] = [Suit::Spade, Suit::Diamond, Suit::Club, Suit::Heart];

/// 全ランクの配列 (A から K まで)。
pub const ALL_RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

/// カードの裏返しアニメーションの状態だよ🔄
///
/// `amount` は左右から削る幅 (px)。0 → width/2 まで増えて、そこで絵柄が入れ替わって、
/// また 0 まで戻ったら終わり！フレームごとに固定量 (`FLIP_SPEED`) だけ進むよ。
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FlipAnimation {
    pub active: bool,
    pub direction: i32,
    pub amount: i32,
}

impl FlipAnimation {
    fn start(&mut self) {
        self.active = true;
        self.direction = FLIP_SPEED;
    }
}

/// カードそのものだよ！🃏
///
/// - `suit` / `rank`: 変わらないカードの正体
/// - `is_face_up`: ルール上の表裏。裏返しをお願いした瞬間に切り替わる
/// - `showing_face`: 描画上の表裏。アニメーションの折り返し地点で切り替わる
/// - `position` → `target` に向かって毎フレームなめらかに動く
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    pub is_face_up: bool,
    pub showing_face: bool,
    pub picked_up: bool,
    pub highlighted: bool,
    pub position: Position,
    pub target: Position,
    pub width: f32,
    pub height: f32,
    pub flip: FlipAnimation,
}

impl Card {
    /// 新しいカードを裏向きで作るよ。位置は原点、サイズはレイアウトから渡してね。
    pub fn new(suit: Suit, rank: Rank, width: f32, height: f32) -> Self {
        Self {
            suit,
            rank,
            is_face_up: false,
            showing_face: false,
            picked_up: false,
            highlighted: false,
            position: Position::default(),
            target: Position::default(),
            width,
            height,
            flip: FlipAnimation::default(),
        }
    }

    pub fn color(&self) -> CardColor {
        self.suit.color()
    }

    /// カードの当たり判定用の箱📦
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.position.x, self.position.y, self.width, self.height)
    }

    pub fn contains(&self, point: Position) -> bool {
        self.bounds().contains(point)
    }

    /// 表向きにする。もう表ならなにもしない！
    pub fn flip_up(&mut self) {
        if !self.is_face_up {
            self.is_face_up = true;
            self.flip.start();
        }
    }

    /// 裏向きにする。もう裏ならなにもしない！
    pub fn flip_down(&mut self) {
        if self.is_face_up {
            self.is_face_up = false;
            self.flip.start();
        }
    }

    /// セットアップ用。アニメーションなしで即座に表にするよ。
    pub fn reveal_immediately(&mut self) {
        self.is_face_up = true;
        self.showing_face = true;
        self.flip = FlipAnimation::default();
    }

    /// 1フレーム分カードを進めるよ！
    ///
    /// `delta` は 60fps を 1.0 とした正規化済みのフレーム時間。
    /// `hover` はポインタがこのカードに乗っているかどうか (拾われてたら無視)。
    pub fn update(&mut self, delta: f32, hover: bool) {
        if !self.picked_up {
            self.highlighted = hover;
        }

        self.step_flip();

        let step = delta.min(1.0) * EASE;
        self.position = self.position + (self.target - self.position) * step;
    }

    fn step_flip(&mut self) {
        if !self.flip.active {
            self.flip.amount = 0;
            return;
        }

        // 折り返し地点！ここで見た目の表裏を入れ替える
        if self.flip.amount as f32 >= self.width / 2.0 {
            self.showing_face = self.is_face_up;
            self.flip.direction = -FLIP_SPEED;
        }

        self.flip.amount += self.flip.direction;

        if self.flip.amount <= 0 {
            self.flip = FlipAnimation::default();
            self.showing_face = self.is_face_up;
        }
    }

    /// 描画時の幅 (裏返し中は細くなる)
    pub fn visible_width(&self) -> f32 {
        (self.width - (self.flip.amount * 2) as f32).max(0.0)
    }
}
