// src/app/renderer.rs
//! GameApp の描画関連ロジック。
//!
//! `GameSession` を読むだけで、状態は一切変えないよ。画像は使わずに図形と文字だけで描く！

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::app::game_session::GameSession;
use crate::components::card::{Card, CardColor};
use crate::components::card_space::{CardSpace, SpaceKind};
use crate::components::particle::Particle;
use crate::components::position::Bounds;

const FELT: &str = "#1b6b35";
const CARD_FACE: &str = "#ffffff";
const CARD_BACK: &str = "#8b1e2d";
const OUTLINE: &str = "#000000";
const RED: &str = "rgb(200, 0, 0)";
const BLACK: &str = "rgb(0, 0, 0)";
const CORNER_RADIUS: f64 = 10.0;
const PARTICLE_SIZE: f64 = 30.0;

// --- 公開関数 (GameApp から呼び出される) ---

/// Canvas に 1 フレーム分のゲーム画面を描画する関数。
///
/// 描く順番: 背景 → ヘッダー → 場札 → 組札 → 山札 → 手札 → 持ち上げ中 → パーティクル → 勝利画面
pub fn render_game(
    session: &GameSession,
    context: &CanvasRenderingContext2d,
    width: f64,
    height: f64,
) -> Result<(), JsValue> {
    let world = session.world();

    context.clear_rect(0.0, 0.0, width, height);
    context.set_fill_style_str(FELT);
    context.fill_rect(0.0, 0.0, width, height);

    draw_header(session, context)?;

    for space in world.tableaus.iter() {
        draw_space(context, space)?;
    }
    for space in world.foundations.iter() {
        draw_space(context, space)?;
    }
    draw_space(context, &world.deck)?;
    draw_space(context, &world.hand)?;

    for card in session.held_cards() {
        draw_card(context, card)?;
    }
    for particle in world.particles.iter() {
        draw_particle(context, particle)?;
    }

    if session.is_victory() {
        draw_victory(context, width, height)?;
    }
    Ok(())
}

fn draw_header(session: &GameSession, context: &CanvasRenderingContext2d) -> Result<(), JsValue> {
    let world = session.world();
    let header = world.layout.header_bounds();
    let y = (header.y + header.height / 2.0) as f64;

    context.set_font("bold 40px monospace");
    context.set_fill_style_str("#ffffff");
    context.set_text_baseline("middle");
    context.set_text_align("left");
    context.fill_text(
        &format!("Moves: {}", world.game_state.moves),
        (header.width * 0.1) as f64,
        y,
    )?;
    context.set_text_align("right");
    context.fill_text(
        &format!("Time: {}", world.game_state.time_label()),
        (header.width * 0.9) as f64,
        y,
    )?;
    Ok(())
}

/// ゾーンの枠 (ホバー中は白っぽく光る) と、その上のカードを下から順に描く。
fn draw_space(context: &CanvasRenderingContext2d, space: &CardSpace) -> Result<(), JsValue> {
    let b = space.bounds;
    let (x, y, w, h) = (b.x as f64, b.y as f64, b.width as f64, b.height as f64);

    if space.highlight {
        context.set_fill_style_str("rgba(255, 255, 255, 0.2)");
        rounded_rect(context, x, y, w, h, CORNER_RADIUS)?;
        context.fill();
    }
    context.set_stroke_style_str("rgba(0, 0, 0, 0.5)");
    context.set_line_width(2.0);
    rounded_rect(context, x, y, w, h, CORNER_RADIUS)?;
    context.stroke();

    match space.kind {
        SpaceKind::Foundation { suit } if space.is_empty() => {
            draw_glyph(context, suit.symbol(), b, "rgba(0, 0, 0, 0.35)", 60.0)?;
        }
        _ => {}
    }

    for card in space.cards.iter() {
        draw_card(context, card)?;
    }

    // 山札のアイコンはカードの上に半透明で。ポインタが乗ってる間は消す
    if space.kind == SpaceKind::Deck && !space.highlight {
        draw_glyph(context, "↻", b, "rgba(255, 255, 255, 0.5)", 80.0)?;
    }
    Ok(())
}

fn draw_card(context: &CanvasRenderingContext2d, card: &Card) -> Result<(), JsValue> {
    let visible = card.visible_width() as f64;
    if visible <= 0.0 {
        return Ok(());
    }
    let h = card.height as f64;
    // 裏返し中は真ん中を軸に細くなる
    let x = card.position.x as f64 + (card.width as f64 - visible) / 2.0;
    let y = card.position.y as f64;

    if card.picked_up {
        context.set_fill_style_str("rgba(0, 0, 0, 0.4)");
        rounded_rect(context, x + 8.0, y + 8.0, visible, h, CORNER_RADIUS)?;
        context.fill();
    }

    if card.showing_face {
        context.set_fill_style_str(CARD_FACE);
        rounded_rect(context, x, y, visible, h, CORNER_RADIUS)?;
        context.fill();

        let color = match card.color() {
            CardColor::Red => RED,
            CardColor::Black => BLACK,
        };
        if visible > card.width as f64 * 0.5 {
            context.set_fill_style_str(color);
            context.set_font("bold 35px sans-serif");
            context.set_text_baseline("top");
            context.set_text_align("left");
            context.fill_text(card.rank.label(), x + 10.0, y + 8.0)?;
            context.set_text_align("right");
            context.fill_text(card.suit.symbol(), x + visible - 8.0, y + 8.0)?;
            context.set_text_baseline("bottom");
            context.fill_text(card.rank.label(), x + visible - 10.0, y + h - 8.0)?;
            context.set_text_align("left");
            context.fill_text(card.suit.symbol(), x + 8.0, y + h - 8.0)?;
        }
    } else {
        context.set_fill_style_str(CARD_BACK);
        rounded_rect(context, x, y, visible, h, CORNER_RADIUS)?;
        context.fill();
        context.set_stroke_style_str("#ffffff");
        context.set_line_width(2.0);
        rounded_rect(context, x + 4.0, y + 4.0, (visible - 8.0).max(0.0), h - 8.0, CORNER_RADIUS)?;
        context.stroke();
    }

    context.set_stroke_style_str(OUTLINE);
    context.set_line_width(1.0);
    rounded_rect(context, x, y, visible, h, CORNER_RADIUS)?;
    context.stroke();

    if card.highlighted {
        context.set_fill_style_str("rgba(255, 255, 255, 0.4)");
        rounded_rect(context, x, y, visible, h, CORNER_RADIUS)?;
        context.fill();
    }
    Ok(())
}

fn draw_particle(context: &CanvasRenderingContext2d, particle: &Particle) -> Result<(), JsValue> {
    let color = match particle.suit.color() {
        CardColor::Red => RED,
        CardColor::Black => BLACK,
    };
    context.save();
    context.set_global_alpha(particle.alpha.clamp(0.0, 1.0) as f64);
    context.translate(particle.position.x as f64, particle.position.y as f64)?;
    context.rotate(particle.rotation as f64)?;
    context.set_fill_style_str(color);
    context.set_font(&format!("{}px sans-serif", PARTICLE_SIZE));
    context.set_text_align("center");
    context.set_text_baseline("middle");
    context.fill_text(particle.suit.symbol(), 0.0, 0.0)?;
    context.restore();
    Ok(())
}

fn draw_victory(context: &CanvasRenderingContext2d, width: f64, height: f64) -> Result<(), JsValue> {
    context.set_fill_style_str("rgba(0, 0, 0, 0.78)");
    context.fill_rect(0.0, 0.0, width, height);
    context.set_fill_style_str("#ffffff");
    context.set_font("bold 100px monospace");
    context.set_text_align("center");
    context.set_text_baseline("middle");
    context.fill_text("YOU WIN!!!!!", width / 2.0, height / 2.0)
}

/// 箱の真ん中に大きな文字を 1 つ描く (空のゾーンの目印)
fn draw_glyph(
    context: &CanvasRenderingContext2d,
    glyph: &str,
    bounds: Bounds,
    color: &str,
    size: f64,
) -> Result<(), JsValue> {
    let center = bounds.center();
    context.set_fill_style_str(color);
    context.set_font(&format!("{}px sans-serif", size));
    context.set_text_align("center");
    context.set_text_baseline("middle");
    context.fill_text(glyph, center.x as f64, center.y as f64)
}

fn rounded_rect(
    context: &CanvasRenderingContext2d,
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    radius: f64,
) -> Result<(), JsValue> {
    let r = radius.min(w / 2.0).min(h / 2.0).max(0.0);
    context.begin_path();
    context.move_to(x + r, y);
    context.arc_to(x + w, y, x + w, y + h, r)?;
    context.arc_to(x + w, y + h, x, y + h, r)?;
    context.arc_to(x, y + h, x, y, r)?;
    context.arc_to(x, y, x + w, y, r)?;
    context.close_path();
    Ok(())
}
