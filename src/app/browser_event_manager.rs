// src/app/browser_event_manager.rs
//! Handles attaching and detaching browser event listeners (mouse and keyboard).
//!
//! リスナーは `InputState` に書き込むだけ。ゲームの状態には触らないよ。
//! 実際の処理は次の `GameApp::tick` で `GameSession::update` がやる。

use std::sync::{Arc, Mutex, MutexGuard};

use log::{debug, error, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Event, EventTarget, HtmlCanvasElement, KeyboardEvent, MouseEvent};

use crate::app::input_state::{GameKey, InputState, MouseButton};
use crate::components::position::Position;

/// 付けたリスナー 1 つ分。外すときに同じ target と closure が必要なので一緒に持っておく。
pub struct ListenerHandle {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

pub type ListenerStore = Arc<Mutex<Vec<ListenerHandle>>>;

/// 毒されたロックでも中身を取り出して続けるよ (入力が 1 フレーム分おかしくなるだけ)
fn lock_input(input: &Mutex<InputState>) -> MutexGuard<'_, InputState> {
    match input.lock() {
        Ok(guard) => guard,
        Err(poisoned) => {
            warn!("InputState mutex was poisoned! Recovering.");
            poisoned.into_inner()
        }
    }
}

/// Canvas の左上を原点にした座標に変換する。CSS で拡大縮小されててもズレないようにするよ📐
fn canvas_point(canvas: &HtmlCanvasElement, event: &MouseEvent) -> Position {
    let rect = canvas.get_bounding_client_rect();
    let scale_x = if rect.width() > 0.0 { canvas.width() as f64 / rect.width() } else { 1.0 };
    let scale_y = if rect.height() > 0.0 { canvas.height() as f64 / rect.height() } else { 1.0 };
    Position::new(
        ((event.client_x() as f64 - rect.left()) * scale_x) as f32,
        ((event.client_y() as f64 - rect.top()) * scale_y) as f32,
    )
}

fn attach(
    store: &ListenerStore,
    target: EventTarget,
    event: &'static str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    debug!("  Attached {} listener.", event);

    let mut handles = match store.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    handles.push(ListenerHandle { target, event, closure });
    Ok(())
}

/// マウスのリスナー (mousedown / mousemove / mouseup / contextmenu) と
/// キーボードのリスナー (keydown) を付ける。
///
/// mousemove と mouseup は window に付けるから、Canvas の外で離してもちゃんと届くよ。
pub fn attach_input_listeners(
    canvas: &HtmlCanvasElement,
    input: Arc<Mutex<InputState>>,
    store: &ListenerStore,
) -> Result<(), JsValue> {
    let window = window().ok_or("Failed to get window")?;
    let canvas_target: EventTarget = canvas.clone().into();
    let window_target: EventTarget = window.into();

    // --- MouseDown Listener ---
    {
        let input = Arc::clone(&input);
        let canvas = canvas.clone();
        attach(store, canvas_target.clone(), "mousedown", move |event: Event| {
            let Ok(mouse_event) = event.dyn_into::<MouseEvent>() else {
                error!("Failed to cast event to MouseEvent in mousedown listener");
                return;
            };
            if let Some(button) = MouseButton::from_dom_button(mouse_event.button()) {
                let point = canvas_point(&canvas, &mouse_event);
                lock_input(&input).press(button, point);
            }
        })?;
    }

    // --- MouseMove Listener ---
    {
        let input = Arc::clone(&input);
        let canvas = canvas.clone();
        attach(store, window_target.clone(), "mousemove", move |event: Event| {
            if let Ok(mouse_event) = event.dyn_into::<MouseEvent>() {
                let point = canvas_point(&canvas, &mouse_event);
                lock_input(&input).move_pointer(point);
            }
        })?;
    }

    // --- MouseUp Listener ---
    {
        let input = Arc::clone(&input);
        let canvas = canvas.clone();
        attach(store, window_target.clone(), "mouseup", move |event: Event| {
            let Ok(mouse_event) = event.dyn_into::<MouseEvent>() else {
                error!("Failed to cast event to MouseEvent in mouseup listener");
                return;
            };
            if let Some(button) = MouseButton::from_dom_button(mouse_event.button()) {
                let point = canvas_point(&canvas, &mouse_event);
                lock_input(&input).release(button, point);
            }
        })?;
    }

    // 右クリックでブラウザのメニューが出ないようにする
    attach(store, canvas_target, "contextmenu", |event: Event| {
        event.prevent_default();
    })?;

    // --- KeyDown Listener ---
    {
        let input = Arc::clone(&input);
        attach(store, window_target, "keydown", move |event: Event| {
            if let Ok(key_event) = event.dyn_into::<KeyboardEvent>() {
                if let Some(key) = GameKey::from_key_name(&key_event.key()) {
                    lock_input(&input).key_down(key);
                }
            }
        })?;
    }

    Ok(())
}

/// 付けたリスナーを全部外す。closure はここで drop されるよ。
pub fn detach_input_listeners(store: &ListenerStore) -> Result<(), JsValue> {
    let mut handles = match store.lock() {
        Ok(guard) => guard,
        Err(poisoned) => {
            warn!("Listener store mutex was poisoned! Recovering.");
            poisoned.into_inner()
        }
    };

    for handle in handles.drain(..) {
        handle
            .target
            .remove_event_listener_with_callback(handle.event, handle.closure.as_ref().unchecked_ref())?;
        debug!("  Detached {} listener.", handle.event);
    }
    Ok(())
}
