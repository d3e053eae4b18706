use crate::constants::{WHEEL_ZOOM_MAX_FACTOR, WHEEL_ZOOM_MIN_FACTOR, WHEEL_ZOOM_PER_PX};
use crate::input::{self, GestureTracker};
use globe_core::picking::TouchPoints;
use globe_core::{Command, GlobeEngine, PointerEvent};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub engine: Rc<RefCell<GlobeEngine>>,
    pub gestures: Rc<RefCell<GestureTracker>>,
}

impl InputWiring {
    /// Client coordinates relative to the canvas, in CSS pixels.
    fn canvas_point(&self, client_x: i32, client_y: i32) -> Vec2 {
        let rect = self.canvas.get_bounding_client_rect();
        input::client_to_canvas(
            Vec2::new(client_x as f32, client_y as f32),
            rect.left() as f32,
            rect.top() as f32,
        )
    }

    fn touch_points(&self, list: &web::TouchList) -> TouchPoints {
        (0..list.length())
            .filter_map(|i| list.item(i))
            .map(|t| self.canvas_point(t.client_x(), t.client_y()))
            .collect()
    }

    fn submit(&self, command: Command) {
        self.engine.borrow_mut().submit(command);
    }
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
    wire_click(&w);
    wire_wheel(&w);
    wire_touch(&w);
}

fn listen<E: wasm_bindgen::convert::FromWasmAbi + 'static>(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnMut(E) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerdown(w: &InputWiring) {
    let w2 = w.clone();
    listen(&w.canvas, "pointerdown", move |ev: web::PointerEvent| {
        let at = w2.canvas_point(ev.client_x(), ev.client_y());
        w2.gestures.borrow_mut().press(at);
        _ = w2.canvas.set_pointer_capture(ev.pointer_id());
    });
}

fn wire_pointermove(w: &InputWiring) {
    let w2 = w.clone();
    listen(&w.canvas, "pointermove", move |ev: web::PointerEvent| {
        let at = w2.canvas_point(ev.client_x(), ev.client_y());
        let delta = w2.gestures.borrow_mut().drag_to(at);
        if let Some(delta) = delta {
            w2.submit(Command::Orbit(delta));
        }
    });
}

fn wire_pointerup(w: &InputWiring) {
    for event in ["pointerup", "pointercancel"] {
        let w2 = w.clone();
        listen(&w.canvas, event, move |ev: web::PointerEvent| {
            w2.gestures.borrow_mut().release();
            _ = w2.canvas.release_pointer_capture(ev.pointer_id());
        });
    }
}

fn wire_click(w: &InputWiring) {
    let w2 = w.clone();
    listen(&w.canvas, "click", move |ev: web::MouseEvent| {
        if !w2.gestures.borrow().was_tap() {
            return;
        }
        let client = w2.canvas_point(ev.client_x(), ev.client_y());
        w2.submit(Command::Pick(PointerEvent::Click { client }));
    });
}

fn wire_wheel(w: &InputWiring) {
    let w2 = w.clone();
    listen(&w.canvas, "wheel", move |ev: web::WheelEvent| {
        let factor = input::wheel_zoom_factor(
            ev.delta_y() as f32,
            WHEEL_ZOOM_PER_PX,
            WHEEL_ZOOM_MIN_FACTOR,
            WHEEL_ZOOM_MAX_FACTOR,
        );
        w2.submit(Command::Zoom(factor));
        ev.prevent_default();
    });
}

fn wire_touch(w: &InputWiring) {
    let w_start = w.clone();
    listen(&w.canvas, "touchstart", move |ev: web::TouchEvent| {
        let touches = w_start.touch_points(&ev.touches());
        if let [a, b, ..] = touches.as_slice() {
            w_start.gestures.borrow_mut().pinch_start(*a, *b);
        }
    });

    let w_move = w.clone();
    listen(&w.canvas, "touchmove", move |ev: web::TouchEvent| {
        let touches = w_move.touch_points(&ev.touches());
        if let [a, b, ..] = touches.as_slice() {
            let factor = w_move.gestures.borrow_mut().pinch_to(*a, *b);
            if let Some(factor) = factor {
                w_move.submit(Command::Zoom(factor));
            }
        }
        ev.prevent_default();
    });

    let w_end = w.clone();
    listen(&w.canvas, "touchend", move |ev: web::TouchEvent| {
        let touches = w_end.touch_points(&ev.touches());
        let changed = w_end.touch_points(&ev.changed_touches());
        let tap = {
            let mut gestures = w_end.gestures.borrow_mut();
            if touches.len() < 2 {
                gestures.pinch_end();
            }
            if touches.is_empty() {
                gestures.release();
            }
            gestures.was_tap()
        };
        if tap {
            w_end.submit(Command::Pick(PointerEvent::TouchEnd { touches, changed }));
        }
        // no synthetic click after a touch; the pick above already ran
        ev.prevent_default();
    });
}
