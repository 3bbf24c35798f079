use super::Wiring;
use crate::input;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, wiring: &Wiring) {
    let Some(gesture) = input::gesture_for_key(&ev.key(), &ev.code()) else {
        return;
    };
    if input::suppresses_default(gesture) {
        ev.prevent_default();
    }
    log::debug!("[keys] {:?}", gesture);
    wiring.dispatch(gesture);
}

pub fn wire_global_keydown(wiring: Wiring) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &wiring);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
