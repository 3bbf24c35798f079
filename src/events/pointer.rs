use super::Wiring;
use crate::dom;
use crate::input;
use powers_core::{Gesture, HelpTopic};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_input_handlers(w: Wiring) {
    wire_click(&w);
    wire_wheel(&w);
    wire_help_buttons(&w);
    wire_button_hover(&w);
}

fn wire_click(w: &Wiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        if let Some(gesture) = input::gesture_for_click(ev.button()) {
            w.dispatch(gesture);
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_wheel(w: &Wiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        ev.prevent_default();
        let direction = input::direction_for_wheel(ev.delta_y());
        w.dispatch(Gesture::Traverse(direction));
    }) as Box<dyn FnMut(_)>);

    // Non-passive so prevent_default can stop the page from scrolling.
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback_and_add_event_listener_options(
            "wheel",
            closure.as_ref().unchecked_ref(),
            &opts,
        );
    }
    closure.forget();
}

fn wire_help_buttons(w: &Wiring) {
    let topics = [
        (w.surface.about_button.clone(), HelpTopic::About),
        (w.surface.navigate_button.clone(), HelpTopic::Navigate),
    ];
    for (button, topic) in topics {
        let w = w.clone();
        dom::add_click_listener(&button, move || {
            log::info!("[click] help {:?}", topic);
            w.dispatch(Gesture::ToggleHelp(topic));
        });
    }
}

// Hover colors come from the controller's current theme when the event fires,
// so these listeners are wired once and never rebound.
fn wire_button_hover(w: &Wiring) {
    for button in w.surface.buttons() {
        for (event, hovered) in [("mouseover", true), ("mouseout", false)] {
            let w = w.clone();
            let target = button.clone();
            let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
                let styles = w.controller.borrow().styles();
                w.surface.paint_button(&target, &styles, hovered);
            }) as Box<dyn FnMut()>);
            _ = button.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}
