#![cfg(target_arch = "wasm32")]
use powers_core::{validate_catalog, TraversalController, ZoomConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod constants;
mod dom;
mod events;
mod input;
mod overlay;
mod surface;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("powers-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    validate_catalog()?;
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let surface = Rc::new(surface::DomSurface::from_document(&document)?);
    let controller = Rc::new(RefCell::new(TraversalController::new(ZoomConfig::default())?));

    let boot = controller.borrow_mut().boot();
    surface.apply(&boot);

    let wiring = events::Wiring {
        controller,
        surface,
    };
    events::wire_global_keydown(wiring.clone());
    events::wire_input_handlers(wiring);
    Ok(())
}
