pub mod keyboard;
pub mod pointer;

pub use keyboard::wire_global_keydown;
pub use pointer::wire_input_handlers;

use crate::surface::DomSurface;
use powers_core::{Gesture, TraversalController};
use std::cell::RefCell;
use std::rc::Rc;

/// Shared handles captured by every event closure.
#[derive(Clone)]
pub struct Wiring {
    pub controller: Rc<RefCell<TraversalController>>,
    pub surface: Rc<DomSurface>,
}

impl Wiring {
    /// Run a gesture through the controller and render the result.
    pub fn dispatch(&self, gesture: Gesture) {
        let effects = self.controller.borrow_mut().handle(gesture);
        self.surface.apply(&effects);
    }
}
