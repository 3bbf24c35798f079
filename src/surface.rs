//! DOM side of the controller: applies [`Effect`]s to the page.

use crate::constants::*;
use crate::dom;
use crate::overlay;
use powers_core::{Effect, Rgb, ThemeStyles};
use std::cell::RefCell;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct DomSurface {
    document: web::Document,
    body: web::HtmlElement,
    container: web::HtmlElement,
    object_display: web::HtmlElement,
    traversal_count: web::HtmlElement,
    gesture_log: web::HtmlElement,
    popup: web::HtmlElement,
    pub about_button: web::HtmlElement,
    pub navigate_button: web::HtmlElement,
    current_layer: RefCell<Option<web::HtmlElement>>,
}

impl DomSurface {
    pub fn from_document(document: &web::Document) -> anyhow::Result<Self> {
        let body = document
            .body()
            .ok_or_else(|| anyhow::anyhow!("document has no body"))?;
        Ok(Self {
            document: document.clone(),
            body,
            container: dom::html_element_by_id(document, ZOOM_CONTAINER_ID)?,
            object_display: dom::html_element_by_id(document, OBJECT_DISPLAY_ID)?,
            traversal_count: dom::html_element_by_id(document, TRAVERSAL_COUNT_ID)?,
            gesture_log: dom::html_element_by_id(document, GESTURE_LOG_ID)?,
            popup: dom::html_element_by_id(document, HELP_POPUP_ID)?,
            about_button: dom::html_element_by_id(document, ABOUT_BUTTON_ID)?,
            navigate_button: dom::html_element_by_id(document, NAVIGATE_BUTTON_ID)?,
            current_layer: RefCell::new(None),
        })
    }

    pub fn apply(&self, effects: &[Effect]) {
        for effect in effects {
            if let Err(e) = self.apply_one(effect) {
                log::warn!("[surface] {:?} failed: {:?}", effect, e);
            }
        }
    }

    fn apply_one(&self, effect: &Effect) -> anyhow::Result<()> {
        match effect {
            Effect::SpawnLayer { text, color } => self.spawn_layer(text, *color)?,
            Effect::RetireStaleLayers { delay_ms } => self.retire_stale_layers(*delay_ms),
            Effect::SetZoom(scale) => {
                dom::set_style(&self.container, "transform", &format!("scale({})", scale));
            }
            Effect::SetLayerText(text) => {
                if let Some(layer) = self.current_layer.borrow().as_ref() {
                    layer.set_text_content(Some(text));
                }
            }
            Effect::SetObjectLabel(text) => self.object_display.set_text_content(Some(text)),
            Effect::SetTraversals(n) => self
                .traversal_count
                .set_text_content(Some(&format!("{}{}", TRAVERSAL_COUNT_PREFIX, n))),
            Effect::SetGestureLog(text) => {
                self.gesture_log.set_text_content(Some(text));
                self.gesture_log
                    .set_scroll_top(self.gesture_log.scroll_height());
            }
            Effect::SetButtonLabels { about, navigate } => {
                self.about_button.set_text_content(Some(about));
                self.navigate_button.set_text_content(Some(navigate));
            }
            Effect::ApplyTheme(styles) => self.apply_theme(styles),
            Effect::ShowOverlay(text) => overlay::show(&self.popup, text),
            Effect::HideOverlay => {
                if !overlay::is_hidden(&self.popup) {
                    overlay::hide(&self.popup);
                }
            }
            Effect::SetLogVisible(visible) => {
                let display = if *visible { "block" } else { "none" };
                dom::set_style(&self.gesture_log, "display", display);
            }
        }
        Ok(())
    }

    fn spawn_layer(&self, text: &str, color: Rgb) -> anyhow::Result<()> {
        let layer = self
            .document
            .create_element("div")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .dyn_into::<web::HtmlElement>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        layer.set_class_name(LAYER_CLASS);
        layer.set_text_content(Some(text));
        dom::set_style(&layer, "color", &color.to_hex());
        self.container
            .append_child(&layer)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;

        // Add `visible` on the next frame so the CSS transition runs.
        let fresh = layer.clone();
        dom::request_animation_frame(move || {
            _ = fresh.class_list().add_1(VISIBLE_CLASS);
        });
        if let Some(previous) = self.current_layer.replace(Some(layer)) {
            _ = previous.class_list().remove_1(VISIBLE_CLASS);
        }
        Ok(())
    }

    fn retire_stale_layers(&self, delay_ms: u32) {
        let container = self.container.clone();
        dom::set_timeout(delay_ms, move || {
            let selector = format!(".{}", LAYER_CLASS);
            for el in dom::query_all(&container, &selector) {
                if !el.class_list().contains(VISIBLE_CLASS) {
                    el.remove();
                }
            }
        });
    }

    fn apply_theme(&self, styles: &ThemeStyles) {
        let text = styles.text.to_hex();
        dom::set_style(&self.body, "background-color", &styles.page_background.to_hex());
        for layer in dom::query_all(&self.container, &format!(".{}", LAYER_CLASS)) {
            dom::set_style(&layer, "color", &text);
        }
        dom::set_style(&self.object_display, "color", &text);
        dom::set_style(&self.traversal_count, "color", &text);
        dom::set_style(&self.gesture_log, "color", &styles.log_text.to_hex());

        for button in self.buttons() {
            self.paint_button(button, styles, false);
            dom::set_style(button, "border-color", "transparent");
        }

        dom::set_style(&self.popup, "background-color", &styles.overlay_background.to_hex());
        dom::set_style(&self.popup, "color", &styles.overlay_text.to_hex());
    }

    /// Color a help button for the given hover state.
    pub fn paint_button(&self, button: &web::HtmlElement, styles: &ThemeStyles, hovered: bool) {
        let background = if hovered {
            styles.button_hover_background
        } else {
            styles.button_background
        };
        dom::set_style(button, "background-color", &background.to_hex());
        dom::set_style(button, "color", &styles.button_text.to_hex());
    }

    #[inline]
    pub fn buttons(&self) -> [&web::HtmlElement; 2] {
        [&self.about_button, &self.navigate_button]
    }
}
