use crate::constants::HELP_POPUP_CLASS;
use crate::dom;
use web_sys as web;

#[inline]
pub fn show(popup: &web::HtmlElement, text: &str) {
    popup.set_text_content(Some(text));
    popup.set_class_name(HELP_POPUP_CLASS);
    dom::set_style(popup, "display", "block");
}

#[inline]
pub fn hide(popup: &web::HtmlElement) {
    dom::set_style(popup, "display", "none");
    popup.set_text_content(None);
}

#[inline]
pub fn is_hidden(popup: &web::HtmlElement) -> bool {
    popup
        .style()
        .get_property_value("display")
        .map(|s| s == "none")
        .unwrap_or(true)
}
