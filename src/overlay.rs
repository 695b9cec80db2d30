use crate::constants::{HIDDEN_CLASS, LOADING_SCREEN_DELAY_MS, LOADING_SCREEN_ID};
use crate::dom;
use web_sys as web;

#[inline]
pub fn hide(document: &web::Document) {
    dom::set_class(document, LOADING_SCREEN_ID, HIDDEN_CLASS, true);
}

#[inline]
pub fn is_hidden(document: &web::Document) -> bool {
    document
        .get_element_by_id(LOADING_SCREEN_ID)
        .map(|el| el.class_list().contains(HIDDEN_CLASS))
        .unwrap_or(true)
}

/// Fade the loading screen out once the first frames have had time to land.
pub fn hide_after_delay(document: &web::Document) {
    let doc = document.clone();
    dom::set_timeout(LOADING_SCREEN_DELAY_MS, move || {
        if !is_hidden(&doc) {
            hide(&doc);
        }
    });
}
