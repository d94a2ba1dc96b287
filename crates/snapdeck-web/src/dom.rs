use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// High-resolution timestamp shared by events and frames.
#[inline]
pub fn now_ms() -> f64 {
    web::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

#[inline]
pub fn scroll_offset(el: &web::Element) -> f64 {
    el.scroll_top() as f64
}

#[inline]
pub fn set_scroll_offset(el: &web::Element, offset: f64) {
    el.set_scroll_top(offset.round() as i32);
}

#[inline]
pub fn viewport_height(el: &web::Element) -> f64 {
    el.client_height() as f64
}

#[inline]
pub fn toggle_class(el: &web::Element, class: &str, on: bool) {
    let _ = el.class_list().toggle_with_force(class, on);
}

/// True when keyboard focus sits in something that edits text.
pub fn is_editing_target(target: Option<web::EventTarget>) -> bool {
    use wasm_bindgen::JsCast;
    let Some(el) = target.and_then(|t| t.dyn_into::<web::HtmlElement>().ok()) else {
        return false;
    };
    el.is_content_editable() || crate::attrs::is_text_entry_tag(&el.tag_name())
}
