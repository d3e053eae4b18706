use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        log::warn!("[dom] missing #{}", element_id);
    }
}

/// Listen for `input` events on a text or range field and hand over its value.
pub fn add_input_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut(String) + 'static,
) {
    let Some(input) = document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
    else {
        log::warn!("[dom] missing input #{}", element_id);
        return;
    };
    let field = input.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::Event| {
        handler(field.value());
    }) as Box<dyn FnMut(_)>);
    _ = input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Delegated click handling for list containers whose rows carry `attr`.
pub fn add_delegated_click(
    document: &web::Document,
    container_id: &str,
    attr: &'static str,
    mut handler: impl FnMut(String) + 'static,
) {
    let Some(container) = document.get_element_by_id(container_id) else {
        log::warn!("[dom] missing #{}", container_id);
        return;
    };
    let selector = format!("[{}]", attr);
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let value = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .and_then(|el| el.closest(&selector).ok().flatten())
            .and_then(|row| row.get_attribute(attr));
        if let Some(value) = value {
            ev.stop_propagation();
            handler(value);
        }
    }) as Box<dyn FnMut(_)>);
    _ = container.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn set_text(document: &web::Document, element_id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_text_content(Some(text));
    }
}

#[inline]
pub fn set_html(document: &web::Document, element_id: &str, html: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_inner_html(html);
    }
}

#[inline]
pub fn set_style(document: &web::Document, element_id: &str, property: &str, value: &str) {
    if let Some(el) = document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    {
        _ = el.style().set_property(property, value);
    }
}

#[inline]
pub fn set_displayed(document: &web::Document, element_id: &str, display: Option<&str>) {
    set_style(document, element_id, "display", display.unwrap_or("none"));
}

#[inline]
pub fn toggle_class(document: &web::Document, element_id: &str, class: &str) -> bool {
    document
        .get_element_by_id(element_id)
        .and_then(|el| el.class_list().toggle(class).ok())
        .unwrap_or(false)
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}
