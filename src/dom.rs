use crate::constants::{ACTIVE_CLASS, HISTORY_PANEL_KEY, PANEL_SELECTOR, TITLE_ATTR, YEAR_ID};
use crate::core::{parse_fragment, PanelSurface};
use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

/// Attach a page-lifetime click listener.
#[inline]
pub fn add_click_listener(target: &web::EventTarget, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Resolves once the document has been parsed.
pub async fn dom_ready(document: &web::Document) {
    if document.ready_state() != "loading" {
        return;
    }
    let doc = document.clone();
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        _ = doc.add_event_listener_with_callback("DOMContentLoaded", &resolve);
    });
    _ = JsFuture::from(promise).await;
}

/// Current time on the animation-frame clock (ms).
#[inline]
pub fn now_ms(window: &web::Window) -> f64 {
    window.performance().map(|p| p.now()).unwrap_or(0.0)
}

/// Pending `setTimeout`. Owns its callback; dropping it after the timer
/// fired is fine, `cancel` clears it beforehand.
pub struct Timeout {
    id: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Timeout {
    pub fn schedule(delay_ms: i32, handler: impl FnOnce() + 'static) -> Option<Self> {
        let window = web::window()?;
        let mut handler = Some(handler);
        let closure = Closure::wrap(Box::new(move || {
            if let Some(h) = handler.take() {
                h();
            }
        }) as Box<dyn FnMut()>);
        let id = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                delay_ms,
            )
            .map_err(|e| log::warn!("setTimeout failed: {:?}", e))
            .ok()?;
        Some(Self {
            id,
            _closure: closure,
        })
    }

    pub fn cancel(self) {
        if let Some(w) = web::window() {
            w.clear_timeout_with_handle(self.id);
        }
    }
}

/// Fire-and-forget timer for page-lifetime work.
pub fn set_timeout(delay_ms: i32, handler: impl FnOnce() + 'static) {
    if let Some(window) = web::window() {
        let callback = Closure::once_into_js(handler);
        _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            delay_ms,
        );
    }
}

/// Measured container size and viewport size, in CSS px.
pub fn measure(container: &web::Element, window: &web::Window) -> (Vec2, Vec2) {
    let rect = container.get_bounding_client_rect();
    let measured = Vec2::new(rect.width() as f32, rect.height() as f32);
    let viewport = Vec2::new(
        window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0) as f32,
        window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0) as f32,
    );
    (measured, viewport)
}

pub fn render_year(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(YEAR_ID) {
        let year = js_sys::Date::new_0().get_full_year();
        el.set_text_content(Some(&year.to_string()));
    }
}

/// Panel id carried by a history entry's state object, if any.
pub fn history_panel(state: &JsValue) -> Option<String> {
    if !state.is_object() {
        return None;
    }
    js_sys::Reflect::get(state, &JsValue::from_str(HISTORY_PANEL_KEY))
        .ok()
        .and_then(|v| v.as_string())
}

/// `PanelSurface` over the live document.
pub struct DomPanels {
    window: web::Window,
    document: web::Document,
}

impl DomPanels {
    pub fn new(window: web::Window, document: web::Document) -> Self {
        Self { window, document }
    }

    pub fn current() -> Option<Self> {
        let window = web::window()?;
        let document = window.document()?;
        Some(Self::new(window, document))
    }
}

impl PanelSurface for DomPanels {
    fn has_panel(&self, id: &str) -> bool {
        self.document.get_element_by_id(id).is_some()
    }

    fn panel_title(&self, id: &str) -> Option<String> {
        self.document
            .get_element_by_id(id)
            .and_then(|el| el.get_attribute(TITLE_ATTR))
    }

    fn deactivate_all(&mut self) {
        let Ok(panels) = self.document.query_selector_all(PANEL_SELECTOR) else {
            return;
        };
        for i in 0..panels.length() {
            if let Some(el) = panels.get(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
                _ = el.class_list().remove_1(ACTIVE_CLASS);
            }
        }
    }

    fn activate(&mut self, id: &str) {
        if let Some(el) = self.document.get_element_by_id(id) {
            _ = el.class_list().add_1(ACTIVE_CLASS);
        }
    }

    fn scroll_into_view(&mut self, id: &str) {
        if let Some(el) = self.document.get_element_by_id(id) {
            let opts = web::ScrollIntoViewOptions::new();
            opts.set_behavior(web::ScrollBehavior::Smooth);
            opts.set_block(web::ScrollLogicalPosition::Center);
            el.scroll_into_view_with_scroll_into_view_options(&opts);
        }
    }

    fn set_title(&mut self, title: &str) {
        self.document.set_title(title);
    }

    fn push_history(&mut self, id: &str) {
        let Ok(history) = self.window.history() else {
            return;
        };
        let state = js_sys::Object::new();
        _ = js_sys::Reflect::set(
            &state,
            &JsValue::from_str(HISTORY_PANEL_KEY),
            &JsValue::from_str(id),
        );
        let url = format!("#{}", String::from(js_sys::encode_uri_component(id)));
        if let Err(e) = history.push_state_with_url(&state, "", Some(&url)) {
            log::warn!("history update for {:?} failed: {:?}", id, e);
        }
    }

    fn fragment(&self) -> String {
        let hash = self.window.location().hash().unwrap_or_default();
        match parse_fragment(&hash) {
            Some(raw) => js_sys::decode_uri_component(raw)
                .map(String::from)
                .unwrap_or_else(|_| raw.to_string()),
            None => String::new(),
        }
    }
}
