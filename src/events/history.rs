use super::SiteWiring;
use crate::core::constants::STARTUP_PANEL_DELAY_MS;
use crate::core::{parse_fragment, PanelSurface};
use crate::dom::{self, DomPanels};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Back/forward restores the panel stored in the entry, falling back to the fragment.
pub fn wire_popstate(window: &web::Window, w: &SiteWiring) {
    let navigator = w.navigator.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PopStateEvent| {
        let panel = dom::history_panel(&ev.state());
        if let Some(mut surface) = DomPanels::current() {
            navigator
                .borrow_mut()
                .restore_from_history(&mut surface, panel.as_deref());
        }
    }) as Box<dyn FnMut(web::PopStateEvent)>);
    _ = window.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Open the panel named in the URL once the first frames have settled.
pub fn schedule_fragment_restore(w: &SiteWiring) {
    let Some(surface) = DomPanels::current() else {
        return;
    };
    let fragment = surface.fragment();
    match parse_fragment(&fragment) {
        Some(id) if surface.has_panel(id) => {
            log::info!("[panels] restoring {:?} from URL", id);
        }
        _ => return,
    }
    let navigator = w.navigator.clone();
    dom::set_timeout(STARTUP_PANEL_DELAY_MS, move || {
        if let Some(mut surface) = DomPanels::current() {
            navigator.borrow_mut().restore_from_fragment(&mut surface);
        }
    });
}

/// Stop float loops and pending pops when the page is unloaded for good.
/// Pages entering the back/forward cache keep running.
pub fn wire_teardown(window: &web::Window, w: &SiteWiring) {
    let bubbles = w.bubbles.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PageTransitionEvent| {
        if ev.persisted() {
            return;
        }
        log::info!("[bubbles] tearing down {} bubbles", bubbles.len());
        bubbles.teardown();
    }) as Box<dyn FnMut(web::PageTransitionEvent)>);
    _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    closure.forget();
}
