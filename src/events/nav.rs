use super::SiteWiring;
use crate::constants::{NAV_BUTTON_SELECTOR, TARGET_ATTR};
use crate::core::PanelSurface;
use crate::dom::{self, DomPanels};
use crate::pop::pop_bubble;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Clicking a bubble pops it, then opens its panel when the page has one.
pub fn wire_bubble_clicks(w: &SiteWiring) {
    for bubble in w.bubbles.iter() {
        let b = bubble.clone();
        let wiring = w.clone();
        dom::add_click_listener(&bubble.element, move || {
            let wiring = wiring.clone();
            let target = b.target();
            pop_bubble(&b, move || {
                let present = DomPanels::current().is_some_and(|s| s.has_panel(target));
                if present {
                    wiring.show_panel(target);
                }
            });
        });
    }
}

/// Toolbar buttons pop the matching bubble first so the field stays in sync
/// with navigation; without a matching bubble they open the panel directly.
pub fn wire_nav_buttons(document: &web::Document, w: &SiteWiring) {
    let Ok(buttons) = document.query_selector_all(NAV_BUTTON_SELECTOR) else {
        return;
    };
    let mut wired = 0;
    for i in 0..buttons.length() {
        let Some(btn) = buttons.get(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        let btn_for_click = btn.clone();
        let wiring = w.clone();
        dom::add_click_listener(&btn, move || {
            let target = btn_for_click.get_attribute(TARGET_ATTR).unwrap_or_default();
            match wiring.bubbles.find(&target) {
                Some(bubble) => {
                    let wiring = wiring.clone();
                    pop_bubble(&bubble, move || wiring.show_panel(&target));
                }
                None => wiring.show_panel(&target),
            }
        });
        wired += 1;
    }
    log::info!("[nav] wired {} nav buttons", wired);
}
