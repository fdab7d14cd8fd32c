#![cfg(target_arch = "wasm32")]
use crate::core::{PanelNavigator, BUBBLE_CONFIG};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod bubbles;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod pop;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("aurora-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    dom::dom_ready(&document).await;

    dom::render_year(&document);

    let container = document
        .get_element_by_id(constants::BUBBLE_CONTAINER_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::BUBBLE_CONTAINER_ID))?;
    let field = bubbles::build_field(
        &mut rand::thread_rng(),
        &window,
        &document,
        &container,
        &BUBBLE_CONFIG,
    )?;
    log::info!("[bubbles] created {}", field.len());

    let wiring = events::SiteWiring {
        bubbles: Rc::new(field),
        navigator: Rc::new(RefCell::new(PanelNavigator::new())),
    };
    events::nav::wire_bubble_clicks(&wiring);
    events::nav::wire_nav_buttons(&document, &wiring);
    events::history::wire_popstate(&window, &wiring);
    events::history::schedule_fragment_restore(&wiring);
    events::history::wire_teardown(&window, &wiring);

    Ok(())
}
