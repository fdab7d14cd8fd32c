use crate::bubbles::{BubbleInstance, PendingPop};
use crate::core::constants::{
    POP_DURATION_MS, POP_EASING, POP_TRANSITION, RESPAWN_DELAY_MS, RESPAWN_FADE_MS,
    RESPAWN_TRANSITION,
};
use crate::core::{PopCycle, PopTicket, POP_KEYFRAMES};
use crate::dom::Timeout;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Play the pop on `bubble`, call `on_complete` when it ends, then fade the
/// bubble back in place. Re-popping cancels whatever the previous pop left pending.
pub fn pop_bubble(bubble: &Rc<BubbleInstance>, on_complete: impl FnOnce() + 'static) {
    bubble.cancel_pending();
    let ticket = bubble.pop.borrow_mut().begin();

    let style = bubble.element.style();
    _ = style.set_property("pointer-events", "none");
    _ = style.set_property("transition", POP_TRANSITION);

    let keyframes = build_keyframes(&bubble.float.current_transform());
    let opts = web::KeyframeAnimationOptions::new();
    opts.set_duration(&JsValue::from_f64(POP_DURATION_MS));
    opts.set_easing(POP_EASING);
    let animation = bubble
        .element
        .animate_with_keyframe_animation_options(Some(&keyframes), &opts);

    let weak = Rc::downgrade(bubble);
    let mut on_complete = Some(on_complete);
    let on_finish = Closure::wrap(Box::new(move || {
        let (Some(bubble), Some(cb)) = (weak.upgrade(), on_complete.take()) else {
            return;
        };
        finish(&bubble, ticket, cb);
    }) as Box<dyn FnMut()>);
    animation.set_onfinish(Some(on_finish.as_ref().unchecked_ref()));

    *bubble.pending_pop.borrow_mut() = Some(PendingPop {
        animation,
        _on_finish: on_finish,
    });
}

fn finish(bubble: &Rc<BubbleInstance>, ticket: PopTicket, on_complete: impl FnOnce()) {
    if !PopCycle::finish_shared(&bubble.pop, ticket, on_complete) {
        log::debug!("[pop] stale finish for {:?}", bubble.target());
        return;
    }
    if !bubble.pop.borrow().is_current(ticket) {
        // re-popped from the callback; the new pop owns the bubble now
        return;
    }
    apply_style(bubble);

    let weak = Rc::downgrade(bubble);
    *bubble.pending_restore.borrow_mut() = Timeout::schedule(RESPAWN_DELAY_MS, move || {
        if let Some(bubble) = weak.upgrade() {
            respawn(&bubble, ticket);
        }
    });
}

fn respawn(bubble: &BubbleInstance, ticket: PopTicket) {
    if !bubble.pop.borrow_mut().restore(ticket) {
        return;
    }
    _ = bubble
        .element
        .style()
        .set_property("transition", RESPAWN_TRANSITION);
    apply_style(bubble);
    log::debug!(
        "[pop] {:?} respawning over {}ms",
        bubble.target(),
        RESPAWN_FADE_MS
    );
}

/// Project the pop cycle's phase onto inline opacity and pointer-events.
fn apply_style(bubble: &BubbleInstance) {
    let s = bubble.pop.borrow().style();
    let style = bubble.element.style();
    _ = style.set_property("opacity", &s.opacity.to_string());
    if s.pointer_events {
        _ = style.remove_property("pointer-events");
    } else {
        _ = style.set_property("pointer-events", "none");
    }
}

fn build_keyframes(base_transform: &str) -> js_sys::Object {
    let frames = js_sys::Array::new();
    for kf in POP_KEYFRAMES.iter() {
        let frame = js_sys::Object::new();
        _ = js_sys::Reflect::set(
            &frame,
            &"transform".into(),
            &kf.transform(base_transform).into(),
        );
        _ = js_sys::Reflect::set(&frame, &"opacity".into(), &JsValue::from_f64(kf.opacity as f64));
        if let Some(offset) = kf.offset {
            _ = js_sys::Reflect::set(&frame, &"offset".into(), &JsValue::from_f64(offset as f64));
        }
        frames.push(&frame);
    }
    frames.into()
}
