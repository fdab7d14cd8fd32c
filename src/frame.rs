use crate::core::{translate_css, FloatMotion};
use glam::Vec2;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Tick = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// A bubble's float animation driven by `requestAnimationFrame`.
///
/// The loop reschedules itself every frame until `cancel` is called. The
/// last written translation is kept so a pop can composite on top of it.
pub struct FloatLoop {
    tick: Tick,
    raf_id: Rc<Cell<Option<i32>>>,
    cancelled: Rc<Cell<bool>>,
    offset: Rc<Cell<Vec2>>,
}

impl FloatLoop {
    pub fn start(element: web::HtmlElement, motion: FloatMotion) -> Self {
        let tick: Tick = Rc::new(RefCell::new(None));
        let raf_id = Rc::new(Cell::new(None));
        let cancelled = Rc::new(Cell::new(false));
        let offset = Rc::new(Cell::new(Vec2::ZERO));

        let tick_clone = tick.clone();
        let raf_clone = raf_id.clone();
        let cancelled_clone = cancelled.clone();
        let offset_clone = offset.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |t_ms: f64| {
            if cancelled_clone.get() {
                return;
            }
            let o = motion.offset(t_ms);
            offset_clone.set(o);
            _ = element.style().set_property("transform", &translate_css(o));
            raf_clone.set(request_frame(&tick_clone));
        }) as Box<dyn FnMut(f64)>));
        raf_id.set(request_frame(&tick));

        Self {
            tick,
            raf_id,
            cancelled,
            offset,
        }
    }

    /// Last translation written to the element.
    #[inline]
    pub fn offset(&self) -> Vec2 {
        self.offset.get()
    }

    #[inline]
    pub fn current_transform(&self) -> String {
        translate_css(self.offset())
    }

    /// Stop the loop and release its closure. Idempotent.
    pub fn cancel(&self) {
        if self.cancelled.replace(true) {
            return;
        }
        if let (Some(id), Some(w)) = (self.raf_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        self.tick.borrow_mut().take();
    }
}

fn request_frame(tick: &Tick) -> Option<i32> {
    let w = web::window()?;
    let borrowed = tick.borrow();
    let closure = borrowed.as_ref()?;
    w.request_animation_frame(closure.as_ref().unchecked_ref()).ok()
}
