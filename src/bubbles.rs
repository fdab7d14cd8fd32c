use crate::constants::{ARIA_LABEL_ATTR, TARGET_ATTR};
use crate::core::{place_bubbles, BubbleDescriptor, FloatMotion, PopCycle};
use crate::dom::{self, js_err, Timeout};
use crate::frame::FloatLoop;
use fnv::FnvHashMap;
use glam::Vec2;
use rand::Rng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Web Animation of an in-flight pop plus the handler it will call on finish.
pub struct PendingPop {
    pub animation: web::Animation,
    pub _on_finish: Closure<dyn FnMut()>,
}

/// A bubble button bound to one descriptor for the page's lifetime.
pub struct BubbleInstance {
    pub descriptor: BubbleDescriptor,
    pub element: web::HtmlElement,
    /// Top-left corner in container px, fixed at creation.
    pub position: Vec2,
    pub motion: FloatMotion,
    pub float: FloatLoop,
    pub pop: RefCell<PopCycle>,
    pub pending_pop: RefCell<Option<PendingPop>>,
    /// Single slot: a new pop cancels the previous respawn timer.
    pub pending_restore: RefCell<Option<Timeout>>,
}

impl BubbleInstance {
    #[inline]
    pub fn target(&self) -> &'static str {
        self.descriptor.id
    }

    /// Drop any in-flight pop and its respawn timer, leaving the bubble visible.
    pub fn cancel_pending(&self) {
        if let Some(p) = self.pending_pop.borrow_mut().take() {
            p.animation.cancel();
        }
        if let Some(t) = self.pending_restore.borrow_mut().take() {
            t.cancel();
        }
    }

    pub fn teardown(&self) {
        self.float.cancel();
        self.cancel_pending();
        self.pop.borrow_mut().reset();
    }
}

/// All bubbles, addressable by the panel id they target.
#[derive(Default)]
pub struct BubbleField {
    order: Vec<Rc<BubbleInstance>>,
    by_target: FnvHashMap<&'static str, Rc<BubbleInstance>>,
}

impl BubbleField {
    pub fn insert(&mut self, bubble: Rc<BubbleInstance>) {
        self.by_target.insert(bubble.target(), bubble.clone());
        self.order.push(bubble);
    }

    pub fn find(&self, target: &str) -> Option<Rc<BubbleInstance>> {
        self.by_target.get(target).cloned()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rc<BubbleInstance>> {
        self.order.iter()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn teardown(&self) {
        for b in &self.order {
            b.teardown();
        }
    }
}

/// Create, position and start floating one button per descriptor inside `container`.
pub fn build_field<R: Rng + ?Sized>(
    rng: &mut R,
    window: &web::Window,
    document: &web::Document,
    container: &web::Element,
    descriptors: &[BubbleDescriptor],
) -> anyhow::Result<BubbleField> {
    let (measured, viewport) = dom::measure(container, window);
    let extent = crate::core::container_extent(measured, viewport);
    let positions = place_bubbles(rng, extent, descriptors);
    log::info!(
        "[bubbles] extent={:.0}x{:.0} (measured {:.0}x{:.0})",
        extent.x,
        extent.y,
        measured.x,
        measured.y
    );

    let now = dom::now_ms(window);
    let mut field = BubbleField::default();
    for (i, (descriptor, position)) in descriptors.iter().zip(positions).enumerate() {
        let element = create_button(document, descriptor, position)?;
        container.append_child(&element).map_err(js_err)?;
        let motion = FloatMotion::sample(rng, i, now);
        let float = FloatLoop::start(element.clone(), motion);
        let bubble = Rc::new(BubbleInstance {
            descriptor: *descriptor,
            element,
            position,
            motion,
            float,
            pop: RefCell::new(PopCycle::new()),
            pending_pop: RefCell::new(None),
            pending_restore: RefCell::new(None),
        });
        log::debug!(
            "[bubbles] {:?} at ({}, {}) amp={:.1}px freq={:.2}",
            bubble.target(),
            bubble.position.x,
            bubble.position.y,
            bubble.motion.amplitude,
            bubble.motion.frequency
        );
        field.insert(bubble);
    }
    Ok(field)
}

fn create_button(
    document: &web::Document,
    descriptor: &BubbleDescriptor,
    position: Vec2,
) -> anyhow::Result<web::HtmlElement> {
    let element: web::HtmlElement = document
        .create_element("button")
        .map_err(js_err)?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("button is not an HtmlElement: {:?}", e))?;
    element.set_class_name(&descriptor.class_list());

    let style = element.style();
    let size = format!("{}px", descriptor.size);
    style.set_property("width", &size).map_err(js_err)?;
    style.set_property("height", &size).map_err(js_err)?;
    style
        .set_property("left", &format!("{}px", position.x))
        .map_err(js_err)?;
    style
        .set_property("top", &format!("{}px", position.y))
        .map_err(js_err)?;

    element
        .set_attribute(TARGET_ATTR, descriptor.id)
        .map_err(js_err)?;
    element
        .set_attribute(ARIA_LABEL_ATTR, descriptor.aria_label())
        .map_err(js_err)?;

    let span = document.create_element("span").map_err(js_err)?;
    span.set_text_content(Some(descriptor.label));
    element.append_child(&span).map_err(js_err)?;
    Ok(element)
}
