pub mod history;
pub mod nav;

use crate::bubbles::BubbleField;
use crate::core::PanelNavigator;
use crate::dom::DomPanels;
use std::cell::RefCell;
use std::rc::Rc;

/// State shared by every event handler on the page.
#[derive(Clone)]
pub struct SiteWiring {
    pub bubbles: Rc<BubbleField>,
    pub navigator: Rc<RefCell<PanelNavigator>>,
}

impl SiteWiring {
    pub fn show_panel(&self, id: &str) {
        if let Some(mut surface) = DomPanels::current() {
            self.navigator.borrow_mut().show_panel(&mut surface, id);
        }
    }
}
