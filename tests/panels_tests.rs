// Host-side tests for the panel navigator against an in-memory document.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod site {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod panels {
        include!("../src/core/panels.rs");
    }
}

use site::panels::*;

struct Panel {
    id: &'static str,
    title: Option<&'static str>,
    active: bool,
    scrolled: bool,
}

/// Minimal stand-in for the page: panels, title, history stack and fragment.
struct MemoryPage {
    panels: Vec<Panel>,
    title: String,
    history: Vec<String>,
    hash: String,
}

impl MemoryPage {
    fn new() -> Self {
        let panel = |id, title| Panel {
            id,
            title,
            active: false,
            scrolled: false,
        };
        Self {
            panels: vec![
                panel("home", Some("Welcome")),
                panel("services", Some("Our Services")),
                panel("projects", Some("Selected Projects")),
                panel("Contact Us", None),
            ],
            title: "Aurora & Co.".to_string(),
            history: Vec::new(),
            hash: String::new(),
        }
    }

    fn with_hash(hash: &str) -> Self {
        let mut page = Self::new();
        page.hash = hash.to_string();
        page
    }

    fn active(&self) -> Vec<&'static str> {
        self.panels.iter().filter(|p| p.active).map(|p| p.id).collect()
    }

    /// Browser back: drop the top entry and report the state now current.
    fn back(&mut self) -> Option<String> {
        self.history.pop();
        let prev = self.history.last().cloned();
        self.hash = prev.as_ref().map(|id| format!("#{id}")).unwrap_or_default();
        prev
    }
}

impl PanelSurface for MemoryPage {
    fn has_panel(&self, id: &str) -> bool {
        self.panels.iter().any(|p| p.id == id)
    }

    fn panel_title(&self, id: &str) -> Option<String> {
        self.panels
            .iter()
            .find(|p| p.id == id)
            .and_then(|p| p.title.map(str::to_string))
    }

    fn deactivate_all(&mut self) {
        for p in &mut self.panels {
            p.active = false;
        }
    }

    fn activate(&mut self, id: &str) {
        if let Some(p) = self.panels.iter_mut().find(|p| p.id == id) {
            p.active = true;
        }
    }

    fn scroll_into_view(&mut self, id: &str) {
        if let Some(p) = self.panels.iter_mut().find(|p| p.id == id) {
            p.scrolled = true;
        }
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn push_history(&mut self, id: &str) {
        self.history.push(id.to_string());
        self.hash = format!("#{id}");
    }

    fn fragment(&self) -> String {
        self.hash.clone()
    }
}

#[test]
fn show_existing_panel_activates_exactly_one() {
    let mut page = MemoryPage::new();
    let mut nav = PanelNavigator::new();

    assert!(nav.show_panel(&mut page, "home"));
    assert!(nav.show_panel(&mut page, "services"));

    assert_eq!(page.active(), vec!["services"]);
    assert_eq!(nav.state(), &PanelState::PanelActive("services".into()));
    assert_eq!(parse_fragment(&page.hash), Some("services"));
    assert_eq!(page.title, "Our Services — Aurora & Co.");
    assert_eq!(page.history.len(), 2);
    assert!(page.panels[1].scrolled);
}

#[test]
fn title_falls_back_to_panel_id() {
    let mut page = MemoryPage::new();
    let mut nav = PanelNavigator::new();
    assert!(nav.show_panel(&mut page, "Contact Us"));
    assert_eq!(page.title, "Contact Us — Aurora & Co.");
}

#[test]
fn unknown_panel_deactivates_without_replacement() {
    let mut page = MemoryPage::new();
    let mut nav = PanelNavigator::new();
    assert!(nav.show_panel(&mut page, "projects"));
    let title_before = page.title.clone();

    assert!(!nav.show_panel(&mut page, "careers"));

    assert!(page.active().is_empty());
    assert_eq!(nav.state(), &PanelState::NoPanelActive);
    assert_eq!(nav.state().active_id(), None);
    assert_eq!(page.title, title_before);
    assert_eq!(page.history.len(), 1);
    assert_eq!(page.hash, "#projects");
}

#[test]
fn popstate_with_pushed_state_restores_panel() {
    let mut page = MemoryPage::new();
    let mut nav = PanelNavigator::new();
    nav.show_panel(&mut page, "services");
    nav.show_panel(&mut page, "projects");
    assert_eq!(page.active(), vec!["projects"]);

    let state = page.back();
    assert_eq!(state.as_deref(), Some("services"));
    assert!(nav.restore_from_history(&mut page, state.as_deref()));

    assert_eq!(page.active(), vec!["services"]);
    // the restored transition records its own entry
    assert_eq!(page.history, vec!["services", "services"]);
    assert_eq!(page.hash, "#services");
}

#[test]
fn popstate_without_state_uses_fragment() {
    let mut page = MemoryPage::with_hash("#home");
    let mut nav = PanelNavigator::new();
    assert!(nav.restore_from_history(&mut page, None));
    assert_eq!(page.active(), vec!["home"]);
    assert_eq!(page.history, vec!["home"]);
}

#[test]
fn popstate_with_unknown_fragment_changes_nothing() {
    let mut page = MemoryPage::with_hash("#nowhere");
    let mut nav = PanelNavigator::new();
    nav.show_panel(&mut page, "home");
    page.hash = "#nowhere".into();

    assert!(!nav.restore_from_history(&mut page, None));
    assert_eq!(page.active(), vec!["home"]);

    page.hash.clear();
    assert!(!nav.restore_from_history(&mut page, Some("")));
    assert_eq!(page.active(), vec!["home"]);
}

#[test]
fn startup_fragment_opens_panel_and_keeps_hash() {
    let mut page = MemoryPage::with_hash("#projects");
    let mut nav = PanelNavigator::new();

    assert!(nav.restore_from_fragment(&mut page));

    assert_eq!(page.active(), vec!["projects"]);
    assert_eq!(page.title, "Selected Projects — Aurora & Co.");
    assert_eq!(page.hash, "#projects");
    assert_eq!(page.history, vec!["projects"]);
}

#[test]
fn startup_without_matching_fragment_is_a_no_op() {
    for hash in ["", "#", "#missing"] {
        let mut page = MemoryPage::with_hash(hash);
        let mut nav = PanelNavigator::new();
        assert!(!nav.restore_from_fragment(&mut page));
        assert!(page.active().is_empty());
        assert_eq!(page.title, "Aurora & Co.");
        assert!(page.history.is_empty());
    }
}

#[test]
fn fragment_parsing() {
    assert_eq!(parse_fragment("#services"), Some("services"));
    assert_eq!(parse_fragment("services"), Some("services"));
    assert_eq!(parse_fragment("#"), None);
    assert_eq!(parse_fragment(""), None);
    assert_eq!(page_title("Home"), "Home — Aurora & Co.");
}

#[test]
fn every_transition_pushes_one_entry() {
    let mut page = MemoryPage::with_hash("#projects");
    let mut nav = PanelNavigator::new();

    assert!(nav.restore_from_fragment(&mut page));
    assert!(nav.restore_from_history(&mut page, Some("services")));
    assert!(nav.show_panel(&mut page, "home"));

    assert_eq!(page.history, vec!["projects", "services", "home"]);
    assert_eq!(page.hash, "#home");
    assert_eq!(page.active(), vec!["home"]);
}
