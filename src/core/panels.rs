use super::constants::{SITE_NAME, TITLE_SEPARATOR};

/// Which content panel is showing. The DOM `active` markers are a projection of this.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum PanelState {
    #[default]
    NoPanelActive,
    PanelActive(String),
}

impl PanelState {
    pub fn active_id(&self) -> Option<&str> {
        match self {
            PanelState::NoPanelActive => None,
            PanelState::PanelActive(id) => Some(id.as_str()),
        }
    }
}

/// Document operations the navigator needs. Implemented over the real DOM
/// in the web layer and in memory for tests.
pub trait PanelSurface {
    fn has_panel(&self, id: &str) -> bool;
    /// Configured display title of a panel, if any.
    fn panel_title(&self, id: &str) -> Option<String>;
    fn deactivate_all(&mut self);
    fn activate(&mut self, id: &str);
    fn scroll_into_view(&mut self, id: &str);
    fn set_title(&mut self, title: &str);
    /// Push a history entry `{panel: id}` with URL fragment `#id`.
    fn push_history(&mut self, id: &str);
    /// Current URL fragment, with or without the leading `#`.
    fn fragment(&self) -> String;
}

/// Panel id named by a URL fragment, if any.
pub fn parse_fragment(hash: &str) -> Option<&str> {
    let id = hash.strip_prefix('#').unwrap_or(hash);
    (!id.is_empty()).then_some(id)
}

pub fn page_title(panel_title: &str) -> String {
    format!("{}{}{}", panel_title, TITLE_SEPARATOR, SITE_NAME)
}

#[derive(Debug, Default)]
pub struct PanelNavigator {
    state: PanelState,
}

impl PanelNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn state(&self) -> &PanelState {
        &self.state
    }

    /// Switch to panel `id`. Returns whether a panel became active.
    ///
    /// Panels are deactivated before `id` is checked, so an unknown id leaves
    /// no panel active and touches neither title nor history. Every successful
    /// transition pushes one history entry.
    pub fn show_panel<S: PanelSurface + ?Sized>(&mut self, surface: &mut S, id: &str) -> bool {
        surface.deactivate_all();
        self.state = PanelState::NoPanelActive;
        if !surface.has_panel(id) {
            log::debug!("[panels] no panel with id {:?}", id);
            return false;
        }
        surface.activate(id);
        surface.scroll_into_view(id);
        let title = surface
            .panel_title(id)
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| id.to_string());
        surface.set_title(&page_title(&title));
        surface.push_history(id);
        self.state = PanelState::PanelActive(id.to_string());
        true
    }

    /// Back/forward navigation. Prefers the panel stored in the history entry,
    /// then the URL fragment when it names an existing panel.
    pub fn restore_from_history<S: PanelSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        state_panel: Option<&str>,
    ) -> bool {
        if let Some(id) = state_panel.filter(|p| !p.is_empty()) {
            return self.show_panel(surface, id);
        }
        let fragment = surface.fragment();
        match parse_fragment(&fragment) {
            Some(id) if surface.has_panel(id) => {
                let id = id.to_string();
                self.show_panel(surface, &id)
            }
            _ => false,
        }
    }

    /// Page load: open the panel named by the fragment, if it exists.
    pub fn restore_from_fragment<S: PanelSurface + ?Sized>(&mut self, surface: &mut S) -> bool {
        let fragment = surface.fragment();
        match parse_fragment(&fragment) {
            Some(id) if surface.has_panel(id) => {
                let id = id.to_string();
                self.show_panel(surface, &id)
            }
            _ => false,
        }
    }
}
