// DOM hooks shared with the host page. The stylesheet and markup own these names;
// this module only mirrors them.

// Element ids
pub const BUBBLE_CONTAINER_ID: &str = "bubbles";
pub const YEAR_ID: &str = "year";

// Selectors
pub const PANEL_SELECTOR: &str = ".panel";
pub const NAV_BUTTON_SELECTOR: &str = ".nav-btn";

// Classes and attributes
pub const ACTIVE_CLASS: &str = "active";
pub const TARGET_ATTR: &str = "data-target";
pub const TITLE_ATTR: &str = "data-title";
pub const ARIA_LABEL_ATTR: &str = "aria-label";

// History entry payload key: `{ panel: <id> }`
pub const HISTORY_PANEL_KEY: &str = "panel";
