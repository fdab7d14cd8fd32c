// Layout and animation tuning shared by the bubble field and the panel navigator.
// Keeps the magic numbers of the motion model in one place.

// Layout
pub const LAYOUT_PADDING_PX: f32 = 24.0; // keeps bubbles off the container edges
pub const FALLBACK_HEIGHT_FRACTION: f32 = 0.6; // of viewport height when the container is unmeasured

// Float motion
pub const FLOAT_AMPLITUDE_MIN_PX: f32 = 8.0;
pub const FLOAT_AMPLITUDE_SPAN_PX: f32 = 10.0;
pub const FLOAT_FREQUENCY_MIN: f32 = 0.6;
pub const FLOAT_FREQUENCY_SPAN: f32 = 0.9;
pub const SWAY_AMPLITUDE_RATIO: f32 = 0.5; // horizontal sway relative to vertical bob
pub const SWAY_FREQUENCY_DIVISOR: f32 = 1.6;
pub const FLOAT_STAGGER_MS: f64 = 150.0; // start offset per seed index

// Pop
pub const POP_DURATION_MS: f64 = 420.0;
pub const POP_PEAK_OFFSET: f32 = 0.6;
pub const POP_PEAK_SCALE: f32 = 1.28;
pub const POP_END_SCALE: f32 = 0.02;
pub const POP_EASING: &str = "cubic-bezier(.2,.9,.25,1)";
pub const POP_TRANSITION: &str = "transform .22s ease, opacity .22s linear";
pub const RESPAWN_DELAY_MS: i32 = 280;
pub const RESPAWN_FADE_MS: i32 = 500;
pub const RESPAWN_TRANSITION: &str = "opacity .5s ease";

// Panels
pub const STARTUP_PANEL_DELAY_MS: i32 = 240; // lets the first layout and float frames settle
pub const SITE_NAME: &str = "Aurora & Co.";
pub const TITLE_SEPARATOR: &str = " — ";
