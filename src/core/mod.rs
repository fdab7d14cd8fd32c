pub mod bubbles;
pub mod constants;
pub mod layout;
pub mod motion;
pub mod panels;
pub mod pop;

pub use bubbles::*;
pub use layout::*;
pub use motion::*;
pub use panels::*;
pub use pop::*;
