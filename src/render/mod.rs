//! Rendering: palette, duration humanization, and per-event line layout.

mod duration;
mod line;
mod palette;

pub use duration::{HumanizeThresholds, humanize};
pub use line::Renderer;
pub use palette::{Color, Palette};
