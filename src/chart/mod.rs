//! Donut chart geometry and animation.
//!
//! The pure modules (`layout`, `arc`, `palette`, `tween`) are testable off
//! the browser; `animator` drives them from `requestAnimationFrame`.

pub mod animator;
pub mod arc;
pub mod layout;
pub mod palette;
pub mod tween;

pub use animator::{Animator, SliceFrame};
pub use palette::ColorScale;

/// Chart area, in pixels.
pub const WIDTH: f64 = 300.0;
pub const HEIGHT: f64 = 300.0;
/// Extra room around the chart for the legend and tooltip overflow.
pub const MARGIN: f64 = 150.0;

/// Chart group center inside the SVG.
pub const CENTER_X: f64 = WIDTH / 2.0 + 5.0;
pub const CENTER_Y: f64 = HEIGHT / 2.0 + 5.0;
