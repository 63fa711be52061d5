//! Core types shared by the lakeside crates.
//!
//! Geometry in logical pixels, colours with alpha, and the host event port
//! through which terminal input reaches the scene and the page.

mod color;
mod geometry;
mod input;

pub use color::{Paint, hsl_to_rgb};
pub use geometry::{CellMetrics, Point, Rect, Size};
pub use input::{EventSource, HostEvent, KeyInput};
