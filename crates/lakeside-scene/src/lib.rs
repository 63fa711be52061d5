//! Animated backdrop for the lakeside page.
//!
//! An [`Animator`] owns every element collection and a drawing [`Surface`].
//! Each [`Animator::tick`] advances all elements by one frame and redraws the
//! scene into the surface. [`DisplayList`] is the surface used at runtime: it
//! records shapes that [`SceneWidget`] then rasterises into a terminal buffer.

mod animations;
mod animator;
mod raster;
mod surface;

pub use animations::bird::{BIRD_COUNT, Bird};
pub use animations::cloud::{CLOUD_COUNT, Cloud};
pub use animations::fish::{Direction, FISH_COUNT, Fish};
pub use animations::leaf::{LEAF_SPAWN_PROBABILITY, Leaf};
pub use animations::mountains::{MOUNTAIN_PAINT, silhouette};
pub use animator::Animator;
pub use raster::{OVERLAY_OPACITY, SceneWidget};
pub use surface::{Circle, DisplayList, Shape, Surface};
