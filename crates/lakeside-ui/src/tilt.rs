//! Pointer-driven card tilt.

use std::fmt;

use lakeside_core::{Point, Rect};

use crate::pointer::PointerEvent;

/// Pointer offset (logical pixels) per degree of rotation.
pub const TILT_SENSITIVITY: f64 = 15.0;

/// Rotation about the horizontal (`rotate_x`) and vertical (`rotate_y`) axes,
/// in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    pub const NEUTRAL: Tilt = Tilt {
        rotate_x: 0.0,
        rotate_y: 0.0,
    };

    pub fn is_neutral(&self) -> bool {
        self.rotate_x == 0.0 && self.rotate_y == 0.0
    }

    /// Cell offset for drawing the tilted wrapper: `degrees_per_cell` degrees
    /// of rotation shift it by one cell. Tilting the top edge back
    /// (`rotate_x > 0`) lifts the content; turning right (`rotate_y > 0`)
    /// moves it right.
    pub fn cell_offset(&self, degrees_per_cell: f64) -> (i16, i16) {
        if degrees_per_cell <= 0.0 {
            return (0, 0);
        }
        let dx = (self.rotate_y / degrees_per_cell).round() as i16;
        let dy = (-self.rotate_x / degrees_per_cell).round() as i16;
        (dx, dy)
    }
}

impl fmt::Display for Tilt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rotateX({}deg) rotateY({}deg)",
            self.rotate_x, self.rotate_y
        )
    }
}

/// Rotation for a pointer at `pointer` over a card occupying `bounds`.
///
/// Pointer above centre tips the card back (positive `rotate_x`); pointer
/// right of centre turns it right (positive `rotate_y`). A larger `divisor`
/// gives a gentler tilt.
pub fn tilt_at(bounds: Rect, pointer: Point, divisor: f64) -> Tilt {
    let x = pointer.x - bounds.x;
    let y = pointer.y - bounds.y;
    let center_x = bounds.width / 2.0;
    let center_y = bounds.height / 2.0;
    Tilt {
        rotate_x: (center_y - y) / divisor,
        rotate_y: (x - center_x) / divisor,
    }
}

/// Receives the transform of a card's inner wrapper.
pub trait TransformTarget {
    fn set_transform(&mut self, tilt: Tilt);
}

/// A card with the tilt effect: the card's bounds plus its inner wrapper.
#[derive(Debug, Clone, PartialEq)]
pub struct TiltCard<T> {
    bounds: Rect,
    inner: T,
    divisor: f64,
}

impl<T: TransformTarget> TiltCard<T> {
    pub fn new(bounds: Rect, inner: T) -> Self {
        Self {
            bounds,
            inner,
            divisor: TILT_SENSITIVITY,
        }
    }

    pub fn with_divisor(mut self, divisor: f64) -> Self {
        self.divisor = divisor;
        self
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    pub fn inner(&self) -> &T {
        &self.inner
    }

    pub fn handle(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Move(pointer) => {
                let tilt = tilt_at(self.bounds, pointer, self.divisor);
                self.inner.set_transform(tilt);
            }
            PointerEvent::Leave => self.inner.set_transform(Tilt::NEUTRAL),
        }
    }
}
