//! Fish swimming sideways through the lower half of the scene.

use lakeside_core::{Paint, Point, Size};
use rand::Rng;

use crate::surface::Surface;

/// Number of fish created at startup.
pub const FISH_COUNT: usize = 15;

/// How far past either edge a fish may swim before it wraps.
const EDGE_MARGIN: f64 = 50.0;

/// Horizontal heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn sign(self) -> f64 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Fish {
    pub position: Point,
    /// Horizontal radius; the body is half as tall.
    pub radius: f64,
    pub speed: f64,
    pub direction: Direction,
    pub paint: Paint,
}

impl Fish {
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, bounds: Size) -> Self {
        let x = rng.r#gen::<f64>() * bounds.width;
        let y = rng.r#gen::<f64>() * bounds.height * 0.5 + bounds.height * 0.4;
        let radius = rng.r#gen::<f64>() * 20.0 + 10.0;
        let speed = rng.r#gen::<f64>() * 1.5 + 0.5;
        let direction = if rng.r#gen::<f64>() < 0.5 {
            Direction::Right
        } else {
            Direction::Left
        };
        let paint = Paint::hsl(rng.r#gen::<f32>() * 360.0, 0.7, 0.6);
        Self {
            position: Point::new(x, y),
            radius,
            speed,
            direction,
            paint,
        }
    }

    /// Move one tick and wrap to the opposite edge once past the margin.
    pub fn advance(&mut self, bounds: Size) {
        self.position.x += self.speed * self.direction.sign();
        if self.position.x > bounds.width + EDGE_MARGIN {
            self.position.x = -EDGE_MARGIN;
        }
        if self.position.x < -EDGE_MARGIN {
            self.position.x = bounds.width + EDGE_MARGIN;
        }
    }
}

/// Create the startup school.
pub fn init<R: Rng + ?Sized>(rng: &mut R, bounds: Size) -> Vec<Fish> {
    (0..FISH_COUNT).map(|_| Fish::spawn(rng, bounds)).collect()
}

pub fn update(fish: &mut [Fish], bounds: Size) {
    for f in fish {
        f.advance(bounds);
    }
}

pub fn draw<S: Surface + ?Sized>(fish: &[Fish], surface: &mut S) {
    for f in fish {
        surface.fill_ellipse(f.position, f.radius, f.radius / 2.0, f.paint);
    }
}
