//! Birds gliding left to right across the upper sky.

use lakeside_core::{Paint, Point, Size};
use rand::Rng;

use crate::surface::Surface;

/// Number of birds created at startup.
pub const BIRD_COUNT: usize = 5;

const EDGE_MARGIN: f64 = 50.0;
const STROKE_WIDTH: f64 = 1.5;

#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    /// Tip of the leading wing.
    pub position: Point,
    pub speed: f64,
    /// Wing span of one side.
    pub size: f64,
}

impl Bird {
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, bounds: Size) -> Self {
        let x = rng.r#gen::<f64>() * bounds.width;
        let y = flight_height(rng, bounds);
        Self {
            position: Point::new(x, y),
            speed: rng.r#gen::<f64>() + 0.5,
            size: rng.r#gen::<f64>() * 10.0 + 10.0,
        }
    }

    /// Move one tick; past the right edge the bird re-enters from the left
    /// at a new height.
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R, bounds: Size) {
        self.position.x += self.speed;
        if self.position.x > bounds.width + EDGE_MARGIN {
            self.position.x = -EDGE_MARGIN;
            self.position.y = flight_height(rng, bounds);
        }
    }

    /// The three points of the wing stroke.
    pub fn wing(&self) -> [Point; 3] {
        let Point { x, y } = self.position;
        [
            Point::new(x, y),
            Point::new(x - self.size, y + self.size / 2.0),
            Point::new(x - self.size * 2.0, y),
        ]
    }
}

fn flight_height<R: Rng + ?Sized>(rng: &mut R, bounds: Size) -> f64 {
    rng.r#gen::<f64>() * bounds.height * 0.3
}

pub fn init<R: Rng + ?Sized>(rng: &mut R, bounds: Size) -> Vec<Bird> {
    (0..BIRD_COUNT).map(|_| Bird::spawn(rng, bounds)).collect()
}

pub fn update<R: Rng + ?Sized>(birds: &mut [Bird], rng: &mut R, bounds: Size) {
    for bird in birds {
        bird.advance(rng, bounds);
    }
}

pub fn draw<S: Surface + ?Sized>(birds: &[Bird], surface: &mut S) {
    for bird in birds {
        surface.stroke_path(&bird.wing(), STROKE_WIDTH, Paint::WHITE);
    }
}
