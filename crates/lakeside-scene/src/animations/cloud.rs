//! Clouds drifting slowly along the top band.

use lakeside_core::{Paint, Point, Size};
use rand::Rng;

use crate::surface::{Circle, Surface};

/// Number of clouds created at startup.
pub const CLOUD_COUNT: usize = 8;

const EDGE_MARGIN: f64 = 100.0;
const BAND_HEIGHT: f64 = 100.0;
const CLOUD_PAINT: Paint = Paint::rgba(249, 244, 244, 0.93);

#[derive(Debug, Clone, PartialEq)]
pub struct Cloud {
    pub position: Point,
    pub speed: f64,
    pub size: f64,
}

impl Cloud {
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, bounds: Size) -> Self {
        Self {
            position: Point::new(
                rng.r#gen::<f64>() * bounds.width,
                rng.r#gen::<f64>() * BAND_HEIGHT,
            ),
            speed: rng.r#gen::<f64>() * 0.3 + 0.1,
            size: rng.r#gen::<f64>() * 60.0 + 40.0,
        }
    }

    pub fn advance(&mut self, bounds: Size) {
        self.position.x += self.speed;
        if self.position.x > bounds.width + EDGE_MARGIN {
            self.position.x = -EDGE_MARGIN;
        }
    }

    /// Three overlapping puffs: a large centre and two smaller sides.
    pub fn puffs(&self) -> [Circle; 3] {
        let Point { x, y } = self.position;
        let s = self.size;
        [
            Circle::new(Point::new(x, y), s * 0.4),
            Circle::new(Point::new(x + s * 0.3, y + 10.0), s * 0.3),
            Circle::new(Point::new(x - s * 0.3, y + 10.0), s * 0.35),
        ]
    }
}

pub fn init<R: Rng + ?Sized>(rng: &mut R, bounds: Size) -> Vec<Cloud> {
    (0..CLOUD_COUNT).map(|_| Cloud::spawn(rng, bounds)).collect()
}

pub fn update(clouds: &mut [Cloud], bounds: Size) {
    for cloud in clouds {
        cloud.advance(bounds);
    }
}

pub fn draw<S: Surface + ?Sized>(clouds: &[Cloud], surface: &mut S) {
    for cloud in clouds {
        surface.fill_circles(&cloud.puffs(), CLOUD_PAINT);
    }
}
