//! Leaves drifting down from above the scene (stateful, spawned over time).

use lakeside_core::{Paint, Point, Size};
use rand::Rng;

use crate::surface::{Circle, Surface};

/// Chance that a tick spawns one new leaf.
pub const LEAF_SPAWN_PROBABILITY: f64 = 0.05;

/// Leaves start this far above the top edge.
const SPAWN_HEIGHT: f64 = -20.0;

/// Leaves further than this below the bottom edge are dropped.
const EXPIRY_MARGIN: f64 = 20.0;

const LEAF_PAINT: Paint = Paint::rgba(34, 139, 34, 0.6);

#[derive(Debug, Clone, PartialEq)]
pub struct Leaf {
    pub position: Point,
    pub radius: f64,
    /// Horizontal drift per tick.
    pub speed_x: f64,
    /// Fall per tick, always positive.
    pub speed_y: f64,
    pub paint: Paint,
}

impl Leaf {
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, bounds: Size) -> Self {
        let x = rng.r#gen::<f64>() * bounds.width;
        let size = rng.r#gen::<f64>() * 10.0 + 8.0;
        let speed_y = rng.r#gen::<f64>() + 0.5;
        let speed_x = rng.r#gen::<f64>() * 0.6 - 0.3;
        Self {
            position: Point::new(x, SPAWN_HEIGHT),
            radius: size / 2.0,
            speed_x,
            speed_y,
            paint: LEAF_PAINT,
        }
    }

    pub fn advance(&mut self) {
        self.position.x += self.speed_x;
        self.position.y += self.speed_y;
    }

    /// Whether the leaf has fallen out of view for good.
    pub fn is_expired(&self, bounds: Size) -> bool {
        self.position.y > bounds.height + EXPIRY_MARGIN
    }
}

/// Roll for a new leaf; returns whether one was added.
pub fn maybe_spawn<R: Rng + ?Sized>(leaves: &mut Vec<Leaf>, rng: &mut R, bounds: Size) -> bool {
    if rng.r#gen::<f64>() < LEAF_SPAWN_PROBABILITY {
        leaves.push(Leaf::spawn(rng, bounds));
        true
    } else {
        false
    }
}

pub fn update(leaves: &mut [Leaf]) {
    for leaf in leaves {
        leaf.advance();
    }
}

pub fn draw<S: Surface + ?Sized>(leaves: &[Leaf], surface: &mut S) {
    for leaf in leaves {
        surface.fill_circle(Circle::new(leaf.position, leaf.radius), leaf.paint);
    }
}

/// Build the next active set without the expired leaves.
pub fn prune(leaves: Vec<Leaf>, bounds: Size) -> Vec<Leaf> {
    leaves
        .into_iter()
        .filter(|leaf| !leaf.is_expired(bounds))
        .collect()
}
