//! Scene animation state.

use lakeside_core::Size;
use rand::Rng;

use crate::animations::{bird, cloud, fish, leaf, mountains};
use crate::surface::Surface;

/// Owns every element collection and the surface they are drawn onto.
#[derive(Debug)]
pub struct Animator<S, R> {
    surface: S,
    rng: R,
    clouds: Vec<cloud::Cloud>,
    birds: Vec<bird::Bird>,
    fish: Vec<fish::Fish>,
    leaves: Vec<leaf::Leaf>,
    /// Ticks run so far.
    ticks: u64,
    /// Leaves spawned so far.
    spawned_leaves: u64,
}

impl<S: Surface, R: Rng> Animator<S, R> {
    /// Create the fixed collections against the surface's current size.
    pub fn new(surface: S, mut rng: R) -> Self {
        let bounds = surface.size();
        let clouds = cloud::init(&mut rng, bounds);
        let birds = bird::init(&mut rng, bounds);
        let fish = fish::init(&mut rng, bounds);
        Self {
            surface,
            rng,
            clouds,
            birds,
            fish,
            leaves: Vec::new(),
            ticks: 0,
            spawned_leaves: 0,
        }
    }

    /// Resize the surface. Element positions are kept as they are; only later
    /// wraps and spawns see the new bounds.
    pub fn resize(&mut self, size: Size) {
        self.surface.resize(size);
    }

    /// Advance every element by one frame and redraw the scene.
    pub fn tick(&mut self) {
        let bounds = self.surface.size();
        let surface = &mut self.surface;

        surface.clear();
        mountains::draw(surface);

        cloud::update(&mut self.clouds, bounds);
        cloud::draw(&self.clouds, surface);

        bird::update(&mut self.birds, &mut self.rng, bounds);
        bird::draw(&self.birds, surface);

        fish::update(&mut self.fish, bounds);
        fish::draw(&self.fish, surface);

        if leaf::maybe_spawn(&mut self.leaves, &mut self.rng, bounds) {
            self.spawned_leaves += 1;
        }
        leaf::update(&mut self.leaves);
        leaf::draw(&self.leaves, surface);
        self.leaves = leaf::prune(std::mem::take(&mut self.leaves), bounds);

        self.ticks += 1;
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn size(&self) -> Size {
        self.surface.size()
    }

    pub fn clouds(&self) -> &[cloud::Cloud] {
        &self.clouds
    }

    pub fn birds(&self) -> &[bird::Bird] {
        &self.birds
    }

    pub fn fish(&self) -> &[fish::Fish] {
        &self.fish
    }

    pub fn leaves(&self) -> &[leaf::Leaf] {
        &self.leaves
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn spawned_leaves(&self) -> u64 {
        self.spawned_leaves
    }
}
