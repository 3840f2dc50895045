// explosion.rs - Per-star explosion overrides
//
// Parallel arrays indexed by star: a flag and the velocity it carries.
// A star with the flag set is exploding; without it, cruising.

use glam::Vec3;

use super::StarWorld;

pub struct Explosions {
    active: Vec<bool>,
    velocity: Vec<Vec3>,
    n: usize,   // number of active entries
}

impl Explosions {
    pub fn new(capacity: usize) -> Self {
        Self {
            active: vec![false; capacity],
            velocity: vec![Vec3::ZERO; capacity],
            n: 0,
        }
    }

    #[inline]
    pub fn is_active(&self, i: usize) -> bool {
        self.active[i]
    }

    /// Velocity of an exploding star, `None` while cruising
    #[inline]
    pub fn velocity(&self, i: usize) -> Option<Vec3> {
        if self.active[i] { Some(self.velocity[i]) } else { None }
    }

    /// Number of stars currently exploding
    pub fn count(&self) -> usize {
        self.n
    }

    /// Start an explosion with a random velocity in [-speed, speed) per axis.
    /// Returns false if the star is already exploding; its velocity is kept.
    pub fn trigger(&mut self, i: usize, speed: f32, rng: &mut u32) -> bool {
        if self.active[i] { return false; }

        let v = Vec3::new(
            (StarWorld::rand(rng) - 0.5) * 2.0 * speed,
            (StarWorld::rand(rng) - 0.5) * 2.0 * speed,
            (StarWorld::rand(rng) - 0.5) * 2.0 * speed,
        );
        self.insert(i, v)
    }

    /// Start an explosion with a given velocity. No-op if already exploding.
    pub fn insert(&mut self, i: usize, v: Vec3) -> bool {
        if self.active[i] { return false; }

        self.active[i] = true;
        self.velocity[i] = v;
        self.n += 1;
        true
    }

    /// Return a star to cruising
    pub fn remove(&mut self, i: usize) {
        if !self.active[i] { return; }

        self.active[i] = false;
        self.velocity[i] = Vec3::ZERO;
        self.n -= 1;
    }
}
