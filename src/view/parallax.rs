// parallax.rs - Camera follow for pointer parallax
//
// Exponential smoothing toward the pointer. With a factor in (0, 1] the
// accumulator only ever closes part of the gap, so it never overshoots.

use glam::Vec2;

pub struct Parallax {
    offset: Vec2,
    smoothing: f32,
    scale: f32,
}

impl Parallax {
    pub fn new(smoothing: f32, scale: f32) -> Self {
        Self { offset: Vec2::ZERO, smoothing, scale }
    }

    /// Smoothed pointer offset, before scaling
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Step toward the pointer (pixel offset, y down) and return the camera
    /// x/y displacement for this frame.
    pub fn update(&mut self, pointer: Vec2) -> Vec2 {
        let target = Vec2::new(pointer.x, -pointer.y);
        self.offset += (target - self.offset) * self.smoothing;
        self.offset * self.scale
    }
}
