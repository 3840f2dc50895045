// pick.rs - Hover picking against the star buffer
//
// A star is hit when it lies within `threshold` world units of the pointer
// ray. Hits are ordered by distance from the ray origin to the closest point
// on the ray, nearest first.

use glam::{Vec2, Vec3};

use crate::sim::Stars;
use crate::view::Camera;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,   // unit length
}

/// One star under the ray
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    pub index: usize,
    pub distance: f32,
}

impl Ray {
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self { origin, dir }
    }

    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }

    /// Closest point on the ray to `p`; points behind the origin clamp to it
    #[inline]
    pub fn closest_point(&self, p: Vec3) -> Vec3 {
        let t = (p - self.origin).dot(self.dir).max(0.0);
        self.at(t)
    }

    #[inline]
    pub fn distance_sq(&self, p: Vec3) -> f32 {
        self.closest_point(p).distance_squared(p)
    }

    /// All points from an xyz buffer within `threshold` of the ray, nearest first
    pub fn intersect_points(&self, pos: &[f32], threshold: f32) -> Vec<Intersection> {
        let limit = threshold * threshold;
        let mut hits: Vec<Intersection> = pos
            .chunks_exact(3)
            .enumerate()
            .filter_map(|(index, c)| {
                let p = Vec3::new(c[0], c[1], c[2]);
                let closest = self.closest_point(p);
                (closest.distance_squared(p) < limit).then(|| Intersection {
                    index,
                    distance: self.origin.distance(closest),
                })
            })
            .collect();

        // Stable, so equal distances keep buffer order
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }
}

/// Star under the pointer, if any
pub fn hovered(camera: &Camera, ndc: Vec2, stars: &Stars, threshold: f32) -> Option<Intersection> {
    camera
        .ray(ndc)
        .intersect_points(&stars.pos, threshold)
        .first()
        .copied()
}
