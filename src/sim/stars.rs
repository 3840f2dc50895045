// stars.rs - Star particle buffer
//
// Flat arrays sized once at startup. Positions and colors are interleaved
// (xyz / rgb) so the page can view them directly as vertex attributes.

use glam::Vec3;

use super::{Explosions, StarWorld};
use crate::config::Config;

// Color (HSL)
const HUE_MIN: f32 = 0.6;
const HUE_SPAN: f32 = 0.2;
const SATURATION: f32 = 0.7;
const LIGHT_MIN: f32 = 0.5;
const LIGHT_SPAN: f32 = 0.5;

pub struct Stars {
    pub pos: Vec<f32>,     // xyz per star
    pub speed: Vec<f32>,   // depth speed per frame
    pub color: Vec<f32>,   // rgb per star, fixed
    pub n: usize,
}

impl Stars {
    /// Scatter `cfg.star_count` stars over the spawn cube
    pub fn new(cfg: &Config, rng: &mut u32) -> Self {
        let n = cfg.star_count;
        let mut stars = Self {
            pos: vec![0.0; n * 3],
            speed: vec![0.0; n],
            color: vec![0.0; n * 3],
            n,
        };

        for i in 0..n {
            let k = i * 3;
            stars.pos[k] = spread(cfg.spawn_extent, rng);
            stars.pos[k + 1] = spread(cfg.spawn_extent, rng);
            stars.pos[k + 2] = spread(cfg.spawn_extent, rng);

            stars.speed[i] = cfg.speed_min + StarWorld::rand(rng) * (cfg.speed_max - cfg.speed_min);

            let hue = HUE_MIN + StarWorld::rand(rng) * HUE_SPAN;
            let light = LIGHT_MIN + StarWorld::rand(rng) * LIGHT_SPAN;
            let [r, g, b] = hsl_to_rgb(hue, SATURATION, light);
            stars.color[k] = r;
            stars.color[k + 1] = g;
            stars.color[k + 2] = b;
        }

        stars
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    #[inline]
    pub fn position(&self, i: usize) -> Vec3 {
        let k = i * 3;
        Vec3::new(self.pos[k], self.pos[k + 1], self.pos[k + 2])
    }

    #[inline]
    pub fn set_position(&mut self, i: usize, p: Vec3) {
        let k = i * 3;
        self.pos[k] = p.x;
        self.pos[k + 1] = p.y;
        self.pos[k + 2] = p.z;
    }

    /// Send a star to the back of the field with a fresh lateral position
    #[inline]
    fn respawn(&mut self, i: usize, cfg: &Config, rng: &mut u32) {
        let k = i * 3;
        self.pos[k] = spread(cfg.spawn_extent, rng);
        self.pos[k + 1] = spread(cfg.spawn_extent, rng);
        self.pos[k + 2] = -cfg.depth_bound;
    }

    /// Advance every star one frame.
    ///
    /// Cruising stars move toward the viewer and wrap past the forward bound.
    /// Exploding stars drift along their override and are recycled once any
    /// coordinate leaves the recycle cube. Returns how many were recycled.
    pub fn update(&mut self, explosions: &mut Explosions, cfg: &Config, rng: &mut u32) -> usize {
        let mut recycled = 0;

        for i in 0..self.n {
            match explosions.velocity(i) {
                None => {
                    let k = i * 3;
                    let z = self.pos[k + 2] + self.speed[i];
                    if z > cfg.depth_bound {
                        self.respawn(i, cfg, rng);
                    } else {
                        self.pos[k + 2] = z;
                    }
                }
                Some(v) => {
                    let p = self.position(i) + v;
                    if p.abs().max_element() > cfg.recycle_bound {
                        self.respawn(i, cfg, rng);
                        explosions.remove(i);
                        recycled += 1;
                    } else {
                        self.set_position(i, p);
                    }
                }
            }
        }

        recycled
    }
}

/// Uniform in [-extent, extent)
#[inline]
fn spread(extent: f32, rng: &mut u32) -> f32 {
    (StarWorld::rand(rng) - 0.5) * 2.0 * extent
}

/// HSL (all components in [0, 1]) to RGB
fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [f32; 3] {
    if s == 0.0 {
        return [l, l, l];
    }

    let q = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    [
        hue_channel(p, q, h + 1.0 / 3.0),
        hue_channel(p, q, h),
        hue_channel(p, q, h - 1.0 / 3.0),
    ]
}

fn hue_channel(p: f32, q: f32, t: f32) -> f32 {
    let t = if t < 0.0 { t + 1.0 } else if t > 1.0 { t - 1.0 } else { t };
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * 6.0 * (2.0 / 3.0 - t)
    } else {
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(n: usize) -> (Stars, Explosions, Config, u32) {
        let cfg = Config::with_star_count(n);
        let mut rng = 0xDEADBEEF;
        let stars = Stars::new(&cfg, &mut rng);
        (stars, Explosions::new(n), cfg, rng)
    }

    #[test]
    fn spawn_fills_cube_and_ranges() {
        let (stars, _, cfg, _) = field(2000);

        assert_eq!(stars.pos.len(), 6000);
        assert_eq!(stars.color.len(), 6000);
        for i in 0..stars.len() {
            let p = stars.position(i);
            assert!(p.abs().max_element() <= cfg.spawn_extent);
            assert!(stars.speed[i] >= 0.02 && stars.speed[i] < 0.12);
        }
        assert!(stars.color.iter().all(|c| (0.0..=1.0).contains(c)));
    }

    #[test]
    fn cruising_star_moves_by_its_speed() {
        let (mut stars, mut ex, cfg, mut rng) = field(64);
        stars.set_position(42, Vec3::new(0.0, 0.0, 1499.0));
        stars.speed[42] = 0.05;

        stars.update(&mut ex, &cfg, &mut rng);
        let p = stars.position(42);
        assert_eq!((p.x, p.y), (0.0, 0.0));
        assert!((p.z - 1499.05).abs() < 1e-3);
    }

    #[test]
    fn cruising_star_wraps_past_forward_bound() {
        let (mut stars, mut ex, cfg, mut rng) = field(64);
        stars.set_position(42, Vec3::new(0.0, 0.0, 1499.99));
        stars.speed[42] = 0.02;

        stars.update(&mut ex, &cfg, &mut rng);
        let p = stars.position(42);
        assert_eq!(p.z, -1500.0);
        assert!(p.x >= -3000.0 && p.x < 3000.0);
        assert!(p.y >= -3000.0 && p.y < 3000.0);
    }

    #[test]
    fn star_exactly_on_bound_does_not_wrap() {
        let (mut stars, mut ex, cfg, mut rng) = field(8);
        stars.set_position(0, Vec3::new(5.0, 5.0, 1499.5));
        stars.speed[0] = 0.5;

        stars.update(&mut ex, &cfg, &mut rng);
        assert_eq!(stars.position(0), Vec3::new(5.0, 5.0, 1500.0));
    }

    #[test]
    fn exploding_star_recycles_outside_cube() {
        let (mut stars, mut ex, cfg, mut rng) = field(16);
        stars.set_position(7, Vec3::new(2990.0, 0.0, 0.0));
        ex.insert(7, Vec3::new(15.0, 0.0, 0.0));

        assert_eq!(stars.update(&mut ex, &cfg, &mut rng), 1);
        let p = stars.position(7);
        assert_eq!(p.z, -1500.0);
        assert!(p.x.abs() <= 3000.0 && p.y.abs() <= 3000.0);
        assert!(!ex.is_active(7));
    }

    #[test]
    fn exploding_star_drifts_without_drag() {
        let (mut stars, mut ex, cfg, mut rng) = field(16);
        stars.set_position(3, Vec3::ZERO);
        ex.insert(3, Vec3::new(1.0, -2.0, 3.0));

        for _ in 0..10 {
            stars.update(&mut ex, &cfg, &mut rng);
        }
        assert_eq!(stars.position(3), Vec3::new(10.0, -20.0, 30.0));
        assert!(ex.is_active(3));
    }

    #[test]
    fn hsl_primaries() {
        let close = |a: [f32; 3], b: [f32; 3]| a.iter().zip(b).all(|(x, y)| (x - y).abs() < 1e-5);

        assert!(close(hsl_to_rgb(0.0, 1.0, 0.5), [1.0, 0.0, 0.0]));
        assert!(close(hsl_to_rgb(1.0 / 3.0, 1.0, 0.5), [0.0, 1.0, 0.0]));
        assert!(close(hsl_to_rgb(2.0 / 3.0, 1.0, 0.5), [0.0, 0.0, 1.0]));
        assert_eq!(hsl_to_rgb(0.3, 0.0, 0.25), [0.25, 0.25, 0.25]);
    }
}
