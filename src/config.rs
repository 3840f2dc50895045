// config.rs - Starfield tunables
//
// Everything the simulation reads is a fixed constant. `Config` only groups
// them so a world can be built with a smaller field in tests.

use thiserror::Error;

// Field
pub const STAR_COUNT: usize = 10_000;
pub const DEPTH_BOUND: f32 = 1500.0;    // forward wrap at +, respawn at -
pub const SPAWN_EXTENT: f32 = 3000.0;   // half-size of the spawn cube
pub const RECYCLE_BOUND: f32 = 3000.0;  // exploding stars reset past this
pub const SPEED_MIN: f32 = 0.02;
pub const SPEED_MAX: f32 = 0.12;
pub const BURST_SPEED: f32 = 10.0;      // per-axis explosion velocity

// Parallax
pub const PARALLAX_SMOOTHING: f32 = 0.05;
pub const PARALLAX_SCALE: f32 = 0.02;

// Camera
pub const FOV_DEG: f32 = 75.0;
pub const NEAR: f32 = 0.1;
pub const FAR: f32 = 1500.0;
pub const CAMERA_Z: f32 = 1000.0;

// Picking
pub const HIT_THRESHOLD: f32 = 1.0;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("star count must be non-zero")]
    NoStars,

    #[error("speed range [{min}, {max}) is empty")]
    EmptySpeedRange { min: f32, max: f32 },

    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },

    #[error("parallax smoothing {0} must lie in (0, 1]")]
    Smoothing(f32),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub star_count: usize,
    pub depth_bound: f32,
    pub spawn_extent: f32,
    pub recycle_bound: f32,
    pub speed_min: f32,
    pub speed_max: f32,
    pub burst_speed: f32,
    pub parallax_smoothing: f32,
    pub parallax_scale: f32,
    pub fov_deg: f32,
    pub near: f32,
    pub far: f32,
    pub camera_z: f32,
    pub hit_threshold: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            star_count: STAR_COUNT,
            depth_bound: DEPTH_BOUND,
            spawn_extent: SPAWN_EXTENT,
            recycle_bound: RECYCLE_BOUND,
            speed_min: SPEED_MIN,
            speed_max: SPEED_MAX,
            burst_speed: BURST_SPEED,
            parallax_smoothing: PARALLAX_SMOOTHING,
            parallax_scale: PARALLAX_SCALE,
            fov_deg: FOV_DEG,
            near: NEAR,
            far: FAR,
            camera_z: CAMERA_Z,
            hit_threshold: HIT_THRESHOLD,
        }
    }
}

impl Config {
    /// Same field with a different number of stars
    pub fn with_star_count(star_count: usize) -> Self {
        Self { star_count, ..Self::default() }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.star_count == 0 {
            return Err(ConfigError::NoStars);
        }
        if !(self.speed_min < self.speed_max) {
            return Err(ConfigError::EmptySpeedRange { min: self.speed_min, max: self.speed_max });
        }

        let positive = [
            ("depth_bound", self.depth_bound),
            ("spawn_extent", self.spawn_extent),
            ("recycle_bound", self.recycle_bound),
            ("burst_speed", self.burst_speed),
            ("parallax_scale", self.parallax_scale),
            ("fov_deg", self.fov_deg),
            ("near", self.near),
            ("far", self.far),
            ("hit_threshold", self.hit_threshold),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }

        let s = self.parallax_smoothing;
        if !(s > 0.0 && s <= 1.0) {
            return Err(ConfigError::Smoothing(s));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(Config::default().validate(), Ok(()));
        assert_eq!(Config::default().star_count, 10_000);
    }

    #[test]
    fn rejects_empty_field() {
        assert_eq!(Config::with_star_count(0).validate(), Err(ConfigError::NoStars));
    }

    #[test]
    fn rejects_inverted_speed_range() {
        let cfg = Config { speed_min: 0.2, speed_max: 0.1, ..Config::default() };
        assert!(matches!(cfg.validate(), Err(ConfigError::EmptySpeedRange { .. })));
    }

    #[test]
    fn rejects_nan_bound() {
        let cfg = Config { recycle_bound: f32::NAN, ..Config::default() };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::NonPositive { name: "recycle_bound", .. })
        ));
    }

    #[test]
    fn rejects_overshooting_smoothing() {
        let cfg = Config { parallax_smoothing: 1.5, ..Config::default() };
        assert_eq!(cfg.validate(), Err(ConfigError::Smoothing(1.5)));
        assert_eq!(
            ConfigError::Smoothing(1.5).to_string(),
            "parallax smoothing 1.5 must lie in (0, 1]"
        );
    }
}
