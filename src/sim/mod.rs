// sim/ - Starfield simulation
//
// One owned world per page. Star data is Structure-of-Arrays; explosion
// overrides sit in parallel arrays beside it. Each tick runs, in order:
// star step, parallax, hover pick, present.

mod explosion;
mod stars;

pub use explosion::Explosions;
pub use stars::Stars;

use glam::Vec2;
use log::{debug, info, trace};

use crate::config::{Config, ConfigError};
use crate::pick::{self, Intersection};
use crate::render::Presenter;
use crate::view::{Camera, Parallax, Pointer};

/// Starfield world
pub struct StarWorld {
    // Viewport, CSS pixels
    w: u32,
    h: u32,
    pixel_ratio: f32,

    cfg: Config,

    // Entities
    stars: Stars,
    explosions: Explosions,

    // Viewer
    pointer: Pointer,
    parallax: Parallax,
    camera: Camera,

    // Output
    presenter: Presenter,

    frame: u64,

    // RNG state
    rng: u32,
}

impl StarWorld {
    pub fn new(w: u32, h: u32, pixel_ratio: f32, cfg: Config, seed: u32) -> Result<Self, ConfigError> {
        cfg.validate()?;

        // xorshift never leaves zero
        let mut rng = if seed == 0 { 0xDEADBEEF } else { seed };
        let stars = Stars::new(&cfg, &mut rng);
        let camera = Camera::new(&cfg, aspect(w, h));

        info!("starfield: {} stars, {}x{} @{}x", cfg.star_count, w, h, pixel_ratio);

        Ok(Self {
            w,
            h,
            pixel_ratio,
            explosions: Explosions::new(cfg.star_count),
            pointer: Pointer::new(),
            parallax: Parallax::new(cfg.parallax_smoothing, cfg.parallax_scale),
            presenter: Presenter::new(&camera),
            camera,
            stars,
            cfg,
            frame: 0,
            rng,
        })
    }

    /// Run one frame
    pub fn tick(&mut self) {
        self.step();
        self.update_parallax();
        self.hover();
        self.presenter.present(&self.camera);
        self.frame += 1;

        trace!("frame {}: {} exploding", self.frame, self.explosions.count());
    }

    /// Advance every star one frame
    pub fn step(&mut self) {
        let recycled = self.stars.update(&mut self.explosions, &self.cfg, &mut self.rng);
        if recycled > 0 {
            debug!("recycled {} stars", recycled);
        }
    }

    /// Ease the camera toward the pointer
    pub fn update_parallax(&mut self) {
        let xy = self.parallax.update(self.pointer.offset);
        self.camera.position.x = xy.x;
        self.camera.position.y = xy.y;
    }

    /// Explode the nearest star under the pointer, if any
    pub fn hover(&mut self) -> Option<Intersection> {
        let hit = pick::hovered(&self.camera, self.pointer.ndc, &self.stars, self.cfg.hit_threshold)?;
        self.explode(hit.index);
        Some(hit)
    }

    /// Start an explosion on a cruising star. Returns false if it was
    /// already exploding.
    pub fn explode(&mut self, i: usize) -> bool {
        let started = self.explosions.trigger(i, self.cfg.burst_speed, &mut self.rng);
        if started {
            debug!("star {} exploding: {}", i, self.explosions.velocity(i).unwrap_or_default());
        }
        started
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.pointer.moved(x, y, self.w as f32, self.h as f32);
    }

    pub fn resize(&mut self, w: u32, h: u32, pixel_ratio: f32) {
        self.w = w;
        self.h = h;
        self.pixel_ratio = pixel_ratio;
        self.camera.set_aspect(aspect(w, h));

        info!("starfield resized to {}x{} @{}x", w, h, pixel_ratio);
    }

    // Random number generator (xorshift32), uniform in [0, 1)
    #[inline(always)]
    pub fn rand(rng: &mut u32) -> f32 {
        *rng ^= *rng << 13;
        *rng ^= *rng >> 17;
        *rng ^= *rng << 5;
        (*rng >> 8) as f32 * (1.0 / 16777216.0)
    }

    // Accessors
    pub fn config(&self) -> &Config { &self.cfg }
    pub fn stars(&self) -> &Stars { &self.stars }
    pub fn stars_mut(&mut self) -> &mut Stars { &mut self.stars }
    pub fn explosions(&self) -> &Explosions { &self.explosions }
    pub fn explosions_mut(&mut self) -> &mut Explosions { &mut self.explosions }
    pub fn pointer(&self) -> &Pointer { &self.pointer }
    pub fn parallax_offset(&self) -> Vec2 { self.parallax.offset() }
    pub fn camera(&self) -> &Camera { &self.camera }
    pub fn presenter(&self) -> &Presenter { &self.presenter }
    pub fn presenter_mut(&mut self) -> &mut Presenter { &mut self.presenter }
    pub fn frame(&self) -> u64 { self.frame }
    pub fn width(&self) -> u32 { self.w }
    pub fn height(&self) -> u32 { self.h }
    pub fn pixel_ratio(&self) -> f32 { self.pixel_ratio }
}

#[inline]
fn aspect(w: u32, h: u32) -> f32 {
    w as f32 / h as f32
}
