use wasm_bindgen::prelude::*;

// ============================================================================
// STARFIELD - Drifting point stars with pointer parallax and hover bursts
// ============================================================================

pub mod config;
pub mod pick;
pub mod render;
pub mod sim;
pub mod view;

pub use config::{Config, ConfigError};
pub use sim::StarWorld;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
}

#[wasm_bindgen]
pub struct Starfield {
    world: StarWorld,
}

#[wasm_bindgen]
impl Starfield {
    #[wasm_bindgen(constructor)]
    pub fn new(w: u32, h: u32, pixel_ratio: f32) -> Result<Starfield, JsValue> {
        StarWorld::new(w, h, pixel_ratio, Config::default(), seed())
            .map(|world| Self { world })
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Run one frame; call from requestAnimationFrame
    pub fn tick(&mut self) {
        self.world.tick();
    }

    pub fn pointer_move(&mut self, client_x: f32, client_y: f32) {
        self.world.pointer_move(client_x, client_y);
    }

    pub fn resize(&mut self, w: u32, h: u32, pixel_ratio: f32) {
        self.world.resize(w, h, pixel_ratio);
    }

    /// True once after each frame that moved stars
    pub fn take_dirty(&mut self) -> bool {
        self.world.presenter_mut().take_dirty()
    }

    // Accessors for WASM
    pub fn positions_ptr(&self) -> *const f32 { self.world.stars().pos.as_ptr() }
    pub fn positions_len(&self) -> usize { self.world.stars().pos.len() }
    pub fn colors_ptr(&self) -> *const f32 { self.world.stars().color.as_ptr() }
    pub fn colors_len(&self) -> usize { self.world.stars().color.len() }
    pub fn view_proj_ptr(&self) -> *const f32 { self.world.presenter().view_proj_ptr() }

    pub fn camera_x(&self) -> f32 { self.world.presenter().eye().x }
    pub fn camera_y(&self) -> f32 { self.world.presenter().eye().y }
    pub fn camera_z(&self) -> f32 { self.world.presenter().eye().z }

    pub fn star_count(&self) -> usize { self.world.stars().len() }
    pub fn exploding_count(&self) -> usize { self.world.explosions().count() }
    pub fn frame(&self) -> f64 { self.world.frame() as f64 }

    pub fn point_size(&self) -> f32 { render::POINT_SIZE }
    pub fn opacity(&self) -> f32 { render::OPACITY }

    pub fn width(&self) -> u32 { self.world.width() }
    pub fn height(&self) -> u32 { self.world.height() }
    pub fn pixel_ratio(&self) -> f32 { self.world.pixel_ratio() }
}

#[cfg(target_arch = "wasm32")]
fn seed() -> u32 {
    (js_sys::Math::random() * u32::MAX as f64) as u32 | 1
}

// Native builds (tests) get a fixed field
#[cfg(not(target_arch = "wasm32"))]
fn seed() -> u32 {
    0xDEADBEEF
}
