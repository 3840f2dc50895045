// render.rs - Frame output for the page's point-sprite draw
//
// The page owns the canvas and the WebGL program. After each tick it reads:
//   positions  xyz f32 per star (re-upload when dirty)
//   colors     rgb f32 per star (upload once)
//   view_proj  16 f32, column-major
//   eye        camera position, for size attenuation

use glam::Vec3;

use crate::view::Camera;

// Point material
pub const POINT_SIZE: f32 = 2.5;
pub const OPACITY: f32 = 0.9;

pub struct Presenter {
    view_proj: [f32; 16],
    eye: [f32; 3],
    dirty: bool,
}

impl Presenter {
    pub fn new(camera: &Camera) -> Self {
        let mut presenter = Self {
            view_proj: [0.0; 16],
            eye: [0.0; 3],
            dirty: true,
        };
        presenter.present(camera);
        presenter
    }

    /// Capture the camera for this frame. Every star moves each frame, so
    /// the position buffer is always stale afterwards.
    pub fn present(&mut self, camera: &Camera) {
        self.view_proj = camera.view_proj().to_cols_array();
        self.eye = camera.position.to_array();
        self.dirty = true;
    }

    /// Read and clear the position-buffer dirty flag
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn view_proj(&self) -> &[f32; 16] {
        &self.view_proj
    }

    pub fn view_proj_ptr(&self) -> *const f32 {
        self.view_proj.as_ptr()
    }

    pub fn eye(&self) -> Vec3 {
        Vec3::from_array(self.eye)
    }
}
