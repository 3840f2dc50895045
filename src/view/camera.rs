// camera.rs - Perspective camera
//
// Looks down -Z from in front of the field. Only x/y move (parallax);
// orientation is fixed. Depth maps to [0, 1] clip space.

use glam::{Mat4, Vec2, Vec3};

use crate::config::Config;
use crate::pick::Ray;

pub struct Camera {
    pub position: Vec3,
    fov_y: f32,   // radians
    aspect: f32,
    near: f32,
    far: f32,
    proj: Mat4,
}

impl Camera {
    pub fn new(cfg: &Config, aspect: f32) -> Self {
        let mut camera = Self {
            position: Vec3::new(0.0, 0.0, cfg.camera_z),
            fov_y: cfg.fov_deg.to_radians(),
            aspect: 1.0,
            near: cfg.near,
            far: cfg.far,
            proj: Mat4::IDENTITY,
        };
        camera.set_aspect(aspect);
        camera
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Update aspect ratio and rebuild the projection
    pub fn set_aspect(&mut self, aspect: f32) {
        // Degenerate viewports keep the previous aspect
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        }
        self.proj = Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far);
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_to_rh(self.position, Vec3::NEG_Z, Vec3::Y)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.proj * self.view()
    }

    /// Ray from the camera through a point in normalized device coordinates
    pub fn ray(&self, ndc: Vec2) -> Ray {
        // Unproject onto the far plane in view space, then rotate to world
        let far = self.proj.inverse().project_point3(Vec3::new(ndc.x, ndc.y, 1.0));
        let dir = self.view().inverse().transform_vector3(far).normalize();
        Ray::new(self.position, dir)
    }
}
