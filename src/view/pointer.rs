// pointer.rs - Raw pointer capture
//
// Stored exactly as reported; smoothing happens in the parallax filter.

use glam::Vec2;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pointer {
    /// Offset from viewport center in CSS pixels, y down
    pub offset: Vec2,
    /// Normalized device coordinates, y up
    pub ndc: Vec2,
}

impl Pointer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pointer move at client position (x, y) in a w x h viewport
    pub fn moved(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.offset = Vec2::new(x - w / 2.0, y - h / 2.0);

        if w > 0.0 && h > 0.0 {
            self.ndc = Vec2::new(
                (x / w) * 2.0 - 1.0,
                -(y / h) * 2.0 + 1.0,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_maps_to_origin() {
        let mut p = Pointer::new();
        p.moved(400.0, 300.0, 800.0, 600.0);
        assert_eq!(p.offset, Vec2::ZERO);
        assert_eq!(p.ndc, Vec2::ZERO);
    }

    #[test]
    fn corners_flip_y() {
        let mut p = Pointer::new();
        p.moved(0.0, 0.0, 800.0, 600.0);
        assert_eq!(p.offset, Vec2::new(-400.0, -300.0));
        assert_eq!(p.ndc, Vec2::new(-1.0, 1.0));

        p.moved(800.0, 600.0, 800.0, 600.0);
        assert_eq!(p.ndc, Vec2::new(1.0, -1.0));
    }

    #[test]
    fn zero_viewport_keeps_last_ndc() {
        let mut p = Pointer::new();
        p.moved(200.0, 150.0, 800.0, 600.0);
        let ndc = p.ndc;
        p.moved(10.0, 10.0, 0.0, 0.0);
        assert_eq!(p.ndc, ndc);
        assert_eq!(p.offset, Vec2::new(10.0, 10.0));
    }
}
