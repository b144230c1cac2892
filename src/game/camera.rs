use crate::math::Vec2;

/// How quickly the camera closes the gap to its target, per second
const FOLLOW_RATE: f32 = 5.0;

/// Maps world space to screen space.
///
/// `z` is a per-layer parallax factor: 1 for the playfield, smaller for
/// background layers, which then scroll slower and read as farther away.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub loc: Vec2,
    half_screen: Vec2,
}

impl Camera {
    pub fn new(screen_width: u32, screen_height: u32) -> Self {
        Self {
            loc: Vec2::ZERO,
            half_screen: Vec2::new(screen_width as f32 / 2.0, screen_height as f32 / 2.0),
        }
    }

    pub fn screen_size(&self) -> Vec2 {
        self.half_screen * 2.0
    }

    /// Jump straight to `target`
    pub fn center_on(&mut self, target: Vec2) {
        self.loc = target;
    }

    /// Ease toward `target`
    pub fn follow(&mut self, target: Vec2, dt: f32) {
        let t = (FOLLOW_RATE * dt).min(1.0);
        self.loc += (target - self.loc) * t;
    }

    #[inline]
    pub fn to_screen(&self, world: Vec2, z: f32) -> Vec2 {
        world - self.loc * z + self.half_screen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_center_maps_to_screen_center() {
        let mut camera = Camera::new(1600, 900);
        camera.center_on(Vec2::new(300.0, -200.0));
        assert_eq!(camera.to_screen(Vec2::new(300.0, -200.0), 1.0), Vec2::new(800.0, 450.0));
        assert_eq!(camera.to_screen(Vec2::new(310.0, -200.0), 1.0), Vec2::new(810.0, 450.0));
    }

    #[test]
    fn test_parallax_layers_scroll_slower() {
        let mut camera = Camera::new(100, 100);
        let far = Vec2::new(10.0, 10.0);
        let before = camera.to_screen(far, 0.25);
        camera.center_on(Vec2::new(40.0, 0.0));
        let after = camera.to_screen(far, 0.25);
        assert_eq!(before.x - after.x, 10.0);
    }

    #[test]
    fn test_follow_converges() {
        let mut camera = Camera::new(100, 100);
        let target = Vec2::new(100.0, 50.0);
        for _ in 0..120 {
            camera.follow(target, 1.0 / 60.0);
        }
        assert!(camera.loc.approx_eq(&target, 0.1));

        camera.follow(Vec2::ZERO, 10.0);
        assert_eq!(camera.loc, Vec2::ZERO);
    }
}
