use glam::{Mat3, Mat4, Vec3};

use crate::config::ViewerConfig;

/// Camera orbiting the origin with +Z up.
///
/// Motion is tick-based: every call moves by a fixed step regardless of how much
/// wall-clock time passed since the previous one.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    eye: Vec3,
    target: Vec3,
    up: Vec3,
    rotate_left: Mat3,
    rotate_right: Mat3,
    height_step: f32,
    height_limits: Option<(f32, f32)>,
    projection: Mat4,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::from_config(&ViewerConfig::default())
    }
}

impl OrbitCamera {
    pub fn from_config(config: &ViewerConfig) -> Self {
        let rotate_left = Mat3::from_rotation_z(-config.rotation_step());
        Self {
            eye: config.initial_eye,
            target: Vec3::ZERO,
            up: Vec3::Z,
            rotate_left,
            rotate_right: rotate_left.inverse(),
            height_step: config.height_step(),
            height_limits: config.height_limits.map(|[lo, hi]| (lo, hi)),
            projection: Mat4::perspective_rh_gl(config.fov, config.aspect, config.near, config.far),
        }
    }

    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn height_step(&self) -> f32 {
        self.height_step
    }

    pub fn raise(&mut self) {
        self.move_vertically(self.height_step);
    }

    pub fn lower(&mut self) {
        self.move_vertically(-self.height_step);
    }

    fn move_vertically(&mut self, delta: f32) {
        let mut z = self.eye.z + delta;
        if let Some((lo, hi)) = self.height_limits {
            z = z.clamp(lo, hi);
        }
        self.eye.z = z;
    }

    pub fn orbit_left(&mut self) {
        self.eye = self.rotate_left * self.eye;
    }

    pub fn orbit_right(&mut self) {
        self.eye = self.rotate_right * self.eye;
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    /// Projection × view, the matrix the vertex shader receives.
    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_configured_eye() {
        let cam = OrbitCamera::default();
        assert_eq!(cam.eye(), Vec3::new(2.5, 2.5, 0.5));
        assert_eq!(cam.target(), Vec3::ZERO);
        assert!(cam.view_projection().is_finite());
    }

    #[test]
    fn orbit_keeps_height_and_radius() {
        let mut cam = OrbitCamera::default();
        let start = cam.eye();
        for _ in 0..50 {
            cam.orbit_left();
        }
        assert_eq!(cam.eye().z, start.z);
        assert!((cam.eye().truncate().length() - start.truncate().length()).abs() < 1e-5);
        assert!(cam.eye().distance(start) > 0.1);
    }

    #[test]
    fn orbit_left_turns_clockwise_seen_from_above() {
        let mut cam = OrbitCamera::default();
        let before = cam.eye().truncate();
        cam.orbit_left();
        let after = cam.eye().truncate();
        assert!(before.perp_dot(after) < 0.0);
    }

    #[test]
    fn height_limits_clamp() {
        let config = ViewerConfig {
            height_limits: Some([0.0, 0.6]),
            ..Default::default()
        };
        let mut cam = OrbitCamera::from_config(&config);
        for _ in 0..10 {
            cam.raise();
        }
        assert_eq!(cam.eye().z, 0.6);
        for _ in 0..100 {
            cam.lower();
        }
        assert_eq!(cam.eye().z, 0.0);
    }

    #[test]
    fn target_projects_inside_clip_volume() {
        let cam = OrbitCamera::default();
        let clip = cam.view_projection() * Vec3::ZERO.extend(1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5);
        assert!(ndc.z > -1.0 && ndc.z < 1.0);
    }
}
