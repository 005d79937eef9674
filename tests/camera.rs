#![cfg(not(target_arch = "wasm32"))]

use cloth_viz::{OrbitCamera, ViewerConfig};
use glam::Vec3;

fn assert_look_at(cam: &OrbitCamera) {
    let view = cam.view_matrix();
    let target = view.transform_point3(cam.target());
    let distance = cam.eye().distance(cam.target());

    assert!(target.x.abs() < 1e-4, "target off axis: {target:?}");
    assert!(target.y.abs() < 1e-4, "target off axis: {target:?}");
    assert!((target.z + distance).abs() < 1e-4, "target at {target:?}, expected depth {distance}");

    // The eye itself sits at the view-space origin.
    assert!(view.transform_point3(cam.eye()).length() < 1e-4);
}

#[test]
fn look_at_holds_while_moving() {
    let mut cam = OrbitCamera::default();
    assert_look_at(&cam);

    for i in 0..120 {
        match i % 4 {
            0 => cam.orbit_left(),
            1 => cam.raise(),
            2 => cam.orbit_left(),
            _ => cam.orbit_right(),
        }
        assert_look_at(&cam);
    }

    for _ in 0..30 {
        cam.lower();
        assert_look_at(&cam);
    }
}

#[test]
fn up_vector_stays_vertical_on_screen() {
    let cam = OrbitCamera::default();
    let view = cam.view_matrix();
    let above = view.transform_point3(Vec3::Z) - view.transform_point3(Vec3::ZERO);
    assert!(above.y > 0.0);
    assert!(above.x.abs() < 1e-5);
}

#[test]
fn rotation_step_scales_with_inverse_frame_time() {
    let slow = ViewerConfig {
        framerate: 15.0,
        ..Default::default()
    };
    let mut fast_cam = OrbitCamera::default();
    let mut slow_cam = OrbitCamera::from_config(&slow);

    // 15 Hz has twice the frame time, so each tick turns half as far.
    fast_cam.orbit_left();
    slow_cam.orbit_left();
    slow_cam.orbit_left();
    assert!(fast_cam.eye().distance(slow_cam.eye()) < 1e-5);
}

#[test]
fn projection_is_opengl_perspective() {
    let cam = OrbitCamera::default();
    let proj = cam.projection_matrix();
    // near plane maps to -1, far plane to +1
    let near = proj.project_point3(Vec3::new(0.0, 0.0, -0.2));
    let far = proj.project_point3(Vec3::new(0.0, 0.0, -5.0));
    assert!((near.z + 1.0).abs() < 1e-5);
    assert!((far.z - 1.0).abs() < 1e-4);
}
