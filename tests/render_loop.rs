#![cfg(not(target_arch = "wasm32"))]

use cloth_viz::error::Result;
use cloth_viz::{Direction, DrawCall, FrameRenderer, GraphicsBackend, Mesh, ViewerConfig};
use glam::{Mat4, Vec3};

#[derive(Debug, Clone, PartialEq)]
enum Op {
    Upload { vertex_data: Vec<f32>, indices: Vec<u16> },
    Matrix(Mat4),
    Clear([f32; 4]),
    Draw(DrawCall),
}

#[derive(Default)]
struct Recorder {
    ops: Vec<Op>,
}

impl Recorder {
    fn draws(&self) -> Vec<DrawCall> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Draw(call) => Some(*call),
                _ => None,
            })
            .collect()
    }

    fn uploads(&self) -> Vec<&Op> {
        self.ops.iter().filter(|op| matches!(op, Op::Upload { .. })).collect()
    }
}

impl GraphicsBackend for Recorder {
    fn upload_mesh(&mut self, mesh: &Mesh) -> Result<()> {
        self.ops.push(Op::Upload {
            vertex_data: mesh.vertex_buffer_data(),
            indices: mesh.indices().to_vec(),
        });
        Ok(())
    }

    fn set_view_projection(&mut self, matrix: &Mat4) {
        self.ops.push(Op::Matrix(*matrix));
    }

    fn clear(&mut self, color: [f32; 4]) {
        self.ops.push(Op::Clear(color));
    }

    fn draw(&mut self, call: DrawCall) {
        self.ops.push(Op::Draw(call));
    }
}

fn quad() -> Mesh {
    Mesh::new(
        vec![
            -0.5, -0.5, 0.0, //
            0.5, -0.5, 0.0, //
            0.5, 0.5, 0.0, //
            -0.5, 0.5, 0.0,
        ],
        vec![
            0.0, 0.0, 1.0, //
            0.0, 0.0, 1.0, //
            1.0, 0.0, 0.0, //
            1.0, 0.0, 0.0,
        ],
        vec![0, 1, 2, 0, 2, 3],
    )
    .unwrap()
}

fn renderer() -> FrameRenderer<Recorder> {
    FrameRenderer::new(Recorder::default(), &quad(), &ViewerConfig::default()).unwrap()
}

#[test]
fn single_tick_on_quad_issues_one_draw() {
    let mut r = renderer();
    let before = r.backend().ops.len();

    assert_eq!(r.tick(), DrawCall::Triangles { index_count: 6 });

    let ops = &r.backend().ops[before..];
    assert_eq!(ops.len(), 3);
    assert!(matches!(ops[0], Op::Matrix(_)));
    assert_eq!(ops[1], Op::Clear([1.0, 1.0, 1.0, 1.0]));
    assert_eq!(ops[2], Op::Draw(DrawCall::Triangles { index_count: 6 }));
    assert_eq!(r.backend().draws().len(), 1);
}

#[test]
fn toggled_quad_draws_points() {
    let mut r = renderer();
    r.set_show_nodes(true);
    let call = r.tick();
    assert_eq!(call, DrawCall::Points { count: 4 });
    assert_eq!(call.element_count(), 4);
    assert_eq!(r.backend().draws(), vec![DrawCall::Points { count: 4 }]);
}

#[test]
fn toggling_leaves_buffers_alone() {
    let mut r = renderer();
    for i in 0..6 {
        r.set_show_nodes(i % 2 == 0);
        r.tick();
    }

    let uploads = r.backend().uploads();
    assert_eq!(uploads.len(), 1);
    assert_eq!(
        uploads[0],
        &Op::Upload {
            vertex_data: quad().vertex_buffer_data(),
            indices: vec![0, 1, 2, 0, 2, 3],
        }
    );
    assert_eq!(
        r.backend().draws(),
        vec![
            DrawCall::Points { count: 4 },
            DrawCall::Triangles { index_count: 6 },
            DrawCall::Points { count: 4 },
            DrawCall::Triangles { index_count: 6 },
            DrawCall::Points { count: 4 },
            DrawCall::Triangles { index_count: 6 },
        ]
    );
}

#[test]
fn flags_follow_latest_event_per_key() {
    let mut r = renderer();
    let events: [(&str, bool); 9] = [
        ("ArrowUp", true),
        ("ArrowUp", true),
        ("ArrowLeft", true),
        ("ArrowDown", true),
        ("ArrowLeft", false),
        ("ArrowRight", false),
        ("ArrowDown", false),
        ("ArrowDown", true),
        ("Space", true),
    ];

    let mut expected = [false; 4];
    for (key, pressed) in events {
        let handled = if pressed { r.on_key_down(key) } else { r.on_key_up(key) };
        if let Some(direction) = Direction::from_key(key) {
            assert!(handled);
            expected[Direction::ALL.iter().position(|d| *d == direction).unwrap()] = pressed;
        } else {
            assert!(!handled);
        }
        for (direction, want) in Direction::ALL.iter().zip(expected) {
            assert_eq!(r.keys().is_pressed(*direction), want, "{direction:?} after {key}");
        }
    }
    assert_eq!(expected, [true, true, false, false]);
}

#[test]
fn key_events_do_not_draw() {
    let mut r = renderer();
    let before = r.backend().ops.len();
    r.on_key_down("ArrowLeft");
    r.on_key_up("ArrowLeft");
    assert_eq!(r.backend().ops.len(), before);
}

#[test]
fn holding_up_or_down_moves_by_fixed_steps() {
    const N: usize = 12;
    let mut r = renderer();
    let step = r.camera().height_step();
    let start = r.camera().eye();

    r.on_key_down("ArrowUp");
    for _ in 0..N {
        r.tick();
    }
    r.on_key_up("ArrowUp");
    let up = r.camera().eye();
    assert!((up.z - (start.z + N as f32 * step)).abs() < 1e-5);
    assert_eq!(up.truncate(), start.truncate());

    for _ in 0..N {
        r.tick();
    }
    assert_eq!(r.camera().eye(), up);

    r.on_key_down("ArrowDown");
    for _ in 0..N {
        r.tick();
    }
    assert!((r.camera().eye().z - start.z).abs() < 1e-5);
}

#[test]
fn left_then_right_returns_to_start() {
    const N: usize = 40;
    let mut r = renderer();
    let start = r.camera().eye();

    r.on_key_down("ArrowLeft");
    for _ in 0..N {
        r.tick();
    }
    r.on_key_up("ArrowLeft");
    assert!(r.camera().eye().distance(start) > 0.1);

    r.on_key_down("ArrowRight");
    for _ in 0..N {
        r.tick();
    }
    assert!(r.camera().eye().distance(start) < 1e-4);
}

#[test]
fn uploaded_matrix_tracks_camera() {
    let mut r = renderer();
    r.on_key_down("ArrowLeft");
    r.tick();

    let last_matrix = r
        .backend()
        .ops
        .iter()
        .rev()
        .find_map(|op| match op {
            Op::Matrix(m) => Some(*m),
            _ => None,
        })
        .unwrap();
    assert_eq!(last_matrix, r.camera().view_projection());
    assert_ne!(r.camera().eye(), Vec3::new(2.5, 2.5, 0.5));
}
