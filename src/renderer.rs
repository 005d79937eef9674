use glam::Mat4;

use crate::camera::OrbitCamera;
use crate::config::ViewerConfig;
use crate::error::Result;
use crate::input::{Direction, KeyState};
use crate::mesh::Mesh;

/// The single draw issued per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawCall {
    /// Every vertex as a point.
    Points { count: usize },
    /// Indexed triangle list over the whole index buffer.
    Triangles { index_count: usize },
}

impl DrawCall {
    /// Number of vertices or indices the GPU walks for this call.
    pub fn element_count(&self) -> usize {
        match *self {
            DrawCall::Points { count } => count,
            DrawCall::Triangles { index_count } => index_count,
        }
    }
}

/// The GPU operations the frame loop needs.
pub trait GraphicsBackend {
    /// Uploads the index buffer and the combined position/colour buffer once.
    fn upload_mesh(&mut self, mesh: &Mesh) -> Result<()>;

    /// Sets the model-view-projection uniform.
    fn set_view_projection(&mut self, matrix: &Mat4);

    /// Clears colour and depth.
    fn clear(&mut self, color: [f32; 4]);

    fn draw(&mut self, call: DrawCall);
}

/// Owns the camera, the key flags and the backend, and draws one frame per tick.
pub struct FrameRenderer<B: GraphicsBackend> {
    backend: B,
    camera: OrbitCamera,
    keys: KeyState,
    show_nodes: bool,
    clear_color: [f32; 4],
    vertex_count: usize,
    index_count: usize,
    frames: u64,
}

impl<B: GraphicsBackend> FrameRenderer<B> {
    pub fn new(mut backend: B, mesh: &Mesh, config: &ViewerConfig) -> Result<Self> {
        config.validate()?;
        backend.upload_mesh(mesh)?;

        let camera = OrbitCamera::from_config(config);
        backend.set_view_projection(&camera.view_projection());

        log::info!(
            "uploaded mesh: {} vertices, {} triangles",
            mesh.vertex_count(),
            mesh.triangle_count()
        );
        log::debug!(
            "camera at {:?}, {} ms per tick, height step {}",
            camera.eye(),
            config.frame_time_ms(),
            camera.height_step()
        );

        Ok(Self {
            backend,
            camera,
            keys: KeyState::default(),
            show_nodes: false,
            clear_color: config.clear_color,
            vertex_count: mesh.vertex_count(),
            index_count: mesh.indices().len(),
            frames: 0,
        })
    }

    pub fn on_key_down(&mut self, key: &str) -> bool {
        self.keys.key_event(key, true)
    }

    pub fn on_key_up(&mut self, key: &str) -> bool {
        self.keys.key_event(key, false)
    }

    pub fn set_show_nodes(&mut self, show_nodes: bool) {
        self.show_nodes = show_nodes;
    }

    pub fn show_nodes(&self) -> bool {
        self.show_nodes
    }

    pub fn keys(&self) -> &KeyState {
        &self.keys
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Draw call matching the current toggle state.
    pub fn draw_call(&self) -> DrawCall {
        if self.show_nodes {
            DrawCall::Points {
                count: self.vertex_count,
            }
        } else {
            DrawCall::Triangles {
                index_count: self.index_count,
            }
        }
    }

    /// Advances the camera by the held keys and draws one frame.
    pub fn tick(&mut self) -> DrawCall {
        if self.keys.any_pressed() {
            self.steer_camera();
        }

        self.backend.set_view_projection(&self.camera.view_projection());
        self.backend.clear(self.clear_color);

        let call = self.draw_call();
        self.backend.draw(call);
        self.frames += 1;
        call
    }

    fn steer_camera(&mut self) {
        if self.keys.is_pressed(Direction::Down) {
            self.camera.lower();
        }
        if self.keys.is_pressed(Direction::Up) {
            self.camera.raise();
        }
        if self.keys.is_pressed(Direction::Left) {
            self.camera.orbit_left();
        }
        if self.keys.is_pressed(Direction::Right) {
            self.camera.orbit_right();
        }
        log::trace!("eye moved to {:?}", self.camera.eye());
    }
}
