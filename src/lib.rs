#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

pub mod camera;
pub mod config;
pub mod error;
pub mod input;
pub mod mesh;
pub mod renderer;
pub mod shaders;

pub use camera::OrbitCamera;
pub use config::ViewerConfig;
pub use error::{MeshError, ViewerError};
pub use input::{Direction, KeyState};
pub use mesh::Mesh;
pub use renderer::{DrawCall, FrameRenderer, GraphicsBackend};

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
mod wasm {
    use wasm_bindgen::prelude::*;

    use crate::mesh::Mesh;

    mod gl;
    mod render;

    pub use gl::WebGlBackend;
    pub use render::{page_config, CONFIG_ELEMENT_ID};

    /// Installed before anything can fail; the page config narrows the level afterwards.
    fn init_logging() {
        console_error_panic_hook::set_once();
        if let Err(err) = console_log::init_with_level(log::Level::Trace) {
            web_sys::console::warn_1(&format!("console logger unavailable: {err}").into());
        }
        log::set_max_level(log::LevelFilter::Info);
    }

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        init_logging();

        let launch = || -> crate::error::Result<()> {
            let config = render::page_config()?;
            log::set_max_level(config.log_level().to_level_filter());
            render::start(&config, &Mesh::cloth()?)
        };
        launch().map_err(|err| {
            log::error!("viewer failed to start: {err}");
            JsValue::from(err)
        })
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::{page_config, WebGlBackend, CONFIG_ELEMENT_ID};
