use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{
    window, Document, HtmlCanvasElement, HtmlInputElement, KeyboardEvent,
    WebGl2RenderingContext as GL,
};

use super::gl::WebGlBackend;
use crate::config::ViewerConfig;
use crate::error::{Result, ViewerError};
use crate::mesh::Mesh;
use crate::renderer::FrameRenderer;

type Renderer = FrameRenderer<WebGlBackend>;

/// Id of an optional `<script type="application/json">` block overriding defaults.
pub const CONFIG_ELEMENT_ID: &str = "viewer-config";

/// Reads the page's JSON config block, falling back to defaults when absent.
pub fn page_config() -> Result<ViewerConfig> {
    let document = window()
        .and_then(|w| w.document())
        .ok_or(ViewerError::MissingGlobal("document"))?;
    match document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    {
        Some(json) if !json.trim().is_empty() => ViewerConfig::from_json(&json),
        _ => Ok(ViewerConfig::default()),
    }
}

/// Builds the renderer on the configured canvas and starts the fixed-interval loop.
pub fn start(config: &ViewerConfig, mesh: &Mesh) -> Result<()> {
    let window = window().ok_or(ViewerError::MissingGlobal("window"))?;
    let document = window.document().ok_or(ViewerError::MissingGlobal("document"))?;
    let canvas: HtmlCanvasElement = element(&document, &config.canvas_id, "canvas")?;

    let gl: GL = canvas
        .get_context("webgl2")?
        .ok_or(ViewerError::ContextUnavailable)?
        .dyn_into()
        .map_err(|_| ViewerError::ContextUnavailable)?;

    let backend = WebGlBackend::new(gl, config.point_size)?;
    let renderer = Rc::new(RefCell::new(FrameRenderer::new(backend, mesh, config)?));

    // A missing toggle just means the solid mesh is always drawn.
    let toggle = element::<HtmlInputElement>(&document, &config.show_nodes_id, "checkbox");
    let show_nodes = match toggle {
        Ok(checkbox) => Some(checkbox),
        Err(err) => {
            log::warn!("{err}; point-cloud toggle disabled");
            None
        }
    };

    install_key_listeners(&document, &renderer)?;

    let tick = {
        let renderer = renderer.clone();
        Closure::wrap(Box::new(move || {
            let mut renderer = renderer.borrow_mut();
            if let Some(checkbox) = &show_nodes {
                let checked = checkbox.checked();
                if checked != renderer.show_nodes() {
                    log::debug!("show nodes: {checked}");
                    renderer.set_show_nodes(checked);
                }
            }
            renderer.tick();
        }) as Box<dyn FnMut()>)
    };
    let frame_time = config.frame_time_ms().round().max(1.0) as i32;
    window.set_interval_with_callback_and_timeout_and_arguments_0(
        tick.as_ref().unchecked_ref(),
        frame_time,
    )?;
    // The loop runs for the lifetime of the page.
    tick.forget();

    log::info!("render loop started on #{} every {frame_time} ms", config.canvas_id);
    Ok(())
}

fn install_key_listeners(document: &Document, renderer: &Rc<RefCell<Renderer>>) -> Result<()> {
    let key_down = {
        let renderer = renderer.clone();
        Closure::wrap(Box::new(move |event: KeyboardEvent| {
            if renderer.borrow_mut().on_key_down(&event.key()) {
                event.prevent_default();
            }
        }) as Box<dyn FnMut(KeyboardEvent)>)
    };
    let key_up = {
        let renderer = renderer.clone();
        Closure::wrap(Box::new(move |event: KeyboardEvent| {
            renderer.borrow_mut().on_key_up(&event.key());
        }) as Box<dyn FnMut(KeyboardEvent)>)
    };

    document.add_event_listener_with_callback("keydown", key_down.as_ref().unchecked_ref())?;
    document.add_event_listener_with_callback("keyup", key_up.as_ref().unchecked_ref())?;
    key_down.forget();
    key_up.forget();
    Ok(())
}

fn element<T: JsCast>(document: &Document, id: &str, expected: &'static str) -> Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| ViewerError::ElementNotFound(id.to_owned()))?
        .dyn_into::<T>()
        .map_err(|_| ViewerError::WrongElementType {
            id: id.to_owned(),
            expected,
        })
}
