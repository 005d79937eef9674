use thiserror::Error;

/// Violations of the mesh dataset invariants.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    #[error("position array length {0} is not a multiple of 3")]
    RaggedPositions(usize),

    #[error("color array length {colors} does not match position array length {positions}")]
    ColorCountMismatch { positions: usize, colors: usize },

    #[error("index array length {0} is not a multiple of 3")]
    RaggedIndices(usize),

    #[error("triangle index {index} at slot {slot} is out of bounds for {vertex_count} vertices")]
    IndexOutOfBounds {
        slot: usize,
        index: u16,
        vertex_count: usize,
    },

    #[error("{0} vertices cannot be addressed with 16-bit indices")]
    TooManyVertices(usize),

    #[error("color component {value} at slot {slot} is outside [0, 1]")]
    ColorOutOfRange { slot: usize, value: f32 },

    #[error("temperature field has {values} values for {nodes} nodes")]
    FieldLengthMismatch { nodes: usize, values: usize },
}

/// Everything that can stop the viewer from starting.
#[derive(Debug, Error)]
pub enum ViewerError {
    #[error(transparent)]
    Mesh(#[from] MeshError),

    #[error("invalid viewer config: {0}")]
    Config(String),

    #[error("invalid viewer config JSON: {0}")]
    ConfigJson(#[from] serde_json::Error),

    #[error("no global `{0}` available")]
    MissingGlobal(&'static str),

    #[error("element #{0} not found")]
    ElementNotFound(String),

    #[error("element #{id} is not a {expected}")]
    WrongElementType { id: String, expected: &'static str },

    #[error("WebGL2 not supported")]
    ContextUnavailable,

    #[error("failed to compile {stage} shader: {log}")]
    ShaderCompile { stage: &'static str, log: String },

    #[error("failed to link shader program: {0}")]
    ProgramLink(String),

    #[error("shader attribute `{0}` not found")]
    MissingAttribute(&'static str),

    #[error("shader uniform `{0}` not found")]
    MissingUniform(&'static str),

    #[error("failed to allocate {0} buffer")]
    BufferAllocation(&'static str),

    #[error("JavaScript error: {0}")]
    Js(String),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for ViewerError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        ViewerError::Js(format!("{value:?}"))
    }
}

#[cfg(target_arch = "wasm32")]
impl From<ViewerError> for wasm_bindgen::JsValue {
    fn from(err: ViewerError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

pub type Result<T, E = ViewerError> = std::result::Result<T, E>;
