/// Attribute and uniform names shared by the shader sources and the GL backend.
pub const POSITION_ATTRIBUTE: &str = "a_Position";
pub const COLOR_ATTRIBUTE: &str = "a_FragColor";
pub const MVP_UNIFORM: &str = "u_ModelMatrix";
pub const POINT_SIZE_UNIFORM: &str = "u_PointSize";

/// GLSL ES 3.00 vertex shader: one transform, colour passed through.
pub const VERTEX_SHADER: &str = r#"#version 300 es
uniform mat4 u_ModelMatrix;
uniform float u_PointSize;

in vec4 a_Position;
in vec4 a_FragColor;

out vec4 v_FragColor;

void main() {
    gl_Position = u_ModelMatrix * a_Position;
    gl_PointSize = u_PointSize;
    v_FragColor = a_FragColor;
}
"#;

/// GLSL ES 3.00 fragment shader: interpolated colour, no lighting.
pub const FRAGMENT_SHADER: &str = r#"#version 300 es
precision highp float;

in vec4 v_FragColor;

out vec4 outColor;

void main() {
    outColor = v_FragColor;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sources_declare_the_bound_names() {
        assert!(VERTEX_SHADER.starts_with("#version 300 es"));
        assert!(FRAGMENT_SHADER.starts_with("#version 300 es"));
        for name in [POSITION_ATTRIBUTE, COLOR_ATTRIBUTE, MVP_UNIFORM, POINT_SIZE_UNIFORM] {
            assert!(VERTEX_SHADER.contains(name), "{name} missing from vertex shader");
        }
    }
}
