use glam::Mat4;
use web_sys::{WebGl2RenderingContext as GL, WebGlProgram, WebGlShader, WebGlUniformLocation};

use crate::error::{Result, ViewerError};
use crate::mesh::{Mesh, COLOR_COMPONENTS, COORDS_PER_NODE};
use crate::renderer::{DrawCall, GraphicsBackend};
use crate::shaders;

/// WebGL2 implementation of the frame loop's GPU side.
pub struct WebGlBackend {
    gl: GL,
    program: WebGlProgram,
    mvp: WebGlUniformLocation,
}

impl WebGlBackend {
    /// Compiles and links the shader pair and binds it for every later call.
    pub fn new(gl: GL, point_size: f32) -> Result<Self> {
        let vert = compile_shader(&gl, GL::VERTEX_SHADER, "vertex", shaders::VERTEX_SHADER)?;
        let frag = compile_shader(&gl, GL::FRAGMENT_SHADER, "fragment", shaders::FRAGMENT_SHADER)?;
        let program = link_program(&gl, &vert, &frag)?;
        gl.use_program(Some(&program));

        let mvp = gl
            .get_uniform_location(&program, shaders::MVP_UNIFORM)
            .ok_or(ViewerError::MissingUniform(shaders::MVP_UNIFORM))?;
        let point_size_loc = gl
            .get_uniform_location(&program, shaders::POINT_SIZE_UNIFORM)
            .ok_or(ViewerError::MissingUniform(shaders::POINT_SIZE_UNIFORM))?;
        gl.uniform1f(Some(&point_size_loc), point_size);

        Ok(Self { gl, program, mvp })
    }

    /// Points an attribute into the currently bound `ARRAY_BUFFER`.
    fn bind_attribute(
        &self,
        name: &'static str,
        components: usize,
        offset_bytes: usize,
    ) -> Result<()> {
        let location = self.gl.get_attrib_location(&self.program, name);
        if location < 0 {
            return Err(ViewerError::MissingAttribute(name));
        }
        let location = location as u32;
        self.gl.enable_vertex_attrib_array(location);
        self.gl.vertex_attrib_pointer_with_i32(
            location,
            components as i32,
            GL::FLOAT,
            false,
            0,
            offset_bytes as i32,
        );
        Ok(())
    }
}

impl GraphicsBackend for WebGlBackend {
    fn upload_mesh(&mut self, mesh: &Mesh) -> Result<()> {
        let index_buffer = self
            .gl
            .create_buffer()
            .ok_or(ViewerError::BufferAllocation("index"))?;
        self.gl.bind_buffer(GL::ELEMENT_ARRAY_BUFFER, Some(&index_buffer));
        let indices = js_sys::Uint16Array::from(mesh.indices());
        self.gl.buffer_data_with_array_buffer_view(
            GL::ELEMENT_ARRAY_BUFFER,
            &indices,
            GL::STATIC_DRAW,
        );

        let vertex_buffer = self
            .gl
            .create_buffer()
            .ok_or(ViewerError::BufferAllocation("vertex"))?;
        self.gl.bind_buffer(GL::ARRAY_BUFFER, Some(&vertex_buffer));
        let data = js_sys::Float32Array::from(mesh.vertex_buffer_data().as_slice());
        self.gl
            .buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &data, GL::STATIC_DRAW);

        self.bind_attribute(shaders::POSITION_ATTRIBUTE, COORDS_PER_NODE, 0)?;
        self.bind_attribute(
            shaders::COLOR_ATTRIBUTE,
            COLOR_COMPONENTS,
            mesh.color_offset_bytes(),
        )?;

        self.gl.enable(GL::DEPTH_TEST);
        Ok(())
    }

    fn set_view_projection(&mut self, matrix: &Mat4) {
        self.gl
            .uniform_matrix4fv_with_f32_array(Some(&self.mvp), false, &matrix.to_cols_array());
    }

    fn clear(&mut self, color: [f32; 4]) {
        let [r, g, b, a] = color;
        self.gl.clear_color(r, g, b, a);
        self.gl.clear(GL::COLOR_BUFFER_BIT | GL::DEPTH_BUFFER_BIT);
    }

    fn draw(&mut self, call: DrawCall) {
        match call {
            DrawCall::Points { count } => self.gl.draw_arrays(GL::POINTS, 0, count as i32),
            DrawCall::Triangles { index_count } => self.gl.draw_elements_with_i32(
                GL::TRIANGLES,
                index_count as i32,
                GL::UNSIGNED_SHORT,
                0,
            ),
        }
    }
}

fn compile_shader(gl: &GL, kind: u32, stage: &'static str, source: &str) -> Result<WebGlShader> {
    let shader = gl
        .create_shader(kind)
        .ok_or_else(|| ViewerError::ShaderCompile {
            stage,
            log: "unable to create shader object".to_owned(),
        })?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    if gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(shader)
    } else {
        Err(ViewerError::ShaderCompile {
            stage,
            log: gl.get_shader_info_log(&shader).unwrap_or_default(),
        })
    }
}

fn link_program(gl: &GL, vert: &WebGlShader, frag: &WebGlShader) -> Result<WebGlProgram> {
    let program = gl
        .create_program()
        .ok_or_else(|| ViewerError::ProgramLink("unable to create program object".to_owned()))?;
    gl.attach_shader(&program, vert);
    gl.attach_shader(&program, frag);
    gl.link_program(&program);

    if gl
        .get_program_parameter(&program, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(program)
    } else {
        Err(ViewerError::ProgramLink(
            gl.get_program_info_log(&program).unwrap_or_default(),
        ))
    }
}
