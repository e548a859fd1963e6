/// Static GPU buffers for the cube
use js_sys::{Float32Array, Object, Uint16Array};
use texcube_core::geometry;
use texcube_core::SetupError;
use web_sys::{WebGlBuffer, WebGlRenderingContext as GL};

pub struct Buffers {
    pub position: WebGlBuffer,
    pub texture_coord: WebGlBuffer,
    pub indices: WebGlBuffer,
    /// Per-vertex face colors. Uploaded but never bound by the textured
    /// program.
    pub color: WebGlBuffer,
}

fn upload(gl: &GL, target: u32, data: &Object, what: &'static str) -> Result<WebGlBuffer, SetupError> {
    let buffer = gl.create_buffer().ok_or(SetupError::Allocation(what))?;
    gl.bind_buffer(target, Some(&buffer));
    gl.buffer_data_with_array_buffer_view(target, data, GL::STATIC_DRAW);
    Ok(buffer)
}

impl Buffers {
    pub fn new(gl: &GL) -> Result<Self, SetupError> {
        let positions = Float32Array::from(geometry::POSITIONS.as_slice());
        let texture_coords = Float32Array::from(geometry::TEXTURE_COORDS.as_slice());
        let colors = Float32Array::from(geometry::vertex_colors().as_slice());
        let indices = Uint16Array::from(geometry::INDICES.as_slice());

        Ok(Self {
            position: upload(gl, GL::ARRAY_BUFFER, &positions, "position buffer")?,
            color: upload(gl, GL::ARRAY_BUFFER, &colors, "color buffer")?,
            indices: upload(gl, GL::ELEMENT_ARRAY_BUFFER, &indices, "index buffer")?,
            texture_coord: upload(gl, GL::ARRAY_BUFFER, &texture_coords, "texture coordinate buffer")?,
        })
    }
}
