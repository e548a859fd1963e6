/// Constant cube geometry
///
/// The cube spans -1..1 on every axis. Each face has its own four vertices so
/// it can carry its own texture coordinates, which gives 24 vertices and 36
/// indices in total. Faces are laid out front, back, top, bottom, right, left.
use nalgebra::{Point3, Vector3};

pub const FACE_COUNT: usize = 6;
pub const VERTEX_COUNT: usize = 4 * FACE_COUNT;
pub const INDEX_COUNT: usize = 6 * FACE_COUNT;

/// Vertex positions, three floats per vertex.
#[rustfmt::skip]
pub const POSITIONS: [f32; VERTEX_COUNT * 3] = [
    // Front face
    -1.0, -1.0,  1.0,
     1.0, -1.0,  1.0,
     1.0,  1.0,  1.0,
    -1.0,  1.0,  1.0,
    // Back face
    -1.0, -1.0, -1.0,
    -1.0,  1.0, -1.0,
     1.0,  1.0, -1.0,
     1.0, -1.0, -1.0,
    // Top face
    -1.0,  1.0, -1.0,
    -1.0,  1.0,  1.0,
     1.0,  1.0,  1.0,
     1.0,  1.0, -1.0,
    // Bottom face
    -1.0, -1.0, -1.0,
     1.0, -1.0, -1.0,
     1.0, -1.0,  1.0,
    -1.0, -1.0,  1.0,
    // Right face
     1.0, -1.0, -1.0,
     1.0,  1.0, -1.0,
     1.0,  1.0,  1.0,
     1.0, -1.0,  1.0,
    // Left face
    -1.0, -1.0, -1.0,
    -1.0, -1.0,  1.0,
    -1.0,  1.0,  1.0,
    -1.0,  1.0, -1.0,
];

/// Texture coordinates, two floats per vertex. Every face maps the whole image.
#[rustfmt::skip]
pub const TEXTURE_COORDS: [f32; VERTEX_COUNT * 2] = [
    // Front
    0.0, 0.0,  1.0, 0.0,  1.0, 1.0,  0.0, 1.0,
    // Back
    0.0, 0.0,  1.0, 0.0,  1.0, 1.0,  0.0, 1.0,
    // Top
    0.0, 0.0,  1.0, 0.0,  1.0, 1.0,  0.0, 1.0,
    // Bottom
    0.0, 0.0,  1.0, 0.0,  1.0, 1.0,  0.0, 1.0,
    // Right
    0.0, 0.0,  1.0, 0.0,  1.0, 1.0,  0.0, 1.0,
    // Left
    0.0, 0.0,  1.0, 0.0,  1.0, 1.0,  0.0, 1.0,
];

/// Two counter-clockwise triangles per face.
#[rustfmt::skip]
pub const INDICES: [u16; INDEX_COUNT] = [
     0,  1,  2,    0,  2,  3, // front
     4,  5,  6,    4,  6,  7, // back
     8,  9, 10,    8, 10, 11, // top
    12, 13, 14,   12, 14, 15, // bottom
    16, 17, 18,   16, 18, 19, // right
    20, 21, 22,   20, 22, 23, // left
];

/// Per-face RGBA colors for the legacy color buffer. The textured shader never
/// reads them.
pub const FACE_COLORS: [[f32; 4]; FACE_COUNT] = [
    [1.0, 1.0, 1.0, 1.0], // Front face: white
    [1.0, 0.0, 0.0, 1.0], // Back face: red
    [0.0, 1.0, 0.0, 1.0], // Top face: green
    [0.0, 0.0, 1.0, 1.0], // Bottom face: blue
    [1.0, 1.0, 0.0, 1.0], // Right face: yellow
    [1.0, 0.0, 1.0, 1.0], // Left face: purple
];

/// Face colors expanded to one RGBA entry per vertex.
pub fn vertex_colors() -> Vec<f32> {
    FACE_COLORS
        .iter()
        .flat_map(|color| color.iter().copied().cycle().take(4 * 4))
        .collect()
}

/// Position of vertex `index`.
pub fn position(index: u16) -> Point3<f32> {
    let i = index as usize * 3;
    Point3::new(POSITIONS[i], POSITIONS[i + 1], POSITIONS[i + 2])
}

/// The index buffer grouped into triangles.
pub fn triangles() -> impl Iterator<Item = [u16; 3]> {
    let indices: &'static [u16] = &INDICES;
    indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
}

/// Face normal implied by a triangle's winding.
pub fn triangle_normal(triangle: [u16; 3]) -> Vector3<f32> {
    let v0 = position(triangle[0]);
    let v1 = position(triangle[1]);
    let v2 = position(triangle[2]);

    let edge1 = v1 - v0;
    let edge2 = v2 - v0;

    edge1.cross(&edge2).normalize()
}
