//! Static triangle-list mesh data
//!
//! Every mesh in the scene is an interleaved position + RGBA-color vertex
//! buffer drawn as a non-indexed triangle list. One generic builder set
//! replaces per-object mesh code.

pub type Color = [f32; 4];

/// Interleaved vertex: 3 floats position, 4 floats RGBA color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: Color,
}

impl Vertex {
    const ATTRS: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x4];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// CPU-side triangle list, uploaded once at startup
#[derive(Debug, Clone)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
}

impl MeshData {
    pub fn new(vertices: Vec<Vertex>) -> Self {
        Self { vertices }
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }
}

fn vertex(position: [f32; 3], color: Color) -> Vertex {
    Vertex { position, color }
}

/// Horizontal plane at y = -2 spanning +-2 on x and z (2 triangles)
pub fn plane(color: Color) -> MeshData {
    let corners = [
        [-2.0, -2.0, -2.0],
        [2.0, -2.0, -2.0],
        [2.0, -2.0, 2.0],
        [-2.0, -2.0, 2.0],
    ];

    let vertices = [0, 1, 2, 2, 3, 0]
        .iter()
        .map(|&i| vertex(corners[i], color))
        .collect();

    MeshData::new(vertices)
}

/// Square pyramid: 4 side triangles plus 2 base triangles (18 vertices)
pub fn pyramid(color: Color) -> MeshData {
    let apex = [0.0, 0.5, 0.0];
    let b0 = [-0.5, -0.5, -0.5];
    let b1 = [0.5, -0.5, -0.5];
    let b2 = [-0.5, -0.5, 0.5];
    let b3 = [0.5, -0.5, 0.5];

    let positions = [
        // Sides
        b0, b1, apex, //
        b2, b3, apex, //
        b0, b2, apex, //
        b1, b3, apex, //
        // Base
        b0, b3, b2, //
        b1, b0, b3,
    ];

    MeshData::new(positions.iter().map(|&p| vertex(p, color)).collect())
}

/// Face order for [`cuboid`] colors: back, front, left, right, bottom, top
pub const CUBOID_FACES: usize = 6;

/// Axis-aligned box centered at the origin with per-face colors
///
/// `half_extents` is the half size along each axis; the cube and all three
/// slab props are instances of this with different extents and palettes.
pub fn cuboid(half_extents: [f32; 3], face_colors: [Color; CUBOID_FACES]) -> MeshData {
    let [hx, hy, hz] = half_extents;
    let mut vertices = Vec::with_capacity(36);

    // Each face as two triangles, winding matching the original cube data
    let faces: [[[f32; 3]; 6]; CUBOID_FACES] = [
        // Back (-z)
        [
            [-hx, -hy, -hz],
            [hx, -hy, -hz],
            [hx, hy, -hz],
            [hx, hy, -hz],
            [-hx, hy, -hz],
            [-hx, -hy, -hz],
        ],
        // Front (+z)
        [
            [-hx, -hy, hz],
            [hx, -hy, hz],
            [hx, hy, hz],
            [hx, hy, hz],
            [-hx, hy, hz],
            [-hx, -hy, hz],
        ],
        // Left (-x)
        [
            [-hx, hy, hz],
            [-hx, hy, -hz],
            [-hx, -hy, -hz],
            [-hx, -hy, -hz],
            [-hx, -hy, hz],
            [-hx, hy, hz],
        ],
        // Right (+x)
        [
            [hx, hy, hz],
            [hx, hy, -hz],
            [hx, -hy, -hz],
            [hx, -hy, -hz],
            [hx, -hy, hz],
            [hx, hy, hz],
        ],
        // Bottom (-y)
        [
            [-hx, -hy, -hz],
            [hx, -hy, -hz],
            [hx, -hy, hz],
            [hx, -hy, hz],
            [-hx, -hy, hz],
            [-hx, -hy, -hz],
        ],
        // Top (+y)
        [
            [-hx, hy, -hz],
            [hx, hy, -hz],
            [hx, hy, hz],
            [hx, hy, hz],
            [-hx, hy, hz],
            [-hx, hy, -hz],
        ],
    ];

    for (face, color) in faces.iter().zip(face_colors) {
        for &position in face {
            vertices.push(vertex(position, color));
        }
    }

    MeshData::new(vertices)
}
