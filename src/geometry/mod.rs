//! Geometry model: vertices, triangle-list meshes and primitive generators.
//!
//! - [`SceneVertex`] is the geometric record every generator emits
//! - [`Mesh`] is an ordered, non-indexed triangle list of vertices
//! - `primitives` holds the stateless shape-to-mesh generator functions

pub mod primitives;

pub use primitives::*;

/// Trait for vertex types that can describe their GPU buffer layout.
pub trait Vertex {
    fn desc() -> wgpu::VertexBufferLayout<'static>;
}

/// A single generated vertex: position, outward normal and texture coordinates.
///
/// Immutable once generated; it has no identity beyond its slot in a [`Mesh`].
/// The memory layout matches the vertex buffer layout returned by
/// [`Vertex::desc`] so meshes can be uploaded with a single cast.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub tex_coords: [f32; 2],
}

impl Vertex for SceneVertex {
    fn desc() -> wgpu::VertexBufferLayout<'static> {
        use std::mem;
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<SceneVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 6]>() as wgpu::BufferAddress,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x2,
                },
            ],
        }
    }
}

/// An ordered sequence of vertices interpreted as a non-indexed triangle list.
///
/// Produced once by a generator and never mutated element-wise afterwards.
/// Meshes may be concatenated by sequence append via [`Mesh::extend`], which
/// is how a structural panel is merged with its decorative tiles. The length
/// is always a multiple of three.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<SceneVertex>,
}

impl Mesh {
    /// An empty mesh (zero triangles). Drawing it is a no-op.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_vertices(vertices: Vec<SceneVertex>) -> Self {
        debug_assert!(
            vertices.len() % 3 == 0,
            "a triangle-list mesh must hold a multiple of 3 vertices, got {}",
            vertices.len()
        );
        Self { vertices }
    }

    pub fn vertices(&self) -> &[SceneVertex] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Append another mesh's vertices after this mesh's own.
    pub fn extend(&mut self, other: Mesh) {
        self.vertices.extend(other.vertices);
    }
}
