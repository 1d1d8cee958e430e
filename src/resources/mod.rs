//! GPU resource ownership for generated geometry.
//!
//! - `mesh` holds [`MeshBuffer`](mesh::MeshBuffer), the write-once vertex
//!   buffer a composite object owns for each of its meshes
//! - `texture` holds the depth texture wrapper used by the render pass

pub mod mesh;
pub mod texture;

pub use mesh::MeshBuffer;
