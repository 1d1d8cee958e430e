//! wallkit
//!
//! A small renderer for a procedurally built room scene. Wall panels, window
//! grids and glass/frame units are generated from dimensional parameters as
//! plain triangle lists, uploaded once to GPU-resident vertex buffers, and
//! redrawn every frame under an externally supplied transform.
//!
//! High-level modules
//! - `camera`: camera and projection types producing view/projection matrices
//! - `context`: central GPU and window context that owns device/queue/surface
//! - `geometry`: the vertex/mesh model and the pure primitive generators
//! - `objects`: composite render objects (window units, walls) and the
//!   window-wall grid composer
//! - `pipelines`: the scene shader, its pipeline and uniform plumbing
//! - `resources`: one-time-upload GPU buffer ownership for generated meshes
//! - `scene`: scene assembly and the windowed event loop
//!

pub mod camera;
pub mod context;
pub mod geometry;
pub mod objects;
pub mod pipelines;
pub mod resources;
pub mod scene;

// Re-exports commonly used types for convenience in downstream code.
pub use cgmath::*;
pub use wgpu::*;
pub use winit::event::WindowEvent;
