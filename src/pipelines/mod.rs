//! Render pipeline definitions.
//!
//! `scene` holds the single color pipeline the room renderer uses, together
//! with the uniform types that form the wire contract between composite
//! objects and the shader (`view`/`projection` per frame, `model`/
//! `object_color` per object).

pub mod scene;

pub use scene::{ObjectBinding, SceneShader};
