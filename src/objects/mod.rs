//! Composite render objects.
//!
//! Each object owns one or more generated meshes uploaded once to GPU
//! buffers plus a single world transform, and exposes `set_transform`/`draw`.
//! Drawing is single-threaded and strictly ordered: within one frame, draw
//! calls execute in the exact order objects are visited, which matters for
//! translucency compositing (glass before frame per unit; no cross-object
//! depth sorting is performed).
//!
//! - `window_unit`: one glass pane plus frame, two buffers, two materials
//! - `window_wall`: an origin-centered grid of window units
//! - `wall`: a structural box panel merged with its groove decal

pub mod wall;
pub mod window_unit;
pub mod window_wall;

pub use wall::Wall;
pub use window_unit::WindowUnit;
pub use window_wall::{GridLayout, WindowWall, grid_translations};
