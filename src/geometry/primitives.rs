//! Stateless primitive generators.
//!
//! Every function here is a total, pure mapping from shape parameters to a
//! triangle-list [`Mesh`]: no owned state, no I/O, identical inputs produce
//! identical outputs. Degenerate inputs (zero or negative dimensions) are
//! not rejected; they produce a zero-area or inverted mesh.

use crate::geometry::{Mesh, SceneVertex};

/// Forward offset of a window frame in front of its glass pane.
pub const FRAME_Z_OFFSET: f32 = 0.02;

const fn vert(position: [f32; 3], normal: [f32; 3], tex_coords: [f32; 2]) -> SceneVertex {
    SceneVertex {
        position,
        normal,
        tex_coords,
    }
}

/// Generate an axis-aligned box centered on the origin.
///
/// Emits 6 faces x 2 triangles x 3 vertices = 36 vertices. Faces are wound
/// counter-clockwise as seen from outside, each with a constant outward axis
/// normal, and each mapped independently to the unit texture square.
pub fn box_mesh(width: f32, height: f32, depth: f32) -> Mesh {
    let w = width / 2.0;
    let h = height / 2.0;
    let d = depth / 2.0;

    let vertices = vec![
        // front (+z)
        vert([-w, -h, d], [0.0, 0.0, 1.0], [0.0, 0.0]),
        vert([w, -h, d], [0.0, 0.0, 1.0], [1.0, 0.0]),
        vert([w, h, d], [0.0, 0.0, 1.0], [1.0, 1.0]),
        vert([-w, -h, d], [0.0, 0.0, 1.0], [0.0, 0.0]),
        vert([w, h, d], [0.0, 0.0, 1.0], [1.0, 1.0]),
        vert([-w, h, d], [0.0, 0.0, 1.0], [0.0, 1.0]),
        // back (-z)
        vert([w, -h, -d], [0.0, 0.0, -1.0], [0.0, 0.0]),
        vert([-w, -h, -d], [0.0, 0.0, -1.0], [1.0, 0.0]),
        vert([-w, h, -d], [0.0, 0.0, -1.0], [1.0, 1.0]),
        vert([w, -h, -d], [0.0, 0.0, -1.0], [0.0, 0.0]),
        vert([-w, h, -d], [0.0, 0.0, -1.0], [1.0, 1.0]),
        vert([w, h, -d], [0.0, 0.0, -1.0], [0.0, 1.0]),
        // left (-x)
        vert([-w, -h, -d], [-1.0, 0.0, 0.0], [0.0, 0.0]),
        vert([-w, -h, d], [-1.0, 0.0, 0.0], [1.0, 0.0]),
        vert([-w, h, d], [-1.0, 0.0, 0.0], [1.0, 1.0]),
        vert([-w, -h, -d], [-1.0, 0.0, 0.0], [0.0, 0.0]),
        vert([-w, h, d], [-1.0, 0.0, 0.0], [1.0, 1.0]),
        vert([-w, h, -d], [-1.0, 0.0, 0.0], [0.0, 1.0]),
        // right (+x)
        vert([w, -h, d], [1.0, 0.0, 0.0], [0.0, 0.0]),
        vert([w, -h, -d], [1.0, 0.0, 0.0], [1.0, 0.0]),
        vert([w, h, -d], [1.0, 0.0, 0.0], [1.0, 1.0]),
        vert([w, -h, d], [1.0, 0.0, 0.0], [0.0, 0.0]),
        vert([w, h, -d], [1.0, 0.0, 0.0], [1.0, 1.0]),
        vert([w, h, d], [1.0, 0.0, 0.0], [0.0, 1.0]),
        // top (+y)
        vert([-w, h, d], [0.0, 1.0, 0.0], [0.0, 0.0]),
        vert([w, h, d], [0.0, 1.0, 0.0], [1.0, 0.0]),
        vert([w, h, -d], [0.0, 1.0, 0.0], [1.0, 1.0]),
        vert([-w, h, d], [0.0, 1.0, 0.0], [0.0, 0.0]),
        vert([w, h, -d], [0.0, 1.0, 0.0], [1.0, 1.0]),
        vert([-w, h, -d], [0.0, 1.0, 0.0], [0.0, 1.0]),
        // bottom (-y)
        vert([-w, -h, -d], [0.0, -1.0, 0.0], [0.0, 0.0]),
        vert([w, -h, -d], [0.0, -1.0, 0.0], [1.0, 0.0]),
        vert([w, -h, d], [0.0, -1.0, 0.0], [1.0, 1.0]),
        vert([-w, -h, -d], [0.0, -1.0, 0.0], [0.0, 0.0]),
        vert([w, -h, d], [0.0, -1.0, 0.0], [1.0, 1.0]),
        vert([-w, -h, d], [0.0, -1.0, 0.0], [0.0, 1.0]),
    ];

    Mesh::from_vertices(vertices)
}

/// Generate one +Z facing quad (two triangles) centered at `(x, y)` on the
/// plane `z = z_offset`, with unit-square texture coordinates.
///
/// Used both for decorative groove tiles and for door panels; the two call
/// sites differ only in offsets.
pub fn tile_mesh(x: f32, y: f32, width: f32, height: f32, z_offset: f32) -> Mesh {
    let w = width / 2.0;
    let h = height / 2.0;

    let vertices = vec![
        vert([x - w, y - h, z_offset], [0.0, 0.0, 1.0], [0.0, 0.0]),
        vert([x + w, y - h, z_offset], [0.0, 0.0, 1.0], [1.0, 0.0]),
        vert([x + w, y + h, z_offset], [0.0, 0.0, 1.0], [1.0, 1.0]),
        vert([x - w, y - h, z_offset], [0.0, 0.0, 1.0], [0.0, 0.0]),
        vert([x + w, y + h, z_offset], [0.0, 0.0, 1.0], [1.0, 1.0]),
        vert([x - w, y + h, z_offset], [0.0, 0.0, 1.0], [0.0, 1.0]),
    ];

    Mesh::from_vertices(vertices)
}

/// Generate a pair of door panels mirrored around the wall's vertical axis.
///
/// Both panels sit on the floor line of a wall of the given height: their
/// vertical center is `-wall_height / 2 + door_height / 2`. The left panel is
/// centered at `-door_x_offset`, the right at `+door_x_offset`.
pub fn door_pair_mesh(
    wall_height: f32,
    door_width: f32,
    door_height: f32,
    door_x_offset: f32,
    z_offset: f32,
) -> Mesh {
    let y_bottom = -wall_height / 2.0 + door_height / 2.0;

    let mut doors = tile_mesh(-door_x_offset, y_bottom, door_width, door_height, z_offset);
    doors.extend(tile_mesh(door_x_offset, y_bottom, door_width, door_height, z_offset));
    doors
}

/// Cap panel above a door.
///
/// Not implemented: the cap proportions are still undecided, so this returns
/// an empty mesh rather than guessing dimensions.
pub fn door_cap_mesh(_door_width: f32, _door_height: f32, _wall_height: f32, _z_offset: f32) -> Mesh {
    Mesh::new()
}

/// Small grid of glass panes above a door.
///
/// Not implemented: the pane count and proportions are still undecided, so
/// this returns an empty mesh rather than guessing a layout.
pub fn door_pane_grid_mesh(
    _door_width: f32,
    _door_height: f32,
    _wall_height: f32,
    _z_offset: f32,
) -> Mesh {
    Mesh::new()
}

/// Shape parameters of a single window unit: a glass pane surrounded by four
/// frame rails.
#[derive(Clone, Copy, Debug)]
pub struct WindowUnitStyle {
    pub width: f32,
    pub height: f32,
    pub frame_thickness: f32,
}

impl Default for WindowUnitStyle {
    fn default() -> Self {
        Self {
            width: 0.8,
            height: 1.4,
            frame_thickness: 0.08,
        }
    }
}

/// Generate the `(glass, frame)` mesh pair for one window unit.
///
/// The glass pane fills the area inside the frame rails on the z = 0 plane;
/// the four rails (bottom, top, left, right) sit slightly in front at
/// [`FRAME_Z_OFFSET`] so they composite over the translucent glass.
pub fn window_unit_meshes(style: &WindowUnitStyle) -> (Mesh, Mesh) {
    let WindowUnitStyle {
        width,
        height,
        frame_thickness: t,
    } = *style;

    let glass = tile_mesh(0.0, 0.0, width - 2.0 * t, height - 2.0 * t, 0.0);

    let mut frame = tile_mesh(0.0, -(height - t) / 2.0, width, t, FRAME_Z_OFFSET);
    frame.extend(tile_mesh(0.0, (height - t) / 2.0, width, t, FRAME_Z_OFFSET));
    frame.extend(tile_mesh(
        -(width - t) / 2.0,
        0.0,
        t,
        height - 2.0 * t,
        FRAME_Z_OFFSET,
    ));
    frame.extend(tile_mesh(
        (width - t) / 2.0,
        0.0,
        t,
        height - 2.0 * t,
        FRAME_Z_OFFSET,
    ));

    (glass, frame)
}
