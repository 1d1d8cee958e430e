use cgmath::{Matrix4, Vector3};

use crate::{geometry::WindowUnitStyle, objects::WindowUnit, pipelines::SceneShader};

/// Grid layout parameters for a [`WindowWall`].
///
/// Row or column counts of zero or less yield an empty grid.
#[derive(Clone, Copy, Debug)]
pub struct GridLayout {
    pub rows: i32,
    pub cols: i32,
    pub spacing_x: f32,
    pub spacing_y: f32,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            rows: 8,
            cols: 8,
            spacing_x: 1.1,
            spacing_y: 1.6,
        }
    }
}

/// Compute the child translations of a grid centered on the origin.
///
/// Cells are visited row-major. Positions start at
/// `-(count - 1) * spacing / 2` per axis, which mirrors the grid around
/// `(0, 0)` regardless of row/column count parity.
pub fn grid_translations(layout: &GridLayout) -> Vec<Vector3<f32>> {
    if layout.rows <= 0 || layout.cols <= 0 {
        return Vec::new();
    }

    let start_x = -(layout.cols - 1) as f32 * layout.spacing_x / 2.0;
    let start_y = -(layout.rows - 1) as f32 * layout.spacing_y / 2.0;

    let mut translations = Vec::with_capacity((layout.rows * layout.cols) as usize);
    for y in 0..layout.rows {
        for x in 0..layout.cols {
            translations.push(Vector3::new(
                start_x + x as f32 * layout.spacing_x,
                start_y + y as f32 * layout.spacing_y,
                0.0,
            ));
        }
    }
    translations
}

/// A grid of [`WindowUnit`]s laid out symmetrically around the origin.
///
/// Owns no geometry itself; every cell gets its own unit with a
/// pure-translation transform computed at construction time. Drawing
/// forwards to every unit in insertion order with no batching or
/// instancing.
#[derive(Debug)]
pub struct WindowWall {
    units: Vec<WindowUnit>,
    layout: GridLayout,
}

impl WindowWall {
    pub fn new(
        device: &wgpu::Device,
        shader: &SceneShader,
        layout: GridLayout,
        style: &WindowUnitStyle,
    ) -> Self {
        let units = grid_translations(&layout)
            .into_iter()
            .map(|position| {
                let mut unit = WindowUnit::new(device, shader, style);
                unit.set_transform(Matrix4::from_translation(position));
                unit
            })
            .collect();

        Self { units, layout }
    }

    pub fn layout(&self) -> GridLayout {
        self.layout
    }

    pub fn units(&self) -> &[WindowUnit] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Draw every unit in insertion order. A no-op for an empty grid.
    pub fn draw(
        &self,
        pass: &mut wgpu::RenderPass<'_>,
        queue: &wgpu::Queue,
        view: Matrix4<f32>,
        projection: Matrix4<f32>,
        shader: &SceneShader,
    ) {
        for unit in &self.units {
            unit.draw(pass, queue, view, projection, shader);
        }
    }
}
