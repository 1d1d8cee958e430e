use cgmath::{Matrix4, SquareMatrix};

use crate::{
    geometry::{Mesh, box_mesh, tile_mesh},
    pipelines::{ObjectBinding, SceneShader},
    resources::MeshBuffer,
};

/// Dark wall color.
pub const WALL_COLOR: [f32; 4] = [0.2, 0.2, 0.2, 1.0];

/// Forward offset of the groove decal in front of the wall face.
pub const GROOVE_Z_OFFSET: f32 = 0.05;

/// Build a wall's combined mesh: the structural box followed by one groove
/// decal tile.
///
/// The decal call reuses the tile generator with the groove counts as ad hoc
/// width/height inputs and the wall extents as the tile center. A single
/// tile, not a `groove_cols x groove_rows` grid; kept for compatibility with
/// the scene this was built for.
pub fn wall_mesh(width: f32, height: f32, depth: f32, groove_cols: i32, groove_rows: i32) -> Mesh {
    let mut combined = box_mesh(width, height, depth);
    combined.extend(tile_mesh(
        width,
        height,
        groove_cols as f32,
        groove_rows as f32,
        GROOVE_Z_OFFSET,
    ));
    combined
}

/// A structural wall panel: box plus groove decal in one buffer.
///
/// The two generated meshes are concatenated before upload so the wall draws
/// with a single call over the full vertex range.
#[derive(Debug)]
pub struct Wall {
    buffer: MeshBuffer,
    binding: ObjectBinding,
    transform: Matrix4<f32>,
}

impl Wall {
    pub fn new(
        device: &wgpu::Device,
        shader: &SceneShader,
        width: f32,
        height: f32,
        depth: f32,
        groove_cols: i32,
        groove_rows: i32,
    ) -> Self {
        let combined = wall_mesh(width, height, depth, groove_cols, groove_rows);

        Self {
            buffer: MeshBuffer::new(device, &combined, "Wall Vertex Buffer"),
            binding: ObjectBinding::new(device, shader, WALL_COLOR, "wall_uniform"),
            transform: Matrix4::identity(),
        }
    }

    /// Replace the stored transform. Last write wins; takes effect on the
    /// next draw with no GPU interaction.
    pub fn set_transform(&mut self, transform: Matrix4<f32>) {
        self.transform = transform;
    }

    pub fn transform(&self) -> Matrix4<f32> {
        self.transform
    }

    pub fn vertex_count(&self) -> u32 {
        self.buffer.vertex_count()
    }

    pub fn draw(
        &self,
        pass: &mut wgpu::RenderPass<'_>,
        queue: &wgpu::Queue,
        view: Matrix4<f32>,
        projection: Matrix4<f32>,
        shader: &SceneShader,
    ) {
        shader.bind(pass);
        shader.write_frame(queue, view, projection);
        self.binding.write(queue, self.transform);

        pass.set_bind_group(1, self.binding.bind_group(), &[]);
        pass.set_vertex_buffer(0, self.buffer.slice());
        pass.draw(0..self.buffer.vertex_count(), 0..1);
    }
}
