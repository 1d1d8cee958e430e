use cgmath::{Matrix4, SquareMatrix};

use crate::{
    geometry::{WindowUnitStyle, window_unit_meshes},
    pipelines::{ObjectBinding, SceneShader},
    resources::MeshBuffer,
};

/// Light blue, semi-transparent.
pub const GLASS_COLOR: [f32; 4] = [0.3, 0.6, 0.8, 0.4];
/// White wood (birch).
pub const FRAME_COLOR: [f32; 4] = [0.9, 0.9, 0.9, 1.0];

/// One window: a translucent glass pane and an opaque frame.
///
/// Construction generates both meshes from the injected style and uploads
/// each to its own write-once vertex buffer. The transform starts as the
/// identity and only changes through [`set_transform`](Self::set_transform);
/// it never touches vertex data.
#[derive(Debug)]
pub struct WindowUnit {
    glass: MeshBuffer,
    frame: MeshBuffer,
    glass_binding: ObjectBinding,
    frame_binding: ObjectBinding,
    transform: Matrix4<f32>,
}

impl WindowUnit {
    pub fn new(device: &wgpu::Device, shader: &SceneShader, style: &WindowUnitStyle) -> Self {
        let (glass_mesh, frame_mesh) = window_unit_meshes(style);

        Self {
            glass: MeshBuffer::new(device, &glass_mesh, "Window Glass Vertex Buffer"),
            frame: MeshBuffer::new(device, &frame_mesh, "Window Frame Vertex Buffer"),
            glass_binding: ObjectBinding::new(device, shader, GLASS_COLOR, "window_glass_uniform"),
            frame_binding: ObjectBinding::new(device, shader, FRAME_COLOR, "window_frame_uniform"),
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

    /// Record this unit's draw calls: glass first, then the frame, so the
    /// opaque frame fragments are not blended beneath the glass.
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
        self.glass_binding.write(queue, self.transform);
        self.frame_binding.write(queue, self.transform);

        pass.set_bind_group(1, self.glass_binding.bind_group(), &[]);
        pass.set_vertex_buffer(0, self.glass.slice());
        pass.draw(0..self.glass.vertex_count(), 0..1);

        pass.set_bind_group(1, self.frame_binding.bind_group(), &[]);
        pass.set_vertex_buffer(0, self.frame.slice());
        pass.draw(0..self.frame.vertex_count(), 0..1);
    }
}
