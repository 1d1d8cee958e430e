use wgpu::util::DeviceExt;

use crate::geometry::Mesh;

/// A GPU-resident copy of one generated [`Mesh`].
///
/// Created exactly once per distinct mesh at composite-object construction
/// time and never re-uploaded: any geometry change requires constructing a
/// new composite object. The underlying buffer is released when the owning
/// object is dropped, on every exit path including early scene teardown.
#[derive(Debug)]
pub struct MeshBuffer {
    buffer: wgpu::Buffer,
    vertex_count: u32,
}

impl MeshBuffer {
    pub fn new(device: &wgpu::Device, mesh: &Mesh, label: &str) -> Self {
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(mesh.vertices()),
            usage: wgpu::BufferUsages::VERTEX,
        });

        Self {
            buffer,
            vertex_count: mesh.len() as u32,
        }
    }

    pub fn slice(&self) -> wgpu::BufferSlice<'_> {
        self.buffer.slice(..)
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }
}
