use cgmath::{Matrix4, SquareMatrix};
use wgpu::util::DeviceExt;

use crate::{
    geometry::{SceneVertex, Vertex},
    resources::texture::Texture,
};

/// Per-frame uniforms shared by every draw call: the view and projection
/// matrices supplied by the external camera.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct FrameUniform {
    view: [[f32; 4]; 4],
    projection: [[f32; 4]; 4],
}

/// Per-object uniforms: the model matrix and a flat material color.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct ObjectUniform {
    model: [[f32; 4]; 4],
    color: [f32; 4],
}

/// The compiled shader program handle every `draw` call goes through.
///
/// Owns the render pipeline (alpha blending, depth test, no culling so single
/// quads stay visible from both sides), the frame uniform buffer with the
/// `view`/`projection` slots, and the bind group layout composite objects use
/// for their own `model`/`object_color` uniforms.
#[derive(Debug)]
pub struct SceneShader {
    pipeline: wgpu::RenderPipeline,
    frame_buffer: wgpu::Buffer,
    frame_bind_group: wgpu::BindGroup,
    object_layout: wgpu::BindGroupLayout,
}

impl SceneShader {
    pub fn new(device: &wgpu::Device, config: &wgpu::SurfaceConfiguration) -> Self {
        let frame_layout = uniform_layout(device, "frame_bind_group_layout");
        let object_layout = uniform_layout(device, "object_bind_group_layout");

        let frame_uniform = FrameUniform {
            view: Matrix4::identity().into(),
            projection: Matrix4::identity().into(),
        };
        let frame_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Frame Uniform Buffer"),
            contents: bytemuck::cast_slice(&[frame_uniform]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let frame_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &frame_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: frame_buffer.as_entire_binding(),
            }],
            label: Some("frame_bind_group"),
        });

        let render_pipeline_layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Scene Pipeline Layout"),
                bind_group_layouts: &[&frame_layout, &object_layout],
                push_constant_ranges: &[],
            });

        let shader = wgpu::ShaderModuleDescriptor {
            label: Some("Scene Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("scene_shader.wgsl").into()),
        };

        let pipeline = mk_render_pipeline(
            device,
            &render_pipeline_layout,
            config.format,
            Some(wgpu::BlendState::ALPHA_BLENDING),
            Some(Texture::DEPTH_FORMAT),
            &[SceneVertex::desc()],
            shader,
        );

        Self {
            pipeline,
            frame_buffer,
            frame_bind_group,
            object_layout,
        }
    }

    pub fn object_layout(&self) -> &wgpu::BindGroupLayout {
        &self.object_layout
    }

    /// Bind the pipeline and the per-frame uniforms on the given pass.
    pub fn bind(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.frame_bind_group, &[]);
    }

    /// Upload the externally supplied view/projection matrices.
    ///
    /// Every composite object writes these on draw, mirroring how the shader
    /// uniforms are re-set per object; within one frame all writes carry the
    /// same camera matrices, so the repetition is harmless.
    pub fn write_frame(
        &self,
        queue: &wgpu::Queue,
        view: Matrix4<f32>,
        projection: Matrix4<f32>,
    ) {
        let uniform = FrameUniform {
            view: view.into(),
            projection: projection.into(),
        };
        queue.write_buffer(&self.frame_buffer, 0, bytemuck::cast_slice(&[uniform]));
    }
}

/// One object's `model`/`object_color` uniform slot: a buffer plus its bind
/// group.
///
/// Each composite object owns one binding per material it draws with (glass
/// and frame each get their own), so uniform writes from different draws in
/// the same frame never alias.
#[derive(Debug)]
pub struct ObjectBinding {
    buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    color: [f32; 4],
}

impl ObjectBinding {
    pub fn new(
        device: &wgpu::Device,
        shader: &SceneShader,
        color: [f32; 4],
        label: &str,
    ) -> Self {
        let uniform = ObjectUniform {
            model: Matrix4::identity().into(),
            color,
        };
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&[uniform]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: shader.object_layout(),
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
            label: Some(label),
        });

        Self {
            buffer,
            bind_group,
            color,
        }
    }

    /// Upload the object's current model matrix alongside its fixed color.
    pub fn write(&self, queue: &wgpu::Queue, model: Matrix4<f32>) {
        let uniform = ObjectUniform {
            model: model.into(),
            color: self.color,
        };
        queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(&[uniform]));
    }

    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }
}

fn uniform_layout(device: &wgpu::Device, label: &str) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
        label: Some(label),
    })
}

pub fn mk_render_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    color_format: wgpu::TextureFormat,
    blend: Option<wgpu::BlendState>,
    depth_format: Option<wgpu::TextureFormat>,
    vertex_layouts: &[wgpu::VertexBufferLayout],
    shader: wgpu::ShaderModuleDescriptor,
) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(shader);

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        cache: None,
        label: Some("Render Pipeline"),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: vertex_layouts,
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format: color_format,
                blend,
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            // Flat decal tiles must stay visible when a wall is rotated to
            // face away from the camera.
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },
        depth_stencil: depth_format.map(|format| wgpu::DepthStencilState {
            format,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState {
            count: 1,
            mask: !0,
            alpha_to_coverage_enabled: false,
        },
        multiview: None,
    })
}
