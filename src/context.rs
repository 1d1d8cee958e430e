use std::sync::Arc;

use winit::window::Window;

use crate::{
    camera::{Camera, Projection},
    resources::texture,
};

/// Central GPU and window context.
///
/// Owns the surface, device, queue and depth texture, plus the camera and
/// projection the scene loop reads its view/projection matrices from. The
/// rendering context is assumed current for every buffer creation and draw;
/// all of it lives on one thread.
#[derive(Debug)]
pub struct Context {
    pub(crate) window: Arc<Window>,
    pub(crate) depth_texture: texture::Texture,
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    pub camera: Camera,
    pub projection: Projection,
    pub clear_colour: wgpu::Color,
}

impl Context {
    pub async fn new(window: Arc<Window>) -> anyhow::Result<Self> {
        let size = window.inner_size();

        log::info!("WGPU setup");
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance.create_surface(window.clone())?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;

        log::info!("device and queue");
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: None,
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
                trace: wgpu::Trace::Off,
            })
            .await?;

        log::info!("surface configuration");
        let surface_caps = surface.get_capabilities(&adapter);
        // The shader assumes an sRGB surface; a non-sRGB fallback would come
        // out darker.
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .unwrap_or(surface_caps.formats[0]);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width,
            height: size.height,
            present_mode: surface_caps.present_modes[0],
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };

        // Positioned far enough back to fit the full window wall, looking at
        // the origin.
        let camera = Camera::new((0.0, 3.0, 10.0), cgmath::Deg(-90.0), cgmath::Deg(-17.0));
        let projection =
            Projection::new(config.width, config.height, cgmath::Deg(60.0), 0.1, 1000.0);

        let depth_texture = texture::Texture::create_depth_texture(
            &device,
            [config.width, config.height],
            "depth_texture",
        );

        Ok(Self {
            window,
            depth_texture,
            surface,
            device,
            queue,
            config,
            camera,
            projection,
            clear_colour: wgpu::Color {
                r: 0.15,
                g: 0.15,
                b: 0.15,
                a: 1.0,
            },
        })
    }
}
