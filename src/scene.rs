//! Scene assembly and the windowed event loop.
//!
//! [`RoomScene`] places the composite objects that make up the room and
//! forwards per-frame draw dispatch to them in a fixed order. [`run`] drives
//! the winit event loop: create the window, build the GPU context and scene,
//! then redraw until the window closes.

use std::{iter, sync::Arc};

use cgmath::{Deg, Matrix4, Vector3};
use instant::Instant;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::Window,
};

use crate::{
    context::Context,
    geometry::WindowUnitStyle,
    objects::{GridLayout, Wall, WindowWall},
    pipelines::SceneShader,
    resources::texture::Texture,
};

/// The static room: one window wall and one structural west wall.
#[derive(Debug)]
pub struct RoomScene {
    shader: SceneShader,
    window_wall: WindowWall,
    west_wall: Wall,
}

impl RoomScene {
    pub fn new(ctx: &Context) -> Self {
        let shader = SceneShader::new(&ctx.device, &ctx.config);

        let window_wall = WindowWall::new(
            &ctx.device,
            &shader,
            GridLayout {
                spacing_x: 0.9,
                spacing_y: 1.5,
                ..Default::default()
            },
            &WindowUnitStyle::default(),
        );

        let mut west_wall = Wall::new(&ctx.device, &shader, 4.0, 10.0, 0.2, 5, 8);
        west_wall.set_transform(
            Matrix4::from_translation(Vector3::new(-6.0, 0.0, 0.0))
                * Matrix4::from_angle_y(Deg(90.0)),
        );

        log::info!(
            "room scene built: {} window units, west wall with {} vertices",
            window_wall.len(),
            west_wall.vertex_count(),
        );

        Self {
            shader,
            window_wall,
            west_wall,
        }
    }

    /// Draw the whole room in construction order.
    pub fn draw(
        &self,
        pass: &mut wgpu::RenderPass<'_>,
        queue: &wgpu::Queue,
        view: Matrix4<f32>,
        projection: Matrix4<f32>,
    ) {
        self.window_wall
            .draw(pass, queue, view, projection, &self.shader);
        self.west_wall
            .draw(pass, queue, view, projection, &self.shader);
    }
}

struct AppState {
    ctx: Context,
    scene: RoomScene,
    is_surface_configured: bool,
}

impl AppState {
    fn new(window: Arc<Window>) -> anyhow::Result<Self> {
        let ctx = pollster::block_on(Context::new(window))?;
        let scene = RoomScene::new(&ctx);

        Ok(Self {
            ctx,
            scene,
            is_surface_configured: false,
        })
    }

    fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.ctx.config.width = width;
            self.ctx.config.height = height;
            self.is_surface_configured = true;
            self.ctx.projection.resize(width, height);
            self.ctx
                .surface
                .configure(&self.ctx.device, &self.ctx.config);
            self.ctx.depth_texture = Texture::create_depth_texture(
                &self.ctx.device,
                [self.ctx.config.width, self.ctx.config.height],
                "depth_texture",
            );
        }
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        self.ctx.window.request_redraw();

        // Rendering requires the surface to be configured
        if !self.is_surface_configured {
            return Ok(());
        }

        let output = self.ctx.surface.get_current_texture()?;
        let view_target = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let view = self.ctx.camera.calc_matrix();
        let projection = self.ctx.projection.calc_matrix();

        let mut encoder = self
            .ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view_target,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.ctx.clear_colour),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.ctx.depth_texture.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            self.scene
                .draw(&mut render_pass, &self.ctx.queue, view, projection);
        }

        self.ctx.queue.submit(iter::once(encoder.finish()));
        output.present();
        Ok(())
    }
}

struct App {
    state: Option<AppState>,
    last_frame: Instant,
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let attributes = Window::default_attributes().with_title("wallkit room scene");
        let window = match event_loop.create_window(attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("could not create the window: {e}");
                event_loop.exit();
                return;
            }
        };

        match AppState::new(window) {
            Ok(state) => self.state = Some(state),
            Err(e) => {
                log::error!("app initialization failed: {e}");
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let state = match &mut self.state {
            Some(state) => state,
            None => return,
        };

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => state.resize(size.width, size.height),
            WindowEvent::RedrawRequested => {
                let dt = self.last_frame.elapsed();
                self.last_frame = Instant::now();
                log::trace!("frame time: {dt:?}");

                match state.render() {
                    Ok(()) => {}
                    // The surface needs reconfiguring
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        let size = state.ctx.window.inner_size();
                        state.resize(size.width, size.height);
                    }
                    Err(e) => {
                        log::error!("unable to render: {e}");
                        event_loop.exit();
                    }
                }
            }
            _ => {}
        }
    }
}

/// Open a window and render the room scene until the window closes.
pub fn run() -> anyhow::Result<()> {
    env_logger::init();

    let event_loop = EventLoop::new()?;
    let mut app = App {
        state: None,
        last_frame: Instant::now(),
    };
    event_loop.run_app(&mut app)?;
    Ok(())
}
