//! GPU-backed composite object tests. These need a real adapter, so they are
//! gated behind the `integration-tests` feature like the rendering tests.

#![cfg(feature = "integration-tests")]

use cgmath::{Matrix4, SquareMatrix, Vector3};
use wallkit::{
    geometry::WindowUnitStyle,
    objects::{GridLayout, Wall, WindowUnit, WindowWall},
    pipelines::SceneShader,
};

fn test_device() -> (wgpu::Device, wgpu::Queue) {
    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
    let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
        power_preference: wgpu::PowerPreference::default(),
        compatible_surface: None,
        force_fallback_adapter: false,
    }))
    .expect("no adapter available for integration tests");
    pollster::block_on(adapter.request_device(&wgpu::DeviceDescriptor {
        label: None,
        required_features: wgpu::Features::empty(),
        required_limits: wgpu::Limits::default(),
        memory_hints: Default::default(),
        trace: wgpu::Trace::Off,
    }))
    .expect("no device available for integration tests")
}

fn test_config() -> wgpu::SurfaceConfiguration {
    wgpu::SurfaceConfiguration {
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        format: wgpu::TextureFormat::Rgba8UnormSrgb,
        width: 256,
        height: 256,
        present_mode: wgpu::PresentMode::Fifo,
        alpha_mode: wgpu::CompositeAlphaMode::Auto,
        view_formats: vec![],
        desired_maximum_frame_latency: 2,
    }
}

#[test]
fn should_apply_only_the_last_transform() {
    let (device, _queue) = test_device();
    let shader = SceneShader::new(&device, &test_config());

    let mut unit = WindowUnit::new(&device, &shader, &WindowUnitStyle::default());
    assert_eq!(unit.transform(), Matrix4::identity());

    unit.set_transform(Matrix4::from_translation(Vector3::new(1.0, 0.0, 0.0)));
    unit.set_transform(Matrix4::from_translation(Vector3::new(0.0, 2.0, 0.0)));
    assert_eq!(
        unit.transform(),
        Matrix4::from_translation(Vector3::new(0.0, 2.0, 0.0))
    );
}

#[test]
fn should_construct_no_units_for_an_empty_grid() {
    let (device, _queue) = test_device();
    let shader = SceneShader::new(&device, &test_config());

    let empty_rows = WindowWall::new(
        &device,
        &shader,
        GridLayout {
            rows: 0,
            cols: 5,
            ..Default::default()
        },
        &WindowUnitStyle::default(),
    );
    let empty_cols = WindowWall::new(
        &device,
        &shader,
        GridLayout {
            rows: 5,
            cols: 0,
            ..Default::default()
        },
        &WindowUnitStyle::default(),
    );
    assert!(empty_rows.is_empty());
    assert!(empty_cols.is_empty());
}

#[test]
fn should_translate_each_grid_cell_once() {
    let (device, _queue) = test_device();
    let shader = SceneShader::new(&device, &test_config());

    let wall = WindowWall::new(
        &device,
        &shader,
        GridLayout {
            rows: 2,
            cols: 3,
            spacing_x: 1.0,
            spacing_y: 1.0,
        },
        &WindowUnitStyle::default(),
    );
    assert_eq!(wall.len(), 6);
    assert_eq!(
        wall.units()[0].transform(),
        Matrix4::from_translation(Vector3::new(-1.0, -0.5, 0.0))
    );
    assert_eq!(
        wall.units()[5].transform(),
        Matrix4::from_translation(Vector3::new(1.0, 0.5, 0.0))
    );
}

#[test]
fn should_upload_the_combined_wall_mesh_once() {
    let (device, _queue) = test_device();
    let shader = SceneShader::new(&device, &test_config());

    let wall = Wall::new(&device, &shader, 4.0, 10.0, 0.2, 5, 8);
    assert_eq!(wall.vertex_count(), 42);
}
