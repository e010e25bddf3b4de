//! Window surface implementing the simulation's draw interface

use particle_physics::Rgb;
use particle_simulation::Canvas;

use crate::renderer::{target_color, PointRenderer, PointVertex};

/// Buffers `draw_point` calls for a frame and submits them on `present`
pub struct SurfaceCanvas {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    renderer: PointRenderer,

    vertices: Vec<PointVertex>,
    clear_color: wgpu::Color,
    srgb: bool,

    // Set when presenting hits an error the canvas cannot recover from
    fatal_error: Option<wgpu::SurfaceError>,
}

impl SurfaceCanvas {
    /// `surface` must already be configured with `config`.
    pub fn new(
        surface: wgpu::Surface<'static>,
        device: wgpu::Device,
        queue: wgpu::Queue,
        config: wgpu::SurfaceConfiguration,
        viewport: (u32, u32),
        capacity: usize,
    ) -> Self {
        let renderer = PointRenderer::new(&device, config.format, viewport, capacity);
        let srgb = config.format.is_srgb();

        Self {
            surface,
            device,
            queue,
            config,
            renderer,
            vertices: Vec::with_capacity(capacity),
            clear_color: wgpu::Color::BLACK,
            srgb,
            fatal_error: None,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Error that should end the process, if one occurred since the last call
    pub fn take_fatal_error(&mut self) -> Option<wgpu::SurfaceError> {
        self.fatal_error.take()
    }

    fn acquire(&mut self) -> Option<wgpu::SurfaceTexture> {
        match self.surface.get_current_texture() {
            Ok(frame) => Some(frame),
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("Surface lost, reconfiguring");
                self.surface.configure(&self.device, &self.config);
                None
            }
            Err(wgpu::SurfaceError::Timeout) => {
                log::warn!("Surface timed out, skipping frame");
                None
            }
            Err(e) => {
                log::error!("Surface error: {e:?}");
                self.fatal_error = Some(e);
                None
            }
        }
    }
}

impl Canvas for SurfaceCanvas {
    fn clear(&mut self, color: Rgb) {
        self.vertices.clear();
        let [r, g, b, a] = target_color(color, self.srgb);
        self.clear_color = wgpu::Color {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a: a as f64,
        };
    }

    fn draw_point(&mut self, x: f32, y: f32, color: Rgb) {
        self.vertices.push(PointVertex {
            position: [x, y],
            color: target_color(color, self.srgb),
        });
    }

    fn present(&mut self) {
        let Some(frame) = self.acquire() else {
            return;
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.renderer.render(
            &self.device,
            &self.queue,
            &view,
            self.clear_color,
            &self.vertices,
        );

        frame.present();
    }
}
