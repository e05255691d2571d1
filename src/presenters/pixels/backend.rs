use crate::adapters::pixel_format::fill_rgba_frame;
use crate::controllers::interactive::errors::backend::BackendError;
use crate::controllers::interactive::ports::render_backend::RenderBackend;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport_geometry::ViewportGeometry;
use egui::{ClippedPrimitive, TexturesDelta};
use egui_wgpu::Renderer as EguiRenderer;
use log::debug;
use pixels::{Pixels, SurfaceTexture, wgpu};
use winit::window::Window;

/// Tessellated egui output waiting to be drawn over the next frame.
pub struct Overlay {
    pub primitives: Vec<ClippedPrimitive>,
    pub textures_delta: TexturesDelta,
    pub pixels_per_point: f32,
}

struct Surface {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
}

/// Presents frames on a window through a `pixels` surface, with an egui overlay.
pub struct PixelsBackend {
    window: &'static Window,
    surface: Option<Surface>,
    buffer_size: (u32, u32),
    overlay: Option<Overlay>,
}

impl PixelsBackend {
    #[must_use]
    pub fn new(window: &'static Window) -> Self {
        Self {
            window,
            surface: None,
            buffer_size: (0, 0),
            overlay: None,
        }
    }

    pub fn set_overlay(&mut self, overlay: Overlay) {
        self.overlay = Some(overlay);
    }

    /// Follows the window's physical size. Zero sizes (minimized) are skipped.
    pub fn resize_surface(&mut self, width: u32, height: u32) -> Result<(), BackendError> {
        let Some(surface) = &mut self.surface else {
            return Ok(());
        };

        if width == 0 || height == 0 {
            return Ok(());
        }

        surface
            .pixels
            .resize_surface(width, height)
            .map_err(unavailable)
    }

    fn ensure_buffer_size(&mut self, width: u32, height: u32) -> Result<(), BackendError> {
        if self.buffer_size == (width, height) {
            return Ok(());
        }

        let Some(surface) = &mut self.surface else {
            return Err(not_initialized());
        };

        debug!("resizing pixels buffer to {}x{}", width, height);
        surface
            .pixels
            .resize_buffer(width, height)
            .map_err(unavailable)?;
        self.buffer_size = (width, height);

        Ok(())
    }
}

impl RenderBackend for PixelsBackend {
    fn initialize(&mut self, geometry: &ViewportGeometry) -> Result<(), BackendError> {
        let size = self.window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, self.window);

        let pixels = Pixels::new(geometry.width_px, geometry.height_px, surface_texture)
            .map_err(unavailable)?;

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        self.surface = Some(Surface {
            pixels,
            egui_renderer,
        });
        self.buffer_size = (geometry.width_px, geometry.height_px);

        Ok(())
    }

    fn present(&mut self, frame: &PixelBuffer) -> Result<(), BackendError> {
        self.ensure_buffer_size(frame.width(), frame.height())?;

        let overlay = self.overlay.take();
        let window_size = self.window.inner_size();
        let Some(surface) = &mut self.surface else {
            return Err(not_initialized());
        };

        fill_rgba_frame(frame, surface.pixels.frame_mut()).map_err(unavailable)?;

        let egui_renderer = &mut surface.egui_renderer;

        surface
            .pixels
            .render_with(|encoder, render_target, context| {
                // First, render the pixels framebuffer (the scaling pass)
                context.scaling_renderer.render(encoder, render_target);

                let Some(overlay) = &overlay else {
                    return Ok(());
                };

                let screen_descriptor = egui_wgpu::ScreenDescriptor {
                    size_in_pixels: [window_size.width, window_size.height],
                    pixels_per_point: overlay.pixels_per_point,
                };

                for (id, delta) in &overlay.textures_delta.set {
                    egui_renderer.update_texture(&context.device, &context.queue, *id, delta);
                }

                egui_renderer.update_buffers(
                    &context.device,
                    &context.queue,
                    encoder,
                    &overlay.primitives,
                    &screen_descriptor,
                );

                {
                    let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                        label: Some("egui"),
                        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                            view: render_target,
                            resolve_target: None,
                            ops: wgpu::Operations {
                                load: wgpu::LoadOp::Load, // Keep pixels content
                                store: wgpu::StoreOp::Store,
                            },
                        })],
                        depth_stencil_attachment: None,
                        ..Default::default()
                    });

                    egui_renderer.render(&mut render_pass, &overlay.primitives, &screen_descriptor);
                }

                for id in &overlay.textures_delta.free {
                    egui_renderer.free_texture(id);
                }

                Ok(())
            })
            .map_err(unavailable)
    }
}

fn unavailable(err: impl std::fmt::Display) -> BackendError {
    BackendError::BackendUnavailable {
        reason: err.to_string(),
    }
}

fn not_initialized() -> BackendError {
    BackendError::BackendUnavailable {
        reason: "pixels surface was not initialized".to_string(),
    }
}
