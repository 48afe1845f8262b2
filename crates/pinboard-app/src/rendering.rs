use pinboard_core::{ImageIndex, Rect, Renderer};

use crate::theme::*;
use crate::App;

impl App {
    pub(crate) fn render(&mut self) {
        let surface = match self.surface.as_ref() {
            Some(s) => s,
            None => return,
        };

        let output = match surface.get_current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.reconfigure_surface();
                return;
            }
            Err(e) => {
                log::error!("Surface error: {}", e);
                return;
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let logical = self.logical_size();
        let canvas = self.canvas_rect;
        let placements = self.layout.placements().to_vec();
        let dragged: Vec<ImageIndex> = self
            .controller
            .drag_set()
            .map(|d| d.indices().collect())
            .unwrap_or_default();

        let renderer = self.renderer.as_mut().unwrap();
        renderer.begin_frame(logical);

        renderer.draw_rect(canvas, CANVAS_BG);

        // Paint order is enumeration order; later images draw over earlier.
        for (index, p) in placements.iter().enumerate() {
            renderer.draw_image(
                index,
                Rect::new(canvas.x + p.x, canvas.y + p.y, p.width, p.height),
            );
        }

        for index in dragged {
            if let Some(p) = placements.get(index) {
                renderer.draw_border(
                    Rect::new(canvas.x + p.x, canvas.y + p.y, p.width, p.height),
                    DRAG_HIGHLIGHT,
                    DRAG_HIGHLIGHT_WIDTH,
                );
            }
        }

        renderer.end_frame();

        let device = self.device.as_ref().unwrap();
        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("frame_encoder"),
        });
        self.renderer
            .as_mut()
            .unwrap()
            .render_frame(&mut encoder, &view);

        self.queue
            .as_ref()
            .unwrap()
            .submit(std::iter::once(encoder.finish()));
        output.present();
    }
}
