// GPU renderer implementation
// Implements pinboard_core::Renderer using wgpu: one textured quad per
// image, solid rects for the drag decoration.

mod init;
mod shaders;
mod vertex;

use std::sync::Arc;

use pinboard_core::{Color, ImageIndex, Rect, Renderer, Size};

use vertex::{ImageVertex, RectVertex};

// ──────────────────────────────────────────────
// WgpuRenderer
// ──────────────────────────────────────────────

/// One uploaded image: the GPU texture and its sampling bind group.
/// Upload order matches the layout's image enumeration order.
struct ImageTexture {
    #[allow(dead_code)]
    texture: wgpu::Texture,
    bind_group: wgpu::BindGroup,
}

/// A queued image quad for this frame: which texture, and where its six
/// vertices start in the shared vertex buffer.
struct ImageDraw {
    index: ImageIndex,
    first_vertex: u32,
}

pub struct WgpuRenderer {
    // GPU pipelines
    rect_pipeline: wgpu::RenderPipeline,
    image_pipeline: wgpu::RenderPipeline,

    // Uniform buffer (screen size)
    uniform_buffer: wgpu::Buffer,
    uniform_bind_group: wgpu::BindGroup,

    // Image textures
    image_bind_group_layout: wgpu::BindGroupLayout,
    image_sampler: wgpu::Sampler,
    textures: Vec<ImageTexture>,

    // Frame batches — rebuilt every frame. Backdrop rects draw under the
    // images, overlay rects draw on top of them.
    backdrop_vertices: Vec<RectVertex>,
    backdrop_indices: Vec<u32>,
    rect_vertices: Vec<RectVertex>,
    rect_indices: Vec<u32>,
    image_vertices: Vec<ImageVertex>,
    image_draws: Vec<ImageDraw>,

    // GPU buffers
    backdrop_vb: wgpu::Buffer,
    backdrop_ib: wgpu::Buffer,
    rect_vb: wgpu::Buffer,
    rect_ib: wgpu::Buffer,
    image_vb: wgpu::Buffer,
    backdrop_vb_capacity: usize,
    backdrop_ib_capacity: usize,
    rect_vb_capacity: usize,
    rect_ib_capacity: usize,
    image_vb_capacity: usize,

    // Current frame state
    screen_size: Size,
    scale_factor: f32,
    pub clear_color: Color,
    last_uniform_screen: [f32; 2],

    // Surface format (for potential re-creation)
    #[allow(dead_code)]
    surface_format: wgpu::TextureFormat,

    // Store device and queue for texture upload and buffer growth
    device: Arc<wgpu::Device>,
    queue: Arc<wgpu::Queue>,
}

impl WgpuRenderer {
    pub fn set_scale_factor(&mut self, scale_factor: f32) {
        self.scale_factor = scale_factor;
        // Force a uniform rewrite on the next frame.
        self.last_uniform_screen = [0.0, 0.0];
    }

    pub fn image_count(&self) -> usize {
        self.textures.len()
    }

    /// Upload one RGBA8 image and return its index. Images must be uploaded
    /// in enumeration order so indices line up with the layout's placements.
    pub fn upload_image(&mut self, width: u32, height: u32, pixels: &[u8]) -> ImageIndex {
        let texture = self.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("image_texture"),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        self.queue.write_texture(
            wgpu::ImageCopyTexture {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            pixels,
            wgpu::ImageDataLayout {
                offset: 0,
                bytes_per_row: Some(4 * width.max(1)),
                rows_per_image: Some(height.max(1)),
            },
            wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let bind_group = self.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("image_bg"),
            layout: &self.image_bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&self.image_sampler),
                },
            ],
        });

        self.textures.push(ImageTexture { texture, bind_group });
        self.textures.len() - 1
    }

    /// Push an axis-aligned colored quad into a rect batch.
    fn push_rect_quad(
        vertices: &mut Vec<RectVertex>,
        indices: &mut Vec<u32>,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Color,
    ) {
        let base = vertices.len() as u32;
        let c = [color.r, color.g, color.b, color.a];

        vertices.push(RectVertex {
            position: [x, y],
            color: c,
        });
        vertices.push(RectVertex {
            position: [x + w, y],
            color: c,
        });
        vertices.push(RectVertex {
            position: [x + w, y + h],
            color: c,
        });
        vertices.push(RectVertex {
            position: [x, y + h],
            color: c,
        });

        indices.push(base);
        indices.push(base + 1);
        indices.push(base + 2);
        indices.push(base);
        indices.push(base + 2);
        indices.push(base + 3);
    }

    /// Push a textured quad (two triangles, full 0..1 UV range) into the
    /// image batch and record which texture draws it.
    fn push_image_quad(&mut self, index: ImageIndex, x: f32, y: f32, w: f32, h: f32) {
        let first_vertex = self.image_vertices.len() as u32;

        let corners = [
            ([x, y], [0.0, 0.0]),
            ([x + w, y], [1.0, 0.0]),
            ([x + w, y + h], [1.0, 1.0]),
            ([x, y], [0.0, 0.0]),
            ([x + w, y + h], [1.0, 1.0]),
            ([x, y + h], [0.0, 1.0]),
        ];
        for (position, uv) in corners {
            self.image_vertices.push(ImageVertex { position, uv });
        }

        self.image_draws.push(ImageDraw { index, first_vertex });
    }

    /// Ensure a GPU buffer is large enough; grow if needed.
    fn ensure_buffer_capacity(
        device: &wgpu::Device,
        buf: &mut wgpu::Buffer,
        capacity: &mut usize,
        needed: usize,
        usage: wgpu::BufferUsages,
        label: &str,
    ) {
        if needed > *capacity {
            let new_cap = needed.next_power_of_two().max(64 * 1024);
            *buf = device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(label),
                size: new_cap as u64,
                usage,
                mapped_at_creation: false,
            });
            *capacity = new_cap;
        }
    }

    /// Submit this frame's batched draw calls: clear → image quads in paint
    /// order → decoration rects on top.
    pub fn render_frame(&mut self, encoder: &mut wgpu::CommandEncoder, view: &wgpu::TextureView) {
        let vb_usage = wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST;
        let ib_usage = wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST;

        // Update the uniform buffer only when the physical size changed.
        let screen_data = [
            self.screen_size.width * self.scale_factor,
            self.screen_size.height * self.scale_factor,
        ];
        if screen_data != self.last_uniform_screen {
            let padded = [screen_data[0], screen_data[1], 0.0f32, 0.0f32];
            self.queue
                .write_buffer(&self.uniform_buffer, 0, bytemuck::cast_slice(&padded));
            self.last_uniform_screen = screen_data;
        }

        if !self.backdrop_vertices.is_empty() {
            let vb_bytes = bytemuck::cast_slice(&self.backdrop_vertices);
            Self::ensure_buffer_capacity(
                &self.device,
                &mut self.backdrop_vb,
                &mut self.backdrop_vb_capacity,
                vb_bytes.len(),
                vb_usage,
                "backdrop_vb",
            );
            self.queue.write_buffer(&self.backdrop_vb, 0, vb_bytes);

            let ib_bytes = bytemuck::cast_slice(&self.backdrop_indices);
            Self::ensure_buffer_capacity(
                &self.device,
                &mut self.backdrop_ib,
                &mut self.backdrop_ib_capacity,
                ib_bytes.len(),
                ib_usage,
                "backdrop_ib",
            );
            self.queue.write_buffer(&self.backdrop_ib, 0, ib_bytes);
        }

        if !self.image_vertices.is_empty() {
            let vb_bytes = bytemuck::cast_slice(&self.image_vertices);
            Self::ensure_buffer_capacity(
                &self.device,
                &mut self.image_vb,
                &mut self.image_vb_capacity,
                vb_bytes.len(),
                vb_usage,
                "image_vb",
            );
            self.queue.write_buffer(&self.image_vb, 0, vb_bytes);
        }

        if !self.rect_vertices.is_empty() {
            let vb_bytes = bytemuck::cast_slice(&self.rect_vertices);
            Self::ensure_buffer_capacity(
                &self.device,
                &mut self.rect_vb,
                &mut self.rect_vb_capacity,
                vb_bytes.len(),
                vb_usage,
                "rect_vb",
            );
            self.queue.write_buffer(&self.rect_vb, 0, vb_bytes);

            let ib_bytes = bytemuck::cast_slice(&self.rect_indices);
            Self::ensure_buffer_capacity(
                &self.device,
                &mut self.rect_ib,
                &mut self.rect_ib_capacity,
                ib_bytes.len(),
                ib_usage,
                "rect_ib",
            );
            self.queue.write_buffer(&self.rect_ib, 0, ib_bytes);
        }

        let backdrop_count = self.backdrop_indices.len() as u32;
        let rect_count = self.rect_indices.len() as u32;

        {
            let clear = self.clear_color;
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("main_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: clear.r as f64,
                            g: clear.g as f64,
                            b: clear.b as f64,
                            a: clear.a as f64,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            // Draw order: backdrop rects → image quads → overlay rects
            if backdrop_count > 0 {
                pass.set_pipeline(&self.rect_pipeline);
                pass.set_bind_group(0, &self.uniform_bind_group, &[]);
                pass.set_vertex_buffer(0, self.backdrop_vb.slice(..));
                pass.set_index_buffer(self.backdrop_ib.slice(..), wgpu::IndexFormat::Uint32);
                pass.draw_indexed(0..backdrop_count, 0, 0..1);
            }

            if !self.image_draws.is_empty() {
                pass.set_pipeline(&self.image_pipeline);
                pass.set_bind_group(0, &self.uniform_bind_group, &[]);
                pass.set_vertex_buffer(0, self.image_vb.slice(..));
                for draw in &self.image_draws {
                    let tex = match self.textures.get(draw.index) {
                        Some(t) => t,
                        None => continue,
                    };
                    pass.set_bind_group(1, &tex.bind_group, &[]);
                    pass.draw(draw.first_vertex..draw.first_vertex + 6, 0..1);
                }
            }

            if rect_count > 0 {
                pass.set_pipeline(&self.rect_pipeline);
                pass.set_bind_group(0, &self.uniform_bind_group, &[]);
                pass.set_vertex_buffer(0, self.rect_vb.slice(..));
                pass.set_index_buffer(self.rect_ib.slice(..), wgpu::IndexFormat::Uint32);
                pass.draw_indexed(0..rect_count, 0, 0..1);
            }
        }
    }
}

// ──────────────────────────────────────────────
// Renderer trait implementation
// ──────────────────────────────────────────────

impl Renderer for WgpuRenderer {
    fn begin_frame(&mut self, size: Size) {
        self.screen_size = size;
        self.backdrop_vertices.clear();
        self.backdrop_indices.clear();
        self.rect_vertices.clear();
        self.rect_indices.clear();
        self.image_vertices.clear();
        self.image_draws.clear();
    }

    fn draw_rect(&mut self, rect: Rect, color: Color) {
        let s = self.scale_factor;
        Self::push_rect_quad(
            &mut self.backdrop_vertices,
            &mut self.backdrop_indices,
            rect.x * s,
            rect.y * s,
            rect.width * s,
            rect.height * s,
            color,
        );
    }

    fn draw_image(&mut self, index: ImageIndex, rect: Rect) {
        if index >= self.textures.len() {
            log::debug!("draw_image: no texture uploaded for index {index}");
            return;
        }
        let x = rect.x * self.scale_factor;
        let y = rect.y * self.scale_factor;
        let w = rect.width * self.scale_factor;
        let h = rect.height * self.scale_factor;
        self.push_image_quad(index, x, y, w, h);
    }

    fn draw_border(&mut self, rect: Rect, color: Color, width: f32) {
        let s = self.scale_factor;
        let x = rect.x * s;
        let y = rect.y * s;
        let w = rect.width * s;
        let h = rect.height * s;
        let t = width * s;

        // Four strips centered on the rect edges, the way a canvas stroke
        // straddles its path. Side strips stop short of the corners so a
        // translucent color never double-blends.
        let vs = &mut self.rect_vertices;
        let is = &mut self.rect_indices;
        Self::push_rect_quad(vs, is, x - t / 2.0, y - t / 2.0, w + t, t, color);
        Self::push_rect_quad(vs, is, x - t / 2.0, y + h - t / 2.0, w + t, t, color);
        Self::push_rect_quad(vs, is, x - t / 2.0, y + t / 2.0, t, h - t, color);
        Self::push_rect_quad(vs, is, x + w - t / 2.0, y + t / 2.0, t, h - t, color);
    }

    fn end_frame(&mut self) {
        // Submission happens in render_frame with the frame's surface view.
    }
}
