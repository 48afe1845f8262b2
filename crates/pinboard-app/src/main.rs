// Pinboard — a set of images on a 16:9 canvas, repositioned by mouse drag.
// Wires all crates together: winit window, wgpu surface, renderer, layout
// model, interaction controller, settings.

mod event_loop;
mod gpu;
mod images;
mod rendering;
mod settings;
mod theme;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context};
use winit::dpi::PhysicalSize;
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::Window;

use pinboard_core::{Rect, Size, Vec2};
use pinboard_input::Controller;
use pinboard_layout::BoardLayout;
use pinboard_renderer::WgpuRenderer;

use images::SourceImage;
use settings::PinboardSettings;

// ──────────────────────────────────────────────
// App state
// ──────────────────────────────────────────────

struct App {
    pub(crate) window: Option<Arc<Window>>,
    pub(crate) surface: Option<wgpu::Surface<'static>>,
    pub(crate) device: Option<Arc<wgpu::Device>>,
    pub(crate) queue: Option<Arc<wgpu::Queue>>,
    pub(crate) surface_config: Option<wgpu::SurfaceConfiguration>,
    pub(crate) renderer: Option<WgpuRenderer>,

    // Board state
    pub(crate) images: Vec<SourceImage>,
    pub(crate) layout: BoardLayout,
    pub(crate) controller: Controller,

    // The 16:9 drawing surface, in window-logical coordinates. Recomputed on
    // every resize; the origin stays at the window's top-left corner.
    pub(crate) canvas_rect: Rect,

    // Window state
    pub(crate) settings: PinboardSettings,
    pub(crate) scale_factor: f32,
    pub(crate) window_size: PhysicalSize<u32>,
    pub(crate) last_cursor_pos: Vec2,
    pub(crate) cursor_on_canvas: bool,

    // Frame pacing
    pub(crate) needs_redraw: bool,
}

impl App {
    fn new(images: Vec<SourceImage>, layout: BoardLayout, settings: PinboardSettings) -> Self {
        Self {
            window: None,
            surface: None,
            device: None,
            queue: None,
            surface_config: None,
            renderer: None,
            images,
            layout,
            controller: Controller::new(),
            canvas_rect: Rect::new(0.0, 0.0, 0.0, 0.0),
            settings,
            scale_factor: 1.0,
            window_size: PhysicalSize::new(0, 0),
            last_cursor_pos: Vec2::new(0.0, 0.0),
            cursor_on_canvas: false,
            needs_redraw: true,
        }
    }

    pub(crate) fn logical_size(&self) -> Size {
        Size::new(
            self.window_size.width as f32 / self.scale_factor,
            self.window_size.height as f32 / self.scale_factor,
        )
    }

    /// Re-derive the canvas rect from the current window size. Must run
    /// before the next repaint after any viewport change.
    pub(crate) fn update_canvas_rect(&mut self) {
        let surface = pinboard_layout::surface_size(self.logical_size());
        self.canvas_rect = Rect::new(0.0, 0.0, surface.width, surface.height);
    }
}

// ──────────────────────────────────────────────
// Entry point
// ──────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<PathBuf> = std::env::args_os().skip(1).map(PathBuf::from).collect();
    if args.is_empty() {
        bail!("usage: pinboard <image-file-or-directory>...");
    }

    let paths = images::collect_paths(&args)?;
    let sources = images::load_images(&paths);
    if sources.is_empty() {
        bail!("no decodable images among {} path(s)", paths.len());
    }
    log::info!("Loaded {} of {} images", sources.len(), paths.len());

    let sizes: Vec<Size> = sources.iter().map(|s| s.size()).collect();
    let layout = BoardLayout::from_image_sizes(&sizes).context("building initial layout")?;

    let settings = settings::load_settings();

    let event_loop = EventLoop::new().context("creating event loop")?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new(sources, layout, settings);
    event_loop.run_app(&mut app).context("running event loop")?;

    settings::save_settings(&app.settings);
    Ok(())
}
