// ApplicationHandler implementation: window lifecycle and the translation
// of winit events into the controller's pointer events.

use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::window::{WindowAttributes, WindowId};

use pinboard_core::{PointerEvent, Vec2};
use pinboard_input::Signal;

use crate::theme::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::App;

impl App {
    /// Feed one pointer event through the controller and pick up the
    /// repaint signal. The canvas rect is the coordinate reference for the
    /// whole gesture.
    fn dispatch_pointer(&mut self, event: PointerEvent) {
        let canvas = self.canvas_rect;
        let signal = self.controller.process(event, &mut self.layout, canvas);
        if signal == Signal::Repaint {
            self.needs_redraw = true;
        }
    }

    fn handle_cursor_moved(&mut self, pos: Vec2) {
        self.last_cursor_pos = pos;

        if self.canvas_rect.contains(pos) {
            self.cursor_on_canvas = true;
            self.dispatch_pointer(PointerEvent::Move { position: pos });
        } else if self.cursor_on_canvas {
            // Leaving the canvas ends any drag, exactly like leaving the
            // window would.
            self.cursor_on_canvas = false;
            self.dispatch_pointer(PointerEvent::Leave);
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title("Pinboard")
            .with_inner_size(LogicalSize::new(
                self.settings.window_width as f64,
                self.settings.window_height as f64,
            ))
            .with_min_inner_size(LogicalSize::new(
                MIN_WINDOW_WIDTH as f64,
                MIN_WINDOW_HEIGHT as f64,
            ));

        let window = Arc::new(event_loop.create_window(attrs).expect("create window"));
        self.window = Some(window);
        self.init_gpu();
        self.update_canvas_rect();
        self.needs_redraw = true;
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                let logical = self.logical_size();
                self.settings.window_width = logical.width;
                self.settings.window_height = logical.height;
                event_loop.exit();
            }

            WindowEvent::Resized(new_size) => {
                self.window_size = new_size;
                self.reconfigure_surface();
                self.update_canvas_rect();
                self.needs_redraw = true;
            }

            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.scale_factor = scale_factor as f32;
                if let Some(renderer) = self.renderer.as_mut() {
                    renderer.set_scale_factor(self.scale_factor);
                }
                // A Resized event with the new physical size follows.
            }

            WindowEvent::CursorMoved { position, .. } => {
                let logical = position.to_logical::<f32>(self.scale_factor as f64);
                self.handle_cursor_moved(Vec2::new(logical.x, logical.y));
            }

            WindowEvent::CursorLeft { .. } => {
                if self.cursor_on_canvas {
                    self.cursor_on_canvas = false;
                    self.dispatch_pointer(PointerEvent::Leave);
                }
            }

            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                // Presses outside the canvas never reach the controller.
                if self.canvas_rect.contains(self.last_cursor_pos) {
                    self.dispatch_pointer(PointerEvent::Down {
                        position: self.last_cursor_pos,
                    });
                }
            }

            WindowEvent::MouseInput {
                state: ElementState::Released,
                button: MouseButton::Left,
                ..
            } => {
                self.dispatch_pointer(PointerEvent::Up {
                    position: self.last_cursor_pos,
                });
            }

            WindowEvent::RedrawRequested => {
                self.render();
                self.needs_redraw = false;
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if self.needs_redraw {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }
}
