// Canvas theme constants.

use pinboard_core::Color;

// Window & canvas
pub const WINDOW_BG: Color = Color::rgb(0.07, 0.07, 0.10); // dead space around the canvas
pub const CANVAS_BG: Color = Color::rgb(0.97, 0.96, 0.94); // the 16:9 drawing surface

// Drag decoration
pub const DRAG_HIGHLIGHT: Color = Color::rgb(0.0, 0.5, 0.0);
pub const DRAG_HIGHLIGHT_WIDTH: f32 = 2.0;

// Window sizing
pub const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 720.0;
pub const MIN_WINDOW_WIDTH: f32 = 400.0;
pub const MIN_WINDOW_HEIGHT: f32 = 225.0;
