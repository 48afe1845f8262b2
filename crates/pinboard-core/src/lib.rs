// ──────────────────────────────────────────────
// Geometry
// ──────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

// ──────────────────────────────────────────────
// Identity
// ──────────────────────────────────────────────

/// Index into the ordered image list. Enumeration order is the join key
/// between source images, placements and drag snapshots.
pub type ImageIndex = usize;

// ──────────────────────────────────────────────
// Colors
// ──────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

// ──────────────────────────────────────────────
// Input
// ──────────────────────────────────────────────

/// Pointer events as delivered by the host window, in window-logical
/// coordinates. Translation into surface-local coordinates happens in the
/// interaction controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { position: Vec2 },
    Move { position: Vec2 },
    Up { position: Vec2 },
    Leave,
}

// ──────────────────────────────────────────────
// Trait: Renderer
// ──────────────────────────────────────────────

/// The renderer draws primitives to the GPU.
/// All visual output goes through this trait.
pub trait Renderer {
    fn begin_frame(&mut self, size: Size);
    /// Filled rect under the image layer (canvas backdrop).
    fn draw_rect(&mut self, rect: Rect, color: Color);
    fn draw_image(&mut self, index: ImageIndex, rect: Rect);
    /// Hollow rect over the image layer (drag decoration).
    fn draw_border(&mut self, rect: Rect, color: Color, width: f32);
    fn end_frame(&mut self);
}
