// Layout model for the image canvas.
// Owns the ordered placements and the 16:9 surface sizing rule; every
// mutation goes through propose/commit in the interaction controller.


use pinboard_core::{ImageIndex, Rect, Size, Vec2};
use thiserror::Error;

/// Surface aspect ratio, width over height.
const ASPECT: f32 = 16.0 / 9.0;

// ──────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// An image reported a negative or non-finite intrinsic size. Hit-testing
    /// and the bounds gate assume non-negative finite extents, so this is a
    /// configuration error at startup rather than undefined behavior later.
    #[error("image {index} has invalid intrinsic size {width}x{height}")]
    InvalidImageSize {
        index: ImageIndex,
        width: f32,
        height: f32,
    },
}

// ──────────────────────────────────────────────
// Placement
// ──────────────────────────────────────────────

/// Position and render size of one image, in surface-local pixels.
/// `width`/`height` are fixed at creation from the image's intrinsic size;
/// only `x`/`y` ever change, and only via a committed move proposal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Placement {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

// ──────────────────────────────────────────────
// DragSet
// ──────────────────────────────────────────────

/// The images grabbed by the current gesture: a sorted set of indices paired
/// with a snapshot of each placement at drag-start. The snapshot doubles as
/// the anchor for delta computation, so mid-drag rejections never accumulate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragSet {
    entries: Vec<(ImageIndex, Placement)>,
}

impl DragSet {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn contains(&self, index: ImageIndex) -> bool {
        self.entries.binary_search_by_key(&index, |(i, _)| *i).is_ok()
    }

    /// Grabbed indices in ascending order.
    pub fn indices(&self) -> impl Iterator<Item = ImageIndex> + '_ {
        self.entries.iter().map(|(i, _)| *i)
    }

    fn entries(&self) -> &[(ImageIndex, Placement)] {
        &self.entries
    }
}

// ──────────────────────────────────────────────
// BoardLayout
// ──────────────────────────────────────────────

/// Ordered placements, index-aligned 1:1 with the source image list.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardLayout {
    placements: Vec<Placement>,
}

impl BoardLayout {
    /// Build the initial layout: one placement per image, left to right on a
    /// single row. Each image's x offset is the PREVIOUS image's width, not a
    /// running sum, which produces gaps and overlaps for non-uniform widths.
    /// Long-standing behavior, kept as-is.
    ///
    /// No surface-fit check happens here; images may start outside bounds.
    pub fn from_image_sizes(sizes: &[Size]) -> Result<Self, LayoutError> {
        let mut placements = Vec::with_capacity(sizes.len());
        for (index, size) in sizes.iter().enumerate() {
            if !size.width.is_finite()
                || !size.height.is_finite()
                || size.width < 0.0
                || size.height < 0.0
            {
                return Err(LayoutError::InvalidImageSize {
                    index,
                    width: size.width,
                    height: size.height,
                });
            }
            let x = if index > 0 { sizes[index - 1].width } else { 0.0 };
            placements.push(Placement {
                x,
                y: 0.0,
                width: size.width,
                height: size.height,
            });
        }
        Ok(Self { placements })
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Collect every placement whose interior contains `point`, with its
    /// current position as the drag anchor. Strict comparisons: a point
    /// exactly on an edge is not a hit. Overlapping placements all match, so
    /// one gesture can grab several images at once.
    pub fn hit_test(&self, point: Vec2) -> DragSet {
        let entries = self
            .placements
            .iter()
            .enumerate()
            .filter(|(_, p)| {
                point.x > p.x
                    && point.x < p.x + p.width
                    && point.y > p.y
                    && point.y < p.y + p.height
            })
            .map(|(i, p)| (i, *p))
            .collect();
        DragSet { entries }
    }

    /// Candidate layout for moving the grabbed set by `delta` from its
    /// drag-start anchors. Placements outside the set are untouched. The
    /// candidate is not committed; the caller gates it with `within_bounds`.
    pub fn propose_move(&self, drag: &DragSet, delta: Vec2) -> BoardLayout {
        let mut candidate = self.clone();
        for &(index, anchor) in drag.entries() {
            if let Some(p) = candidate.placements.get_mut(index) {
                p.x = anchor.x + delta.x;
                p.y = anchor.y + delta.y;
            }
        }
        candidate
    }

    /// True iff EVERY placement lies fully inside `surface`. The gate is
    /// all-or-nothing across the whole layout: one offending placement
    /// (grabbed or not) rejects the entire move. A placement that starts
    /// outside bounds therefore can never be dragged smoothly back in; each
    /// partial step still fails the gate. Known limitation, kept as-is.
    pub fn within_bounds(&self, surface: Rect) -> bool {
        self.placements.iter().all(|p| {
            p.x >= surface.x
                && p.x + p.width <= surface.x + surface.width
                && p.y >= surface.y
                && p.y + p.height <= surface.y + surface.height
        })
    }
}

// ──────────────────────────────────────────────
// Surface sizing
// ──────────────────────────────────────────────

/// Size the drawing surface to 16:9 inside the viewport, shrink-to-fit:
/// take the full viewport height unless the derived width would overflow the
/// viewport width, in which case derive the height from the width instead.
pub fn surface_size(viewport: Size) -> Size {
    let mut height = viewport.height;
    let mut width = height * ASPECT;
    if width > viewport.width {
        width = viewport.width;
        height = width * (9.0 / 16.0);
    }
    Size::new(width, height)
}
