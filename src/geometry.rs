//! Geometry primitives. Plain value types, no game logic.
//!
//! Coordinates grow right (x) and down (y), like terminal cells and most
//! screen spaces.

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned box stored as left/top/width/height.  `right` and `bottom`
/// are always derived, so the two views can never disagree.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, width, height }
    }

    /// Build a rectangle from its top-left corner and a size (`x` = width,
    /// `y` = height).
    pub fn from_origin(origin: Point, size: Point) -> Self {
        Self::new(origin.x, origin.y, size.x, size.y)
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Move the box so that its right edge sits at `x`.
    pub fn set_right(&mut self, x: f32) {
        self.left = x - self.width;
    }

    /// Move the box so that its bottom edge sits at `y`.
    pub fn set_bottom(&mut self, y: f32) {
        self.top = y - self.height;
    }

    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.left += dx;
        self.top += dy;
    }

    /// Half-open containment: the left and top edges are inside, the right
    /// and bottom edges are not.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x < self.right() && p.y >= self.top && p.y < self.bottom()
    }

    /// Strict AABB intersection.  Boxes that only share an edge or a corner
    /// do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.overlaps_x(other) && self.overlaps_y(other)
    }

    /// True when the horizontal extents intersect with nonzero width.
    pub fn overlaps_x(&self, other: &Rect) -> bool {
        self.left < other.right() && other.left < self.right()
    }

    /// True when the vertical extents intersect with nonzero height.
    pub fn overlaps_y(&self, other: &Rect) -> bool {
        self.top < other.bottom() && other.top < self.bottom()
    }
}
