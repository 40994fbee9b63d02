//! Sizes, rectangles and insets in layout units.
//!
//! All values are `f32` points in a top-left origin, y-down coordinate space.
//! Nothing here clamps: negative widths are representable so callers can
//! detect a layout with no room left and react to it.

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size::new(0.0, 0.0);

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const fn square(side: f32) -> Self {
        Self::new(side, side)
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// True when either dimension is zero or negative.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Grows the size by the insets on every side.
    pub fn inflate(self, insets: EdgeInsets) -> Self {
        Self::new(
            self.width + insets.horizontal_sum(),
            self.height + insets.vertical_sum(),
        )
    }

    /// Scales the size down, keeping its aspect ratio, until it fits `max_width`.
    /// Sizes that already fit are returned untouched.
    pub fn aspect_fit_width(self, max_width: f32) -> Self {
        if self.width <= max_width || self.width <= 0.0 {
            return self;
        }
        let max_width = max_width.max(0.0);
        Self::new(max_width, max_width * self.height / self.width)
    }
}

/// Axis-aligned rectangle given by its top-left corner and size.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const ZERO: Rect = Rect::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle of `size` at the origin, e.g. a cell's own bounds.
    pub const fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    /// True when `other` lies entirely inside this rectangle (edges included).
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.max_x() <= self.max_x()
            && other.max_y() <= self.max_y()
    }

    /// True when the two rectangles share a region of positive area.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.max_x()
            && other.x < self.max_x()
            && self.y < other.max_y()
            && other.y < self.max_y()
    }
}

/// Space around each edge of a box. Leading is `left`, trailing is `right`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EdgeInsets {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl EdgeInsets {
    pub const ZERO: EdgeInsets = EdgeInsets::tlbr(0.0, 0.0, 0.0, 0.0);

    /// Builds insets in top, left, bottom, right order.
    pub const fn tlbr(top: f32, left: f32, bottom: f32, right: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn uniform(all: f32) -> Self {
        Self::tlbr(all, all, all, all)
    }

    pub fn horizontal(horizontal: f32) -> Self {
        Self::tlbr(0.0, horizontal, 0.0, horizontal)
    }

    pub fn vertical(vertical: f32) -> Self {
        Self::tlbr(vertical, 0.0, vertical, 0.0)
    }

    pub fn from_components(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self::tlbr(top, left, bottom, right)
    }

    /// Swaps the leading and trailing edges, turning incoming insets into
    /// outgoing ones.
    pub fn mirrored(self) -> Self {
        Self {
            left: self.right,
            right: self.left,
            ..self
        }
    }

    pub fn horizontal_sum(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical_sum(&self) -> f32 {
        self.top + self.bottom
    }
}
