/*!
 * Geometric primitives.
 *
 * Paths and transforms are publicly imported from tiny-skia-path.
 *
 * Y low coordinates are at the top.
 */

pub use tiny_skia_path::{Path, PathBuilder, PathSegment, Point, Transform};

/// A size in 2D space represented by width and height
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    w: f32,
    h: f32,
}

impl Size {
    /// Build a size from width and height
    pub const fn new(w: f32, h: f32) -> Self {
        Size { w, h }
    }

    /// The width
    pub const fn width(&self) -> f32 {
        self.w
    }

    /// The height
    pub const fn height(&self) -> f32 {
        self.h
    }

    /// Multiply both dimensions by `factor`
    pub const fn scale(&self, factor: f32) -> Size {
        Size {
            w: self.w * factor,
            h: self.h * factor,
        }
    }

    /// Whether both dimensions are finite and strictly positive
    pub fn is_positive(&self) -> bool {
        self.w.is_finite() && self.h.is_finite() && self.w > 0.0 && self.h > 0.0
    }
}

impl From<(f32, f32)> for Size {
    fn from((w, h): (f32, f32)) -> Self {
        Size { w, h }
    }
}

/// A rectangle in 2D space represented by x, y, width and height
///
/// Width and height are never negative: constructors normalize them to zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    x: f32,
    y: f32,
    w: f32,
    h: f32,
}

impl Rect {
    /// Build a rectangle from x, y, width and height
    pub const fn from_xywh(x: f32, y: f32, w: f32, h: f32) -> Self {
        Rect {
            x,
            y,
            w: w.max(0.0),
            h: h.max(0.0),
        }
    }

    /// Build a rectangle from top, right, bottom and left
    pub const fn from_trbl(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Rect::from_xywh(left, top, right - left, bottom - top)
    }

    /// Build a rectangle from the origin and a size
    pub const fn from_size(size: Size) -> Self {
        Rect::from_xywh(0.0, 0.0, size.width(), size.height())
    }

    /// The X coordinate of the left side
    pub const fn x(&self) -> f32 {
        self.x
    }

    /// The Y coordinate of the top side
    pub const fn y(&self) -> f32 {
        self.y
    }

    pub const fn width(&self) -> f32 {
        self.w
    }

    pub const fn height(&self) -> f32 {
        self.h
    }

    pub const fn top(&self) -> f32 {
        self.y
    }

    pub const fn right(&self) -> f32 {
        self.x + self.w
    }

    pub const fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub const fn left(&self) -> f32 {
        self.x
    }

    /// The size of the rectangle
    pub const fn size(&self) -> Size {
        Size::new(self.w, self.h)
    }

    /// The horizontal center X coordinate
    pub const fn center_x(&self) -> f32 {
        self.x + self.w / 2.0
    }

    /// The vertical center Y coordinate
    pub const fn center_y(&self) -> f32 {
        self.y + self.h / 2.0
    }

    /// Grow the rectangle by `d` on each side (shrink if negative)
    pub const fn outset(&self, d: f32) -> Rect {
        Rect::from_xywh(self.x - d, self.y - d, self.w + 2.0 * d, self.h + 2.0 * d)
    }

    /// Smallest rectangle containing both `r1` and `r2`
    pub const fn unite(r1: &Rect, r2: &Rect) -> Rect {
        Rect::from_trbl(
            r1.top().min(r2.top()),
            r1.right().max(r2.right()),
            r1.bottom().max(r2.bottom()),
            r1.left().min(r2.left()),
        )
    }

    /// Unite two optional rectangles
    pub fn unite_opt(r1: Option<&Rect>, r2: Option<&Rect>) -> Option<Rect> {
        match (r1, r2) {
            (Some(r1), Some(r2)) => Some(Rect::unite(r1, r2)),
            (Some(r), None) | (None, Some(r)) => Some(*r),
            (None, None) => None,
        }
    }

    /// Axis-aligned bounding box of the rectangle once transformed
    pub fn transform(&self, transform: &Transform) -> Rect {
        let mut pts = [
            Point::from_xy(self.left(), self.top()),
            Point::from_xy(self.right(), self.top()),
            Point::from_xy(self.right(), self.bottom()),
            Point::from_xy(self.left(), self.bottom()),
        ];
        transform.map_points(&mut pts);
        let mut rect = Rect::from_xywh(pts[0].x, pts[0].y, 0.0, 0.0);
        for p in &pts[1..] {
            rect = Rect::unite(&rect, &Rect::from_xywh(p.x, p.y, 0.0, 0.0));
        }
        rect
    }

    /// Whether the point lies inside the rectangle or on its border
    pub fn contains_point(&self, point: &Point) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }

    /// Convert to a closed path, or `None` for an empty rectangle
    pub fn to_path(&self) -> Option<Path> {
        let rect = tiny_skia_path::Rect::from_xywh(self.x, self.y, self.w, self.h)?;
        Some(PathBuilder::from_rect(rect))
    }
}
