//! Logical-pixel geometry.

/// A point in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Width and height of a drawing surface, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle, origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Half-open containment: the left and top edges are inside, the right and
    /// bottom edges are not.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }
}

/// How many logical pixels one terminal cell covers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellMetrics {
    pub width_px: f64,
    pub height_px: f64,
}

impl Default for CellMetrics {
    fn default() -> Self {
        Self {
            width_px: 8.0,
            height_px: 16.0,
        }
    }
}

impl CellMetrics {
    pub fn new(width_px: f64, height_px: f64) -> Self {
        Self {
            width_px,
            height_px,
        }
    }

    /// Surface size for a terminal of `columns` x `rows` cells.
    pub fn viewport(&self, columns: u16, rows: u16) -> Size {
        Size::new(
            columns as f64 * self.width_px,
            rows as f64 * self.height_px,
        )
    }

    /// Centre of a terminal cell, in logical pixels.
    pub fn cell_center(&self, column: u16, row: u16) -> Point {
        Point::new(
            (column as f64 + 0.5) * self.width_px,
            (row as f64 + 0.5) * self.height_px,
        )
    }

    /// Logical-pixel rectangle covered by a terminal area.
    pub fn rect(&self, area: ratatui::layout::Rect) -> Rect {
        Rect::new(
            area.x as f64 * self.width_px,
            area.y as f64 * self.height_px,
            area.width as f64 * self.width_px,
            area.height as f64 * self.height_px,
        )
    }
}
