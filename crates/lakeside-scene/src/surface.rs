//! Drawing surface port and the recording surface.

use lakeside_core::{Paint, Point, Rect, Size};

/// A filled circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    pub const fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }
}

/// Something the scene can be drawn onto.
///
/// Coordinates are logical pixels with the origin in the top-left corner.
pub trait Surface {
    /// Current surface size.
    fn size(&self) -> Size;

    /// Set the surface size. Previously drawn content is discarded.
    fn resize(&mut self, size: Size);

    /// Erase everything drawn so far.
    fn clear(&mut self);

    fn fill_polygon(&mut self, points: &[Point], paint: Paint);

    fn fill_ellipse(&mut self, center: Point, radius_x: f64, radius_y: f64, paint: Paint);

    /// Fill the union of several circles as one shape, so overlaps are
    /// painted once.
    fn fill_circles(&mut self, circles: &[Circle], paint: Paint);

    fn fill_circle(&mut self, circle: Circle, paint: Paint) {
        self.fill_circles(&[circle], paint);
    }

    /// Stroke an open polyline.
    fn stroke_path(&mut self, points: &[Point], width: f64, paint: Paint);
}

/// A recorded drawing command.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Polygon {
        points: Vec<Point>,
        paint: Paint,
    },
    Ellipse {
        center: Point,
        radius_x: f64,
        radius_y: f64,
        paint: Paint,
    },
    Circles {
        circles: Vec<Circle>,
        paint: Paint,
    },
    Path {
        points: Vec<Point>,
        width: f64,
        paint: Paint,
    },
}

impl Shape {
    pub fn paint(&self) -> Paint {
        match self {
            Shape::Polygon { paint, .. }
            | Shape::Ellipse { paint, .. }
            | Shape::Circles { paint, .. }
            | Shape::Path { paint, .. } => *paint,
        }
    }

    /// Axis-aligned bounding box, grown by `slack` on every side.
    pub fn bounds(&self, slack: f64) -> Rect {
        let (min_x, min_y, max_x, max_y) = match self {
            Shape::Polygon { points, .. } | Shape::Path { points, .. } => points.iter().fold(
                (f64::MAX, f64::MAX, f64::MIN, f64::MIN),
                |(x0, y0, x1, y1), p| (x0.min(p.x), y0.min(p.y), x1.max(p.x), y1.max(p.y)),
            ),
            Shape::Ellipse {
                center,
                radius_x,
                radius_y,
                ..
            } => (
                center.x - radius_x,
                center.y - radius_y,
                center.x + radius_x,
                center.y + radius_y,
            ),
            Shape::Circles { circles, .. } => circles.iter().fold(
                (f64::MAX, f64::MAX, f64::MIN, f64::MIN),
                |(x0, y0, x1, y1), c| {
                    (
                        x0.min(c.center.x - c.radius),
                        y0.min(c.center.y - c.radius),
                        x1.max(c.center.x + c.radius),
                        y1.max(c.center.y + c.radius),
                    )
                },
            ),
        };
        if min_x > max_x || min_y > max_y {
            return Rect::default();
        }
        Rect::new(
            min_x - slack,
            min_y - slack,
            max_x - min_x + 2.0 * slack,
            max_y - min_y + 2.0 * slack,
        )
    }

    /// Whether the shape paints `point`. Strokes are widened to at least
    /// `min_stroke` so hairlines survive coarse sampling.
    pub fn covers(&self, point: Point, min_stroke: f64) -> bool {
        match self {
            Shape::Polygon { points, .. } => polygon_contains(points, point),
            Shape::Ellipse {
                center,
                radius_x,
                radius_y,
                ..
            } => {
                if *radius_x <= 0.0 || *radius_y <= 0.0 {
                    return false;
                }
                let dx = (point.x - center.x) / radius_x;
                let dy = (point.y - center.y) / radius_y;
                dx * dx + dy * dy <= 1.0
            }
            Shape::Circles { circles, .. } => circles.iter().any(|c| {
                let dx = point.x - c.center.x;
                let dy = point.y - c.center.y;
                dx * dx + dy * dy <= c.radius * c.radius
            }),
            Shape::Path { points, width, .. } => {
                let reach = (width / 2.0).max(min_stroke / 2.0);
                points
                    .windows(2)
                    .any(|seg| segment_distance(point, seg[0], seg[1]) <= reach)
            }
        }
    }
}

/// Even-odd point-in-polygon test.
fn polygon_contains(points: &[Point], p: Point) -> bool {
    let mut inside = false;
    let mut j = points.len().wrapping_sub(1);
    for (i, a) in points.iter().enumerate() {
        let b = points[j];
        if (a.y > p.y) != (b.y > p.y) && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x {
            inside = !inside;
        }
        j = i;
    }
    inside
}

fn segment_distance(p: Point, a: Point, b: Point) -> f64 {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let len_sq = dx * dx + dy * dy;
    let t = if len_sq == 0.0 {
        0.0
    } else {
        (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0)
    };
    let (cx, cy) = (a.x + t * dx, a.y + t * dy);
    ((p.x - cx).powi(2) + (p.y - cy).powi(2)).sqrt()
}

/// A [`Surface`] that records shapes in draw order.
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    size: Size,
    shapes: Vec<Shape>,
}

impl DisplayList {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            shapes: Vec::new(),
        }
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }
}

impl Surface for DisplayList {
    fn size(&self) -> Size {
        self.size
    }

    fn resize(&mut self, size: Size) {
        self.size = size;
        self.shapes.clear();
    }

    fn clear(&mut self) {
        self.shapes.clear();
    }

    fn fill_polygon(&mut self, points: &[Point], paint: Paint) {
        self.shapes.push(Shape::Polygon {
            points: points.to_vec(),
            paint,
        });
    }

    fn fill_ellipse(&mut self, center: Point, radius_x: f64, radius_y: f64, paint: Paint) {
        self.shapes.push(Shape::Ellipse {
            center,
            radius_x,
            radius_y,
            paint,
        });
    }

    fn fill_circles(&mut self, circles: &[Circle], paint: Paint) {
        self.shapes.push(Shape::Circles {
            circles: circles.to_vec(),
            paint,
        });
    }

    fn stroke_path(&mut self, points: &[Point], width: f64, paint: Paint) {
        self.shapes.push(Shape::Path {
            points: points.to_vec(),
            width,
            paint,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polygon_covers() {
        let triangle = Shape::Polygon {
            points: vec![
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(0.0, 10.0),
            ],
            paint: Paint::WHITE,
        };
        assert!(triangle.covers(Point::new(2.0, 2.0), 0.0));
        assert!(!triangle.covers(Point::new(8.0, 8.0), 0.0));
    }

    #[test]
    fn test_ellipse_covers() {
        let ellipse = Shape::Ellipse {
            center: Point::new(50.0, 50.0),
            radius_x: 20.0,
            radius_y: 10.0,
            paint: Paint::WHITE,
        };
        assert!(ellipse.covers(Point::new(69.0, 50.0), 0.0));
        assert!(!ellipse.covers(Point::new(50.0, 61.0), 0.0));
    }

    #[test]
    fn test_path_uses_minimum_stroke() {
        let path = Shape::Path {
            points: vec![Point::new(0.0, 0.0), Point::new(100.0, 0.0)],
            width: 1.5,
            paint: Paint::WHITE,
        };
        assert!(!path.covers(Point::new(50.0, 3.0), 0.0));
        assert!(path.covers(Point::new(50.0, 3.0), 8.0));
    }

    #[test]
    fn test_circles_bounds() {
        let shape = Shape::Circles {
            circles: vec![
                Circle::new(Point::new(0.0, 0.0), 5.0),
                Circle::new(Point::new(20.0, 10.0), 5.0),
            ],
            paint: Paint::WHITE,
        };
        assert_eq!(shape.bounds(0.0), Rect::new(-5.0, -5.0, 30.0, 20.0));
        assert_eq!(shape.bounds(1.0), Rect::new(-6.0, -6.0, 32.0, 22.0));
    }

    #[test]
    fn test_display_list_records_in_order() {
        let mut list = DisplayList::new(Size::new(100.0, 100.0));
        list.fill_circle(Circle::new(Point::new(1.0, 1.0), 1.0), Paint::WHITE);
        list.stroke_path(&[Point::new(0.0, 0.0), Point::new(1.0, 1.0)], 1.0, Paint::WHITE);
        assert!(matches!(list.shapes()[0], Shape::Circles { .. }));
        assert!(matches!(list.shapes()[1], Shape::Path { .. }));

        list.resize(Size::new(50.0, 40.0));
        assert_eq!(list.size(), Size::new(50.0, 40.0));
        assert!(list.shapes().is_empty());
    }
}
