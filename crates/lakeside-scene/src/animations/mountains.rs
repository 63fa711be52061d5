//! Static mountain silhouette (stateless).

use lakeside_core::{Paint, Point, Size};

use crate::surface::Surface;

/// Slate blue used for the mountains.
pub const MOUNTAIN_PAINT: Paint = Paint::rgb(0x2b, 0x3e, 0x50);

/// Two peaks over the upper half, closed along the bottom edge.
pub fn silhouette(bounds: Size) -> [Point; 7] {
    let Size { width, height } = bounds;
    [
        Point::new(0.0, height * 0.5),
        Point::new(width * 0.25, height * 0.25),
        Point::new(width * 0.5, height * 0.5),
        Point::new(width * 0.75, height * 0.2),
        Point::new(width, height * 0.5),
        Point::new(width, height),
        Point::new(0.0, height),
    ]
}

pub fn draw<S: Surface + ?Sized>(surface: &mut S) {
    let outline = silhouette(surface.size());
    surface.fill_polygon(&outline, MOUNTAIN_PAINT);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silhouette_scales_with_bounds() {
        let points = silhouette(Size::new(400.0, 200.0));
        assert_eq!(points[1], Point::new(100.0, 50.0));
        assert_eq!(points[3], Point::new(300.0, 40.0));
        assert_eq!(points[5], Point::new(400.0, 200.0));
        assert_eq!(points[6], Point::new(0.0, 200.0));
    }
}
