//! Terminal rasterisation of a recorded scene.

use lakeside_core::{Paint, Point, Rect};
use ratatui::{buffer::Buffer, layout, widgets::Widget};

use crate::surface::{DisplayList, Shape, Surface};

/// Opacity of the scene layer over the page background.
pub const OVERLAY_OPACITY: f32 = 0.35;

/// Upper half block: foreground paints the top subpixel, background the bottom.
const HALF_BLOCK: &str = "▀";

/// Paints a [`DisplayList`] as a translucent backdrop.
///
/// Each cell holds two vertically stacked subpixels. Shapes are composited in
/// draw order, then the whole layer is blended over `background` at
/// `opacity`. Cells are only coloured, so whatever renders afterwards sits on
/// top and receives all pointer input.
#[derive(Debug, Clone, Copy)]
pub struct SceneWidget<'a> {
    scene: &'a DisplayList,
    background: Paint,
    opacity: f32,
}

impl<'a> SceneWidget<'a> {
    pub fn new(scene: &'a DisplayList, background: Paint) -> Self {
        Self {
            scene,
            background,
            opacity: OVERLAY_OPACITY,
        }
    }

}

/// Premultiplied RGBA accumulator.
#[derive(Debug, Clone, Copy, Default)]
struct Layer {
    r: f32,
    g: f32,
    b: f32,
    a: f32,
}

impl Layer {
    /// Source-over compositing of `paint` onto the layer.
    fn over(&mut self, paint: Paint) {
        let a = paint.alpha.clamp(0.0, 1.0);
        let keep = 1.0 - a;
        self.r = paint.r as f32 * a + self.r * keep;
        self.g = paint.g as f32 * a + self.g * keep;
        self.b = paint.b as f32 * a + self.b * keep;
        self.a = a + self.a * keep;
    }

    fn flatten(self, background: Paint, opacity: f32) -> Paint {
        let keep = 1.0 - self.a * opacity;
        let channel = |bg: u8, c: f32| (bg as f32 * keep + c * opacity).round().clamp(0.0, 255.0) as u8;
        Paint::rgb(
            channel(background.r, self.r),
            channel(background.g, self.g),
            channel(background.b, self.b),
        )
    }
}

impl SceneWidget<'_> {
    fn sample(&self, shapes: &[(Rect, &Shape)], point: Point, min_stroke: f64) -> Paint {
        let mut layer = Layer::default();
        for (bounds, shape) in shapes {
            if bounds.contains(point) && shape.covers(point, min_stroke) {
                layer.over(shape.paint());
            }
        }
        layer.flatten(self.background, self.opacity)
    }
}

impl Widget for SceneWidget<'_> {
    fn render(self, area: layout::Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        if area.is_empty() {
            return;
        }

        let size = self.scene.size();
        let px_w = size.width / area.width as f64;
        let px_h = size.height / (area.height as f64 * 2.0);
        let min_stroke = px_w.max(px_h);

        let shapes: Vec<(Rect, &Shape)> = self
            .scene
            .shapes()
            .iter()
            .map(|shape| (shape.bounds(min_stroke), shape))
            .collect();

        for row in 0..area.height {
            for col in 0..area.width {
                let x = (col as f64 + 0.5) * px_w;
                let top_y = (row as f64 * 2.0 + 0.5) * px_h;
                let bottom_y = (row as f64 * 2.0 + 1.5) * px_h;

                let top = self.sample(&shapes, Point::new(x, top_y), min_stroke);
                let bottom = self.sample(&shapes, Point::new(x, bottom_y), min_stroke);

                buf[(area.x + col, area.y + row)]
                    .set_symbol(HALF_BLOCK)
                    .set_fg(top.to_color())
                    .set_bg(bottom.to_color());
            }
        }
    }
}
