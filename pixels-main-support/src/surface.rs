use seed_life::{CellDraw, Color, Shadow, ShapeKind, Surface};

const SHADOW_MAX_ALPHA: f32 = 0.6;

/// Rasterizes cell reports straight into an RGBA frame buffer.
pub struct FrameSurface<'a> {
    width: u32,
    height: u32,
    frame: &'a mut [u8],
}

impl<'a> FrameSurface<'a> {
    pub fn new(width: u32, height: u32, frame: &'a mut [u8]) -> Self {
        assert_eq!(frame.len(), 4 * width as usize * height as usize);
        Self { width, height, frame }
    }

    fn pixel_mut(&mut self, x: i64, y: i64) -> Option<&mut [u8]> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        let index = 4 * (y as usize * self.width as usize + x as usize);
        Some(&mut self.frame[index..index + 4])
    }

    fn put(&mut self, x: i64, y: i64, rgba: [u8; 4]) {
        if let Some(pixel) = self.pixel_mut(x, y) {
            let blended = alpha_blend_with_background(rgba, [pixel[0], pixel[1], pixel[2], pixel[3]]);
            pixel.copy_from_slice(&blended);
        }
    }

    /// Pixels whose centers fall inside `area`, clipped to the frame.
    fn pixels_in(&self, area: &Area, margin: f32) -> impl Iterator<Item = (i64, i64)> {
        let left = ((area.left - margin).floor() as i64).max(0);
        let top = ((area.top - margin).floor() as i64).max(0);
        let right = ((area.right + margin).ceil() as i64).min(self.width as i64);
        let bottom = ((area.bottom + margin).ceil() as i64).min(self.height as i64);
        (top..bottom).flat_map(move |y| (left..right).map(move |x| (x, y)))
    }

    fn draw_shadow(&mut self, shape: &Shape, shadow: Shadow) {
        let blur = shadow.blur_radius as f32;
        let pixels: Vec<_> = self.pixels_in(&shape.bounds(), blur).collect();
        for (x, y) in pixels {
            let outside = shape.distance_outside(x as f32 + 0.5, y as f32 + 0.5);
            if outside > 0.0 && outside < blur {
                let alpha = SHADOW_MAX_ALPHA * (1.0 - outside / blur);
                self.put(x, y, shadow.color.with_alpha((alpha * 0xff as f32) as u8));
            }
        }
    }

    fn draw_shape(&mut self, shape: &Shape, fill: Color, stroke: Color) {
        let pixels: Vec<_> = self.pixels_in(&shape.bounds(), 0.0).collect();
        for (x, y) in pixels {
            let depth = shape.depth_inside(x as f32 + 0.5, y as f32 + 0.5);
            if depth >= 1.0 {
                self.put(x, y, fill.rgba());
            } else if depth > 0.0 {
                self.put(x, y, stroke.rgba());
            }
        }
    }
}

impl Surface for FrameSurface<'_> {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self, color: Color) {
        let rgba = color.rgba();
        for pixel in self.frame.chunks_exact_mut(4) {
            pixel.copy_from_slice(&rgba);
        }
    }

    fn draw_cell(&mut self, cell: &CellDraw) {
        let shape = Shape::of(cell);
        if let Some(shadow) = cell.shadow {
            self.draw_shadow(&shape, shadow);
        }
        self.draw_shape(&shape, cell.fill, cell.stroke);
    }
}

#[derive(Clone, Copy)]
struct Area {
    left: f32,
    top: f32,
    right: f32,
    bottom: f32,
}

enum Shape {
    Rect(Area),
    Disc { cx: f32, cy: f32, radius: f32 },
}

impl Shape {
    fn of(cell: &CellDraw) -> Self {
        let (x, y) = (cell.x as f32, cell.y as f32);
        let (width, height) = (cell.width as f32, cell.height as f32);
        let (cx, cy) = (x + width / 2.0, y + height / 2.0);
        match cell.shape {
            ShapeKind::Square => Shape::Rect(Area {
                left: x,
                top: y,
                right: x + width,
                bottom: y + height,
            }),
            ShapeKind::Circle => Shape::Disc {
                cx,
                cy,
                radius: width.min(height) / 2.0,
            },
            ShapeKind::OverlappingCircles => Shape::Disc {
                cx,
                cy,
                radius: width.min(height),
            },
        }
    }

    fn bounds(&self) -> Area {
        match self {
            Shape::Rect(area) => *area,
            Shape::Disc { cx, cy, radius } => Area {
                left: cx - radius,
                top: cy - radius,
                right: cx + radius,
                bottom: cy + radius,
            },
        }
    }

    /// How far a point lies inside the edge; zero or less is outside.
    fn depth_inside(&self, px: f32, py: f32) -> f32 {
        match self {
            Shape::Rect(area) => (px - area.left)
                .min(area.right - px)
                .min(py - area.top)
                .min(area.bottom - py)
                + 0.5,
            Shape::Disc { cx, cy, radius } => radius - (px - cx).hypot(py - cy) + 0.5,
        }
    }

    fn distance_outside(&self, px: f32, py: f32) -> f32 {
        match self {
            Shape::Rect(area) => {
                let dx = (area.left - px).max(px - area.right).max(0.0);
                let dy = (area.top - py).max(py - area.bottom).max(0.0);
                dx.hypot(dy)
            }
            Shape::Disc { cx, cy, radius } => (px - cx).hypot(py - cy) - radius,
        }
    }
}

/// A complete copy of the frame at the moment it was taken. Encoding it is up
/// to whoever asked for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl Snapshot {
    pub fn capture(width: u32, height: u32, frame: &[u8]) -> Self {
        assert_eq!(frame.len(), 4 * width as usize * height as usize);
        Self {
            width,
            height,
            rgba: frame.to_vec(),
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let index = 4 * (y as usize * self.width as usize + x as usize);
        [
            self.rgba[index],
            self.rgba[index + 1],
            self.rgba[index + 2],
            self.rgba[index + 3],
        ]
    }
}

// From https://en.wikipedia.org/wiki/Alpha_compositing
// with below_alpha set to 1.0
pub fn alpha_blend_with_background(above: [u8; 4], below: [u8; 4]) -> [u8; 4] {
    if above[3] == 0xff {
        return above;
    }
    if above[3] == 0x00 {
        return below;
    }

    let above = color_as_fractions(above);
    let below = color_as_fractions(below);

    let above_alpha = above[3];

    let mut result: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    for (i, channel) in result.iter_mut().take(3).enumerate() {
        *channel = above[i] * above_alpha + below[i] * (1.0 - above_alpha);
    }
    color_as_bytes(result)
}

fn color_as_fractions(color: [u8; 4]) -> [f32; 4] {
    color.map(|channel| channel as f32 / 0xff as f32)
}

fn color_as_bytes(color: [f32; 4]) -> [u8; 4] {
    color.map(|channel| (channel * 0xff as f32).round() as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: u32 = 20;
    const RED: Color = Color::rgb(0xff, 0, 0);
    const BLUE: Color = Color::rgb(0, 0, 0xff);

    fn cell(x: u32, y: u32, size: u32, shape: ShapeKind) -> CellDraw {
        CellDraw {
            x,
            y,
            width: size,
            height: size,
            alive: true,
            shape,
            fill: RED,
            stroke: RED,
            shadow: None,
        }
    }

    fn draw(cells: &[CellDraw]) -> Snapshot {
        let mut frame = vec![0; 4 * (SIZE * SIZE) as usize];
        let mut surface = FrameSurface::new(SIZE, SIZE, &mut frame);
        surface.clear(Color::WHITE);
        cells.iter().for_each(|cell| surface.draw_cell(cell));
        Snapshot::capture(SIZE, SIZE, &frame)
    }

    #[test]
    fn clear_fills_frame() {
        let snapshot = draw(&[]);
        assert!(snapshot.rgba.chunks_exact(4).all(|pixel| pixel == [0xff; 4]));
    }

    #[test]
    fn square_fills_its_cell_exactly() {
        let snapshot = draw(&[cell(5, 5, 5, ShapeKind::Square)]);
        for y in 0..SIZE {
            for x in 0..SIZE {
                let inside = (5..10).contains(&x) && (5..10).contains(&y);
                let expected = if inside { RED.rgba() } else { Color::WHITE.rgba() };
                assert_eq!(snapshot.pixel(x, y), expected, "({x}, {y})");
            }
        }
    }

    #[test]
    fn circle_leaves_corners() {
        let snapshot = draw(&[cell(0, 0, 10, ShapeKind::Circle)]);
        assert_eq!(snapshot.pixel(5, 5), RED.rgba());
        assert_eq!(snapshot.pixel(0, 0), Color::WHITE.rgba());
        assert_eq!(snapshot.pixel(9, 9), Color::WHITE.rgba());
        assert_eq!(snapshot.pixel(12, 5), Color::WHITE.rgba());
    }

    #[test]
    fn overlapping_circle_spills_into_neighbors() {
        let snapshot = draw(&[cell(5, 5, 5, ShapeKind::OverlappingCircles)]);
        assert_eq!(snapshot.pixel(7, 7), RED.rgba());
        assert_eq!(snapshot.pixel(12, 7), RED.rgba());
        assert_eq!(snapshot.pixel(7, 2), RED.rgba());
        assert_eq!(snapshot.pixel(0, 0), Color::WHITE.rgba());
    }

    #[test]
    fn stroke_rings_the_circle() {
        let mut ringed = cell(0, 0, 20, ShapeKind::Circle);
        ringed.stroke = BLUE;
        let snapshot = draw(&[ringed]);
        assert_eq!(snapshot.pixel(10, 10), RED.rgba());
        assert_eq!(snapshot.pixel(10, 0), BLUE.rgba());
    }

    #[test]
    fn shadow_tints_outside_the_shape() {
        let mut shaded = cell(8, 8, 4, ShapeKind::Square);
        shaded.shadow = Some(Shadow { color: BLUE, blur_radius: 4 });
        let snapshot = draw(&[shaded]);
        assert_eq!(snapshot.pixel(9, 9), RED.rgba());

        let near = snapshot.pixel(12, 9);
        assert!(near[2] == 0xff && near[0] < 0xff, "{near:?}");
        let far = snapshot.pixel(18, 9);
        assert_eq!(far, Color::WHITE.rgba());
    }

    #[test]
    fn shapes_clip_at_frame_edges() {
        let snapshot = draw(&[
            cell(15, 15, 5, ShapeKind::OverlappingCircles),
            cell(0, 0, 5, ShapeKind::OverlappingCircles),
        ]);
        assert_eq!(snapshot.pixel(19, 19), RED.rgba());
        assert_eq!(snapshot.pixel(0, 0), RED.rgba());
    }

    #[test]
    fn blend_keeps_opaque_and_transparent() {
        assert_eq!(alpha_blend_with_background([1, 2, 3, 0xff], [9, 9, 9, 0xff]), [1, 2, 3, 0xff]);
        assert_eq!(alpha_blend_with_background([1, 2, 3, 0], [9, 9, 9, 0xff]), [9, 9, 9, 0xff]);
        assert_eq!(
            alpha_blend_with_background([0xff, 0, 0, 0x80], [0, 0, 0xff, 0xff]),
            [0x80, 0, 0x7f, 0xff]
        );
    }
}
