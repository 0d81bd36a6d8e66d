//! Stroke primitives: rings, thick line segments and polylines.

use std::ops::RangeInclusive;

use imageproc::{
    drawing::{draw_filled_rect_mut, draw_line_segment_mut, draw_polygon_mut},
    point::Point,
    rect::Rect,
};

use crate::canvas::{Canvas, Color};

/// Draws a circle outline of the given stroke width, growing inward from
/// `radius`.
///
/// A pixel is painted when its distance to `center` lies in
/// `(radius - width, radius]`. A width of at least `radius` fills the disc.
pub fn draw_ring(canvas: &mut Canvas, center: (i32, i32), radius: i32, width: i32, color: Color) {
    if radius <= 0 || width <= 0 {
        return;
    }

    let (cx, cy) = center;
    let outer = i64::from(radius).pow(2);
    let inner = if width >= radius {
        -1
    } else {
        i64::from(radius - width).pow(2)
    };

    for y in (cy - radius)..=(cy + radius) {
        for x in (cx - radius)..=(cx + radius) {
            let d = i64::from(x - cx).pow(2) + i64::from(y - cy).pow(2);
            if d <= outer && d > inner {
                canvas.put_pixel(x, y, color);
            }
        }
    }
}

/// Draws a straight segment.
///
/// Width 1 is a plain Bresenham line; wider strokes are filled as a
/// rectangle centred on the segment with butt ends.
pub fn draw_line(canvas: &mut Canvas, from: (i32, i32), to: (i32, i32), width: u32, color: Color) {
    let start = (from.0 as f32, from.1 as f32);
    let end = (to.0 as f32, to.1 as f32);

    if width <= 1 {
        draw_line_segment_mut(canvas.image_mut(), start, end, color.into());
        return;
    }

    let dx = end.0 - start.0;
    let dy = end.1 - start.1;
    let len = dx.hypot(dy);
    if len == 0.0 {
        let offset = (width / 2) as i32;
        let rect = Rect::at(from.0 - offset, from.1 - offset).of_size(width, width);
        draw_filled_rect_mut(canvas.image_mut(), rect, color.into());
        return;
    }

    let half = width as f32 / 2.0;
    let nx = -dy / len * half;
    let ny = dx / len * half;
    let corners = [
        (start.0 + nx, start.1 + ny),
        (end.0 + nx, end.1 + ny),
        (end.0 - nx, end.1 - ny),
        (start.0 - nx, start.1 - ny),
    ];

    let mut poly: Vec<Point<i32>> = Vec::with_capacity(corners.len());
    for (x, y) in corners {
        let point = Point::new(x.round() as i32, y.round() as i32);
        if poly.last() != Some(&point) {
            poly.push(point);
        }
    }
    while poly.len() > 1 && poly.first() == poly.last() {
        poly.pop();
    }

    // Rounding can collapse a very short quad; fall back to a hairline.
    if poly.len() < 3 {
        draw_line_segment_mut(canvas.image_mut(), start, end, color.into());
        return;
    }
    draw_polygon_mut(canvas.image_mut(), &poly, color.into());
}

/// Draws consecutive segments through `points`.
pub fn draw_polyline(canvas: &mut Canvas, points: &[(i32, i32)], width: u32, color: Color) {
    for pair in points.windows(2) {
        draw_line(canvas, pair[0], pair[1], width, color);
    }
}

/// Thickens a polyline by redrawing it at every offset in `offsets`, first
/// shifted along X and then along Y.
pub fn draw_offset_polyline(
    canvas: &mut Canvas,
    points: &[(i32, i32)],
    offsets: RangeInclusive<i32>,
    width: u32,
    color: Color,
) {
    let mut shifted = Vec::with_capacity(points.len());

    for offset in offsets.clone() {
        shifted.clear();
        shifted.extend(points.iter().map(|&(x, y)| (x + offset, y)));
        draw_polyline(canvas, &shifted, width, color);
    }
    for offset in offsets {
        shifted.clear();
        shifted.extend(points.iter().map(|&(x, y)| (x, y + offset)));
        draw_polyline(canvas, &shifted, width, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BG: Color = Color::rgb(0, 0, 0);
    const INK: Color = Color::rgb(16, 185, 129);

    fn inked(canvas: &Canvas) -> usize {
        canvas
            .image()
            .pixels()
            .filter(|p| Color::from(**p) != BG)
            .count()
    }

    #[test]
    fn ring_is_hollow_and_width_pixels_thick() {
        let mut canvas = Canvas::new(240, 240, BG);
        draw_ring(&mut canvas, (120, 118), 48, 5, INK);

        assert_eq!(canvas.pixel(120, 118), Some(BG));
        assert_eq!(canvas.pixel(120, 118 - 48), Some(INK));
        assert_eq!(canvas.pixel(120, 118 - 44), Some(INK));
        assert_eq!(canvas.pixel(120, 118 - 43), Some(BG));
        assert_eq!(canvas.pixel(120, 118 - 49), Some(BG));
        assert_eq!(canvas.pixel(120 + 48, 118), Some(INK));
        assert_eq!(canvas.pixel(120 - 48, 118), Some(INK));
    }

    #[test]
    fn ring_wider_than_radius_fills_disc() {
        let mut canvas = Canvas::new(20, 20, BG);
        draw_ring(&mut canvas, (10, 10), 4, 10, INK);
        assert_eq!(canvas.pixel(10, 10), Some(INK));
    }

    #[test]
    fn hairline_is_one_pixel_high() {
        let mut canvas = Canvas::new(240, 240, BG);
        draw_line(&mut canvas, (100, 198), (140, 198), 1, INK);

        assert!((39..=41).contains(&inked(&canvas)));
        assert_eq!(canvas.pixel(101, 198), Some(INK));
        assert_eq!(canvas.pixel(139, 198), Some(INK));
        assert_eq!(canvas.pixel(120, 197), Some(BG));
        assert_eq!(canvas.pixel(120, 199), Some(BG));
    }

    #[test]
    fn thick_line_covers_its_width() {
        let mut canvas = Canvas::new(50, 50, BG);
        draw_line(&mut canvas, (10, 25), (40, 25), 6, INK);

        for y in 23..=27 {
            assert_eq!(canvas.pixel(25, y), Some(INK), "row {y}");
        }
        assert_eq!(canvas.pixel(25, 20), Some(BG));
        assert_eq!(canvas.pixel(25, 30), Some(BG));
    }

    #[test]
    fn zero_length_thick_line_paints_a_square() {
        let mut canvas = Canvas::new(10, 10, BG);
        draw_line(&mut canvas, (5, 5), (5, 5), 2, INK);
        assert_eq!(inked(&canvas), 4);
    }

    #[test]
    fn polyline_needs_two_points() {
        let mut canvas = Canvas::new(10, 10, BG);
        draw_polyline(&mut canvas, &[(5, 5)], 2, INK);
        draw_polyline(&mut canvas, &[], 2, INK);
        assert_eq!(inked(&canvas), 0);
    }

    #[test]
    fn offset_polyline_thickens_both_axes() {
        let points = [(98, 120), (114, 136), (142, 102)];

        let mut thin = Canvas::new(240, 240, BG);
        draw_polyline(&mut thin, &points, 2, INK);

        let mut thick = Canvas::new(240, 240, BG);
        draw_offset_polyline(&mut thick, &points, -3..=3, 2, INK);

        assert!(inked(&thick) > inked(&thin) * 2);
        // Every pixel of the unshifted stroke is still covered.
        for (x, y, p) in thin.image().enumerate_pixels() {
            if Color::from(*p) != BG {
                assert_eq!(thick.pixel(x as i32, y as i32), Some(INK));
            }
        }
        assert_eq!(thick.pixel(114 + 3, 136), Some(INK));
        assert_eq!(thick.pixel(114, 136 + 3), Some(INK));
    }
}
