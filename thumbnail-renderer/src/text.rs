//! Single-line text measurement and drawing.
//!
//! Text is laid out on one line whose top-left corner is the draw origin.
//! Bounds are computed from inked coverage, so centring balances the visible
//! glyphs rather than the advance box.

use crate::{
    builtin::BuiltinFont,
    canvas::{Canvas, Color},
    font::{Font, OutlineFont},
};

/// Inked area of a piece of text. `right` and `bottom` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextBounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl TextBounds {
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    pub fn translate(self, dx: i32, dy: i32) -> Self {
        Self {
            left: self.left + dx,
            top: self.top + dy,
            right: self.right + dx,
            bottom: self.bottom + dy,
        }
    }

    fn include(self, other: TextBounds) -> Self {
        if self.is_empty() {
            return other;
        }
        Self {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }
}

/// A rasterized glyph positioned relative to the line origin.
struct PlacedGlyph {
    left: i32,
    top: i32,
    width: usize,
    height: usize,
    coverage: Vec<u8>,
}

impl PlacedGlyph {
    fn ink_bounds(&self) -> TextBounds {
        let mut bounds = TextBounds::default();
        for row in 0..self.height {
            for col in 0..self.width {
                if self.coverage[row * self.width + col] == 0 {
                    continue;
                }
                let x = self.left + col as i32;
                let y = self.top + row as i32;
                bounds = bounds.include(TextBounds {
                    left: x,
                    top: y,
                    right: x + 1,
                    bottom: y + 1,
                });
            }
        }
        bounds
    }
}

fn layout(font: &Font, text: &str) -> Vec<PlacedGlyph> {
    match font {
        Font::Outline(font) => layout_outline(font, text),
        Font::Builtin(font) => layout_builtin(*font, text),
    }
}

fn layout_outline(font: &OutlineFont, text: &str) -> Vec<PlacedGlyph> {
    let size = font.size();
    let inner = font.fontdue();
    let ascent = inner
        .horizontal_line_metrics(size)
        .map(|metrics| metrics.ascent)
        .unwrap_or(size);
    let baseline = ascent.round() as i32;

    let mut glyphs = Vec::with_capacity(text.len());
    let mut pen = 0.0f32;
    let mut previous = None;
    for ch in text.chars() {
        if let Some(previous) = previous {
            pen += inner.horizontal_kern(previous, ch, size).unwrap_or(0.0);
        }
        let (metrics, coverage) = inner.rasterize(ch, size);
        glyphs.push(PlacedGlyph {
            left: pen.round() as i32 + metrics.xmin,
            top: baseline - metrics.ymin - metrics.height as i32,
            width: metrics.width,
            height: metrics.height,
            coverage,
        });
        pen += metrics.advance_width;
        previous = Some(ch);
    }
    glyphs
}

fn layout_builtin(font: BuiltinFont, text: &str) -> Vec<PlacedGlyph> {
    let advance = font.advance() as i32;
    text.chars()
        .enumerate()
        .map(|(i, ch)| {
            let glyph = font.rasterize(ch, i as i32 * advance);
            PlacedGlyph {
                left: glyph.left,
                top: glyph.top,
                width: glyph.width as usize,
                height: glyph.height as usize,
                coverage: glyph.coverage,
            }
        })
        .collect()
}

fn ink_bounds(glyphs: &[PlacedGlyph]) -> TextBounds {
    glyphs
        .iter()
        .fold(TextBounds::default(), |bounds, glyph| {
            bounds.include(glyph.ink_bounds())
        })
}

fn paint(canvas: &mut Canvas, glyphs: &[PlacedGlyph], origin: (i32, i32), color: Color) {
    for glyph in glyphs {
        for row in 0..glyph.height {
            let y = origin.1 + glyph.top + row as i32;
            for col in 0..glyph.width {
                let coverage = glyph.coverage[row * glyph.width + col];
                let x = origin.0 + glyph.left + col as i32;
                canvas.blend_pixel(x, y, color, coverage);
            }
        }
    }
}

/// Measures the inked bounds of `text`, relative to a draw origin of (0, 0).
pub fn measure(font: &Font, text: &str) -> TextBounds {
    ink_bounds(&layout(font, text))
}

/// Draws `text` with its line box's top-left corner at `origin`.
pub fn draw_text(canvas: &mut Canvas, font: &Font, origin: (i32, i32), text: &str, color: Color) {
    paint(canvas, &layout(font, text), origin, color);
}

/// Draws `text` horizontally centred on the canvas with its line box top at
/// `top`, returning the inked bounds in canvas coordinates.
pub fn draw_centered(
    canvas: &mut Canvas,
    font: &Font,
    top: i32,
    text: &str,
    color: Color,
) -> TextBounds {
    let glyphs = layout(font, text);
    let bounds = ink_bounds(&glyphs);
    if bounds.is_empty() {
        return bounds;
    }

    let x = (canvas.width() as i32 - bounds.width()) / 2 - bounds.left;
    paint(canvas, &glyphs, (x, top), color);
    bounds.translate(x, top)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{FontRequest, FontResolver};

    const BG: Color = Color::rgb(15, 23, 42);
    const WHITE: Color = Color::rgb(248, 250, 252);

    fn builtin(size: f32) -> Font {
        FontResolver::builtin_only().resolve(FontRequest::regular(size))
    }

    #[test]
    fn measures_ink_not_advance() {
        let bounds = measure(&builtin(9.0), "l");
        assert_eq!(
            bounds,
            TextBounds {
                left: 1,
                top: 1,
                right: 4,
                bottom: 8,
            }
        );
    }

    #[test]
    fn empty_and_blank_text_measure_empty() {
        let font = builtin(9.0);
        assert!(measure(&font, "").is_empty());
        assert!(measure(&font, "   ").is_empty());

        let mut canvas = Canvas::new(40, 20, BG);
        let bounds = draw_centered(&mut canvas, &font, 2, "  ", WHITE);
        assert!(bounds.is_empty());
        assert!(canvas.image().pixels().all(|p| Color::from(*p) == BG));
    }

    #[test]
    fn draw_text_matches_measured_bounds() {
        let font = builtin(18.0);
        let mut canvas = Canvas::new(120, 40, BG);
        draw_text(&mut canvas, &font, (10, 5), "Hi", WHITE);

        let expected = measure(&font, "Hi").translate(10, 5);
        for (x, y, p) in canvas.image().enumerate_pixels() {
            let (x, y) = (x as i32, y as i32);
            let inside = x >= expected.left
                && x < expected.right
                && y >= expected.top
                && y < expected.bottom;
            if Color::from(*p) != BG {
                assert!(inside, "ink at ({x}, {y}) outside {expected:?}");
            }
        }
        assert_eq!(canvas.pixel(expected.left, expected.top), Some(WHITE));
    }

    #[test]
    fn centred_text_has_balanced_margins() {
        let font = builtin(28.0);
        for text in ["Decisible", "GO  /  NO-GO", "x", "WW"] {
            let mut canvas = Canvas::new(240, 60, BG);
            let bounds = draw_centered(&mut canvas, &font, 10, text, WHITE);
            let left_margin = bounds.left;
            let right_margin = canvas.width() as i32 - bounds.right;
            assert!(
                (left_margin - right_margin).abs() <= 1,
                "{text}: {left_margin} vs {right_margin}"
            );
        }
    }
}
