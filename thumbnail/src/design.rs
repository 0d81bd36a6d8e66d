//! The Decisible thumbnail, as compiled-in constants.

use std::ops::RangeInclusive;

use thumbnail_renderer::{Color, FontRequest};

pub const WIDTH: u32 = 240;
pub const HEIGHT: u32 = 240;

/// `#0F172A`
pub const BACKGROUND: Color = Color::rgb(15, 23, 42);
/// `#10B981`
pub const ACCENT: Color = Color::rgb(16, 185, 129);
/// `#F8FAFC`
pub const WHITE: Color = Color::rgb(248, 250, 252);
/// slate-400
pub const GRAY: Color = Color::rgb(148, 163, 184);

/// Landing page public asset folder, relative to the working directory.
pub const OUTPUT_PATH: &str = "public/thumbnail.png";

/// Circle outline around the checkmark.
#[derive(Debug, Clone, PartialEq)]
pub struct Badge {
    pub center: (i32, i32),
    pub radius: i32,
    pub stroke: i32,
}

/// Checkmark polyline, thickened by redrawing it at each offset.
#[derive(Debug, Clone, PartialEq)]
pub struct Checkmark {
    pub points: [(i32, i32); 3],
    pub offsets: RangeInclusive<i32>,
    pub stroke: u32,
}

/// A single line of horizontally centred text.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: &'static str,
    pub size: f32,
    pub bold: bool,
    /// Top of the line box.
    pub top: i32,
    pub color: Color,
}

impl Label {
    pub fn font_request(&self) -> FontRequest {
        FontRequest {
            size: self.size,
            bold: self.bold,
        }
    }
}

/// Short horizontal rule centred on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct Divider {
    pub y: i32,
    pub half_length: i32,
    pub width: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThumbnailDesign {
    pub width: u32,
    pub height: u32,
    pub background: Color,
    pub accent: Color,
    pub badge: Badge,
    pub check: Checkmark,
    pub title: Label,
    pub subtitle: Label,
    pub divider: Divider,
}

impl ThumbnailDesign {
    pub fn with_background(self, background: Color) -> Self {
        Self { background, ..self }
    }
}

impl Default for ThumbnailDesign {
    fn default() -> Self {
        let (w, h) = (WIDTH as i32, HEIGHT as i32);
        let (cx, cy) = (w / 2, 118);

        Self {
            width: WIDTH,
            height: HEIGHT,
            background: BACKGROUND,
            accent: ACCENT,
            badge: Badge {
                center: (cx, cy),
                radius: 48,
                stroke: 5,
            },
            check: Checkmark {
                points: [(cx - 22, cy + 2), (cx - 6, cy + 18), (cx + 22, cy - 16)],
                offsets: -3..=3,
                stroke: 2,
            },
            title: Label {
                text: "Decisible",
                size: 28.0,
                bold: true,
                top: 22,
                color: WHITE,
            },
            subtitle: Label {
                text: "GO  /  NO-GO",
                size: 13.0,
                bold: false,
                top: h - 36,
                color: GRAY,
            },
            divider: Divider {
                y: h - 42,
                half_length: 20,
                width: 1,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_design_matches_layout() {
        let design = ThumbnailDesign::default();
        assert_eq!(design.badge.center, (120, 118));
        assert_eq!(design.check.points, [(98, 120), (114, 136), (142, 102)]);
        assert_eq!(design.subtitle.top, 204);
        assert_eq!(design.divider.y, 198);
        assert_eq!(design.title.font_request(), FontRequest::bold(28.0));
        assert_eq!(design.subtitle.font_request(), FontRequest::regular(13.0));
    }

    #[test]
    fn checkmark_dips_below_its_arms() {
        let [left, bottom, right] = ThumbnailDesign::default().check.points;
        assert!(bottom.1 > left.1 && bottom.1 > right.1);
        assert!(right.0 - bottom.0 > bottom.0 - left.0);
    }

    #[test]
    fn with_background_only_changes_background() {
        let base = ThumbnailDesign::default();
        let recolored = base.clone().with_background(Color::rgb(1, 2, 3));
        assert_eq!(recolored.background, Color::rgb(1, 2, 3));
        assert_eq!(recolored.with_background(BACKGROUND), base);
    }
}
