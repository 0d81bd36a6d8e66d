use thumbnail_renderer::{
    Canvas, FontResolver, TextBounds,
    shape::{draw_line, draw_offset_polyline, draw_ring},
    text::draw_centered,
};

use crate::design::{Label, ThumbnailDesign};

/// Where a label ended up and which kind of font drew it.
#[derive(Debug, Clone)]
pub struct PlacedLabel {
    pub bounds: TextBounds,
    pub font: String,
    pub builtin: bool,
}

pub struct Composition {
    pub canvas: Canvas,
    pub title: PlacedLabel,
    pub subtitle: PlacedLabel,
}

/// Paints the thumbnail: badge, title, subtitle, then divider.
pub fn compose(design: &ThumbnailDesign, fonts: &mut FontResolver) -> Composition {
    let _span = tracing::info_span!("compose", width = design.width, height = design.height)
        .entered();

    let mut canvas = Canvas::new(design.width, design.height, design.background);
    draw_badge(&mut canvas, design);

    let title = draw_label(&mut canvas, fonts, &design.title);
    let subtitle = draw_label(&mut canvas, fonts, &design.subtitle);

    let cx = design.width as i32 / 2;
    let divider = &design.divider;
    draw_line(
        &mut canvas,
        (cx - divider.half_length, divider.y),
        (cx + divider.half_length, divider.y),
        divider.width,
        design.accent,
    );

    Composition {
        canvas,
        title,
        subtitle,
    }
}

fn draw_badge(canvas: &mut Canvas, design: &ThumbnailDesign) {
    let badge = &design.badge;
    draw_ring(canvas, badge.center, badge.radius, badge.stroke, design.accent);

    let check = &design.check;
    draw_offset_polyline(
        canvas,
        &check.points,
        check.offsets.clone(),
        check.stroke,
        design.accent,
    );
}

fn draw_label(canvas: &mut Canvas, fonts: &mut FontResolver, label: &Label) -> PlacedLabel {
    let font = fonts.resolve(label.font_request());
    let bounds = draw_centered(canvas, &font, label.top, label.text, label.color);
    tracing::debug!(
        text = label.text,
        font = %font.describe(),
        size = font.size(),
        left = bounds.left,
        right = bounds.right,
        "placed label"
    );

    PlacedLabel {
        bounds,
        font: font.describe(),
        builtin: font.is_builtin(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::{ACCENT, BACKGROUND, GRAY, WHITE};
    use thumbnail_renderer::Color;

    fn composed() -> Composition {
        compose(
            &ThumbnailDesign::default(),
            &mut FontResolver::builtin_only(),
        )
    }

    #[test]
    fn paints_each_element_in_its_color() {
        let Composition {
            canvas,
            title,
            subtitle,
        } = composed();

        assert_eq!(canvas.pixel(0, 0), Some(BACKGROUND));
        assert_eq!(canvas.pixel(120, 118 - 48), Some(ACCENT));
        assert_eq!(canvas.pixel(114, 136), Some(ACCENT));
        assert_eq!(canvas.pixel(120, 198), Some(ACCENT));
        assert_eq!(canvas.pixel(120, 197), Some(BACKGROUND));

        assert!(title.builtin && subtitle.builtin);
        let title_ink = (title.bounds.top..title.bounds.bottom)
            .flat_map(|y| (0..240).map(move |x| (x, y)))
            .filter_map(|(x, y)| canvas.pixel(x, y))
            .filter(|&c| c != BACKGROUND)
            .collect::<Vec<Color>>();
        assert!(!title_ink.is_empty());
        assert!(title_ink.iter().all(|&c| c == WHITE));

        assert_eq!(
            canvas.pixel(subtitle.bounds.left, subtitle.bounds.top + 1),
            Some(GRAY)
        );
    }

    #[test]
    fn labels_sit_where_the_design_puts_them() {
        let Composition { title, subtitle, .. } = composed();
        assert!(title.bounds.top >= 22);
        assert!(title.bounds.bottom < 118 - 48);
        assert!(subtitle.bounds.top >= 204);
        assert!(subtitle.bounds.top > 198);
    }
}
