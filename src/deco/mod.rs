//! Decoration placement (§4.8): highlight rectangles and underline/overline/
//! strikethrough lines, with optional glyph-outline evasion. Grounded on the
//! teacher's `src/inline/deco.rs`, but the evasion intersection itself is
//! reimplemented literally from the quadratic-root/cubic-subdivision
//! algorithm in [`bezier`] rather than via `kurbo`'s `intersect_line`.

pub mod bezier;

use crate::frame::{FinalFrame, FrameItem, Geometry, Shape, Stroke};
use crate::geom::Point;
use crate::provider::ShapingProvider;
use crate::text::{FontId, ShapedText};
use crate::units::{Abs, Em};

/// Where a highlight rectangle's top edge sits, relative to the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopEdge {
    Ascender,
    CapHeight,
    XHeight,
    Bounds,
}

/// Where a highlight rectangle's bottom edge sits, relative to the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BottomEdge {
    Descender,
    Baseline,
    Bounds,
}

const ASCENDER: Em = Em::new(0.8);
const CAP_HEIGHT: Em = Em::new(0.7);
const X_HEIGHT: Em = Em::new(0.5);
const DESCENDER: Em = Em::new(0.2);

const GAP_PADDING: Em = Em::new(0.08);
const MIN_WIDTH: Em = Em::new(0.162);

/// A stroke override for a line decoration. `None` fields fall back to the
/// corresponding font metric.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineStroke {
    pub thickness: Option<Abs>,
}

/// Which kind of decoration to place, and its line-specific parameters.
#[derive(Debug, Clone, Copy)]
pub enum DecoLine {
    Highlight { top_edge: TopEdge, bottom_edge: BottomEdge, radius: Abs },
    Underline { stroke: LineStroke, offset: Option<Abs>, evade: bool, background: bool },
    Overline { stroke: LineStroke, offset: Option<Abs>, evade: bool, background: bool },
    Strikethrough { stroke: LineStroke, offset: Option<Abs>, evade: bool, background: bool },
}

impl DecoLine {
    pub fn underline() -> Self {
        Self::Underline { stroke: LineStroke::default(), offset: None, evade: true, background: false }
    }

    pub fn overline() -> Self {
        Self::Overline { stroke: LineStroke::default(), offset: None, evade: true, background: false }
    }

    /// Strikethrough defaults to `evade = false`, per §4.8.
    pub fn strikethrough() -> Self {
        Self::Strikethrough { stroke: LineStroke::default(), offset: None, evade: false, background: false }
    }
}

/// A decoration request: a line kind plus how far it extends past the text's
/// own width on each side.
#[derive(Debug, Clone, Copy)]
pub struct Decoration {
    pub line: DecoLine,
    pub extent: Abs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    Underline,
    Overline,
    Strikethrough,
}

/// Places `decoration` over `text`, which occupies `width` starting at `pos`
/// (the text's baseline origin) and has been shifted vertically by `shift`
/// relative to its line. Highlights and background line decorations are
/// prepended (drawn behind the text); foreground line decorations are pushed
/// in front.
pub fn decorate(
    provider: &dyn ShapingProvider,
    frame: &mut FinalFrame,
    decoration: &Decoration,
    text: &ShapedText,
    width: Abs,
    shift: Abs,
    pos: Point,
) {
    match decoration.line {
        DecoLine::Highlight { top_edge, bottom_edge, radius } => {
            let (top, bottom) = edges(provider, text, top_edge, bottom_edge);
            let rect_pos = Point::new(pos.x - decoration.extent, pos.y - top - shift);
            let size = crate::geom::Size::new(width + decoration.extent * 2.0, top + bottom);
            frame.prepend(rect_pos, FrameItem::Shape(Shape::filled_rect(size, radius)));
        }
        DecoLine::Underline { stroke, offset, evade, background } => {
            place_line(
                provider, frame, text, width, shift, pos, LineKind::Underline, stroke, offset, evade,
                background, decoration.extent,
            );
        }
        DecoLine::Overline { stroke, offset, evade, background } => {
            place_line(
                provider, frame, text, width, shift, pos, LineKind::Overline, stroke, offset, evade,
                background, decoration.extent,
            );
        }
        DecoLine::Strikethrough { stroke, offset, evade, background } => {
            place_line(
                provider, frame, text, width, shift, pos, LineKind::Strikethrough, stroke, offset, evade,
                background, decoration.extent,
            );
        }
    }
}

fn edges(
    provider: &dyn ShapingProvider,
    text: &ShapedText,
    top_edge: TopEdge,
    bottom_edge: BottomEdge,
) -> (Abs, Abs) {
    let size = text.size;
    let top = match top_edge {
        TopEdge::Ascender => ASCENDER.at(size),
        TopEdge::CapHeight => CAP_HEIGHT.at(size),
        TopEdge::XHeight => X_HEIGHT.at(size),
        TopEdge::Bounds => bounds_top(provider, text).unwrap_or(ASCENDER.at(size)),
    };
    let bottom = match bottom_edge {
        BottomEdge::Descender => DESCENDER.at(size),
        BottomEdge::Baseline => Abs::zero(),
        BottomEdge::Bounds => bounds_bottom(provider, text).unwrap_or(DESCENDER.at(size)),
    };
    (top, bottom)
}

/// `None` if any glyph in the run is missing a bounding box — the caller
/// falls back to the font-derived default rather than rendering a
/// degenerate zero-size rectangle.
fn bounds_top(provider: &dyn ShapingProvider, text: &ShapedText) -> Option<Abs> {
    let mut max: Option<Abs> = None;
    for g in &text.glyphs {
        let bbox = g.bbox?;
        let top = provider.to_em(g.font, bbox.y_max).at(text.size);
        max = Some(max.map_or(top, |m| m.max(top)));
    }
    max
}

fn bounds_bottom(provider: &dyn ShapingProvider, text: &ShapedText) -> Option<Abs> {
    let mut max: Option<Abs> = None;
    for g in &text.glyphs {
        let bbox = g.bbox?;
        let bottom = provider.to_em(g.font, -bbox.y_min).at(text.size);
        max = Some(max.map_or(bottom, |m| m.max(bottom)));
    }
    max
}

#[allow(clippy::too_many_arguments)]
fn place_line(
    provider: &dyn ShapingProvider,
    frame: &mut FinalFrame,
    text: &ShapedText,
    width: Abs,
    shift: Abs,
    pos: Point,
    kind: LineKind,
    stroke: LineStroke,
    offset: Option<Abs>,
    evade: bool,
    background: bool,
    extent: Abs,
) {
    let first_font = text.glyphs.first().map(|g| g.font).unwrap_or(FontId(0));
    let metrics = provider.metrics(first_font);
    let line_metrics = match kind {
        LineKind::Underline => metrics.underline,
        LineKind::Overline => metrics.overline,
        LineKind::Strikethrough => metrics.strikethrough,
    };

    let line_y = offset.unwrap_or(-line_metrics.position.at(text.size)) - shift;
    let thickness = stroke.thickness.unwrap_or(line_metrics.thickness.at(text.size));
    let shape_stroke = Stroke { thickness };

    let segments = if evade {
        evaded_segments(provider, text, pos, width, line_y, extent)
    } else {
        vec![(pos.x - extent, pos.x + width + extent)]
    };

    let items: Vec<(Point, FrameItem)> = segments
        .into_iter()
        .map(|(l, r)| {
            let position = Point::new(l, pos.y + line_y);
            let to = Point::new(r - l, Abs::zero());
            (position, FrameItem::Shape(Shape { geometry: Geometry::Line(to), stroke: Some(shape_stroke), fill: false }))
        })
        .collect();

    if background {
        frame.prepend_multiple(items);
    } else {
        for (p, item) in items {
            frame.push(p, item);
        }
    }
}

/// Computes the evaded line segments (§4.8): skips glyphs whose Y-range
/// doesn't contain `line_y`, intersects their outlines, and pairs the
/// resulting x-coordinates (plus boundary sentinels) into drawable spans.
fn evaded_segments(
    provider: &dyn ShapingProvider,
    text: &ShapedText,
    pos: Point,
    width: Abs,
    line_y: Abs,
    extent: Abs,
) -> Vec<(Abs, Abs)> {
    let font_size = text.size;
    let gap_padding = GAP_PADDING.at(font_size);
    let min_width = MIN_WIDTH.at(font_size);

    let mut xs: Vec<f64> = vec![(pos.x - extent).to_pt(), (pos.x + width + extent).to_pt()];

    let mut advance = Abs::zero();
    for g in &text.glyphs {
        let glyph_x = pos.x + advance + g.x_offset.at(font_size);
        advance += g.x_advance.at(font_size);

        let Some(bbox) = g.bbox else { continue };
        let layout_top = -provider.to_em(g.font, bbox.y_max).at(font_size);
        let layout_bottom = -provider.to_em(g.font, bbox.y_min).at(font_size);
        if line_y < layout_top || line_y > layout_bottom {
            continue;
        }

        let font_metrics = provider.metrics(g.font);
        if font_metrics.units_per_em <= 0.0 {
            continue;
        }
        let line_y_font = -(line_y.to_pt() * font_metrics.units_per_em / font_size.to_pt());

        let (outline, _, ok) = provider.outline_glyph(g.font, g.glyph_id);
        if !ok {
            continue;
        }

        for seg in &outline {
            for fx in bezier::intersect_horizontal(seg, line_y_font) {
                let layout_x = glyph_x + provider.to_em(g.font, fx).at(font_size);
                xs.push(layout_x.to_pt());
            }
        }
    }

    xs.sort_by(|a, b| a.partial_cmp(b).unwrap());

    let mut out = Vec::new();
    let mut i = 0;
    while i + 1 < xs.len() {
        let l = Abs::pt(xs[i]);
        let r = Abs::pt(xs[i + 1]);
        if r - l - gap_padding * 2.0 >= min_width {
            out.push((l + gap_padding, r - gap_padding));
        }
        i += 2;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::{Rect, Size};
    use crate::provider::{FontMetrics, LineMetrics, PathSegment};
    use crate::text::{Adjustability, ShapedGlyph};
    use crate::text::{Dir, Lang};
    use unicode_script::Script;

    struct FakeProvider {
        units_per_em: f64,
    }

    impl ShapingProvider for FakeProvider {
        fn shape(&self, _: &str, _: crate::Range, _: Dir, _: &Lang, _: Abs, _: &[(String, u32)]) -> ShapedText {
            unimplemented!("not exercised by these tests")
        }

        fn metrics(&self, _: FontId) -> FontMetrics {
            FontMetrics {
                units_per_em: self.units_per_em,
                underline: LineMetrics { position: Em::new(-0.1), thickness: Em::new(0.05) },
                strikethrough: LineMetrics { position: Em::new(0.25), thickness: Em::new(0.05) },
                overline: LineMetrics { position: Em::new(0.9), thickness: Em::new(0.05) },
            }
        }

        fn outline_glyph(&self, _: FontId, glyph_id: u16) -> (Vec<PathSegment>, Rect, bool) {
            if glyph_id == 1 {
                // A descender: a closed contour tracing its left and right
                // edges (font units), crossing a baseline-offset underline
                // twice and leaving a gap between the two crossings.
                let left = PathSegment::Line(kurbo::Line::new(
                    kurbo::Point::new(480.0, -400.0),
                    kurbo::Point::new(480.0, 200.0),
                ));
                let right = PathSegment::Line(kurbo::Line::new(
                    kurbo::Point::new(520.0, 200.0),
                    kurbo::Point::new(520.0, -400.0),
                ));
                (vec![left, right], Rect { x_min: 480.0, y_min: -400.0, x_max: 520.0, y_max: 200.0 }, true)
            } else {
                (vec![], Rect::default(), false)
            }
        }

        fn to_em(&self, _: FontId, units: f64) -> Em {
            Em::from_units(units, self.units_per_em)
        }
    }

    fn glyph_with_descender(font: FontId, advance: f64) -> ShapedGlyph {
        ShapedGlyph {
            font,
            glyph_id: 1,
            c: 'g',
            size: Abs::pt(10.0),
            x_advance: Em::new(advance),
            x_offset: Em::zero(),
            y_offset: Em::zero(),
            adjustability: Adjustability::default(),
            range: 0..1,
            is_justifiable: false,
            is_cjk_justifiable: false,
            script: Script::Latin,
            bbox: Some(Rect { x_min: 480.0, y_min: -400.0, x_max: 520.0, y_max: 200.0 }),
        }
    }

    fn sample_text() -> ShapedText {
        ShapedText {
            base: 0,
            text: "g".into(),
            dir: Dir::LTR,
            lang: Lang::new("en"),
            region: None,
            size: Abs::pt(10.0),
            glyphs: vec![glyph_with_descender(FontId(0), 1.0)],
        }
    }

    #[test]
    fn non_evading_strikethrough_is_a_single_segment() {
        let provider = FakeProvider { units_per_em: 1000.0 };
        let mut frame = FinalFrame::new(Size::new(Abs::pt(10.0), Abs::pt(12.0)));
        let text = sample_text();
        let deco = Decoration { line: DecoLine::strikethrough(), extent: Abs::zero() };
        decorate(&provider, &mut frame, &deco, &text, Abs::pt(10.0), Abs::zero(), Point::zero());
        assert_eq!(frame.items.len(), 1);
    }

    #[test]
    fn evading_underline_skips_the_descender() {
        let provider = FakeProvider { units_per_em: 1000.0 };
        let mut frame = FinalFrame::new(Size::new(Abs::pt(10.0), Abs::pt(12.0)));
        let text = sample_text();
        let deco = Decoration { line: DecoLine::underline(), extent: Abs::zero() };
        decorate(&provider, &mut frame, &deco, &text, Abs::pt(10.0), Abs::zero(), Point::zero());

        assert!(!frame.items.is_empty());
        // The descender's outline crosses the underline at x=4.8pt and
        // x=5.2pt (scaled); no emitted segment should span across that gap.
        for (p, item) in &frame.items {
            if let FrameItem::Shape(Shape { geometry: Geometry::Line(to), .. }) = item {
                let seg_start = p.x.to_pt();
                let seg_end = (p.x + to.x).to_pt();
                assert!(!(seg_start <= 4.8 && seg_end >= 5.2));
            } else {
                panic!("expected a line shape");
            }
        }
    }

    #[test]
    fn highlight_falls_back_to_font_defaults_without_bboxes() {
        let provider = FakeProvider { units_per_em: 1000.0 };
        let mut frame = FinalFrame::new(Size::new(Abs::pt(10.0), Abs::pt(12.0)));
        let mut text = sample_text();
        text.glyphs[0].bbox = None;
        let deco = Decoration {
            line: DecoLine::Highlight { top_edge: TopEdge::Bounds, bottom_edge: BottomEdge::Bounds, radius: Abs::zero() },
            extent: Abs::zero(),
        };
        decorate(&provider, &mut frame, &deco, &text, Abs::pt(10.0), Abs::zero(), Point::zero());
        let (_, item) = &frame.items[0];
        if let FrameItem::Shape(Shape { geometry: Geometry::Rect(size, _), .. }) = item {
            assert!(size.y > Abs::zero());
        } else {
            panic!("expected a rect shape");
        }
    }
}
