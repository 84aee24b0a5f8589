//! The Shaping Provider contract (§6): the external collaborator this core
//! defers to for everything that needs an actual font file — shaping text
//! into glyphs, reporting font metrics, and tracing glyph outlines for the
//! decoration engine's evasion path. The core never opens a font file
//! itself.

use crate::text::{Dir, FontId, Lang, ShapedText};
use crate::units::{Abs, Em};
use crate::Range;

/// Underline/strikethrough/overline placement and thickness, in font-design
/// units of the font's own `unitsPerEm`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineMetrics {
    /// Offset from the baseline; positive is up.
    pub position: Em,
    pub thickness: Em,
}

/// The subset of a font's metrics the decoration engine and math layout
/// need, vended by the Shaping Provider rather than read from a font file
/// directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMetrics {
    pub units_per_em: f64,
    pub underline: LineMetrics,
    pub strikethrough: LineMetrics,
    pub overline: LineMetrics,
}

/// One segment of a glyph outline, in font-design units (not yet scaled by
/// `font_size / units_per_em`). Each segment carries its own start point, so
/// no separate `MoveTo` variant is needed — outlines are assumed contiguous
/// per contour, as `outline_glyph` returns them. Uses `kurbo`'s plain
/// geometric types for representation only; the decoration engine's
/// intersection routine (`crate::deco::bezier`) does not call their
/// `intersect_line` convenience methods.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    Line(kurbo::Line),
    Quad(kurbo::QuadBez),
    Cubic(kurbo::CubicBez),
}

impl PathSegment {
    /// The segment's start point.
    pub fn from(&self) -> kurbo::Point {
        match *self {
            Self::Line(l) => l.p0,
            Self::Quad(q) => q.p0,
            Self::Cubic(c) => c.p0,
        }
    }

    /// The segment's end point.
    pub fn to(&self) -> kurbo::Point {
        match *self {
            Self::Line(l) => l.p1,
            Self::Quad(q) => q.p2,
            Self::Cubic(c) => c.p3,
        }
    }
}

/// Everything this core needs from an actual font: shaping, metrics, and
/// glyph outlines. Implemented by the embedder; this crate ships no
/// implementation of its own (there's no bundled font engine, unlike the
/// teacher, which reaches into `rustybuzz`/`ttf_parser` directly).
pub trait ShapingProvider {
    /// Shapes `text[range]` into positioned glyphs at `font_size`. `features`
    /// is a list of OpenType feature tag/value pairs (e.g. `("smcp", 1)`) the
    /// caller wants applied; an empty slice means the font/shaper defaults.
    fn shape(
        &self,
        text: &str,
        range: Range,
        dir: Dir,
        lang: &Lang,
        font_size: Abs,
        features: &[(String, u32)],
    ) -> ShapedText;

    /// The metrics of `font`, in its own design units.
    fn metrics(&self, font: FontId) -> FontMetrics;

    /// The outline of `glyph_id` in `font`, as a sequence of path segments in
    /// font-design units, together with its bounding box and whether the
    /// provider was actually able to produce one (`false` for e.g. fonts
    /// without accessible outline tables, such as pure bitmap fonts).
    fn outline_glyph(&self, font: FontId, glyph_id: u16) -> (Vec<PathSegment>, crate::geom::Rect, bool);

    /// Converts a distance in `font`'s design units to `Em`.
    fn to_em(&self, font: FontId, units: f64) -> Em;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_segment_from_and_to_match_variant_endpoints() {
        let from = kurbo::Point::new(1.0, 2.0);
        let to = kurbo::Point::new(3.0, 4.0);
        let seg = PathSegment::Line(kurbo::Line::new(from, to));
        assert_eq!(seg.from(), from);
        assert_eq!(seg.to(), to);
    }
}
