//! `ShapedText`: an ordered run of glyphs plus its script/direction metadata.

use crate::text::{Dir, Lang, Region};
use crate::units::{Abs, Em};
use crate::Range;

use super::glyph::ShapedGlyph;

/// An ordered container of [`ShapedGlyph`], as produced by the Shaping
/// Provider for one contiguous run of text under uniform direction/style.
#[derive(Debug, Clone)]
pub struct ShapedText {
    /// The byte offset of `text` within the full paragraph.
    pub base: usize,
    /// The text that was shaped.
    pub text: String,
    /// The text direction.
    pub dir: Dir,
    /// The text language.
    pub lang: Lang,
    /// The text region, if known.
    pub region: Option<Region>,
    /// The font size the text was shaped at.
    pub size: Abs,
    /// The shaped glyphs.
    pub glyphs: Vec<ShapedGlyph>,
}

impl ShapedText {
    /// The range of this run within the full paragraph.
    pub fn range(&self) -> Range {
        self.base..self.base + self.text.len()
    }

    /// The width of the text's bounding box: Σ glyph advance.
    pub fn width(&self) -> Abs {
        self.glyphs.iter().map(|g| g.x_advance).sum::<Em>().at(self.size)
    }

    /// How many glyphs can absorb additional space on underfull lines.
    pub fn justifiables(&self) -> usize {
        self.glyphs.iter().filter(|g| g.is_justifiable()).count()
    }

    /// Whether the last glyph is CJK and should not be justified at a line's
    /// trailing edge (avoids visible trailing expansion).
    pub fn cjk_justifiable_at_last(&self, style: super::CjkPunctStyle) -> bool {
        self.glyphs
            .last()
            .map(|g| g.is_cj_script() || g.is_cjk_punctuation(style))
            .unwrap_or(false)
    }

    /// Total stretchability of the run.
    pub fn stretchability(&self) -> Abs {
        self.glyphs
            .iter()
            .map(|g| g.stretchability().0 + g.stretchability().1)
            .sum::<Em>()
            .at(self.size)
    }

    /// Total shrinkability of the run.
    pub fn shrinkability(&self) -> Abs {
        self.glyphs
            .iter()
            .map(|g| g.shrinkability().0 + g.shrinkability().1)
            .sum::<Em>()
            .at(self.size)
    }

    /// Remove trailing glyphs matching `predicate` (used to drop trailing
    /// whitespace from the *layout* width while keeping it for shaping).
    pub fn trim(&mut self, predicate: impl Fn(&ShapedGlyph) -> bool) {
        while self.glyphs.last().is_some_and(|g| predicate(g)) {
            self.glyphs.pop();
        }
    }

    /// Derive a zero-glyph shadow with the same direction/language/region,
    /// used for boundary markers at line starts/ends.
    pub fn empty(&self) -> Self {
        Self {
            base: self.base,
            text: String::new(),
            dir: self.dir,
            lang: self.lang.clone(),
            region: self.region.clone(),
            size: self.size,
            glyphs: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::glyph::Adjustability;
    use crate::text::FontId;
    use unicode_script::Script;

    fn glyph(c: char, advance: f64) -> ShapedGlyph {
        ShapedGlyph {
            font: FontId(0),
            glyph_id: 0,
            c,
            size: Abs::pt(10.0),
            x_advance: Em::new(advance),
            x_offset: Em::zero(),
            y_offset: Em::zero(),
            adjustability: Adjustability::default(),
            range: 0..c.len_utf8(),
            is_justifiable: false,
            is_cjk_justifiable: false,
            script: Script::Latin,
            bbox: None,
        }
    }

    fn sample() -> ShapedText {
        ShapedText {
            base: 0,
            text: "ab".into(),
            dir: Dir::LTR,
            lang: Lang::new("en"),
            region: None,
            size: Abs::pt(10.0),
            glyphs: vec![glyph('a', 0.5), glyph('b', 0.5)],
        }
    }

    #[test]
    fn width_sums_glyph_advances() {
        assert_eq!(sample().width(), Abs::pt(10.0));
    }

    #[test]
    fn trim_removes_trailing_matches() {
        let mut t = sample();
        t.trim(|g| g.c == 'b');
        assert_eq!(t.glyphs.len(), 1);
    }

    #[test]
    fn empty_preserves_metadata_but_clears_glyphs() {
        let t = sample();
        let e = t.empty();
        assert_eq!(e.glyphs.len(), 0);
        assert_eq!(e.dir, t.dir);
        assert_eq!(e.lang, t.lang);
    }
}
</content>
