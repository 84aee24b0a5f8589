//! A single shaped glyph and its justification adjustability.

use unicode_script::{Script, UnicodeScript};

use crate::geom::Rect;
use crate::text::FontId;
use crate::units::Em;
use crate::Range;

/// Per-side stretch/shrink capacity of a glyph, in em units.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Adjustability {
    /// The left and right stretchability.
    pub stretchability: (Em, Em),
    /// The left and right shrinkability.
    pub shrinkability: (Em, Em),
}

/// The regional punctuation convention in effect, used to decide which CJK
/// punctuation glyphs are left-, right-, or center-aligned (and therefore
/// adjustable) at a line edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CjkPunctStyle {
    /// Standard GB/T 15834-2011, used mostly in mainland China.
    Gb,
    /// Standard by Taiwan Ministry of Education, used in Taiwan and Hong Kong.
    Cns,
    /// Standard JIS X 4051, used in Japan.
    Jis,
}

/// One positioned glyph produced by shaping.
#[derive(Debug, Clone)]
pub struct ShapedGlyph {
    /// Opaque font identity, as vended by the Shaping Provider.
    pub font: FontId,
    /// The glyph's index in the font.
    pub glyph_id: u16,
    /// The originating Unicode codepoint (first char of the glyph's cluster).
    pub c: char,
    /// The font size this glyph was shaped at.
    pub size: crate::units::Abs,
    /// The advance width of the glyph, in em units of `size`.
    pub x_advance: Em,
    /// The horizontal offset of the glyph.
    pub x_offset: Em,
    /// The vertical offset of the glyph.
    pub y_offset: Em,
    /// The adjustability of the glyph.
    pub adjustability: Adjustability,
    /// The byte range of this glyph's cluster in the full paragraph.
    pub range: Range,
    /// Whether this glyph is justifiable (may absorb inter-character space).
    pub is_justifiable: bool,
    /// Whether this glyph is specifically CJK-justifiable.
    pub is_cjk_justifiable: bool,
    /// The script of the glyph.
    pub script: Script,
    /// The glyph's outline bounding box in font-design units, if the Shaping
    /// Provider supplied one (used by the decoration engine's evasion path).
    pub bbox: Option<Rect>,
}

impl ShapedGlyph {
    /// Whether the glyph is a space (U+0020, U+00A0, or U+3000).
    pub fn is_space(&self) -> bool {
        is_space(self.c)
    }

    /// Whether the glyph is justifiable.
    pub fn is_justifiable(&self) -> bool {
        self.is_justifiable
    }

    /// Whether the glyph is part of Chinese or Japanese script (CJ, not CJK).
    pub fn is_cj_script(&self) -> bool {
        is_cj_script(self.c, self.script)
    }

    pub fn is_cjk_punctuation(&self, style: CjkPunctStyle) -> bool {
        self.is_cjk_left_aligned_punctuation(style)
            || self.is_cjk_right_aligned_punctuation()
            || self.is_cjk_center_aligned_punctuation(style)
    }

    pub fn is_cjk_left_aligned_punctuation(&self, style: CjkPunctStyle) -> bool {
        is_cjk_left_aligned_punctuation(self.c, self.x_advance, self.stretchability(), style)
    }

    pub fn is_cjk_right_aligned_punctuation(&self) -> bool {
        is_cjk_right_aligned_punctuation(self.c, self.x_advance, self.stretchability())
    }

    pub fn is_cjk_center_aligned_punctuation(&self, style: CjkPunctStyle) -> bool {
        is_cjk_center_aligned_punctuation(self.c, style)
    }

    /// Whether the glyph is a western letter or number.
    pub fn is_letter_or_number(&self) -> bool {
        matches!(self.c.script(), Script::Latin | Script::Greek | Script::Cyrillic)
            || matches!(self.c, '#' | '$' | '%' | '&')
            || self.c.is_ascii_digit()
    }

    /// The default adjustability derived purely from the glyph's character
    /// class (before any document-level overrides are applied).
    pub fn base_adjustability(&self, style: CjkPunctStyle) -> Adjustability {
        let width = self.x_advance;
        if self.is_space() {
            Adjustability {
                // Knuth-Plass' classic space stretch/shrink ratio.
                stretchability: (Em::zero(), width / 2.0),
                shrinkability: (Em::zero(), width / 3.0),
            }
        } else if self.is_cjk_left_aligned_punctuation(style) {
            Adjustability {
                stretchability: (Em::zero(), Em::zero()),
                shrinkability: (Em::zero(), width / 2.0),
            }
        } else if self.is_cjk_right_aligned_punctuation() {
            Adjustability {
                stretchability: (Em::zero(), Em::zero()),
                shrinkability: (width / 2.0, Em::zero()),
            }
        } else if self.is_cjk_center_aligned_punctuation(style) {
            Adjustability {
                stretchability: (Em::zero(), Em::zero()),
                shrinkability: (width / 4.0, width / 4.0),
            }
        } else {
            Adjustability::default()
        }
    }

    pub fn stretchability(&self) -> (Em, Em) {
        self.adjustability.stretchability
    }

    pub fn shrinkability(&self) -> (Em, Em) {
        self.adjustability.shrinkability
    }

    /// Shrink the glyph on its left side. Never drives remaining shrink
    /// capacity negative; the caller is expected to clamp `amount` first.
    pub fn shrink_left(&mut self, amount: Em) {
        self.x_offset -= amount;
        self.x_advance -= amount;
        self.adjustability.shrinkability.0 -= amount;
    }

    /// Shrink the glyph on its right side.
    pub fn shrink_right(&mut self, amount: Em) {
        self.x_advance -= amount;
        self.adjustability.shrinkability.1 -= amount;
    }
}

/// Whether the glyph is a space.
pub fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\u{00A0}' | '\u{3000}')
}

/// Whether the glyph is part of Chinese or Japanese script (CJ, not CJK). CJ
/// typesetting has no inter-word spaces, so K (Korean, which does) is
/// deliberately excluded.
pub fn is_cj_script(c: char, script: Script) -> bool {
    use Script::*;
    // U+30FC: Katakana-Hiragana Prolonged Sound Mark.
    matches!(script, Hiragana | Katakana | Han) || c == '\u{30FC}'
}

/// Codepoint-only variant of [`is_cj_script`], for callers (e.g. CJK/Latin
/// spacing insertion) that have not shaped the character and so have no
/// `Script` resolved by the Shaping Provider; falls back to `UnicodeScript`.
pub fn is_cj_script_codepoint(c: char) -> bool {
    is_cj_script(c, c.script())
}

/// Codepoint-only variant of [`ShapedGlyph::is_letter_or_number`].
pub fn is_letter_or_number(c: char) -> bool {
    matches!(c.script(), Script::Latin | Script::Greek | Script::Cyrillic)
        || matches!(c, '#' | '$' | '%' | '&')
        || c.is_ascii_digit()
}

/// See <https://www.w3.org/TR/clreq/#punctuation_width_adjustment>.
pub fn is_cjk_left_aligned_punctuation(
    c: char,
    x_advance: Em,
    stretchability: (Em, Em),
    style: CjkPunctStyle,
) -> bool {
    use CjkPunctStyle::*;

    if matches!(c, '”' | '’') && x_advance + stretchability.1 == Em::one() {
        return true;
    }
    if matches!(style, Gb | Jis) && matches!(c, '，' | '。' | '．' | '、' | '：' | '；') {
        return true;
    }
    if matches!(style, Gb) && matches!(c, '？' | '！') {
        return true;
    }
    matches!(c, '》' | '）' | '』' | '」' | '】' | '〗' | '〕' | '〉' | '］' | '｝')
}

/// See <https://www.w3.org/TR/clreq/#punctuation_width_adjustment>.
pub fn is_cjk_right_aligned_punctuation(
    c: char,
    x_advance: Em,
    stretchability: (Em, Em),
) -> bool {
    if matches!(c, '“' | '‘') && x_advance + stretchability.0 == Em::one() {
        return true;
    }
    matches!(c, '《' | '（' | '『' | '「' | '【' | '〖' | '〔' | '〈' | '［' | '｛')
}

/// See <https://www.w3.org/TR/clreq/#punctuation_width_adjustment>.
pub fn is_cjk_center_aligned_punctuation(c: char, style: CjkPunctStyle) -> bool {
    if matches!(style, CjkPunctStyle::Cns) && matches!(c, '，' | '。' | '．' | '、' | '：' | '；')
    {
        return true;
    }
    // U+30FB Katakana Middle Dot, U+00B7 Middle Dot.
    matches!(c, '\u{30FB}' | '\u{00B7}')
}

</content>
