//! Width-bearing `Preparation` fixtures shared by the line-breaking unit
//! tests. `Preparation::from_text_only` gives every test a single
//! `Item::Skip`, whose `natural_width` is always zero — useless for
//! exercising width-driven wrapping, justification ratios, or cost. These
//! helpers build real `Item::Text` runs instead, the way a caller backed by
//! an actual Shaping Provider would.
#![cfg(test)]

use crate::config::Config;
use crate::item::Item;
use crate::prepare::Preparation;
use crate::text::glyph::{Adjustability, CjkPunctStyle, ShapedGlyph};
use crate::text::{Dir, FontId, Lang, ShapedText};
use crate::units::{Abs, Em};
use unicode_script::Script;

/// A single-glyph-per-letter run: one `Em::new(1.0)` advance per character,
/// so a word's width is `10pt * letter count` at `size = Abs::pt(10.0)`.
pub fn letter_glyph(c: char, size: Abs) -> ShapedGlyph {
    ShapedGlyph {
        font: FontId(0),
        glyph_id: 0,
        c,
        size,
        x_advance: Em::new(1.0),
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

/// A space glyph half as wide as a letter, with the classic Knuth-Plass
/// stretch/shrink capacity derived from `base_adjustability` rather than
/// hand-computed, so it matches what a real shaper would hand the breaker.
pub fn space_glyph(size: Abs) -> ShapedGlyph {
    let mut g = letter_glyph(' ', size);
    g.x_advance = Em::new(0.5);
    g.adjustability = g.base_adjustability(CjkPunctStyle::Gb);
    g
}

pub fn text_item(base: usize, text: &str, glyphs: Vec<ShapedGlyph>, size: Abs) -> Item {
    Item::Text(ShapedText {
        base,
        text: text.to_string(),
        dir: Dir::LTR,
        lang: Lang::new("en"),
        region: None,
        size,
        glyphs,
    })
}

/// A word item, one `letter_glyph` per character.
pub fn word_item(base: usize, word: &str, size: Abs) -> Item {
    let glyphs = word.chars().map(|c| letter_glyph(c, size)).collect();
    text_item(base, word, glyphs, size)
}

/// A single stretchable/shrinkable space item.
pub fn space_item(base: usize, size: Abs) -> Item {
    text_item(base, " ", vec![space_glyph(size)], size)
}

/// `"aaa bbb ccc"`: three 30pt words separated by two 5pt spaces, at a 10pt
/// font size. Grounds scenario S4 (greedy lookback), S5 (Knuth-Plass total
/// cost vs. greedy), and Testable Property #3 (greedy feasibility).
pub fn three_word_preparation() -> Preparation {
    three_word_preparation_with(Config::default())
}

pub fn three_word_preparation_with(config: Config) -> Preparation {
    let size = Abs::pt(10.0);
    let items = vec![
        word_item(0, "aaa", size),
        space_item(3, size),
        word_item(4, "bbb", size),
        space_item(7, size),
        word_item(8, "ccc", size),
    ];
    Preparation::new("aaa bbb ccc", items, config).unwrap()
}

/// `"hyphenation"` as a single 110pt word (11 letters at 10pt each), with no
/// break opportunity except the heuristic hyphenator's internal splits.
/// Grounds scenario S6 (hyphen-cost tuning).
pub fn hyphenatable_word_preparation(config: Config) -> Preparation {
    let size = Abs::pt(10.0);
    let items = vec![word_item(0, "hyphenation", size)];
    Preparation::new("hyphenation", items, config).unwrap()
}
