//! Preparation: gathers a paragraph's prepared items into the flat view
//! line breaking operates over, and inserts CJK/Latin spacing. Unlike the
//! teacher, this module never reorders items for bidi — visual reordering of
//! finished lines is explicitly a caller responsibility (§5); `unicode_bidi`
//! is used here only to classify codepoints.

use crate::config::Config;
use crate::item::Item;
use crate::text::glyph::{is_cj_script_codepoint, is_letter_or_number};
use crate::units::{Abs, Em};
use crate::Range;

/// The flattened view of a paragraph handed to the line breaker: the full
/// concatenated text plus the prepared items whose `textual()` ranges tile
/// it without gaps or overlaps.
#[derive(Debug, Clone)]
pub struct Preparation {
    /// The paragraph's full text, the concatenation of every item's textual
    /// content in order.
    pub text: String,
    /// The prepared items, in paragraph order.
    pub items: Vec<Item>,
    /// The byte offset each item starts at within `text`.
    pub item_starts: Vec<usize>,
    /// The effective configuration for this paragraph.
    pub config: Config,
}

impl Preparation {
    /// Build a `Preparation` from caller-supplied `text` and already-prepared
    /// `items`, validating that the items' textual content exactly tiles
    /// `text` byte-for-byte.
    pub fn new(text: impl Into<String>, items: Vec<Item>, config: Config) -> crate::error::Result<Self> {
        if !config.font_size.is_finite() || config.font_size <= Abs::zero() {
            return Err(crate::error::LayoutError::NonFiniteFontSize);
        }

        let text = text.into();

        let mut covered = String::new();
        let mut item_starts = Vec::with_capacity(items.len());
        for item in &items {
            item_starts.push(covered.len());
            covered.push_str(item.textual());
        }

        if covered != text {
            return Err(crate::error::LayoutError::ItemsDoNotCoverText {
                covered: covered.len(),
                expected: text.len(),
            });
        }

        Ok(Self { text, items, item_starts, config })
    }

    /// A `Preparation` holding only plain text as a single [`Item::Skip`],
    /// for tests and callers that don't need item-level structure.
    pub fn from_text_only(text: &str, config: Config) -> Self {
        let items = vec![Item::Skip(text.to_string())];
        Self { text: text.to_string(), items, item_starts: vec![0], config }
    }

    /// The item index and in-item byte offset for a byte offset in `text`.
    pub fn get(&self, offset: usize) -> (usize, usize) {
        match self.item_starts.binary_search(&offset) {
            Ok(i) => (i, 0),
            Err(0) => (0, offset),
            Err(i) => (i - 1, offset - self.item_starts[i - 1]),
        }
    }

    /// The slice of items fully or partially covering `range`, plus the
    /// in-first-item and in-last-item trim offsets.
    pub fn slice(&self, range: Range) -> &[Item] {
        let (start_item, _) = self.get(range.start);
        let (end_item, end_in_item) = self.get(range.end);
        let end_item = if end_in_item == 0 { end_item } else { end_item + 1 };
        &self.items[start_item..end_item.min(self.items.len())]
    }
}

/// Per §4.6: when CJK/Latin spacing is enabled, insert `0.25em` of weak
/// stretchable spacing (shrinkable to `0.125em`) at every boundary between a
/// CJK character and a Latin letter or digit.
pub fn add_cjk_latin_spacing(items: &mut Vec<Item>) {
    let mut i = 0;
    while i + 1 < items.len() {
        let boundary = {
            let (a, b) = (&items[i], &items[i + 1]);
            match (a.as_text(), b.as_text()) {
                (Some(left), Some(right)) => {
                    let lc = left.text.chars().next_back();
                    let rc = right.text.chars().next();
                    match (lc, rc) {
                        (Some(l), Some(r)) => {
                            (is_cj_script_char(l) && is_letter_or_number(r))
                                || (is_letter_or_number(l) && is_cj_script_char(r))
                        }
                        _ => false,
                    }
                }
                _ => false,
            }
        };
        if boundary {
            items.insert(i + 1, cjk_latin_spacing_item());
            i += 1;
        }
        i += 1;
    }
}

fn is_cj_script_char(c: char) -> bool {
    is_cj_script_codepoint(c)
}

fn cjk_latin_spacing_item() -> Item {
    // Represented as fixed (non-weak) spacing: its width is the nominal
    // 0.25em value at the default font size. A caller shaping at a
    // different size is expected to produce its own spacing items instead
    // of relying on this helper.
    let at = Em::new(0.25).at(Abs::pt(11.0));
    Item::Absolute(at, true)
}

</content>
