//! Line construction (§4.3): turns a candidate `[start, end)` range plus the
//! breakpoint kind at `end` into a measured [`Line`], without building a
//! frame (frame assembly is a caller/renderer concern, see [`crate::frame`]).

use crate::item::Item;
use crate::linebreak::breakpoints::Breakpoint;
use crate::prepare::Preparation;
use crate::units::{Abs, Fr};
use crate::Range;

const SOFT_HYPHEN: char = '\u{ad}';
const HYPHEN: char = '-';
const EN_DASH: char = '\u{2013}';
const EM_DASH: char = '\u{2014}';
const LINE_SEPARATOR: char = '\u{2028}';

const MANDATORY_TRIM: [char; 5] = ['\n', '\r', '\u{0085}', '\u{2028}', '\u{2029}'];

/// The terminal dash on a line, if any.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Dash {
    /// A soft hyphen inserted to break a word.
    Soft,
    /// A hard hyphen already present in the source text (e.g. a compound
    /// word).
    Hard,
    /// Any other trailing dash (en/em), relevant only for cost computation.
    Other,
}

/// A measured line: the items it covers, its natural width, and the
/// justification/dash facts the line breaker and cost functions need.
#[derive(Debug)]
pub struct Line {
    /// The items spanned by this line, in paragraph (not visual) order.
    pub items: Vec<Item>,
    /// The byte range in the paragraph's text this line covers (after
    /// layout trimming).
    pub range: Range,
    /// The line's natural (unstretched, unshrunk) width.
    pub width: Abs,
    /// Whether this line should be justified.
    pub justify: bool,
    /// The line's terminal dash, if it ends on one.
    pub dash: Option<Dash>,
}

impl Line {
    pub fn empty() -> Self {
        Self { items: Vec::new(), range: 0..0, width: Abs::zero(), justify: false, dash: None }
    }

    /// How many glyphs can absorb extra space on an underfull line.
    pub fn justifiables(&self) -> usize {
        let mut count = 0;
        for item in &self.items {
            if let Some(text) = item.as_text() {
                count += text.justifiables();
            }
        }
        if self
            .items
            .iter()
            .rev()
            .find_map(Item::as_text)
            .map(|s| s.cjk_justifiable_at_last(crate::text::CjkPunctStyle::Gb))
            .unwrap_or(false)
        {
            count = count.saturating_sub(1);
        }
        count
    }

    /// Total stretchability available to justify this line.
    pub fn stretchability(&self) -> Abs {
        self.items.iter().filter_map(Item::as_text).map(|s| s.stretchability()).sum()
    }

    /// Total shrinkability available to justify this line.
    pub fn shrinkability(&self) -> Abs {
        self.items.iter().filter_map(Item::as_text).map(|s| s.shrinkability()).sum()
    }

    /// Whether any item on the line has negative natural width (can happen
    /// with hand-authored negative spacing).
    pub fn has_negative_width_items(&self) -> bool {
        self.items.iter().any(|item| match item {
            Item::Absolute(amount, _) => *amount < Abs::zero(),
            Item::InlineFrame(width) => *width < Abs::zero(),
            _ => false,
        })
    }

    /// The sum of fractional-spacing weights on the line.
    pub fn fr(&self) -> Fr {
        self.items.iter().filter_map(Item::fr).sum()
    }
}

/// Per §4.3 step 1: where layout (visible width) and shaping (kept glyph
/// context) boundaries fall for a breakpoint at the end of `segment`.
struct Trim {
    /// Byte length of `segment` kept for layout/width purposes.
    layout_len: usize,
}

fn trim(segment: &str, breakpoint: Breakpoint) -> Trim {
    match breakpoint {
        Breakpoint::Hyphen(..) => Trim { layout_len: segment.len() },
        Breakpoint::Mandatory => {
            let mut len = segment.len();
            while len > 0 {
                let prefix = &segment[..len];
                if let Some(c) = prefix.chars().next_back() {
                    if MANDATORY_TRIM.contains(&c) {
                        len -= c.len_utf8();
                        continue;
                    }
                }
                break;
            }
            Trim { layout_len: len }
        }
        Breakpoint::Normal => {
            let trimmed = segment.trim_end();
            Trim { layout_len: trimmed.len() }
        }
    }
}

fn detect_dash(segment: &str, breakpoint: Breakpoint) -> Option<Dash> {
    if breakpoint.is_hyphen() || segment.ends_with(SOFT_HYPHEN) {
        Some(Dash::Soft)
    } else if segment.ends_with(HYPHEN) {
        Some(Dash::Hard)
    } else if segment.ends_with(EN_DASH) || segment.ends_with(EM_DASH) {
        Some(Dash::Other)
    } else {
        None
    }
}

/// Build the line spanning `[start, end)` given the breakpoint kind at
/// `end`, per §4.3.
pub fn make_line(p: &Preparation, start: usize, end: usize, breakpoint: Breakpoint) -> Line {
    let full = &p.text[start..end];

    let justify = full.ends_with(LINE_SEPARATOR) || (p.config.justify && breakpoint != Breakpoint::Mandatory);
    let dash = detect_dash(full, breakpoint);
    let t = trim(full, breakpoint);
    let layout_end = start + t.layout_len;

    let items: Vec<Item> = p.slice(start..layout_end).to_vec();
    let width = items.iter().map(Item::natural_width).sum();

    Line { items, range: start..layout_end, width, justify, dash }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn normal_break_trims_trailing_whitespace_from_layout_width() {
        let p = Preparation::from_text_only("hello world", Config::default());
        let line = make_line(&p, 0, "hello ".len(), Breakpoint::Normal);
        assert_eq!(line.range, 0.."hello".len());
    }

    #[test]
    fn mandatory_break_strips_trailing_newline() {
        let p = Preparation::from_text_only("hello\n", Config::default());
        let line = make_line(&p, 0, 6, Breakpoint::Mandatory);
        assert_eq!(line.range, 0..5);
    }

    #[test]
    fn hyphen_breakpoint_marks_soft_dash_and_keeps_full_segment() {
        let p = Preparation::from_text_only("beauti", Config::default());
        let line = make_line(&p, 0, 6, Breakpoint::Hyphen(5, 2));
        assert_eq!(line.dash, Some(Dash::Soft));
        assert_eq!(line.range, 0..6);
    }

    #[test]
    fn hard_hyphen_in_source_text_is_detected() {
        let p = Preparation::from_text_only("beija-flor", Config::default());
        let line = make_line(&p, 0, "beija-".len(), Breakpoint::Normal);
        assert_eq!(line.dash, Some(Dash::Hard));
    }

    #[test]
    fn line_separator_forces_justification() {
        let mut text = String::from("hi");
        text.push(LINE_SEPARATOR);
        let p = Preparation::from_text_only(&text, Config::default());
        let line = make_line(&p, 0, text.len(), Breakpoint::Normal);
        assert!(line.justify);
    }
}
</content>
