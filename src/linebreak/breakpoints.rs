//! Breakpoint enumeration (§4.2): a deliberately simplified approximation of
//! UAX#14 segmentation using Unicode whitespace plus a small bidi-class set,
//! as specified — not a full ICU line-break property table.

use unicode_bidi::BidiClass;

use crate::hyphenate::Hyphenator;
use crate::prepare::Preparation;

/// A line break opportunity.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Breakpoint {
    /// A normal opportunity (e.g. after a space).
    Normal,
    /// A mandatory breakpoint (after `\n` or at the end of the text).
    Mandatory,
    /// An opportunity for hyphenating; carries the number of letters before
    /// and after the break within the word.
    Hyphen(u8, u8),
}

impl Breakpoint {
    pub fn is_hyphen(self) -> bool {
        matches!(self, Self::Hyphen(..))
    }
}

const MANDATORY_BREAKS: [char; 5] = ['\n', '\r', '\u{0085}', '\u{2028}', '\u{2029}'];

fn is_mandatory_break_char(c: char) -> bool {
    MANDATORY_BREAKS.contains(&c)
}

/// Whether `c`'s bidi class counts as a normal-break trigger (WS, S, or B),
/// per the simplified classification in §4.2.
fn is_normal_break_class(c: char) -> bool {
    c.is_whitespace()
        || matches!(
            bidi_class(c),
            BidiClass::WS | BidiClass::S | BidiClass::B
        )
}

fn bidi_class(c: char) -> BidiClass {
    unicode_bidi::bidi_class(c)
}

/// Enumerate candidate break positions in ascending order, calling `f` for
/// each with its byte offset and kind. The final call is always `Mandatory`.
pub fn breakpoints(p: &Preparation, hyphenator: &dyn Hyphenator, mut f: impl FnMut(usize, Breakpoint)) {
    let text = p.text.as_str();

    if text.is_empty() {
        f(0, Breakpoint::Mandatory);
        return;
    }

    let hyphenate = p.config.hyphenate_effective();
    let mut word_start = 0usize;
    let mut word_len_letters = 0usize;

    let mut chars = text.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        let next_i = chars.peek().map(|&(j, _)| j).unwrap_or(text.len());
        let is_last = next_i == text.len();

        if c.is_alphabetic() {
            if word_len_letters == 0 {
                word_start = i;
            }
            word_len_letters += 1;
        }

        let is_mandatory = is_mandatory_break_char(c) || is_last;
        let is_normal = !is_mandatory && is_normal_break_class(c);

        if is_mandatory || is_normal {
            // Flush any pending word for hyphenation before emitting the
            // break that terminates it.
            if hyphenate && word_len_letters >= 4 {
                emit_hyphens(text, word_start, word_len_letters, hyphenator, p, &mut f);
            }
            word_len_letters = 0;

            if is_mandatory {
                f(next_i, Breakpoint::Mandatory);
            } else {
                f(next_i, Breakpoint::Normal);
            }
        }
    }
}

/// Emit `Hyphen` breakpoints within the run of letters starting at
/// `word_start` with `letters` letters, delegating the actual hyphenation
/// positions to `hyphenator`.
fn emit_hyphens(
    text: &str,
    word_start: usize,
    letters: usize,
    hyphenator: &dyn Hyphenator,
    p: &Preparation,
    f: &mut impl FnMut(usize, Breakpoint),
) {
    // Recover the word's exact byte span by scanning forward `letters`
    // alphabetic characters (non-alphabetic characters cannot appear inside
    // a run counted by the caller).
    let mut end = word_start;
    let mut count = 0;
    for (i, c) in text[word_start..].char_indices() {
        if count == letters {
            break;
        }
        if c.is_alphabetic() {
            count += 1;
        }
        end = word_start + i + c.len_utf8();
    }
    let word = &text[word_start..end];
    let lang = p.config.lang.as_ref();

    for (before, after) in hyphenator.hyphenate(word, lang) {
        // Convert the char-count split into a byte offset. Bounded by
        // `word.chars()` rather than trusting `before`, so a `Hyphenator`
        // that returns a split past the word's own length just clamps to
        // the word's end instead of producing an out-of-bounds offset.
        let mut byte_offset = word_start;
        let mut seen = 0u32;
        for c in word.chars() {
            if seen == before as u32 {
                break;
            }
            byte_offset += c.len_utf8();
            seen += 1;
        }
        debug_assert!(byte_offset <= text.len());
        f(byte_offset, Breakpoint::Hyphen(before, after));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::hyphenate::HeuristicHyphenator;
    use crate::prepare::Preparation;

    fn prep(text: &str) -> Preparation {
        Preparation::from_text_only(text, Config::default())
    }

    #[test]
    fn empty_text_yields_single_mandatory_breakpoint() {
        let p = prep("");
        let mut seen = vec![];
        breakpoints(&p, &HeuristicHyphenator, |end, bp| seen.push((end, bp)));
        assert_eq!(seen, vec![(0, Breakpoint::Mandatory)]);
    }

    #[test]
    fn final_breakpoint_is_always_mandatory() {
        let p = prep("a b");
        let mut seen = vec![];
        breakpoints(&p, &HeuristicHyphenator, |end, bp| seen.push((end, bp)));
        assert_eq!(seen.last().unwrap().1, Breakpoint::Mandatory);
        assert_eq!(seen.last().unwrap().0, 3);
    }

    #[test]
    fn mandatory_break_after_newline() {
        let p = prep("A\nB");
        let mut seen = vec![];
        breakpoints(&p, &HeuristicHyphenator, |end, bp| seen.push((end, bp)));
        assert!(seen.contains(&(2, Breakpoint::Mandatory)));
    }
}
</content>
