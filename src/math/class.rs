//! Math fragment classification (§4.7): a small, explicitly literal table of
//! codepoints, not a full Unicode Math Class property lookup. This is a
//! deliberate divergence from the teacher's `unicode_math_class`-backed
//! `default_math_class`; see DESIGN.md.

/// The atom class of a math fragment, driving both inter-fragment spacing
/// and operator/delimiter detection.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MathClass {
    /// No class assigned (e.g. a tag or linebreak marker).
    None,
    Normal,
    Large,
    Binary,
    Relation,
    Opening,
    Closing,
    Punctuation,
    Fence,
    GlyphVariant,
    Space,
}

impl MathClass {
    /// Whether this class counts as an "operator" for layout purposes (e.g.
    /// limits placement eligibility).
    pub fn is_operator(self) -> bool {
        matches!(self, Self::Large | Self::Binary)
    }

    /// Whether this class counts as a delimiter.
    pub fn is_delimiter(self) -> bool {
        matches!(self, Self::Opening | Self::Closing | Self::Fence)
    }
}

const BINARY: &[char] = &['+', '\u{2212}', '\u{00B1}', '\u{2213}', '\u{00D7}', '\u{00F7}', '\u{00B7}', '\u{2217}', '\u{2295}', '\u{2296}', '\u{2297}', '\u{2298}'];
const RELATION: &[char] = &['=', '<', '>', '\u{2264}', '\u{2265}', '\u{2260}', '\u{2248}', '\u{223C}', '\u{2261}', '\u{2282}', '\u{2283}', '\u{2208}', '\u{220B}'];
const LARGE: &[char] = &['\u{2211}', '\u{220F}', '\u{2210}', '\u{222B}', '\u{222C}', '\u{222D}', '\u{222E}', '\u{22C0}', '\u{22C1}', '\u{22C2}', '\u{22C3}'];
const OPENING: &[char] = &['(', '[', '{', '\u{27E8}', '\u{2308}', '\u{230A}'];
const CLOSING: &[char] = &[')', ']', '}', '\u{27E9}', '\u{2309}', '\u{230B}'];
const PUNCTUATION: &[char] = &[',', ';', ':'];
const FENCE: &[char] = &['|', '\u{2016}'];

/// Classify a codepoint per the literal table in §4.7. Anything not named
/// in the table is `Normal`.
pub fn classify(c: char) -> MathClass {
    if BINARY.contains(&c) {
        MathClass::Binary
    } else if RELATION.contains(&c) {
        MathClass::Relation
    } else if LARGE.contains(&c) {
        MathClass::Large
    } else if OPENING.contains(&c) {
        MathClass::Opening
    } else if CLOSING.contains(&c) {
        MathClass::Closing
    } else if PUNCTUATION.contains(&c) {
        MathClass::Punctuation
    } else if FENCE.contains(&c) {
        MathClass::Fence
    } else {
        MathClass::Normal
    }
}

</content>
