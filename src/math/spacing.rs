//! The TeX inter-atom spacing table (§4.7): a literal, fixed lookup rather
//! than the teacher's richer rule-based `spacing()` function (which has
//! script-size-sensitive special cases around punctuation/large operators).
//! This divergence is deliberate — see DESIGN.md.

use crate::math::class::MathClass;
use crate::units::Em;

const THIN: Em = Em::new(0.167);
const MEDIUM: Em = Em::new(0.222);
const THICK: Em = Em::new(0.278);
const ZERO: Em = Em::new(0.0);

/// Inter-atom spacing between a `left`-classed and `right`-classed fragment,
/// per the table in §4.7. Always zero inside a script or scriptscript style
/// (`script_level > 0`).
pub fn math_spacing(left: MathClass, right: MathClass, script_level: u8) -> Em {
    if script_level > 0 {
        return ZERO;
    }

    use MathClass::*;
    match (left, right) {
        (Normal, Large) => THIN,
        (Normal, Binary) => MEDIUM,
        (Normal, Relation) => THICK,
        (Normal, Opening) => ZERO,
        (Normal, Closing) => ZERO,
        (Normal, Punctuation) => ZERO,

        (Large, Normal) => THIN,
        (Large, Large) => THIN,
        (Large, Binary) => MEDIUM,
        (Large, Relation) => THICK,
        (Large, Opening) => ZERO,
        (Large, Punctuation) => ZERO,

        (Binary, Normal) => MEDIUM,
        (Binary, Large) => MEDIUM,
        (Binary, Opening) => MEDIUM,

        (Relation, Normal) => THICK,
        (Relation, Large) => THICK,
        (Relation, Opening) => THICK,

        (Opening, Normal) => ZERO,
        (Opening, Large) => ZERO,
        (Opening, Binary) => ZERO,
        (Opening, Relation) => ZERO,

        (Closing, Large) => THIN,
        (Closing, Binary) => MEDIUM,
        (Closing, Relation) => THICK,
        (Closing, Punctuation) => ZERO,

        (Punctuation, Normal) => THIN,
        (Punctuation, Large) => THIN,
        (Punctuation, Relation) => THIN,
        (Punctuation, Opening) => THIN,

        _ => ZERO,
    }
}

</content>
