//! Script and limits layout (§4.7): positioning of superscripts,
//! subscripts, primes, and over/under limits relative to a base fragment.
//! Frame-geometry only — no font-table glyph-variant selection, unlike the
//! teacher's `layout_attach`/`compute_script_shifts`.

use crate::geom::{Point, Size};
use crate::math::constants::MathConstants;
use crate::math::fragment::{FrameFragment, MathFragment};
use crate::units::{Abs, Em};

/// Per-glyph width added for each trailing prime mark.
const PRIME_WIDTH: Em = Em::new(0.1);

/// The ambient state script/limits layout needs beyond the fragments
/// themselves: the font-derived constants and whether we're in a cramped
/// style (superscripts shrink their shift-up further when cramped, e.g.
/// inside a square root).
#[derive(Debug, Clone, Copy)]
pub struct MathContext {
    pub constants: MathConstants,
    pub cramped: bool,
    pub font_size: Abs,
}

impl MathContext {
    pub fn new(font_size: Abs) -> Self {
        Self { constants: MathConstants::default(), cramped: false, font_size }
    }
}

/// The result of laying out a base with optional super/subscript and
/// primes: the composed fragment plus the offsets (relative to the
/// fragment's own origin) each attached part sits at, for the Frame sink's
/// `MathScript` item (§6).
#[derive(Debug, Clone)]
pub struct ScriptLayout {
    pub fragment: FrameFragment,
    pub super_offset: Option<Point>,
    pub sub_offset: Option<Point>,
}

/// Lays out a base with an optional superscript, subscript, and prime
/// count, per §4.7's "Script layout". Returns `None` if there is no base.
pub fn layout_math_script(
    ctx: &MathContext,
    base: Option<&MathFragment>,
    sup: Option<&MathFragment>,
    sub: Option<&MathFragment>,
    primes: usize,
) -> Option<ScriptLayout> {
    let base = base?;
    let c = &ctx.constants;

    let base_width = base.width();
    let italics = base.italics_correction();
    let script_x_offset_sup = base_width + italics;
    let script_x_offset_sub = (base_width - italics).max(Abs::zero());

    let prime_width = PRIME_WIDTH.at(ctx.font_size) * primes as f64;

    let shift_up = if ctx.cramped {
        c.superscript_shift_up_cramped
    } else {
        c.superscript_shift_up
    }
    .at(ctx.font_size);
    let shift_down = c.subscript_shift_down.at(ctx.font_size);

    let mut width = base_width;
    let mut ascent = base.ascent();
    let mut descent = base.descent();

    let super_offset = sup.map(|s| {
        width.set_max(script_x_offset_sup + s.width() + prime_width);
        ascent.set_max(shift_up + s.ascent());
        Point::new(script_x_offset_sup, -shift_up)
    });

    let sub_offset = sub.map(|s| {
        width.set_max(script_x_offset_sub + s.width() + prime_width);
        descent.set_max(shift_down + s.descent());
        Point::new(script_x_offset_sub, shift_down)
    });

    if super_offset.is_none() && sub_offset.is_none() && primes > 0 {
        width += prime_width;
    }

    Some(ScriptLayout {
        fragment: FrameFragment::new(base.class(), Size::new(width, ascent + descent), ascent, descent)
            .with_italics_correction(italics),
        super_offset,
        sub_offset,
    })
}

/// The result of laying out a nucleus with optional upper/lower limits, for
/// the Frame sink's `MathLimits` item (§6).
#[derive(Debug, Clone)]
pub struct LimitsLayout {
    pub fragment: FrameFragment,
    pub upper_offset: Option<Point>,
    pub lower_offset: Option<Point>,
}

/// Lays out a nucleus (e.g. a large operator like `∑`) with optional
/// over/under limits, per §4.7's "Limits layout".
pub fn layout_math_limits(
    ctx: &MathContext,
    nucleus: &MathFragment,
    upper: Option<&MathFragment>,
    lower: Option<&MathFragment>,
) -> LimitsLayout {
    let c = &ctx.constants;
    let upper_gap = c.upper_limit_gap.at(ctx.font_size);
    let lower_gap = c.lower_limit_gap.at(ctx.font_size);

    let width = [Some(nucleus), upper, lower]
        .into_iter()
        .flatten()
        .map(MathFragment::width)
        .fold(Abs::zero(), Abs::max);

    let mut ascent = nucleus.ascent();
    let mut descent = nucleus.descent();

    let upper_offset = upper.map(|u| {
        let y = -(nucleus.ascent() + upper_gap + u.height());
        ascent.set_max(nucleus.ascent() + upper_gap + u.height());
        Point::new((width - u.width()) / 2.0, y)
    });

    let lower_offset = lower.map(|l| {
        let y = nucleus.descent() + lower_gap;
        descent.set_max(nucleus.descent() + lower_gap + l.height());
        Point::new((width - l.width()) / 2.0, y)
    });

    LimitsLayout {
        fragment: FrameFragment::new(nucleus.class(), Size::new(width, ascent + descent), ascent, descent),
        upper_offset,
        lower_offset,
    }
}

</content>
