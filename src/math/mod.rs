//! Math fragment classification and spacing, plus layout of scripts and
//! limits (§4.7). This is a frame-geometry-only module: no OpenType MATH
//! table access, no glyph-variant stretching, no full equation layout
//! (fractions, roots, matrices, fences, accents) — those live in the
//! teacher's much larger `typst-layout::math` and are out of this core's
//! scope (§1).

pub mod attach;
pub mod class;
pub mod constants;
pub mod fragment;
pub mod spacing;

pub use attach::{layout_math_limits, layout_math_script, LimitsLayout, MathContext, ScriptLayout};
pub use class::{classify, MathClass};
pub use constants::MathConstants;
pub use fragment::{FrameFragment, GlyphFragment, MathFragment};
pub use spacing::math_spacing;
</content>
