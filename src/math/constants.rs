//! Default math layout constants, standing in for the OpenType MATH table
//! the teacher reads from a real font (`ttf_parser::math`). This crate has
//! no font-file access, so callers needing a specific font's true constants
//! are expected to override these via the Shaping Provider (§6).

use crate::units::Em;

/// A record of the constants math script/limits layout needs, normally
/// sourced from a font's `MATH` table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MathConstants {
    pub script_scale: f64,
    pub script_script_scale: f64,
    pub superscript_shift_up: Em,
    pub superscript_shift_up_cramped: Em,
    pub subscript_shift_down: Em,
    pub upper_limit_gap: Em,
    pub lower_limit_gap: Em,
    pub space_after_script: Em,
}

impl MathConstants {
    /// Reasonable defaults in the ballpark of common serif math fonts.
    pub const fn default_values() -> Self {
        Self {
            script_scale: 0.71,
            script_script_scale: 0.5041,
            superscript_shift_up: Em::new(0.4),
            superscript_shift_up_cramped: Em::new(0.2),
            subscript_shift_down: Em::new(0.2),
            upper_limit_gap: Em::new(0.25),
            lower_limit_gap: Em::new(0.15),
            space_after_script: Em::new(0.05),
        }
    }

    /// Panics if the invariants named in §4.7 don't hold; intended for
    /// callers constructing custom constant sets.
    pub fn assert_valid(&self) {
        assert!(0.0 < self.script_script_scale);
        assert!(self.script_script_scale < self.script_scale);
        assert!(self.script_scale < 1.0);
        assert!(self.superscript_shift_up_cramped < self.superscript_shift_up);
        assert!(self.subscript_shift_down > Em::zero());
    }
}

impl Default for MathConstants {
    fn default() -> Self {
        Self::default_values()
    }
}

</content>
