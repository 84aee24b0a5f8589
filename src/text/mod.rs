//! Shaped-text model: glyphs, adjustability, and the `ShapedText` container.

pub mod glyph;
pub mod shaped;

pub use glyph::{Adjustability, CjkPunctStyle, ShapedGlyph};
pub use shaped::ShapedText;

use std::fmt;

/// Text direction.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Dir {
    LTR,
    RTL,
    TTB,
    BTT,
}

impl Dir {
    pub fn is_positive(self) -> bool {
        matches!(self, Dir::LTR | Dir::TTB)
    }
}

/// A BCP-47-ish language tag, stored as its lowercase two/three-letter code.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Lang(String);

impl Lang {
    pub const ENGLISH: &'static str = "en";
    pub const CHINESE: &'static str = "zh";
    pub const JAPANESE: &'static str = "ja";
    pub const KOREAN: &'static str = "ko";

    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A two-letter region code (e.g. `TW`, `HK`).
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Region(String);

impl Region {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Opaque handle to a font identity, as vended by the Shaping Provider. The
/// core never dereferences this; it only compares and groups by it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(pub u64);
</content>
