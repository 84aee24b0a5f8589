//! The explicit knob set for inline layout. No open-ended keyword surface:
//! higher layers translate user-facing options down to this record.

use crate::text::{Dir, Lang};
use crate::units::Abs;

/// Which line-breaking algorithm to run.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum Linebreaks {
    /// Greedy first-fit with one-step lookback.
    #[default]
    Simple,
    /// Knuth-Plass dynamic-programming optimization.
    Optimized,
}

/// Horizontal alignment of a finished line within its measure.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum Align {
    #[default]
    Start,
    Center,
    End,
    Justify,
}

/// Multipliers applied to the Knuth-Plass default cost constants.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Costs {
    /// Multiplier on the default hyphenation-break cost (135).
    pub hyphenation: f64,
    /// Multiplier on the default runt (short last line) cost (100).
    pub runt: f64,
}

impl Default for Costs {
    fn default() -> Self {
        Self { hyphenation: 1.0, runt: 1.0 }
    }
}

/// Every explicit knob that drives inline layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Whether lines should be stretched/shrunk to fill the measure.
    pub justify: bool,
    /// Which algorithm enumerates the final line breaks.
    pub linebreaks: Linebreaks,
    /// Extra indent on the first line of a paragraph.
    pub first_line_indent: Abs,
    /// Extra indent applied to every line but the first.
    pub hanging_indent: Abs,
    /// Alignment of unjustified lines.
    pub align: Align,
    /// The font size in effect (drives em-relative defaults).
    pub font_size: Abs,
    /// Base text direction.
    pub dir: Dir,
    /// Whether to hyphenate; `None` defers to a language-driven default.
    pub hyphenate: Option<bool>,
    /// The paragraph's language, if known (drives hyphenation defaults and
    /// CJK punctuation style selection).
    pub lang: Option<Lang>,
    /// Whether to fall back to a default font when a requested one is
    /// unavailable (threaded through to the Shaping Provider; unused by the
    /// core's own logic beyond being part of the explicit knob set).
    pub fallback: bool,
    /// Whether to insert spacing between CJK and Latin/digit runs.
    pub cjk_latin_spacing: bool,
    /// Multipliers on the Knuth-Plass default cost constants.
    pub costs: Costs,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            justify: false,
            linebreaks: Linebreaks::Simple,
            first_line_indent: Abs::zero(),
            hanging_indent: Abs::zero(),
            align: Align::Start,
            font_size: Abs::pt(11.0),
            dir: Dir::LTR,
            hyphenate: None,
            lang: None,
            fallback: true,
            cjk_latin_spacing: true,
            costs: Costs::default(),
        }
    }
}

impl Config {
    /// Whether hyphenation is in effect for this paragraph: explicit flag if
    /// set, otherwise on by default (per §4.2, "hyphenation is enabled...
    /// for auto"), unless the language is one the heuristic hyphenator is
    /// known not to suit.
    pub fn hyphenate_effective(&self) -> bool {
        self.hyphenate.unwrap_or_else(|| {
            self.lang.as_ref().map(|l| !matches!(l.as_str(), "zh" | "ja" | "ko")).unwrap_or(true)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_documented_defaults() {
        let c = Config::default();
        assert!(!c.justify);
        assert_eq!(c.linebreaks, Linebreaks::Simple);
        assert_eq!(c.dir, Dir::LTR);
        assert!(c.cjk_latin_spacing);
    }

    #[test]
    fn hyphenate_effective_defers_to_language_when_unset() {
        let mut c = Config::default();
        c.lang = Some(Lang::new("en"));
        assert!(c.hyphenate_effective());
        c.lang = Some(Lang::new("ja"));
        assert!(!c.hyphenate_effective());
    }

    #[test]
    fn hyphenate_effective_defaults_to_true_with_no_language_set() {
        let c = Config::default();
        assert_eq!(c.lang, None);
        assert!(c.hyphenate_effective());
    }

    #[test]
    fn hyphenate_effective_respects_explicit_override() {
        let mut c = Config::default();
        c.hyphenate = Some(false);
        c.lang = Some(Lang::new("en"));
        assert!(!c.hyphenate_effective());
    }
}
</content>
