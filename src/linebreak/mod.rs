//! Line breaking: breakpoint enumeration, cost computation, and the two
//! algorithms (greedy and Knuth-Plass) that consume them.

pub mod breakpoints;
mod cost;
pub mod cumulative;
mod greedy;
mod knuth_plass;
#[cfg(test)]
pub(crate) mod test_support;

use crate::config::Linebreaks;
use crate::hyphenate::Hyphenator;
use crate::line::Line;
use crate::prepare::Preparation;
use crate::units::Abs;

/// Break `p`'s text into lines at most `width` wide, dispatching on
/// `p.config.linebreaks`.
pub fn linebreak(p: &Preparation, hyphenator: &dyn Hyphenator, width: Abs) -> Vec<Line> {
    if hyphenator.is_fallback() && p.config.hyphenate_effective() {
        log::warn!("no Hyphenator supplied; falling back to the heuristic vowel/consonant hyphenator");
    }

    match p.config.linebreaks {
        Linebreaks::Simple => greedy::linebreak_simple(p, hyphenator, width),
        Linebreaks::Optimized => knuth_plass::linebreak_optimized(p, hyphenator, width),
    }
}

</content>
