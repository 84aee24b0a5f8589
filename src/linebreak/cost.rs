//! Ratio and cost computation shared by both Knuth-Plass passes (§4.5).

use crate::config::Config;
use crate::line::{Dash, Line};
use crate::linebreak::breakpoints::Breakpoint;
use crate::units::Abs;

/// Clamp applied to floating-point deltas before treating them as zero, to
/// avoid ratio/cost churn from sub-epsilon floating point noise.
const RATIO_EPS: f64 = 1e-4;

/// The shared constant set both Knuth-Plass passes compute once per
/// paragraph.
#[derive(Debug, Clone, Copy)]
pub struct CostMetrics {
    pub min_ratio: f64,
    pub min_approx_ratio: f64,
    pub approx_hyphen_width: Abs,
    pub hyph_cost: f64,
    pub runt_cost: f64,
}

impl CostMetrics {
    pub fn compute(config: &Config) -> Self {
        let justify = config.justify;
        Self {
            min_ratio: if justify { -1.0 } else { 0.0 },
            min_approx_ratio: if justify { -0.5 } else { 0.0 },
            approx_hyphen_width: crate::units::Em::new(0.33).at(config.font_size),
            hyph_cost: 135.0 * config.costs.hyphenation,
            runt_cost: 100.0 * config.costs.runt,
        }
    }
}

/// The result of evaluating a candidate line.
#[derive(Debug, Clone, Copy)]
pub struct RatioAndCost {
    pub ratio: f64,
    pub cost: f64,
}

/// Whether a `delta` should be treated as exactly zero.
fn snap(delta: Abs) -> Abs {
    if delta.to_pt().abs() < RATIO_EPS { Abs::zero() } else { delta }
}

/// Compute the stretch/shrink ratio for a line of natural width `width`,
/// stretchability `stretch`, shrinkability `shrink`, against an available
/// width `available`, per §4.5's "Ratio" paragraph.
pub fn raw_ratio(
    width: Abs,
    stretch: Abs,
    shrink: Abs,
    available: Abs,
    justifiables: usize,
    font_size: Abs,
    metrics: &CostMetrics,
) -> f64 {
    let delta = snap(available - width);
    let adjustability = if delta >= Abs::zero() { stretch } else { shrink }.max(Abs::zero());

    // A zero-adjustability line (no stretch/shrink glyphs) with nonzero delta
    // divides out to +/-infinity rather than NaN; that's intentional, it's
    // what pushes a rigid overfull line below `min_ratio` into the heavy
    // badness branch below instead of reading as a perfect fit.
    let mut ratio = delta.to_pt() / adjustability.to_pt();
    if ratio.is_nan() {
        ratio = 0.0;
    }

    if ratio > 1.0 {
        // Over-stretching: spread the excess across the justifiable glyphs,
        // mixed in at a rate tied to half the font size.
        let excess = delta - adjustability;
        let denom = (justifiables.max(1) as f64) * (font_size.to_pt() / 2.0);
        if denom != 0.0 {
            ratio += excess.to_pt() / denom;
        }
    }

    ratio.clamp(metrics.min_ratio - 1.0, 10.0)
}

/// Compute the line's cost given its ratio and context, per §4.5's "Cost"
/// paragraph.
#[allow(clippy::too_many_arguments)]
pub fn raw_cost(
    ratio: f64,
    line: &Line,
    breakpoint: Breakpoint,
    unbreakable: bool,
    predecessor_dash: Option<Dash>,
    metrics: &CostMetrics,
) -> f64 {
    let badness = if ratio < metrics.min_ratio {
        1e6
    } else if breakpoint != Breakpoint::Mandatory || line.justify || ratio < 0.0 {
        100.0 * ratio.abs().powi(3)
    } else {
        0.0
    };

    let mut penalty = 0.0;

    if unbreakable && breakpoint == Breakpoint::Mandatory {
        penalty += metrics.runt_cost;
    }

    if let Breakpoint::Hyphen(before, after) = breakpoint {
        let steps = (5u32.saturating_sub(before as u32)) + (5u32.saturating_sub(after as u32));
        penalty += (1.0 + 0.15 * steps as f64) * metrics.hyph_cost;
    }

    if line.dash.is_some() && predecessor_dash.is_some() {
        penalty += metrics.hyph_cost;
    }

    (1.0 + badness + penalty).powi(2)
}

</content>
