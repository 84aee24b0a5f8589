//! The Knuth-Plass dynamic-programming optimizer (§4.5): an approximate pass
//! establishes a sound upper bound on total cost in O(1)-per-candidate time
//! via cumulative vectors, then a bounded exact pass searches the full space
//! with that bound pruning away hopeless predecessors.

use log::{debug, trace};

use crate::config::Config;
use crate::hyphenate::Hyphenator;
use crate::item::Item;
use crate::line::{make_line, Dash, Line};
use crate::linebreak::breakpoints::{breakpoints, Breakpoint};
use crate::linebreak::cost::{raw_cost, raw_ratio, CostMetrics};
use crate::linebreak::cumulative::CumulativeVec;
use crate::prepare::Preparation;
use crate::units::Abs;
use crate::Range;

/// Floating-point slack for bound comparisons, preventing path churn from
/// ties (§4.5).
const BOUND_EPS: f64 = 1e-3;

/// Break `p`'s text into lines optimizing total paragraph cost.
pub fn linebreak_optimized(
    p: &Preparation,
    hyphenator: &dyn Hyphenator,
    width: Abs,
) -> Vec<Line> {
    let metrics = CostMetrics::compute(&p.config);
    let upper_bound = linebreak_optimized_approximate(p, hyphenator, width, &metrics);
    debug!("knuth-plass: approximate pass bound = {upper_bound}");
    let lines = linebreak_optimized_bounded(p, hyphenator, width, &metrics, upper_bound);
    debug!("knuth-plass: exact pass produced {} lines", lines.len());
    lines
}

struct BoundedEntry {
    pred: usize,
    total: f64,
    line: Line,
    end: usize,
}

/// The exact pass: a dynamic-programming table over breakpoints, pruned by
/// `upper_bound`.
fn linebreak_optimized_bounded(
    p: &Preparation,
    hyphenator: &dyn Hyphenator,
    width: Abs,
    metrics: &CostMetrics,
    upper_bound: f64,
) -> Vec<Line> {
    let mut table = vec![BoundedEntry { pred: 0, total: 0.0, line: Line::empty(), end: 0 }];

    let mut active = 0;
    let mut prev_end = 0;

    breakpoints(p, hyphenator, |end, breakpoint| {
        let mut best: Option<BoundedEntry> = None;
        let mut line_lower_bound: Option<f64> = None;

        for pred_index in active..table.len() {
            let start = table[pred_index].end;
            let unbreakable = prev_end == start;

            if let Some(lower) = line_lower_bound {
                if table[pred_index].total + lower > upper_bound + BOUND_EPS {
                    trace!(
                        "knuth-plass: pruning predecessor {pred_index} at breakpoint {end} (lower bound {lower} exceeds remaining budget)"
                    );
                    continue;
                }
            }

            let attempt = make_line(p, start, end, breakpoint);
            let ratio = line_ratio(p, metrics, width, &attempt);
            let predecessor_dash = table[pred_index].line.dash;
            let line_cost = raw_cost(ratio, &attempt, breakpoint, unbreakable, predecessor_dash, metrics);

            if ratio < metrics.min_ratio && active == pred_index {
                active += 1;
            }

            let total = table[pred_index].total + line_cost;

            if ratio > 0.0 && line_lower_bound.is_none() && !attempt.has_negative_width_items() {
                line_lower_bound = Some(line_cost);
            }

            if total > upper_bound + BOUND_EPS {
                trace!(
                    "knuth-plass: pruning predecessor {pred_index} at breakpoint {end} (total {total} exceeds bound {upper_bound})"
                );
                continue;
            }

            if best.as_ref().map_or(true, |b| b.total >= total) {
                best = Some(BoundedEntry { pred: pred_index, total, line: attempt, end });
            }
        }

        if breakpoint == Breakpoint::Mandatory {
            active = table.len();
        }

        table.extend(best);
        prev_end = end;
    });

    let mut lines = Vec::with_capacity(16);
    let mut idx = table.len() - 1;

    if table[idx].end != p.text.len() {
        return linebreak_optimized_bounded(p, hyphenator, width, metrics, f64::INFINITY);
    }

    while idx != 0 {
        table.truncate(idx + 1);
        let entry = table.pop().unwrap();
        lines.push(entry.line);
        idx = entry.pred;
    }

    lines.reverse();
    lines
}

struct ApproxEntry {
    pred: usize,
    total: f64,
    end: usize,
    unbreakable: bool,
    breakpoint: Breakpoint,
}

/// Cumulative-vector estimates of width/stretch/shrink/justifiable-count
/// over the paragraph's byte range, per §4.6.
struct Estimates {
    widths: CumulativeVec<Abs>,
    stretchability: CumulativeVec<Abs>,
    shrinkability: CumulativeVec<Abs>,
    justifiables: CumulativeVec<usize>,
}

impl Estimates {
    fn compute(p: &Preparation) -> Self {
        let cap = p.text.len();
        let mut widths = CumulativeVec::with_capacity(cap);
        let mut stretchability = CumulativeVec::with_capacity(cap);
        let mut shrinkability = CumulativeVec::with_capacity(cap);
        let mut justifiables = CumulativeVec::with_capacity(cap);

        for (i, item) in p.items.iter().enumerate() {
            let start = p.item_starts[i];
            let range: Range = start..start + item.textual().len();

            if let Item::Text(shaped) = item {
                for g in &shaped.glyphs {
                    let byte_len = g.range.len();
                    let stretch = g.stretchability().0 + g.stretchability().1;
                    let shrink = g.shrinkability().0 + g.shrinkability().1;
                    widths.push(byte_len, g.x_advance.at(shaped.size));
                    stretchability.push(byte_len, stretch.at(shaped.size));
                    shrinkability.push(byte_len, shrink.at(shaped.size));
                    justifiables.push(byte_len, g.is_justifiable() as usize);
                }
            } else {
                let len = range.len();
                widths.push(len, item.natural_width());
                stretchability.push(len, Abs::zero());
                shrinkability.push(len, Abs::zero());
                justifiables.push(len, 0);
            }

            widths.adjust(range.end);
            stretchability.adjust(range.end);
            shrinkability.adjust(range.end);
            justifiables.adjust(range.end);
        }

        Self { widths, stretchability, shrinkability, justifiables }
    }
}

fn line_ratio(p: &Preparation, metrics: &CostMetrics, width: Abs, line: &Line) -> f64 {
    raw_ratio(
        line.width,
        line.stretchability(),
        line.shrinkability(),
        width,
        line.justifiables(),
        p.config.font_size,
        metrics,
    )
}

/// The approximate pass: Knuth-Plass using O(1) cumulative-vector range
/// estimates, whose retraced exact cost becomes the exact pass's pruning
/// bound.
fn linebreak_optimized_approximate(
    p: &Preparation,
    hyphenator: &dyn Hyphenator,
    width: Abs,
    metrics: &CostMetrics,
) -> f64 {
    let estimates = Estimates::compute(p);

    let mut table = vec![ApproxEntry {
        pred: 0,
        total: 0.0,
        end: 0,
        unbreakable: false,
        breakpoint: Breakpoint::Mandatory,
    }];
    let mut active = 0;
    let mut prev_end = 0;

    breakpoints(p, hyphenator, |end, breakpoint| {
        let mut best: Option<ApproxEntry> = None;

        for pred_index in active..table.len() {
            let start = table[pred_index].end;
            let unbreakable = prev_end == start;
            let justify = p.config.justify && breakpoint != Breakpoint::Mandatory;
            let consecutive_dash = table[pred_index].breakpoint.is_hyphen() && breakpoint.is_hyphen();

            let trimmed_end = start + p.text[start..end].trim_end().len();
            let approx_width = estimates.widths.estimate(start..trimmed_end)
                + if breakpoint.is_hyphen() { metrics.approx_hyphen_width } else { Abs::zero() };

            let ratio = raw_ratio(
                approx_width,
                estimates.stretchability.estimate(start..trimmed_end),
                estimates.shrinkability.estimate(start..trimmed_end),
                width,
                estimates.justifiables.estimate(start..trimmed_end),
                p.config.font_size,
                &approx_metrics(metrics),
            );

            let line_cost = raw_cost_approx(ratio, breakpoint, justify, unbreakable, consecutive_dash, metrics);

            if ratio < metrics.min_approx_ratio && active == pred_index {
                active += 1;
            }

            let total = table[pred_index].total + line_cost;

            if best.as_ref().map_or(true, |b| b.total >= total) {
                best = Some(ApproxEntry { pred: pred_index, total, end, unbreakable, breakpoint });
            }
        }

        if breakpoint == Breakpoint::Mandatory {
            active = table.len();
        }

        table.extend(best);
        prev_end = end;
    });

    let mut indices = Vec::with_capacity(16);
    let mut idx = table.len() - 1;
    while idx != 0 {
        indices.push(idx);
        idx = table[idx].pred;
    }

    let mut pred = Line::empty();
    let mut start = 0;
    let mut exact = 0.0;

    for idx in indices.into_iter().rev() {
        let end = table[idx].end;
        let breakpoint = table[idx].breakpoint;
        let unbreakable = table[idx].unbreakable;

        let attempt = make_line(p, start, end, breakpoint);
        let ratio = line_ratio(p, metrics, width, &attempt);

        if ratio < metrics.min_ratio {
            return f64::INFINITY;
        }

        let predecessor_dash: Option<Dash> = pred.dash;
        let cost = raw_cost(ratio, &attempt, breakpoint, unbreakable, predecessor_dash, metrics);

        pred = attempt;
        start = end;
        exact += cost;
    }

    exact
}

/// A `CostMetrics` with `min_ratio` swapped for the looser approximate-pass
/// threshold, since approximate estimates produce spuriously overfull lines
/// more often than exact ones.
fn approx_metrics(metrics: &CostMetrics) -> CostMetrics {
    CostMetrics { min_ratio: metrics.min_approx_ratio, ..*metrics }
}

#[allow(clippy::too_many_arguments)]
fn raw_cost_approx(
    ratio: f64,
    breakpoint: Breakpoint,
    justify: bool,
    unbreakable: bool,
    consecutive_dash: bool,
    metrics: &CostMetrics,
) -> f64 {
    let badness = if ratio < metrics.min_approx_ratio {
        1e6
    } else if breakpoint != Breakpoint::Mandatory || justify || ratio < 0.0 {
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
    if consecutive_dash {
        penalty += metrics.hyph_cost;
    }

    (1.0 + badness + penalty).powi(2)
}

</content>
