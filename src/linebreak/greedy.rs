//! Greedy (first-fit) line breaker (§4.4): builds lines eagerly, with one
//! step of lookback to avoid emitting an overfull line when a shorter
//! fitting attempt is available.

use crate::line::{make_line, Line};
use crate::linebreak::breakpoints::{breakpoints, Breakpoint};
use crate::prepare::Preparation;
use crate::hyphenate::Hyphenator;
use crate::units::Abs;

/// Break `p`'s text into lines, each at most `width` wide, using greedy
/// first-fit with one-step lookback.
pub fn linebreak_simple(p: &Preparation, hyphenator: &dyn Hyphenator, width: Abs) -> Vec<Line> {
    let mut lines = Vec::with_capacity(16);
    let mut start = 0;
    let mut last: Option<(Line, usize)> = None;

    breakpoints(p, hyphenator, |end, breakpoint| {
        let mut attempt = make_line(p, start, end, breakpoint);

        if !width.fits(attempt.width) {
            if let Some((last_attempt, last_end)) = last.take() {
                lines.push(last_attempt);
                start = last_end;
                attempt = make_line(p, start, end, breakpoint);
            }
        }

        if breakpoint == Breakpoint::Mandatory || !width.fits(attempt.width) {
            lines.push(attempt);
            start = end;
            last = None;
        } else {
            last = Some((attempt, end));
        }
    });

    if let Some((line, _)) = last {
        lines.push(line);
    }

    lines
}

</content>
