//! The crate's closed error type. Almost everything the source treats as a
//! policy outcome (approximation-infeasibility, overfull lines, hyphenator
//! absence, empty shaper output) is modeled as data, never as an `Err` —
//! only genuinely invariant-violating caller input reaches here.

use thiserror::Error;

/// Errors reported at the public API boundary for invariant-violating
/// inputs. The core never recovers partially from these: it fails fast.
///
/// A "breakpoint beyond text" case is not a variant here: every breakpoint
/// offset `breakpoints()` emits is derived by scanning `Preparation::text`
/// itself (already validated to be covered by the items), and the one place
/// a pluggable `Hyphenator` could in principle return a bogus split, the
/// char-count-to-byte-offset conversion in `linebreak::breakpoints::emit_hyphens`
/// walks the word's own `chars()` rather than trusting the hyphenator's
/// count, so it self-clamps to the word's end instead of escaping it. There
/// is no call path through the public API that can produce an
/// out-of-bounds breakpoint, so no variant is needed to report one.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LayoutError {
    #[error(
        "prepared items cover {covered} bytes but the text is {expected} bytes long"
    )]
    ItemsDoNotCoverText { covered: usize, expected: usize },

    #[error("font size must be a finite, positive length")]
    NonFiniteFontSize,
}

pub type Result<T> = std::result::Result<T, LayoutError>;
</content>
