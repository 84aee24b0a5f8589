//! The prepared-item model: the tagged union line-breaking operates over.

use crate::math::fragment::MathFragment;
use crate::text::ShapedText;
use crate::units::{Abs, Fr};

/// A single prepared inline item. Line breaking never inspects anything
/// about an item beyond what this type exposes: its natural width, whether
/// it counts as "an item" for unbreakable-line detection, and its textual
/// content for introspection.
#[derive(Debug, Clone)]
pub enum Item {
    /// A run of shaped text.
    Text(ShapedText),
    /// Fixed spacing. `weak` spacing at a line boundary is dropped rather
    /// than rendered (e.g. spacing produced by a paragraph's own indent
    /// logic, not user content).
    Absolute(Abs, bool),
    /// Spacing that grows to fill leftover space, weighted by `Fr`.
    Fractional(Fr),
    /// An embedded frame of fixed width (an inline image, a box, ...).
    InlineFrame(Abs),
    /// Zero-width metadata, invisible to layout but preserved in item order
    /// (e.g. a bookmark or introspection anchor).
    Tag(String),
    /// Raw text with no shaping (e.g. an unshaped placeholder run).
    Skip(String),
    /// A math fragment embedded in text flow.
    Math(MathFragment),
}

impl Item {
    /// The natural (unadjusted) width this item contributes to a line.
    pub fn natural_width(&self) -> Abs {
        match self {
            Item::Text(shaped) => shaped.width(),
            Item::Absolute(amount, _) => *amount,
            Item::Fractional(_) => Abs::zero(),
            Item::InlineFrame(width) => *width,
            Item::Tag(_) => Abs::zero(),
            Item::Skip(_) => Abs::zero(),
            Item::Math(frag) => frag.width(),
        }
    }

    /// The textual content of this item, for introspection/accessibility.
    pub fn textual(&self) -> &str {
        match self {
            Item::Text(shaped) => &shaped.text,
            Item::Skip(text) => text,
            Item::Tag(text) => text,
            _ => "",
        }
    }

    /// Whether this item participates in line measurement as "an item"
    /// (used by the greedy breaker's unbreakable-line rule and the
    /// Knuth-Plass runt detection).
    pub fn is_item(&self) -> bool {
        !matches!(self, Item::Tag(_))
    }

    /// The fractional weight of this item, if any.
    pub fn fr(&self) -> Option<Fr> {
        match self {
            Item::Fractional(fr) => Some(*fr),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&ShapedText> {
        match self {
            Item::Text(shaped) => Some(shaped),
            _ => None,
        }
    }

    pub fn as_text_mut(&mut self) -> Option<&mut ShapedText> {
        match self {
            Item::Text(shaped) => Some(shaped),
            _ => None,
        }
    }
}
</content>
