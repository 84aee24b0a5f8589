//! The Frame sink (§6): the tree of positioned items this core produces.
//! Mirrors the teacher's `Frame`/`FrameItem`, trimmed to the item kinds this
//! core actually emits — text runs, opaque decoration shapes, and the two
//! math composite items.

use crate::geom::{Point, Size};
use crate::math::{LimitsLayout, ScriptLayout};
use crate::text::ShapedText;
use crate::units::Abs;

/// A stroke applied to a `Shape`'s outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub thickness: Abs,
}

/// Geometry for an opaque decoration shape. The core has no color/paint
/// model of its own (that's left to the caller, per the Non-goals around
/// color-space conversions) — a `Shape` only carries what this core needs to
/// compute: its outline and whether it's filled, stroked, or both.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    /// A line from the item's position to `position + to`.
    Line(Point),
    /// A rectangle of the given size, with an optional corner radius, anchored
    /// at the item's position.
    Rect(Size, Abs),
}

/// An opaque piece of geometry placed in a frame — a decoration's highlight
/// rectangle or line segment. Paint is left to the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shape {
    pub geometry: Geometry,
    pub stroke: Option<Stroke>,
    pub fill: bool,
}

impl Shape {
    pub fn line(to: Point, stroke: Stroke) -> Self {
        Self { geometry: Geometry::Line(to), stroke: Some(stroke), fill: false }
    }

    pub fn filled_rect(size: Size, radius: Abs) -> Self {
        Self { geometry: Geometry::Rect(size, radius), stroke: None, fill: true }
    }
}

/// A positioned item within a `FinalFrame`.
#[derive(Debug, Clone)]
pub enum FrameItem {
    /// A run of shaped text.
    Text(ShapedText),
    /// An opaque decoration shape (highlight rectangle, underline segment, etc).
    Shape(Shape),
    /// A base with optional superscript/subscript, as laid out by
    /// [`crate::math::layout_math_script`].
    MathScript {
        base: Box<FrameItem>,
        super_: Option<Box<FrameItem>>,
        sub: Option<Box<FrameItem>>,
        offsets: ScriptLayout,
    },
    /// A nucleus with optional upper/lower limits, as laid out by
    /// [`crate::math::layout_math_limits`].
    MathLimits {
        nucleus: Box<FrameItem>,
        upper: Option<Box<FrameItem>>,
        lower: Option<Box<FrameItem>>,
        offsets: LimitsLayout,
    },
    /// A nested frame, positioned as a single unit (e.g. an inline box).
    Group(FinalFrame),
}

/// The tree of positioned items this core produces for one laid-out region.
#[derive(Debug, Clone)]
pub struct FinalFrame {
    pub size: Size,
    /// Distance from the top of the frame down to its baseline.
    pub baseline: Abs,
    pub items: Vec<(Point, FrameItem)>,
}

impl FinalFrame {
    pub fn new(size: Size) -> Self {
        Self { size, baseline: size.y, items: Vec::new() }
    }

    pub fn with_baseline(size: Size, baseline: Abs) -> Self {
        Self { size, baseline, items: Vec::new() }
    }

    /// Inserts at the front of the item list (renders behind earlier items).
    pub fn prepend(&mut self, pos: Point, item: FrameItem) {
        self.items.insert(0, (pos, item));
    }

    /// Appends at the back of the item list (renders in front).
    pub fn push(&mut self, pos: Point, item: FrameItem) {
        self.items.push((pos, item));
    }

    /// Prepends a batch at once, preserving the batch's own order.
    pub fn prepend_multiple(&mut self, items: impl IntoIterator<Item = (Point, FrameItem)>) {
        let mut new_items: Vec<_> = items.into_iter().collect();
        new_items.append(&mut self.items);
        self.items = new_items;
    }
}
