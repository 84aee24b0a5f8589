//! Minimal 2D geometry: points and sizes in layout space (Y grows downward).

use std::ops::{Add, Sub};

use crate::units::Abs;

#[derive(Default, Debug, Copy, Clone, PartialEq)]
pub struct Point {
    pub x: Abs,
    pub y: Abs,
}

impl Point {
    pub const fn new(x: Abs, y: Abs) -> Self {
        Self { x, y }
    }

    pub const fn zero() -> Self {
        Self { x: Abs::zero(), y: Abs::zero() }
    }

    pub const fn with_x(x: Abs) -> Self {
        Self { x, y: Abs::zero() }
    }

    pub const fn with_y(y: Abs) -> Self {
        Self { x: Abs::zero(), y }
    }
}

impl Add for Point {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[derive(Default, Debug, Copy, Clone, PartialEq)]
pub struct Size {
    pub x: Abs,
    pub y: Abs,
}

impl Size {
    pub const fn new(x: Abs, y: Abs) -> Self {
        Self { x, y }
    }

    pub const fn zero() -> Self {
        Self { x: Abs::zero(), y: Abs::zero() }
    }
}

/// An axis-aligned bounding box in font-design units (before scaling).
#[derive(Default, Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl Rect {
    pub fn union(self, other: Self) -> Self {
        Self {
            x_min: self.x_min.min(other.x_min),
            y_min: self.y_min.min(other.y_min),
            x_max: self.x_max.max(other.x_max),
            y_max: self.y_max.max(other.y_max),
        }
    }
}
</content>
