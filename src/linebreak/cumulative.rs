//! The cumulative-vector trick: O(1) per-byte-range metric sums for the
//! approximate Knuth-Plass pass.

use std::ops::{Add, Sub};

use crate::units::Numeric;
use crate::Range;

/// Types usable as a `CumulativeVec` metric: summable and with a defined
/// zero, matching the `Numeric` bound used elsewhere in the units module.
pub trait Metric: Copy + Add<Output = Self> + Sub<Output = Self> + Numeric {}
impl<T: Copy + Add<Output = Self> + Sub<Output = Self> + Numeric> Metric for T {}

/// An accumulative array of a metric, supporting O(1) range-sum queries.
pub struct CumulativeVec<T> {
    total: T,
    summed: Vec<T>,
}

impl<T: Metric> CumulativeVec<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        let total = T::zero();
        let mut summed = Vec::with_capacity(capacity);
        summed.push(total);
        Self { total, summed }
    }

    /// Back-fill to cover byte length `len` with the current running total
    /// (for zero-width items whose end exceeds previously pushed content).
    pub fn adjust(&mut self, len: usize) {
        self.summed.resize(len, self.total);
    }

    /// Extend by `byte_len` slots, each carrying the new running total.
    pub fn push(&mut self, byte_len: usize, metric: T) {
        self.total = self.total + metric;
        for _ in 0..byte_len {
            self.summed.push(self.total);
        }
    }

    /// `estimate(start, end) = get(end) - get(start)`.
    pub fn estimate(&self, range: Range) -> T {
        self.get(range.end) - self.get(range.start)
    }

    pub fn get(&self, index: usize) -> T {
        match index.checked_sub(1) {
            None => T::zero(),
            Some(i) => self.summed[i],
        }
    }
}

</content>
