//! Threshold comparators.
//!
//! A sample is *inside* the surface when it passes the active threshold test.
//! A [`ThresholdSpec`] always carries two halves; when they are identical only
//! one comparison is made per sample.

use crate::error::CoreError;

/// How a sample is compared against a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Comparator {
    /// `value == threshold`
    #[default]
    Equal,
    /// `value < threshold`
    LessThan,
    /// `value <= threshold`
    LessThanEq,
    /// `value > threshold`
    GreaterThan,
    /// `value >= threshold`
    GreaterThanEq,
}

impl Comparator {
    /// Raw comparator code (0 = EQUAL .. 4 = GREATER_THAN_EQ).
    #[inline]
    pub const fn as_raw(self) -> u8 {
        match self {
            Comparator::Equal => 0,
            Comparator::LessThan => 1,
            Comparator::LessThanEq => 2,
            Comparator::GreaterThan => 3,
            Comparator::GreaterThanEq => 4,
        }
    }

    /// Decode a raw comparator code.
    pub const fn try_from_raw(raw: u8) -> Result<Self, CoreError> {
        match raw {
            0 => Ok(Comparator::Equal),
            1 => Ok(Comparator::LessThan),
            2 => Ok(Comparator::LessThanEq),
            3 => Ok(Comparator::GreaterThan),
            4 => Ok(Comparator::GreaterThanEq),
            _ => Err(CoreError::InvalidComparator { raw }),
        }
    }

    /// Apply the comparison.
    #[inline]
    pub fn test(self, value: f64, threshold: f64) -> bool {
        match self {
            Comparator::Equal => value == threshold,
            Comparator::LessThan => value < threshold,
            Comparator::LessThanEq => value <= threshold,
            Comparator::GreaterThan => value > threshold,
            Comparator::GreaterThanEq => value >= threshold,
        }
    }
}

/// A comparator paired with its threshold value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold {
    /// The comparison to apply.
    pub op: Comparator,
    /// The value samples are compared against.
    pub value: f64,
}

impl Threshold {
    /// Create a new threshold.
    #[inline]
    pub const fn new(op: Comparator, value: f64) -> Self {
        Self { op, value }
    }

    /// Whether `sample` passes this threshold.
    #[inline]
    pub fn test(&self, sample: f64) -> bool {
        self.op.test(sample, self.value)
    }

    /// Identical op and bitwise-identical value.
    #[inline]
    fn same_as(&self, other: &Self) -> bool {
        self.op == other.op && self.value.to_bits() == other.value.to_bits()
    }
}

/// The inclusion test used to classify every cube corner.
///
/// Nothing stops `low` from exceeding `high`; with suitable comparators that
/// still describes a valid inclusion test, and a pair that can never be
/// satisfied simply yields an empty surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdSpec {
    /// The lower half of the test.
    pub low: Threshold,
    /// The upper half of the test; also the only half used when both are identical.
    pub high: Threshold,
}

impl ThresholdSpec {
    /// A single comparison applied to every sample.
    #[inline]
    pub const fn single(op: Comparator, value: f64) -> Self {
        let t = Threshold::new(op, value);
        Self { low: t, high: t }
    }

    /// Two comparisons that must both pass.
    #[inline]
    pub const fn band(low_op: Comparator, low: f64, high_op: Comparator, high: f64) -> Self {
        Self {
            low: Threshold::new(low_op, low),
            high: Threshold::new(high_op, high),
        }
    }

    /// Whether both halves are identical, enabling the single-comparison path.
    #[inline]
    pub fn is_single(&self) -> bool {
        self.low.same_as(&self.high)
    }

    /// Whether `sample` is inside the surface under this spec.
    #[inline]
    pub fn test(&self, sample: f64) -> bool {
        if self.is_single() {
            self.high.test(sample)
        } else {
            self.low.test(sample) && self.high.test(sample)
        }
    }
}

impl Default for ThresholdSpec {
    fn default() -> Self {
        Self::single(Comparator::Equal, 1.0)
    }
}
