// crates/shared-kernel/src/value_objects/byte_size.rs
use std::{
    fmt,
    ops::{Add, AddAssign},
};

use serde::{Deserialize, Serialize};

/// Unit ladder used by [`ByteSize::to_scaled`], base 1024.
pub const UNITS: [&str; 7] = ["Bytes", "KB", "MB", "GB", "TB", "PB", "EB"];

const STEP: f64 = 1024.0;

/// Estimated byte footprint of a key or a group of keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ByteSize(u64);

impl ByteSize {
    #[inline]
    pub const fn new(bytes: u64) -> Self {
        Self(bytes)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn bytes(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Adds `rhs`, pinning at `u64::MAX` instead of wrapping.
    #[inline]
    #[must_use]
    pub const fn saturating_add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }

    /// Scales the size down the unit ladder and rounds to three decimals.
    ///
    /// Rounding happens here, before any display formatting, so two sizes
    /// that only differ past the third decimal of their unit compare equal.
    /// A `u64` tops out just under 16 EB, so the ladder cannot be overrun;
    /// the loop still stops at `EB`.
    pub fn to_scaled(self) -> ScaledSize {
        let mut value = self.0 as f64;
        let mut index = 0;
        while value >= STEP && index < UNITS.len() - 1 {
            value /= STEP;
            index += 1;
        }
        ScaledSize { value: round_to_thousandths(value), unit: UNITS[index] }
    }
}

fn round_to_thousandths(value: f64) -> f64 {
    (value * 1000.0).round_ties_even() / 1000.0
}

impl From<u64> for ByteSize {
    fn from(bytes: u64) -> Self {
        Self::new(bytes)
    }
}

impl From<ByteSize> for u64 {
    fn from(size: ByteSize) -> Self {
        size.bytes()
    }
}

impl Add for ByteSize {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.saturating_add(rhs)
    }
}

impl AddAssign for ByteSize {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.saturating_add(rhs);
    }
}

impl std::iter::Sum for ByteSize {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl fmt::Display for ByteSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{}", self.to_scaled())
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// A size expressed in a human unit, e.g. `1.5 KB`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledSize {
    pub value: f64,
    pub unit: &'static str,
}

impl ScaledSize {
    pub fn into_parts(self) -> (f64, &'static str) {
        (self.value, self.unit)
    }
}

impl fmt::Display for ScaledSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3} {}", self.value, self.unit)
    }
}
