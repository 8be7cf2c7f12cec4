use num_traits::PrimInt;

/// Integer reading accepted by [`MedianFilter`](crate::MedianFilter).
///
/// Implemented for every primitive integer type. Floating point readings are
/// not supported; scale them to a fixed-point integer first.
pub trait Sample: PrimInt {
    /// Default stopper: the smallest representable value.
    fn default_stopper() -> Self {
        Self::min_value()
    }

    /// Lift a raw reading strictly above `stopper`.
    ///
    /// Readings at or below the stopper become `stopper + 1`. With the default
    /// stopper this only affects a reading equal to `min_value()`, e.g. a raw
    /// `0_u16` is reported as `1`.
    #[inline]
    fn above(self, stopper: Self) -> Self {
        if self > stopper {
            self
        } else {
            stopper.saturating_add(Self::one())
        }
    }
}

impl<T: PrimInt> Sample for T {}
