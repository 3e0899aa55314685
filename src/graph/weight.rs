use num_traits::{PrimInt, Signed};
use std::{fmt::Debug, fmt::Display, hash::Hash};

/// The default weight lane, a 16-bit signed integer.
pub type DefaultWeight = i16;

/// Edge weights: bounded signed integers.
///
/// The maximal representable value is reserved as the sentinel "unreachable".
/// It shows up in distance matrices for pairs without any path,
/// and it is never accepted as the weight of an edge.
pub trait Weight: PrimInt + Signed + Hash + Debug + Display + Default {
    /// The sentinel for "no path".
    fn unreachable() -> Self {
        Self::max_value()
    }

    fn is_unreachable(&self) -> bool {
        *self == Self::max_value()
    }

    /// Whether the value may be stored as the weight of an edge.
    fn is_valid_edge_weight(&self) -> bool {
        *self > Self::zero() && !self.is_unreachable()
    }
}

macro_rules! impl_weight {
    ($($t:ty),*) => {
        $(impl Weight for $t {})*
    };
}

impl_weight!(i8, i16, i32, i64, i128, isize);
