//! Strongly typed identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  `SpotId` ordering is the
//! tie-break used by the selection policies, so it must stay the natural
//! integer order.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

typed_id! {
    /// Index of a parking spot in `[0, N)`.
    pub struct SpotId(u32);
}

typed_id! {
    /// Sequential arrival counter.  The first arrival of a run is `ArrivalId(1)`;
    /// rejected arrivals still consume an id.
    pub struct ArrivalId(u64);
}

impl ArrivalId {
    /// The id handed out after `self`.
    #[inline]
    pub fn next(self) -> ArrivalId {
        ArrivalId(self.0 + 1)
    }
}
