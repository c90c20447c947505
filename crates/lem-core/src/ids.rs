//! Strongly typed, zero-cost identifier wrappers.
//!
//! Room ids are dense indices assigned by the colony builder in declaration
//! order.  Ant ids are 1-based (`AntId(1)` is the first ant) because they
//! appear verbatim in the `L<ant>-<room>` move tokens.

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

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of a room in the colony's room table.
    pub struct RoomId(u32);
}

typed_id! {
    /// Identity of an ant.  Dense and 1-based.
    pub struct AntId(u32);
}

impl AntId {
    /// The first ant.
    pub const FIRST: AntId = AntId(1);

    /// The ant that follows `self` in assignment order.
    #[inline]
    pub fn next(self) -> AntId {
        AntId(self.0 + 1)
    }
}
