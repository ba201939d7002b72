//! Selection of the smallest native unsigned integer holding a number of bits

use crate::NumBits;
use thiserror::Error;

/// Native unsigned integer widths that can be selected automatically
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Width {
    U8,
    U16,
    U32,
    U64,
}

/// Error returned when no native unsigned integer is wide enough
///
/// Wider encodings remain possible, but the representation must then be
/// supplied explicitly (e.g. `u128` or a custom integer type).
///
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("{required} bits do not fit in a 64-bit integer, a wider representation must be specified explicitly")]
pub struct TooWide {
    /// Number of bits that were asked for
    pub required: NumBits,
}

impl Width {
    /// Select the smallest width that holds `required` bits
    ///
    /// Zero bits fit in any integer and select `U8`.
    ///
    pub const fn select(required: NumBits) -> Result<Self, TooWide> {
        match required {
            0..=8 => Ok(Self::U8),
            9..=16 => Ok(Self::U16),
            17..=32 => Ok(Self::U32),
            33..=64 => Ok(Self::U64),
            _ => Err(TooWide { required }),
        }
    }

    /// Number of bits in integers of this width
    pub const fn bits(self) -> NumBits {
        match self {
            Self::U8 => u8::BITS,
            Self::U16 => u16::BITS,
            Self::U32 => u32::BITS,
            Self::U64 => u64::BITS,
        }
    }
}

/// Marker type carrying a bit count for type-level width selection
pub struct Bits<const N: NumBits>;

/// Type-level counterpart of `Width::select()`
///
/// Only implemented for bit counts in `1..=64`, so that asking for a wider
/// integer fails at compile time.
///
pub trait SelectUint {
    type Uint;
}

/// Smallest native unsigned integer holding `N` bits
///
/// This is the natural representation of an encoder for `D` fields of `F`
/// bits each, as in `MinUint<{ D * F }>`.
///
/// ```compile_fail
/// # use morton_lut::MinUint;
/// // No native integer is wider than 64 bits
/// let code: MinUint<65> = 0;
/// ```
///
pub type MinUint<const N: NumBits> = <Bits<N> as SelectUint>::Uint;

macro_rules! select_uint {
    ($uint:ty => $($bits:literal)*) => {
        $(
            impl SelectUint for Bits<$bits> {
                type Uint = $uint;
            }
        )*
    };
}

select_uint!(u8 => 1 2 3 4 5 6 7 8);
select_uint!(u16 => 9 10 11 12 13 14 15 16);
select_uint!(u32 => 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32);
select_uint!(u64 =>
    33 34 35 36 37 38 39 40 41 42 43 44 45 46 47 48
    49 50 51 52 53 54 55 56 57 58 59 60 61 62 63 64
);
