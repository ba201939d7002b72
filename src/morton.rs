//! Lookup-table based encoder for the N-dimensional Morton curve

use crate::{
    config::Config,
    lut::{LookupTable, LutValue},
    width::{MinUint, Width},
    NumBits,
};
use core::{fmt::Debug, marker::PhantomData};
use num_traits::{AsPrimitive, PrimInt, Unsigned};

/// Unsigned integer type used for encoder inputs and results
///
/// Implemented for all native unsigned integers. Custom wide integers may
/// implement it too, as long as they behave like primitive unsigned integers.
///
pub trait Representation: PrimInt + Unsigned + AsPrimitive<usize> + Debug {
    /// Number of bits of the integer
    const BITS: NumBits;

    /// Conversion from a lookup table entry
    ///
    /// The encoder only calls this with values that fit in `Self`.
    ///
    fn from_lut_value(value: u64) -> Self;
}

macro_rules! impl_representation {
    ($($uint:ty)*) => {
        $(
            impl Representation for $uint {
                const BITS: NumBits = <$uint>::BITS;

                #[inline(always)]
                fn from_lut_value(value: u64) -> Self {
                    value as Self
                }
            }
        )*
    };
}

impl_representation!(u8 u16 u32 u64 u128 usize);

/// Morton encoder for `D` fields of `F` bits, spreading `L` bits per lookup
///
/// A Morton code combines D integers into one by interleaving their bits. With
/// three fields with bit patterns [ x4 x3 x2 x1 ], [ y4 y3 y2 y1 ] and
/// [ z4 z3 z2 z1 ], the resulting code is [ z4 y4 x4 z3 y3 x3 ... z1 y1 x1 ].
///
/// Instead of moving field bits one at a time, this encoder splits each field
/// into `ceil(F / L)` chunks of `L` bits, and looks up the spread form of each
/// chunk in a table of `2^L` entries that is computed once at construction
/// time. `L` is therefore a pure performance knob: a larger value means fewer
/// lookups per encoding but an exponentially larger table, which may not fit
/// in CPU caches anymore.
///
/// `T` is the type of both the inputs and the result. It must hold `D * F`
/// bits, [`MinUint`] picks the narrowest native integer that does so.
///
/// Invalid configurations are rejected at compile time:
///
/// ```compile_fail
/// # use morton_lut::LutEncoder;
/// // 'LutBits' must be <= 'FieldBits'
/// let encoder = LutEncoder::<u64, 3, 8, 9>::new();
/// ```
///
/// ```compile_fail
/// # use morton_lut::LutEncoder;
/// // The representation must hold 'Dimensions' * 'FieldBits' bits
/// let encoder = LutEncoder::<u32, 3, 11, 4>::new();
/// ```
///
#[derive(Clone, Debug)]
pub struct LutEncoder<T, const D: usize, const F: NumBits, const L: NumBits> {
    lut: LookupTable,
    repr: PhantomData<fn(T) -> T>,
}

impl<T: Representation, const D: usize, const F: NumBits, const L: NumBits> LutEncoder<T, D, F, L> {
    /// Configuration of this encoder
    pub const CONFIG: Config = Config {
        dimensions: D,
        field_bits: F,
        lut_bits: L,
        repr_bits: T::BITS,
    };

    // Referencing this constant fails compilation on invalid configurations
    const VALID: () = match Self::CONFIG.validate() {
        Ok(()) => (),
        Err(error) => panic!("{}", error.message()),
    };

    /// Number of chunks each field is split into (= lookups per field)
    pub const CHUNK_COUNT: NumBits = Self::CONFIG.chunk_count();

    /// Number of lookup table entries
    pub const LUT_SIZE: usize = Self::CONFIG.lut_size();

    /// Integer width of the lookup table entries
    pub const LUT_WIDTH: Width = match Self::CONFIG.lut_width() {
        Some(width) => width,
        None => panic!("'LutBits' * 'Dimensions' must be <= 64"),
    };

    const CHUNK_MASK: u64 = Self::CONFIG.chunk_mask();

    // Distance between the spread forms of two consecutive chunks of a field
    const CHUNK_STRIDE: usize = D * L as usize;

    /// Build the lookup table and the associated encoder
    pub fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::VALID;
        Self {
            lut: LookupTable::build(Self::LUT_WIDTH, L, D),
            repr: PhantomData,
        }
    }

    /// Mask of the field bits that `encode()` takes into account
    ///
    /// Inputs whose high-order bits may be set must be ANDed with this mask
    /// before being encoded.
    ///
    pub fn input_mask() -> T {
        #[allow(clippy::let_unit_value)]
        let () = Self::VALID;
        !T::zero() >> (T::BITS - F) as usize
    }

    /// Integer width of the lookup table entries
    pub fn lut_width(&self) -> Width {
        self.lut.width()
    }

    /// Lookup table used by this encoder
    pub fn lut(&self) -> &LookupTable {
        &self.lut
    }

    /// Compute the Morton code of some fields
    ///
    /// The least significant bit of field `k` ends up at bit `k` of the
    /// result, and the following bits of that field are then found every `D`
    /// bits. For example, with three 8-bit fields:
    ///
    /// encode([xxxxxxxx, yyyyyyyy, zzzzzzzz]) = zyxzyxzyxzyxzyxzyxzyxzyx
    ///
    /// Fields must not have any bit set beyond their `F` low-order bits, as
    /// these are not masked out and would corrupt the result. Use
    /// `input_mask()` to clear them if needed.
    ///
    #[inline]
    pub fn encode(&self, fields: [T; D]) -> T {
        match &self.lut {
            LookupTable::U8(entries) => Self::encode_with(entries, fields),
            LookupTable::U16(entries) => Self::encode_with(entries, fields),
            LookupTable::U32(entries) => Self::encode_with(entries, fields),
            LookupTable::U64(entries) => Self::encode_with(entries, fields),
        }
    }

    #[inline(always)]
    fn encode_with<V: LutValue>(lut: &[V], fields: [T; D]) -> T {
        // Start from the last field and make room for each previous one:
        // Iteration 0: [  0  0 z2  0  0 z1 ]
        // Iteration 1: [  0 z2 y2  0 z1 y1 ]
        // Iteration 2: [ z2 y2 x2 z1 y1 x1 ]
        fields
            .iter()
            .rev()
            .fold(T::zero(), |code, &field| {
                (code << 1) | Self::spread_field(lut, field)
            })
    }

    #[inline(always)]
    fn spread_field<V: LutValue>(lut: &[V], field: T) -> T {
        let chunk_mask = T::from_lut_value(Self::CHUNK_MASK);
        let lookup = |chunk_idx: NumBits| {
            let chunk = (field >> (chunk_idx * L) as usize) & chunk_mask;
            T::from_lut_value(lut[chunk.as_()].into())
        };

        // Start from the most significant chunk, and make room for each less
        // significant chunk by shifting the previous result by one stride
        let mut chunk_idx = Self::CHUNK_COUNT - 1;
        let mut spread = lookup(chunk_idx);
        while chunk_idx > 0 {
            chunk_idx -= 1;
            spread = (spread << Self::CHUNK_STRIDE) | lookup(chunk_idx);
        }
        spread
    }
}

impl<T: Representation, const D: usize, const F: NumBits, const L: NumBits> Default
    for LutEncoder<T, D, F, L>
{
    fn default() -> Self {
        Self::new()
    }
}

/// 2D encoder for 16-bit fields, with a 32-bit result
pub type LutEncoder2D32 = LutEncoder<MinUint<32>, 2, 16, 8>;

/// 2D encoder for 32-bit fields, with a 64-bit result
pub type LutEncoder2D64 = LutEncoder<MinUint<64>, 2, 32, 11>;

/// 3D encoder for 10-bit fields, with a 32-bit result
pub type LutEncoder3D32 = LutEncoder<MinUint<32>, 3, 10, 10>;

/// 3D encoder for 21-bit fields, with a 64-bit result
pub type LutEncoder3D64 = LutEncoder<MinUint<64>, 3, 21, 11>;
