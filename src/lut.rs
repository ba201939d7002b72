//! Lookup tables mapping chunks of field bits to their spread form

use crate::{bits, width::Width, NumBits};
use core::fmt::Debug;

/// Unsigned integer type that can store lookup table entries
pub trait LutValue: Copy + Debug + Into<u64> + 'static {
    /// Truncating conversion from a spread bit pattern
    fn from_spread(spread: u64) -> Self;
}

macro_rules! impl_lut_value {
    ($($uint:ty)*) => {
        $(
            impl LutValue for $uint {
                #[inline(always)]
                fn from_spread(spread: u64) -> Self {
                    spread as Self
                }
            }
        )*
    };
}

impl_lut_value!(u8 u16 u32 u64);

/// Table of the spread form of every `lut_bits`-bit integer
///
/// Entry `i` holds `bits::spread(i, lut_bits, dims)`. Entries are stored in
/// the narrowest integer type that holds `lut_bits * dims` bits, which keeps
/// the table as cache-friendly as possible.
///
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LookupTable {
    U8(Box<[u8]>),
    U16(Box<[u16]>),
    U32(Box<[u32]>),
    U64(Box<[u64]>),
}

impl LookupTable {
    /// Build the lookup table of a certain configuration
    ///
    /// `width` must be able to hold `lut_bits * dims` bits, and the table
    /// must be addressable, i.e. `lut_bits < usize::BITS`.
    ///
    pub fn build(width: Width, lut_bits: NumBits, dims: usize) -> Self {
        debug_assert!(lut_bits as usize * dims <= width.bits() as usize);
        log::debug!(
            "Building {}-entry {:?} lookup table spreading {} bits over {} dimensions",
            1usize << lut_bits,
            width,
            lut_bits,
            dims
        );
        match width {
            Width::U8 => Self::U8(build_entries(lut_bits, dims)),
            Width::U16 => Self::U16(build_entries(lut_bits, dims)),
            Width::U32 => Self::U32(build_entries(lut_bits, dims)),
            Width::U64 => Self::U64(build_entries(lut_bits, dims)),
        }
    }

    /// Integer width of the table entries
    pub fn width(&self) -> Width {
        match self {
            Self::U8(_) => Width::U8,
            Self::U16(_) => Width::U16,
            Self::U32(_) => Width::U32,
            Self::U64(_) => Width::U64,
        }
    }

    /// Number of table entries
    pub fn len(&self) -> usize {
        match self {
            Self::U8(entries) => entries.len(),
            Self::U16(entries) => entries.len(),
            Self::U32(entries) => entries.len(),
            Self::U64(entries) => entries.len(),
        }
    }

    /// Truth that the table has no entries (never the case once built)
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read a table entry, if `index` is in bounds
    pub fn get(&self, index: usize) -> Option<u64> {
        match self {
            Self::U8(entries) => entries.get(index).copied().map(Into::into),
            Self::U16(entries) => entries.get(index).copied().map(Into::into),
            Self::U32(entries) => entries.get(index).copied().map(Into::into),
            Self::U64(entries) => entries.get(index).copied(),
        }
    }
}

// Every entry only depends on its own index
fn build_entries<V: LutValue>(lut_bits: NumBits, dims: usize) -> Box<[V]> {
    (0..(1u64 << lut_bits))
        .map(|chunk| V::from_spread(bits::spread(chunk, lut_bits, dims)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn build(dims: usize, lut_bits: NumBits) -> LookupTable {
        let config = Config {
            dimensions: dims,
            field_bits: lut_bits,
            lut_bits,
            repr_bits: 64,
        };
        assert_eq!(config.validate(), Ok(()));
        let width = config.lut_width().unwrap();
        LookupTable::build(width, lut_bits, dims)
    }

    #[test]
    fn entries() {
        for lut_bits in 1..=8 {
            for dims in 1..=(64 / lut_bits as usize) {
                let table = build(dims, lut_bits);
                assert_eq!(table.len(), 1 << lut_bits);
                assert!(!table.is_empty());
                for index in 0..table.len() {
                    assert_eq!(
                        table.get(index),
                        Some(bits::spread(index as u64, lut_bits, dims)),
                        "Unexpected entry {} in {}-bit lookup table for {} dimensions",
                        index,
                        lut_bits,
                        dims
                    );
                }
                assert_eq!(table.get(table.len()), None);
            }
        }
    }

    #[test]
    fn narrowest_storage() {
        assert_eq!(build(1, 8).width(), Width::U8);
        assert_eq!(build(2, 4).width(), Width::U8);
        assert_eq!(build(3, 3).width(), Width::U16);
        assert_eq!(build(2, 8).width(), Width::U16);
        assert_eq!(build(3, 10).width(), Width::U32);
        assert_eq!(build(3, 11).width(), Width::U64);
        assert_eq!(build(64, 1).width(), Width::U64);
    }

    #[test]
    fn three_dimensional() {
        let table = build(3, 3);
        let expected = [
            0b000_000_000,
            0b000_000_001,
            0b000_001_000,
            0b000_001_001,
            0b001_000_000,
            0b001_000_001,
            0b001_001_000,
            0b001_001_001,
        ];
        for (index, &expected) in expected.iter().enumerate() {
            assert_eq!(table.get(index), Some(expected));
        }
    }
}
