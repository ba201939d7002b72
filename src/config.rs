//! Lookup-table encoder configuration and its validation

use crate::{bits, width::Width, NumBits};
use thiserror::Error;

/// Largest supported lookup width
///
/// There is no hard technical limit below 64, but a table with more than 2^32
/// entries would be unreasonable.
///
pub const MAX_LUT_BITS: NumBits = 32;

/// Parameters of a lookup-table based Morton encoder
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Config {
    /// Number of fields that are interleaved together
    pub dimensions: usize,

    /// Number of low-order bits that are used in each field
    pub field_bits: NumBits,

    /// Number of field bits that are handled by each table lookup
    pub lut_bits: NumBits,

    /// Number of bits of the integer type that holds fields and codes
    pub repr_bits: NumBits,
}

/// Reasons why a `Config` cannot be used to build an encoder
#[derive(Clone, Copy, Debug, Eq, Error, Hash, PartialEq)]
pub enum ConfigError {
    #[error("'Dimensions' must be > 0")]
    NoDimensions,

    #[error("'FieldBits' must be > 0")]
    NoFieldBits,

    #[error("'LutBits' must be > 0")]
    NoLutBits,

    #[error("'LutBits' must be <= 'FieldBits'")]
    LutWiderThanField,

    #[error("'LutBits' must be <= 32 and smaller than the width of usize")]
    LutTooLarge,

    #[error("'LutBits' * 'Dimensions' must be <= 64 and <= the width of usize")]
    LutValueTooWide,

    #[error("the representation must hold 'Dimensions' * 'FieldBits' bits")]
    ReprTooNarrow,
}

impl ConfigError {
    /// Human-readable description of the violated constraint
    ///
    /// This duplicates the `Display` implementation in a form that can be used
    /// during constant evaluation.
    ///
    pub const fn message(self) -> &'static str {
        match self {
            Self::NoDimensions => "'Dimensions' must be > 0",
            Self::NoFieldBits => "'FieldBits' must be > 0",
            Self::NoLutBits => "'LutBits' must be > 0",
            Self::LutWiderThanField => "'LutBits' must be <= 'FieldBits'",
            Self::LutTooLarge => "'LutBits' must be <= 32 and smaller than the width of usize",
            Self::LutValueTooWide => {
                "'LutBits' * 'Dimensions' must be <= 64 and <= the width of usize"
            }
            Self::ReprTooNarrow => "the representation must hold 'Dimensions' * 'FieldBits' bits",
        }
    }
}

impl Config {
    /// Check that an encoder can be built from this configuration
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.dimensions == 0 {
            return Err(ConfigError::NoDimensions);
        }
        if self.field_bits == 0 {
            return Err(ConfigError::NoFieldBits);
        }
        if self.lut_bits == 0 {
            return Err(ConfigError::NoLutBits);
        }
        if self.lut_bits > self.field_bits {
            return Err(ConfigError::LutWiderThanField);
        }
        if self.lut_bits > MAX_LUT_BITS || self.lut_bits >= usize::BITS {
            return Err(ConfigError::LutTooLarge);
        }
        match self.lut_value_bits() {
            Some(bits) if bits <= u64::BITS as usize && bits <= usize::BITS as usize => {}
            _ => return Err(ConfigError::LutValueTooWide),
        }
        match self.result_bits() {
            Some(bits) if bits <= self.repr_bits as usize => {}
            _ => return Err(ConfigError::ReprTooNarrow),
        }
        Ok(())
    }

    /// Number of chunks each field is split into, i.e. lookups per field
    pub const fn chunk_count(&self) -> NumBits {
        1 + (self.field_bits - 1) / self.lut_bits
    }

    /// Number of entries in the lookup table
    pub const fn lut_size(&self) -> usize {
        1 << self.lut_bits
    }

    /// Mask selecting the field bits handled by a single lookup
    pub const fn chunk_mask(&self) -> u64 {
        bits::low_order_mask(self.lut_bits)
    }

    /// Number of significant bits in a lookup table entry, if it is computable
    pub const fn lut_value_bits(&self) -> Option<usize> {
        (self.lut_bits as usize).checked_mul(self.dimensions)
    }

    /// Number of significant bits in an encoded result, if it is computable
    pub const fn result_bits(&self) -> Option<usize> {
        (self.field_bits as usize).checked_mul(self.dimensions)
    }

    /// Integer width used to store lookup table entries
    ///
    /// `None` if the entries would not fit in 64 bits.
    ///
    pub const fn lut_width(&self) -> Option<Width> {
        match self.lut_value_bits() {
            Some(bits) if bits <= u64::BITS as usize => match Width::select(bits as NumBits) {
                Ok(width) => Some(width),
                Err(_) => None,
            },
            _ => None,
        }
    }
}
