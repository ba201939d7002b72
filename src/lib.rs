//! Lookup-table based Morton (Z-order) encoding of N-dimensional coordinates
//!
//! A Morton code interleaves the bits of D integer fields into a single
//! integer, so that points which are close in D-dimensional space tend to get
//! close codes. This crate computes such codes by spreading each field a chunk
//! of bits at a time through a precomputed lookup table, which lets the table
//! size be traded against the number of lookups per encoding.
//!
//! ```
//! use morton_lut::{LutEncoder, MinUint};
//!
//! // 3 fields of up to 4 bits, looked up 2 bits at a time, into a u16
//! let encoder = LutEncoder::<MinUint<12>, 3, 4, 2>::new();
//! assert_eq!(encoder.encode([0b0101, 0b1001, 0b0001]), 0b100_0100_0111);
//! ```

pub mod bits;
pub mod config;
pub mod lut;
pub mod morton;
pub mod width;

pub use config::{Config, ConfigError};
pub use morton::{
    LutEncoder, LutEncoder2D32, LutEncoder2D64, LutEncoder3D32, LutEncoder3D64, Representation,
};
pub use width::{MinUint, TooWide, Width};

/// Integer type suitable for counting number of bits
///
/// Although 32-bit is very much overkill for this purpose, I am using this type
/// for interface compatibility with standard Rust integer methods.
///
pub type NumBits = u32;
