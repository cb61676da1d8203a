//! # Netwrap Serde
//! Bit-level binary codec shared by every replicated container.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

mod bit_counter;
mod bit_reader;
mod bit_writer;
mod constants;
mod error;
mod impls;
mod serde;
mod stream_writer;

pub use bit_counter::BitCounter;
pub use bit_reader::{BitReader, OwnedBitReader};
pub use bit_writer::{BitWrite, BitWriter};
pub use constants::{MTU_SIZE_BITS, MTU_SIZE_BYTES};
pub use error::SerdeErr;
pub use serde::{ConstBitLength, Serde};
pub use stream_writer::StreamWriter;
