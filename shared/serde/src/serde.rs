use crate::{bit_counter::BitCounter, bit_reader::BitReader, bit_writer::BitWrite, error::SerdeErr};

/// A type that can be written to and read back from a bit stream.
///
/// `de` must consume exactly the bits `ser` produced.
pub trait Serde: Sized + Clone + PartialEq {
    /// Encodes into the given writer
    fn ser(&self, writer: &mut dyn BitWrite);

    /// Decodes from the given reader
    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr>;

    /// Number of bits `ser` will write for this value
    fn bit_length(&self) -> u32 {
        let mut counter = BitCounter::new();
        self.ser(&mut counter);
        counter.bits_needed()
    }
}

/// Implemented by plain-data types whose encoding always has the same size
pub trait ConstBitLength {
    fn const_bit_length() -> u32;
}
