use crate::SerdeErr;

/// Reads bits, least significant first, out of a borrowed buffer
pub struct BitReader<'b> {
    buffer: &'b [u8],
    bit_index: usize,
}

impl<'b> BitReader<'b> {
    pub fn new(buffer: &'b [u8]) -> Self {
        Self {
            buffer,
            bit_index: 0,
        }
    }

    pub fn read_bit(&mut self) -> Result<bool, SerdeErr> {
        let Some(byte) = self.buffer.get(self.bit_index / 8) else {
            return Err(SerdeErr);
        };
        let bit = (byte >> (self.bit_index % 8)) & 1 != 0;
        self.bit_index += 1;
        Ok(bit)
    }

    pub fn read_byte(&mut self) -> Result<u8, SerdeErr> {
        if self.bits_remaining() < 8 {
            return Err(SerdeErr);
        }

        let mut output = 0_u8;
        for index in 0..8 {
            if self.read_bit()? {
                output |= 1 << index;
            }
        }
        Ok(output)
    }

    /// Bits left before the end of the buffer. Padding in the final byte
    /// counts as remaining.
    pub fn bits_remaining(&self) -> usize {
        (self.buffer.len() * 8).saturating_sub(self.bit_index)
    }

    pub fn bits_read(&self) -> usize {
        self.bit_index
    }
}

/// A reader that owns its buffer, for payloads that outlive the packet they
/// arrived in
pub struct OwnedBitReader {
    buffer: Box<[u8]>,
}

impl OwnedBitReader {
    pub fn new(buffer: &[u8]) -> Self {
        Self {
            buffer: buffer.into(),
        }
    }

    pub fn borrow(&self) -> BitReader<'_> {
        BitReader::new(&self.buffer)
    }

    pub fn take_buffer(self) -> Box<[u8]> {
        self.buffer
    }
}

impl From<Vec<u8>> for OwnedBitReader {
    fn from(buffer: Vec<u8>) -> Self {
        Self {
            buffer: buffer.into_boxed_slice(),
        }
    }
}
