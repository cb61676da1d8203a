use crate::constants::MTU_SIZE_BYTES;

/// Sink for the bit-level encoding produced by `Serde::ser`
pub trait BitWrite {
    fn write_bit(&mut self, bit: bool);
    fn write_byte(&mut self, byte: u8);
    /// Whether this writer only counts bits instead of storing them
    fn is_counter(&self) -> bool;
    fn count_bits(&mut self, bits: u32);
}

/// A BitWrite implementation bounded to a fixed number of bytes, one packet.
///
/// Bits written past the capacity are dropped and counted, check
/// `is_overflowed()` before sending the result.
pub struct BitWriter {
    scratch: u8,
    scratch_index: u8,
    buffer: Vec<u8>,
    max_bits: u32,
    current_bits: u32,
    overflow_bits: u32,
}

impl BitWriter {
    pub fn new() -> Self {
        Self::with_capacity(MTU_SIZE_BYTES)
    }

    pub fn with_capacity(max_bytes: usize) -> Self {
        Self {
            scratch: 0,
            scratch_index: 0,
            buffer: Vec::with_capacity(max_bytes),
            max_bits: (max_bytes as u32) * 8,
            current_bits: 0,
            overflow_bits: 0,
        }
    }

    fn finalize(&mut self) {
        if self.scratch_index > 0 {
            let byte = (self.scratch << (8 - self.scratch_index)).reverse_bits();
            self.buffer.push(byte);
            self.scratch = 0;
            self.scratch_index = 0;
        }
    }

    pub fn to_bytes(mut self) -> Box<[u8]> {
        self.finalize();
        self.buffer.into_boxed_slice()
    }

    pub fn bits_written(&self) -> u32 {
        self.current_bits
    }

    pub fn bits_free(&self) -> u32 {
        self.max_bits - self.current_bits
    }

    pub fn is_overflowed(&self) -> bool {
        self.overflow_bits > 0
    }

    pub fn overflow_bits(&self) -> u32 {
        self.overflow_bits
    }
}

impl Default for BitWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl BitWrite for BitWriter {
    fn write_bit(&mut self, bit: bool) {
        if self.current_bits >= self.max_bits {
            self.overflow_bits += 1;
            return;
        }

        self.scratch <<= 1;

        if bit {
            self.scratch |= 1;
        }

        self.scratch_index += 1;
        self.current_bits += 1;

        if self.scratch_index >= 8 {
            self.buffer.push(self.scratch.reverse_bits());
            self.scratch_index = 0;
            self.scratch = 0;
        }
    }

    fn write_byte(&mut self, byte: u8) {
        let mut temp = byte;
        for _ in 0..8 {
            self.write_bit(temp & 1 != 0);
            temp >>= 1;
        }
    }

    fn is_counter(&self) -> bool {
        false
    }

    fn count_bits(&mut self, _bits: u32) {
        // only meaningful for BitCounter
    }
}
