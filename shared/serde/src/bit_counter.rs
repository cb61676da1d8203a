use crate::BitWrite;

/// A BitWrite implementation that records how many bits would be written,
/// without storing any of them
#[derive(Default)]
pub struct BitCounter {
    bits: u32,
}

impl BitCounter {
    pub fn new() -> Self {
        Self { bits: 0 }
    }

    pub fn bits_needed(&self) -> u32 {
        self.bits
    }
}

impl BitWrite for BitCounter {
    fn write_bit(&mut self, _bit: bool) {
        self.bits += 1;
    }

    fn write_byte(&mut self, _byte: u8) {
        self.bits += 8;
    }

    fn is_counter(&self) -> bool {
        true
    }

    fn count_bits(&mut self, bits: u32) {
        self.bits += bits;
    }
}
