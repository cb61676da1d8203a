/// Largest payload, in bytes, that fits a single unfragmented packet
pub const MTU_SIZE_BYTES: usize = 430;
pub const MTU_SIZE_BITS: u32 = (MTU_SIZE_BYTES as u32) * 8;
