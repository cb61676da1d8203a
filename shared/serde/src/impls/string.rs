use crate::{BitReader, BitWrite, Serde, SerdeErr};

impl Serde for String {
    fn ser(&self, writer: &mut dyn BitWrite) {
        (self.len() as u32).ser(writer);
        for byte in self.as_bytes() {
            writer.write_byte(*byte);
        }
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        let length = u32::de(reader)? as usize;
        if length.saturating_mul(8) > reader.bits_remaining() {
            return Err(SerdeErr);
        }

        let mut bytes = Vec::with_capacity(length);
        for _ in 0..length {
            bytes.push(reader.read_byte()?);
        }

        String::from_utf8(bytes).map_err(|_| SerdeErr)
    }

    fn bit_length(&self) -> u32 {
        32 + (self.len() as u32) * 8
    }
}
