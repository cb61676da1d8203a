use crate::{BitReader, BitWrite, ConstBitLength, Serde, SerdeErr};

// Unit

impl Serde for () {
    fn ser(&self, _: &mut dyn BitWrite) {}

    fn de(_: &mut BitReader) -> Result<Self, SerdeErr> {
        Ok(())
    }

    fn bit_length(&self) -> u32 {
        0
    }
}

impl ConstBitLength for () {
    fn const_bit_length() -> u32 {
        0
    }
}

// Boolean

impl Serde for bool {
    fn ser(&self, writer: &mut dyn BitWrite) {
        writer.write_bit(*self);
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        reader.read_bit()
    }

    fn bit_length(&self) -> u32 {
        1
    }
}

impl ConstBitLength for bool {
    fn const_bit_length() -> u32 {
        1
    }
}

// Numbers, as little-endian bytes

macro_rules! impl_serde_for_le_bytes {
    ($($impl_type:ty),*) => {
        $(
            impl Serde for $impl_type {
                fn ser(&self, writer: &mut dyn BitWrite) {
                    for byte in self.to_le_bytes() {
                        writer.write_byte(byte);
                    }
                }

                fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
                    let mut bytes = [0_u8; std::mem::size_of::<$impl_type>()];
                    for byte in bytes.iter_mut() {
                        *byte = reader.read_byte()?;
                    }
                    Ok(<$impl_type>::from_le_bytes(bytes))
                }

                fn bit_length(&self) -> u32 {
                    <Self as ConstBitLength>::const_bit_length()
                }
            }

            impl ConstBitLength for $impl_type {
                fn const_bit_length() -> u32 {
                    (std::mem::size_of::<$impl_type>() as u32) * 8
                }
            }
        )*
    };
}

impl_serde_for_le_bytes!(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64);

// Char, as its scalar value

impl Serde for char {
    fn ser(&self, writer: &mut dyn BitWrite) {
        u32::from(*self).ser(writer);
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        let scalar = u32::de(reader)?;
        char::from_u32(scalar).ok_or(SerdeErr)
    }

    fn bit_length(&self) -> u32 {
        32
    }
}

impl ConstBitLength for char {
    fn const_bit_length() -> u32 {
        32
    }
}
