use netwrap_shared::{BitReader, BitWrite, Serde, SerdeErr};

/// An inventory element: a small networked object that owns its own encoding
#[derive(Clone, PartialEq, Debug)]
pub struct Item {
    pub id: u16,
    pub name: String,
    pub weight: f32,
}

impl Item {
    pub fn new(id: u16, name: &str, weight: f32) -> Self {
        Self {
            id,
            name: name.to_string(),
            weight,
        }
    }
}

impl Serde for Item {
    fn ser(&self, writer: &mut dyn BitWrite) {
        self.id.ser(writer);
        self.name.ser(writer);
        self.weight.ser(writer);
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        Ok(Self {
            id: u16::de(reader)?,
            name: String::de(reader)?,
            weight: f32::de(reader)?,
        })
    }

    fn bit_length(&self) -> u32 {
        self.id.bit_length() + self.name.bit_length() + self.weight.bit_length()
    }
}
