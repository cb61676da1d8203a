pub mod error;
pub mod net_list;
pub mod net_map;

use netwrap_serde::{BitReader, BitWrite, Serde};

use crate::{config::CollectionConfig, error::DecodeError};

// The `<int32 count>` prefix shared by list and map payloads

pub(crate) fn write_count(len: usize, writer: &mut dyn BitWrite) {
    let count = i32::try_from(len).expect("replicated collections cannot exceed i32::MAX entries");
    count.ser(writer);
}

pub(crate) fn read_count(
    reader: &mut BitReader,
    config: &CollectionConfig,
) -> Result<usize, DecodeError> {
    let count = i32::de(reader)?;
    let Ok(count) = usize::try_from(count) else {
        return Err(DecodeError::NegativeCount { count });
    };
    if count > config.max_decoded_len {
        return Err(DecodeError::CountTooLarge {
            count,
            max: config.max_decoded_len,
        });
    }
    Ok(count)
}
