use crate::constants::MAX_DECODED_LEN;

/// Decode limits for `NetList` and `NetMap`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CollectionConfig {
    /// Largest element count accepted from a payload
    pub max_decoded_len: usize,
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self {
            max_decoded_len: MAX_DECODED_LEN,
        }
    }
}
