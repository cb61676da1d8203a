/// Largest element count a decoded list or map may announce. Counts above
/// this are rejected before anything is allocated.
pub const MAX_DECODED_LEN: usize = 65_536;

pub const DEFAULT_VAR_FIELD_NAME: &str = "value";
pub const DEFAULT_LIST_FIELD_NAME: &str = "list";
pub const DEFAULT_MAP_FIELD_NAME: &str = "map";
