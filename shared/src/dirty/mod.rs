pub mod dirty_channel;
pub mod dirty_mark;
pub mod error;
pub mod net_var_group;
pub(crate) mod field_marker;
