use netwrap_serde::{BitReader, BitWrite};

use crate::{dirty::dirty_mark::DirtyMarker, error::DecodeError};

/// A field of a networked object whose full contents are synchronized.
///
/// The host calls `net_write` on fields its dirty sink reported, and
/// `net_read` on the matching field when a payload arrives.
pub trait Replicated {
    /// Identity passed to the dirty sink
    fn field_name(&self) -> &'static str;

    fn set_marker(&mut self, marker: &DirtyMarker);

    /// Writes the entire current contents
    fn net_write(&self, writer: &mut dyn BitWrite);

    /// Replaces the entire contents with the payload's
    fn net_read(&mut self, reader: &mut BitReader) -> Result<(), DecodeError>;

    /// Exact number of bits `net_write` produces right now
    fn bit_length(&self) -> u32;
}
