use super::net_var_group::NetVarGroup;

/// Capability for reporting that a field of a networked object has changed
/// and needs to be re-sent. The sink decides when the field is flushed.
pub trait DirtyMark: DirtyMarkClone + Send + Sync + 'static {
    /// Returns whether the mark was recorded
    fn mark_dirty(&mut self, field_name: &'static str, group: NetVarGroup) -> bool;
}

pub trait DirtyMarkClone {
    fn clone_box(&self) -> Box<dyn DirtyMark>;
}

impl<T: 'static + Clone + DirtyMark> DirtyMarkClone for T {
    fn clone_box(&self) -> Box<dyn DirtyMark> {
        Box::new(self.clone())
    }
}

/// Handle to a `DirtyMark` sink, held by each replicated container
pub struct DirtyMarker {
    inner: Box<dyn DirtyMark>,
}

impl DirtyMarker {
    pub fn new<M: DirtyMark>(mark: M) -> Self {
        Self {
            inner: Box::new(mark),
        }
    }

    pub fn mark_dirty(&mut self, field_name: &'static str, group: NetVarGroup) -> bool {
        self.inner.mark_dirty(field_name, group)
    }

    pub fn clone_new(&self) -> Self {
        Self {
            inner: self.inner.clone_box(),
        }
    }
}

impl Clone for DirtyMarker {
    fn clone(&self) -> Self {
        self.clone_new()
    }
}
