use log::warn;

use super::{dirty_mark::DirtyMarker, net_var_group::NetVarGroup};

/// A container's identity plus its handle to the dirty sink
#[derive(Clone)]
pub(crate) struct FieldMarker {
    field_name: &'static str,
    marker: Option<DirtyMarker>,
}

impl FieldMarker {
    pub fn new(field_name: &'static str) -> Self {
        Self {
            field_name,
            marker: None,
        }
    }

    pub fn with_marker(field_name: &'static str, marker: &DirtyMarker) -> Self {
        Self {
            field_name,
            marker: Some(marker.clone_new()),
        }
    }

    pub fn field_name(&self) -> &'static str {
        self.field_name
    }

    pub fn set_field_name(&mut self, field_name: &'static str) {
        self.field_name = field_name;
    }

    pub fn set_marker(&mut self, marker: &DirtyMarker) {
        self.marker = Some(marker.clone_new());
    }

    pub fn has_marker(&self) -> bool {
        self.marker.is_some()
    }

    pub fn mark_dirty(&mut self) {
        let Some(marker) = &mut self.marker else {
            warn!(
                "Replicated field `{}` changed but has no DirtyMarker, the change will not be sent.",
                self.field_name
            );
            return;
        };
        if !marker.mark_dirty(self.field_name, NetVarGroup::Net) {
            warn!("Dirty sink rejected mark for field `{}`", self.field_name);
        }
    }
}
