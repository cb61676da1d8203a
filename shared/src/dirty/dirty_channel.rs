use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::trace;

use super::{dirty_mark::DirtyMark, error::DirtyChannelError, net_var_group::NetVarGroup};

/// A field reported dirty through a DirtyChannel
pub type DirtyField = (&'static str, NetVarGroup);

#[derive(Default)]
struct DirtyRecords {
    // in first-marked order, no duplicates
    fields: Vec<DirtyField>,
    mark_count: usize,
}

impl DirtyRecords {
    fn mark(&mut self, field: DirtyField) {
        self.mark_count += 1;
        if !self.fields.contains(&field) {
            self.fields.push(field);
        }
    }
}

/// In-process dirty sink. Containers hold the sending half (through a
/// `DirtyMarker`), the host's replication loop holds the receiving half.
pub struct DirtyChannel;

impl DirtyChannel {
    pub fn new_channel() -> (DirtySender, DirtyReceiver) {
        let records = Arc::new(RwLock::new(DirtyRecords::default()));

        let sender = DirtySender {
            records: records.clone(),
        };
        let receiver = DirtyReceiver { records };

        (sender, receiver)
    }
}

// DirtySender
#[derive(Clone)]
pub struct DirtySender {
    records: Arc<RwLock<DirtyRecords>>,
}

impl DirtyMark for DirtySender {
    fn mark_dirty(&mut self, field_name: &'static str, group: NetVarGroup) -> bool {
        let Ok(mut records) = self.records.as_ref().write() else {
            return false;
        };
        trace!("field `{}` marked dirty in group {:?}", field_name, group);
        records.mark((field_name, group));
        true
    }
}

// DirtyReceiver
#[derive(Clone)]
pub struct DirtyReceiver {
    records: Arc<RwLock<DirtyRecords>>,
}

impl DirtyReceiver {
    fn try_read(&self) -> Result<RwLockReadGuard<'_, DirtyRecords>, DirtyChannelError> {
        self.records
            .as_ref()
            .read()
            .map_err(|_| DirtyChannelError::LockPoisoned)
    }

    fn try_write(&self) -> Result<RwLockWriteGuard<'_, DirtyRecords>, DirtyChannelError> {
        self.records
            .as_ref()
            .write()
            .map_err(|_| DirtyChannelError::LockPoisoned)
    }

    pub fn is_clear(&self) -> bool {
        self.try_is_clear()
            .expect("DirtyChannel lock poisoned")
    }

    pub fn dirty_fields(&self) -> Vec<DirtyField> {
        self.try_dirty_fields()
            .expect("DirtyChannel lock poisoned")
    }

    pub fn mark_count(&self) -> usize {
        self.try_mark_count()
            .expect("DirtyChannel lock poisoned")
    }

    /// Returns the dirty fields in first-marked order and clears the set.
    /// The running mark count is kept.
    pub fn drain(&self) -> Vec<DirtyField> {
        self.try_drain()
            .expect("DirtyChannel lock poisoned")
    }

    // Try versions that return Result instead of panicking

    pub fn try_is_clear(&self) -> Result<bool, DirtyChannelError> {
        Ok(self.try_read()?.fields.is_empty())
    }

    pub fn try_dirty_fields(&self) -> Result<Vec<DirtyField>, DirtyChannelError> {
        Ok(self.try_read()?.fields.clone())
    }

    pub fn try_mark_count(&self) -> Result<usize, DirtyChannelError> {
        Ok(self.try_read()?.mark_count)
    }

    pub fn try_drain(&self) -> Result<Vec<DirtyField>, DirtyChannelError> {
        let mut records = self.try_write()?;
        Ok(std::mem::take(&mut records.fields))
    }
}
