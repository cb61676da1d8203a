use std::{
    fmt,
    hash::{Hash, Hasher},
    ops::Deref,
};

use log::debug;

use netwrap_serde::{BitReader, BitWrite, Serde, SerdeErr};

use crate::{
    constants::DEFAULT_VAR_FIELD_NAME,
    dirty::{dirty_mark::DirtyMarker, field_marker::FieldMarker},
    error::DecodeError,
    replicated::Replicated,
    var::notify_condition::NotifyCondition,
};

/// Identifies a listener registered on a `NetVar`, for later removal
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u32);

type Listener<T> = Box<dyn FnMut(&T) + Send + Sync>;

/// A replicated scalar value.
///
/// Assigning through `set` stores the value, then, depending on the
/// `NotifyCondition`, calls every change listener with the *previous* value
/// and marks the field dirty.
pub struct NetVar<T: Serde> {
    value: T,
    notify_condition: NotifyCondition,
    listeners: Vec<(ListenerId, Listener<T>)>,
    next_listener_id: u32,
    marker: FieldMarker,
}

impl<T: Serde> NetVar<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            notify_condition: NotifyCondition::default(),
            listeners: Vec::new(),
            next_listener_id: 0,
            marker: FieldMarker::new(DEFAULT_VAR_FIELD_NAME),
        }
    }

    /// Create a new NetVar reporting changes to `marker` under `field_name`
    pub fn with_marker(value: T, field_name: &'static str, marker: &DirtyMarker) -> Self {
        let mut var = Self::new(value);
        var.marker = FieldMarker::with_marker(field_name, marker);
        var
    }

    pub fn with_field_name(mut self, field_name: &'static str) -> Self {
        self.marker.set_field_name(field_name);
        self
    }

    /// Given a cursor into incoming payload data, initializes a NetVar with
    /// the synced value
    pub fn new_read(reader: &mut BitReader) -> Result<Self, DecodeError> {
        Ok(Self::new(T::de(reader)?))
    }

    /// Reads a value from a stream and immediately writes it to another,
    /// for relaying a payload without applying it
    pub fn read_write(reader: &mut BitReader, writer: &mut dyn BitWrite) -> Result<(), SerdeErr> {
        T::de(reader)?.ser(writer);
        Ok(())
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Stores `value`, notifying per the current `NotifyCondition`
    pub fn set(&mut self, value: T) {
        let last_value = std::mem::replace(&mut self.value, value);

        match self.notify_condition {
            NotifyCondition::Never => {}
            NotifyCondition::Always => self.notify(&last_value),
            NotifyCondition::OnChange => {
                if last_value != self.value {
                    self.notify(&last_value);
                }
            }
        }
    }

    pub fn notify_condition(&self) -> NotifyCondition {
        self.notify_condition
    }

    pub fn set_notify_condition(&mut self, notify_condition: NotifyCondition) {
        self.notify_condition = notify_condition;
    }

    /// Registers a listener called with the previous value whenever the
    /// value changes
    pub fn on_value_changed<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&T) + Send + Sync + 'static,
    {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id = self.next_listener_id.wrapping_add(1);
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns whether a listener was registered under `id`
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let count = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != count
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn into_inner(self) -> T {
        self.value
    }

    fn notify(&mut self, last_value: &T) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(last_value);
        }
        self.marker.mark_dirty();
    }
}

impl<T: Serde> Replicated for NetVar<T> {
    fn field_name(&self) -> &'static str {
        self.marker.field_name()
    }

    fn set_marker(&mut self, marker: &DirtyMarker) {
        self.marker.set_marker(marker);
    }

    fn net_write(&self, writer: &mut dyn BitWrite) {
        self.value.ser(writer);
    }

    // An incoming value is an authoritative update, it goes through `set`
    // so listeners and the dirty sink observe it like a local write
    fn net_read(&mut self, reader: &mut BitReader) -> Result<(), DecodeError> {
        let value = T::de(reader)?;
        debug!("NetVar `{}` received synced value", self.marker.field_name());
        self.set(value);
        Ok(())
    }

    fn bit_length(&self) -> u32 {
        self.value.bit_length()
    }
}

// Read access only, writes must go through `set`
impl<T: Serde> Deref for NetVar<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl<T: Serde + Default> Default for NetVar<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Serde> From<T> for NetVar<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: Serde> PartialEq for NetVar<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Serde + Eq> Eq for NetVar<T> {}

impl<T: Serde + Hash> Hash for NetVar<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T: Serde + fmt::Debug> fmt::Debug for NetVar<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NetVar")
            .field("field_name", &self.marker.field_name())
            .field("value", &self.value)
            .field("notify_condition", &self.notify_condition)
            .field("listeners", &self.listeners.len())
            .field("has_marker", &self.marker.has_marker())
            .finish()
    }
}
