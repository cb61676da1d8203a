use std::{fmt, ops::Index, slice};

use log::{debug, warn};

use netwrap_serde::{BitReader, BitWrite, Serde};

use crate::{
    collections::{error::NetListError, read_count, write_count},
    config::CollectionConfig,
    constants::DEFAULT_LIST_FIELD_NAME,
    dirty::{dirty_mark::DirtyMarker, field_marker::FieldMarker},
    error::DecodeError,
    replicated::Replicated,
};

/// A replicated, index-addressable sequence.
///
/// Structural changes (add, insert, removal, non-empty clear) always mark
/// the field dirty. Replacing an element marks it dirty only when the new
/// element differs from the old one.
///
/// Elements removed from the list are handed back to the caller rather than
/// dropped, where the operation allows it.
pub struct NetList<T: Serde> {
    list: Vec<T>,
    marker: FieldMarker,
    config: CollectionConfig,
}

impl<T: Serde> NetList<T> {
    pub fn new() -> Self {
        Self::from_vec(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_vec(Vec::with_capacity(capacity))
    }

    /// Create an empty NetList reporting changes to `marker` under `field_name`
    pub fn with_marker(field_name: &'static str, marker: &DirtyMarker) -> Self {
        let mut list = Self::new();
        list.marker = FieldMarker::with_marker(field_name, marker);
        list
    }

    pub fn with_field_name(mut self, field_name: &'static str) -> Self {
        self.marker.set_field_name(field_name);
        self
    }

    pub fn with_config(mut self, config: CollectionConfig) -> Self {
        self.config = config;
        self
    }

    /// Given a cursor into incoming payload data, builds a NetList holding
    /// the synced elements
    pub fn new_read(reader: &mut BitReader) -> Result<Self, DecodeError> {
        let list = Self::read_elements(reader, &CollectionConfig::default())?;
        Ok(Self::from_vec(list))
    }

    /// Reads a full list payload and immediately writes it to another
    /// stream, for relaying without applying it
    pub fn read_write(reader: &mut BitReader, writer: &mut dyn BitWrite) -> Result<(), DecodeError> {
        let list = Self::read_elements(reader, &CollectionConfig::default())?;
        write_count(list.len(), writer);
        for element in &list {
            element.ser(writer);
        }
        Ok(())
    }

    fn from_vec(list: Vec<T>) -> Self {
        Self {
            list,
            marker: FieldMarker::new(DEFAULT_LIST_FIELD_NAME),
            config: CollectionConfig::default(),
        }
    }

    // Read-only

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&T, NetListError> {
        self.list.get(index).ok_or(NetListError::IndexOutOfRange {
            index,
            len: self.list.len(),
        })
    }

    /// Position of the first element equal to `item`
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.list.iter().position(|element| element == item)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.list.contains(item)
    }

    /// Clones every element into `target`, starting at `offset`
    pub fn copy_to(&self, target: &mut [T], offset: usize) -> Result<(), NetListError> {
        let Some(end) = offset.checked_add(self.list.len()) else {
            return Err(self.copy_out_of_range(target, offset));
        };
        let Some(slots) = target.get_mut(offset..end) else {
            return Err(self.copy_out_of_range(target, offset));
        };
        slots.clone_from_slice(&self.list);
        Ok(())
    }

    fn copy_out_of_range(&self, target: &[T], offset: usize) -> NetListError {
        NetListError::CopyOutOfRange {
            offset,
            needed: self.list.len(),
            available: target.len(),
        }
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.list.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.list
    }

    // Mutation

    /// Appends `item` to the end of the list
    pub fn add(&mut self, item: T) {
        self.list.push(item);
        self.marker.mark_dirty();
    }

    /// Inserts `item` at `index`, shifting later elements right
    pub fn insert(&mut self, index: usize, item: T) -> Result<(), NetListError> {
        if index > self.list.len() {
            return Err(NetListError::InsertOutOfRange {
                index,
                len: self.list.len(),
            });
        }
        self.list.insert(index, item);
        self.marker.mark_dirty();
        Ok(())
    }

    /// Replaces the element at `index`, returning the previous one
    pub fn set(&mut self, index: usize, item: T) -> Result<T, NetListError> {
        let len = self.list.len();
        let Some(slot) = self.list.get_mut(index) else {
            return Err(NetListError::IndexOutOfRange { index, len });
        };
        let old = std::mem::replace(slot, item);
        if old != *slot {
            self.marker.mark_dirty();
        }
        Ok(old)
    }

    /// Removes and returns the element at `index`, shifting later elements left
    pub fn remove_at(&mut self, index: usize) -> Result<T, NetListError> {
        if index >= self.list.len() {
            return Err(NetListError::IndexOutOfRange {
                index,
                len: self.list.len(),
            });
        }
        let removed = self.list.remove(index);
        self.marker.mark_dirty();
        Ok(removed)
    }

    /// Removes the first element equal to `item`, returning whether one was found
    pub fn remove(&mut self, item: &T) -> bool {
        self.take(item).is_some()
    }

    /// Removes and returns the first element equal to `item`
    pub fn take(&mut self, item: &T) -> Option<T> {
        let index = self.index_of(item)?;
        let removed = self.list.remove(index);
        self.marker.mark_dirty();
        Some(removed)
    }

    pub fn clear(&mut self) {
        if self.list.is_empty() {
            return;
        }
        self.list.clear();
        self.marker.mark_dirty();
    }

    fn read_elements(reader: &mut BitReader, config: &CollectionConfig) -> Result<Vec<T>, DecodeError> {
        let count = read_count(reader, config)?;
        let mut list = Vec::with_capacity(count.min(reader.bits_remaining()));
        for _ in 0..count {
            list.push(T::de(reader)?);
        }
        Ok(list)
    }
}

impl<T: Serde> Replicated for NetList<T> {
    fn field_name(&self) -> &'static str {
        self.marker.field_name()
    }

    fn set_marker(&mut self, marker: &DirtyMarker) {
        self.marker.set_marker(marker);
    }

    fn net_write(&self, writer: &mut dyn BitWrite) {
        write_count(self.list.len(), writer);
        for element in &self.list {
            element.ser(writer);
        }
    }

    // Receiving side of a sync: replaces everything at once and does not
    // mark dirty
    fn net_read(&mut self, reader: &mut BitReader) -> Result<(), DecodeError> {
        match Self::read_elements(reader, &self.config) {
            Ok(list) => {
                debug!(
                    "NetList `{}` replaced with {} synced elements",
                    self.marker.field_name(),
                    list.len()
                );
                self.list = list;
                Ok(())
            }
            Err(error) => {
                warn!(
                    "NetList `{}` rejected payload: {}",
                    self.marker.field_name(),
                    error
                );
                Err(error)
            }
        }
    }

    fn bit_length(&self) -> u32 {
        32 + self.list.iter().map(Serde::bit_length).sum::<u32>()
    }
}

impl<T: Serde> Default for NetList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Serde> From<Vec<T>> for NetList<T> {
    fn from(list: Vec<T>) -> Self {
        Self::from_vec(list)
    }
}

impl<T: Serde> FromIterator<T> for NetList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<'a, T: Serde> IntoIterator for &'a NetList<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.iter()
    }
}

// Read access only, writes must go through `set`
impl<T: Serde> Index<usize> for NetList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.list[index]
    }
}

impl<T: Serde> PartialEq for NetList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.list == other.list
    }
}

impl<T: Serde + fmt::Debug> fmt::Debug for NetList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NetList")
            .field("field_name", &self.marker.field_name())
            .field("list", &self.list)
            .finish()
    }
}
