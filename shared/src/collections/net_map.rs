use std::{
    collections::{
        hash_map::{self, Entry, RandomState},
        HashMap,
    },
    fmt,
    hash::{BuildHasher, Hash},
};

use log::{debug, warn};

use netwrap_serde::{BitReader, BitWrite, ConstBitLength, Serde};

use crate::{
    collections::{error::NetMapError, read_count, write_count},
    config::CollectionConfig,
    constants::DEFAULT_MAP_FIELD_NAME,
    dirty::{dirty_mark::DirtyMarker, field_marker::FieldMarker},
    error::DecodeError,
    replicated::Replicated,
};

/// A replicated map of fixed-size plain-data keys to fixed-size plain-data
/// values.
///
/// Adding, removing and non-empty clears always mark the field dirty.
/// Replacing a value through `set` marks it dirty only when the value differs.
/// Iteration order is unspecified but stable between mutations, so one
/// encode always writes entries in the order `iter` yields them.
pub struct NetMap<K, V, S = RandomState> {
    map: HashMap<K, V, S>,
    marker: FieldMarker,
    config: CollectionConfig,
}

impl<K, V> NetMap<K, V, RandomState>
where
    K: Serde + ConstBitLength + Copy + Eq + Hash + fmt::Debug,
    V: Serde + ConstBitLength + Copy,
{
    pub fn new() -> Self {
        Self::from_map(HashMap::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_map(HashMap::with_capacity(capacity))
    }

    /// Create an empty NetMap reporting changes to `marker` under `field_name`
    pub fn with_marker(field_name: &'static str, marker: &DirtyMarker) -> Self {
        let mut map = Self::new();
        map.marker = FieldMarker::with_marker(field_name, marker);
        map
    }
}

impl<K, V, S> NetMap<K, V, S>
where
    K: Serde + ConstBitLength + Copy + Eq + Hash + fmt::Debug,
    V: Serde + ConstBitLength + Copy,
    S: BuildHasher + Clone,
{
    /// Create an empty NetMap whose keys are hashed by `hasher`
    pub fn with_hasher(hasher: S) -> Self {
        Self::from_map(HashMap::with_hasher(hasher))
    }

    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self::from_map(HashMap::with_capacity_and_hasher(capacity, hasher))
    }

    pub fn with_field_name(mut self, field_name: &'static str) -> Self {
        self.marker.set_field_name(field_name);
        self
    }

    pub fn with_config(mut self, config: CollectionConfig) -> Self {
        self.config = config;
        self
    }

    /// Given a cursor into incoming payload data, builds a NetMap holding
    /// the synced entries
    pub fn new_read(reader: &mut BitReader) -> Result<Self, DecodeError>
    where
        S: Default,
    {
        let map = Self::read_entries(reader, &CollectionConfig::default(), S::default())?;
        Ok(Self::from_map(map))
    }

    /// Reads a full map payload and immediately writes it to another stream,
    /// for relaying without applying it
    pub fn read_write(reader: &mut BitReader, writer: &mut dyn BitWrite) -> Result<(), DecodeError>
    where
        S: Default,
    {
        let map = Self::read_entries(reader, &CollectionConfig::default(), S::default())?;
        Self::write_entries(&map, writer);
        Ok(())
    }

    fn from_map(map: HashMap<K, V, S>) -> Self {
        Self {
            map,
            marker: FieldMarker::new(DEFAULT_MAP_FIELD_NAME),
            config: CollectionConfig::default(),
        }
    }

    // Read-only

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Value stored under `key`, which must be present
    pub fn get(&self, key: &K) -> Result<&V, NetMapError> {
        self.map.get(key).ok_or_else(|| Self::key_not_found(key))
    }

    pub fn try_get_value(&self, key: &K) -> Option<&V> {
        self.map.get(key)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    /// True only when `key` is present and `value` is the very value stored
    /// under it, such as a reference previously handed out by this map. An
    /// equal value held elsewhere does not count.
    pub fn contains_pair(&self, key: &K, value: &V) -> bool {
        self.map
            .get(key)
            .is_some_and(|stored| std::ptr::eq(stored, value))
    }

    pub fn iter(&self) -> hash_map::Iter<'_, K, V> {
        self.map.iter()
    }

    pub fn keys(&self) -> hash_map::Keys<'_, K, V> {
        self.map.keys()
    }

    pub fn values(&self) -> hash_map::Values<'_, K, V> {
        self.map.values()
    }

    /// Always fails, entries are not stored contiguously. Iterate instead.
    pub fn copy_pairs_to(&self, _target: &mut [(K, V)], _offset: usize) -> Result<(), NetMapError> {
        Err(NetMapError::NotSupported {
            operation: "copy_pairs_to",
            reason: "entries are not stored as a contiguous array of pairs",
        })
    }

    // Mutation

    /// Inserts a new entry, `key` must not be present yet
    pub fn add(&mut self, key: K, value: V) -> Result<(), NetMapError> {
        match self.map.entry(key) {
            Entry::Occupied(_) => Err(NetMapError::DuplicateKey {
                key: format!("{:?}", key),
            }),
            Entry::Vacant(entry) => {
                entry.insert(value);
                self.marker.mark_dirty();
                Ok(())
            }
        }
    }

    /// Replaces the value under an existing `key`, returning the previous one.
    /// New keys must go through `add`.
    pub fn set(&mut self, key: K, value: V) -> Result<V, NetMapError> {
        let Some(slot) = self.map.get_mut(&key) else {
            return Err(Self::key_not_found(&key));
        };
        let old = std::mem::replace(slot, value);
        if old != value {
            self.marker.mark_dirty();
        }
        Ok(old)
    }

    /// Removes the entry under `key`, returning whether there was one
    pub fn remove(&mut self, key: &K) -> bool {
        self.take(key).is_some()
    }

    /// Removes and returns the value under `key`
    pub fn take(&mut self, key: &K) -> Option<V> {
        let removed = self.map.remove(key)?;
        self.marker.mark_dirty();
        Some(removed)
    }

    /// Always fails, remove by key instead
    pub fn remove_pair(&mut self, _key: &K, _value: &V) -> Result<bool, NetMapError> {
        Err(NetMapError::NotSupported {
            operation: "remove_pair",
            reason: "remove by key instead",
        })
    }

    pub fn clear(&mut self) {
        if self.map.is_empty() {
            return;
        }
        self.map.clear();
        self.marker.mark_dirty();
    }

    fn key_not_found(key: &K) -> NetMapError {
        NetMapError::KeyNotFound {
            key: format!("{:?}", key),
        }
    }

    fn entry_bit_length() -> u32 {
        K::const_bit_length() + V::const_bit_length()
    }

    fn write_entries(map: &HashMap<K, V, S>, writer: &mut dyn BitWrite) {
        write_count(map.len(), writer);
        for (key, value) in map {
            key.ser(writer);
            value.ser(writer);
        }
    }

    fn read_entries(
        reader: &mut BitReader,
        config: &CollectionConfig,
        hasher: S,
    ) -> Result<HashMap<K, V, S>, DecodeError> {
        let count = read_count(reader, config)?;

        let bits_needed = count.saturating_mul(Self::entry_bit_length() as usize);
        if bits_needed > reader.bits_remaining() {
            return Err(DecodeError::CountExceedsStream {
                count,
                bits_remaining: reader.bits_remaining(),
            });
        }

        let mut map = HashMap::with_capacity_and_hasher(count, hasher);
        for _ in 0..count {
            let key = K::de(reader)?;
            let value = V::de(reader)?;
            match map.entry(key) {
                Entry::Occupied(_) => {
                    return Err(DecodeError::DuplicateKey {
                        key: format!("{:?}", key),
                    });
                }
                Entry::Vacant(entry) => {
                    entry.insert(value);
                }
            }
        }
        Ok(map)
    }
}

impl<K, V, S> Replicated for NetMap<K, V, S>
where
    K: Serde + ConstBitLength + Copy + Eq + Hash + fmt::Debug,
    V: Serde + ConstBitLength + Copy,
    S: BuildHasher + Clone,
{
    fn field_name(&self) -> &'static str {
        self.marker.field_name()
    }

    fn set_marker(&mut self, marker: &DirtyMarker) {
        self.marker.set_marker(marker);
    }

    fn net_write(&self, writer: &mut dyn BitWrite) {
        Self::write_entries(&self.map, writer);
    }

    // Receiving side of a sync: rebuilds from scratch and does not mark dirty
    fn net_read(&mut self, reader: &mut BitReader) -> Result<(), DecodeError> {
        let hasher = self.map.hasher().clone();
        match Self::read_entries(reader, &self.config, hasher) {
            Ok(map) => {
                debug!(
                    "NetMap `{}` replaced with {} synced entries",
                    self.marker.field_name(),
                    map.len()
                );
                self.map = map;
                Ok(())
            }
            Err(error) => {
                warn!(
                    "NetMap `{}` rejected payload: {}",
                    self.marker.field_name(),
                    error
                );
                Err(error)
            }
        }
    }

    fn bit_length(&self) -> u32 {
        32 + (self.map.len() as u32) * Self::entry_bit_length()
    }
}

impl<K, V> Default for NetMap<K, V, RandomState>
where
    K: Serde + ConstBitLength + Copy + Eq + Hash + fmt::Debug,
    V: Serde + ConstBitLength + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

// Later duplicates overwrite earlier ones, as when collecting into a HashMap
impl<K, V, S> FromIterator<(K, V)> for NetMap<K, V, S>
where
    K: Serde + ConstBitLength + Copy + Eq + Hash + fmt::Debug,
    V: Serde + ConstBitLength + Copy,
    S: BuildHasher + Clone + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_map(iter.into_iter().collect())
    }
}

impl<K, V, S> From<HashMap<K, V, S>> for NetMap<K, V, S>
where
    K: Serde + ConstBitLength + Copy + Eq + Hash + fmt::Debug,
    V: Serde + ConstBitLength + Copy,
    S: BuildHasher + Clone,
{
    fn from(map: HashMap<K, V, S>) -> Self {
        Self::from_map(map)
    }
}

impl<'a, K, V, S> IntoIterator for &'a NetMap<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = hash_map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.iter()
    }
}

impl<K, V, S> PartialEq for NetMap<K, V, S>
where
    K: Eq + Hash,
    V: PartialEq,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.map == other.map
    }
}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for NetMap<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NetMap")
            .field("field_name", &self.marker.field_name())
            .field("map", &self.map)
            .finish()
    }
}
