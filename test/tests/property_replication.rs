/// PROPERTY-BASED TESTS: Replication invariants
///
/// Key invariants:
/// 1. Writing a container and reading it into a fresh one reproduces it
/// 2. A NetVar marks dirty according to its NotifyCondition and nothing else
/// 3. Encoded size always equals the reported bit length

use std::collections::HashMap;

use proptest::prelude::*;
use netwrap_shared::{
    BitReader, DirtyChannel, DirtyMarker, NetList, NetMap, NetVar, NotifyCondition, Replicated,
};
use netwrap_test::{encode_field, Item};

fn item_strategy() -> impl Strategy<Value = Item> {
    (any::<u16>(), "[a-z]{0,12}", -1000.0f32..1000.0f32)
        .prop_map(|(id, name, weight)| Item::new(id, &name, weight))
}

fn notify_condition_strategy() -> impl Strategy<Value = NotifyCondition> {
    prop_oneof![
        Just(NotifyCondition::Never),
        Just(NotifyCondition::OnChange),
        Just(NotifyCondition::Always),
    ]
}

proptest! {
    /// Lists keep their exact order across the wire
    #[test]
    fn prop_list_round_trip(items in prop::collection::vec(item_strategy(), 0..32)) {
        let list: NetList<Item> = items.into_iter().collect();

        let payload = encode_field(&list);
        let mut fresh: NetList<Item> = NetList::new();
        fresh.net_read(&mut BitReader::new(&payload)).unwrap();

        prop_assert_eq!(fresh, list);
    }

    /// Maps decode to the same key/value set
    #[test]
    fn prop_map_round_trip(entries in prop::collection::hash_map(any::<u32>(), any::<i64>(), 0..64)) {
        let map: NetMap<u32, i64> = NetMap::from(entries.clone());

        let payload = encode_field(&map);
        let mut fresh: NetMap<u32, i64> = NetMap::new();
        fresh.net_read(&mut BitReader::new(&payload)).unwrap();

        let decoded: HashMap<u32, i64> = fresh.iter().map(|(k, v)| (*k, *v)).collect();
        prop_assert_eq!(decoded, entries);
    }

    /// Scalar values survive the wire
    #[test]
    fn prop_var_round_trip(value in any::<i64>(), start in any::<i64>()) {
        let var = NetVar::new(value);

        let payload = encode_field(&var);
        let mut fresh = NetVar::new(start);
        fresh.net_read(&mut BitReader::new(&payload)).unwrap();

        prop_assert_eq!(*fresh, value);
    }

    /// Never marks nothing, Always marks every write, OnChange marks only
    /// writes that differ from the held value
    #[test]
    fn prop_notify_condition_law(
        condition in notify_condition_strategy(),
        start in 0u8..4,
        writes in prop::collection::vec(0u8..4, 0..24),
    ) {
        let (sender, receiver) = DirtyChannel::new_channel();
        let marker = DirtyMarker::new(sender);
        let mut var = NetVar::with_marker(start, "level", &marker);
        var.set_notify_condition(condition);

        let mut expected = 0;
        let mut held = start;
        for value in &writes {
            let changed = *value != held;
            expected += match condition {
                NotifyCondition::Never => 0,
                NotifyCondition::Always => 1,
                NotifyCondition::OnChange => usize::from(changed),
            };
            held = *value;
            var.set(*value);
        }

        prop_assert_eq!(receiver.mark_count(), expected);
        prop_assert_eq!(*var, held);
    }

    /// Payload size agrees with bit_length for every container
    #[test]
    fn prop_bit_length_matches_payload(
        items in prop::collection::vec(item_strategy(), 0..16),
        entries in prop::collection::hash_map(any::<u16>(), any::<u8>(), 0..16),
    ) {
        let list: NetList<Item> = items.into_iter().collect();
        let map: NetMap<u16, u8> = entries.into_iter().collect();

        let fields: [&dyn Replicated; 2] = [&list, &map];
        for field in fields {
            let bits = field.bit_length() as usize;
            prop_assert_eq!(encode_field(field).len(), bits.div_ceil(8));
        }
    }
}
