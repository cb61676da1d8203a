/// A map of {'a': 1, 'b': 2} decodes into exactly the same entries,
/// whatever order they were written in

use netwrap_shared::{BitReader, NetMap, Replicated};
use netwrap_test::encode_field;

#[test]
fn entries_round_trip_independent_of_order() {
    let mut map: NetMap<char, i32> = NetMap::new();
    map.add('a', 1).unwrap();
    map.add('b', 2).unwrap();

    let payload = encode_field(&map);

    let mut fresh: NetMap<char, i32> = NetMap::new();
    fresh.net_read(&mut BitReader::new(&payload)).unwrap();

    assert_eq!(fresh.len(), 2);
    assert_eq!(fresh.get(&'a'), Ok(&1));
    assert_eq!(fresh.get(&'b'), Ok(&2));

    let reversed: NetMap<char, i32> = [('b', 2), ('a', 1)].into_iter().collect();
    assert_eq!(fresh, reversed);
}
