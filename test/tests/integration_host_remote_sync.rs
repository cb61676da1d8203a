/// Host and remote entities kept in sync through dirty-driven full-state
/// exchange

use netwrap_shared::{NotifyCondition, Replicated};
use netwrap_test::{assert_clean, assert_dirty, exchange_dirty, exchange_full_state, Item, TestEntity};

fn init_logger() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init()
        .ok();
}

#[test]
fn only_dirty_fields_are_sent() {
    init_logger();

    let mut host = TestEntity::new(100);
    let mut remote = TestEntity::new(100);

    host.scores.add('p', 10).unwrap();
    assert_dirty!(host, [TestEntity::SCORES]);

    let sent = exchange_dirty(&host, &mut remote).unwrap();

    assert_eq!(sent, 1);
    assert_clean!(host);
    assert_eq!(remote.scores, host.scores);
    assert!(remote.inventory.is_empty());
}

#[test]
fn several_dirty_fields_travel_in_one_payload() {
    init_logger();

    let mut host = TestEntity::new(100);
    let mut remote = TestEntity::new(100);

    host.inventory.add(Item::new(1, "rope", 1.0));
    host.health.set(80);
    host.inventory.add(Item::new(2, "lamp", 2.5));
    host.scores.add('q', -3).unwrap();

    assert_dirty!(host, [TestEntity::INVENTORY, TestEntity::HEALTH, TestEntity::SCORES]);
    assert_eq!(host.dirty().mark_count(), 4);

    let sent = exchange_dirty(&host, &mut remote).unwrap();

    assert_eq!(sent, 3);
    assert_eq!(*remote.health, 80);
    assert_eq!(remote.inventory, host.inventory);
    assert_eq!(remote.scores, host.scores);
}

#[test]
fn remote_collections_stay_clean_but_var_reports_update() {
    init_logger();

    let mut host = TestEntity::new(100);
    let mut remote = TestEntity::new(100);

    host.health.set(1);
    host.inventory.add(Item::new(1, "rope", 1.0));
    host.scores.add('z', 0).unwrap();

    exchange_dirty(&host, &mut remote).unwrap();

    // a received value goes through NetVar::set, collections replace silently
    assert_dirty!(remote, [TestEntity::HEALTH]);
}

#[test]
fn full_state_reaches_a_late_joiner() {
    init_logger();

    let mut host = TestEntity::new(50);
    host.inventory.add(Item::new(4, "map", 0.1));
    host.scores.add('a', 1).unwrap();
    host.dirty().drain();

    let mut late = TestEntity::new(0);
    exchange_full_state(&host, &mut late).unwrap();

    assert_eq!(*late.health, 50);
    assert_eq!(late.inventory, host.inventory);
    assert_eq!(late.scores, host.scores);
}

#[test]
fn unchanged_writes_send_nothing() {
    let mut host = TestEntity::new(10);
    let mut remote = TestEntity::new(10);
    host.inventory.add(Item::new(1, "rope", 1.0));
    host.scores.add('a', 1).unwrap();
    exchange_dirty(&host, &mut remote).unwrap();

    host.health.set(10);
    host.inventory.set(0, Item::new(1, "rope", 1.0)).unwrap();
    host.scores.set('a', 1).unwrap();
    host.inventory.clear();
    host.inventory.clear();

    assert_dirty!(host, [TestEntity::INVENTORY]);
    assert_eq!(exchange_dirty(&host, &mut remote), Ok(1));
    assert!(remote.inventory.is_empty());
}

#[test]
fn notify_condition_never_keeps_var_off_the_wire() {
    let mut host = TestEntity::new(10);
    host.health.set_notify_condition(NotifyCondition::Never);

    host.health.set(11);

    assert_clean!(host);
    assert_eq!(*host.health, 11);
}

#[test]
fn bit_lengths_match_payload_sizes() {
    let mut host = TestEntity::new(10);
    host.inventory.add(Item::new(1, "rope", 1.0));
    host.scores.add('a', 1).unwrap();

    for field in host.fields() {
        let payload = netwrap_test::encode_field(field);
        let bits = field.bit_length() as usize;
        assert_eq!(payload.len(), bits.div_ceil(8), "field `{}`", field.field_name());
    }
}
