/// Assert that an entity has no fields waiting to be sent
#[macro_export]
macro_rules! assert_clean {
    ($entity:expr) => {
        assert!(
            $entity.dirty().is_clear(),
            "Expected no dirty fields, found {:?}",
            $entity.dirty().dirty_fields()
        );
    };
}

/// Assert that exactly the given fields are waiting to be sent, in the order
/// they were first marked
#[macro_export]
macro_rules! assert_dirty {
    ($entity:expr, [$($field:expr),* $(,)?]) => {
        let expected: Vec<&str> = vec![$($field),*];
        let actual: Vec<&str> = $entity
            .dirty()
            .dirty_fields()
            .into_iter()
            .map(|(field_name, _group)| field_name)
            .collect();
        assert_eq!(actual, expected, "Dirty fields mismatch");
    };
}
