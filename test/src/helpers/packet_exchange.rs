use netwrap_shared::{BitReader, DecodeError, Replicated, Serde, StreamWriter};

use crate::helpers::test_entity::TestEntity;

/// Encodes one field's full contents on its own
pub fn encode_field(field: &dyn Replicated) -> Vec<u8> {
    let mut writer = StreamWriter::new();
    field.net_write(&mut writer);
    writer.to_bytes()
}

/// Stands in for the transport: drains the host's dirty fields, frames
/// each as `<name><contents>` in one payload, and applies it to the remote.
/// Returns how many fields were sent.
pub fn exchange_dirty(host: &TestEntity, remote: &mut TestEntity) -> Result<usize, DecodeError> {
    let dirty_fields = host.dirty().drain();

    let mut writer = StreamWriter::new();
    for (field_name, _group) in &dirty_fields {
        let field = host
            .field(field_name)
            .unwrap_or_else(|| panic!("host has no field named `{}`", field_name));
        field_name.to_string().ser(&mut writer);
        field.net_write(&mut writer);
    }
    let payload = writer.to_bytes();

    let mut reader = BitReader::new(&payload);
    for _ in 0..dirty_fields.len() {
        let field_name = String::de(&mut reader)?;
        let field = remote
            .field_mut(&field_name)
            .unwrap_or_else(|| panic!("remote has no field named `{}`", field_name));
        field.net_read(&mut reader)?;
    }

    Ok(dirty_fields.len())
}

/// Sends every field regardless of dirtiness, as on first replication
pub fn exchange_full_state(host: &TestEntity, remote: &mut TestEntity) -> Result<(), DecodeError> {
    for field in host.fields() {
        let payload = encode_field(field);
        let target = remote
            .field_mut(field.field_name())
            .unwrap_or_else(|| panic!("remote has no field named `{}`", field.field_name()));
        target.net_read(&mut BitReader::new(&payload))?;
    }
    Ok(())
}
