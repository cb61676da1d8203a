pub mod assertions;
pub mod packet_exchange;
pub mod test_protocol;

pub use packet_exchange::{encode_field, exchange_dirty, exchange_full_state};
pub use test_entity::TestEntity;
pub use test_protocol::Item;
