//! # Netwrap Shared
//! Replicated state containers: a scalar cell, a list and a map that detect
//! their own changes, report them to a dirty sink, and encode or decode
//! their entire contents for full-state synchronization.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

pub use netwrap_serde::{
    BitCounter, BitReader, BitWrite, BitWriter, ConstBitLength, OwnedBitReader, Serde, SerdeErr,
    StreamWriter, MTU_SIZE_BITS, MTU_SIZE_BYTES,
};

mod collections;
mod config;
mod constants;
mod dirty;
mod error;
mod replicated;
mod var;

pub use collections::{
    error::{NetListError, NetMapError},
    net_list::NetList,
    net_map::NetMap,
};
pub use config::CollectionConfig;
pub use constants::MAX_DECODED_LEN;
pub use dirty::{
    dirty_channel::{DirtyChannel, DirtyField, DirtyReceiver, DirtySender},
    dirty_mark::{DirtyMark, DirtyMarkClone, DirtyMarker},
    error::DirtyChannelError,
    net_var_group::NetVarGroup,
};
pub use error::DecodeError;
pub use replicated::Replicated;
pub use var::{
    net_var::{ListenerId, NetVar},
    notify_condition::NotifyCondition,
};
