//! Signal program: trigger record, TTL/DAC channels and their mutation
//! Location: src/program/mod.rs

pub mod identifier;
pub mod record;
mod regenerate;
pub mod shared;
pub mod snapshot;
pub mod store;

pub use identifier::ChannelId;
pub use record::{ChannelParams, SignalRecord};
pub use shared::SharedProgram;
pub use snapshot::{ProgramSnapshot, RecordSnapshot};
pub use store::Program;
