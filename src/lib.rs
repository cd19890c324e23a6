//! Trigsync-Core: trigger-synchronized TTL/DAC signal program engine
//!
//! Given a number of trigger cycles and a set of per-channel period, phase
//! and range specifications, this library synthesizes deterministic digital
//! (TTL) and analog (DAC) output waveforms aligned to trigger edges. It
//! provides:
//!
//! - A trigger generator and five trigger interpretation modes
//! - Toggle-event extraction and a toggle latch per channel
//! - Physical range mapping for analog channels
//! - A program store with point edits and regeneration on trigger resize
//! - TOML configuration with environment overrides
//!
//! # Quick Start
//!
//! ```rust
//! use trigsync_core::{ChannelParams, Program, TriggerMode};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut program = Program::new(3)?;
//!     program.add_channel("TTL1", "camera", ChannelParams::logical(2, true, TriggerMode::Change))?;
//!     program.add_channel(
//!         "DAC1",
//!         "coil",
//!         ChannelParams::analog(2, true, 0.0, 5.0, TriggerMode::Change)?,
//!     )?;
//!
//!     assert_eq!(program.get("TTL1")?.signal(), &[1.0, 1.0, 0.0, 0.0, 1.0, 1.0]);
//!     assert_eq!(program.get("DAC1")?.signal(), &[5.0, 5.0, 0.0, 0.0, 5.0, 5.0]);
//!
//!     program.resize_trigger(5)?;
//!     assert_eq!(program.n_points(), 10);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod error;
pub mod program;
pub mod signal;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::{ChannelConfig, ConfigLoader, ProgramConfig};
pub use error::{ProgramError, ProgramErrorKind, ProgramResult, SyncError, SyncResult};
pub use program::{
    ChannelId, ChannelParams, Program, ProgramSnapshot, RecordSnapshot, SharedProgram, SignalRecord,
};
pub use signal::{ChannelKind, EventMask, Signal, TriggerMode, VoltageRange};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Load the layered configuration and build its program
pub fn load_program(loader: &mut ConfigLoader) -> SyncResult<Program> {
    let config = loader.load()?;
    Ok(Program::from_config(&config)?)
}

/// Get library information
pub fn version_info() -> VersionInfo {
    VersionInfo {
        name: NAME.to_string(),
        version: VERSION.to_string(),
        description: "Trigger-synchronized TTL/DAC signal program engine".to_string(),
        features: vec![
            "Trigger generation with edge and level modes".to_string(),
            "Toggle-latch channel synthesis".to_string(),
            "Point edits with range widening".to_string(),
            "Regeneration on trigger resize".to_string(),
            "Layered TOML configuration".to_string(),
        ],
    }
}

/// Library version information
#[derive(Debug, Clone)]
pub struct VersionInfo {
    /// Library name
    pub name: String,
    /// Version string
    pub version: String,
    /// Description
    pub description: String,
    /// List of features
    pub features: Vec<String>,
}
