// src/config/constants.rs
//! Program-wide constants

/// Trigger program sizing
pub mod program {
    /// Samples per trigger cycle: one high, one low
    pub const SAMPLES_PER_CYCLE: usize = 2;
    /// Smallest cycle count a program accepts
    pub const MIN_CYCLES: u32 = 1;
    /// Caps a program at 2M samples per channel
    pub const MAX_CYCLES: u32 = 1_000_000;
    /// Cycle count when no configuration names one
    pub const DEFAULT_CYCLES: u32 = 10;
}

/// Channel defaults
pub mod channel {
    /// Smallest toggle period
    pub const MIN_PERIOD: u32 = 1;
    /// Toggle on every trigger occurrence
    pub const DEFAULT_PERIOD: u32 = 1;
    /// Channels start high unless configured otherwise
    pub const DEFAULT_IN_PHASE: bool = true;
    /// TTL low level
    pub const LOGICAL_LOW: f64 = 0.0;
    /// TTL high level
    pub const LOGICAL_HIGH: f64 = 1.0;
    /// DAC output bounds in volts
    pub const DEFAULT_ANALOG_RANGE: [f64; 2] = [0.0, 5.0];
}

/// Record identifiers
pub mod identifiers {
    /// Identifier of the trigger record
    pub const TRIGGER: &str = "trigger";
    /// Prefix of logical channel identifiers
    pub const TTL_PREFIX: &str = "TTL";
    /// Prefix of analog channel identifiers
    pub const DAC_PREFIX: &str = "DAC";
    /// Default alias of the trigger record
    pub const TRIGGER_ALIAS: &str = "Trigger";
}

/// Configuration file discovery
pub mod paths {
    /// System-wide configuration
    pub const SYSTEM_CONFIG_PATH: &str = "/etc/trigsync/program.toml";
    /// Per-user directory, relative to the home directory
    pub const USER_CONFIG_DIR: &str = ".config/trigsync";
    /// Project defaults, relative to the working directory
    pub const DEFAULT_CONFIG_FILE: &str = "config/default.toml";
    /// Local overrides, highest file precedence
    pub const LOCAL_CONFIG_FILE: &str = "program.toml";
}

/// Environment overrides
pub mod env {
    /// `TRIGSYNC_CYCLES=5` overrides `cycles`
    pub const ENV_PREFIX: &str = "TRIGSYNC_";
}
