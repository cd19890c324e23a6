//! Plain-data export of a program
//! Location: src/program/snapshot.rs

use serde::{Deserialize, Serialize};

use crate::signal::TriggerMode;

use super::record::SignalRecord;

/// Serializable copy of one record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordSnapshot {
    /// `trigger`, `TTL{n}` or `DAC{n}`
    pub identifier: String,
    /// Human-readable label
    pub alias: String,
    /// Sample count
    pub n_points: usize,
    /// Trigger occurrences between toggles
    pub period: u32,
    /// Whether sample 0 is high
    pub in_phase: bool,
    /// TTL (`true`) or DAC (`false`)
    pub is_logical: bool,
    /// Trigger interpretation mode
    pub trigger_mode: TriggerMode,
    /// Current `[low, high]` bounds
    pub range: [f64; 2],
    /// Physically scaled samples
    pub signal: Vec<f64>,
}

impl From<&SignalRecord> for RecordSnapshot {
    fn from(record: &SignalRecord) -> Self {
        Self {
            identifier: record.identifier(),
            alias: record.alias().to_string(),
            n_points: record.n_points(),
            period: record.period(),
            in_phase: record.in_phase(),
            is_logical: record.is_logical(),
            trigger_mode: record.mode(),
            range: record.range(),
            signal: record.signal().to_vec(),
        }
    }
}

/// Serializable copy of a whole program; the trigger is always `records[0]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramSnapshot {
    /// Trigger cycles
    pub cycles: u32,
    /// Samples per record
    pub n_points: usize,
    /// Trigger first, then channels in creation order
    pub records: Vec<RecordSnapshot>,
}

impl ProgramSnapshot {
    /// The trigger record
    pub fn trigger(&self) -> Option<&RecordSnapshot> {
        self.records.first()
    }

    /// Record by identifier
    pub fn record(&self, identifier: &str) -> Option<&RecordSnapshot> {
        self.records.iter().find(|r| r.identifier == identifier)
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Parse a snapshot written by [`ProgramSnapshot::to_json`]
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
