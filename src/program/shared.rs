//! Thread-shared program handle
//! Location: src/program/shared.rs

use parking_lot::{RwLock, RwLockReadGuard};
use std::ops::Range;
use std::sync::Arc;

use crate::error::ProgramResult;

use super::identifier::ChannelId;
use super::record::{ChannelParams, SignalRecord};
use super::snapshot::ProgramSnapshot;
use super::store::Program;

/// Cloneable handle to one [`Program`].
///
/// Each mutation holds the write lock for its whole duration; snapshots and
/// [`SharedProgram::read`] take the shared lock.
#[derive(Debug, Clone)]
pub struct SharedProgram {
    inner: Arc<RwLock<Program>>,
}

impl SharedProgram {
    /// Wrap `program` for shared access
    pub fn new(program: Program) -> Self {
        Self {
            inner: Arc::new(RwLock::new(program)),
        }
    }

    /// Shared read access for rendering or export
    pub fn read(&self) -> RwLockReadGuard<'_, Program> {
        self.inner.read()
    }

    /// Plain-data copy taken under the read lock
    pub fn snapshot(&self) -> ProgramSnapshot {
        self.inner.read().snapshot()
    }

    /// See [`Program::add_channel`]
    pub fn add_channel(&self, identifier: &str, alias: &str, params: ChannelParams) -> ProgramResult<ChannelId> {
        self.inner.write().add_channel(identifier, alias, params)
    }

    /// See [`Program::remove_channel`]
    pub fn remove_channel(&self, identifier: &str) -> ProgramResult<SignalRecord> {
        self.inner.write().remove_channel(identifier)
    }

    /// See [`Program::edit_point`]
    pub fn edit_point(&self, identifier: &str, sample_range: Range<usize>, value: f64) -> ProgramResult<()> {
        self.inner.write().edit_point(identifier, sample_range, value)
    }

    /// See [`Program::resize_trigger`]
    pub fn resize_trigger(&self, new_cycles: u32) -> ProgramResult<()> {
        self.inner.write().resize_trigger(new_cycles)
    }

    /// Run several mutations under one write lock
    pub fn update<T>(&self, f: impl FnOnce(&mut Program) -> ProgramResult<T>) -> ProgramResult<T> {
        f(&mut self.inner.write())
    }

    /// Unwrap the program if this is the last handle
    pub fn into_inner(self) -> Result<Program, Self> {
        Arc::try_unwrap(self.inner)
            .map(|lock| lock.into_inner())
            .map_err(|inner| Self { inner })
    }
}

impl From<Program> for SharedProgram {
    fn from(program: Program) -> Self {
        Self::new(program)
    }
}
