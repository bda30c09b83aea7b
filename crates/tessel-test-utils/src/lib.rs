//! Test utilities and mock collaborators for Tessel development.
//!
//! The recording mocks share one [`CallLog`] so a test can assert the
//! exact order in which layout creation drives its collaborators. See
//! [`recording_collaborators`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::sync::{Arc, Mutex, MutexGuard};

use tessel_layout::{
    Collaborators, Layout, MapInitializer, PoolAllocator, RngService, SubsetInitializer,
};

/// One collaborator call, as seen by the recording mocks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    /// `PoolAllocator::init` with the pool size in MiB.
    PoolInit(usize),
    /// `SubsetInitializer::init_default_sets` for a layout of this volume.
    DefaultSets(usize),
    /// `MapInitializer::init_default_maps` for a layout of this volume.
    DefaultMaps(usize),
    /// `RngService::initialize_default` for a layout of this volume.
    RngInit(usize),
    /// `RngService::finalize`.
    RngFinalize,
}

/// Shared, ordered record of collaborator calls.
#[derive(Clone, Debug, Default)]
pub struct CallLog(Arc<Mutex<Vec<Call>>>);

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    // Poisoning is ignored; the log stays readable after a failed assertion.
    fn entries(&self) -> MutexGuard<'_, Vec<Call>> {
        self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn push(&self, call: Call) {
        self.entries().push(call);
    }

    /// Snapshot of every call so far, oldest first.
    pub fn calls(&self) -> Vec<Call> {
        self.entries().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    pub fn clear(&self) {
        self.entries().clear();
    }
}

/// Mock [`RngService`] that only records.
pub struct RecordingRng {
    log: CallLog,
}

impl RecordingRng {
    pub fn new(log: CallLog) -> Self {
        Self { log }
    }
}

impl RngService for RecordingRng {
    fn initialize_default(&mut self, layout: &Layout) {
        self.log.push(Call::RngInit(layout.volume()));
    }

    fn finalize(&mut self) {
        self.log.push(Call::RngFinalize);
    }
}

/// Mock [`PoolAllocator`] that records and accepts every size.
pub struct RecordingAllocator {
    log: CallLog,
}

impl RecordingAllocator {
    pub fn new(log: CallLog) -> Self {
        Self { log }
    }
}

impl PoolAllocator for RecordingAllocator {
    fn init(&mut self, pool_size_mb: usize) -> Result<(), String> {
        self.log.push(Call::PoolInit(pool_size_mb));
        Ok(())
    }
}

/// Mock [`SubsetInitializer`] that only records.
pub struct RecordingSubsets {
    log: CallLog,
}

impl RecordingSubsets {
    pub fn new(log: CallLog) -> Self {
        Self { log }
    }
}

impl SubsetInitializer for RecordingSubsets {
    fn init_default_sets(&mut self, layout: &Layout) {
        self.log.push(Call::DefaultSets(layout.volume()));
    }
}

/// Mock [`MapInitializer`] that only records.
pub struct RecordingMaps {
    log: CallLog,
}

impl RecordingMaps {
    pub fn new(log: CallLog) -> Self {
        Self { log }
    }
}

impl MapInitializer for RecordingMaps {
    fn init_default_maps(&mut self, layout: &Layout) {
        self.log.push(Call::DefaultMaps(layout.volume()));
    }
}

/// Allocator that always refuses, recording the attempt.
pub struct FailingAllocator {
    log: CallLog,
    reason: String,
}

impl FailingAllocator {
    pub fn new(log: CallLog, reason: impl Into<String>) -> Self {
        Self {
            log,
            reason: reason.into(),
        }
    }
}

impl PoolAllocator for FailingAllocator {
    fn init(&mut self, pool_size_mb: usize) -> Result<(), String> {
        self.log.push(Call::PoolInit(pool_size_mb));
        Err(self.reason.clone())
    }
}

/// A full set of recording collaborators sharing one log.
pub fn recording_collaborators() -> (Collaborators, CallLog) {
    let log = CallLog::new();
    let collaborators = Collaborators {
        rng: Box::new(RecordingRng::new(log.clone())),
        allocator: Box::new(RecordingAllocator::new(log.clone())),
        subsets: Box::new(RecordingSubsets::new(log.clone())),
        maps: Box::new(RecordingMaps::new(log.clone())),
    };
    (collaborators, log)
}
