use crate::{Cue, MediaTrigger, StretchId, TickSource};

use std::path::PathBuf;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use tempfile::TempDir;

/// Tick source that counts live handles instead of ticking.
#[derive(Debug, Clone, Default)]
pub(crate) struct FakeTicker {
    live: Arc<AtomicUsize>,
    peak: Arc<AtomicUsize>,
    acquired: Arc<Mutex<Vec<StretchId>>>,
}

impl FakeTicker {
    pub(crate) fn live(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }

    pub(crate) fn peak(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }

    #[allow(clippy::unwrap_used)]
    pub(crate) fn acquired(&self) -> Vec<StretchId> {
        self.acquired.lock().unwrap().clone()
    }
}

#[derive(Debug)]
pub(crate) struct FakeHandle {
    live: Arc<AtomicUsize>,
}

impl Drop for FakeHandle {
    fn drop(&mut self) {
        self.live.fetch_sub(1, Ordering::SeqCst);
    }
}

impl TickSource for FakeTicker {
    type Handle = FakeHandle;

    #[allow(clippy::unwrap_used)]
    fn acquire(&mut self, stretch: StretchId) -> Self::Handle {
        let live = self.live.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(live, Ordering::SeqCst);
        self.acquired.lock().unwrap().push(stretch);
        FakeHandle {
            live: Arc::clone(&self.live),
        }
    }
}

/// Media trigger that records every cue.
#[derive(Debug, Clone, Default)]
pub(crate) struct RecordingMedia {
    cues: Arc<Mutex<Vec<Cue>>>,
}

impl RecordingMedia {
    #[allow(clippy::unwrap_used)]
    pub(crate) fn cues(&self) -> Vec<Cue> {
        self.cues.lock().unwrap().clone()
    }
}

impl MediaTrigger for RecordingMedia {
    #[allow(clippy::unwrap_used)]
    fn trigger(&self, cue: Cue) {
        self.cues.lock().unwrap().push(cue);
    }
}

/// Write a small PNG into a fresh temp dir.
#[allow(clippy::unwrap_used)]
pub(crate) fn png_fixture(width: u32, height: u32) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reference.png");
    image::RgbImage::new(width, height).save(&path).unwrap();
    (dir, path)
}
