//! Periodic tick source seam.
//!
//! The controller owns at most one handle returned by [`TickSource::acquire`].
//! Dropping the handle must stop the source; no tick for that stretch may be
//! produced afterwards, and any tick already in flight is filtered out by
//! its [`StretchId`].

use std::fmt;

/// Identifies one uninterrupted observing/drawing stretch.
///
/// A new id is issued every time a tick source is acquired, so a tick that
/// races with a pause or phase switch can be recognised as stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StretchId(u64);

impl StretchId {
    /// Build an id from its raw value.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub(crate) fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for StretchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Something that can drive the once-per-second countdown.
pub trait TickSource {
    /// Guard for one running source. Dropping it cancels the source.
    type Handle;

    /// Start delivering ticks tagged with `stretch`.
    fn acquire(&mut self, stretch: StretchId) -> Self::Handle;
}
