pub mod context;
pub mod report;
pub mod trackers;

pub use self::context::{Finger, Hand, MetricContext};
pub use self::report::Report;

use crate::error::KgResult;
use std::collections::VecDeque;

/// A stateful, per-run tracker. Each variant supplies only the hooks it
/// needs; `evaluate` is the shared dispatch and is not meant to be
/// overridden.
pub trait Metric {
    /// Prepares the tracker for a fresh stream against `ctx`'s layout. Must
    /// run before the first `evaluate`.
    fn init(&mut self, _ctx: &MetricContext) -> KgResult<()> {
        Ok(())
    }

    /// Tracker-specific classification of an in-layout character.
    fn condition(&mut self, _ctx: &MetricContext, _key: char) -> bool {
        true
    }

    fn on_true(&mut self, ctx: &MetricContext, key: char);

    fn on_false(&mut self, _ctx: &MetricContext, _key: char) {}

    /// Hook for literal space characters, which never reach the
    /// classification path.
    fn on_space(&mut self) {}

    /// Finalizes accumulated state into an immutable [`Report`]. Does not
    /// mutate the tracker; calling it before the stream is exhausted yields
    /// a premature, partial snapshot.
    fn report(&self) -> Report;

    /// Single per-character entry point, called in corpus order. Spaces go
    /// to `on_space`; characters with no coordinate on the layout (even
    /// after shift normalization) are skipped without touching any state;
    /// everything else branches on `condition`.
    fn evaluate(&mut self, ctx: &MetricContext, key: char) {
        if key == ' ' {
            self.on_space();
            return;
        }
        if ctx.coord(key).is_none() {
            return;
        }
        if self.condition(ctx, key) {
            self.on_true(ctx, key);
        } else {
            self.on_false(ctx, key);
        }
    }
}

/// Bounded FIFO of the most recently evaluated non-space characters, oldest
/// first. Pushing past capacity evicts the oldest entry. Capacity 0 means
/// unbounded.
pub struct KeyHistory {
    buf: VecDeque<char>,
    capacity: usize,
}

impl KeyHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            buf: VecDeque::new(),
            capacity,
        }
    }

    pub fn push(&mut self, key: char) {
        self.buf.push_back(key);
        if self.capacity > 0 && self.buf.len() > self.capacity {
            self.buf.pop_front();
        }
    }

    /// Most recently pushed character.
    pub fn last(&self) -> Option<char> {
        self.buf.back().copied()
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}
