// File: crates/scatter-core/src/transition.rs
// Summary: Time-based attribute tweens keyed by (node, attribute), advanced by a host clock.

use std::collections::HashMap;

use crate::axis::AxisId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    #[default]
    CubicInOut,
}

impl Easing {
    /// Map normalized time `t` in `[0, 1]` to eased progress.
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::CubicInOut => {
                let t2 = t * 2.0;
                if t2 <= 1.0 {
                    t2 * t2 * t2 / 2.0
                } else {
                    let u = t2 - 2.0;
                    (u * u * u + 2.0) / 2.0
                }
            }
        }
    }
}

/// Scene element a transition writes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Node {
    Circle(usize),
    StateText(usize),
    Axis(AxisId),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Attr {
    Cx,
    Cy,
    Dx,
    Dy,
    DomainMin,
    DomainMax,
}

pub type Key = (Node, Attr);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub from: f64,
    pub to: f64,
    pub start_ms: f64,
    pub duration_ms: f64,
    pub easing: Easing,
}

impl Transition {
    pub fn end_ms(&self) -> f64 {
        self.start_ms + self.duration_ms
    }

    pub fn is_done(&self, now_ms: f64) -> bool {
        now_ms >= self.end_ms()
    }

    pub fn value_at(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 || self.is_done(now_ms) {
            return self.to;
        }
        let t = (now_ms - self.start_ms) / self.duration_ms;
        let k = self.easing.apply(t);
        self.from + (self.to - self.from) * k
    }
}

/// In-flight transitions. At most one per key; a newer schedule supersedes.
#[derive(Clone, Debug, Default)]
pub struct Timeline {
    active: HashMap<Key, Transition>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `key` to move to `to`. When a transition on `key` is already
    /// running, the new one starts from its value at `now_ms`, otherwise from
    /// `current`.
    pub fn schedule(
        &mut self,
        key: Key,
        current: f64,
        to: f64,
        now_ms: f64,
        duration_ms: f64,
        easing: Easing,
    ) {
        let from = self
            .active
            .get(&key)
            .map(|t| t.value_at(now_ms))
            .unwrap_or(current);
        log::trace!("schedule {:?}: {} -> {} over {}ms", key, from, to, duration_ms);
        self.active.insert(
            key,
            Transition { from, to, start_ms: now_ms, duration_ms, easing },
        );
    }

    /// Values for every in-flight key at `now_ms`. Finished transitions yield
    /// their exact end value once and are dropped.
    pub fn advance(&mut self, now_ms: f64) -> Vec<(Key, f64)> {
        let out = self
            .active
            .iter()
            .map(|(k, t)| (*k, t.value_at(now_ms)))
            .collect();
        self.active.retain(|_, t| !t.is_done(now_ms));
        out
    }

    pub fn get(&self, key: &Key) -> Option<&Transition> {
        self.active.get(key)
    }

    /// Drop every transition, returning their end values so callers can snap.
    pub fn drain(&mut self) -> Vec<(Key, f64)> {
        self.active.drain().map(|(k, t)| (k, t.to)).collect()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
