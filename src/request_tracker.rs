// ABOUTME: Stale-response protection and duplicate-submission guards for concurrent requests
// ABOUTME: Per-channel generation counters and an RAII in-flight flag
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Request tracking
//!
//! A UI can fire several reads on the same channel (typing into food search, flipping weeks)
//! before the first answer arrives. Each call takes a [`Generation`]; only the response whose
//! generation is still the newest for its channel should be applied.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use dashmap::DashMap;

/// Ticket identifying one request on a channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    channel: String,
    value: u64,
}

impl Generation {
    /// Channel this ticket belongs to
    #[must_use]
    pub fn channel(&self) -> &str {
        &self.channel
    }

    /// Counter value
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.value
    }
}

/// Monotonic generation counters keyed by channel name
#[derive(Debug, Default, Clone)]
pub struct RequestTracker {
    generations: Arc<DashMap<String, u64>>,
}

impl RequestTracker {
    /// Create an empty tracker
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request on `channel`, superseding every earlier one
    #[must_use]
    pub fn begin(&self, channel: &str) -> Generation {
        let mut entry = self.generations.entry(channel.to_owned()).or_insert(0);
        *entry += 1;
        Generation {
            channel: channel.to_owned(),
            value: *entry,
        }
    }

    /// Whether `generation` is still the newest on its channel
    #[must_use]
    pub fn is_current(&self, generation: &Generation) -> bool {
        self.generations
            .get(&generation.channel)
            .is_some_and(|current| *current == generation.value)
    }

    /// Pass `value` through only if `generation` is still current
    pub fn accept<T>(&self, generation: &Generation, value: T) -> Option<T> {
        self.is_current(generation).then_some(value)
    }
}

/// Loading flag that rejects overlapping submissions
#[derive(Debug, Default, Clone)]
pub struct InFlight {
    busy: Arc<AtomicBool>,
}

impl InFlight {
    /// Create an idle flag
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a request is outstanding
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Claim the flag; `None` while another request holds it
    #[must_use]
    pub fn try_start(&self) -> Option<InFlightGuard> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlightGuard {
                busy: Arc::clone(&self.busy),
            })
    }
}

/// Releases the in-flight flag when dropped
#[derive(Debug)]
pub struct InFlightGuard {
    busy: Arc<AtomicBool>,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_generation_supersedes_older() {
        let tracker = RequestTracker::new();
        let first = tracker.begin("food-search");
        let second = tracker.begin("food-search");
        assert!(!tracker.is_current(&first));
        assert!(tracker.is_current(&second));
        assert_eq!(tracker.accept(&first, "chick"), None);
        assert_eq!(tracker.accept(&second, "chicken"), Some("chicken"));
    }

    #[test]
    fn test_channels_are_independent() {
        let tracker = RequestTracker::new();
        let search = tracker.begin("food-search");
        let _week = tracker.begin("weekly");
        assert!(tracker.is_current(&search));
        assert_eq!(search.channel(), "food-search");
        assert_eq!(search.value(), 1);
    }

    #[test]
    fn test_in_flight_blocks_duplicates_until_dropped() {
        let flag = InFlight::new();
        let guard = flag.try_start();
        assert!(guard.is_some());
        assert!(flag.is_loading());
        assert!(flag.try_start().is_none());
        drop(guard);
        assert!(!flag.is_loading());
        assert!(flag.try_start().is_some());
    }
}
