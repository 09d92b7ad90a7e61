//! RNG oracle for hit, damage, flee and loot rolls.
//!
//! Rolls must be independent per call, so implementations carry their own
//! state behind `&self` and can be shared across tasks.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

pub trait RngOracle: Send + Sync {
    /// Next raw 32-bit value.
    fn next_u32(&self) -> u32;

    /// Roll a d100 (1-100 inclusive).
    fn roll_d100(&self) -> u32 {
        (self.next_u32() % 100) + 1
    }

    /// Uniform value in `[min, max]` inclusive; returns `min` when the range is empty.
    fn range(&self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let span = (max - min) as u64 + 1;
        min + (self.next_u32() as u64 % span) as u32
    }

    /// True with probability `percent`/100. Values ≥100 always succeed.
    fn percent_chance(&self, percent: f64) -> bool {
        if percent >= 100.0 {
            return true;
        }
        if percent <= 0.0 {
            return false;
        }
        let roll = (self.next_u32() % 10_000) as f64 / 100.0;
        roll < percent
    }
}

impl<T: RngOracle + ?Sized> RngOracle for &T {
    fn next_u32(&self) -> u32 {
        (**self).next_u32()
    }
}

/// PCG random number generator (PCG-XSH-RR, 64-bit state, 32-bit output).
///
/// Seeded and reproducible; the state advances atomically so one instance
/// can serve concurrent actions.
#[derive(Debug)]
pub struct PcgRng {
    state: AtomicU64,
}

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    pub fn new(seed: u64) -> Self {
        Self {
            state: AtomicU64::new(Self::pcg_step(seed)),
        }
    }

    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl Default for PcgRng {
    fn default() -> Self {
        Self::new(0)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self) -> u32 {
        let previous = self
            .state
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |s| {
                Some(Self::pcg_step(s))
            })
            .unwrap_or_else(|s| s);
        Self::pcg_output(Self::pcg_step(previous))
    }
}

/// Replays queued d100/range results; used by tests to force outcomes.
///
/// Every roll pops the next value and clamps it into the requested range.
/// When the queue runs dry the fallback value is used.
#[derive(Debug)]
pub struct ScriptedRng {
    values: Mutex<VecDeque<u32>>,
    fallback: u32,
}

impl ScriptedRng {
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            values: Mutex::new(values.into_iter().collect()),
            fallback: 1,
        }
    }

    pub fn with_fallback(mut self, fallback: u32) -> Self {
        self.fallback = fallback;
        self
    }

    /// Appends more values to the script.
    pub fn push(&self, values: impl IntoIterator<Item = u32>) {
        if let Ok(mut queue) = self.values.lock() {
            queue.extend(values);
        }
    }

    pub fn remaining(&self) -> usize {
        self.values.lock().map(|q| q.len()).unwrap_or(0)
    }

    fn pop(&self) -> u32 {
        self.values
            .lock()
            .ok()
            .and_then(|mut q| q.pop_front())
            .unwrap_or(self.fallback)
    }
}

impl RngOracle for ScriptedRng {
    fn next_u32(&self) -> u32 {
        self.pop()
    }

    fn roll_d100(&self) -> u32 {
        self.pop().clamp(1, 100)
    }

    fn range(&self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        self.pop().clamp(min, max)
    }

    /// Scripted value is a d100 roll; succeeds when `roll <= percent`.
    fn percent_chance(&self, percent: f64) -> bool {
        let roll = self.pop().clamp(1, 100);
        (roll as f64) <= percent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pcg_is_reproducible_per_seed() {
        let a = PcgRng::new(42);
        let b = PcgRng::new(42);
        let seq_a: Vec<u32> = (0..8).map(|_| a.next_u32()).collect();
        let seq_b: Vec<u32> = (0..8).map(|_| b.next_u32()).collect();
        assert_eq!(seq_a, seq_b);
        assert_ne!(seq_a[0], seq_a[1]);
    }

    #[test]
    fn d100_stays_in_bounds() {
        let rng = PcgRng::new(7);
        for _ in 0..1_000 {
            let roll = rng.roll_d100();
            assert!((1..=100).contains(&roll));
        }
    }

    #[test]
    fn range_handles_degenerate_bounds() {
        let rng = PcgRng::new(1);
        assert_eq!(rng.range(5, 5), 5);
        assert_eq!(rng.range(9, 3), 9);
        for _ in 0..200 {
            assert!((3..=9).contains(&rng.range(3, 9)));
        }
    }

    #[test]
    fn scripted_values_are_clamped_and_fall_back() {
        let rng = ScriptedRng::new([0, 250, 7]).with_fallback(50);
        assert_eq!(rng.roll_d100(), 1);
        assert_eq!(rng.roll_d100(), 100);
        assert_eq!(rng.range(1, 5), 5);
        assert_eq!(rng.roll_d100(), 50);
    }

    #[test]
    fn percent_chance_edges() {
        let rng = PcgRng::new(3);
        assert!(rng.percent_chance(100.0));
        assert!(rng.percent_chance(150.0));
        assert!(!rng.percent_chance(0.0));
    }
}
