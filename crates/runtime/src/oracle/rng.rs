//! Non-deterministic rolls from the thread-local generator.
use combat_core::RngOracle;
use rand::Rng;

/// Draws every roll from `rand::thread_rng`, so rolls are independent per
/// call and need no coordination between tasks.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadRngOracle;

impl RngOracle for ThreadRngOracle {
    fn next_u32(&self) -> u32 {
        rand::thread_rng().r#gen()
    }

    fn roll_d100(&self) -> u32 {
        rand::thread_rng().gen_range(1..=100)
    }

    fn range(&self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        rand::thread_rng().gen_range(min..=max)
    }

    fn percent_chance(&self, percent: f64) -> bool {
        if percent >= 100.0 {
            return true;
        }
        if percent <= 0.0 {
            return false;
        }
        rand::thread_rng().gen_bool(percent / 100.0)
    }
}
