//! Simulated "thinking" pause before a reply.

use std::thread;
use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_MS: u64 = 800;
pub const DEFAULT_JITTER_MS: u64 = 600;

/// Reply delay: `base_ms` plus a uniform jitter in `[0, jitter_ms)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThinkingDelay {
    pub base_ms: u64,
    pub jitter_ms: u64,
}

impl Default for ThinkingDelay {
    fn default() -> Self {
        Self {
            base_ms: DEFAULT_BASE_MS,
            jitter_ms: DEFAULT_JITTER_MS,
        }
    }
}

impl ThinkingDelay {
    /// No pause at all.
    pub const fn none() -> Self {
        Self {
            base_ms: 0,
            jitter_ms: 0,
        }
    }

    pub const fn is_none(&self) -> bool {
        self.base_ms == 0 && self.jitter_ms == 0
    }

    /// Draw one delay using `rng`.
    pub fn sample_with<R: Rng>(&self, rng: &mut R) -> Duration {
        let jitter = if self.jitter_ms == 0 {
            0
        } else {
            rng.gen_range(0..self.jitter_ms)
        };
        Duration::from_millis(self.base_ms.saturating_add(jitter))
    }

    pub fn sample(&self) -> Duration {
        self.sample_with(&mut rand::thread_rng())
    }

    /// Block the current thread for one sampled delay.
    pub fn pause(&self) {
        if self.is_none() {
            return;
        }
        let d = self.sample();
        log::trace!("thinking for {} ms", d.as_millis());
        thread::sleep(d);
    }
}
