//! Simulated backend: seedable randomness, artificial latency and optional
//! injected failures for every mock "network" call.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::AppError;

/// Shared, seedable random source.
///
/// Clones share one generator, so a single seed makes a whole session
/// reproducible.
#[derive(Debug, Clone)]
pub struct SimRng {
    inner: Arc<Mutex<SmallRng>>,
}

impl SimRng {
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(SmallRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::from_rng(SmallRng::from_os_rng())
    }

    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }

    fn from_rng(rng: SmallRng) -> Self {
        Self {
            inner: Arc::new(Mutex::new(rng)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SmallRng> {
        // The generator holds no invariants a panic could break
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Uniform value in [0, 1)
    pub fn unit(&self) -> f64 {
        self.lock().random::<f64>()
    }

    /// Uniform value in [low, high)
    pub fn uniform(&self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.unit()
    }

    /// Uniform integer in [low, high)
    pub fn int_below(&self, low: u32, high: u32) -> u32 {
        self.lock().random_range(low..high)
    }

    /// True with the given probability
    pub fn chance(&self, probability: f64) -> bool {
        self.unit() < probability
    }

    pub fn shuffle<T>(&self, items: &mut [T]) {
        items.shuffle(&mut *self.lock());
    }
}

/// Latency and failure behavior of simulated calls
#[derive(Debug, Clone)]
pub struct SimulatedBackend {
    rng: SimRng,
    simulate_latency: bool,
    failure_rate: f64,
}

impl SimulatedBackend {
    pub fn new(rng: SimRng, simulate_latency: bool, failure_rate: f64) -> Self {
        Self {
            rng,
            simulate_latency,
            failure_rate,
        }
    }

    pub fn from_config(config: &Config, rng: SimRng) -> Self {
        Self::new(rng, config.simulate_latency, config.failure_rate)
    }

    pub fn rng(&self) -> &SimRng {
        &self.rng
    }

    /// Waits out the artificial latency of a call, then fails it with the
    /// configured probability.
    pub async fn call(&self, operation: &str, target: &str, latency_ms: u64) -> Result<(), AppError> {
        if self.simulate_latency {
            debug!("Simulating {}ms latency for {} ({})", latency_ms, operation, target);
            tokio::time::sleep(Duration::from_millis(latency_ms)).await;
        }

        if self.failure_rate > 0.0 && self.rng.chance(self.failure_rate) {
            warn!("Injected failure for {} ({})", operation, target);
            return Err(AppError::simulated_fetch(operation, target));
        }

        Ok(())
    }
}
