//! In-memory deal source with canned data, canned failures and simulated latency.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use common::Destination;
use rand::Rng;

use crate::error::{FinderError, Result};

/// Simulated delay applied to every lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Latency {
    /// Answer immediately.
    #[default]
    None,
    /// Always wait the same amount of time.
    Fixed(Duration),
    /// Wait a uniformly random duration in `min..=max`.
    Jitter { min: Duration, max: Duration },
}

impl Latency {
    /// Draws the delay for one lookup.
    pub fn sample(&self) -> Duration {
        match *self {
            Latency::None => Duration::ZERO,
            Latency::Fixed(delay) => delay,
            Latency::Jitter { min, max } => {
                if max <= min {
                    return min;
                }
                let lo = u64::try_from(min.as_micros()).unwrap_or(u64::MAX);
                let hi = u64::try_from(max.as_micros()).unwrap_or(u64::MAX);
                Duration::from_micros(rand::thread_rng().gen_range(lo..=hi))
            }
        }
    }
}

#[derive(Debug)]
struct InMemoryDealState<T> {
    deals: HashMap<Destination, Vec<T>>,
    failures: HashMap<Destination, String>,
    fallback: Vec<T>,
    latency: Latency,
    calls: usize,
}

impl<T> Default for InMemoryDealState<T> {
    fn default() -> Self {
        Self {
            deals: HashMap::new(),
            failures: HashMap::new(),
            fallback: Vec::new(),
            latency: Latency::None,
            calls: 0,
        }
    }
}

/// In-memory deal source for testing and demos.
///
/// Clones share the same state, so a test can keep a handle to a source it
/// has handed to the coordinator and reconfigure or inspect it afterwards.
#[derive(Debug)]
pub struct InMemoryDealSource<T> {
    state: Arc<RwLock<InMemoryDealState<T>>>,
}

impl<T> Clone for InMemoryDealSource<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<T> Default for InMemoryDealSource<T> {
    fn default() -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemoryDealState::default())),
        }
    }
}

impl<T: Clone> InMemoryDealSource<T> {
    /// Creates an empty source: every destination yields an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the deals returned for one destination.
    pub fn set_deals(&self, destination: impl Into<Destination>, deals: Vec<T>) {
        self.write().deals.insert(destination.into(), deals);
    }

    /// Makes lookups for one destination fail with the given message.
    ///
    /// A configured failure wins over configured deals.
    pub fn set_failure(&self, destination: impl Into<Destination>, message: impl Into<String>) {
        self.write()
            .failures
            .insert(destination.into(), message.into());
    }

    /// Removes a configured failure.
    pub fn clear_failure(&self, destination: impl Into<Destination>) {
        self.write().failures.remove(&destination.into());
    }

    /// Sets the deals returned for destinations with no explicit entry.
    pub fn set_fallback(&self, deals: Vec<T>) {
        self.write().fallback = deals;
    }

    /// Sets the simulated latency for subsequent lookups.
    pub fn set_latency(&self, latency: Latency) {
        self.write().latency = latency;
    }

    /// Returns the number of lookups served so far.
    pub fn call_count(&self) -> usize {
        self.read().calls
    }

    pub(crate) async fn lookup(&self, destination: &Destination) -> Result<Vec<T>> {
        let (outcome, delay) = {
            let mut state = self.write();
            state.calls += 1;
            let outcome = match state.failures.get(destination) {
                Some(message) => Err(FinderError::Unavailable(message.clone())),
                None => Ok(state
                    .deals
                    .get(destination)
                    .unwrap_or(&state.fallback)
                    .clone()),
            };
            (outcome, state.latency.sample())
        };

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        outcome
    }

    fn read(&self) -> RwLockReadGuard<'_, InMemoryDealState<T>> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, InMemoryDealState<T>> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
