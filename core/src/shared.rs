use std::sync::Arc;

use parking_lot::RwLock;

use crate::NoiseGenerator;
use crate::config::NoiseConfig;
use crate::engine::NoiseEngine;

// A [`NoiseEngine`] that can be reconfigured through `&self` while other
// threads keep evaluating.
//
// Readers take a snapshot (`Arc` clone under a short read lock) and evaluate
// on it without holding the lock. Writers build a new engine and swap it in,
// so an evaluation always sees one complete configuration.
#[derive(Default)]
pub struct SharedNoiseEngine {
    current: RwLock<Arc<NoiseEngine>>,
}

impl SharedNoiseEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn configure(&self, config: NoiseConfig) {
        let engine = NoiseEngine::with_config(config);
        *self.current.write() = Arc::new(engine);
    }

    // Applies `f` to a copy of the current engine and publishes the result.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut NoiseEngine),
    {
        let mut guard = self.current.write();
        let mut next = NoiseEngine::clone(&guard);
        f(&mut next);
        *guard = Arc::new(next);
    }

    // The engine evaluations currently run against.
    pub fn snapshot(&self) -> Arc<NoiseEngine> {
        Arc::clone(&self.current.read())
    }

    pub fn is_initialized(&self) -> bool {
        self.current.read().is_initialized()
    }

    pub fn config(&self) -> NoiseConfig {
        self.current.read().config().clone()
    }

    pub fn evaluate_2d(&self, x: f64, y: f64) -> f64 {
        self.snapshot().evaluate_2d(x, y)
    }

    pub fn evaluate_3d(&self, x: f64, y: f64, z: f64) -> f64 {
        self.snapshot().evaluate_3d(x, y, z)
    }
}

impl NoiseGenerator for SharedNoiseEngine {
    fn get2(&self, x: f64, y: f64) -> f64 {
        self.evaluate_2d(x, y)
    }

    fn get3(&self, x: f64, y: f64, z: f64) -> f64 {
        self.evaluate_3d(x, y, z)
    }
}
