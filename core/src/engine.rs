// [`NoiseEngine`]: the configurable noise facade.
//
// Construction is two-phase. [`NoiseEngine::new`] gives an engine holding the
// default configuration that evaluates to exactly `0.0` everywhere until
// [`NoiseEngine::configure`] is called. After that, every evaluation is a pure
// function of the active configuration and the coordinate.
//
// Setters change one field each, clamp the value the same way
// [`NoiseConfig::sanitize`] does, and never touch the initialized flag.

use crate::NoiseGenerator;
use crate::config::{
    CellularDistanceFunction, CellularReturnType, FractalType, Interpolation, NoiseConfig,
    NoiseType, clamp_gain, clamp_jitter, clamp_octaves, clamp_scale, DEFAULT_FREQUENCY,
    DEFAULT_LACUNARITY,
};
use crate::sampler::{Sampler, warn_missing_lookup};

#[derive(Clone)]
pub struct NoiseEngine {
    sampler: Sampler,
    initialized: bool,
}

impl Default for NoiseEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl NoiseEngine {
    // Engine with the default configuration, not yet initialized.
    pub fn new() -> Self {
        Self {
            sampler: Sampler::new(NoiseConfig::default()),
            initialized: false,
        }
    }

    // Configured engine in one step.
    pub fn with_config(config: NoiseConfig) -> Self {
        let mut engine = Self::new();
        engine.configure(config);
        engine
    }

    // Replaces the whole configuration and marks the engine initialized.
    pub fn configure(&mut self, config: NoiseConfig) {
        log::debug!(
            "configuring {} noise, seed {}, frequency {}",
            config.noise_type,
            config.seed,
            config.frequency
        );
        self.sampler = Sampler::new(config);
        self.initialized = true;
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn config(&self) -> &NoiseConfig {
        self.sampler.config()
    }

    pub fn sampler(&self) -> &Sampler {
        &self.sampler
    }

    pub fn evaluate_2d(&self, x: f64, y: f64) -> f64 {
        if !self.initialized {
            return 0.0;
        }
        self.sampler.get2(x, y)
    }

    pub fn evaluate_3d(&self, x: f64, y: f64, z: f64) -> f64 {
        if !self.initialized {
            return 0.0;
        }
        self.sampler.get3(x, y, z)
    }

    // getters

    pub fn noise_type(&self) -> NoiseType {
        self.config().noise_type
    }

    pub fn seed(&self) -> i32 {
        self.config().seed
    }

    pub fn frequency(&self) -> f64 {
        self.config().frequency
    }

    pub fn interpolation(&self) -> Interpolation {
        self.config().interpolation
    }

    pub fn fractal_type(&self) -> FractalType {
        self.config().fractal_type
    }

    pub fn octaves(&self) -> i32 {
        self.config().octaves
    }

    pub fn lacunarity(&self) -> f64 {
        self.config().lacunarity
    }

    pub fn gain(&self) -> f64 {
        self.config().gain
    }

    pub fn cellular_jitter(&self) -> f64 {
        self.config().cellular_jitter
    }

    pub fn cellular_distance_function(&self) -> CellularDistanceFunction {
        self.config().cellular_distance_function
    }

    pub fn cellular_return_type(&self) -> CellularReturnType {
        self.config().cellular_return_type
    }

    pub fn cellular_noise_lookup(&self) -> Option<&NoiseConfig> {
        self.config().cellular_noise_lookup.as_deref()
    }

    // setters

    pub fn set_noise_type(&mut self, noise_type: NoiseType) {
        self.sampler.config.noise_type = noise_type;
        warn_missing_lookup(&self.sampler.config);
    }

    // Changing the seed rebuilds the permutation table.
    pub fn set_seed(&mut self, seed: i32) {
        self.sampler.config.seed = seed;
        self.sampler.rebuild_table();
    }

    pub fn set_frequency(&mut self, frequency: f64) {
        self.sampler.config.frequency = clamp_scale("frequency", frequency, DEFAULT_FREQUENCY);
    }

    pub fn set_interpolation(&mut self, interpolation: Interpolation) {
        self.sampler.config.interpolation = interpolation;
    }

    pub fn set_fractal_type(&mut self, fractal_type: FractalType) {
        self.sampler.config.fractal_type = fractal_type;
    }

    pub fn set_octaves(&mut self, octaves: i32) {
        self.sampler.config.octaves = clamp_octaves(octaves);
    }

    pub fn set_lacunarity(&mut self, lacunarity: f64) {
        self.sampler.config.lacunarity = clamp_scale("lacunarity", lacunarity, DEFAULT_LACUNARITY);
    }

    pub fn set_gain(&mut self, gain: f64) {
        self.sampler.config.gain = clamp_gain(gain);
    }

    pub fn set_cellular_jitter(&mut self, jitter: f64) {
        self.sampler.config.cellular_jitter = clamp_jitter(jitter);
    }

    pub fn set_cellular_distance_function(&mut self, distance_function: CellularDistanceFunction) {
        self.sampler.config.cellular_distance_function = distance_function;
    }

    pub fn set_cellular_return_type(&mut self, return_type: CellularReturnType) {
        self.sampler.config.cellular_return_type = return_type;
        warn_missing_lookup(&self.sampler.config);
    }

    // Sets (or clears) the noise sampled by [`CellularReturnType::NoiseLookup`].
    pub fn set_cellular_noise_lookup(&mut self, lookup: Option<NoiseConfig>) {
        self.sampler.config.cellular_noise_lookup = lookup.map(|c| Box::new(c.sanitized()));
        self.sampler.rebuild_lookup();
    }
}

impl NoiseGenerator for NoiseEngine {
    fn get2(&self, x: f64, y: f64) -> f64 {
        self.evaluate_2d(x, y)
    }

    fn get3(&self, x: f64, y: f64, z: f64) -> f64 {
        self.evaluate_3d(x, y, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_engine_is_silent_until_configured() {
        let mut e = NoiseEngine::new();
        assert!(!e.is_initialized());
        assert_eq!(e.evaluate_2d(12.5, -3.0), 0.0);
        assert_eq!(e.evaluate_3d(12.5, -3.0, 8.0), 0.0);

        e.set_noise_type(NoiseType::WhiteNoise);
        assert!(!e.is_initialized());
        assert_eq!(e.evaluate_2d(12.5, -3.0), 0.0);

        e.configure(NoiseConfig::default());
        assert!(e.is_initialized());
        assert_ne!(e.evaluate_2d(12.5, -3.0), 0.0);
    }

    #[test]
    fn configure_replaces_everything() {
        let mut e = NoiseEngine::new();
        e.set_octaves(9);
        e.configure(NoiseConfig::with_noise_type(NoiseType::Cellular));
        assert_eq!(e.octaves(), 3);
        assert_eq!(e.noise_type(), NoiseType::Cellular);
    }

    #[test]
    fn setters_touch_one_field_only() {
        let mut e = NoiseEngine::with_config(NoiseConfig::default());
        let before = e.config().clone();

        e.set_gain(0.8);
        assert_eq!(
            e.config(),
            &NoiseConfig {
                gain: 0.8,
                ..before.clone()
            }
        );

        e.set_cellular_return_type(CellularReturnType::Distance2Mul);
        assert_eq!(e.cellular_return_type(), CellularReturnType::Distance2Mul);
        assert_eq!(e.gain(), 0.8);
        assert_eq!(e.seed(), before.seed);
        assert!(e.is_initialized());
    }

    #[test]
    fn setters_clamp() {
        let mut e = NoiseEngine::new();
        e.set_octaves(0);
        assert_eq!(e.octaves(), 1);
        e.set_frequency(-1.0);
        assert_eq!(e.frequency(), f64::EPSILON);
        e.set_lacunarity(f64::INFINITY);
        assert_eq!(e.lacunarity(), DEFAULT_LACUNARITY);
        e.set_gain(f64::NAN);
        assert_eq!(e.gain(), 0.5);
        e.set_cellular_jitter(-0.5);
        assert_eq!(e.cellular_jitter(), 0.0);
    }

    #[test]
    fn seed_setter_rebuilds_table() {
        let mut e = NoiseEngine::with_config(NoiseConfig::default());
        let a = e.evaluate_2d(31.0, 47.0);
        e.set_seed(4242);
        assert_eq!(e.sampler().table().seed(), 4242);
        let b = e.evaluate_2d(31.0, 47.0);
        e.set_seed(1337);
        assert_eq!(e.evaluate_2d(31.0, 47.0), a);
        assert_ne!(a, b);
    }

    #[test]
    fn lookup_setter_drives_noise_lookup() {
        let mut e = NoiseEngine::with_config(NoiseConfig {
            noise_type: NoiseType::Cellular,
            cellular_return_type: CellularReturnType::NoiseLookup,
            frequency: 0.1,
            ..Default::default()
        });
        let fallback = e.evaluate_2d(5.0, 7.0);
        e.set_cellular_return_type(CellularReturnType::CellValue);
        assert_eq!(e.evaluate_2d(5.0, 7.0), fallback);

        e.set_cellular_return_type(CellularReturnType::NoiseLookup);
        e.set_cellular_noise_lookup(Some(NoiseConfig {
            noise_type: NoiseType::Value,
            octaves: -1,
            ..Default::default()
        }));
        assert_eq!(e.cellular_noise_lookup().map(|c| c.octaves), Some(1));
        let v = e.evaluate_2d(5.0, 7.0);
        assert!((-1.0..=1.0).contains(&v));

        e.set_cellular_noise_lookup(None);
        assert_eq!(e.evaluate_2d(5.0, 7.0), fallback);
    }
}
