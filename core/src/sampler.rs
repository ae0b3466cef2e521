use crate::NoiseGenerator;
use crate::cellular::{self, CellularSettings};
use crate::config::{CellularReturnType, NoiseConfig, NoiseType};
use crate::cubic::{cubic_2d, cubic_3d};
use crate::fractal::{FractalSettings, fractal_2d, fractal_3d};
use crate::hash::PermutationTable;
use crate::perlin::{perlin_2d, perlin_3d};
use crate::simplex::{simplex_2d, simplex_3d};
use crate::value::{value_2d, value_3d};
use crate::white::{white_2d, white_3d};

// Immutable evaluation snapshot: a sanitized configuration together with the
// permutation table built from its seed and, for
// [`CellularReturnType::NoiseLookup`], the sampler of the lookup noise.
//
// Every call is a pure function of the snapshot and the coordinate, so a
// `Sampler` can be shared between threads freely.
#[derive(Clone)]
pub struct Sampler {
    pub(crate) config: NoiseConfig,
    pub(crate) table: PermutationTable,
    pub(crate) lookup: Option<Box<Sampler>>,
}

impl Sampler {
    pub fn new(config: NoiseConfig) -> Self {
        Self::from_sanitized(config.sanitized())
    }

    fn from_sanitized(config: NoiseConfig) -> Self {
        let table = PermutationTable::new(config.seed);
        let lookup = build_lookup(&config);
        warn_missing_lookup(&config);
        Self {
            config,
            table,
            lookup,
        }
    }

    pub fn config(&self) -> &NoiseConfig {
        &self.config
    }

    pub fn table(&self) -> &PermutationTable {
        &self.table
    }

    pub(crate) fn rebuild_table(&mut self) {
        if self.table.seed() != self.config.seed {
            self.table = PermutationTable::new(self.config.seed);
        }
    }

    pub(crate) fn rebuild_lookup(&mut self) {
        self.lookup = build_lookup(&self.config);
        warn_missing_lookup(&self.config);
    }

    fn lookup(&self) -> Option<&dyn NoiseGenerator> {
        self.lookup.as_deref().map(|s| s as &dyn NoiseGenerator)
    }
}

fn build_lookup(config: &NoiseConfig) -> Option<Box<Sampler>> {
    config
        .cellular_noise_lookup
        .as_deref()
        .map(|lookup| Box::new(Sampler::from_sanitized(lookup.clone())))
}

pub(crate) fn warn_missing_lookup(config: &NoiseConfig) {
    if config.noise_type == NoiseType::Cellular
        && config.cellular_return_type == CellularReturnType::NoiseLookup
        && config.cellular_noise_lookup.is_none()
    {
        log::warn!("NoiseLookup selected without a lookup noise, cell values are returned instead");
    }
}

impl NoiseGenerator for Sampler {
    fn get2(&self, x: f64, y: f64) -> f64 {
        let c = &self.config;
        let t = &self.table;
        let interp = c.interpolation;
        let x_f = x * c.frequency;
        let y_f = y * c.frequency;

        match c.noise_type {
            NoiseType::Value => value_2d(t, 0, interp, x_f, y_f),
            NoiseType::ValueFractal => fractal_2d(&FractalSettings::from(c), x_f, y_f, |o, x, y| {
                value_2d(t, o, interp, x, y)
            }),
            NoiseType::Perlin => perlin_2d(t, 0, interp, x_f, y_f),
            NoiseType::PerlinFractal => fractal_2d(&FractalSettings::from(c), x_f, y_f, |o, x, y| {
                perlin_2d(t, o, interp, x, y)
            }),
            NoiseType::Simplex => simplex_2d(t, 0, x_f, y_f),
            NoiseType::SimplexFractal => {
                fractal_2d(&FractalSettings::from(c), x_f, y_f, |o, x, y| simplex_2d(t, o, x, y))
            }
            NoiseType::Cubic => cubic_2d(t, 0, x_f, y_f),
            NoiseType::CubicFractal => {
                fractal_2d(&FractalSettings::from(c), x_f, y_f, |o, x, y| cubic_2d(t, o, x, y))
            }
            NoiseType::Cellular => {
                cellular::cellular_2d(t, &CellularSettings::from(c), self.lookup(), x_f, y_f)
            }
            // unscaled on purpose: white noise ignores frequency
            NoiseType::WhiteNoise => white_2d(c.seed, x, y),
        }
    }

    fn get3(&self, x: f64, y: f64, z: f64) -> f64 {
        let c = &self.config;
        let t = &self.table;
        let interp = c.interpolation;
        let x_f = x * c.frequency;
        let y_f = y * c.frequency;
        let z_f = z * c.frequency;

        match c.noise_type {
            NoiseType::Value => value_3d(t, 0, interp, x_f, y_f, z_f),
            NoiseType::ValueFractal => {
                fractal_3d(&FractalSettings::from(c), x_f, y_f, z_f, |o, x, y, z| {
                    value_3d(t, o, interp, x, y, z)
                })
            }
            NoiseType::Perlin => perlin_3d(t, 0, interp, x_f, y_f, z_f),
            NoiseType::PerlinFractal => {
                fractal_3d(&FractalSettings::from(c), x_f, y_f, z_f, |o, x, y, z| {
                    perlin_3d(t, o, interp, x, y, z)
                })
            }
            NoiseType::Simplex => simplex_3d(t, 0, x_f, y_f, z_f),
            NoiseType::SimplexFractal => {
                fractal_3d(&FractalSettings::from(c), x_f, y_f, z_f, |o, x, y, z| {
                    simplex_3d(t, o, x, y, z)
                })
            }
            NoiseType::Cubic => cubic_3d(t, 0, x_f, y_f, z_f),
            NoiseType::CubicFractal => {
                fractal_3d(&FractalSettings::from(c), x_f, y_f, z_f, |o, x, y, z| {
                    cubic_3d(t, o, x, y, z)
                })
            }
            NoiseType::Cellular => {
                cellular::cellular_3d(t, &CellularSettings::from(c), self.lookup(), x_f, y_f, z_f)
            }
            NoiseType::WhiteNoise => white_3d(c.seed, x, y, z),
        }
    }
}
