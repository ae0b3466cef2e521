// core holds the noise kernels, the fractal combinator and the engine facade
pub mod cellular;
pub mod config;
pub mod cubic;
pub mod engine;
pub mod error;
pub mod fractal;
pub mod grid;
pub mod hash;
pub mod interp;
pub mod perlin;
pub mod sampler;
pub mod shared;
pub mod simplex;
pub mod value;
pub mod white;

pub use config::{
    CellularDistanceFunction, CellularReturnType, FractalType, Interpolation, NoiseConfig,
    NoiseType,
};
pub use engine::NoiseEngine;
pub use error::NoiseError;
pub use grid::{HeightMap, flatten, normalize};
pub use hash::PermutationTable;
pub use sampler::Sampler;
pub use shared::SharedNoiseEngine;

// noise generator that can sample 2D or 3D points
pub trait NoiseGenerator {
    // Sample 2D noise at (x, y).
    fn get2(&self, x: f64, y: f64) -> f64;

    // Sample 3D noise at (x, y, z).
    fn get3(&self, x: f64, y: f64, z: f64) -> f64;
}
