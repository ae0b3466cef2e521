// Command-line arguments for `noisegen`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use noise_core::{
    CellularDistanceFunction, CellularReturnType, FractalType, Interpolation, NoiseConfig,
    NoiseType,
};

pub const DEFAULT_CONFIG_PATH: &str = "noise.ron";

/// Noise field generator.
///
/// Noise options override the settings loaded from the RON config file.
#[derive(Parser, Debug)]
#[command(name = "noisegen", version, about = "Render, sample and store noise fields")]
pub struct CliArgs {
    /// Path to the RON config file.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Log filter (error, warn, info, debug, trace); RUST_LOG takes precedence.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(flatten)]
    pub noise: NoiseArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a PNG of a 2D map, or of a 3D slice when --z is given.
    Render {
        #[arg(long, short, default_value = "noise.png")]
        out: PathBuf,
        #[arg(long, default_value_t = 256)]
        size: usize,
        /// World units per pixel.
        #[arg(long, default_value_t = 1.0)]
        step: f64,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        origin_x: f64,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        origin_y: f64,
        /// Sample the 3D noise on this z plane.
        #[arg(long, allow_negative_numbers = true)]
        z: Option<f64>,
        /// Color heights like terrain instead of grayscale.
        #[arg(long)]
        terrain: bool,
    },
    /// Print the noise value at one point.
    Sample {
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,
        #[arg(allow_negative_numbers = true)]
        z: Option<f64>,
    },
    /// Store the current configuration as a named preset.
    Save {
        name: String,
        /// Side of the stored preview; 0 stores none.
        #[arg(long, default_value_t = 64)]
        preview_size: usize,
        #[command(flatten)]
        db: DbArgs,
    },
    /// Fetch a preset by name or seed and write it to the config file.
    Load {
        #[arg(required_unless_present = "by_seed")]
        name: Option<String>,
        /// Fetch the first preset stored with this seed instead.
        #[arg(long, conflicts_with = "name", allow_negative_numbers = true)]
        by_seed: Option<i32>,
        #[command(flatten)]
        db: DbArgs,
    },
    /// List stored preset names.
    List {
        #[command(flatten)]
        db: DbArgs,
    },
    /// Remove a stored preset.
    Delete {
        name: String,
        #[command(flatten)]
        db: DbArgs,
    },
    /// Write the default configuration to the config file.
    InitConfig {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args, Debug, Clone)]
pub struct DbArgs {
    #[arg(long, default_value = "mongodb://localhost:27017")]
    pub mongo_uri: String,
    #[arg(long, default_value = "noise_db")]
    pub database: String,
    #[arg(long, default_value = "presets")]
    pub collection: String,
}

/// Per-field overrides of the loaded [`NoiseConfig`].
#[derive(Args, Debug, Default, Clone)]
pub struct NoiseArgs {
    #[arg(long, global = true)]
    pub noise_type: Option<NoiseType>,
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub seed: Option<i32>,
    #[arg(long, global = true)]
    pub frequency: Option<f64>,
    #[arg(long, global = true)]
    pub interpolation: Option<Interpolation>,
    #[arg(long, global = true)]
    pub fractal_type: Option<FractalType>,
    #[arg(long, global = true)]
    pub octaves: Option<i32>,
    #[arg(long, global = true)]
    pub lacunarity: Option<f64>,
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub gain: Option<f64>,
    #[arg(long, global = true)]
    pub jitter: Option<f64>,
    #[arg(long, global = true)]
    pub distance_function: Option<CellularDistanceFunction>,
    #[arg(long, global = true)]
    pub return_type: Option<CellularReturnType>,
    /// Noise type sampled by the NoiseLookup return type (default settings otherwise).
    #[arg(long, global = true)]
    pub lookup_noise_type: Option<NoiseType>,
}

impl NoiseArgs {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_overrides(&self, config: &mut NoiseConfig) {
        if let Some(t) = self.noise_type {
            config.noise_type = t;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(f) = self.frequency {
            config.frequency = f;
        }
        if let Some(i) = self.interpolation {
            config.interpolation = i;
        }
        if let Some(ft) = self.fractal_type {
            config.fractal_type = ft;
        }
        if let Some(o) = self.octaves {
            config.octaves = o;
        }
        if let Some(l) = self.lacunarity {
            config.lacunarity = l;
        }
        if let Some(g) = self.gain {
            config.gain = g;
        }
        if let Some(j) = self.jitter {
            config.cellular_jitter = j;
        }
        if let Some(d) = self.distance_function {
            config.cellular_distance_function = d;
        }
        if let Some(r) = self.return_type {
            config.cellular_return_type = r;
        }
        if let Some(t) = self.lookup_noise_type {
            match config.cellular_noise_lookup.as_mut() {
                Some(lookup) => lookup.noise_type = t,
                None => config.cellular_noise_lookup = Some(Box::new(NoiseConfig::with_noise_type(t))),
            }
        }
    }
}
