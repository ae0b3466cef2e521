// Noise configuration: the parameter enums, the [`NoiseConfig`] value type
// and the clamping rules applied before anything reaches the kernels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NoiseError;

// Generates a fieldless parameter enum with a stable u8 index, a lenient
// name parser and a documented default for unknown indices.
macro_rules! config_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident ($kind:literal, default = $default:ident) {
            $($(#[$vmeta:meta])* $variant:ident,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
        }

        impl $name {
            // Every variant, in declaration (index) order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            // Stable index of this variant.
            pub fn index(self) -> u8 {
                self as u8
            }

            // Maps an index back to its variant; unknown indices fall back
            // to the default variant.
            pub fn from_index(index: u8) -> Self {
                Self::ALL.get(index as usize).copied().unwrap_or_default()
            }

            pub fn name(self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant),)+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $name {
            type Err = NoiseError;

            // Accepts `PascalCase`, `snake_case` and `kebab-case`, ignoring case.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = normalize_name(s);
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.name().to_ascii_lowercase() == wanted)
                    .ok_or_else(|| NoiseError::UnknownVariant {
                        kind: $kind,
                        name: s.to_string(),
                    })
            }
        }
    };
}

fn normalize_name(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '_' | '-') && !c.is_whitespace())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

config_enum! {
    // Selects the kernel, and whether the fractal combinator wraps it.
    pub enum NoiseType ("noise type", default = Simplex) {
        Value,
        ValueFractal,
        Perlin,
        PerlinFractal,
        Simplex,
        SimplexFractal,
        Cellular,
        WhiteNoise,
        Cubic,
        CubicFractal,
    }
}

impl NoiseType {
    // True for the variants evaluated through the fractal combinator.
    pub fn is_fractal(self) -> bool {
        matches!(
            self,
            NoiseType::ValueFractal
                | NoiseType::PerlinFractal
                | NoiseType::SimplexFractal
                | NoiseType::CubicFractal
        )
    }
}

config_enum! {
    // Smoothing curve used by the Value and Perlin kernels between lattice corners.
    pub enum Interpolation ("interpolation", default = Quintic) {
        Linear,
        // 3t^2 - 2t^3
        Hermite,
        // 6t^5 - 15t^4 + 10t^3, zero 1st and 2nd derivative at lattice points
        Quintic,
    }
}

impl Interpolation {
    #[inline]
    pub fn curve(self, t: f64) -> f64 {
        match self {
            Interpolation::Linear => t,
            Interpolation::Hermite => t * t * (3.0 - 2.0 * t),
            Interpolation::Quintic => t * t * t * (t * (t * 6.0 - 15.0) + 10.0),
        }
    }
}

config_enum! {
    // How octaves are combined by the fractal noise types.
    pub enum FractalType ("fractal type", default = Fbm) {
        Fbm,
        Billow,
        RigidMulti,
    }
}

config_enum! {
    // Distance metric between a sample point and cellular feature points.
    pub enum CellularDistanceFunction ("cellular distance function", default = Euclidean) {
        Euclidean,
        Manhattan,
        // Even blend of the Euclidean and Manhattan distances.
        Natural,
    }
}

config_enum! {
    // Scalar derived from the nearest / second-nearest feature points.
    pub enum CellularReturnType ("cellular return type", default = CellValue) {
        // Hash value of the nearest cell, in [-1, 1).
        CellValue,
        // `cellular_noise_lookup` sampled at the nearest feature point.
        NoiseLookup,
        Distance,
        Distance2,
        Distance2Add,
        Distance2Sub,
        Distance2Mul,
        Distance2Div,
    }
}

pub const DEFAULT_SEED: i32 = 1337;
pub const DEFAULT_FREQUENCY: f64 = 0.01;
pub const DEFAULT_OCTAVES: i32 = 3;
pub const DEFAULT_LACUNARITY: f64 = 2.0;
pub const DEFAULT_GAIN: f64 = 0.5;
pub const DEFAULT_CELLULAR_JITTER: f64 = 0.45;

// Full parameter set for one noise field.
//
// Missing fields deserialize to their defaults, so partial RON or BSON
// documents are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseConfig {
    pub noise_type: NoiseType,
    // Same seed and settings give bit-identical output.
    pub seed: i32,
    // Coordinates are multiplied by this before evaluation (not for white noise).
    pub frequency: f64,
    pub interpolation: Interpolation,
    pub fractal_type: FractalType,
    // Number of layers combined by the fractal noise types. Clamped to >= 1.
    pub octaves: i32,
    // Frequency multiplier between octaves.
    pub lacunarity: f64,
    // Amplitude multiplier between octaves.
    pub gain: f64,
    // Maximum feature point displacement from its cell, in cell units. Clamped to [0, 1].
    pub cellular_jitter: f64,
    pub cellular_distance_function: CellularDistanceFunction,
    pub cellular_return_type: CellularReturnType,
    // Noise sampled at the nearest feature point for [`CellularReturnType::NoiseLookup`].
    pub cellular_noise_lookup: Option<Box<NoiseConfig>>,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            noise_type: NoiseType::default(),
            seed: DEFAULT_SEED,
            frequency: DEFAULT_FREQUENCY,
            interpolation: Interpolation::default(),
            fractal_type: FractalType::default(),
            octaves: DEFAULT_OCTAVES,
            lacunarity: DEFAULT_LACUNARITY,
            gain: DEFAULT_GAIN,
            cellular_jitter: DEFAULT_CELLULAR_JITTER,
            cellular_distance_function: CellularDistanceFunction::default(),
            cellular_return_type: CellularReturnType::default(),
            cellular_noise_lookup: None,
        }
    }
}

impl NoiseConfig {
    // Default configuration with another noise type.
    pub fn with_noise_type(noise_type: NoiseType) -> Self {
        Self {
            noise_type,
            ..Default::default()
        }
    }

    // Clamps every out-of-domain field to the nearest accepted value,
    // including the lookup configuration. Each adjustment is logged.
    pub fn sanitize(&mut self) {
        self.octaves = clamp_octaves(self.octaves);
        self.frequency = clamp_scale("frequency", self.frequency, DEFAULT_FREQUENCY);
        self.lacunarity = clamp_scale("lacunarity", self.lacunarity, DEFAULT_LACUNARITY);
        self.gain = clamp_gain(self.gain);
        self.cellular_jitter = clamp_jitter(self.cellular_jitter);
        if let Some(lookup) = self.cellular_noise_lookup.as_mut() {
            lookup.sanitize();
        }
    }

    // Returns a sanitized copy.
    pub fn sanitized(mut self) -> Self {
        self.sanitize();
        self
    }

    // Reports the first field that [`sanitize`](Self::sanitize) would change.
    pub fn validate(&self) -> Result<(), NoiseError> {
        if self.octaves < 1 {
            return Err(NoiseError::invalid("octaves", self.octaves, "must be at least 1"));
        }
        check_scale("frequency", self.frequency)?;
        check_scale("lacunarity", self.lacunarity)?;
        if !self.gain.is_finite() {
            return Err(NoiseError::invalid("gain", self.gain, "must be finite"));
        }
        if !(0.0..=1.0).contains(&self.cellular_jitter) {
            return Err(NoiseError::invalid(
                "cellular_jitter",
                self.cellular_jitter,
                "must be within [0, 1]",
            ));
        }
        match self.cellular_noise_lookup.as_deref() {
            Some(lookup) => lookup.validate(),
            None => Ok(()),
        }
    }
}

fn check_scale(field: &'static str, value: f64) -> Result<(), NoiseError> {
    if !value.is_finite() {
        return Err(NoiseError::invalid(field, value, "must be finite"));
    }
    if value <= 0.0 {
        return Err(NoiseError::invalid(field, value, "must be positive"));
    }
    Ok(())
}

pub(crate) fn clamp_octaves(octaves: i32) -> i32 {
    if octaves < 1 {
        log::warn!("octaves {octaves} clamped to 1");
        1
    } else {
        octaves
    }
}

pub(crate) fn clamp_scale(field: &str, value: f64, default: f64) -> f64 {
    if !value.is_finite() {
        log::warn!("{field} {value} is not finite, using default {default}");
        default
    } else if value <= 0.0 {
        log::warn!("{field} {value} clamped to {}", f64::EPSILON);
        f64::EPSILON
    } else {
        value
    }
}

pub(crate) fn clamp_gain(gain: f64) -> f64 {
    if gain.is_finite() {
        gain
    } else {
        log::warn!("gain {gain} is not finite, using default {DEFAULT_GAIN}");
        DEFAULT_GAIN
    }
}

pub(crate) fn clamp_jitter(jitter: f64) -> f64 {
    if !jitter.is_finite() {
        log::warn!("cellular_jitter {jitter} is not finite, using default {DEFAULT_CELLULAR_JITTER}");
        return DEFAULT_CELLULAR_JITTER;
    }
    let clamped = jitter.clamp(0.0, 1.0);
    if clamped != jitter {
        log::warn!("cellular_jitter {jitter} clamped to {clamped}");
    }
    clamped
}
