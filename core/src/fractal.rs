use crate::config::{FractalType, NoiseConfig};

// Fractal combination of a base kernel. Octave `i` samples the kernel with
// table offset `i` (so octaves are decorrelated), frequency multiplied by
// lacunarity^i and amplitude gain^i. The sum is divided by the total absolute
// amplitude, which keeps every fractal type in [-1, 1] for any octave count.

// The subset of [`NoiseConfig`] the fractal layer reads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FractalSettings {
    pub fractal_type: FractalType,
    pub octaves: i32,
    pub lacunarity: f64,
    pub gain: f64,
}

impl From<&NoiseConfig> for FractalSettings {
    fn from(config: &NoiseConfig) -> Self {
        Self {
            fractal_type: config.fractal_type,
            octaves: config.octaves,
            lacunarity: config.lacunarity,
            gain: config.gain,
        }
    }
}

// Running sum across octaves.
struct Accumulator {
    fractal_type: FractalType,
    sum: f64,
    total_amp: f64,
    // ridge weight carried from the previous octave
    weight: f64,
}

impl Accumulator {
    fn new(fractal_type: FractalType) -> Self {
        Self {
            fractal_type,
            sum: 0.0,
            total_amp: 0.0,
            weight: 1.0,
        }
    }

    #[inline]
    fn add(&mut self, n: f64, amp: f64) {
        match self.fractal_type {
            FractalType::Fbm => self.sum += n * amp,
            FractalType::Billow => self.sum += (n.abs() * 2.0 - 1.0) * amp,
            FractalType::RigidMulti => {
                let ridge = 1.0 - n.abs();
                let signal = ridge * ridge * self.weight;
                // sharp crests suppress the detail layered on top of them
                self.weight = signal.clamp(0.0, 1.0);
                // signal is never negative, so only the magnitude of amp matters
                self.sum += signal * amp.abs();
            }
        }
        self.total_amp += amp.abs();
    }

    fn finish(&self) -> f64 {
        if self.total_amp == 0.0 {
            return 0.0;
        }
        let normalized = self.sum / self.total_amp;
        match self.fractal_type {
            // [0, 1] -> [-1, 1]
            FractalType::RigidMulti => normalized * 2.0 - 1.0,
            _ => normalized,
        }
    }
}

#[inline]
fn octave_offset(octave: i32) -> u8 {
    (octave & 0xff) as u8
}

// Combines `settings.octaves` samples of `kernel(offset, x, y)`.
pub fn fractal_2d<F>(settings: &FractalSettings, mut x: f64, mut y: f64, kernel: F) -> f64
where
    F: Fn(u8, f64, f64) -> f64,
{
    let mut acc = Accumulator::new(settings.fractal_type);
    let mut amp = 1.0;
    for octave in 0..settings.octaves.max(1) {
        acc.add(kernel(octave_offset(octave), x, y), amp);
        x *= settings.lacunarity;
        y *= settings.lacunarity;
        amp *= settings.gain;
    }
    acc.finish()
}

// Combines `settings.octaves` samples of `kernel(offset, x, y, z)`.
pub fn fractal_3d<F>(settings: &FractalSettings, mut x: f64, mut y: f64, mut z: f64, kernel: F) -> f64
where
    F: Fn(u8, f64, f64, f64) -> f64,
{
    let mut acc = Accumulator::new(settings.fractal_type);
    let mut amp = 1.0;
    for octave in 0..settings.octaves.max(1) {
        acc.add(kernel(octave_offset(octave), x, y, z), amp);
        x *= settings.lacunarity;
        y *= settings.lacunarity;
        z *= settings.lacunarity;
        amp *= settings.gain;
    }
    acc.finish()
}
