use crate::hash::{value_coord_2d, value_coord_3d};

// White noise: an integer hash of the raw bit pattern of each coordinate.
// No spatial coherence; frequency is never applied. Output in [-1, 1).

pub fn white_2d(seed: i32, x: f64, y: f64) -> f64 {
    value_coord_2d(seed, fold_bits(x), fold_bits(y))
}

pub fn white_3d(seed: i32, x: f64, y: f64, z: f64) -> f64 {
    value_coord_3d(seed, fold_bits(x), fold_bits(y), fold_bits(z))
}

#[inline]
fn fold_bits(v: f64) -> i32 {
    let bits = v.to_bits();
    let folded = (bits ^ (bits >> 32)) as u32 as i32;
    folded ^ (folded >> 16)
}
