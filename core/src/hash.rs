// Seeded hash and gradient primitive shared by every kernel.
//
// A [`PermutationTable`] is derived entirely from the seed: 256 shuffled
// bytes, duplicated to 512 so lookups never need a modulo. Lattice
// coordinates are folded through it (with an octave `offset`) to pick
// gradients, lattice values and cellular feature-point directions.

use std::f64::consts::TAU;
use std::sync::LazyLock;

const X_PRIME: i32 = 1619;
const Y_PRIME: i32 = 31337;
const Z_PRIME: i32 = 6971;

// pi * (3 - sqrt(5))
const GOLDEN_ANGLE: f64 = 2.399_963_229_728_653;

// 2D gradients: the four diagonals and the four axes.
const GRAD_2D: [[f64; 2]; 8] = [
    [1.0, 1.0],
    [-1.0, 1.0],
    [1.0, -1.0],
    [-1.0, -1.0],
    [1.0, 0.0],
    [-1.0, 0.0],
    [0.0, 1.0],
    [0.0, -1.0],
];

// 3D gradients: midpoints of the twelve cube edges.
const GRAD_3D: [[f64; 3]; 12] = [
    [1.0, 1.0, 0.0],
    [-1.0, 1.0, 0.0],
    [1.0, -1.0, 0.0],
    [-1.0, -1.0, 0.0],
    [1.0, 0.0, 1.0],
    [-1.0, 0.0, 1.0],
    [1.0, 0.0, -1.0],
    [-1.0, 0.0, -1.0],
    [0.0, 1.0, 1.0],
    [0.0, -1.0, 1.0],
    [0.0, 1.0, -1.0],
    [0.0, -1.0, -1.0],
];

// Unit directions for feature-point jitter, evenly spread over the circle.
static CELL_2D: LazyLock<[[f64; 2]; 256]> = LazyLock::new(|| {
    std::array::from_fn(|i| {
        let angle = i as f64 * TAU / 256.0;
        [angle.cos(), angle.sin()]
    })
});

// Fibonacci sphere: 256 near-uniform unit directions.
static CELL_3D: LazyLock<[[f64; 3]; 256]> = LazyLock::new(|| {
    std::array::from_fn(|i| {
        let z = 1.0 - (2.0 * i as f64 + 1.0) / 256.0;
        let r = (1.0 - z * z).sqrt();
        let phi = i as f64 * GOLDEN_ANGLE;
        [r * phi.cos(), r * phi.sin(), z]
    })
});

// Permutation table derived from a seed.
#[derive(Clone)]
pub struct PermutationTable {
    seed: i32,
    perm: [u8; 512],
    perm12: [u8; 512],
}

impl PermutationTable {
    pub fn new(seed: i32) -> Self {
        let mut p: [u8; 256] = std::array::from_fn(|i| i as u8);

        // xorshift64, seeded through a multiplicative mix so that
        // neighbouring seeds start from unrelated states
        let mut x = (seed as u32 as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15) ^ 0xDEAD_BEEF_CAFE_BABE;
        if x == 0 {
            x = 0xDEAD_BEEF_CAFE_BABE;
        }
        let mut rng = || {
            x ^= x << 13;
            x ^= x >> 7;
            x ^= x << 17;
            x
        };
        for _ in 0..8 {
            rng();
        }

        // Fisher–Yates
        for i in (1..256).rev() {
            let j = (rng() % (i as u64 + 1)) as usize;
            p.swap(i, j);
        }

        let mut perm = [0u8; 512];
        let mut perm12 = [0u8; 512];
        for i in 0..512 {
            perm[i] = p[i & 255];
            perm12[i] = perm[i] % 12;
        }

        log::debug!("built permutation table for seed {seed}");
        Self { seed, perm, perm12 }
    }

    pub fn seed(&self) -> i32 {
        self.seed
    }

    // The octave offset is xor-ed into the already permuted last axis and
    // permuted again, so octave k is not octave 0 translated along that axis.
    #[inline]
    fn fold(&self, offset: u8, v: i32) -> usize {
        self.perm[(self.perm[(v & 0xff) as usize] ^ offset) as usize] as usize
    }

    #[inline]
    pub fn index2_256(&self, offset: u8, x: i32, y: i32) -> usize {
        let inner = self.fold(offset, y);
        self.perm[(x & 0xff) as usize + inner] as usize
    }

    #[inline]
    pub fn index3_256(&self, offset: u8, x: i32, y: i32, z: i32) -> usize {
        let inner = self.fold(offset, z);
        let mid = self.perm[(y & 0xff) as usize + inner] as usize;
        self.perm[(x & 0xff) as usize + mid] as usize
    }

    #[inline]
    pub fn index3_12(&self, offset: u8, x: i32, y: i32, z: i32) -> usize {
        let inner = self.fold(offset, z);
        let mid = self.perm[(y & 0xff) as usize + inner] as usize;
        self.perm12[(x & 0xff) as usize + mid] as usize
    }

    // Pseudo-random lattice value in [-1, 1].
    #[inline]
    pub fn value_2d(&self, offset: u8, x: i32, y: i32) -> f64 {
        lattice_value(self.index2_256(offset, x, y))
    }

    #[inline]
    pub fn value_3d(&self, offset: u8, x: i32, y: i32, z: i32) -> f64 {
        lattice_value(self.index3_256(offset, x, y, z))
    }

    // Dot product of the corner gradient at `(x, y)` with the offset `(dx, dy)`.
    #[inline]
    pub fn grad_2d(&self, offset: u8, x: i32, y: i32, dx: f64, dy: f64) -> f64 {
        let g = GRAD_2D[self.index2_256(offset, x, y) & 7];
        g[0] * dx + g[1] * dy
    }

    #[inline]
    pub fn grad_3d(&self, offset: u8, x: i32, y: i32, z: i32, dx: f64, dy: f64, dz: f64) -> f64 {
        let g = GRAD_3D[self.index3_12(offset, x, y, z)];
        g[0] * dx + g[1] * dy + g[2] * dz
    }

    // Unit direction of the feature point of cell `(x, y)`.
    #[inline]
    pub fn cell_offset_2d(&self, x: i32, y: i32) -> [f64; 2] {
        CELL_2D[self.index2_256(0, x, y)]
    }

    #[inline]
    pub fn cell_offset_3d(&self, x: i32, y: i32, z: i32) -> [f64; 3] {
        CELL_3D[self.index3_256(0, x, y, z)]
    }
}

// Lattice coordinate of an already floored or rounded value, wrapped into
// i32. Table lookups only read the low 8 bits and the coordinate hash wraps
// at 2^32, so far-away cells keep their fractional offset instead of
// saturating at i32::MAX.
#[inline]
pub fn wrap_cell(v: f64) -> i32 {
    v as i64 as i32
}

// Maps a byte index onto evenly spaced values in [-1, 1].
#[inline]
pub fn lattice_value(index: usize) -> f64 {
    index as f64 / 127.5 - 1.0
}

// Direct integer hash of a lattice point, in [-1, 1). Does not use the table.
#[inline]
pub fn value_coord_2d(seed: i32, x: i32, y: i32) -> f64 {
    let mut n = seed;
    n ^= X_PRIME.wrapping_mul(x);
    n ^= Y_PRIME.wrapping_mul(y);
    mix(n)
}

#[inline]
pub fn value_coord_3d(seed: i32, x: i32, y: i32, z: i32) -> f64 {
    let mut n = seed;
    n ^= X_PRIME.wrapping_mul(x);
    n ^= Y_PRIME.wrapping_mul(y);
    n ^= Z_PRIME.wrapping_mul(z);
    mix(n)
}

#[inline]
fn mix(n: i32) -> f64 {
    n.wrapping_mul(n).wrapping_mul(n).wrapping_mul(60493) as f64 / 2_147_483_648.0
}
