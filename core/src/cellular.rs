// Cellular (Worley) noise.
//
// Every lattice cell `c` owns one feature point at
// `c + direction(hash(c)) * jitter`. A sample looks at the cells around its
// nearest lattice point (3x3 in 2D, 3x3x3 in 3D), keeps the nearest and
// second-nearest feature distances, and turns them into a scalar according
// to the configured [`CellularReturnType`].
//
// Ties are broken by visiting order: candidates are visited with x outermost,
// then y, then z, each ascending, and only a strictly smaller distance
// replaces the current nearest. The first visited of two equidistant
// feature points therefore always wins.

use crate::NoiseGenerator;
use crate::config::{CellularDistanceFunction, CellularReturnType, NoiseConfig};
use crate::hash::{PermutationTable, value_coord_2d, value_coord_3d, wrap_cell};

// The subset of [`NoiseConfig`] the cellular kernel reads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellularSettings {
    pub seed: i32,
    pub jitter: f64,
    pub distance_function: CellularDistanceFunction,
    pub return_type: CellularReturnType,
}

impl From<&NoiseConfig> for CellularSettings {
    fn from(config: &NoiseConfig) -> Self {
        Self {
            seed: config.seed,
            jitter: config.cellular_jitter,
            distance_function: config.cellular_distance_function,
            return_type: config.cellular_return_type,
        }
    }
}

// Nearest and second-nearest distances plus the winning cell.
struct Nearest<const N: usize> {
    d1: f64,
    d2: f64,
    cell: [i32; N],
    point: [f64; N],
}

impl<const N: usize> Nearest<N> {
    fn new() -> Self {
        Self {
            d1: f64::INFINITY,
            d2: f64::INFINITY,
            cell: [0; N],
            point: [0.0; N],
        }
    }

    #[inline]
    fn offer(&mut self, distance: f64, cell: [i32; N], point: [f64; N]) {
        if distance < self.d1 {
            self.d2 = self.d1;
            self.d1 = distance;
            self.cell = cell;
            self.point = point;
        } else if distance < self.d2 {
            self.d2 = distance;
        }
    }
}

impl CellularDistanceFunction {
    #[inline]
    fn distance_2d(self, dx: f64, dy: f64) -> f64 {
        match self {
            CellularDistanceFunction::Euclidean => (dx * dx + dy * dy).sqrt(),
            CellularDistanceFunction::Manhattan => dx.abs() + dy.abs(),
            CellularDistanceFunction::Natural => {
                0.5 * ((dx * dx + dy * dy).sqrt() + dx.abs() + dy.abs())
            }
        }
    }

    #[inline]
    fn distance_3d(self, dx: f64, dy: f64, dz: f64) -> f64 {
        match self {
            CellularDistanceFunction::Euclidean => (dx * dx + dy * dy + dz * dz).sqrt(),
            CellularDistanceFunction::Manhattan => dx.abs() + dy.abs() + dz.abs(),
            CellularDistanceFunction::Natural => {
                0.5 * ((dx * dx + dy * dy + dz * dz).sqrt() + dx.abs() + dy.abs() + dz.abs())
            }
        }
    }
}

// Distance-derived return types; CellValue and NoiseLookup are handled by the caller.
fn combine(return_type: CellularReturnType, d1: f64, d2: f64) -> f64 {
    match return_type {
        CellularReturnType::Distance => d1,
        CellularReturnType::Distance2 => d2,
        CellularReturnType::Distance2Add => d1 + d2,
        CellularReturnType::Distance2Sub => d2 - d1,
        CellularReturnType::Distance2Mul => d1 * d2,
        CellularReturnType::Distance2Div => {
            if d2 > 0.0 {
                d1 / d2
            } else {
                0.0
            }
        }
        CellularReturnType::CellValue | CellularReturnType::NoiseLookup => d1,
    }
}

// 2D cellular noise at an already frequency-scaled coordinate.
//
// `lookup` is sampled at the nearest feature point for
// [`CellularReturnType::NoiseLookup`]; without one the cell value is returned.
pub fn cellular_2d(
    table: &PermutationTable,
    settings: &CellularSettings,
    lookup: Option<&dyn NoiseGenerator>,
    x: f64,
    y: f64,
) -> f64 {
    // offsets relative to the rounded point
    let (xr, yr) = (x.round(), y.round());
    let (lx, ly) = (x - xr, y - yr);
    let (cx, cy) = (wrap_cell(xr), wrap_cell(yr));

    let mut nearest = Nearest::<2>::new();
    for dx in -1..=1 {
        for dy in -1..=1 {
            let cell = [cx.wrapping_add(dx), cy.wrapping_add(dy)];
            let dir = table.cell_offset_2d(cell[0], cell[1]);
            let ox = dx as f64 + dir[0] * settings.jitter;
            let oy = dy as f64 + dir[1] * settings.jitter;
            let d = settings.distance_function.distance_2d(ox - lx, oy - ly);
            nearest.offer(d, cell, [xr + ox, yr + oy]);
        }
    }

    match settings.return_type {
        CellularReturnType::CellValue => value_coord_2d(settings.seed, nearest.cell[0], nearest.cell[1]),
        CellularReturnType::NoiseLookup => match lookup {
            Some(noise) => noise.get2(nearest.point[0], nearest.point[1]),
            None => value_coord_2d(settings.seed, nearest.cell[0], nearest.cell[1]),
        },
        other => combine(other, nearest.d1, nearest.d2),
    }
}

// 3D cellular noise at an already frequency-scaled coordinate.
pub fn cellular_3d(
    table: &PermutationTable,
    settings: &CellularSettings,
    lookup: Option<&dyn NoiseGenerator>,
    x: f64,
    y: f64,
    z: f64,
) -> f64 {
    let (xr, yr, zr) = (x.round(), y.round(), z.round());
    let (lx, ly, lz) = (x - xr, y - yr, z - zr);
    let (cx, cy, cz) = (wrap_cell(xr), wrap_cell(yr), wrap_cell(zr));

    let mut nearest = Nearest::<3>::new();
    for dx in -1..=1 {
        for dy in -1..=1 {
            for dz in -1..=1 {
                let cell = [cx.wrapping_add(dx), cy.wrapping_add(dy), cz.wrapping_add(dz)];
                let dir = table.cell_offset_3d(cell[0], cell[1], cell[2]);
                let ox = dx as f64 + dir[0] * settings.jitter;
                let oy = dy as f64 + dir[1] * settings.jitter;
                let oz = dz as f64 + dir[2] * settings.jitter;
                let d = settings
                    .distance_function
                    .distance_3d(ox - lx, oy - ly, oz - lz);
                nearest.offer(d, cell, [xr + ox, yr + oy, zr + oz]);
            }
        }
    }

    let [cx, cy, cz] = nearest.cell;
    match settings.return_type {
        CellularReturnType::CellValue => value_coord_3d(settings.seed, cx, cy, cz),
        CellularReturnType::NoiseLookup => match lookup {
            Some(noise) => noise.get3(nearest.point[0], nearest.point[1], nearest.point[2]),
            None => value_coord_3d(settings.seed, cx, cy, cz),
        },
        other => combine(other, nearest.d1, nearest.d2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(jitter: f64, return_type: CellularReturnType) -> CellularSettings {
        CellularSettings {
            seed: 1337,
            jitter,
            distance_function: CellularDistanceFunction::Euclidean,
            return_type,
        }
    }

    struct Constant(f64);

    impl NoiseGenerator for Constant {
        fn get2(&self, _x: f64, _y: f64) -> f64 {
            self.0
        }

        fn get3(&self, _x: f64, _y: f64, _z: f64) -> f64 {
            self.0
        }
    }

    #[test]
    fn zero_jitter_puts_feature_points_on_lattice() {
        let t = PermutationTable::new(1);
        let s = settings(0.0, CellularReturnType::Distance);
        let d = cellular_2d(&t, &s, None, 3.25, -1.0);
        assert!((d - 0.25).abs() < 1e-12);
        let d = cellular_3d(&t, &s, None, 3.0, -1.0, 0.1);
        assert!((d - 0.1).abs() < 1e-12);
    }

    #[test]
    fn equidistant_points_resolve_to_first_visited_cell() {
        let t = PermutationTable::new(1);
        // (0, 0) and (1, 0) are both sqrt(0.34) away
        let s = settings(0.0, CellularReturnType::CellValue);
        let v = cellular_2d(&t, &s, None, 0.5, 0.3);
        assert_eq!(v, value_coord_2d(1337, 0, 0));
        assert_eq!(v, cellular_2d(&t, &s, None, 0.5, 0.3));

        let s = settings(0.0, CellularReturnType::Distance2Sub);
        assert_eq!(cellular_2d(&t, &s, None, 0.5, 0.3), 0.0);
    }

    #[test]
    fn equidistant_points_resolve_to_first_visited_cell_3d() {
        let t = PermutationTable::new(1);
        // (0, 0, 0) and (1, 0, 0) are both sqrt(0.34) away; x is visited first
        let s = settings(0.0, CellularReturnType::CellValue);
        let v = cellular_3d(&t, &s, None, 0.5, 0.3, 0.0);
        assert_eq!(v, value_coord_3d(1337, 0, 0, 0));
        assert_ne!(v, value_coord_3d(1337, 1, 0, 0));

        let s = settings(0.0, CellularReturnType::Distance2Sub);
        assert_eq!(cellular_3d(&t, &s, None, 0.5, 0.3, 0.0), 0.0);
    }

    #[test]
    fn far_samples_keep_small_distances() {
        let t = PermutationTable::new(5);
        let s = settings(0.0, CellularReturnType::Distance);
        // beyond i32::MAX the lattice wraps; the distance still comes from the fraction
        let d = cellular_2d(&t, &s, None, 3.5e9 + 0.25, -3.5e9);
        assert!((d - 0.25).abs() < 1e-6, "{d}");
        let d = cellular_3d(&t, &s, None, 3.5e9, 3.5e9, -3.5e9 + 0.25);
        assert!((d - 0.25).abs() < 1e-6, "{d}");

        let s = settings(0.45, CellularReturnType::Distance2Sub);
        let v = cellular_3d(&t, &s, None, 4.1e9, -7.3e9, 9.9e9);
        assert!(v.is_finite() && v >= 0.0);
    }

    #[test]
    fn distance_returns_are_consistent() {
        let t = PermutationTable::new(77);
        for i in 0..400 {
            let (x, y) = (i as f64 * 0.37, i as f64 * -0.21 + 5.0);
            let get = |r| cellular_2d(&t, &settings(0.45, r), None, x, y);
            let d1 = get(CellularReturnType::Distance);
            let d2 = get(CellularReturnType::Distance2);
            assert!(d1 >= 0.0 && d2 >= d1);
            assert_eq!(get(CellularReturnType::Distance2Add), d1 + d2);
            assert_eq!(get(CellularReturnType::Distance2Sub), d2 - d1);
            assert_eq!(get(CellularReturnType::Distance2Mul), d1 * d2);
            let div = get(CellularReturnType::Distance2Div);
            assert!((0.0..=1.0).contains(&div));
        }
    }

    #[test]
    fn manhattan_and_natural_bracket_euclidean() {
        let t = PermutationTable::new(3);
        let mut s = settings(0.0, CellularReturnType::Distance);
        let e = cellular_2d(&t, &s, None, 0.3, 0.2);
        s.distance_function = CellularDistanceFunction::Manhattan;
        let m = cellular_2d(&t, &s, None, 0.3, 0.2);
        s.distance_function = CellularDistanceFunction::Natural;
        let n = cellular_2d(&t, &s, None, 0.3, 0.2);
        assert!((e - 0.13f64.sqrt()).abs() < 1e-12);
        assert!((m - 0.5).abs() < 1e-12);
        assert!((n - 0.5 * (e + m)).abs() < 1e-12);
    }

    #[test]
    fn noise_lookup_samples_the_lookup_generator() {
        let t = PermutationTable::new(9);
        let s = settings(0.45, CellularReturnType::NoiseLookup);
        let lookup = Constant(0.625);
        assert_eq!(cellular_2d(&t, &s, Some(&lookup as &dyn NoiseGenerator), 1.2, 3.4), 0.625);
        assert_eq!(cellular_3d(&t, &s, Some(&lookup as &dyn NoiseGenerator), 1.2, 3.4, 5.6), 0.625);
    }

    #[test]
    fn noise_lookup_without_generator_falls_back_to_cell_value() {
        let t = PermutationTable::new(9);
        let lookup = cellular_2d(&t, &settings(0.45, CellularReturnType::NoiseLookup), None, 1.2, 3.4);
        let cell = cellular_2d(&t, &settings(0.45, CellularReturnType::CellValue), None, 1.2, 3.4);
        assert_eq!(lookup, cell);
    }
}
