use crate::config::Interpolation;
use crate::hash::{PermutationTable, wrap_cell};
use crate::interp::lerp;

// Gradient noise on the square/cubic lattice: each corner contributes the dot
// product of its gradient with the offset to the sample point, and the
// contributions are blended with the configured curve.

// With edge gradients the 3D sum peaks near 1.065 (linear blending, worst
// corner alignment), so it is scaled back into [-1, 1].
const PERLIN_3D_BOUNDING: f64 = 1.0 / 1.066;

pub fn perlin_2d(table: &PermutationTable, offset: u8, interp: Interpolation, x: f64, y: f64) -> f64 {
    let (xf, yf) = (x.floor(), y.floor());
    let x0 = wrap_cell(xf);
    let y0 = wrap_cell(yf);
    let x1 = x0.wrapping_add(1);
    let y1 = y0.wrapping_add(1);

    // offsets from the near and far corners
    let xd0 = x - xf;
    let yd0 = y - yf;
    let xd1 = xd0 - 1.0;
    let yd1 = yd0 - 1.0;

    let xs = interp.curve(xd0);
    let ys = interp.curve(yd0);

    let xf0 = lerp(
        table.grad_2d(offset, x0, y0, xd0, yd0),
        table.grad_2d(offset, x1, y0, xd1, yd0),
        xs,
    );
    let xf1 = lerp(
        table.grad_2d(offset, x0, y1, xd0, yd1),
        table.grad_2d(offset, x1, y1, xd1, yd1),
        xs,
    );
    lerp(xf0, xf1, ys)
}

pub fn perlin_3d(
    table: &PermutationTable,
    offset: u8,
    interp: Interpolation,
    x: f64,
    y: f64,
    z: f64,
) -> f64 {
    let (xf, yf, zf) = (x.floor(), y.floor(), z.floor());
    let x0 = wrap_cell(xf);
    let y0 = wrap_cell(yf);
    let z0 = wrap_cell(zf);
    let x1 = x0.wrapping_add(1);
    let y1 = y0.wrapping_add(1);
    let z1 = z0.wrapping_add(1);

    let xd0 = x - xf;
    let yd0 = y - yf;
    let zd0 = z - zf;
    let xd1 = xd0 - 1.0;
    let yd1 = yd0 - 1.0;
    let zd1 = zd0 - 1.0;

    let xs = interp.curve(xd0);
    let ys = interp.curve(yd0);
    let zs = interp.curve(zd0);

    let g = |x, y, z, dx, dy, dz| table.grad_3d(offset, x, y, z, dx, dy, dz);

    let xf00 = lerp(g(x0, y0, z0, xd0, yd0, zd0), g(x1, y0, z0, xd1, yd0, zd0), xs);
    let xf10 = lerp(g(x0, y1, z0, xd0, yd1, zd0), g(x1, y1, z0, xd1, yd1, zd0), xs);
    let xf01 = lerp(g(x0, y0, z1, xd0, yd0, zd1), g(x1, y0, z1, xd1, yd0, zd1), xs);
    let xf11 = lerp(g(x0, y1, z1, xd0, yd1, zd1), g(x1, y1, z1, xd1, yd1, zd1), xs);

    let yf0 = lerp(xf00, xf10, ys);
    let yf1 = lerp(xf01, xf11, ys);
    lerp(yf0, yf1, zs) * PERLIN_3D_BOUNDING
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_on_lattice_points() {
        let t = PermutationTable::new(1234);
        for x in -4..4 {
            for y in -4..4 {
                assert_eq!(perlin_2d(&t, 0, Interpolation::Quintic, x as f64, y as f64), 0.0);
                assert_eq!(
                    perlin_3d(&t, 0, Interpolation::Quintic, x as f64, y as f64, 2.0),
                    0.0
                );
            }
        }
    }

    #[test]
    fn perlin2_range() {
        let t = PermutationTable::new(0);
        for &(x, y) in &[(0.5, 0.5), (5.3, -1.2), (100.1, 200.2), (-7.77, 3.14)] {
            let v = perlin_2d(&t, 0, Interpolation::Quintic, x, y);
            assert!(v >= -1.0 - 1e-6 && v <= 1.0 + 1e-6);
        }
    }

    #[test]
    fn perlin3_range() {
        let t = PermutationTable::new(21);
        for &interp in Interpolation::ALL {
            for i in 0..1000 {
                let f = i as f64 * 0.0917;
                let v = perlin_3d(&t, 0, interp, f, 13.0 - f, f * 0.37);
                assert!(v.abs() <= 1.0, "{interp} value {v}");
            }
        }
    }

    #[test]
    fn octave_offset_changes_pattern() {
        let t = PermutationTable::new(99);
        let differs = (0..16).any(|i| {
            let x = 3.3 + i as f64 * 1.7;
            let a = perlin_2d(&t, 0, Interpolation::Quintic, x, 7.7);
            let b = perlin_2d(&t, 1, Interpolation::Quintic, x, 7.7);
            a != b
        });
        assert!(differs);
    }
}
