use crate::config::Interpolation;
use crate::hash::{PermutationTable, wrap_cell};
use crate::interp::lerp;

// Value noise: hashed lattice values blended with the interpolation curve.
// Output in [-1, 1].

pub fn value_2d(table: &PermutationTable, offset: u8, interp: Interpolation, x: f64, y: f64) -> f64 {
    let (xf, yf) = (x.floor(), y.floor());
    let x0 = wrap_cell(xf);
    let y0 = wrap_cell(yf);
    let x1 = x0.wrapping_add(1);
    let y1 = y0.wrapping_add(1);

    let xs = interp.curve(x - xf);
    let ys = interp.curve(y - yf);

    let xf0 = lerp(table.value_2d(offset, x0, y0), table.value_2d(offset, x1, y0), xs);
    let xf1 = lerp(table.value_2d(offset, x0, y1), table.value_2d(offset, x1, y1), xs);
    lerp(xf0, xf1, ys)
}

pub fn value_3d(
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

    let xs = interp.curve(x - xf);
    let ys = interp.curve(y - yf);
    let zs = interp.curve(z - zf);

    let v = |x, y, z| table.value_3d(offset, x, y, z);

    let xf00 = lerp(v(x0, y0, z0), v(x1, y0, z0), xs);
    let xf10 = lerp(v(x0, y1, z0), v(x1, y1, z0), xs);
    let xf01 = lerp(v(x0, y0, z1), v(x1, y0, z1), xs);
    let xf11 = lerp(v(x0, y1, z1), v(x1, y1, z1), xs);

    let yf0 = lerp(xf00, xf10, ys);
    let yf1 = lerp(xf01, xf11, ys);
    lerp(yf0, yf1, zs)
}
