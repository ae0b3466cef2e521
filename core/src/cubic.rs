use crate::hash::{PermutationTable, wrap_cell};
use crate::interp::cubic_lerp;

// Bicubic / tricubic interpolation of hashed lattice values over a 4^n
// neighbourhood. Each cubic pass can overshoot by 1.5x, so the result is
// scaled back into [-1, 1].

const CUBIC_2D_BOUNDING: f64 = 1.0 / (1.5 * 1.5);
const CUBIC_3D_BOUNDING: f64 = 1.0 / (1.5 * 1.5 * 1.5);

pub fn cubic_2d(table: &PermutationTable, offset: u8, x: f64, y: f64) -> f64 {
    let (xf, yf) = (x.floor(), y.floor());
    let x1 = wrap_cell(xf);
    let y1 = wrap_cell(yf);
    let xs = x - xf;
    let ys = y - yf;

    let xi = [x1.wrapping_sub(1), x1, x1.wrapping_add(1), x1.wrapping_add(2)];
    let yi = [y1.wrapping_sub(1), y1, y1.wrapping_add(1), y1.wrapping_add(2)];

    let row = |y: i32| {
        cubic_lerp(
            table.value_2d(offset, xi[0], y),
            table.value_2d(offset, xi[1], y),
            table.value_2d(offset, xi[2], y),
            table.value_2d(offset, xi[3], y),
            xs,
        )
    };

    cubic_lerp(row(yi[0]), row(yi[1]), row(yi[2]), row(yi[3]), ys) * CUBIC_2D_BOUNDING
}

pub fn cubic_3d(table: &PermutationTable, offset: u8, x: f64, y: f64, z: f64) -> f64 {
    let (xf, yf, zf) = (x.floor(), y.floor(), z.floor());
    let x1 = wrap_cell(xf);
    let y1 = wrap_cell(yf);
    let z1 = wrap_cell(zf);
    let xs = x - xf;
    let ys = y - yf;
    let zs = z - zf;

    let xi = [x1.wrapping_sub(1), x1, x1.wrapping_add(1), x1.wrapping_add(2)];
    let yi = [y1.wrapping_sub(1), y1, y1.wrapping_add(1), y1.wrapping_add(2)];
    let zi = [z1.wrapping_sub(1), z1, z1.wrapping_add(1), z1.wrapping_add(2)];

    let row = |y: i32, z: i32| {
        cubic_lerp(
            table.value_3d(offset, xi[0], y, z),
            table.value_3d(offset, xi[1], y, z),
            table.value_3d(offset, xi[2], y, z),
            table.value_3d(offset, xi[3], y, z),
            xs,
        )
    };
    let plane = |z: i32| cubic_lerp(row(yi[0], z), row(yi[1], z), row(yi[2], z), row(yi[3], z), ys);

    cubic_lerp(plane(zi[0]), plane(zi[1]), plane(zi[2]), plane(zi[3]), zs) * CUBIC_3D_BOUNDING
}
