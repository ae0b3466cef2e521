use crate::hash::{PermutationTable, wrap_cell};

// Simplex noise: the input is skewed onto a triangular (2D) or tetrahedral
// (3D) lattice, and each simplex corner adds a radially attenuated gradient
// contribution. Cheaper than Perlin in 3D and without axis-aligned artifacts.
// Output roughly in [-1, 1].

// 0.5 * (sqrt(3) - 1), squeezes the square into a rhombus of two equilateral triangles
const F2: f64 = 0.366_025_403_784_438_6;
// (3 - sqrt(3)) / 6, reverses the skew
const G2: f64 = 0.211_324_865_405_187_1;
const F3: f64 = 1.0 / 3.0;
const G3: f64 = 1.0 / 6.0;

pub fn simplex_2d(table: &PermutationTable, offset: u8, x: f64, y: f64) -> f64 {
    // Which triangle pair are we in?
    let s = (x + y) * F2;
    let fi = (x + s).floor();
    let fj = (y + s).floor();
    let i = wrap_cell(fi);
    let j = wrap_cell(fj);

    // Unskew back to get the offset from the origin corner
    let t = (fi + fj) * G2;
    let x0 = x - (fi - t);
    let y0 = y - (fj - t);

    // Lower or upper triangle
    let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };

    let x1 = x0 - i1 as f64 + G2;
    let y1 = y0 - j1 as f64 + G2;
    let x2 = x0 - 1.0 + 2.0 * G2;
    let y2 = y0 - 1.0 + 2.0 * G2;

    let n0 = corner_2d(table, offset, i, j, x0, y0);
    let n1 = corner_2d(table, offset, i.wrapping_add(i1), j.wrapping_add(j1), x1, y1);
    let n2 = corner_2d(table, offset, i.wrapping_add(1), j.wrapping_add(1), x2, y2);

    70.0 * (n0 + n1 + n2)
}

#[inline]
fn corner_2d(table: &PermutationTable, offset: u8, i: i32, j: i32, x: f64, y: f64) -> f64 {
    // circular radius of influence
    let t = 0.5 - x * x - y * y;
    if t <= 0.0 {
        return 0.0;
    }
    let t2 = t * t;
    t2 * t2 * table.grad_2d(offset, i, j, x, y)
}

pub fn simplex_3d(table: &PermutationTable, offset: u8, x: f64, y: f64, z: f64) -> f64 {
    let s = (x + y + z) * F3;
    let fi = (x + s).floor();
    let fj = (y + s).floor();
    let fk = (z + s).floor();
    let (i, j, k) = (wrap_cell(fi), wrap_cell(fj), wrap_cell(fk));

    let t = (fi + fj + fk) * G3;
    let x0 = x - (fi - t);
    let y0 = y - (fj - t);
    let z0 = z - (fk - t);

    // Pick the tetrahedron by ordering the local coordinates
    let (i1, j1, k1, i2, j2, k2) = if x0 >= y0 {
        if y0 >= z0 {
            (1, 0, 0, 1, 1, 0)
        } else if x0 >= z0 {
            (1, 0, 0, 1, 0, 1)
        } else {
            (0, 0, 1, 1, 0, 1)
        }
    } else if y0 < z0 {
        (0, 0, 1, 0, 1, 1)
    } else if x0 < z0 {
        (0, 1, 0, 0, 1, 1)
    } else {
        (0, 1, 0, 1, 1, 0)
    };

    let x1 = x0 - i1 as f64 + G3;
    let y1 = y0 - j1 as f64 + G3;
    let z1 = z0 - k1 as f64 + G3;
    let x2 = x0 - i2 as f64 + 2.0 * G3;
    let y2 = y0 - j2 as f64 + 2.0 * G3;
    let z2 = z0 - k2 as f64 + 2.0 * G3;
    let x3 = x0 - 1.0 + 3.0 * G3;
    let y3 = y0 - 1.0 + 3.0 * G3;
    let z3 = z0 - 1.0 + 3.0 * G3;

    let n0 = corner_3d(table, offset, [i, j, k], x0, y0, z0);
    let n1 = corner_3d(
        table,
        offset,
        [i.wrapping_add(i1), j.wrapping_add(j1), k.wrapping_add(k1)],
        x1,
        y1,
        z1,
    );
    let n2 = corner_3d(
        table,
        offset,
        [i.wrapping_add(i2), j.wrapping_add(j2), k.wrapping_add(k2)],
        x2,
        y2,
        z2,
    );
    let n3 = corner_3d(
        table,
        offset,
        [i.wrapping_add(1), j.wrapping_add(1), k.wrapping_add(1)],
        x3,
        y3,
        z3,
    );

    32.0 * (n0 + n1 + n2 + n3)
}

#[inline]
fn corner_3d(table: &PermutationTable, offset: u8, cell: [i32; 3], x: f64, y: f64, z: f64) -> f64 {
    let t = 0.6 - x * x - y * y - z * z;
    if t <= 0.0 {
        return 0.0;
    }
    let t2 = t * t;
    t2 * t2 * table.grad_3d(offset, cell[0], cell[1], cell[2], x, y, z)
}
