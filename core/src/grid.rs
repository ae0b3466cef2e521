use crate::NoiseGenerator;

// Terrain palette: (upper height, low color, high color), checked in order.
// Heights at or above the last bound use the last band.
const BANDS: [(f32, [u8; 3], [u8; 3]); 5] = [
    (0.3, [0, 0, 128], [0, 128, 255]),       // water
    (0.4, [194, 178, 128], [220, 200, 160]), // sand
    (0.6, [34, 139, 34], [50, 205, 50]),     // grass
    (0.8, [128, 128, 128], [192, 192, 192]), // rock
    (1.0, [220, 220, 220], [255, 255, 255]), // snow
];

// 2D height map: row-major Vec<Vec<f32>>, access as `map[y][x]`.
pub type HeightMap = Vec<Vec<f32>>;

// Sample `size` x `size` points of a 2D noise, starting at `origin`
// and moving `step` units per pixel.
pub fn sample_grid_2d(noise: &dyn NoiseGenerator, size: usize, origin: [f64; 2], step: f64) -> HeightMap {
    (0..size)
        .map(|y| {
            let py = origin[1] + y as f64 * step;
            (0..size)
                .map(|x| noise.get2(origin[0] + x as f64 * step, py) as f32)
                .collect()
        })
        .collect()
}

// Same as `sample_grid_2d`, on the plane z = `origin[2]` of a 3D noise.
pub fn sample_slice_3d(noise: &dyn NoiseGenerator, size: usize, origin: [f64; 3], step: f64) -> HeightMap {
    (0..size)
        .map(|y| {
            let py = origin[1] + y as f64 * step;
            (0..size)
                .map(|x| noise.get3(origin[0] + x as f64 * step, py, origin[2]) as f32)
                .collect()
        })
        .collect()
}

// flatten a height map (row-major) into a single Vec<f32>,
// for storing previews in MongoDB or building image buffers
pub fn flatten(map: &HeightMap) -> Vec<f32> {
    map.iter().flat_map(|row| row.iter().copied()).collect()
}

// Rescale the map in place so its values span [0, 1].
pub fn normalize(map: &mut HeightMap) {
    let mut min = f32::MAX;
    let mut max = f32::MIN;

    for row in map.iter() {
        for &val in row.iter() {
            min = min.min(val);
            max = max.max(val);
        }
    }

    let range = (max - min).max(0.001); // prevent zero-division
    for row in map.iter_mut() {
        for val in row.iter_mut() {
            *val = (*val - min) / range;
        }
    }
}

// Convert normalized heights into 8-bit luma bytes
pub fn to_grayscale(flat: &[f32]) -> Vec<u8> {
    flat.iter()
        .map(|&h| (h.clamp(0.0, 1.0) * 255.0).round() as u8)
        .collect()
}

fn mix_rgb(low: [u8; 3], high: [u8; 3], t: f32) -> [u8; 3] {
    std::array::from_fn(|i| (low[i] as f32 + (high[i] as f32 - low[i] as f32) * t).round() as u8)
}

// Color of a height in [0, 1]: find its band, then blend across the band.
fn terrain_color(h: f32) -> [u8; 3] {
    let h = h.clamp(0.0, 1.0);
    let mut floor = 0.0;
    for (top, low, high) in BANDS {
        if h < top || top >= 1.0 {
            return mix_rgb(low, high, (h - floor) / (top - floor));
        }
        floor = top;
    }
    BANDS[BANDS.len() - 1].2
}

// Convert normalized heights into an RGB byte buffer
pub fn to_terrain_rgb(flat: &[f32]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(flat.len() * 3);
    for &h in flat {
        buf.extend_from_slice(&terrain_color(h));
    }
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Ramp;

    impl NoiseGenerator for Ramp {
        fn get2(&self, x: f64, y: f64) -> f64 {
            x + 10.0 * y
        }

        fn get3(&self, x: f64, y: f64, z: f64) -> f64 {
            x + 10.0 * y + 100.0 * z
        }
    }

    #[test]
    fn grid_is_row_major() {
        let map = sample_grid_2d(&Ramp, 3, [1.0, 2.0], 0.5);
        assert_eq!(map.len(), 3);
        assert_eq!(map[0], vec![21.0, 21.5, 22.0]);
        assert_eq!(map[2][0], 31.0);
        assert_eq!(flatten(&map)[3], 26.0);
    }

    #[test]
    fn slice_sits_on_requested_plane() {
        let map = sample_slice_3d(&Ramp, 2, [0.0, 0.0, 1.0], 1.0);
        assert_eq!(map, vec![vec![100.0, 101.0], vec![110.0, 111.0]]);
    }

    #[test]
    fn normalize_spans_unit_range() {
        let mut map = vec![vec![-2.0, 0.0], vec![2.0, 1.0]];
        normalize(&mut map);
        assert_eq!(map, vec![vec![0.0, 0.5], vec![1.0, 0.75]]);

        let mut flat = vec![vec![0.3; 4]; 4];
        normalize(&mut flat);
        assert!(flatten(&flat).iter().all(|&v| v == 0.0));
    }

    #[test]
    fn image_buffers() {
        assert_eq!(to_grayscale(&[0.0, 0.5, 1.0, 7.0]), vec![0, 128, 255, 255]);
        let rgb = to_terrain_rgb(&[0.0, 0.7, 1.0]);
        assert_eq!(rgb.len(), 9);
        assert_eq!(&rgb[..3], &[0, 0, 128]);
        // rock band is grey
        assert!(rgb[3] == rgb[4] && rgb[4] == rgb[5]);
        assert!((150..=170).contains(&rgb[3]));
        assert_eq!(&rgb[6..], &[255, 255, 255]);
    }

    #[test]
    fn terrain_bands_start_at_their_low_color() {
        assert_eq!(terrain_color(0.3), [194, 178, 128]);
        assert_eq!(terrain_color(0.4), [34, 139, 34]);
        assert_eq!(terrain_color(0.6), [128, 128, 128]);
        assert_eq!(terrain_color(0.8), [220, 220, 220]);
        assert_eq!(terrain_color(-4.0), [0, 0, 128]);
        assert_eq!(terrain_color(2.0), [255, 255, 255]);
        // halfway through the water band
        assert_eq!(terrain_color(0.15)[1], 64);
    }
}
