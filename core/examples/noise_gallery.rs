use image::{GrayImage, Luma};
use noise_core::grid::{flatten, normalize, sample_grid_2d, sample_slice_3d, to_grayscale};
use noise_core::{CellularReturnType, FractalType, NoiseConfig, NoiseEngine, NoiseType};
use std::path::Path;

const SIZE: usize = 256;

fn save_gray(map: &mut Vec<Vec<f32>>, filename: &str) {
    normalize(map);
    let bytes = to_grayscale(&flatten(map));
    let mut img = GrayImage::new(SIZE as u32, SIZE as u32);
    for (i, &b) in bytes.iter().enumerate() {
        img.put_pixel((i % SIZE) as u32, (i / SIZE) as u32, Luma([b]));
    }
    img.save(Path::new(filename)).expect("failed to write png");
    println!("Saved {}", filename);
}

fn main() {
    // one 2D image and one 3D slice per noise type
    for &noise_type in NoiseType::ALL {
        let engine = NoiseEngine::with_config(NoiseConfig {
            frequency: 0.02,
            octaves: 5,
            ..NoiseConfig::with_noise_type(noise_type)
        });
        let mut map = sample_grid_2d(&engine, SIZE, [0.0, 0.0], 1.0);
        save_gray(&mut map, &format!("{noise_type}_2d.png"));
        let mut slice = sample_slice_3d(&engine, SIZE, [0.0, 0.0, 37.0], 1.0);
        save_gray(&mut slice, &format!("{noise_type}_3d.png"));
    }

    // a few combinations worth eyeballing
    let ridged = NoiseEngine::with_config(NoiseConfig {
        fractal_type: FractalType::RigidMulti,
        frequency: 0.01,
        octaves: 6,
        ..NoiseConfig::with_noise_type(NoiseType::SimplexFractal)
    });
    save_gray(&mut sample_grid_2d(&ridged, SIZE, [0.0, 0.0], 1.0), "ridged_2d.png");

    let cells = NoiseEngine::with_config(NoiseConfig {
        noise_type: NoiseType::Cellular,
        frequency: 0.03,
        cellular_return_type: CellularReturnType::NoiseLookup,
        cellular_noise_lookup: Some(Box::new(NoiseConfig {
            frequency: 0.2,
            ..NoiseConfig::with_noise_type(NoiseType::PerlinFractal)
        })),
        ..Default::default()
    });
    save_gray(&mut sample_grid_2d(&cells, SIZE, [0.0, 0.0], 1.0), "cellular_lookup_2d.png");
}
