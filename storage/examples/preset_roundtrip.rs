use noise_core::grid::{flatten, sample_grid_2d};
use noise_core::{FractalType, NoiseConfig, NoiseEngine, NoiseType};
use noise_storage::PresetStore;
use noise_storage::models::NoisePresetDoc;

#[tokio::main]
async fn main() -> mongodb::error::Result<()> {
    // Sample a 128×128 preview of a ridged simplex field
    let size = 128;
    let config = NoiseConfig {
        seed: 2025,
        fractal_type: FractalType::RigidMulti,
        octaves: 5,
        ..NoiseConfig::with_noise_type(NoiseType::SimplexFractal)
    };
    let engine = NoiseEngine::with_config(config.clone());
    let flat = flatten(&sample_grid_2d(&engine, size, [0.0, 0.0], 1.0));

    let preset = NoisePresetDoc::new("ridged-2025", config).with_preview(flat, size);

    // Init storage
    let store = PresetStore::init("mongodb://localhost:27017", "noise_db", "presets").await?;

    // Insert & read back
    store.create(preset).await?;
    if let Some(found) = store.read_by_seed(2025).await? {
        let center = found.preview.as_ref().map(|p| p[64 * size + 64]);
        println!("Round-trip success: {} center = {:?}", found.name, center);
    } else {
        println!("Preset not found!");
    }

    // Clean up
    store.delete_by_name("ridged-2025").await?;
    Ok(())
}
