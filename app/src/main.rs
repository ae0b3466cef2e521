mod cli;
mod logging;

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;
use image::{GrayImage, RgbImage};
use noise_core::grid::{flatten, normalize, sample_grid_2d, sample_slice_3d, to_grayscale, to_terrain_rgb};
use noise_core::{NoiseConfig, NoiseEngine};
use noise_storage::models::NoisePresetDoc;
use noise_storage::{PresetStore, file};
use tracing::{info, warn};

use crate::cli::{CliArgs, Command, DbArgs};

fn main() -> Result<()> {
    let args = CliArgs::parse();
    logging::init_logging(args.log_level.as_deref());

    match args.command {
        Command::InitConfig { force } => init_config(&args.config, force),
        Command::Render {
            ref out,
            size,
            step,
            origin_x,
            origin_y,
            z,
            terrain,
        } => render(resolve_config(&args)?, out, size, step, [origin_x, origin_y], z, terrain),
        Command::Sample { x, y, z } => {
            let engine = NoiseEngine::with_config(resolve_config(&args)?);
            let v = match z {
                Some(z) => engine.evaluate_3d(x, y, z),
                None => engine.evaluate_2d(x, y),
            };
            println!("{v}");
            Ok(())
        }
        Command::Save {
            ref name,
            preview_size,
            ref db,
        } => save_preset(resolve_config(&args)?, name, preview_size, db),
        Command::Load {
            ref name,
            by_seed,
            ref db,
        } => load_preset(&args.config, name.as_deref(), by_seed, db),
        Command::List { ref db } => {
            let rt = runtime()?;
            let names = rt.block_on(async {
                let store = connect(db).await?;
                store.list_names().await.context("listing presets")
            })?;
            for name in names {
                println!("{name}");
            }
            Ok(())
        }
        Command::Delete { ref name, ref db } => {
            let rt = runtime()?;
            let removed = rt.block_on(async {
                let store = connect(db).await?;
                store.delete_by_name(name).await.context("deleting preset")
            })?;
            if removed {
                info!("deleted preset {name}");
            } else {
                warn!("no preset named {name}");
            }
            Ok(())
        }
    }
}

// Config file (if any) with the command-line overrides on top.
fn resolve_config(args: &CliArgs) -> Result<NoiseConfig> {
    let mut config = if args.config.exists() {
        file::load_config(&args.config)?
    } else {
        info!("{} not found, using defaults", args.config.display());
        NoiseConfig::default()
    };
    args.noise.apply_overrides(&mut config);
    if let Err(e) = config.validate() {
        warn!("{e}; the value will be clamped");
    }
    Ok(config)
}

fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!("{} already exists, pass --force to overwrite", path.display());
    }
    file::save_config(path, &NoiseConfig::default())?;
    info!("wrote default config to {}", path.display());
    Ok(())
}

fn render(
    config: NoiseConfig,
    out: &Path,
    size: usize,
    step: f64,
    origin: [f64; 2],
    z: Option<f64>,
    terrain: bool,
) -> Result<()> {
    if size == 0 {
        bail!("--size must be positive");
    }
    let start = Instant::now();
    let noise_type = config.noise_type;
    let engine = NoiseEngine::with_config(config);
    let mut map = match z {
        Some(z) => sample_slice_3d(&engine, size, [origin[0], origin[1], z], step),
        None => sample_grid_2d(&engine, size, origin, step),
    };
    normalize(&mut map);
    let flat = flatten(&map);

    let side = size as u32;
    let saved = if terrain {
        RgbImage::from_raw(side, side, to_terrain_rgb(&flat))
            .context("terrain buffer has the wrong size")?
            .save(out)
    } else {
        GrayImage::from_raw(side, side, to_grayscale(&flat))
            .context("grayscale buffer has the wrong size")?
            .save(out)
    };
    saved.with_context(|| format!("writing {}", out.display()))?;

    info!(
        "rendered {noise_type} {size}x{size} to {} in {:.2} ms",
        out.display(),
        start.elapsed().as_secs_f64() * 1000.0
    );
    Ok(())
}

fn save_preset(config: NoiseConfig, name: &str, preview_size: usize, db: &DbArgs) -> Result<()> {
    let mut preset = NoisePresetDoc::new(name, config.clone());
    if preview_size > 0 {
        let engine = NoiseEngine::with_config(config);
        let preview = flatten(&sample_grid_2d(&engine, preview_size, [0.0, 0.0], 1.0));
        preset = preset.with_preview(preview, preview_size);
    }

    let rt = runtime()?;
    rt.block_on(async {
        let store = connect(db).await?;
        store.create(preset).await.context("saving preset")
    })?;
    info!("saved preset {name}");
    Ok(())
}

fn load_preset(path: &Path, name: Option<&str>, seed: Option<i32>, db: &DbArgs) -> Result<()> {
    let rt = runtime()?;
    let found = rt.block_on(async {
        let store = connect(db).await?;
        let found = match (name, seed) {
            (Some(name), _) => store.read_by_name(name).await,
            (None, Some(seed)) => store.read_by_seed(seed).await,
            (None, None) => bail!("a preset name or --by-seed is required"),
        };
        found.context("reading preset")
    })?;

    let Some(preset) = found else {
        bail!("preset not found");
    };
    file::save_config(path, &preset.config)?;
    info!("loaded preset {} (seed {}) into {}", preset.name, preset.seed, path.display());
    Ok(())
}

fn runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to build Tokio runtime")
}

async fn connect(db: &DbArgs) -> Result<PresetStore> {
    PresetStore::init(&db.mongo_uri, &db.database, &db.collection)
        .await
        .with_context(|| format!("connecting to {}", db.mongo_uri))
}
