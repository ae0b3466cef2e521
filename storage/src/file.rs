// RON files holding a single [`NoiseConfig`].

use std::path::Path;

use noise_core::NoiseConfig;

use crate::error::ConfigError;

pub fn load_config(path: &Path) -> Result<NoiseConfig, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
    let config: NoiseConfig = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
    log::info!("loaded noise config from {}", path.display());
    Ok(config)
}

pub fn save_config(path: &Path, config: &NoiseConfig) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(ConfigError::WriteError)?;
    }
    let pretty = ron::ser::PrettyConfig::new()
        .depth_limit(3)
        .separate_tuple_members(true)
        .enumerate_arrays(false);
    let serialized = ron::ser::to_string_pretty(config, pretty).map_err(ConfigError::SerializeError)?;
    std::fs::write(path, serialized).map_err(ConfigError::WriteError)?;
    log::info!("saved noise config to {}", path.display());
    Ok(())
}

// Loads `path`, or writes the default configuration there if it does not exist.
pub fn load_or_create(path: &Path) -> Result<NoiseConfig, ConfigError> {
    if path.exists() {
        load_config(path)
    } else {
        let config = NoiseConfig::default();
        save_config(path, &config)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noise_core::{CellularReturnType, FractalType, NoiseType};

    #[test]
    fn load_or_create_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("noise.ron");
        let created = load_or_create(&path).unwrap();
        assert_eq!(created, NoiseConfig::default());
        assert!(path.exists());
        assert_eq!(load_or_create(&path).unwrap(), created);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.ron");
        std::fs::write(&path, "(noise_type: Cellular, seed: 9)").unwrap();
        let config = load_config(&path).unwrap();
        assert_eq!(config.noise_type, NoiseType::Cellular);
        assert_eq!(config.seed, 9);
        assert_eq!(config.octaves, 3);
    }

    #[test]
    fn invalid_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.ron");
        std::fs::write(&path, "{{not valid}}").unwrap();
        assert!(matches!(load_config(&path), Err(ConfigError::ParseError(_))));
        assert!(matches!(
            load_config(&dir.path().join("missing.ron")),
            Err(ConfigError::ReadError(_))
        ));
    }

    #[test]
    fn every_field_survives_a_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("full.ron");
        let config = NoiseConfig {
            noise_type: NoiseType::Cellular,
            seed: -12345,
            frequency: 0.0173,
            fractal_type: FractalType::RigidMulti,
            octaves: 7,
            lacunarity: 1.87,
            gain: -0.3,
            cellular_jitter: 0.9,
            cellular_return_type: CellularReturnType::NoiseLookup,
            cellular_noise_lookup: Some(Box::new(NoiseConfig::with_noise_type(NoiseType::CubicFractal))),
            ..Default::default()
        };
        save_config(&path, &config).unwrap();
        assert_eq!(load_config(&path).unwrap(), config);
    }
}
