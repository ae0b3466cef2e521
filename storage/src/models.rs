use bson::oid::ObjectId;
use noise_core::NoiseConfig;
use serde::{Deserialize, Serialize};

// A named noise configuration as stored in MongoDB.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoisePresetDoc {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none", default)]
    pub id: Option<ObjectId>,
    pub name: String,
    // duplicated from `config.seed` so presets can be queried by seed
    pub seed: i32,
    pub config: NoiseConfig,
    // Flattened row-major preview: length = preview_size×preview_size
    #[serde(default)]
    pub preview: Option<Vec<f32>>,
    #[serde(default)]
    pub preview_size: i32,
}

impl NoisePresetDoc {
    pub fn new(name: impl Into<String>, config: NoiseConfig) -> Self {
        Self {
            id: None,
            name: name.into(),
            seed: config.seed,
            config,
            preview: None,
            preview_size: 0,
        }
    }

    pub fn with_preview(mut self, preview: Vec<f32>, size: usize) -> Self {
        self.preview = Some(preview);
        self.preview_size = size as i32;
        self
    }
}
