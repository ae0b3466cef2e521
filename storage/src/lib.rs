//storage holds the MongoDB preset schema, async CRUD and RON config files

pub mod error;
pub mod file;
pub mod models;

pub use error::ConfigError;

use crate::models::NoisePresetDoc;
use bson::{Document, doc};
use futures_util::stream::TryStreamExt;
use mongodb::options::IndexOptions;
use mongodb::{Client, Collection, IndexModel, options::ClientOptions};

pub struct PresetStore {
    col: Collection<NoisePresetDoc>,
}

impl PresetStore {
    // Connect and make sure the collection has its indexes
    pub async fn init(uri: &str, db_name: &str, col_name: &str) -> mongodb::error::Result<Self> {
        let mut opts = ClientOptions::parse(uri).await?;
        opts.app_name = Some("noisegen".to_string());
        let client = Client::with_options(opts)?;
        let col = client.database(db_name).collection(col_name);

        // one preset per name
        let by_name = IndexModel::builder()
            .keys(doc! { "name": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        let by_seed = IndexModel::builder().keys(doc! { "seed": 1 }).build();
        col.create_indexes([by_name, by_seed]).await?;

        log::info!("preset store ready at {db_name}.{col_name}");
        Ok(Self { col })
    }

    pub async fn list_names(&self) -> mongodb::error::Result<Vec<String>> {
        let mut cursor = self.col.find(doc! {}).sort(doc! { "name": 1 }).await?;
        let mut names = Vec::new();
        while let Some(doc) = cursor.try_next().await? {
            names.push(doc.name);
        }
        Ok(names)
    }

    // Insert a preset, or replace the one with the same name in a single
    // upsert. A failed write leaves the previous preset in place.
    pub async fn create(&self, mut preset: NoisePresetDoc) -> mongodb::error::Result<()> {
        let filter = prepare_upsert(&mut preset);
        let result = self.col.replace_one(filter, &preset).upsert(true).await?;
        if result.matched_count > 0 {
            log::info!("replaced preset {}", preset.name);
        } else {
            log::info!("created preset {}", preset.name);
        }
        Ok(())
    }

    pub async fn read_by_name(&self, name: &str) -> mongodb::error::Result<Option<NoisePresetDoc>> {
        self.col.find_one(doc! { "name": name }).await
    }

    // First preset with this seed, if any.
    pub async fn read_by_seed(&self, seed: i32) -> mongodb::error::Result<Option<NoisePresetDoc>> {
        self.col.find_one(doc! { "seed": seed }).await
    }

    // Returns whether a preset was removed.
    pub async fn delete_by_name(&self, name: &str) -> mongodb::error::Result<bool> {
        let result = self.col.delete_one(doc! { "name": name }).await?;
        Ok(result.deleted_count > 0)
    }
}

// Syncs the queryable seed and drops `_id`, so a replacement keeps the id of
// the stored document. Returns the name filter the upsert matches on.
fn prepare_upsert(preset: &mut NoisePresetDoc) -> Document {
    preset.seed = preset.config.seed;
    preset.id = None;
    doc! { "name": &preset.name }
}
