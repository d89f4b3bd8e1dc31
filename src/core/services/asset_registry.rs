use chrono::Utc;
use regex::Regex;
use tracing::info;

use crate::core::errors::{PetroError, Result};
use crate::core::models::asset::{Asset, AssetStatus, AssetType, default_assets, title_case};
use crate::core::models::timestamp::Timestamp;
use crate::core::traits::store::CollectionStore;

/// Input for registering a new asset.
#[derive(Debug, Clone)]
pub struct NewAsset {
    pub asset_type: AssetType,
    pub id: String,
    pub name: String,
    pub location: String,
    pub status: AssetStatus,
}

/// The persisted list of assets reports can be filed against.
pub struct AssetRegistry<'a> {
    store: &'a dyn CollectionStore<Asset>,
}

impl<'a> AssetRegistry<'a> {
    pub fn new(store: &'a dyn CollectionStore<Asset>) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Result<Vec<Asset>> {
        self.store.load()
    }

    /// Look up an asset by id, ignoring case.
    pub fn find(&self, id: &str) -> Result<Option<Asset>> {
        let id = id.trim();
        Ok(self
            .store
            .load()?
            .into_iter()
            .find(|a| a.id.eq_ignore_ascii_case(id)))
    }

    /// Write the default assets into an empty registry. Returns how many
    /// were added.
    pub fn seed(&self) -> Result<usize> {
        if !self.store.load()?.is_empty() {
            return Ok(0);
        }
        let assets = default_assets(&today());
        self.store.save(&assets)?;
        info!(count = assets.len(), "asset registry seeded");
        Ok(assets.len())
    }

    /// Validate, normalize and append a new asset.
    ///
    /// The id must carry the prefix of its type (`RIG-001`, `PL-001`,
    /// `STG-001`) and be unique. Name and location are title-cased.
    pub fn register(&self, input: NewAsset) -> Result<Asset> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(PetroError::validation("asset name", "an asset name is required"));
        }
        if name.chars().count() < 3 {
            return Err(PetroError::validation(
                "asset name",
                "must be at least 3 characters",
            ));
        }

        let id = validate_id(input.asset_type, &input.id)?;

        let location = input.location.trim();
        if location.is_empty() {
            return Err(PetroError::validation("location", "a location is required"));
        }

        let mut assets = self.store.load()?;
        if assets.iter().any(|a| a.id == id) {
            return Err(PetroError::validation(
                "asset id",
                format!("'{id}' is already registered"),
            ));
        }

        let asset = Asset {
            id,
            name: title_case(name),
            asset_type: input.asset_type,
            location: title_case(location),
            status: input.status,
            last_maintenance: today(),
        };
        assets.push(asset.clone());
        self.store.save(&assets)?;

        info!(asset_id = %asset.id, asset_type = %asset.asset_type, "asset registered");
        Ok(asset)
    }
}

/// Upper-cased `id`, checked against the pattern for `asset_type`.
fn validate_id(asset_type: AssetType, id: &str) -> Result<String> {
    let id = id.trim().to_uppercase();
    if id.is_empty() {
        return Err(PetroError::validation("asset id", "an asset id is required"));
    }

    let prefix = asset_type.id_prefix();
    let pattern = Regex::new(&format!(r"^{prefix}-\d{{3}}$"))
        .map_err(|e| PetroError::validation("asset id", e.to_string()))?;
    if !pattern.is_match(&id) {
        return Err(PetroError::validation(
            "asset id",
            format!("format must be {prefix}-001"),
        ));
    }
    Ok(id)
}

/// Today's date, stored as `YYYY-MM-DD`.
fn today() -> Timestamp {
    Timestamp::from_raw(Utc::now().format("%Y-%m-%d").to_string())
}
