//! Model catalog reader
//!
//! Normalizes the catalog ConfigMap published alongside the seed credentials
//! into model descriptors for the serving screens. Callers must distinguish
//! "no catalog" from "empty catalog", so an absent record or payload yields
//! `None` rather than an empty list.

use serde::{Deserialize, Serialize};
use tracing::debug;

use canopy_common::{Error, Result};

use crate::store::ResourceStore;

/// Well-known name of the catalog ConfigMap
const CATALOG_CONFIG_MAP: &str = "nvidia-nim-images-data";

/// Data key holding the catalog record.
///
/// The catalog currently carries exactly one record; multi-entry catalogs
/// would add further keys here.
const CATALOG_RECORD_KEY: &str = "model";

/// A model offered by the external catalog
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ModelDescriptor {
    /// Normalized catalog key (lowercased, whitespace removed)
    pub name: String,
    /// Human-readable name, casing preserved
    pub display_name: String,
    /// One-line description
    pub short_description: String,
    /// Registry namespace the model image lives in
    pub namespace: String,
    /// Capability tags (e.g. `image-classification`)
    pub tags: Vec<String>,
    /// Most recent image tag
    pub latest_tag: String,
    /// Last catalog update, RFC 3339
    pub updated_date: String,
}

/// Read the model catalog record from `namespace`.
///
/// Returns `Ok(None)` when the ConfigMap or its payload is absent. A present
/// but unparseable record is an error: the catalog is admin-provisioned, so
/// a malformed record is an operational problem to surface, not external
/// noise to swallow.
pub async fn read_model_catalog(
    store: &dyn ResourceStore,
    namespace: &str,
) -> Result<Option<Vec<ModelDescriptor>>> {
    let Some(config_map) = store.get_config_map(namespace, CATALOG_CONFIG_MAP).await? else {
        debug!(namespace = %namespace, "model catalog ConfigMap absent");
        return Ok(None);
    };

    let record = config_map
        .data
        .as_ref()
        .and_then(|data| data.get(CATALOG_RECORD_KEY));
    let Some(record) = record else {
        debug!(namespace = %namespace, "model catalog has no payload");
        return Ok(None);
    };

    let mut descriptor: ModelDescriptor = serde_json::from_str(record).map_err(|e| {
        Error::validation(format!("model catalog record is not valid JSON: {}", e))
    })?;
    descriptor.name = normalize_key(&descriptor.name);

    Ok(Some(vec![descriptor]))
}

/// Normalize a display name into a catalog key: lowercase, whitespace removed
fn normalize_key(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}
