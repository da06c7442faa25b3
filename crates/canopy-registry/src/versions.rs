//! Registered model and version browsing helpers
//!
//! Registry screens split models and versions into live and archived lists
//! and pick the most recently created item as the default selection.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Lifecycle state of a registered model or model version
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ModelState {
    /// Visible in the registry
    Live,
    /// Archived, hidden from default listings
    Archived,
}

/// A model registered in the model registry
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredModel {
    /// Registry name
    pub name: String,
    /// Lifecycle state
    pub state: ModelState,
    /// Creation time, epoch milliseconds as a string
    #[serde(default)]
    pub create_time_since_epoch: Option<String>,
}

/// A version of a registered model
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ModelVersion {
    /// Version name
    pub name: String,
    /// Lifecycle state
    pub state: ModelState,
    /// Creation time, epoch milliseconds as a string
    #[serde(default)]
    pub create_time_since_epoch: Option<String>,
}

/// Items carrying a creation timestamp
pub trait HasCreateTime {
    /// Creation time, epoch milliseconds as a string, when recorded
    fn create_time_since_epoch(&self) -> Option<&str>;
}

impl HasCreateTime for RegisteredModel {
    fn create_time_since_epoch(&self) -> Option<&str> {
        self.create_time_since_epoch.as_deref()
    }
}

impl HasCreateTime for ModelVersion {
    fn create_time_since_epoch(&self) -> Option<&str> {
        self.create_time_since_epoch.as_deref()
    }
}

/// Most recently created item; items missing a timestamp compare equal
pub fn last_created<T: HasCreateTime>(items: &[T]) -> Option<&T> {
    items.iter().max_by(|a, b| {
        match (parse_epoch(a.create_time_since_epoch()), parse_epoch(b.create_time_since_epoch())) {
            (Some(a), Some(b)) => a.cmp(&b),
            _ => Ordering::Equal,
        }
    })
}

fn parse_epoch(value: Option<&str>) -> Option<u128> {
    value.and_then(|v| v.parse().ok())
}

/// Live versions only
pub fn filter_live_versions(versions: &[ModelVersion]) -> Vec<&ModelVersion> {
    versions.iter().filter(|v| v.state == ModelState::Live).collect()
}

/// Archived versions only
pub fn filter_archived_versions(versions: &[ModelVersion]) -> Vec<&ModelVersion> {
    versions.iter().filter(|v| v.state == ModelState::Archived).collect()
}

/// Live registered models only
pub fn filter_live_models(models: &[RegisteredModel]) -> Vec<&RegisteredModel> {
    models.iter().filter(|m| m.state == ModelState::Live).collect()
}

/// Archived registered models only
pub fn filter_archived_models(models: &[RegisteredModel]) -> Vec<&RegisteredModel> {
    models.iter().filter(|m| m.state == ModelState::Archived).collect()
}
