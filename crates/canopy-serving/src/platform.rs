//! Serving platform resolution
//!
//! Decides whether a project serves models on the single-model platform
//! (one runtime per model) or the multi-model platform (one shared runtime),
//! from two inputs: the cluster's per-platform feature flags and the
//! project's platform label. Pure functions: feature-flag state is passed
//! in explicitly, never read from process-wide storage.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use canopy_common::LABEL_MULTI_MODEL_ENABLED;

/// A model-serving platform variant
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum ServingPlatform {
    /// One dedicated runtime instance per deployed model
    SingleModel,
    /// One shared runtime instance hosting multiple models
    MultiModel,
}

impl std::fmt::Display for ServingPlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SingleModel => write!(f, "Single-model serving"),
            Self::MultiModel => write!(f, "Multi-model serving"),
        }
    }
}

/// Cluster-level status of one platform variant
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct PlatformStatus {
    /// The platform is enabled by cluster feature flags
    pub enabled: bool,
    /// The platform's serving engine is installed on the cluster
    pub installed: bool,
}

/// Status of both platform variants
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ServingPlatformStatuses {
    /// Single-model serving engine status
    pub single_model: PlatformStatus,
    /// Multi-model serving engine status
    pub multi_model: PlatformStatus,
}

/// A project's platform choice, stored as a boolean-valued label.
///
/// Once set, the label is authoritative: the project has committed to a
/// platform and only a missing installation blocks it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlatformLabel {
    /// The project has not chosen a platform
    #[default]
    Unset,
    /// The project opted into single-model serving (label value `"false"`)
    SingleModel,
    /// The project opted into multi-model serving (label value `"true"`)
    MultiModel,
}

impl PlatformLabel {
    /// Parse the platform label from a project's metadata labels.
    ///
    /// `"true"` selects multi-model; any other present value selects
    /// single-model; an absent label is `Unset`.
    pub fn from_labels(labels: &BTreeMap<String, String>) -> Self {
        match labels.get(LABEL_MULTI_MODEL_ENABLED) {
            Some(value) if value == "true" => Self::MultiModel,
            Some(_) => Self::SingleModel,
            None => Self::Unset,
        }
    }
}

/// Outcome of platform resolution.
///
/// `error` is set only when the label-chosen platform is not installed,
/// an expected steady-state condition surfaced as UI guidance rather than
/// a failure. With no label and an ambiguous flag state, both fields are
/// empty and the caller falls back to its own default.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolvedPlatform {
    /// The applicable platform, when one could be determined
    pub platform: Option<ServingPlatform>,
    /// Why the labeled platform cannot be used
    pub error: Option<String>,
}

/// Resolve the serving platform for a project.
///
/// With no label, a platform is chosen only when exactly one variant is
/// enabled. A set label is authoritative regardless of `enabled`;
/// `installed` is the only hard blocker.
pub fn resolve_platform(
    label: PlatformLabel,
    statuses: &ServingPlatformStatuses,
) -> ResolvedPlatform {
    match label {
        PlatformLabel::Unset => {
            let platform = match (statuses.single_model.enabled, statuses.multi_model.enabled) {
                (true, false) => Some(ServingPlatform::SingleModel),
                (false, true) => Some(ServingPlatform::MultiModel),
                // both or neither enabled: undetermined, caller's default applies
                _ => None,
            };
            ResolvedPlatform {
                platform,
                error: None,
            }
        }
        PlatformLabel::SingleModel => resolve_labeled(
            ServingPlatform::SingleModel,
            statuses.single_model.installed,
        ),
        PlatformLabel::MultiModel => {
            resolve_labeled(ServingPlatform::MultiModel, statuses.multi_model.installed)
        }
    }
}

fn resolve_labeled(platform: ServingPlatform, installed: bool) -> ResolvedPlatform {
    if installed {
        ResolvedPlatform {
            platform: Some(platform),
            error: None,
        }
    } else {
        ResolvedPlatform {
            platform: None,
            error: Some(format!("{} is not installed", platform)),
        }
    }
}
