//! Common types for Canopy: errors, shared constants, and telemetry

#![deny(missing_docs)]

pub mod error;
pub mod telemetry;

pub use error::Error;

/// Result type alias using our custom Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Field manager name used for all Canopy-issued API writes
pub const FIELD_MANAGER: &str = "canopy";

/// Standard managed-by label key
pub const LABEL_MANAGED_BY: &str = "app.kubernetes.io/managed-by";

/// Value of the managed-by label on resources Canopy creates
pub const LABEL_MANAGED_BY_CANOPY: &str = "canopy";

/// Label key carrying the resource's Canopy name
pub const LABEL_NAME: &str = "canopy.dev/name";

/// Boolean-valued project label selecting the multi-model serving platform.
///
/// `"true"` opts the project into multi-model serving, `"false"` into
/// single-model serving. Absent means the project has not chosen yet.
pub const LABEL_MULTI_MODEL_ENABLED: &str = "canopy.dev/multi-model-enabled";

/// Label key correlating an inference service with a registered model
pub const LABEL_REGISTERED_MODEL_ID: &str = "modelregistry.canopy.dev/registered-model-id";

/// Label key correlating an inference service with a model version
pub const LABEL_MODEL_VERSION_ID: &str = "modelregistry.canopy.dev/model-version-id";

/// Annotation key for a resource's free-form description
pub const ANNOTATION_DESCRIPTION: &str = "canopy.dev/description";

/// Annotation key for a resource's display name
pub const ANNOTATION_DISPLAY_NAME: &str = "canopy.dev/display-name";
