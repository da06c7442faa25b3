//! Model-serving provisioning for Canopy
//!
//! Decides which serving platform applies to a project and provisions the
//! resources an inference workload needs:
//! - Resolves single-model vs. multi-model serving from cluster feature
//!   flags and the project's platform label
//! - Copies admin-provisioned seed credentials into per-project secrets
//! - Creates the storage claim that holds downloaded model images
//! - Reads the model catalog published alongside the seed credentials
//!
//! All cluster access goes through the [`store::ResourceStore`] trait; the
//! store is the system of record and nothing is retained in process memory.

#![deny(missing_docs)]

pub mod catalog;
pub mod inference;
pub mod platform;
pub mod secret;
pub mod store;
pub mod volume;

pub use catalog::{read_model_catalog, ModelDescriptor};
pub use inference::{create_inference_service_labels, external_inference_url};
pub use platform::{
    resolve_platform, PlatformLabel, PlatformStatus, ResolvedPlatform, ServingPlatform,
    ServingPlatformStatuses,
};
pub use secret::{create_credential_secret, CredentialKind};
pub use store::{KubeResourceStore, ResourceStore};
pub use volume::{create_storage_claim, validate_quantity};
