//! Storage claim provisioning
//!
//! Builds the persistent volume claim that holds downloaded model images.
//! The claim size is caller-validated with [`validate_quantity`]; creation
//! itself is a pass-through to the store and propagates store errors
//! unchanged.

use std::collections::BTreeMap;

use k8s_openapi::api::core::v1::{
    PersistentVolumeClaim, PersistentVolumeClaimSpec, VolumeResourceRequirements,
};
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use tracing::info;

use canopy_common::{
    Error, Result, ANNOTATION_DESCRIPTION, LABEL_MANAGED_BY, LABEL_MANAGED_BY_CANOPY, LABEL_NAME,
};

use crate::store::ResourceStore;

/// Unit suffixes accepted in a storage quantity
const QUANTITY_UNITS: [&str; 3] = ["Gi", "Mi", "Ti"];

/// Validate a storage size string for form-level feedback.
///
/// Accepts digits followed by `Gi`, `Mi`, or `Ti` (e.g. `10Gi`). Runs
/// before [`create_storage_claim`]; the provisioner itself does not
/// re-validate.
pub fn validate_quantity(size: &str) -> Result<()> {
    if size.is_empty() {
        return Err(Error::validation_for_field("size", "storage size is required"));
    }
    let digits = QUANTITY_UNITS
        .iter()
        .find_map(|unit| size.strip_suffix(unit));
    match digits {
        Some(digits) if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) => Ok(()),
        _ => Err(Error::validation_for_field(
            "size",
            "invalid size format: use numbers followed by Gi, Mi, or Ti (e.g., 10Gi)",
        )),
    }
}

/// Create a storage claim of the requested size under `(claim_name, project_name)`.
///
/// The claim is `ReadWriteOnce` with an empty description annotation.
/// `dry_run` is forwarded to the store; any store error propagates unchanged.
pub async fn create_storage_claim(
    store: &dyn ResourceStore,
    project_name: &str,
    claim_name: &str,
    size: &str,
    dry_run: bool,
) -> Result<PersistentVolumeClaim> {
    let pvc = build_storage_claim(project_name, claim_name, size);

    info!(
        claim = %claim_name,
        project = %project_name,
        size = %size,
        dry_run,
        "creating storage claim"
    );
    store.create_pvc(project_name, pvc, dry_run).await
}

fn build_storage_claim(project_name: &str, claim_name: &str, size: &str) -> PersistentVolumeClaim {
    let mut labels = BTreeMap::new();
    labels.insert(
        LABEL_MANAGED_BY.to_string(),
        LABEL_MANAGED_BY_CANOPY.to_string(),
    );
    labels.insert(LABEL_NAME.to_string(), claim_name.to_string());

    let mut annotations = BTreeMap::new();
    annotations.insert(ANNOTATION_DESCRIPTION.to_string(), String::new());

    PersistentVolumeClaim {
        metadata: ObjectMeta {
            name: Some(claim_name.to_string()),
            namespace: Some(project_name.to_string()),
            labels: Some(labels),
            annotations: Some(annotations),
            ..Default::default()
        },
        spec: Some(PersistentVolumeClaimSpec {
            access_modes: Some(vec!["ReadWriteOnce".to_string()]),
            resources: Some(VolumeResourceRequirements {
                requests: Some(BTreeMap::from([(
                    "storage".to_string(),
                    Quantity(size.to_string()),
                )])),
                ..Default::default()
            }),
            ..Default::default()
        }),
        ..Default::default()
    }
}
