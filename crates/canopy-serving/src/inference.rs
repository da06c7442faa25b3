//! Inference service helpers
//!
//! Correlation labels tying an inference service back to the model registry,
//! and endpoint extraction for deployed single-model services.

use std::collections::BTreeMap;

use canopy_common::{LABEL_MODEL_VERSION_ID, LABEL_REGISTERED_MODEL_ID};

/// Suffix of cluster-internal service addresses
const CLUSTER_LOCAL_DOMAIN: &str = ".svc.cluster.local";

/// Build registry-correlation labels for a new inference service.
///
/// Both identifiers are independently optional; only the defined ones appear
/// under their namespaced keys. With neither defined there is no labels map
/// at all, so callers don't patch empty metadata onto the resource.
pub fn create_inference_service_labels(
    registered_model_id: Option<&str>,
    model_version_id: Option<&str>,
) -> Option<BTreeMap<String, String>> {
    if registered_model_id.is_none() && model_version_id.is_none() {
        return None;
    }

    let mut labels = BTreeMap::new();
    if let Some(id) = registered_model_id {
        labels.insert(LABEL_REGISTERED_MODEL_ID.to_string(), id.to_string());
    }
    if let Some(id) = model_version_id {
        labels.insert(LABEL_MODEL_VERSION_ID.to_string(), id.to_string());
    }
    Some(labels)
}

/// Extract the externally reachable URL of a deployed inference service.
///
/// The status URL is absent until the service is ready, and cluster-internal
/// addresses are not reachable from the dashboard, so both yield `None`.
pub fn external_inference_url(status_url: Option<&str>) -> Option<&str> {
    status_url.filter(|url| !url.is_empty() && !url.contains(CLUSTER_LOCAL_DOMAIN))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_identifiers_means_no_labels() {
        assert_eq!(create_inference_service_labels(None, None), None);
    }

    #[test]
    fn registered_model_id_alone() {
        let labels = create_inference_service_labels(Some("some-registered-model-id"), None)
            .expect("labels should be produced");
        assert_eq!(labels.len(), 1);
        assert_eq!(
            labels.get(LABEL_REGISTERED_MODEL_ID).map(String::as_str),
            Some("some-registered-model-id")
        );
    }

    #[test]
    fn model_version_id_alone() {
        let labels = create_inference_service_labels(None, Some("some-model-version-id"))
            .expect("labels should be produced");
        assert_eq!(labels.len(), 1);
        assert_eq!(
            labels.get(LABEL_MODEL_VERSION_ID).map(String::as_str),
            Some("some-model-version-id")
        );
    }

    #[test]
    fn both_identifiers_present() {
        let labels = create_inference_service_labels(
            Some("some-registered-model-id"),
            Some("some-model-version-id"),
        )
        .expect("labels should be produced");
        assert_eq!(labels.len(), 2);
        assert_eq!(
            labels.get(LABEL_REGISTERED_MODEL_ID).map(String::as_str),
            Some("some-registered-model-id")
        );
        assert_eq!(
            labels.get(LABEL_MODEL_VERSION_ID).map(String::as_str),
            Some("some-model-version-id")
        );
    }

    #[test]
    fn external_url_passes_through() {
        assert_eq!(
            external_inference_url(Some("https://model.apps.example.com")),
            Some("https://model.apps.example.com")
        );
    }

    #[test]
    fn missing_or_empty_url_is_none() {
        assert_eq!(external_inference_url(None), None);
        assert_eq!(external_inference_url(Some("")), None);
    }

    #[test]
    fn cluster_internal_url_is_none() {
        assert_eq!(
            external_inference_url(Some("http://model.project.svc.cluster.local")),
            None
        );
    }
}
