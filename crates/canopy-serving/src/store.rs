//! Resource store abstraction over the Kubernetes API
//!
//! Provides trait-based access to the secrets, claims, and config records
//! Canopy provisions against, enabling dependency injection and mocking for
//! tests. The production implementation is a thin pass-through to kube-rs;
//! dry-run is forwarded to the API server, not simulated locally.

use async_trait::async_trait;
use k8s_openapi::api::core::v1::{ConfigMap, PersistentVolumeClaim, Secret};
use kube::api::{Api, PostParams};
use kube::Client;

use canopy_common::{Result, FIELD_MANAGER};

/// Store for the cluster resources Canopy reads and creates.
///
/// All resources are keyed by `(namespace, name)`. Creation calls forward
/// the `dry_run` flag to the API server, which validates and returns the
/// would-be resource without persisting it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResourceStore: Send + Sync {
    /// Read a Secret; a missing Secret is an error (the store's 404)
    async fn get_secret(&self, namespace: &str, name: &str) -> Result<Secret>;

    /// Create a Secret, honoring `dry_run`
    async fn create_secret(&self, namespace: &str, secret: Secret, dry_run: bool)
        -> Result<Secret>;

    /// Read a ConfigMap; a missing ConfigMap is `None`, not an error
    async fn get_config_map(&self, namespace: &str, name: &str) -> Result<Option<ConfigMap>>;

    /// Create a PersistentVolumeClaim, honoring `dry_run`
    async fn create_pvc(
        &self,
        namespace: &str,
        pvc: PersistentVolumeClaim,
        dry_run: bool,
    ) -> Result<PersistentVolumeClaim>;
}

/// Production store backed by a kube-rs client
#[derive(Clone)]
pub struct KubeResourceStore {
    client: Client,
}

impl KubeResourceStore {
    /// Create a store over an existing client
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    fn post_params(dry_run: bool) -> PostParams {
        PostParams {
            dry_run,
            field_manager: Some(FIELD_MANAGER.to_string()),
        }
    }
}

#[async_trait]
impl ResourceStore for KubeResourceStore {
    async fn get_secret(&self, namespace: &str, name: &str) -> Result<Secret> {
        let api: Api<Secret> = Api::namespaced(self.client.clone(), namespace);
        Ok(api.get(name).await?)
    }

    async fn create_secret(
        &self,
        namespace: &str,
        secret: Secret,
        dry_run: bool,
    ) -> Result<Secret> {
        let api: Api<Secret> = Api::namespaced(self.client.clone(), namespace);
        Ok(api.create(&Self::post_params(dry_run), &secret).await?)
    }

    async fn get_config_map(&self, namespace: &str, name: &str) -> Result<Option<ConfigMap>> {
        let api: Api<ConfigMap> = Api::namespaced(self.client.clone(), namespace);
        Ok(api.get_opt(name).await?)
    }

    async fn create_pvc(
        &self,
        namespace: &str,
        pvc: PersistentVolumeClaim,
        dry_run: bool,
    ) -> Result<PersistentVolumeClaim> {
        let api: Api<PersistentVolumeClaim> = Api::namespaced(self.client.clone(), namespace);
        Ok(api.create(&Self::post_params(dry_run), &pvc).await?)
    }
}
