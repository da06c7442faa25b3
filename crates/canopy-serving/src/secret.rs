//! Credential secret provisioning
//!
//! Copies an admin-provisioned seed secret into a per-project credential
//! secret for a named external model source. The seed's shape depends on the
//! credential kind: registry pulls carry a docker config, API access carries
//! a bare key that serving runtimes expect under `NGC_API_KEY`.

use std::collections::BTreeMap;

use k8s_openapi::api::core::v1::Secret;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use k8s_openapi::ByteString;
use tracing::info;

use canopy_common::{Error, Result, LABEL_MANAGED_BY, LABEL_MANAGED_BY_CANOPY, LABEL_NAME};

use crate::store::ResourceStore;

/// Seed secret holding the NGC registry pull credentials
const NGC_PULL_SEED_SECRET: &str = "nvidia-nim-image-pull";

/// Seed secret holding the NIM API key
const NIM_API_KEY_SEED_SECRET: &str = "nim-secret";

/// Data key of a docker-config secret
const DOCKER_CONFIG_JSON_KEY: &str = ".dockerconfigjson";

/// Data key the seed stores its API key under
const SEED_API_KEY: &str = "api_key";

/// Data key serving runtimes read the API key from
const NGC_API_KEY: &str = "NGC_API_KEY";

/// The kind of credential a secret carries.
///
/// A closed variant rather than a flag, so registry-pull and API-key
/// payloads cannot be silently routed into the wrong secret shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CredentialKind {
    /// Docker-registry pull credentials (`kubernetes.io/dockerconfigjson`)
    DockerConfig,
    /// API-key credentials stored as an `Opaque` secret
    ApiKey,
}

impl CredentialKind {
    /// Well-known name of the admin-provisioned seed secret for this kind
    pub fn seed_secret_name(self) -> &'static str {
        match self {
            Self::DockerConfig => NGC_PULL_SEED_SECRET,
            Self::ApiKey => NIM_API_KEY_SEED_SECRET,
        }
    }

    fn secret_type(self) -> &'static str {
        match self {
            Self::DockerConfig => "kubernetes.io/dockerconfigjson",
            Self::ApiKey => "Opaque",
        }
    }

    /// Human-readable flavor used in error messages
    fn flavor(self) -> &'static str {
        match self {
            Self::DockerConfig => "NIM NGC secret",
            Self::ApiKey => "NIM secret",
        }
    }

    fn unusable_seed(self, namespace: &str) -> Error {
        Error::not_found_for(
            "Secret",
            self.seed_secret_name(),
            format!(
                "error creating {}: seed secret {}/{} has no usable data payload",
                self.flavor(),
                namespace,
                self.seed_secret_name()
            ),
        )
    }
}

/// Create a per-project credential secret from the admin-provisioned seed.
///
/// Reads the seed from `source_namespace` under the well-known name for
/// `kind`, reshapes its payload, and creates the result under
/// `(secret_name, project_name)`. Store read failures propagate unchanged; a
/// seed without the expected payload fails with a message naming the
/// credential flavor. `dry_run` is forwarded to the store, so no mutation
/// occurs when set.
pub async fn create_credential_secret(
    store: &dyn ResourceStore,
    project_name: &str,
    secret_name: &str,
    kind: CredentialKind,
    dry_run: bool,
    source_namespace: &str,
) -> Result<Secret> {
    let seed = store
        .get_secret(source_namespace, kind.seed_secret_name())
        .await?;

    let seed_data = seed
        .data
        .filter(|data| !data.is_empty())
        .ok_or_else(|| kind.unusable_seed(source_namespace))?;

    let data = match kind {
        CredentialKind::DockerConfig => {
            // Copy the docker config verbatim under its canonical key
            let value = seed_data
                .get(DOCKER_CONFIG_JSON_KEY)
                .cloned()
                .ok_or_else(|| kind.unusable_seed(source_namespace))?;
            BTreeMap::from([(DOCKER_CONFIG_JSON_KEY.to_string(), value)])
        }
        CredentialKind::ApiKey => {
            // The seed stores `api_key`; runtimes read `NGC_API_KEY`
            let value = seed_data
                .get(SEED_API_KEY)
                .cloned()
                .ok_or_else(|| kind.unusable_seed(source_namespace))?;
            BTreeMap::from([(NGC_API_KEY.to_string(), value)])
        }
    };

    let secret = build_credential_secret(project_name, secret_name, kind, data);

    info!(
        secret = %secret_name,
        project = %project_name,
        kind = ?kind,
        dry_run,
        "creating credential secret"
    );
    store.create_secret(project_name, secret, dry_run).await
}

fn build_credential_secret(
    project_name: &str,
    secret_name: &str,
    kind: CredentialKind,
    data: BTreeMap<String, ByteString>,
) -> Secret {
    let mut labels = BTreeMap::new();
    labels.insert(
        LABEL_MANAGED_BY.to_string(),
        LABEL_MANAGED_BY_CANOPY.to_string(),
    );
    labels.insert(LABEL_NAME.to_string(), secret_name.to_string());

    Secret {
        metadata: ObjectMeta {
            name: Some(secret_name.to_string()),
            namespace: Some(project_name.to_string()),
            labels: Some(labels),
            ..Default::default()
        },
        data: Some(data),
        type_: Some(kind.secret_type().to_string()),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MockResourceStore;

    fn seed_with(key: &str, value: &[u8]) -> Secret {
        Secret {
            data: Some(BTreeMap::from([(
                key.to_string(),
                ByteString(value.to_vec()),
            )])),
            ..Default::default()
        }
    }

    fn kube_not_found() -> Error {
        Error::from(kube::Error::Api(kube::error::ErrorResponse {
            status: "Failure".to_string(),
            message: "secrets \"nim-secret\" not found".to_string(),
            reason: "NotFound".to_string(),
            code: 404,
        }))
    }

    #[tokio::test]
    async fn api_key_seed_remaps_to_ngc_api_key() {
        let mut store = MockResourceStore::new();
        store
            .expect_get_secret()
            .withf(|namespace, name| namespace == "canopy-apps" && name == "nim-secret")
            .returning(|_, _| Ok(seed_with(SEED_API_KEY, b"test-api-key")));
        store
            .expect_create_secret()
            .withf(|namespace, secret, dry_run| {
                let data = secret.data.as_ref().unwrap();
                namespace == "proj"
                    && secret.metadata.name.as_deref() == Some("nim-credentials")
                    && secret.metadata.namespace.as_deref() == Some("proj")
                    && secret.type_.as_deref() == Some("Opaque")
                    && data.len() == 1
                    && data.get(NGC_API_KEY) == Some(&ByteString(b"test-api-key".to_vec()))
                    && !*dry_run
            })
            .returning(|_, secret, _| Ok(secret));

        let created = create_credential_secret(
            &store,
            "proj",
            "nim-credentials",
            CredentialKind::ApiKey,
            false,
            "canopy-apps",
        )
        .await
        .unwrap();
        assert_eq!(created.type_.as_deref(), Some("Opaque"));
    }

    #[tokio::test]
    async fn docker_config_seed_is_copied_verbatim() {
        let mut store = MockResourceStore::new();
        store
            .expect_get_secret()
            .withf(|namespace, name| namespace == "canopy-apps" && name == "nvidia-nim-image-pull")
            .returning(|_, _| Ok(seed_with(DOCKER_CONFIG_JSON_KEY, b"docker-config")));
        store
            .expect_create_secret()
            .withf(|_, secret, _| {
                let data = secret.data.as_ref().unwrap();
                secret.type_.as_deref() == Some("kubernetes.io/dockerconfigjson")
                    && data.get(DOCKER_CONFIG_JSON_KEY)
                        == Some(&ByteString(b"docker-config".to_vec()))
            })
            .returning(|_, secret, _| Ok(secret));

        create_credential_secret(
            &store,
            "proj",
            "ngc-pull",
            CredentialKind::DockerConfig,
            false,
            "canopy-apps",
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn empty_seed_payload_rejects_with_flavor_message() {
        for (kind, flavor) in [
            (CredentialKind::DockerConfig, "NIM NGC secret"),
            (CredentialKind::ApiKey, "NIM secret"),
        ] {
            let mut store = MockResourceStore::new();
            store
                .expect_get_secret()
                .returning(|_, _| Ok(Secret::default()));

            let err =
                create_credential_secret(&store, "proj", "creds", kind, false, "canopy-apps")
                    .await
                    .unwrap_err();
            assert!(err.to_string().contains(flavor), "message: {}", err);
            assert!(err.is_not_found());
        }
    }

    #[tokio::test]
    async fn seed_missing_expected_key_rejects() {
        let mut store = MockResourceStore::new();
        store
            .expect_get_secret()
            .returning(|_, _| Ok(seed_with("unrelated", b"x")));

        let err = create_credential_secret(
            &store,
            "proj",
            "creds",
            CredentialKind::ApiKey,
            false,
            "canopy-apps",
        )
        .await
        .unwrap_err();
        assert!(err.to_string().contains("NIM secret"));
    }

    #[tokio::test]
    async fn seed_read_failure_propagates_unchanged() {
        let mut store = MockResourceStore::new();
        store.expect_get_secret().returning(|_, _| Err(kube_not_found()));

        let err = create_credential_secret(
            &store,
            "proj",
            "creds",
            CredentialKind::DockerConfig,
            false,
            "canopy-apps",
        )
        .await
        .unwrap_err();
        assert!(matches!(err, Error::Kube { .. }));
    }

    #[tokio::test]
    async fn dry_run_is_forwarded_to_the_store() {
        let mut store = MockResourceStore::new();
        store
            .expect_get_secret()
            .returning(|_, _| Ok(seed_with(SEED_API_KEY, b"k")));
        store
            .expect_create_secret()
            .withf(|_, _, dry_run| *dry_run)
            .returning(|_, secret, _| Ok(secret));

        create_credential_secret(
            &store,
            "proj",
            "creds",
            CredentialKind::ApiKey,
            true,
            "canopy-apps",
        )
        .await
        .unwrap();
    }
}
