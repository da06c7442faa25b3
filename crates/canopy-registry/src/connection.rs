//! Data connection selection helpers
//!
//! A data connection is a project secret carrying object-storage credential
//! fields. Deployment screens can only use connections that name a bucket,
//! so the selector filters the rest out.

use serde::{Deserialize, Serialize};

/// Object-storage credential fields stored on a data connection secret.
///
/// Field names mirror the keys persisted in the secret data.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct DataConnection {
    /// Connection display name
    #[serde(rename = "Name")]
    pub name: String,
    /// Object store endpoint
    #[serde(rename = "AWS_S3_ENDPOINT", default)]
    pub endpoint: Option<String>,
    /// Bucket the connection points at
    #[serde(rename = "AWS_S3_BUCKET", default)]
    pub bucket: Option<String>,
    /// Default region
    #[serde(rename = "AWS_DEFAULT_REGION", default)]
    pub region: Option<String>,
}

impl DataConnection {
    /// Whether this connection names a bucket and is usable for deployment
    pub fn has_bucket(&self) -> bool {
        self.bucket.as_deref().is_some_and(|b| !b.is_empty())
    }
}

/// Keep only the connections that name a bucket
pub fn connections_with_bucket(connections: Vec<DataConnection>) -> Vec<DataConnection> {
    connections
        .into_iter()
        .filter(DataConnection::has_bucket)
        .collect()
}
