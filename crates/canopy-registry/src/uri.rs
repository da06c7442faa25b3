//! Object-storage location URI codec
//!
//! A model's storage location is persisted on cluster resources as a single
//! URI of the form `s3://<bucket>/<path>?endpoint=<enc>[&defaultRegion=<enc>]`.
//! Only the query is percent-encoded; the bucket and path travel verbatim.
//!
//! Some producers of this format put the bucket in the URI host, others in
//! the first path segment. That inconsistency is part of the wire format:
//! decoding concatenates host and path and takes the first non-empty segment
//! as the bucket.

use serde::{Deserialize, Serialize};
use url::{form_urlencoded, Url};

/// Structured object-storage location.
///
/// Encodable only when `endpoint`, `bucket`, and `path` are all non-empty.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ObjectStorageLocation {
    /// Object store endpoint URL
    pub endpoint: String,
    /// Bucket name
    pub bucket: String,
    /// Optional region
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Key path within the bucket
    pub path: String,
}

impl ObjectStorageLocation {
    /// Encode this location as its canonical URI.
    ///
    /// Returns `None` when `endpoint`, `bucket`, or `path` is empty; an
    /// empty region is treated as absent and omitted from the query.
    pub fn to_uri(&self) -> Option<String> {
        if self.endpoint.is_empty() || self.bucket.is_empty() || self.path.is_empty() {
            return None;
        }

        let mut query = form_urlencoded::Serializer::new(String::new());
        query.append_pair("endpoint", &self.endpoint);
        if let Some(region) = self.region.as_deref().filter(|r| !r.is_empty()) {
            query.append_pair("defaultRegion", region);
        }

        Some(format!(
            "s3://{}/{}?{}",
            self.bucket,
            self.path,
            query.finish()
        ))
    }

    /// Decode a location from its URI form.
    ///
    /// Returns `None` when the string is not a parseable URI, or when
    /// `endpoint`, bucket, or path come out empty.
    pub fn from_uri(uri: &str) -> Option<Self> {
        let url = Url::parse(uri).ok()?;

        // Bucket-in-host and bucket-in-path producers both exist; treat the
        // host as just another leading segment.
        let combined = format!("{}/{}", url.host_str().unwrap_or(""), url.path());
        let mut segments = combined.split('/').filter(|s| !s.is_empty());
        let bucket = segments.next()?.to_string();
        let path = segments.collect::<Vec<_>>().join("/");

        let mut endpoint = None;
        let mut region = None;
        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                "endpoint" => endpoint = Some(value.into_owned()),
                "defaultRegion" => region = Some(value.into_owned()),
                _ => {}
            }
        }

        let endpoint = endpoint.filter(|e| !e.is_empty())?;
        if path.is_empty() {
            return None;
        }

        Some(Self {
            endpoint,
            bucket,
            region: region.filter(|r| !r.is_empty()),
            path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(endpoint: &str, bucket: &str, region: Option<&str>, path: &str) -> ObjectStorageLocation {
        ObjectStorageLocation {
            endpoint: endpoint.to_string(),
            bucket: bucket.to_string(),
            region: region.map(str::to_string),
            path: path.to_string(),
        }
    }

    #[test]
    fn encodes_with_region() {
        let uri = location(
            "http://s3.example.com:9000",
            "models",
            Some("us-east-1"),
            "llama/v1",
        )
        .to_uri()
        .unwrap();
        assert_eq!(
            uri,
            "s3://models/llama/v1?endpoint=http%3A%2F%2Fs3.example.com%3A9000&defaultRegion=us-east-1"
        );
    }

    #[test]
    fn encodes_without_region() {
        let uri = location("http://s3.example.com", "models", None, "llama/v1")
            .to_uri()
            .unwrap();
        assert!(!uri.contains("defaultRegion"));
    }

    #[test]
    fn empty_region_is_omitted() {
        let uri = location("http://s3.example.com", "models", Some(""), "llama/v1")
            .to_uri()
            .unwrap();
        assert!(!uri.contains("defaultRegion"));
    }

    #[test]
    fn refuses_to_encode_missing_fields() {
        assert_eq!(location("", "models", None, "p").to_uri(), None);
        assert_eq!(location("http://e", "", None, "p").to_uri(), None);
        assert_eq!(location("http://e", "models", None, "").to_uri(), None);
    }

    #[test]
    fn decodes_bucket_from_host() {
        let decoded = ObjectStorageLocation::from_uri(
            "s3://models/llama/v1?endpoint=http%3A%2F%2Fs3.example.com&defaultRegion=us-east-1",
        )
        .unwrap();
        assert_eq!(decoded.bucket, "models");
        assert_eq!(decoded.path, "llama/v1");
        assert_eq!(decoded.endpoint, "http://s3.example.com");
        assert_eq!(decoded.region.as_deref(), Some("us-east-1"));
    }

    #[test]
    fn decodes_bucket_from_path() {
        // Producers that leave the host empty put the bucket in the path
        let decoded = ObjectStorageLocation::from_uri(
            "s3:///models/llama/v1?endpoint=http%3A%2F%2Fs3.example.com",
        )
        .unwrap();
        assert_eq!(decoded.bucket, "models");
        assert_eq!(decoded.path, "llama/v1");
    }

    #[test]
    fn decode_rejects_garbage() {
        assert_eq!(ObjectStorageLocation::from_uri("not a uri"), None);
        assert_eq!(ObjectStorageLocation::from_uri(""), None);
    }

    #[test]
    fn decode_rejects_missing_endpoint() {
        assert_eq!(
            ObjectStorageLocation::from_uri("s3://models/llama/v1"),
            None
        );
    }

    #[test]
    fn decode_rejects_missing_path() {
        assert_eq!(
            ObjectStorageLocation::from_uri("s3://models?endpoint=http%3A%2F%2Fe"),
            None
        );
    }

    #[test]
    fn round_trips_with_region() {
        let original = location(
            "http://s3.example.com:9000",
            "models",
            Some("eu-west-2"),
            "granite/8b/v2",
        );
        let decoded = ObjectStorageLocation::from_uri(&original.to_uri().unwrap()).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn round_trips_without_region() {
        let original = location("https://minio.internal", "data", None, "weights.bin");
        let decoded = ObjectStorageLocation::from_uri(&original.to_uri().unwrap()).unwrap();
        assert_eq!(decoded, original);
    }
}
