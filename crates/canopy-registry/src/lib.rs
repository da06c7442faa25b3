//! Model registry utilities for Canopy
//!
//! The canonical persisted form of a model's storage location is a single
//! `s3://` URI; [`uri`] provides the lossless round-trip between that string
//! and its structured fields. [`connection`] and [`versions`] carry the
//! selection helpers the registry and connection screens share.

#![deny(missing_docs)]

pub mod connection;
pub mod uri;
pub mod versions;

pub use connection::{connections_with_bucket, DataConnection};
pub use uri::ObjectStorageLocation;
pub use versions::{
    filter_archived_models, filter_archived_versions, filter_live_models, filter_live_versions,
    last_created, HasCreateTime, ModelState, ModelVersion, RegisteredModel,
};
