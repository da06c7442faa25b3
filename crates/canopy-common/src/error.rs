//! Error types for Canopy provisioning and registry operations
//!
//! Errors are structured with fields to aid debugging in production.
//! Store failures are propagated unchanged; validation failures carry the
//! offending field so forms can surface them inline.

use thiserror::Error;

/// Main error type for Canopy operations
#[derive(Debug, Error)]
pub enum Error {
    /// Kubernetes API error, propagated unchanged from the resource store
    #[error("kubernetes error: {source}")]
    Kube {
        /// The underlying kube-rs error
        #[from]
        source: kube::Error,
    },

    /// A required resource was absent or had no usable payload
    #[error("{message}")]
    NotFound {
        /// Description of what was missing, in domain terms
        message: String,
        /// The resource kind that was being read (if known)
        kind: Option<String>,
        /// The resource name that was being read (if known)
        name: Option<String>,
    },

    /// Local input validation failure; never reaches the store
    #[error("validation error: {message}")]
    Validation {
        /// Description of what's invalid
        message: String,
        /// The invalid field (e.g., "size")
        field: Option<String>,
    },
}

impl Error {
    /// Create a not-found error with the given message
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound {
            message: msg.into(),
            kind: None,
            name: None,
        }
    }

    /// Create a not-found error naming the resource that was being read
    pub fn not_found_for(
        kind: impl Into<String>,
        name: impl Into<String>,
        msg: impl Into<String>,
    ) -> Self {
        Self::NotFound {
            message: msg.into(),
            kind: Some(kind.into()),
            name: Some(name.into()),
        }
    }

    /// Create a validation error with the given message
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: None,
        }
    }

    /// Create a validation error for a specific field
    pub fn validation_for_field(field: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: Some(field.into()),
        }
    }

    /// Check whether this error represents a missing resource.
    ///
    /// Covers both domain-level `NotFound` and a 404 from the store.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::NotFound { .. } => true,
            Error::Kube { source } => {
                matches!(source, kube::Error::Api(ae) if ae.code == 404)
            }
            Error::Validation { .. } => false,
        }
    }

    /// Get the invalid field if this is a validation error
    pub fn field(&self) -> Option<&str> {
        match self {
            Error::Validation { field, .. } => field.as_deref(),
            _ => None,
        }
    }
}
