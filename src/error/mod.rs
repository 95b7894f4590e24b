//! Error types for woo-seed.
//!
//! Uses `thiserror` for structured error types that map to exit codes.
//!
//! ## Error Taxonomy
//!
//! Errors are categorized into five categories:
//! - **Network**: Connection, timeout, or transport failures talking to the store
//! - **Remote**: The store answered, but rejected the request or a batch item
//! - **Reference**: A fixture names a category, tag or attribute that was never created
//! - **Configuration**: Config file parsing, validation, or bad flag values
//! - **Internal**: I/O, serialization, and anything unclassified
//!
//! Each error has a stable error code (e.g., `WSEED-N001`) for programmatic handling.

use thiserror::Error;

// =============================================================================
// Error Categories
// =============================================================================

/// High-level error categories for classification and reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Transport issues (timeout, DNS, connection refused).
    Network,
    /// The store returned an error status or rejected a batch item.
    Remote,
    /// Cross-reference resolution failed between fixture groups.
    Reference,
    /// Configuration issues (parse errors, invalid values).
    Configuration,
    /// Internal errors (I/O, serialization, unclassified).
    Internal,
}

impl ErrorCategory {
    /// Returns a human-readable description of the category.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Network => "Network error",
            Self::Remote => "Store API error",
            Self::Reference => "Reference error",
            Self::Configuration => "Configuration error",
            Self::Internal => "Internal error",
        }
    }

    /// Returns a short code prefix for this category.
    #[must_use]
    pub const fn code_prefix(&self) -> &'static str {
        match self {
            Self::Network => "N",
            Self::Remote => "R",
            Self::Reference => "F",
            Self::Configuration => "C",
            Self::Internal => "X",
        }
    }
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

// =============================================================================
// Exit Codes
// =============================================================================

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// Remote failure, partial seed, or unexpected failure
    GeneralError = 1,
    /// Configuration or response parse errors
    ParseError = 3,
    /// Timeout
    Timeout = 4,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as Self
    }
}

/// Main error type for woo-seed operations.
#[derive(Error, Debug)]
pub enum SeedError {
    // ==========================================================================
    // Network errors (Category: Network)
    // ==========================================================================
    /// Request timed out.
    #[error("request timeout after {0} seconds")]
    Timeout(u64),

    /// Generic transport failure.
    #[error("network error: {0}")]
    Network(String),

    // ==========================================================================
    // Remote errors (Category: Remote)
    // ==========================================================================
    /// The store answered with a non-success status.
    #[error("{method} {endpoint} failed with HTTP {status}: {message}")]
    Api {
        method: String,
        endpoint: String,
        status: u16,
        /// WooCommerce error code (e.g. `woocommerce_rest_cannot_create`), when present.
        code: Option<String>,
        message: String,
    },

    /// A batch endpoint returned 200 but rejected one of the items.
    #[error("{endpoint} rejected a batch item ({code}): {message}")]
    BatchItemRejected {
        endpoint: String,
        code: String,
        message: String,
    },

    /// Failed to decode a store response.
    #[error("failed to parse response: {0}")]
    ParseResponse(String),

    // ==========================================================================
    // Reference errors (Category: Reference)
    // ==========================================================================
    /// A fixture references a resource by a name that was never created.
    #[error("{kind} \"{name}\" referenced by a fixture was not created")]
    MissingReference { kind: String, name: String },

    /// A stage was skipped because a group it depends on failed.
    #[error("{stage} skipped: dependency {dependency} failed")]
    DependencyFailed { stage: String, dependency: String },

    /// Some fixture groups failed.
    #[error("partial failure: {failed} fixture group(s) failed")]
    PartialFailure { failed: usize },

    // ==========================================================================
    // Configuration errors (Category: Configuration)
    // ==========================================================================
    /// Generic configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Invalid value for a configuration key.
    #[error("invalid config value for '{key}': {message}")]
    ConfigInvalid {
        key: String,
        value: String,
        message: String,
    },

    // ==========================================================================
    // Internal errors (Category: Internal)
    // ==========================================================================
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Catch-all for other errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SeedError {
    /// Map error to process exit code.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self {
            Self::Config(_) | Self::ConfigInvalid { .. } | Self::ParseResponse(_) => {
                ExitCode::ParseError
            }

            Self::Timeout(_) => ExitCode::Timeout,

            Self::Network(_)
            | Self::Api { .. }
            | Self::BatchItemRejected { .. }
            | Self::MissingReference { .. }
            | Self::DependencyFailed { .. }
            | Self::PartialFailure { .. }
            | Self::Io(_)
            | Self::Json(_)
            | Self::Other(_) => ExitCode::GeneralError,
        }
    }

    /// Returns the error category for classification and reporting.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::Timeout(_) | Self::Network(_) => ErrorCategory::Network,

            Self::Api { .. } | Self::BatchItemRejected { .. } | Self::ParseResponse(_) => {
                ErrorCategory::Remote
            }

            Self::MissingReference { .. }
            | Self::DependencyFailed { .. }
            | Self::PartialFailure { .. } => ErrorCategory::Reference,

            Self::Config(_) | Self::ConfigInvalid { .. } => ErrorCategory::Configuration,

            Self::Io(_) | Self::Json(_) | Self::Other(_) => ErrorCategory::Internal,
        }
    }

    /// Returns a stable error code for programmatic handling.
    ///
    /// Format: `WSEED-{category}{number}`.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            // Network errors (N001-N099)
            Self::Timeout(_) => "WSEED-N001",
            Self::Network(_) => "WSEED-N099",

            // Remote errors (R001-R099)
            Self::Api { .. } => "WSEED-R001",
            Self::BatchItemRejected { .. } => "WSEED-R002",
            Self::ParseResponse(_) => "WSEED-R020",

            // Reference errors (F001-F099)
            Self::MissingReference { .. } => "WSEED-F001",
            Self::DependencyFailed { .. } => "WSEED-F002",
            Self::PartialFailure { .. } => "WSEED-F030",

            // Configuration errors (C001-C099)
            Self::Config(_) => "WSEED-C001",
            Self::ConfigInvalid { .. } => "WSEED-C002",

            // Internal errors (X001-X099)
            Self::Io(_) => "WSEED-X001",
            Self::Json(_) => "WSEED-X002",
            Self::Other(_) => "WSEED-X099",
        }
    }

    /// Returns whether the error is potentially recoverable by rerunning.
    ///
    /// Server-side 5xx and 429 responses count as transient; other API
    /// statuses do not.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Timeout(_) | Self::Network(_) => true,
            Self::Api { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    /// Returns the WooCommerce error code carried by a remote error.
    #[must_use]
    pub fn remote_code(&self) -> Option<&str> {
        match self {
            Self::Api { code, .. } => code.as_deref(),
            Self::BatchItemRejected { code, .. } => Some(code),
            _ => None,
        }
    }
}

/// Result type alias for woo-seed operations.
pub type Result<T> = std::result::Result<T, SeedError>;
