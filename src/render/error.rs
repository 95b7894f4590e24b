//! Error rendering.

use serde::Serialize;

use crate::cli::args::OutputFormat;
use crate::error::SeedError;

/// Structured error for JSON output.
#[derive(Debug, Serialize)]
pub struct ErrorJson {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub category: String,
    pub message: String,
    pub retryable: bool,
}

impl ErrorJson {
    #[must_use]
    pub fn from_error(error: &SeedError) -> Self {
        Self {
            error: ErrorBody {
                code: error.error_code(),
                category: error.category().to_string(),
                message: error.to_string(),
                retryable: error.is_retryable(),
            },
        }
    }
}

/// Render an error for stderr in the requested format.
#[must_use]
pub fn render_error(error: &SeedError, format: OutputFormat, pretty: bool) -> String {
    match format {
        OutputFormat::Json => {
            let json = ErrorJson::from_error(error);
            let rendered = if pretty {
                serde_json::to_string_pretty(&json)
            } else {
                serde_json::to_string(&json)
            };
            rendered.unwrap_or_else(|_| render_simple(error))
        }
        OutputFormat::Human => render_simple(error),
    }
}

fn render_simple(error: &SeedError) -> String {
    format!("error[{}]: {error}", error.error_code())
}
