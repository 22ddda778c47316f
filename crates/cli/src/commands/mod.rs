//! CLI subcommands.

use std::io;
use std::path::{Path, PathBuf};

use order_desk_core::{OrderDocument, OrderDraft, ValidationError};
use thiserror::Error;
use tracing::debug;

pub mod summarize;
pub mod validate;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The order file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The order file is not valid JSON for an order document.
    #[error("Invalid order document: {0}")]
    Json(#[from] serde_json::Error),

    /// The order document failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Writing to the output failed.
    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// Read, parse and validate an order document.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not a JSON order
/// document, or fails validation.
pub fn load_document(path: &Path) -> Result<OrderDocument, CommandError> {
    let content = std::fs::read_to_string(path).map_err(|source| CommandError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let document = parse_document(&content)?;
    debug!(path = %path.display(), "Loaded order document");
    Ok(document)
}

/// Parse and validate an order document from JSON text.
fn parse_document(content: &str) -> Result<OrderDocument, CommandError> {
    let draft: OrderDraft = serde_json::from_str(content)?;
    Ok(draft.resolve()?)
}

#[cfg(test)]
pub(crate) mod fixtures {
    use order_desk_core::OrderDocument;

    pub const ORDER_JSON: &str = r#"{
        "orderId": "O1001",
        "customer": { "customerId": "123", "name": "John Doe", "email": "john@example.com" },
        "product": { "productId": "P101", "name": "Laptop", "price": "999.99" },
        "quantity": 2
    }"#;

    #[allow(clippy::unwrap_used)]
    pub fn document() -> OrderDocument {
        super::parse_document(ORDER_JSON).unwrap()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_document() {
        let document = parse_document(fixtures::ORDER_JSON).unwrap();
        assert_eq!(document.order().order_id().as_str(), "O1001");
    }

    #[test]
    fn test_parse_invalid_json() {
        let err = parse_document("{ not json").unwrap_err();
        assert!(matches!(err, CommandError::Json(_)));
    }

    #[test]
    fn test_parse_wrong_type() {
        let err = parse_document(r#"{ "orderId": 42 }"#).unwrap_err();
        assert!(matches!(err, CommandError::Json(_)));
    }

    #[test]
    fn test_parse_validation_error() {
        let err = parse_document(r#"{ "orderId": "" }"#).unwrap_err();
        assert!(matches!(
            err,
            CommandError::Validation(ValidationError::MissingOrderId)
        ));
        assert_eq!(err.to_string(), "Order ID is required");
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_document(Path::new("does/not/exist.json")).unwrap_err();
        assert!(matches!(err, CommandError::Read { .. }));
        assert!(err.to_string().contains("does/not/exist.json"));
    }
}
