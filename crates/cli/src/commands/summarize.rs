//! Print the summary of an order document.
//!
//! # Usage
//!
//! ```bash
//! order-desk summarize order.json
//! order-desk summarize order.json --format json
//! ```

use std::io::Write;
use std::path::Path;

use order_desk_core::OrderDocument;
use serde::Serialize;
use tracing::info;

use super::{CommandError, load_document};
use crate::config::OutputFormat;

/// JSON shape of `summarize --format json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SummaryReport<'a> {
    order_id: &'a str,
    summary: String,
    total_cost: String,
}

/// Load the order document at `path` and write its summary to `out`.
///
/// # Errors
///
/// Returns an error if the document cannot be loaded or validated, or if
/// writing fails.
pub fn run(path: &Path, format: OutputFormat, out: &mut impl Write) -> Result<(), CommandError> {
    let document = load_document(path)?;
    render(&document, format, out)
}

fn render(
    document: &OrderDocument,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    let order = document.order();

    match format {
        OutputFormat::Text => writeln!(out, "{}", order.generate_order_summary())?,
        OutputFormat::Json => {
            let report = SummaryReport {
                order_id: order.order_id().as_str(),
                summary: order.generate_order_summary(),
                total_cost: order.format_total_cost(),
            };
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
    }

    info!(order_id = %order.order_id(), ?format, "Summarized order");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::commands::fixtures;

    #[test]
    fn test_render_text() {
        let mut out = Vec::new();
        render(&fixtures::document(), OutputFormat::Text, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Order O1001: Customer 123: John Doe <john@example.com> purchased \
             2 x Product P101: Laptop ($999.99). Total: $1999.98\n"
        );
    }

    #[test]
    fn test_render_json() {
        let mut out = Vec::new();
        render(&fixtures::document(), OutputFormat::Json, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["orderId"], "O1001");
        assert_eq!(value["totalCost"], "1999.98");
        assert!(
            value["summary"]
                .as_str()
                .unwrap()
                .ends_with("Total: $1999.98")
        );
    }
}
