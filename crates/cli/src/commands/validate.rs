//! Check an order document and report the first validation error.

use std::io::Write;
use std::path::Path;

use order_desk_core::OrderDocument;

use super::{CommandError, load_document};

/// Validate the order document at `path`, writing a one-line verdict to `out`.
///
/// # Errors
///
/// Returns the load or validation error after reporting it, so the process
/// exits non-zero for invalid documents.
pub fn run(path: &Path, out: &mut impl Write) -> Result<(), CommandError> {
    report(load_document(path), out)
}

fn report(
    loaded: Result<OrderDocument, CommandError>,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    match loaded {
        Ok(document) => {
            writeln!(out, "ok: order {} is valid", document.order().order_id())?;
            Ok(())
        }
        Err(CommandError::Validation(e)) => {
            writeln!(out, "invalid ({}): {e}", e.kind())?;
            Err(e.into())
        }
        Err(e) => Err(e),
    }
}
