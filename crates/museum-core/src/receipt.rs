//! # Batch Receipt Builder
//!
//! Turns an ordered batch of ticket requests into a printable receipt.
//!
//! ## Receipt Shape
//! ```text
//! Thank you for visiting the Dinosaur Museum!
//! -------------------------------------------
//! Adult General Admission: $50.00 (Movie Access, Terrace Access)
//! Senior General Admission: $35.00 (Terrace Access)
//! -------------------------------------------
//! TOTAL: $85.00
//! ```
//!
//! The batch is all-or-nothing: the first invalid request aborts the
//! whole receipt and its error is the only output. Partial receipts are
//! never produced.

use crate::catalog::TicketCatalog;
use crate::error::PricingResult;
use crate::money::Money;
use crate::pricing::quote_ticket;
use crate::types::{TicketQuote, TicketRequest};

/// Receipt header line.
pub const RECEIPT_HEADER: &str = "Thank you for visiting the Dinosaur Museum!";

/// Separator line, same width as the header.
pub const RECEIPT_SEPARATOR: &str = "-------------------------------------------";

/// Builds the full receipt for a batch of purchases.
///
/// Each request is quoted exactly once; the quote supplies both the
/// price added to the running total and the display data for its line.
/// The first invalid request short-circuits the batch, discarding any
/// lines already built.
pub fn build_receipt(
    catalog: &TicketCatalog,
    purchases: &[TicketRequest],
) -> PricingResult<String> {
    let mut lines = vec![RECEIPT_HEADER.to_string(), RECEIPT_SEPARATOR.to_string()];
    let mut total = Money::zero();

    for request in purchases {
        let quote = quote_ticket(catalog, request)?;
        total += quote.total;
        lines.push(purchase_line(&quote));
    }

    lines.push(RECEIPT_SEPARATOR.to_string());
    lines.push(format!("TOTAL: {total}"));

    Ok(lines.join("\n"))
}

/// One receipt line: `"Child General Admission: $45.00 (Movie Access)"`.
/// The extras parenthetical is omitted entirely when there are none.
fn purchase_line(quote: &TicketQuote) -> String {
    let note = quote.extras_note();
    if note.is_empty() {
        format!("{} {}: {}", quote.entrant_label, quote.description, quote.total)
    } else {
        format!(
            "{} {}: {} {}",
            quote.entrant_label, quote.description, quote.total, note
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
