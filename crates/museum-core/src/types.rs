//! # Domain Types
//!
//! Request and quote types that flow through the pricer.
//!
//! ## Type Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  TicketRequest ──► pricing::quote_ticket ──► TicketQuote               │
//! │  (caller input)    (validate + price,        (price AND display        │
//! │                     single pass)              data, frozen)            │
//! │                                                                         │
//! │  The receipt builder renders TicketQuotes; it never goes back to       │
//! │  the catalog, so the price path and the display path cannot diverge.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::money::Money;

/// A single ticket purchase as submitted by the caller.
///
/// No identity beyond its field values; built per purchase, consumed once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketRequest {
    /// Ticket-type name, e.g. "general". Must be a catalog key.
    pub ticket_type: String,

    /// Entrant-type name, e.g. "adult". Prices vary per entrant.
    pub entrant_type: String,

    /// Extra names in purchase order. Order is preserved on the receipt;
    /// duplicates are allowed and each occurrence is charged.
    #[serde(default)]
    pub extras: Vec<String>,
}

impl TicketRequest {
    /// Convenience constructor, mostly for tests and examples.
    pub fn new(
        ticket_type: impl Into<String>,
        entrant_type: impl Into<String>,
        extras: &[&str],
    ) -> Self {
        TicketRequest {
            ticket_type: ticket_type.into(),
            entrant_type: entrant_type.into(),
            extras: extras.iter().map(|e| e.to_string()).collect(),
        }
    }
}

/// The result of one validation-and-pricing pass over a request.
///
/// Everything the receipt needs is captured here, so each request is
/// validated and priced exactly once.
#[derive(Debug, Clone, Serialize)]
pub struct TicketQuote {
    /// Entrant label as it appears on the receipt ("adult" → "Adult").
    pub entrant_label: String,

    /// The ticket type's display description, e.g. "General Admission".
    pub description: String,

    /// Rendered extra labels in request order, e.g. ["Movie Access"].
    pub extra_labels: Vec<String>,

    /// Total price: base admission plus all extras.
    pub total: Money,
}

impl TicketQuote {
    /// The parenthesized extras note, or the empty string when the
    /// request had no extras.
    pub fn extras_note(&self) -> String {
        if self.extra_labels.is_empty() {
            String::new()
        } else {
            format!("({})", self.extra_labels.join(", "))
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
