//! # museum-core: Pure Pricing Logic for Museum POS
//!
//! This crate prices museum tickets against a catalog and renders
//! receipts, as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Museum POS Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 box-office (CLI application)                    │   │
//! │  │      loads catalog JSON ──► builds receipt ──► prints           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ museum-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │   money   │  │  pricing  │  │  receipt  │  │   │
//! │  │   │ PriceTable│  │   Money   │  │  quotes   │  │  batches  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • PURE FUNCTIONS                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - The ticket catalog (price table) schema
//! - [`types`] - Request and quote types
//! - [`money`] - Money type with integer-cents arithmetic (no floating point!)
//! - [`error`] - Typed pricing errors
//! - [`pricing`] - Single-ticket validation and pricing
//! - [`receipt`] - Batch receipt rendering
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: every operation is deterministic - same input = same output
//! 2. **No I/O**: the catalog is passed in; this crate never loads or stores it
//! 3. **Integer Money**: all monetary values are cents (i64) to avoid float errors
//! 4. **Explicit Errors**: a $0.00 price is a success; errors are typed variants,
//!    never sentinel values sharing the success channel
//!
//! ## Example Usage
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use museum_core::{price_ticket, TicketCatalog, TicketRequest, TicketTypeEntry};
//!
//! let mut ticket_types = BTreeMap::new();
//! ticket_types.insert(
//!     "general".to_string(),
//!     TicketTypeEntry {
//!         description: "General Admission".to_string(),
//!         price_in_cents: [("adult".to_string(), 3000)].into_iter().collect(),
//!     },
//! );
//! let catalog = TicketCatalog { ticket_types, extras: BTreeMap::new() };
//!
//! let request = TicketRequest::new("general", "adult", &[]);
//! let price = price_ticket(&catalog, &request).unwrap();
//! assert_eq!(price.cents(), 3000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod money;
pub mod pricing;
pub mod receipt;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use museum_core::Money` instead of
// `use museum_core::money::Money`

pub use catalog::{ExtraEntry, TicketCatalog, TicketTypeEntry};
pub use error::{PricingError, PricingResult};
pub use money::Money;
pub use pricing::{describe_extras, price_ticket, quote_ticket};
pub use receipt::{build_receipt, RECEIPT_HEADER, RECEIPT_SEPARATOR};
pub use types::{TicketQuote, TicketRequest};
