//! # Ticket Catalog
//!
//! The read-only price table every pricing call runs against.
//!
//! ## Schema
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         TicketCatalog                                   │
//! │                                                                         │
//! │  ticket_types: { "general"    → { description, price_in_cents } }      │
//! │                { "membership" → { description, price_in_cents } }      │
//! │                                                                         │
//! │  extras:       { "movie"      → { description, price_in_cents } }      │
//! │                { "terrace"    → { description, price_in_cents } }      │
//! │                                                                         │
//! │  price_in_cents is keyed by entrant type: "child", "adult", "senior"   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Ticket types and extras are deliberately two sibling maps rather than
//! one namespace with a reserved "extras" key, so a ticket type can never
//! collide with the extras table.
//!
//! The catalog is configuration, not logic: this crate never loads or
//! parses it. Callers deserialize it (serde) and pass a reference in.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::money::Money;

/// One admission tier: a display description plus per-entrant prices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketTypeEntry {
    /// Display name shown on the receipt, e.g. "General Admission".
    pub description: String,

    /// Price in cents keyed by entrant type, e.g. {"adult": 3000}.
    pub price_in_cents: BTreeMap<String, i64>,
}

impl TicketTypeEntry {
    /// Looks up the price for an entrant type.
    pub fn price_for(&self, entrant_type: &str) -> Option<Money> {
        self.price_in_cents
            .get(entrant_type)
            .map(|&cents| Money::from_cents(cents))
    }
}

/// One optional add-on: a display description plus per-entrant prices.
///
/// Same shape as [`TicketTypeEntry`], kept as its own type because the
/// two live in different namespaces and render differently on receipts
/// (extras get an " Access" suffix).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtraEntry {
    /// Display name, e.g. "Movie" (rendered as "Movie Access").
    pub description: String,

    /// Price in cents keyed by entrant type.
    pub price_in_cents: BTreeMap<String, i64>,
}

impl ExtraEntry {
    /// Looks up the price for an entrant type.
    pub fn price_for(&self, entrant_type: &str) -> Option<Money> {
        self.price_in_cents
            .get(entrant_type)
            .map(|&cents| Money::from_cents(cents))
    }

    /// The label this extra gets on a receipt line.
    pub fn receipt_label(&self) -> String {
        format!("{} Access", self.description)
    }
}

/// The full price table: admission tiers plus optional extras.
///
/// Immutable for the duration of any pricing call. `BTreeMap` keeps
/// iteration deterministic, which keeps serialized catalogs diffable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketCatalog {
    /// Admission tiers keyed by ticket-type name.
    pub ticket_types: BTreeMap<String, TicketTypeEntry>,

    /// Optional add-ons keyed by extra name.
    pub extras: BTreeMap<String, ExtraEntry>,
}

impl TicketCatalog {
    /// Looks up a ticket type by name.
    pub fn ticket_type(&self, name: &str) -> Option<&TicketTypeEntry> {
        self.ticket_types.get(name)
    }

    /// Looks up an extra by name.
    pub fn extra(&self, name: &str) -> Option<&ExtraEntry> {
        self.extras.get(name)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
