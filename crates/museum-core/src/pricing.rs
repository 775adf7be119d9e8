//! # Single-Ticket Pricing
//!
//! Validates a [`TicketRequest`] against a [`TicketCatalog`] and prices it.
//!
//! ## Validation Order (first failure wins)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  quote_ticket(catalog, request)                                         │
//! │                                                                         │
//! │  1. ticket_type in catalog?      ──no──► UnknownTicketType             │
//! │  2. entrant_type priced there?   ──no──► UnknownEntrantType            │
//! │  3. every extra in catalog?      ──no──► UnknownExtra (first in list)  │
//! │  4. every extra priced for the   ──no──► MissingExtraPrice             │
//! │     entrant?                                                            │
//! │                                                                         │
//! │  OK ──► TicketQuote { total = base + Σ extras, display labels }         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The order is a contract: an unknown ticket type is always reported
//! before an unknown entrant type, which is always reported before an
//! unknown extra, regardless of how many fields are actually bad.
//!
//! Everything here is a pure function: same inputs, same output, no
//! side effects.

use crate::catalog::TicketCatalog;
use crate::error::{PricingError, PricingResult};
use crate::money::Money;
use crate::types::{TicketQuote, TicketRequest};

/// Validates and prices a request in a single pass.
///
/// This is the one place validation lives. [`price_ticket`] and the
/// receipt builder are layers over it, so the price a customer is
/// charged and the line printed for them can never disagree.
pub fn quote_ticket(
    catalog: &TicketCatalog,
    request: &TicketRequest,
) -> PricingResult<TicketQuote> {
    let entry = catalog
        .ticket_type(&request.ticket_type)
        .ok_or_else(|| PricingError::UnknownTicketType(request.ticket_type.clone()))?;

    let base = entry
        .price_for(&request.entrant_type)
        .ok_or_else(|| PricingError::UnknownEntrantType(request.entrant_type.clone()))?;

    // Resolve every extra name before touching prices, so an unknown
    // extra is reported ahead of a missing price on an earlier extra.
    let mut resolved = Vec::with_capacity(request.extras.len());
    for name in &request.extras {
        let extra = catalog
            .extra(name)
            .ok_or_else(|| PricingError::UnknownExtra(name.clone()))?;
        resolved.push((name.as_str(), extra));
    }

    let mut total = base;
    let mut extra_labels = Vec::with_capacity(resolved.len());
    for (name, extra) in resolved {
        let price =
            extra
                .price_for(&request.entrant_type)
                .ok_or_else(|| PricingError::MissingExtraPrice {
                    extra: name.to_string(),
                    entrant: request.entrant_type.clone(),
                })?;
        total += price;
        extra_labels.push(extra.receipt_label());
    }

    Ok(TicketQuote {
        entrant_label: capitalize(&request.entrant_type),
        description: entry.description.clone(),
        extra_labels,
        total,
    })
}

/// Prices a single ticket: base admission plus each listed extra.
///
/// ## Example
/// ```rust,ignore
/// let price = price_ticket(&catalog, &TicketRequest::new("general", "adult", &[]))?;
/// assert_eq!(price.cents(), 3000);
/// ```
pub fn price_ticket(catalog: &TicketCatalog, request: &TicketRequest) -> PricingResult<Money> {
    quote_ticket(catalog, request).map(|quote| quote.total)
}

/// Renders the extras portion of a receipt line for a request.
///
/// Returns `"(Movie Access, Terrace Access)"` with labels in request
/// order, or the empty string when the request has no extras. Only the
/// extras are validated here; the ticket and entrant types are not
/// consulted.
pub fn describe_extras(
    catalog: &TicketCatalog,
    request: &TicketRequest,
) -> PricingResult<String> {
    let mut labels = Vec::with_capacity(request.extras.len());
    for name in &request.extras {
        let extra = catalog
            .extra(name)
            .ok_or_else(|| PricingError::UnknownExtra(name.clone()))?;
        labels.push(extra.receipt_label());
    }

    if labels.is_empty() {
        Ok(String::new())
    } else {
        Ok(format!("({})", labels.join(", ")))
    }
}

/// Receipt capitalization: first character uppercased, rest lowercased.
/// "child" → "Child", "ADULT" → "Adult".
fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ExtraEntry, TicketTypeEntry};
    use std::collections::BTreeMap;

    fn prices(list: &[(&str, i64)]) -> BTreeMap<String, i64> {
        list.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    /// The Dinosaur Museum price table.
    fn dino_catalog() -> TicketCatalog {
        let mut ticket_types = BTreeMap::new();
        ticket_types.insert(
            "general".to_string(),
            TicketTypeEntry {
                description: "General Admission".to_string(),
                price_in_cents: prices(&[("child", 2000), ("adult", 3000), ("senior", 2500)]),
            },
        );
        ticket_types.insert(
            "membership".to_string(),
            TicketTypeEntry {
                description: "Membership Admission".to_string(),
                price_in_cents: prices(&[("child", 1500), ("adult", 2800), ("senior", 2500)]),
            },
        );

        let mut extras = BTreeMap::new();
        extras.insert(
            "movie".to_string(),
            ExtraEntry {
                description: "Movie".to_string(),
                price_in_cents: prices(&[("child", 1000), ("adult", 1000), ("senior", 1000)]),
            },
        );
        extras.insert(
            "education".to_string(),
            ExtraEntry {
                description: "Education".to_string(),
                price_in_cents: prices(&[("child", 1000), ("adult", 1200), ("senior", 1200)]),
            },
        );
        extras.insert(
            "terrace".to_string(),
            ExtraEntry {
                description: "Terrace".to_string(),
                price_in_cents: prices(&[("child", 500), ("adult", 1000), ("senior", 1000)]),
            },
        );

        TicketCatalog {
            ticket_types,
            extras,
        }
    }

    #[test]
    fn test_base_price_no_extras() {
        let catalog = dino_catalog();
        let request = TicketRequest::new("general", "adult", &[]);
        assert_eq!(
            price_ticket(&catalog, &request),
            Ok(Money::from_cents(3000))
        );
    }

    #[test]
    fn test_price_with_extra() {
        let catalog = dino_catalog();
        let request = TicketRequest::new("membership", "child", &["movie"]);
        assert_eq!(
            price_ticket(&catalog, &request),
            Ok(Money::from_cents(2500))
        );
    }

    #[test]
    fn test_duplicate_extras_each_charged() {
        let catalog = dino_catalog();
        let request = TicketRequest::new("general", "child", &["movie", "movie"]);
        // 2000 + 1000 + 1000
        assert_eq!(
            price_ticket(&catalog, &request),
            Ok(Money::from_cents(4000))
        );
    }

    #[test]
    fn test_unknown_ticket_type() {
        let catalog = dino_catalog();
        let request = TicketRequest::new("discount", "adult", &["movie"]);
        assert_eq!(
            price_ticket(&catalog, &request),
            Err(PricingError::UnknownTicketType("discount".to_string()))
        );
    }

    #[test]
    fn test_unknown_entrant_type_beats_extras() {
        let catalog = dino_catalog();
        // The extras would fail for "kid" too, but the entrant check fires first.
        let request = TicketRequest::new("general", "kid", &["movie"]);
        assert_eq!(
            price_ticket(&catalog, &request),
            Err(PricingError::UnknownEntrantType("kid".to_string()))
        );
    }

    #[test]
    fn test_unknown_ticket_type_beats_everything() {
        let catalog = dino_catalog();
        // Every field is bad; only the ticket type is reported.
        let request = TicketRequest::new("backstage", "kid", &["parking"]);
        assert_eq!(
            price_ticket(&catalog, &request),
            Err(PricingError::UnknownTicketType("backstage".to_string()))
        );
    }

    #[test]
    fn test_first_unknown_extra_in_list_order() {
        let catalog = dino_catalog();
        let request = TicketRequest::new("general", "adult", &["movie", "parking", "valet"]);
        assert_eq!(
            price_ticket(&catalog, &request),
            Err(PricingError::UnknownExtra("parking".to_string()))
        );
    }

    #[test]
    fn test_unknown_extra_beats_missing_extra_price() {
        let mut catalog = dino_catalog();
        // "movie" loses its adult price; a later extra is unknown entirely.
        catalog
            .extras
            .get_mut("movie")
            .unwrap()
            .price_in_cents
            .remove("adult");
        let request = TicketRequest::new("general", "adult", &["movie", "parking"]);
        assert_eq!(
            price_ticket(&catalog, &request),
            Err(PricingError::UnknownExtra("parking".to_string()))
        );

        // With no unknown extras, the missing price surfaces.
        let request = TicketRequest::new("general", "adult", &["movie"]);
        assert_eq!(
            price_ticket(&catalog, &request),
            Err(PricingError::MissingExtraPrice {
                extra: "movie".to_string(),
                entrant: "adult".to_string(),
            })
        );
    }

    #[test]
    fn test_pricer_is_pure() {
        let catalog = dino_catalog();
        let request = TicketRequest::new("general", "senior", &["terrace"]);
        let first = price_ticket(&catalog, &request);
        let second = price_ticket(&catalog, &request);
        assert_eq!(first, second);
        assert_eq!(first, Ok(Money::from_cents(3500)));
    }

    #[test]
    fn test_quote_carries_display_data() {
        let catalog = dino_catalog();
        let request = TicketRequest::new("general", "adult", &["movie", "terrace"]);
        let quote = quote_ticket(&catalog, &request).unwrap();
        assert_eq!(quote.entrant_label, "Adult");
        assert_eq!(quote.description, "General Admission");
        assert_eq!(quote.extra_labels, vec!["Movie Access", "Terrace Access"]);
        assert_eq!(quote.total, Money::from_cents(5000));
    }

    #[test]
    fn test_entrant_lookup_is_case_sensitive() {
        let catalog = dino_catalog();
        // Catalog keys are lowercase; "ADULT" is a different key entirely.
        let request = TicketRequest::new("general", "ADULT", &[]);
        assert_eq!(
            quote_ticket(&catalog, &request).unwrap_err(),
            PricingError::UnknownEntrantType("ADULT".to_string())
        );
    }

    #[test]
    fn test_describe_extras() {
        let catalog = dino_catalog();

        let request = TicketRequest::new("general", "child", &["education", "movie", "terrace"]);
        assert_eq!(
            describe_extras(&catalog, &request),
            Ok("(Education Access, Movie Access, Terrace Access)".to_string())
        );

        // Empty extras render as the empty string.
        let request = TicketRequest::new("general", "child", &[]);
        assert_eq!(describe_extras(&catalog, &request), Ok(String::new()));

        // Only the extras are checked; the bogus ticket type is ignored here.
        let request = TicketRequest::new("bogus", "child", &["parking"]);
        assert_eq!(
            describe_extras(&catalog, &request),
            Err(PricingError::UnknownExtra("parking".to_string()))
        );
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("child"), "Child");
        assert_eq!(capitalize("ADULT"), "Adult");
        assert_eq!(capitalize("sEnIoR"), "Senior");
        assert_eq!(capitalize(""), "");
    }
}
