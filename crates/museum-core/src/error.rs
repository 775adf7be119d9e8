//! # Error Types
//!
//! Domain-specific error types for museum-core.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors are enum variants carrying the offending value, never bare strings
//! 3. A price of zero is a valid success value; errors must never share the
//!    success channel
//!
//! The first three variants keep the exact user-facing text the ticket
//! counter software has always shown, so receipts and error output stay
//! byte-for-byte compatible.

use thiserror::Error;

/// A ticket request failed validation against the catalog.
///
/// All variants are input-validation errors: never transient, never
/// retryable, never fatal to the process. The pricer reports the first
/// violated rule and stops; errors are not aggregated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// The requested ticket type is not in the catalog.
    #[error("Ticket type '{0}' cannot be found.")]
    UnknownTicketType(String),

    /// The requested entrant type has no price under that ticket type.
    #[error("Entrant type '{0}' cannot be found.")]
    UnknownEntrantType(String),

    /// An extra named in the request is not in the catalog.
    /// Carries the first unknown extra in request order.
    #[error("Extra type '{0}' cannot be found.")]
    UnknownExtra(String),

    /// The extra exists but its price map has no entry for the entrant.
    ///
    /// ## When This Occurs
    /// Only with a malformed catalog: the entrant type was valid at the
    /// ticket-type level but an extra omits it. Surfaced as a typed
    /// error rather than a panic or a silent zero.
    #[error("Extra '{extra}' has no price for entrant type '{entrant}'.")]
    MissingExtraPrice { extra: String, entrant: String },
}

/// Convenience type alias for Results with PricingError.
pub type PricingResult<T> = Result<T, PricingError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Message text is part of the public contract; keep it byte-exact.
    #[test]
    fn test_error_messages() {
        assert_eq!(
            PricingError::UnknownTicketType("discount".to_string()).to_string(),
            "Ticket type 'discount' cannot be found."
        );
        assert_eq!(
            PricingError::UnknownEntrantType("kid".to_string()).to_string(),
            "Entrant type 'kid' cannot be found."
        );
        assert_eq!(
            PricingError::UnknownExtra("parking".to_string()).to_string(),
            "Extra type 'parking' cannot be found."
        );
    }

    #[test]
    fn test_missing_extra_price_message() {
        let err = PricingError::MissingExtraPrice {
            extra: "movie".to_string(),
            entrant: "infant".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Extra 'movie' has no price for entrant type 'infant'."
        );
    }
}
